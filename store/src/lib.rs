//! Proposal storage for the ballot governance engine.
//!
//! The engine depends only on the [`ProposalStore`] trait. The bundled
//! [`MemoryProposalStore`] keeps records in process; persistent backends
//! implement the same trait.

pub mod error;
pub mod memory;
pub mod proposal;

pub use error::StoreError;
pub use memory::MemoryProposalStore;
pub use proposal::ProposalStore;
