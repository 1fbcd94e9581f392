//! Errors raised while constructing shared value types.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid account identifier: {0:?}")]
    InvalidAccount(String),

    #[error("invalid governance parameters: {0}")]
    InvalidParams(String),
}
