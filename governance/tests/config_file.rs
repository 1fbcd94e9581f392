//! Building an engine from a TOML file on disk.

use ballot_governance::{GovernanceConfig, GovernanceEngine, SystemClock};
use ballot_nullables::NullLedger;
use ballot_store::MemoryProposalStore;
use ballot_types::AccountId;
use std::io::Write;

#[test]
fn engine_from_config_file_uses_its_params() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "voting_period_secs = 3600\nquorum_percentage = 10\nlog_level = \"debug\"\n"
    )
    .unwrap();

    let cfg = GovernanceConfig::from_toml_file(file.path()).unwrap();
    let engine = GovernanceEngine::new(
        MemoryProposalStore::new(),
        NullLedger::new(),
        SystemClock,
        cfg.params().unwrap(),
    );
    assert_eq!(engine.params().voting_period_secs(), 3600);
    assert_eq!(engine.params().quorum_percentage(), 10);

    let id = engine
        .create_proposal(&AccountId::parse("a").unwrap(), "wall clock")
        .unwrap();
    assert!(engine.execute_proposal(id).unwrap_err().is_transient());
}
