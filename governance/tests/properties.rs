//! Property tests over arbitrary operation sequences.

mod common;

use ballot_types::{ProposalId, TokenAmount};
use common::{account, harness, tokens};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    /// Ids are 1..=n in creation order, with failed (empty) descriptions
    /// leaving no gaps.
    #[test]
    fn ids_are_consecutive(descriptions in prop::collection::vec("[a-z ]{0,12}", 1..40)) {
        let h = harness(60, 50);
        let proposer = account("p");
        let mut expected = 1u64;
        for d in &descriptions {
            match h.engine.create_proposal(&proposer, d) {
                Ok(id) => {
                    prop_assert_eq!(id, ProposalId::new(expected));
                    expected += 1;
                }
                Err(_) => prop_assert!(d.trim().is_empty()),
            }
        }
        prop_assert_eq!(h.engine.proposal_count().unwrap(), expected - 1);
    }

    /// vote_count equals the sum of balances of distinct yes voters.
    #[test]
    fn vote_count_is_sum_of_distinct_yes_balances(
        balances in prop::collection::vec(0u128..1_000_000, 1..8),
        ballots in prop::collection::vec((0usize..8, any::<bool>()), 0..40),
    ) {
        let h = harness(3_600, 50);
        let voters: Vec<_> = (0..balances.len())
            .map(|i| account(&format!("voter{i}")))
            .collect();
        for (v, b) in voters.iter().zip(&balances) {
            h.fund(v, *b);
        }
        let id = h.engine.create_proposal(&voters[0], "prop").unwrap();

        let mut seen = HashSet::new();
        let mut expected = TokenAmount::ZERO;
        for (idx, support) in ballots {
            let idx = idx % voters.len();
            let result = h.engine.vote(&voters[idx], id, support);
            if seen.insert(idx) {
                prop_assert!(result.is_ok());
                if support {
                    expected = expected.checked_add(tokens(balances[idx])).unwrap();
                }
            } else {
                prop_assert!(result.is_err());
            }
        }

        let p = h.engine.get_proposal(id).unwrap();
        prop_assert_eq!(p.vote_count, expected);
        prop_assert_eq!(p.voter_count(), seen.len());
    }

    /// Execution after the window succeeds iff yes-weight meets quorum.
    #[test]
    fn execution_iff_quorum(
        yes in 0u128..1_000,
        rest in 0u128..1_000,
        pct in 0u8..=100,
    ) {
        let h = harness(60, pct);
        let a = account("a");
        h.fund(&a, yes);
        h.ledger.mint(&account("other"), tokens(rest)).unwrap();
        let id = h.engine.create_proposal(&a, "p").unwrap();
        h.engine.vote(&a, id, true).unwrap();

        prop_assert!(h.engine.execute_proposal(id).unwrap_err().is_transient());
        h.clock.advance(60);

        let quorum = (yes + rest) * u128::from(pct) / 100;
        let result = h.engine.execute_proposal(id);
        prop_assert_eq!(result.is_ok(), yes >= quorum);
        prop_assert_eq!(h.engine.get_proposal(id).unwrap().executed, yes >= quorum);
    }
}
