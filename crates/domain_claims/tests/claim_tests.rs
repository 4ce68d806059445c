//! Comprehensive tests for domain_claims

use core_kernel::ItemId;
use domain_claims::{
    resolve_status_change, Affiliation, Claim, ClaimDraft, ClaimError, ClaimStatus,
};
use domain_items::ItemStatus;

fn ana_draft() -> ClaimDraft {
    ClaimDraft::new(Some("Ana"), Some("receipt attached")).unwrap()
}

// ============================================================================
// Creation Tests
// ============================================================================

mod creation_tests {
    use super::*;

    #[test]
    fn test_submission_starts_pending() {
        let item_id = ItemId::new();
        let claim = Claim::submitted(item_id, ana_draft());

        assert_eq!(claim.status, ClaimStatus::Pending);
        assert_eq!(claim.item_id, item_id);
        assert_eq!(claim.claimant_name, "Ana");
        assert_eq!(claim.details, "receipt attached");
    }

    #[test]
    fn test_optional_fields_default_to_empty_strings() {
        let claim = Claim::submitted(ItemId::new(), ana_draft());

        assert_eq!(claim.affiliation, None);
        assert_eq!(claim.identifier, "");
        assert_eq!(claim.contact, "");
    }

    #[test]
    fn test_draft_rejects_missing_name() {
        let err = ClaimDraft::new(None, Some("receipt")).unwrap_err();
        assert_eq!(err, ClaimError::MissingField("nome"));
    }

    #[test]
    fn test_draft_rejects_blank_details() {
        let err = ClaimDraft::new(Some("Ana"), Some("   ")).unwrap_err();
        assert_eq!(err, ClaimError::MissingField("detalhes"));
    }

    #[test]
    fn test_draft_collects_optional_fields() {
        let draft = ana_draft()
            .with_affiliation(Some("Estudante"))
            .unwrap()
            .with_identifier(Some(" 2021001234 "))
            .with_contact(Some("ana@example.com"));

        assert_eq!(draft.affiliation, Some(Affiliation::Student));
        assert_eq!(draft.identifier, "2021001234");
        assert_eq!(draft.contact, "ana@example.com");
    }

    #[test]
    fn test_unknown_affiliation_is_rejected() {
        let err = ana_draft().with_affiliation(Some("Alien")).unwrap_err();
        assert_eq!(err, ClaimError::UnknownAffiliation("Alien".to_string()));
    }

    #[test]
    fn test_blank_affiliation_stays_absent() {
        let draft = ana_draft().with_affiliation(Some("  ")).unwrap();
        assert_eq!(draft.affiliation, None);
    }
}

// ============================================================================
// Resolution Tests
// ============================================================================

mod resolution_tests {
    use super::*;

    #[test]
    fn test_approval_cascades_to_the_item() {
        let outcome = resolve_status_change(ClaimStatus::Approved);

        assert_eq!(outcome.claim_status, ClaimStatus::Approved);
        assert_eq!(outcome.item_status, Some(ItemStatus::Claimed));
    }

    #[test]
    fn test_rejection_leaves_the_item_alone() {
        let outcome = resolve_status_change(ClaimStatus::Rejected);

        assert_eq!(outcome.claim_status, ClaimStatus::Rejected);
        assert_eq!(outcome.item_status, None);
    }

    #[test]
    fn test_reverting_to_pending_leaves_the_item_alone() {
        // Undoing an approval does not auto-revert the item; that is a
        // manual BackToStock on the item itself.
        let outcome = resolve_status_change(ClaimStatus::Pending);
        assert_eq!(outcome.item_status, None);
    }

    #[test]
    fn test_re_approving_re_triggers_the_cascade() {
        // The current status never enters the decision, so resolving the
        // same claim twice produces the same cascade.
        let first = resolve_status_change(ClaimStatus::Approved);
        let second = resolve_status_change(ClaimStatus::Approved);
        assert_eq!(first, second);
    }
}

// ============================================================================
// Wire Mapping Tests
// ============================================================================

mod wire_tests {
    use super::*;

    #[test]
    fn test_status_wire_labels() {
        assert_eq!(ClaimStatus::Pending.wire_name(), "Pendente");
        assert_eq!(ClaimStatus::Approved.wire_name(), "Aprovada");
        assert_eq!(ClaimStatus::Rejected.wire_name(), "Recusada");
    }

    #[test]
    fn test_status_from_wire_rejects_unknown_labels() {
        assert_eq!(ClaimStatus::from_wire("Aprovado"), None);
        assert_eq!(ClaimStatus::from_wire("pendente"), None);
        assert_eq!(ClaimStatus::from_wire(""), None);
    }

    #[test]
    fn test_status_wire_roundtrip() {
        for status in [
            ClaimStatus::Pending,
            ClaimStatus::Approved,
            ClaimStatus::Rejected,
        ] {
            assert_eq!(ClaimStatus::from_wire(status.wire_name()), Some(status));
        }
    }

    #[test]
    fn test_affiliation_wire_roundtrip() {
        for affiliation in [
            Affiliation::Student,
            Affiliation::Staff,
            Affiliation::Contractor,
            Affiliation::Visitor,
            Affiliation::Other,
        ] {
            assert_eq!(
                Affiliation::from_wire(affiliation.wire_name()),
                Some(affiliation)
            );
        }
    }

    #[test]
    fn test_serde_uses_wire_labels() {
        let json = serde_json::to_string(&ClaimStatus::Approved).unwrap();
        assert_eq!(json, "\"Aprovada\"");

        let affiliation: Affiliation = serde_json::from_str("\"Terceirizado\"").unwrap();
        assert_eq!(affiliation, Affiliation::Contractor);
    }
}
