//! Comprehensive tests for domain_items

use chrono::NaiveDate;

use domain_items::{Item, ItemDraft, ItemError, ItemPatch, ItemStatus};

fn wallet_draft() -> ItemDraft {
    ItemDraft::new(Some("Wallet"), Some("Library"), Some("2024-03-01")).unwrap()
}

// ============================================================================
// Creation Tests
// ============================================================================

mod creation_tests {
    use super::*;

    #[test]
    fn test_public_submission_starts_unapproved_in_stock() {
        let item = Item::submitted(wallet_draft());

        assert!(!item.approved);
        assert_eq!(item.status, ItemStatus::InStock);
        assert_eq!(item.name, "Wallet");
        assert_eq!(item.found_location.as_deref(), Some("Library"));
        assert_eq!(
            item.found_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_staff_entry_honors_approval_flag() {
        let item = Item::registered(wallet_draft(), true);
        assert!(item.approved);
        assert_eq!(item.status, ItemStatus::InStock);
    }

    #[test]
    fn test_draft_trims_whitespace() {
        let draft =
            ItemDraft::new(Some("  Umbrella "), Some(" Cafeteria"), Some("2024-05-10")).unwrap();
        assert_eq!(draft.name, "Umbrella");
        assert_eq!(draft.found_location, "Cafeteria");
    }

    #[test]
    fn test_draft_rejects_missing_name() {
        let err = ItemDraft::new(None, Some("Library"), Some("2024-03-01")).unwrap_err();
        assert_eq!(err, ItemError::MissingField("name"));
    }

    #[test]
    fn test_draft_treats_blank_as_missing() {
        let err = ItemDraft::new(Some("   "), Some("Library"), Some("2024-03-01")).unwrap_err();
        assert_eq!(err, ItemError::MissingField("name"));

        let err = ItemDraft::new(Some("Wallet"), Some(""), Some("2024-03-01")).unwrap_err();
        assert_eq!(err, ItemError::MissingField("location"));
    }

    #[test]
    fn test_draft_rejects_malformed_date() {
        let err = ItemDraft::new(Some("Wallet"), Some("Library"), Some("01/03/2024")).unwrap_err();
        assert!(matches!(err, ItemError::InvalidDate(_)));
    }

    #[test]
    fn test_blank_optional_fields_stay_absent() {
        let draft = wallet_draft()
            .with_category(Some("  "))
            .with_description(Some(""));
        assert_eq!(draft.category, None);
        assert_eq!(draft.description, None);

        let draft = wallet_draft().with_category(Some(" Documentos "));
        assert_eq!(draft.category.as_deref(), Some("Documentos"));
    }
}

// ============================================================================
// Transition Tests
// ============================================================================

mod transition_tests {
    use super::*;

    #[test]
    fn test_mark_returned_from_any_status() {
        for start in [ItemStatus::InStock, ItemStatus::Claimed, ItemStatus::Returned] {
            let mut item = Item::submitted(wallet_draft());
            item.status = start;
            item.mark_returned();
            assert_eq!(item.status, ItemStatus::Returned);
        }
    }

    #[test]
    fn test_back_to_stock_from_any_status() {
        for start in [ItemStatus::InStock, ItemStatus::Claimed, ItemStatus::Returned] {
            let mut item = Item::submitted(wallet_draft());
            item.status = start;
            item.back_to_stock();
            assert_eq!(item.status, ItemStatus::InStock);
        }
    }

    #[test]
    fn test_transitions_are_idempotent() {
        let mut item = Item::submitted(wallet_draft());

        item.mark_returned();
        item.mark_returned();
        assert_eq!(item.status, ItemStatus::Returned);

        item.back_to_stock();
        item.back_to_stock();
        assert_eq!(item.status, ItemStatus::InStock);
    }

    #[test]
    fn test_back_to_stock_reverts_a_returned_item() {
        // Returned is terminal in the normal flow but staff can still undo it
        let mut item = Item::submitted(wallet_draft());
        item.mark_returned();
        item.back_to_stock();
        assert_eq!(item.status, ItemStatus::InStock);
    }
}

// ============================================================================
// Visibility Tests
// ============================================================================

mod visibility_tests {
    use super::*;

    #[test]
    fn test_unapproved_item_is_not_public() {
        let item = Item::submitted(wallet_draft());
        assert!(!item.is_publicly_visible());
    }

    #[test]
    fn test_approved_in_stock_item_is_public() {
        let item = Item::registered(wallet_draft(), true);
        assert!(item.is_publicly_visible());
    }

    #[test]
    fn test_claimed_or_returned_items_leave_the_public_listing() {
        let mut item = Item::registered(wallet_draft(), true);
        item.mark_claimed();
        assert!(!item.is_publicly_visible());

        item.mark_returned();
        assert!(!item.is_publicly_visible());
    }
}

// ============================================================================
// Patch Tests
// ============================================================================

mod patch_tests {
    use super::*;

    #[test]
    fn test_blank_required_fields_mean_no_change() {
        let mut item = Item::submitted(wallet_draft());
        let patch =
            ItemPatch::from_fields(Some("  "), Some(""), Some("   "), None, None, None).unwrap();

        item.apply(patch);
        assert_eq!(item.name, "Wallet");
        assert_eq!(item.found_location.as_deref(), Some("Library"));
        assert_eq!(
            item.found_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_present_fields_overwrite() {
        let mut item = Item::submitted(wallet_draft());
        let patch = ItemPatch::from_fields(
            Some("Blue wallet"),
            Some("Front desk"),
            Some("2024-04-02"),
            None,
            None,
            Some(true),
        )
        .unwrap();

        item.apply(patch);
        assert_eq!(item.name, "Blue wallet");
        assert_eq!(item.found_location.as_deref(), Some("Front desk"));
        assert_eq!(
            item.found_date,
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap()
        );
        assert!(item.approved);
    }

    #[test]
    fn test_blank_category_clears_to_absent() {
        let mut item = Item::submitted(wallet_draft().with_category(Some("Documentos")));
        let patch = ItemPatch::from_fields(None, None, None, Some(""), None, None).unwrap();

        item.apply(patch);
        assert_eq!(item.category, None);
    }

    #[test]
    fn test_blank_description_clears_to_absent() {
        let mut item = Item::submitted(wallet_draft().with_description(Some("brown leather")));
        let patch = ItemPatch::from_fields(None, None, None, None, Some("  "), None).unwrap();

        item.apply(patch);
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_absent_category_is_untouched() {
        let mut item = Item::submitted(wallet_draft().with_category(Some("Documentos")));
        let patch = ItemPatch::from_fields(Some("Card holder"), None, None, None, None, None).unwrap();

        item.apply(patch);
        assert_eq!(item.category.as_deref(), Some("Documentos"));
    }

    #[test]
    fn test_malformed_date_fails_the_whole_patch() {
        let result = ItemPatch::from_fields(
            Some("Blue wallet"),
            None,
            Some("yesterday"),
            None,
            None,
            None,
        );
        assert!(matches!(result, Err(ItemError::InvalidDate(_))));
    }

    #[test]
    fn test_empty_patch_is_detected() {
        let patch = ItemPatch::from_fields(None, None, None, None, None, None).unwrap();
        assert!(patch.is_empty());
    }
}

// ============================================================================
// Wire Mapping Tests
// ============================================================================

mod wire_tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wire_labels() {
        assert_eq!(ItemStatus::InStock.wire_name(), "Em estoque");
        assert_eq!(ItemStatus::Claimed.wire_name(), "Reivindicado");
        assert_eq!(ItemStatus::Returned.wire_name(), "Devolvido");
    }

    #[test]
    fn test_from_wire_rejects_unknown_labels() {
        assert_eq!(ItemStatus::from_wire("Perdido"), None);
        assert_eq!(ItemStatus::from_wire("em estoque"), None);
        assert_eq!(ItemStatus::from_wire(""), None);
    }

    #[test]
    fn test_serde_uses_wire_labels() {
        let json = serde_json::to_string(&ItemStatus::InStock).unwrap();
        assert_eq!(json, "\"Em estoque\"");

        let status: ItemStatus = serde_json::from_str("\"Devolvido\"").unwrap();
        assert_eq!(status, ItemStatus::Returned);
    }

    proptest! {
        #[test]
        fn prop_wire_roundtrip(status in prop_oneof![
            Just(ItemStatus::InStock),
            Just(ItemStatus::Claimed),
            Just(ItemStatus::Returned),
        ]) {
            prop_assert_eq!(ItemStatus::from_wire(status.wire_name()), Some(status));
        }

        #[test]
        fn prop_arbitrary_strings_never_parse_to_a_status(raw in "[a-z]{0,12}") {
            prop_assert_eq!(ItemStatus::from_wire(&raw), None);
        }
    }
}
