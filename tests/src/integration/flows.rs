//! # Integration Test Flows
//!
//! End-to-end scenarios across the Identity Gate and the Title Ledger:
//!
//! 1. **Issue → Verify**: issuer mints, anyone reads back and recomputes the hash
//! 2. **Rejected issuance**: non-issuer and unresolvable callers leave state unchanged
//! 3. **Student query**: only the student's titles, cursor released
//! 4. **Soulbound**: transfer never reaches the ledger
//! 5. **JSON dispatch**: the same flow through `handle_api_query`

#[cfg(test)]
mod tests {
    use crate::fixtures::{
        credential, draft, issuer, make_service, reference_hash, ISSUER_MSP, STUDENT_MSP,
    };

    use at_01_identity_gate::{IdentityResolutionError, SerializedIdentity, StaticIdentity};
    use at_02_title_ledger::{
        handle_api_query, verify_validation_hash, LedgerState, TitleApiHandler, TitleError,
        TitleErrorKind, TitleLedgerApi,
    };
    use serde_json::json;

    // =============================================================================
    // ISSUE → VERIFY
    // =============================================================================

    #[test]
    fn test_issue_verify_scenario() {
        let service = make_service();

        service
            .issue_title(&issuer(), draft("T1", "S1", "CS", "2025-01-01"))
            .unwrap();

        let title = service.verify_title("T1").unwrap();
        assert_eq!(title.validation_hash, reference_hash("S1", "CS", "2025-01-01"));
        assert_eq!(
            title.validation_hash,
            "726356d2ad70e276323954e05137d18ad4b69e35574c12d0122276e725f975ea"
        );
        assert!(verify_validation_hash(&title));
    }

    #[test]
    fn test_non_issuer_leaves_state_unchanged() {
        let service = make_service();
        service
            .issue_title(&issuer(), draft("T1", "S1", "CS", "2025-01-01"))
            .unwrap();
        let before = service.verify_title("T1").unwrap();
        let puts_before = service.ledger().stats().puts;

        let err = service
            .issue_title(
                &StaticIdentity::new(STUDENT_MSP),
                draft("T1", "S1", "Forged Degree", "2025-01-01"),
            )
            .unwrap_err();

        assert_eq!(err.kind(), TitleErrorKind::Authorization);
        assert_eq!(service.ledger().stats().puts, puts_before);
        assert_eq!(service.verify_title("T1").unwrap(), before);
    }

    #[test]
    fn test_credential_identity_flow() {
        let service = make_service();

        let wire = credential(ISSUER_MSP).to_bytes().unwrap();
        let caller = SerializedIdentity::from_bytes(&wire).unwrap();
        service
            .issue_title(&caller, draft("T7", "S7", "Law", "2024-06-30"))
            .unwrap();

        let outsider_wire = credential("hospitalMSP").to_bytes().unwrap();
        let outsider = SerializedIdentity::from_bytes(&outsider_wire).unwrap();
        assert!(matches!(
            service.issue_title(&outsider, draft("T8", "S7", "Law", "2024-06-30")),
            Err(TitleError::Authorization(_))
        ));
        assert_eq!(service.get_titles_by_student("S7").unwrap().len(), 1);
    }

    #[test]
    fn test_unreachable_identity_provider() {
        let service = make_service();
        let caller = StaticIdentity::failing(IdentityResolutionError::ProviderUnavailable(
            "membership service timeout".to_string(),
        ));

        let err = service
            .issue_title(&caller, draft("T1", "S1", "CS", "2025-01-01"))
            .unwrap_err();
        assert!(err.to_string().contains("membership service timeout"));
        assert!(service.ledger().is_empty().unwrap());
    }

    #[test]
    fn test_tampered_record_detected_by_caller() {
        let service = make_service();
        service
            .issue_title(&issuer(), draft("T1", "S1", "CS", "2025-01-01"))
            .unwrap();

        // Tamper below the contract, directly in world state.
        let mut stored: serde_json::Value =
            serde_json::from_slice(&service.ledger().get_state("T1").unwrap()).unwrap();
        stored["degree"] = json!("Medicine");
        service
            .ledger()
            .put_state("T1", &serde_json::to_vec(&stored).unwrap())
            .unwrap();

        let title = service.verify_title("T1").unwrap();
        assert_eq!(title.degree, "Medicine");
        assert!(!verify_validation_hash(&title));
        assert!(!service.check_integrity("T1").unwrap().is_valid);
    }

    // =============================================================================
    // STUDENT QUERY
    // =============================================================================

    #[test]
    fn test_query_scenario() {
        let service = make_service();
        service
            .issue_title(&issuer(), draft("T1", "S1", "CS", "2025-01-01"))
            .unwrap();
        service
            .issue_title(&issuer(), draft("T2", "S2", "CS", "2025-01-01"))
            .unwrap();
        service
            .issue_title(&issuer(), draft("T3", "S1", "Math", "2025-02-01"))
            .unwrap();

        let titles = service.get_titles_by_student("S1").unwrap();
        let mut ids: Vec<_> = titles.iter().map(|t| t.title_id.clone()).collect();
        ids.sort();
        assert_eq!(ids, vec!["T1", "T3"]);
        assert!(titles.iter().all(|t| t.student_id == "S1"));

        let stats = service.ledger().stats();
        assert_eq!(stats.cursors_opened, stats.cursors_closed);
    }

    #[test]
    fn test_corrupted_row_fails_query_and_releases_cursor() {
        let service = make_service();
        service
            .issue_title(&issuer(), draft("T1", "S1", "CS", "2025-01-01"))
            .unwrap();
        // Matches the selector but is missing every other field.
        service
            .ledger()
            .put_state("T2", br#"{"studentId":"S1"}"#)
            .unwrap();

        let err = service.get_titles_by_student("S1").unwrap_err();
        assert_eq!(err.kind(), TitleErrorKind::Deserialization);
        assert_eq!(service.ledger().stats().open_cursors(), 0);
    }

    // =============================================================================
    // SOULBOUND
    // =============================================================================

    #[test]
    fn test_transfer_never_moves_title() {
        let service = make_service();
        service
            .issue_title(&issuer(), draft("T1", "S1", "CS", "2025-01-01"))
            .unwrap();
        let before = service.ledger().stats();

        assert_eq!(
            service.transfer("T1", "S2"),
            Err(TitleError::TransferNotPermitted)
        );
        assert_eq!(service.ledger().stats(), before);
        assert!(service.get_titles_by_student("S2").unwrap().is_empty());
    }

    // =============================================================================
    // JSON DISPATCH
    // =============================================================================

    #[test]
    fn test_api_round_trip() {
        let handler = TitleApiHandler::new(make_service());
        let issue = json!({
            "credential": { "mspid": ISSUER_MSP, "idBytes": "00ff" },
            "title": {
                "titleId": "TITLE001",
                "studentId": "STUDENT001",
                "studentName": "Juan Pérez",
                "degree": "Ingeniería Informática",
                "emissionDate": "2025-03-05",
                "validationHash": "caller supplied, ignored"
            }
        });
        let issued = handle_api_query(&handler, "issue_title", &issue).unwrap();
        assert_eq!(issued["titleId"], "TITLE001");

        let verified =
            handle_api_query(&handler, "verify_title", &json!({ "titleId": "TITLE001" })).unwrap();
        assert_eq!(
            verified["validationHash"],
            reference_hash("STUDENT001", "Ingeniería Informática", "2025-03-05")
        );

        let listed = handle_api_query(
            &handler,
            "get_titles_by_student",
            &json!({ "studentId": "STUDENT001" }),
        )
        .unwrap();
        assert_eq!(listed["count"], 1);

        let refused = handle_api_query(
            &handler,
            "transfer",
            &json!({ "titleId": "TITLE001", "newOwner": "STUDENT002" }),
        )
        .unwrap_err();
        assert_eq!(refused.data, Some(json!({ "kind": "transfer_not_permitted" })));
    }
}
