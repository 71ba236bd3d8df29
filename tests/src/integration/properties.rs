//! # Contract Properties
//!
//! proptest properties over the Title Ledger, each against a fresh
//! in-memory ledger.

#[cfg(test)]
mod tests {
    use crate::fixtures::{draft, issuer, make_service, reference_hash, ISSUER_MSP};

    use at_01_identity_gate::StaticIdentity;
    use at_02_title_ledger::{
        compute_validation_hash, TitleError, TitleErrorKind, TitleLedgerApi,
    };
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn field() -> impl Strategy<Value = String> {
        // Includes quotes, braces and non-ASCII to stress encoding paths.
        "[a-zA-Z0-9 \"{}:,\\\\é-]{0,16}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_verified_hash_matches_reference(
            title_id in "[A-Z0-9]{1,8}",
            student_id in field(),
            degree in field(),
            date in field(),
        ) {
            let service = make_service();
            service.issue_title(&issuer(), draft(&title_id, &student_id, &degree, &date)).unwrap();

            let title = service.verify_title(&title_id).unwrap();
            prop_assert_eq!(&title.validation_hash, &reference_hash(&student_id, &degree, &date));
            prop_assert_eq!(title.student_id, student_id);
        }

        #[test]
        fn prop_hash_is_deterministic(a in field(), b in field(), c in field()) {
            let first = compute_validation_hash(&a, &b, &c);
            prop_assert_eq!(first, compute_validation_hash(&a, &b, &c));
        }

        #[test]
        fn prop_non_issuer_never_writes(org in "[a-zA-Z]{0,12}MSP") {
            prop_assume!(org != ISSUER_MSP);
            let service = make_service();

            let err = service
                .issue_title(&StaticIdentity::new(org), draft("T1", "S1", "CS", "2025-01-01"))
                .unwrap_err();
            prop_assert_eq!(err.kind(), TitleErrorKind::Authorization);
            prop_assert_eq!(service.ledger().stats().puts, 0);
        }

        #[test]
        fn prop_transfer_always_fails(title_id in ".{0,12}", owner in ".{0,12}") {
            let service = make_service();
            let result = service.transfer(&title_id, &owner);
            prop_assert_eq!(result, Err(TitleError::TransferNotPermitted));
            prop_assert_eq!(service.ledger().stats().total_calls(), 0);
        }

        #[test]
        fn prop_query_selects_exactly_the_student(
            owners in proptest::collection::vec(0u8..4, 1..20),
            target in 0u8..4,
        ) {
            let service = make_service();
            let mut expected = BTreeSet::new();

            // Title i belongs to student S{owners[i]}; issuance order is arbitrary.
            for (i, owner) in owners.iter().enumerate() {
                let title_id = format!("T{:03}", i);
                let student_id = format!("S{}", owner);
                service
                    .issue_title(&issuer(), draft(&title_id, &student_id, "CS", "2025-01-01"))
                    .unwrap();
                if *owner == target {
                    expected.insert(title_id);
                }
            }

            let target_id = format!("S{}", target);
            let titles = service.get_titles_by_student(&target_id).unwrap();
            let got: BTreeSet<_> = titles.iter().map(|t| t.title_id.clone()).collect();

            prop_assert_eq!(titles.len(), got.len());
            prop_assert_eq!(got, expected);
            prop_assert!(titles.iter().all(|t| t.student_id == target_id));
            prop_assert_eq!(service.ledger().stats().open_cursors(), 0);
        }

        #[test]
        fn prop_hostile_student_id_matches_only_itself(student_id in field()) {
            let service = make_service();
            service.issue_title(&issuer(), draft("T1", &student_id, "CS", "2025-01-01")).unwrap();
            service.issue_title(&issuer(), draft("T2", "other", "CS", "2025-01-01")).unwrap();

            let titles = service.get_titles_by_student(&student_id).unwrap();
            let expected = if student_id == "other" { 2 } else { 1 };
            prop_assert_eq!(titles.len(), expected);
        }
    }
}
