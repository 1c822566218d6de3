#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use crate::config::SiteSelectors;
    use crate::models::LiveConstraints;
    use crate::tests::mock_driver::{GotoOutcome, MockBehavior, MockCounters, MockDriver};
    use crate::tests::setup;
    use crate::traits::browser_driver::LabeledRow;
    use crate::verifiers::live::{scan_rows, LiveDomVerifier};

    fn taj_mahal_behavior() -> MockBehavior {
        MockBehavior {
            title: "Taj Mahal".to_string(),
            rows: vec![
                LabeledRow::new("Height", "73 m (240 ft)"),
                LabeledRow::new("Location", "  Agra, Uttar Pradesh, India  "),
            ],
            ..MockBehavior::default()
        }
    }

    fn verifier_for(behavior: MockBehavior) -> (LiveDomVerifier<MockDriver>, Arc<MockCounters>) {
        let driver = MockDriver::new(behavior);
        let counters = driver.counters();
        let verifier = LiveDomVerifier::new(
            driver,
            SiteSelectors::wikipedia(),
            LiveConstraints::default(),
        );
        (verifier, counters)
    }

    #[tokio::test]
    async fn passes_when_title_and_location_are_correct() {
        setup();
        let (verifier, counters) = verifier_for(taj_mahal_behavior());

        let verdict = verifier.verify("https://example.com").await;

        assert!(verdict.success);
        assert_eq!(
            verdict.evidence.get("pageTitle").and_then(|v| v.as_str()),
            Some("Taj Mahal")
        );
        let location = verdict
            .evidence
            .get("extractedLocation")
            .and_then(|v| v.as_str())
            .unwrap();
        assert!(location.contains("Agra"));
        assert_eq!(location, "Agra, Uttar Pradesh, India", "value is trimmed");
        assert!(
            verdict.evidence.contains_key("selectors"),
            "success evidence records the selectors used"
        );
        assert_eq!(counters.closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn fails_when_title_does_not_match() {
        setup();
        let (verifier, counters) = verifier_for(MockBehavior {
            title: "Eiffel Tower".to_string(),
            ..taj_mahal_behavior()
        });

        let verdict = verifier.verify("https://example.com").await;

        assert!(!verdict.success);
        assert!(verdict.reason.contains("Page title does not contain"));
        assert_eq!(
            verdict.evidence.get("pageTitle").and_then(|v| v.as_str()),
            Some("Eiffel Tower")
        );
        // The title check short-circuits: location extraction never ran.
        assert_eq!(counters.row_queries.load(Ordering::SeqCst), 0);
        assert_eq!(counters.closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn navigation_timeout_has_its_own_reason() {
        setup();
        let (verifier, counters) = verifier_for(MockBehavior {
            goto: GotoOutcome::TimeOut,
            ..taj_mahal_behavior()
        });

        let verdict = verifier.verify("https://example.com").await;

        assert!(!verdict.success);
        assert_eq!(verdict.reason, "Network timeout");
        assert_eq!(
            verdict.evidence.get("url").and_then(|v| v.as_str()),
            Some("https://example.com")
        );
        assert_eq!(counters.closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn other_navigation_errors_are_generic_load_failures() {
        setup();
        let (verifier, _) = verifier_for(MockBehavior {
            goto: GotoOutcome::Fail("net::ERR_NAME_NOT_RESOLVED".to_string()),
            ..taj_mahal_behavior()
        });

        let verdict = verifier.verify("https://example.com").await;

        assert!(!verdict.success);
        assert_eq!(verdict.reason, "Failed to load page");
        let error = verdict
            .evidence
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap();
        assert!(error.contains("net::ERR_NAME_NOT_RESOLVED"));
    }

    #[tokio::test]
    async fn fails_when_no_row_carries_the_location_header() {
        setup();
        let (verifier, _) = verifier_for(MockBehavior {
            rows: vec![LabeledRow::new("Height", "73 m (240 ft)")],
            ..taj_mahal_behavior()
        });

        let verdict = verifier.verify("https://example.com").await;

        assert!(!verdict.success);
        assert_eq!(verdict.reason, "Infobox location does not contain 'Agra'");
        assert!(verdict
            .evidence
            .get("extractedLocation")
            .map_or(false, |v| v.is_null()));
    }

    #[tokio::test]
    async fn fails_when_location_does_not_match() {
        setup();
        let (verifier, _) = verifier_for(MockBehavior {
            rows: vec![LabeledRow::new("Location", "Paris, France")],
            ..taj_mahal_behavior()
        });

        let verdict = verifier.verify("https://example.com").await;

        assert!(!verdict.success);
        assert!(verdict.reason.contains("Infobox location does not contain"));
        assert_eq!(
            verdict
                .evidence
                .get("extractedLocation")
                .and_then(|v| v.as_str()),
            Some("Paris, France")
        );
    }

    #[tokio::test]
    async fn close_failure_never_alters_the_verdict() {
        setup();
        let (verifier, counters) = verifier_for(MockBehavior {
            close_fails: true,
            ..taj_mahal_behavior()
        });

        let verdict = verifier.verify("https://example.com").await;

        assert!(verdict.success, "best-effort release must not mask a pass");
        assert_eq!(counters.closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn session_is_released_exactly_once_on_each_path() {
        setup();
        for behavior in [
            taj_mahal_behavior(),
            MockBehavior {
                title: "Eiffel Tower".to_string(),
                ..taj_mahal_behavior()
            },
            MockBehavior {
                goto: GotoOutcome::TimeOut,
                ..taj_mahal_behavior()
            },
            MockBehavior {
                goto: GotoOutcome::Fail("connection reset".to_string()),
                ..taj_mahal_behavior()
            },
        ] {
            let (verifier, counters) = verifier_for(behavior);
            let _ = verifier.verify("https://example.com").await;
            assert_eq!(counters.launches.load(Ordering::SeqCst), 1);
            assert_eq!(counters.closes.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn verdicts_are_idempotent_across_calls() {
        setup();
        let (verifier, _) = verifier_for(taj_mahal_behavior());

        let first = verifier.verify("https://example.com").await;
        let second = verifier.verify("https://example.com").await;

        assert_eq!(first.success, second.success);
        assert_eq!(first.reason, second.reason);
    }

    #[test]
    fn scan_rows_matches_headers_case_insensitively() {
        let rows = vec![
            LabeledRow::new("Coordinates", "27°10′30″N 78°02′31″E"),
            LabeledRow::new("LOCATION", "  Agra  "),
        ];
        assert_eq!(scan_rows(&rows, "location"), Some("Agra".to_string()));
    }

    #[test]
    fn scan_rows_matches_by_substring_and_takes_the_first_hit() {
        let rows = vec![
            LabeledRow::new("Location of site", "Agra"),
            LabeledRow::new("Location", "elsewhere"),
        ];
        assert_eq!(scan_rows(&rows, "location"), Some("Agra".to_string()));
    }

    #[test]
    fn scan_rows_returns_none_when_no_header_matches() {
        let rows = vec![LabeledRow::new("Height", "73 m")];
        assert_eq!(scan_rows(&rows, "location"), None);
    }
}
