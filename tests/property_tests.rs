//! Property-based tests for leveled_sink_logger using proptest

use leveled_sink_logger::prelude::*;
use proptest::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;

const TS: &str = "2025-01-08T10:30:45.123Z";

fn severity_strategy() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Debug),
        Just(Severity::Info),
        Just(Severity::Error),
    ]
}

fn threshold_strategy() -> impl Strategy<Value = Threshold> {
    prop_oneof![
        Just(Threshold::Mute),
        severity_strategy().prop_map(Threshold::Level),
    ]
}

fn is_known(name: &str) -> bool {
    matches!(name, "mute" | "debug" | "info" | "error")
}

// ============================================================================
// Severity / Threshold Tests
// ============================================================================

proptest! {
    /// Severity names roundtrip through FromStr
    #[test]
    fn test_severity_str_roundtrip(severity in severity_strategy()) {
        let parsed: Severity = severity.as_str().parse().unwrap();
        prop_assert_eq!(severity, parsed);
    }

    /// Ordering follows declaration order, not the names
    #[test]
    fn test_severity_ordering(a in severity_strategy(), b in severity_strategy()) {
        prop_assert_eq!(a <= b, (a as u8) <= (b as u8));
        prop_assert_eq!(a < b, (a as u8) < (b as u8));
    }

    /// A level threshold admits exactly the severities at or above it
    #[test]
    fn test_threshold_allows_matches_ordering(
        min in severity_strategy(),
        severity in severity_strategy()
    ) {
        prop_assert_eq!(Threshold::Level(min).allows(severity), severity >= min);
        prop_assert!(!Threshold::Mute.allows(severity));
    }

    /// Threshold Display output parses back to the same value
    #[test]
    fn test_threshold_display_roundtrip(threshold in threshold_strategy()) {
        let parsed: Threshold = threshold.to_string().parse().unwrap();
        prop_assert_eq!(threshold, parsed);
    }

    /// Any unknown threshold string is rejected, naming the value
    #[test]
    fn test_unknown_threshold_rejected(name in "[a-zA-Z0-9_ -]{0,12}") {
        prop_assume!(!is_known(&name));

        let sink = Arc::new(MemorySink::new());
        let result = make_logger(vec![SinkBinding::new(Severity::Info, sink)], &name);

        match result {
            Err(LoggerError::InvalidSeverity { value }) => prop_assert_eq!(value, name),
            other => prop_assert!(false, "expected InvalidSeverity, got {:?}", other),
        }
    }
}

// ============================================================================
// Dispatch Tests
// ============================================================================

proptest! {
    /// A call writes one record iff the threshold admits its severity
    #[test]
    fn test_dispatch_respects_threshold(
        threshold in threshold_strategy(),
        severity in severity_strategy(),
        message in ".*"
    ) {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::builder()
            .threshold(threshold)
            .binding(SinkBinding::new(severity, sink.clone()))
            .clock(FixedClock::parse(TS).unwrap())
            .build()
            .unwrap();

        logger.log(severity.as_str(), &message).unwrap();

        let expected = usize::from(threshold.allows(severity));
        prop_assert_eq!(sink.len(), expected);
        if expected == 1 {
            let records = sink.records();
            prop_assert_eq!(records[0].message(), Some(message.as_str()));
        }
    }

    /// Record = context, overridden by core fields, overridden by additional
    #[test]
    fn test_record_layering(
        context in prop::collection::btree_map("[a-z]{1,6}", any::<i32>(), 0..6),
        additional in prop::collection::btree_map("[a-z]{1,6}", any::<bool>(), 0..4),
        message in "[ -~]{0,40}"
    ) {
        let sink = Arc::new(MemorySink::new());
        let mut binding = SinkBinding::new(Severity::Info, sink.clone()).alias("metric");
        for (key, value) in &additional {
            binding = binding.with_field(key.clone(), *value);
        }

        let logger = Logger::builder()
            .threshold("debug")
            .binding(binding)
            .clock(FixedClock::parse(TS).unwrap())
            .build()
            .unwrap();

        let ctx: LogContext = context.iter().map(|(k, v)| (k.clone(), *v)).collect();
        logger.log_with_context("metric", &message, &ctx).unwrap();

        let record = sink.records().remove(0);
        let mut expected = serde_json::Map::new();
        for (k, v) in &context {
            expected.insert(k.clone(), json!(v));
        }
        expected.insert("severity".into(), json!("info"));
        expected.insert("message".into(), json!(message));
        expected.insert("eventTime".into(), json!(TS));
        for (k, v) in &additional {
            expected.insert(k.clone(), json!(v));
        }

        prop_assert_eq!(record.to_value(), Value::Object(expected));
    }
}
