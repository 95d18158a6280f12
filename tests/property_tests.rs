//! Property-based tests for common_logger using proptest

use common_logger::prelude::*;
use proptest::prelude::*;

const KNOWN_NAMES: [&str; 4] = ["debug", "info", "warn", "error"];

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]
}

// ============================================================================
// Level resolution
// ============================================================================

proptest! {
    /// Known names resolve to their own level
    #[test]
    fn test_resolve_known_names(level in any_level()) {
        prop_assert_eq!(resolve_level(level.to_lowercase_str()), level);
    }

    /// Every other string resolves to info
    #[test]
    fn test_resolve_unknown_names_fall_back(name in ".*") {
        prop_assume!(!KNOWN_NAMES.contains(&name.as_str()));
        prop_assert_eq!(resolve_level(&name), LogLevel::Info);
    }

    /// Matching is case-sensitive
    #[test]
    fn test_resolve_is_case_sensitive(level in any_level()) {
        let upper = level.to_lowercase_str().to_uppercase();
        prop_assert_eq!(resolve_level(&upper), LogLevel::Info);
    }

    /// LogLevel ordering agrees with the discriminant
    #[test]
    fn test_log_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, (a as u8) <= (b as u8));
        prop_assert_eq!(a < b, (a as u8) < (b as u8));
    }

    /// Display matches to_str
    #[test]
    fn test_log_level_display(level in any_level()) {
        prop_assert_eq!(format!("{}", level), level.to_str());
    }
}

// ============================================================================
// Derivation
// ============================================================================

proptest! {
    /// A record is written exactly when its level reaches the resolved threshold,
    /// and deriving never changes the parent's threshold
    #[test]
    fn test_derived_filtering(name in prop_oneof![
        Just("debug".to_string()),
        Just("info".to_string()),
        Just("warn".to_string()),
        Just("error".to_string()),
        "[a-zA-Z]{0,8}",
    ], level in any_level()) {
        let buffer = MemorySink::new();
        let parent = Logger::new(Config::default().with_writer(buffer.clone().into()));
        let derived = parent.with_level(&name);

        derived.log(level, "probe");

        let expected = level >= resolve_level(&name);
        prop_assert_eq!(buffer.lines().len(), usize::from(expected));
        prop_assert_eq!(parent.level(), LogLevel::Info);
    }

    /// Any message round-trips through the JSON record unchanged
    #[test]
    fn test_message_survives_encoding(message in "\\PC*") {
        let buffer = MemorySink::new();
        let logger = Logger::new(Config::default().with_writer(buffer.clone().into()));

        logger.error(message.clone());

        let lines = buffer.lines();
        prop_assert_eq!(lines.len(), 1);
        let record: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        prop_assert_eq!(record["msg"].as_str(), Some(message.as_str()));
    }
}
