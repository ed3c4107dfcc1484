//! Property-based tests for configuration merging and validation.

use super::merger::ConfigMerger;
use super::schema::{Config, SanitizeConfig};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn separator_strategy() -> impl Strategy<Value = Option<char>> {
    prop::option::of(prop_oneof![Just('\\'), Just('|'), Just(':'), Just('#')])
}

fn sanitize_strategy() -> impl Strategy<Value = SanitizeConfig> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(prop_oneof![Just("[#%]".to_string()), Just("[:*]".to_string())]),
        prop::option::of("[a-z_-]{0,3}"),
    )
        .prop_map(|(enabled, pattern, replacement)| SanitizeConfig {
            enabled,
            pattern,
            replacement,
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (separator_strategy(), prop::option::of(sanitize_strategy())).prop_map(
        |(alternate_separator, sanitize)| Config {
            alternate_separator,
            sanitize,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A set value in the higher layer always wins
    #[test]
    fn higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(
            merged.alternate_separator,
            high.alternate_separator.or(low.alternate_separator)
        );
        if let Some(ref high_sanitize) = high.sanitize {
            let merged_sanitize = merged.sanitize.as_ref().unwrap();
            if high_sanitize.enabled.is_some() {
                prop_assert_eq!(merged_sanitize.enabled, high_sanitize.enabled);
            }
            if high_sanitize.pattern.is_some() {
                prop_assert_eq!(&merged_sanitize.pattern, &high_sanitize.pattern);
            }
        }
    }

    // Merging an empty layer changes nothing
    #[test]
    fn empty_layer_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Merging is associative across three layers
    #[test]
    fn merge_associative(a in config_strategy(), b in config_strategy(), c in config_strategy()) {
        let mut left = a.clone();
        ConfigMerger::merge_into(&mut left, &b);
        ConfigMerger::merge_into(&mut left, &c);

        let mut bc = b;
        ConfigMerger::merge_into(&mut bc, &c);
        let mut right = a;
        ConfigMerger::merge_into(&mut right, &bc);

        prop_assert_eq!(left, right);
    }

    // Every generated configuration is valid and yields a working sanitizer
    #[test]
    fn generated_configs_validate(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
        prop_assert!(config.segment_sanitizer().is_ok());
    }
}
