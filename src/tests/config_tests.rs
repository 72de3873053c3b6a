#[cfg(test)]
mod tests {
    use std::fs;

    use crate::config::{
        ClockMode,
        ConfigError,
        LedgerConfig,
        OutputFormat,
        LOG_LEVEL_ENV,
        OUTPUT_FORMAT_ENV,
    };
    use crate::implementations::script::{ ReplayScript, ScriptError };
    use crate::models::common::Principal;
    use crate::tests::setup;
    use crate::traits::clock::Clock;

    #[test]
    fn defaults_use_wall_clock_and_text_output() {
        let config = LedgerConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.clock.mode, ClockMode::System);
    }

    #[test]
    fn loads_yaml_file_with_partial_fields() {
        setup();
        let path = std::env::temp_dir().join(format!("buildreg-config-{}.yaml", std::process::id()));
        fs::write(&path, "output_format: json\nclock:\n  mode: manual\n  start_ms: 5000\n  step_ms: 10\n").unwrap();

        let config = LedgerConfig::from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.clock.mode, ClockMode::Manual);

        let clock = config.clock.build();
        assert_eq!(clock.now().as_millis(), 5000);
        assert_eq!(clock.now().as_millis(), 5010);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = std::env::temp_dir().join("buildreg-config-does-not-exist.yaml");
        assert!(matches!(LedgerConfig::from_file(&path), Err(ConfigError::FileReadError(_))));
    }

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!("xml".parse::<OutputFormat>(), Err(ConfigError::InvalidValue { .. })));
    }

    // The only test that touches these variables, so it cannot race another test
    #[test]
    fn env_overrides_replace_file_values_and_report_what_changed() {
        setup();
        std::env::remove_var(LOG_LEVEL_ENV);
        std::env::remove_var(OUTPUT_FORMAT_ENV);

        let mut config = LedgerConfig::default();
        assert!(config.apply_env_overrides().unwrap().is_empty());
        assert_eq!(config, LedgerConfig::default());

        std::env::set_var(LOG_LEVEL_ENV, "debug");
        std::env::set_var(OUTPUT_FORMAT_ENV, "json");
        let applied = config.apply_env_overrides().unwrap();
        assert_eq!(applied, vec![LOG_LEVEL_ENV, OUTPUT_FORMAT_ENV]);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output_format, OutputFormat::Json);

        std::env::set_var(OUTPUT_FORMAT_ENV, "xml");
        let result = config.apply_env_overrides();

        std::env::remove_var(LOG_LEVEL_ENV);
        std::env::remove_var(OUTPUT_FORMAT_ENV);

        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn script_fills_in_default_sender() {
        let script = ReplayScript::from_yaml_str(
            r#"
sender: owner1
steps:
  - registry: building
    operation: registerBuilding
    args: ["Office Building", "123 Main St", 2010, 5]
  - registry: building
    operation: updateBuilding
    args: [1, "x", "y", 2012, 6]
    sender: unauthorized
"#
        ).unwrap();

        let invocations = script.invocations().unwrap();
        assert_eq!(invocations.len(), 2);
        assert_eq!(invocations[0].sender, Principal::new("owner1"));
        assert_eq!(invocations[1].sender, Principal::new("unauthorized"));
    }

    #[test]
    fn script_step_without_any_sender_is_rejected() {
        let script = ReplayScript::from_yaml_str(
            "steps:\n  - registry: inventory\n    operation: lastInventoryId\n"
        ).unwrap();
        assert!(matches!(script.invocations(), Err(ScriptError::MissingSender { step: 1, .. })));
    }
}
