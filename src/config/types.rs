use super::input::{parse_assignment, Field, InputError};
use crate::billing::{ContractConfig, UsageProfile};
use crate::debug_println;
use serde::{Deserialize, Serialize};

/// Main configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub contract: ContractConfig,
    pub usage: UsageProfile,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Append the "how it works" section to text output
    pub explain: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Contract and usage supplied on stdin as JSON. Only the fields present
/// override lower layers
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InputData {
    pub contract: ContractPatch,
    pub usage: UsagePatch,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContractPatch {
    pub fixed_capacity_mb: Option<f64>,
    pub burst_limit_mb: Option<f64>,
    pub allowed_burst_hours: Option<f64>,
    pub overage_rate_per_mb: Option<f64>,
    pub hours_per_month: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UsagePatch {
    pub average_consumption_mb: Option<f64>,
    pub peak_consumption_mb: Option<f64>,
    pub peak_hours: Option<f64>,
}

impl InputData {
    fn fields(&self) -> [(Field, Option<f64>); 8] {
        let contract = &self.contract;
        let usage = &self.usage;
        [
            (Field::FixedCapacity, contract.fixed_capacity_mb),
            (Field::BurstLimit, contract.burst_limit_mb),
            (Field::AllowedBurstHours, contract.allowed_burst_hours),
            (Field::OverageRate, contract.overage_rate_per_mb),
            (Field::HoursPerMonth, contract.hours_per_month),
            (Field::AverageConsumption, usage.average_consumption_mb),
            (Field::PeakConsumption, usage.peak_consumption_mb),
            (Field::PeakHours, usage.peak_hours),
        ]
    }

    /// Overwrite the fields this input carries, keeping every other value
    pub fn apply_to(&self, config: &mut Config) {
        for (field, value) in self.fields() {
            if let Some(value) = value {
                debug_println!("stdin {} = {}", field, value);
                field.set(&mut config.contract, &mut config.usage, value);
            }
        }
    }
}

impl Config {
    /// Layer stdin input, then `FIELD=VALUE` assignments, over this config
    pub fn apply_overrides(
        &mut self,
        input: Option<&InputData>,
        assignments: &[String],
    ) -> Result<(), InputError> {
        if let Some(input) = input {
            input.apply_to(self);
        }

        for assignment in assignments {
            let (field, value) = parse_assignment(assignment)?;
            debug_println!("--set {} = {}", field, value);
            field.set(&mut self.contract, &mut self.usage, value);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_data_overrides_present_fields_only() {
        let input: InputData =
            serde_json::from_str(r#"{"contract": {"overage_rate_per_mb": 2.0}}"#).unwrap();
        let mut config = Config::default();
        config.contract.fixed_capacity_mb = 800.0;
        config.usage.peak_hours = 50.0;

        input.apply_to(&mut config);

        assert_eq!(config.contract.overage_rate_per_mb, 2.0);
        assert_eq!(config.contract.fixed_capacity_mb, 800.0);
        assert_eq!(config.usage.peak_hours, 50.0);
    }

    #[test]
    fn test_empty_input_changes_nothing() {
        let input: InputData = serde_json::from_str("{}").unwrap();
        let mut config = Config::default();
        config.usage.peak_consumption_mb = 900.0;
        let before = config.clone();

        input.apply_to(&mut config);
        assert_eq!(config, before);
    }

    #[test]
    fn test_override_precedence_chain() {
        // config file
        let mut config: Config = toml::from_str(
            "[contract]\nfixed_capacity_mb = 800.0\nallowed_burst_hours = 30.0\n\n[usage]\npeak_hours = 10.0\n",
        )
        .unwrap();

        // env beats file
        config.contract.apply_overrides_from(|name| match name {
            "LINKCOST_ALLOWED_HOURS" => Some("20".to_string()),
            "LINKCOST_RATE" => Some("3".to_string()),
            _ => None,
        });

        // stdin beats env, --set beats stdin
        let input: InputData = serde_json::from_str(
            r#"{"contract": {"overage_rate_per_mb": 2.0}, "usage": {"peak_hours": 40.0, "peak_consumption_mb": 1000.0}}"#,
        )
        .unwrap();
        config
            .apply_overrides(Some(&input), &["peak_hours=50".to_string()])
            .unwrap();

        assert_eq!(config.contract.fixed_capacity_mb, 800.0);
        assert_eq!(config.contract.allowed_burst_hours, 20.0);
        assert_eq!(config.contract.overage_rate_per_mb, 2.0);
        assert_eq!(config.usage.peak_consumption_mb, 1000.0);
        assert_eq!(config.usage.peak_hours, 50.0);
        // untouched by every layer
        assert_eq!(config.usage.average_consumption_mb, 400.0);
        assert_eq!(config.contract.burst_limit_mb, 1500.0);
    }

    #[test]
    fn test_apply_overrides_rejects_unknown_assignment() {
        let mut config = Config::default();
        let result = config.apply_overrides(None, &["warp=9".to_string()]);
        assert!(matches!(result, Err(InputError::UnknownField(_))));
    }

    #[test]
    fn test_output_format_toml_names() {
        let output: OutputConfig = toml::from_str("format = \"json\"\nexplain = true\n").unwrap();
        assert_eq!(output.format, OutputFormat::Json);
        assert!(output.explain);
    }
}
