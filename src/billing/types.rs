use serde::{Deserialize, Serialize};

/// Contract terms of a 95th-percentile link with permitted burst hours
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Contracted baseline capacity (MB)
    pub fixed_capacity_mb: f64,
    /// Maximum capacity during burst (MB). Informational, not used by `compute`
    pub burst_limit_mb: f64,
    /// Hours per month of tolerated excess before billing applies
    pub allowed_burst_hours: f64,
    /// Cost per MB billed above contract
    pub overage_rate_per_mb: f64,
    /// Hours in the billing period. Informational, not used by `compute`
    pub hours_per_month: f64,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            fixed_capacity_mb: 500.0,
            burst_limit_mb: 1500.0,
            allowed_burst_hours: 36.0,
            overage_rate_per_mb: 5.81,
            hours_per_month: 720.0, // 30 days * 24h
        }
    }
}

impl ContractConfig {
    /// Apply overrides from environment variables, ignoring unparseable values
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    /// Apply `LINKCOST_*` overrides resolved through `lookup`
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| parse_override(name, lookup(name)?);

        if let Some(value) = read("LINKCOST_FIXED_CAPACITY") {
            self.fixed_capacity_mb = value;
        }

        if let Some(value) = read("LINKCOST_ALLOWED_HOURS") {
            self.allowed_burst_hours = value;
        }

        if let Some(value) = read("LINKCOST_RATE") {
            self.overage_rate_per_mb = value;
        }
    }
}

fn parse_override(name: &str, raw: String) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => {
            crate::debug_println!("env override {}={}", name, value);
            Some(value)
        }
        _ => None,
    }
}

/// Observed or assumed usage pattern for the month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageProfile {
    pub average_consumption_mb: f64,
    pub peak_consumption_mb: f64,
    /// Hours per month spent at `peak_consumption_mb`
    pub peak_hours: f64,
}

impl Default for UsageProfile {
    fn default() -> Self {
        Self {
            average_consumption_mb: 400.0,
            peak_consumption_mb: 1200.0,
            peak_hours: 20.0,
        }
    }
}

/// Outcome of one computation. Always replaced as a whole, never patched
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Always zero: only the overage is charged by this model
    pub fixed_cost: f64,
    pub overage_cost: f64,
    pub total_cost: f64,
    /// Percentile-95 proxy derived from the peak-hours count
    pub percentile95_mb: f64,
    pub excess_hours: f64,
    pub excess_mb: f64,
}

impl CostBreakdown {
    /// Peak hours stayed inside the allowed burst budget
    pub fn is_within_burst_budget(&self) -> bool {
        self.excess_hours == 0.0
    }

    pub fn status_message(&self) -> String {
        if self.is_within_burst_budget() {
            "Within the allowed burst limit".to_string()
        } else {
            format!("Exceeding by {} hours/month", self.excess_hours)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_defaults() {
        let contract = ContractConfig::default();
        assert_eq!(contract.fixed_capacity_mb, 500.0);
        assert_eq!(contract.burst_limit_mb, 1500.0);
        assert_eq!(contract.allowed_burst_hours, 36.0);
        assert_eq!(contract.overage_rate_per_mb, 5.81);
        assert_eq!(contract.hours_per_month, 720.0);
    }

    #[test]
    fn test_usage_defaults() {
        let usage = UsageProfile::default();
        assert_eq!(usage.average_consumption_mb, 400.0);
        assert_eq!(usage.peak_consumption_mb, 1200.0);
        assert_eq!(usage.peak_hours, 20.0);
    }

    #[test]
    fn test_status_message() {
        let within = CostBreakdown::default();
        assert!(within.is_within_burst_budget());
        assert_eq!(within.status_message(), "Within the allowed burst limit");

        let exceeding = CostBreakdown {
            excess_hours: 14.0,
            ..CostBreakdown::default()
        };
        assert!(!exceeding.is_within_burst_budget());
        assert_eq!(exceeding.status_message(), "Exceeding by 14 hours/month");
    }

    #[test]
    fn test_status_message_keeps_fractional_excess() {
        let exceeding = CostBreakdown {
            excess_hours: 0.4,
            ..CostBreakdown::default()
        };
        assert!(!exceeding.is_within_burst_budget());
        assert_eq!(exceeding.status_message(), "Exceeding by 0.4 hours/month");
    }

    #[test]
    fn test_overrides_ignore_unparseable_values() {
        let mut contract = ContractConfig::default();
        contract.apply_overrides_from(|name| match name {
            "LINKCOST_FIXED_CAPACITY" => Some(" 800 ".to_string()),
            "LINKCOST_ALLOWED_HOURS" => Some("fast".to_string()),
            "LINKCOST_RATE" => Some("inf".to_string()),
            _ => None,
        });

        assert_eq!(contract.fixed_capacity_mb, 800.0);
        assert_eq!(contract.allowed_burst_hours, 36.0);
        assert_eq!(contract.overage_rate_per_mb, 5.81);
    }

    #[test]
    fn test_overrides_absent_leave_contract_untouched() {
        let mut contract = ContractConfig {
            overage_rate_per_mb: 1.5,
            ..ContractConfig::default()
        };
        contract.apply_overrides_from(|_| None);
        assert_eq!(contract.overage_rate_per_mb, 1.5);
        assert_eq!(contract.fixed_capacity_mb, 500.0);
    }

    #[test]
    fn test_partial_contract_deserializes_with_defaults() {
        let contract: ContractConfig = serde_json::from_str(r#"{"overage_rate_per_mb": 2.5}"#)
            .expect("partial contract should parse");
        assert_eq!(contract.overage_rate_per_mb, 2.5);
        assert_eq!(contract.fixed_capacity_mb, 500.0);
    }
}
