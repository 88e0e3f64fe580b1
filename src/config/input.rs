use crate::billing::{ContractConfig, UsageProfile};
use std::fmt;
use std::str::FromStr;

/// Editable fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FixedCapacity,
    BurstLimit,
    AllowedBurstHours,
    OverageRate,
    HoursPerMonth,
    AverageConsumption,
    PeakConsumption,
    PeakHours,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::FixedCapacity,
        Field::BurstLimit,
        Field::AllowedBurstHours,
        Field::OverageRate,
        Field::HoursPerMonth,
        Field::AverageConsumption,
        Field::PeakConsumption,
        Field::PeakHours,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::FixedCapacity => "fixed_capacity_mb",
            Field::BurstLimit => "burst_limit_mb",
            Field::AllowedBurstHours => "allowed_burst_hours",
            Field::OverageRate => "overage_rate_per_mb",
            Field::HoursPerMonth => "hours_per_month",
            Field::AverageConsumption => "average_consumption_mb",
            Field::PeakConsumption => "peak_consumption_mb",
            Field::PeakHours => "peak_hours",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FixedCapacity => "Fixed contract (MB)",
            Field::BurstLimit => "Burst limit (MB)",
            Field::AllowedBurstHours => "Allowed burst hours/month",
            Field::OverageRate => "Cost per excess MB",
            Field::HoursPerMonth => "Total hours/month",
            Field::AverageConsumption => "Average consumption (MB)",
            Field::PeakConsumption => "Peak consumption (MB)",
            Field::PeakHours => "Peak hours/month",
        }
    }

    pub fn get(&self, contract: &ContractConfig, usage: &UsageProfile) -> f64 {
        match self {
            Field::FixedCapacity => contract.fixed_capacity_mb,
            Field::BurstLimit => contract.burst_limit_mb,
            Field::AllowedBurstHours => contract.allowed_burst_hours,
            Field::OverageRate => contract.overage_rate_per_mb,
            Field::HoursPerMonth => contract.hours_per_month,
            Field::AverageConsumption => usage.average_consumption_mb,
            Field::PeakConsumption => usage.peak_consumption_mb,
            Field::PeakHours => usage.peak_hours,
        }
    }

    pub fn set(&self, contract: &mut ContractConfig, usage: &mut UsageProfile, value: f64) {
        let slot = match self {
            Field::FixedCapacity => &mut contract.fixed_capacity_mb,
            Field::BurstLimit => &mut contract.burst_limit_mb,
            Field::AllowedBurstHours => &mut contract.allowed_burst_hours,
            Field::OverageRate => &mut contract.overage_rate_per_mb,
            Field::HoursPerMonth => &mut contract.hours_per_month,
            Field::AverageConsumption => &mut usage.average_consumption_mb,
            Field::PeakConsumption => &mut usage.peak_consumption_mb,
            Field::PeakHours => &mut usage.peak_hours,
        };
        *slot = value;
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Field::ALL
            .into_iter()
            .find(|field| field.name() == normalized)
            .ok_or_else(|| InputError::UnknownField(s.trim().to_string()))
    }
}

/// Error types for textual edits
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    UnknownField(String),
    MissingValue(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::UnknownField(name) => write!(f, "Unknown field: {}", name),
            InputError::MissingValue(input) => {
                write!(f, "Expected FIELD=VALUE, got: {}", input)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Coerce free text to a non-negative number; anything unparseable becomes 0
pub fn coerce_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value.max(0.0),
        _ => 0.0,
    }
}

/// Set one field from raw text
pub fn apply_edit(
    contract: &mut ContractConfig,
    usage: &mut UsageProfile,
    field: Field,
    raw: &str,
) {
    let value = coerce_number(raw);
    crate::debug_println!("edit {} <- {:?} ({})", field, raw, value);
    field.set(contract, usage, value);
}

/// Parse `field=value`. The value side is coerced, never rejected
pub fn parse_assignment(input: &str) -> Result<(Field, f64), InputError> {
    let (name, raw) = input
        .split_once('=')
        .ok_or_else(|| InputError::MissingValue(input.to_string()))?;
    let field = name.parse::<Field>()?;
    Ok((field, coerce_number(raw)))
}
