use crate::billing::{calculator::compute, ContractConfig, CostBreakdown, UsageProfile};

pub const CURRENCY_SYMBOL: &str = "R$";

/// Peak-hour counts used by the worked examples in the explanation
const EXAMPLE_PEAK_HOURS: [f64; 2] = [20.0, 50.0];

/// Format a monetary amount with two decimals
pub fn format_currency(amount: f64) -> String {
    format!("{} {:.2}", CURRENCY_SYMBOL, amount)
}

/// Format a quantity (MB, hours) as an integer
pub fn format_quantity(value: f64) -> String {
    format!("{:.0}", value)
}

/// Render the result panel as plain text
pub fn render_report(
    contract: &ContractConfig,
    usage: &UsageProfile,
    breakdown: &CostBreakdown,
) -> String {
    let lines = [
        "Contract".to_string(),
        format!(
            "  Fixed capacity:        {} MB",
            format_quantity(contract.fixed_capacity_mb)
        ),
        format!(
            "  Burst limit:           {} MB",
            format_quantity(contract.burst_limit_mb)
        ),
        format!(
            "  Allowed burst hours:   {}h / {}h",
            format_quantity(contract.allowed_burst_hours),
            format_quantity(contract.hours_per_month)
        ),
        format!(
            "  Overage rate:          {}/MB",
            format_currency(contract.overage_rate_per_mb)
        ),
        "Usage".to_string(),
        format!(
            "  Average consumption:   {} MB",
            format_quantity(usage.average_consumption_mb)
        ),
        format!(
            "  Peak consumption:      {} MB",
            format_quantity(usage.peak_consumption_mb)
        ),
        format!(
            "  Peak hours:            {}h",
            format_quantity(usage.peak_hours)
        ),
        "Result".to_string(),
        format!(
            "  Percentile 95:         {} MB",
            format_quantity(breakdown.percentile95_mb)
        ),
        format!(
            "  Excess hours:          {} hours",
            format_quantity(breakdown.excess_hours)
        ),
        format!(
            "  Excess MB:             {} MB",
            format_quantity(breakdown.excess_mb)
        ),
        format!(
            "  Overage cost:          {}",
            format_currency(breakdown.overage_cost)
        ),
        format!(
            "  Total additional cost: {}",
            format_currency(breakdown.total_cost)
        ),
        format!("Status: {}", breakdown.status_message()),
    ];

    lines.join("\n")
}

/// Explain the charging model using the contract's own figures
pub fn render_explanation(contract: &ContractConfig, usage: &UsageProfile) -> String {
    let mut lines = vec![
        "How it works".to_string(),
        format!(
            "  - 95% of the time: up to {} MB allowed",
            format_quantity(contract.burst_limit_mb)
        ),
        "  - 5% of the time: may exceed the contract at no extra cost".to_string(),
        format!(
            "  - At most {}h/month of burst",
            format_quantity(contract.allowed_burst_hours)
        ),
        format!(
            "  - Excess is charged at {}/MB",
            format_currency(contract.overage_rate_per_mb)
        ),
        format!(
            "  - Only traffic above the {} MB fixed contract is billed",
            format_quantity(contract.fixed_capacity_mb)
        ),
        "Examples".to_string(),
    ];

    lines.extend(
        EXAMPLE_PEAK_HOURS
            .iter()
            .map(|&peak_hours| render_example(contract, usage, peak_hours)),
    );

    lines.join("\n")
}

fn render_example(contract: &ContractConfig, usage: &UsageProfile, peak_hours: f64) -> String {
    let scenario = UsageProfile {
        peak_hours,
        ..*usage
    };
    let breakdown = compute(contract, &scenario);

    if breakdown.is_within_burst_budget() {
        format!(
            "  - {} MB for {}h/month: no extra cost",
            format_quantity(scenario.peak_consumption_mb),
            format_quantity(peak_hours)
        )
    } else {
        format!(
            "  - {} MB for {}h/month: {}h x {} MB x {} = {}",
            format_quantity(scenario.peak_consumption_mb),
            format_quantity(peak_hours),
            format_quantity(breakdown.excess_hours),
            format_quantity((scenario.peak_consumption_mb - contract.fixed_capacity_mb).max(0.0)),
            format_currency(contract.overage_rate_per_mb),
            format_currency(breakdown.total_cost)
        )
    }
}
