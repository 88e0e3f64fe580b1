use crate::billing::{ContractConfig, CostBreakdown, UsageProfile};

/// Estimate the monthly overage of a burst-hours contract.
///
/// Peak hours stand in for the excluded top 5% of samples: while they fit in
/// `allowed_burst_hours` nothing is billed and the percentile-95 level is the
/// greater of average usage and the fixed capacity. Every peak hour beyond the
/// budget is billed for its excess over the fixed capacity.
///
/// Total over all inputs. No rounding is applied.
#[must_use]
pub fn compute(contract: &ContractConfig, usage: &UsageProfile) -> CostBreakdown {
    let excess_hours = (usage.peak_hours - contract.allowed_burst_hours).max(0.0);

    let excess_mb = if excess_hours > 0.0 {
        let excess_consumption = (usage.peak_consumption_mb - contract.fixed_capacity_mb).max(0.0);
        excess_consumption * excess_hours
    } else {
        0.0
    };

    let overage_cost = excess_mb * contract.overage_rate_per_mb;
    let fixed_cost = 0.0;
    let total_cost = fixed_cost + overage_cost;

    let percentile95_mb = if usage.peak_hours <= contract.allowed_burst_hours {
        usage
            .average_consumption_mb
            .max(contract.fixed_capacity_mb)
    } else {
        usage.peak_consumption_mb
    };

    CostBreakdown {
        fixed_cost,
        overage_cost,
        total_cost,
        percentile95_mb,
        excess_hours,
        excess_mb,
    }
}
