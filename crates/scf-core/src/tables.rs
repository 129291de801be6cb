//! Severity lookup tables
//!
//! Severity is an integer nominally in `1..=10`. Every table is a match over
//! closed ranges, tried top to bottom, with an explicit fallback arm.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cost estimate used when severity falls outside `1..=10`
pub const FALLBACK_COST_RANGE: &str = "$50K-$100K";

/// Upper bound for opportunity success probability
pub const MAX_SUCCESS_PROBABILITY: i64 = 90;

/// Estimated cost of overcoming a barrier
#[must_use]
pub fn estimated_cost(severity: i64) -> &'static str {
    match severity {
        1..=3 => "$10K-$25K",
        4..=6 => "$25K-$75K",
        7..=8 => "$75K-$150K",
        9..=10 => "$150K-$300K",
        _ => FALLBACK_COST_RANGE,
    }
}

/// Schedule impact of a barrier
#[must_use]
pub fn timeline_impact(severity: i64) -> &'static str {
    match severity {
        i64::MIN..=3 => "2-4_weeks",
        4..=6 => "1-2_months",
        7..=8 => "2-4_months",
        _ => "4-6_months",
    }
}

/// Success probability (percent) of exploiting a vulnerability
#[must_use]
pub fn success_probability(severity: i64) -> i64 {
    severity
        .saturating_mul(5)
        .saturating_add(40)
        .min(MAX_SUCCESS_PROBABILITY)
}

/// When to engage a prospect about a vulnerability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementTiming {
    /// Ahead of the incumbent contract renewal
    #[default]
    ContractRenewalPeriod,
    /// During the prospect's annual budget planning
    BudgetPlanningCycle,
    /// Right after an incumbent outage or service failure
    ServiceDisruptionWindow,
    /// When decision makers change
    LeadershipTransition,
}

impl EngagementTiming {
    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EngagementTiming::ContractRenewalPeriod => "contract_renewal_period",
            EngagementTiming::BudgetPlanningCycle => "budget_planning_cycle",
            EngagementTiming::ServiceDisruptionWindow => "service_disruption_window",
            EngagementTiming::LeadershipTransition => "leadership_transition",
        }
    }
}

impl fmt::Display for EngagementTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
