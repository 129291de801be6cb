//! ROI and business case calculation
//!
//! The figures are fixed planning estimates; the industry document is
//! required to be resolved but its content does not change the output.

use super::AnalysisTask;
use crate::error::AnalysisError;
use crate::strategy::{
    EstimateTable, ExpectedBenefits, FinancialProjections, RiskAssessment, RiskItem, RiskLevel,
    RoiAnalysis, SwitchingCosts,
};
use crate::types::{AnalysisRequest, TaskKind};
use async_trait::async_trait;
use scf_config::ConfigDocument;

const DIRECT_COSTS: &[(&str, &str)] = &[
    ("software_licensing", "$50K-$150K"),
    ("implementation_services", "$75K-$200K"),
    ("training_programs", "$25K-$75K"),
    ("data_migration", "$30K-$100K"),
];

const INDIRECT_COSTS: &[(&str, &str)] = &[
    ("productivity_loss", "$100K-$250K"),
    ("change_management", "$50K-$125K"),
    ("risk_mitigation", "$25K-$75K"),
];

const OPPORTUNITY_COSTS: &[(&str, &str)] = &[
    ("delayed_benefits", "$200K-$500K"),
    ("competitive_disadvantage", "$100K-$300K"),
];

const EFFICIENCY_GAINS: &[(&str, &str)] = &[
    ("process_automation", "40% efficiency improvement"),
    ("reduced_manual_effort", "60% time savings"),
    ("improved_accuracy", "95% error reduction"),
];

const COST_SAVINGS: &[(&str, &str)] = &[
    ("operational_savings", "$300K annually"),
    ("maintenance_reduction", "$150K annually"),
    ("compliance_efficiency", "$100K annually"),
];

const REVENUE_ENHANCEMENT: &[(&str, &str)] = &[
    ("faster_time_to_market", "$500K opportunity"),
    ("improved_customer_experience", "$750K retention value"),
    ("new_market_capabilities", "$1M expansion potential"),
];

const STRATEGIC_ADVANTAGES: &[&str] = &[
    "Competitive differentiation",
    "Market leadership positioning",
    "Innovation platform foundation",
    "Strategic partnership opportunities",
];

const IMPLEMENTATION_RISKS: &[(&str, RiskLevel, RiskLevel, &str)] = &[
    ("migration_complexity", RiskLevel::Medium, RiskLevel::High, "phased_approach"),
    ("user_adoption", RiskLevel::Medium, RiskLevel::Medium, "extensive_training"),
    ("data_integrity", RiskLevel::Low, RiskLevel::High, "parallel_validation"),
];

const MARKET_RISKS: &[(&str, RiskLevel, RiskLevel, &str)] = &[
    ("competitive_response", RiskLevel::High, RiskLevel::Medium, "rapid_execution"),
    ("market_conditions", RiskLevel::Low, RiskLevel::Medium, "flexible_timeline"),
];

const RISK_MITIGATION: &[&str] = &[
    "Comprehensive testing and validation",
    "Stakeholder communication and training",
    "Contingency planning and rollback procedures",
    "Continuous monitoring and optimization",
];

/// Months until cumulative benefit covers switching cost
pub const BREAK_EVEN_MONTHS: u32 = 18;
/// Projected return on investment, percent
pub const ROI_PERCENTAGE: u32 = 275;
/// Net present value in dollars
pub const NET_PRESENT_VALUE: u64 = 2_500_000;
/// Payback period label
pub const PAYBACK_PERIOD: &str = "15_months";

fn table(entries: &[(&str, &str)]) -> EstimateTable {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn list(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| (*s).to_string()).collect()
}

fn risks(entries: &[(&str, RiskLevel, RiskLevel, &str)]) -> Vec<RiskItem> {
    entries
        .iter()
        .map(|&(risk, probability, impact, mitigation)| RiskItem {
            risk: risk.to_string(),
            probability,
            impact,
            mitigation: mitigation.to_string(),
        })
        .collect()
}

/// Produces the business case block
#[derive(Debug, Clone, Copy, Default)]
pub struct RoiCalculation;

#[async_trait]
impl AnalysisTask for RoiCalculation {
    type Output = RoiAnalysis;

    fn kind(&self) -> TaskKind {
        TaskKind::RoiCalculation
    }

    async fn run(
        &self,
        _request: &AnalysisRequest,
        _industry_config: &ConfigDocument,
    ) -> Result<RoiAnalysis, AnalysisError> {
        Ok(RoiAnalysis {
            switching_costs: SwitchingCosts {
                direct_costs: table(DIRECT_COSTS),
                indirect_costs: table(INDIRECT_COSTS),
                opportunity_costs: table(OPPORTUNITY_COSTS),
            },
            expected_benefits: ExpectedBenefits {
                efficiency_gains: table(EFFICIENCY_GAINS),
                cost_savings: table(COST_SAVINGS),
                revenue_enhancement: table(REVENUE_ENHANCEMENT),
                strategic_advantages: list(STRATEGIC_ADVANTAGES),
            },
            financial_projections: FinancialProjections {
                break_even_months: BREAK_EVEN_MONTHS,
                roi_percentage: ROI_PERCENTAGE,
                net_present_value: NET_PRESENT_VALUE,
                payback_period: PAYBACK_PERIOD.to_string(),
            },
            risk_assessment: RiskAssessment {
                implementation_risks: risks(IMPLEMENTATION_RISKS),
                market_risks: risks(MARKET_RISKS),
                mitigation_strategies: list(RISK_MITIGATION),
            },
        })
    }
}
