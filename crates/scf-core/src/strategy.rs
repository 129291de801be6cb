//! Strategy model
//!
//! Partial results produced by the analysis tasks and the final `Strategy`
//! that merges them.

use crate::tables::EngagementTiming;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered name → estimate table
pub type EstimateTable = IndexMap<String, String>;

/// A quantified switching barrier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barrier {
    pub category: String,
    pub name: String,
    pub severity: i64,
    pub description: String,
    pub mitigation_strategies: Vec<String>,
    /// Cost range bucketed from severity
    pub estimated_cost: String,
    /// Schedule impact bucketed from severity
    pub timeline_impact: String,
}

/// A competitor vulnerability framed as a switching opportunity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub vulnerability_type: String,
    pub description: String,
    pub severity: i64,
    pub exploitation_strategy: String,
    /// Percent, `min(90, 40 + 5 * severity)`
    pub success_probability: i64,
    pub recommended_timing: EngagementTiming,
}

/// One stage of the migration plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub duration: String,
    pub key_activities: Vec<String>,
    pub deliverables: Vec<String>,
    pub success_criteria: Vec<String>,
}

/// Migration roadmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub total_timeline: String,
    pub phases: Vec<Phase>,
    pub critical_milestones: Vec<String>,
    pub resource_requirements: EstimateTable,
    pub risk_mitigation_plan: EstimateTable,
}

/// Qualitative probability / impact rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// One assessed risk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskItem {
    pub risk: String,
    pub probability: RiskLevel,
    pub impact: RiskLevel,
    pub mitigation: String,
}

/// Cost of switching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchingCosts {
    pub direct_costs: EstimateTable,
    pub indirect_costs: EstimateTable,
    pub opportunity_costs: EstimateTable,
}

/// Benefits of switching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedBenefits {
    pub efficiency_gains: EstimateTable,
    pub cost_savings: EstimateTable,
    pub revenue_enhancement: EstimateTable,
    pub strategic_advantages: Vec<String>,
}

/// Headline financial figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialProjections {
    pub break_even_months: u32,
    pub roi_percentage: u32,
    pub net_present_value: u64,
    pub payback_period: String,
}

/// Risks of the switch and how to contain them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub implementation_risks: Vec<RiskItem>,
    pub market_risks: Vec<RiskItem>,
    pub mitigation_strategies: Vec<String>,
}

/// Business case for the switch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiAnalysis {
    pub switching_costs: SwitchingCosts,
    pub expected_benefits: ExpectedBenefits,
    pub financial_projections: FinancialProjections,
    pub risk_assessment: RiskAssessment,
}

/// Outputs of the four analysis tasks, in task order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutputs {
    pub barriers: Vec<Barrier>,
    pub opportunities: Vec<Opportunity>,
    pub roadmap: Roadmap,
    pub roi_analysis: RoiAnalysis,
}

/// Complete switching facilitation strategy
///
/// Built once by the synthesizer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    barriers: Vec<Barrier>,
    opportunities: Vec<Opportunity>,
    roadmap: Roadmap,
    roi_analysis: RoiAnalysis,
    success_metrics: Vec<String>,
    executive_summary: String,
}

impl Strategy {
    pub(crate) fn new(
        outputs: AnalysisOutputs,
        success_metrics: Vec<String>,
        executive_summary: String,
    ) -> Self {
        let AnalysisOutputs {
            barriers,
            opportunities,
            roadmap,
            roi_analysis,
        } = outputs;
        Self {
            barriers,
            opportunities,
            roadmap,
            roi_analysis,
            success_metrics,
            executive_summary,
        }
    }

    #[inline]
    #[must_use]
    pub fn barriers(&self) -> &[Barrier] {
        &self.barriers
    }

    #[inline]
    #[must_use]
    pub fn opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }

    #[inline]
    #[must_use]
    pub fn roadmap(&self) -> &Roadmap {
        &self.roadmap
    }

    #[inline]
    #[must_use]
    pub fn roi_analysis(&self) -> &RoiAnalysis {
        &self.roi_analysis
    }

    #[inline]
    #[must_use]
    pub fn success_metrics(&self) -> &[String] {
        &self.success_metrics
    }

    #[inline]
    #[must_use]
    pub fn executive_summary(&self) -> &str {
        &self.executive_summary
    }
}
