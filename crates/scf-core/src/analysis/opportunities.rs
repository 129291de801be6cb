//! Competitive opportunity analysis

use super::AnalysisTask;
use crate::error::AnalysisError;
use crate::strategy::Opportunity;
use crate::tables::{success_probability, EngagementTiming};
use crate::types::{AnalysisRequest, TaskKind};
use async_trait::async_trait;
use scf_config::ConfigDocument;
use serde::Deserialize;

const VULNERABILITIES_PATH: &str = "competitive_assessment.vulnerabilities";

/// Vulnerability as written in a competitor profile
#[derive(Debug, Deserialize)]
struct Vulnerability {
    category: String,
    description: String,
    severity: i64,
    exploitation_strategy: String,
}

/// Turns competitor vulnerabilities into switching opportunities
#[derive(Debug, Clone, Copy, Default)]
pub struct OpportunityAnalysis;

impl OpportunityAnalysis {
    // Placeholder: every opportunity is timed to the renewal window.
    fn recommended_timing(_vulnerability: &Vulnerability) -> EngagementTiming {
        EngagementTiming::ContractRenewalPeriod
    }
}

#[async_trait]
impl AnalysisTask for OpportunityAnalysis {
    type Output = Vec<Opportunity>;

    fn kind(&self) -> TaskKind {
        TaskKind::OpportunityAnalysis
    }

    async fn run(
        &self,
        _request: &AnalysisRequest,
        competitor_profile: &ConfigDocument,
    ) -> Result<Vec<Opportunity>, AnalysisError> {
        let Some(entries) = competitor_profile.sequence(VULNERABILITIES_PATH)? else {
            return Ok(Vec::new());
        };

        entries
            .iter()
            .enumerate()
            .map(|(i, value)| -> Result<Opportunity, AnalysisError> {
                let vulnerability = Vulnerability::deserialize(value).map_err(|e| {
                    AnalysisError::invalid_entry(format!("{VULNERABILITIES_PATH}[{i}]"), e)
                })?;
                Ok(Opportunity {
                    success_probability: success_probability(vulnerability.severity),
                    recommended_timing: Self::recommended_timing(&vulnerability),
                    vulnerability_type: vulnerability.category,
                    description: vulnerability.description,
                    severity: vulnerability.severity,
                    exploitation_strategy: vulnerability.exploitation_strategy,
                })
            })
            .collect()
    }
}
