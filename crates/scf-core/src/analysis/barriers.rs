//! Switching barrier analysis

use super::AnalysisTask;
use crate::error::AnalysisError;
use crate::strategy::Barrier;
use crate::tables::{estimated_cost, timeline_impact};
use crate::types::{AnalysisRequest, TaskKind};
use async_trait::async_trait;
use scf_config::ConfigDocument;
use serde::Deserialize;

const BARRIERS_KEY: &str = "switching_barriers";

/// Barrier template as written in an industry document
#[derive(Debug, Deserialize)]
struct BarrierTemplate {
    category: String,
    name: String,
    severity: i64,
    description: String,
    mitigation_strategies: Vec<String>,
}

/// Quantifies each barrier template of the industry
#[derive(Debug, Clone, Copy, Default)]
pub struct BarrierAnalysis;

#[async_trait]
impl AnalysisTask for BarrierAnalysis {
    type Output = Vec<Barrier>;

    fn kind(&self) -> TaskKind {
        TaskKind::BarrierAnalysis
    }

    async fn run(
        &self,
        _request: &AnalysisRequest,
        industry_config: &ConfigDocument,
    ) -> Result<Vec<Barrier>, AnalysisError> {
        let Some(templates) = industry_config.sequence(BARRIERS_KEY)? else {
            return Ok(Vec::new());
        };

        templates
            .iter()
            .enumerate()
            .map(|(i, value)| -> Result<Barrier, AnalysisError> {
                let template = BarrierTemplate::deserialize(value)
                    .map_err(|e| AnalysisError::invalid_entry(format!("{BARRIERS_KEY}[{i}]"), e))?;
                Ok(Barrier {
                    estimated_cost: estimated_cost(template.severity).to_string(),
                    timeline_impact: timeline_impact(template.severity).to_string(),
                    category: template.category,
                    name: template.name,
                    severity: template.severity,
                    description: template.description,
                    mitigation_strategies: template.mitigation_strategies,
                })
            })
            .collect()
    }
}
