//! Migration roadmap generation

use super::AnalysisTask;
use crate::error::AnalysisError;
use crate::strategy::{EstimateTable, Phase, Roadmap};
use crate::types::{AnalysisRequest, TaskKind};
use async_trait::async_trait;
use scf_config::ConfigDocument;

/// Total timeline when the industry does not state one
pub const DEFAULT_TOTAL_TIMELINE: &str = "6-12_months";

const PHASES_KEY: &str = "timeline_phases";
const TIMELINE_KEYS: [&str; 2] = ["typical_switching_timeline", "total_timeline"];

const PHASE_CRITERIA: [&str; 3] = [
    "All deliverables completed",
    "Stakeholder approval received",
    "Success metrics achieved",
];

/// Key activities for a phase key
#[must_use]
pub fn phase_activities(phase_key: &str) -> &'static [&'static str] {
    match phase_key {
        "phase_1_foundation" => &[
            "Requirements analysis and stakeholder alignment",
            "Technical architecture assessment",
            "Migration planning and resource allocation",
        ],
        "phase_2_parallel_operation" => &[
            "Parallel system setup and configuration",
            "Data migration and validation testing",
            "User training and change management",
        ],
        "phase_3_full_migration" => &[
            "Complete system cutover",
            "Business process optimization",
            "Performance monitoring and adjustment",
        ],
        _ => &["Custom phase activities"],
    }
}

/// Display name for a phase key
///
/// Underscores become spaces; each run of letters is capitalised on its
/// first letter and lower-cased after it (`phase_1_foundation` →
/// `Phase 1 Foundation`).
#[must_use]
pub fn phase_title(phase_key: &str) -> String {
    let mut title = String::with_capacity(phase_key.len());
    let mut in_word = false;
    for ch in phase_key.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if in_word {
                title.extend(ch.to_lowercase());
            } else {
                title.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            title.push(ch);
            in_word = false;
        }
    }
    title
}

fn build_phase(phase_key: &str, duration: String) -> Phase {
    let name = phase_title(phase_key);
    Phase {
        key_activities: phase_activities(phase_key)
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
        deliverables: vec![
            format!("{name} completion report"),
            "Stakeholder sign-off".to_string(),
            "Next phase readiness assessment".to_string(),
        ],
        success_criteria: PHASE_CRITERIA.iter().map(|s| (*s).to_string()).collect(),
        name,
        duration,
    }
}

/// Builds the phased migration plan of the industry
#[derive(Debug, Clone, Copy, Default)]
pub struct RoadmapGeneration;

#[async_trait]
impl AnalysisTask for RoadmapGeneration {
    type Output = Roadmap;

    fn kind(&self) -> TaskKind {
        TaskKind::RoadmapGeneration
    }

    async fn run(
        &self,
        _request: &AnalysisRequest,
        industry_config: &ConfigDocument,
    ) -> Result<Roadmap, AnalysisError> {
        let mut total_timeline = None;
        for key in TIMELINE_KEYS {
            if let Some(value) = industry_config.str_value(key)? {
                total_timeline = Some(value.to_string());
                break;
            }
        }

        let phases = industry_config
            .string_map(PHASES_KEY)?
            .unwrap_or_default()
            .into_iter()
            .map(|(key, duration)| build_phase(&key, duration))
            .collect();

        Ok(Roadmap {
            total_timeline: total_timeline.unwrap_or_else(|| DEFAULT_TOTAL_TIMELINE.to_string()),
            phases,
            critical_milestones: Vec::new(),
            resource_requirements: EstimateTable::new(),
            risk_mitigation_plan: EstimateTable::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(document: &ConfigDocument) -> Result<Roadmap, AnalysisError> {
        let request = AnalysisRequest::new("test", "test");
        tokio_test::block_on(RoadmapGeneration.run(&request, document))
    }

    #[test]
    fn titles() {
        assert_eq!(phase_title("phase_1_foundation"), "Phase 1 Foundation");
        assert_eq!(phase_title("phase_2_parallel_operation"), "Phase 2 Parallel Operation");
        assert_eq!(phase_title("PILOT_rollout"), "Pilot Rollout");
        assert_eq!(phase_title("wave_2nd"), "Wave 2Nd");
    }

    #[test]
    fn unknown_phase_gets_generic_activities() {
        assert_eq!(phase_activities("phase_9_celebration"), &["Custom phase activities"]);
        assert_eq!(phase_activities("phase_3_full_migration").len(), 3);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let roadmap = run(&ConfigDocument::new()).unwrap();
        assert_eq!(roadmap.total_timeline, DEFAULT_TOTAL_TIMELINE);
        assert!(roadmap.phases.is_empty());
        assert!(roadmap.critical_milestones.is_empty());
        assert!(roadmap.resource_requirements.is_empty());
        assert!(roadmap.risk_mitigation_plan.is_empty());
    }

    #[test]
    fn typical_timeline_takes_precedence() {
        let document = ConfigDocument::new()
            .with_entry("total_timeline", json!("3-6_months"))
            .with_entry("typical_switching_timeline", json!("9-15_months"));
        assert_eq!(run(&document).unwrap().total_timeline, "9-15_months");

        let document = ConfigDocument::new().with_entry("total_timeline", json!("3-6_months"));
        assert_eq!(run(&document).unwrap().total_timeline, "3-6_months");
    }

    #[test]
    fn phases_follow_document_order() {
        let document = ConfigDocument::new().with_entry(
            PHASES_KEY,
            json!({"phase_2_parallel_operation": "8_weeks", "phase_1_foundation": "4_weeks"}),
        );

        let roadmap = run(&document).unwrap();
        let names: Vec<_> = roadmap.phases.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Phase 2 Parallel Operation", "Phase 1 Foundation"]);

        let first = &roadmap.phases[0];
        assert_eq!(first.duration, "8_weeks");
        assert_eq!(first.key_activities[0], "Parallel system setup and configuration");
        assert_eq!(
            first.deliverables,
            vec![
                "Phase 2 Parallel Operation completion report".to_string(),
                "Stakeholder sign-off".to_string(),
                "Next phase readiness assessment".to_string(),
            ]
        );
        assert_eq!(first.success_criteria.len(), 3);
    }

    #[test]
    fn non_string_duration_is_malformed() {
        let document = ConfigDocument::new().with_entry(PHASES_KEY, json!({"phase_1_foundation": 4}));
        let err = run(&document).unwrap_err();
        assert_eq!(err.field(), Some("timeline_phases.phase_1_foundation"));
    }
}
