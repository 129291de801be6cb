//! Testing utilities for SCF workspace
//!
//! Shared fixtures: configuration documents, providers, and orchestrators.

#![allow(missing_docs)]

use scf_config::{ConfigDocument, InMemoryProvider};
use scf_core::{AnalysisRequest, SwitchingCostOrchestrator};
use serde_json::{json, Value};
use std::sync::Arc;

pub const TEST_INDUSTRY: &str = "financial_services";
pub const TEST_COMPETITOR: &str = "incumbent_leader";
pub const UNKNOWN_COMPETITOR: &str = "unknown_competitor";

pub fn barrier_template(name: &str, severity: i64) -> Value {
    json!({
        "category": "technical",
        "name": name,
        "severity": severity,
        "description": format!("{name} barrier"),
        "mitigation_strategies": [format!("mitigate {name}")]
    })
}

pub fn vulnerability(category: &str, severity: i64) -> Value {
    json!({
        "category": category,
        "description": format!("{category} weakness"),
        "severity": severity,
        "exploitation_strategy": format!("exploit {category}")
    })
}

pub fn document(value: Value) -> ConfigDocument {
    ConfigDocument::from_value(value).unwrap()
}

/// Minimal industry document: one barrier, one phase, one metric
pub fn minimal_industry_config() -> ConfigDocument {
    document(json!({
        "switching_barriers": [{
            "category": "tech",
            "name": "X",
            "severity": 5,
            "description": "d",
            "mitigation_strategies": ["m"]
        }],
        "timeline_phases": {"phase_1_foundation": "4_weeks"},
        "success_metrics": ["m1"]
    }))
}

/// Fuller industry document covering every known phase
pub fn full_industry_config() -> ConfigDocument {
    document(json!({
        "typical_switching_timeline": "9-15_months",
        "switching_barriers": [
            barrier_template("core_banking_integration", 9),
            barrier_template("regulatory_reporting", 7),
            barrier_template("staff_retraining", 3)
        ],
        "timeline_phases": {
            "phase_1_foundation": "6_weeks",
            "phase_2_parallel_operation": "12_weeks",
            "phase_3_full_migration": "8_weeks"
        },
        "success_metrics": ["zero_downtime_cutover", "regulatory_audit_pass"]
    }))
}

pub fn competitor_profile() -> ConfigDocument {
    document(json!({
        "competitor_type": "incumbent",
        "market_position": "leader",
        "competitive_assessment": {
            "strengths": ["brand"],
            "weaknesses": ["legacy_stack"],
            "vulnerabilities": [vulnerability("pricing", 6), vulnerability("innovation", 10)]
        }
    }))
}

pub fn test_provider() -> InMemoryProvider {
    InMemoryProvider::new()
        .with_industry(TEST_INDUSTRY, full_industry_config())
        .with_industry("minimal", minimal_industry_config())
        .with_competitor(TEST_COMPETITOR, competitor_profile())
}

pub fn setup_test_orchestrator() -> SwitchingCostOrchestrator {
    orchestrator_with(test_provider())
}

pub fn orchestrator_with(provider: InMemoryProvider) -> SwitchingCostOrchestrator {
    SwitchingCostOrchestrator::new(Arc::new(provider))
}

pub fn test_request() -> AnalysisRequest {
    AnalysisRequest::new(TEST_INDUSTRY, TEST_COMPETITOR)
}
