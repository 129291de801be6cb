//! SCF Core - Switching Cost Facilitation Orchestrator
//!
//! Produces a switching strategy for an industry/competitor pair:
//! - Resolves the industry template and competitor profile
//! - Runs barrier, opportunity, roadmap and ROI analyses concurrently
//! - Synthesizes one immutable `Strategy` with an executive summary
//!
//! # Example
//!
//! ```rust,ignore
//! use scf_config::DirectoryProvider;
//! use scf_core::{AnalysisRequest, SwitchingCostOrchestrator};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = DirectoryProvider::load("./config").await?;
//! let orchestrator = SwitchingCostOrchestrator::new(Arc::new(provider));
//!
//! let request = AnalysisRequest::new("financial_services", "incumbent_leader");
//! let strategy = orchestrator.analyze(&request).await?;
//!
//! println!("{}", strategy.executive_summary());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod analysis;
pub mod error;
pub mod orchestrator;
pub mod strategy;
pub mod synthesis;
pub mod tables;
pub mod types;

// Re-exports for convenience
pub use analysis::{
    AnalysisTask, BarrierAnalysis, OpportunityAnalysis, RoadmapGeneration, RoiCalculation,
};
pub use error::{AnalysisError, OrchestratorError, OrchestratorResult};
pub use orchestrator::SwitchingCostOrchestrator;
pub use strategy::{
    AnalysisOutputs, Barrier, EstimateTable, ExpectedBenefits, FinancialProjections,
    Opportunity, Phase, RiskAssessment, RiskItem, RiskLevel, RoiAnalysis, Roadmap, Strategy,
    SwitchingCosts,
};
pub use synthesis::{Synthesizer, DEFAULT_SUCCESS_METRICS};
pub use tables::{estimated_cost, success_probability, timeline_impact, EngagementTiming};
pub use types::{
    AccountProfile, AnalysisDepth, AnalysisRequest, OrchestratorConfig, TaskKind,
    TimelineUrgency,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with SCF Core
    pub use crate::{
        AnalysisRequest, OrchestratorConfig, OrchestratorError, Strategy,
        SwitchingCostOrchestrator,
    };
    pub use scf_config::{ConfigProvider, DirectoryProvider, InMemoryProvider};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
