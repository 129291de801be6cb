//! Analysis tasks
//!
//! Four independent analyses run concurrently for each request:
//!
//! | task                  | input document     | output           |
//! |-----------------------|--------------------|------------------|
//! | `BarrierAnalysis`     | industry config    | `Vec<Barrier>`   |
//! | `OpportunityAnalysis` | competitor profile | `Vec<Opportunity>` |
//! | `RoadmapGeneration`   | industry config    | `Roadmap`        |
//! | `RoiCalculation`      | industry config    | `RoiAnalysis`    |
//!
//! Tasks only read the request and document they are handed.

use crate::error::AnalysisError;
use crate::types::{AnalysisRequest, TaskKind};
use async_trait::async_trait;
use scf_config::ConfigDocument;

mod barriers;
mod opportunities;
mod roadmap;
mod roi;

pub use barriers::BarrierAnalysis;
pub use opportunities::OpportunityAnalysis;
pub use roadmap::{phase_activities, phase_title, RoadmapGeneration, DEFAULT_TOTAL_TIMELINE};
pub use roi::{
    RoiCalculation, BREAK_EVEN_MONTHS, NET_PRESENT_VALUE, PAYBACK_PERIOD, ROI_PERCENTAGE,
};

/// One analysis over a request and a configuration document
#[async_trait]
pub trait AnalysisTask: Send + Sync {
    /// Partial result type
    type Output: Send;

    /// Task identity for logs and errors
    fn kind(&self) -> TaskKind;

    /// Run the analysis
    async fn run(
        &self,
        request: &AnalysisRequest,
        document: &ConfigDocument,
    ) -> Result<Self::Output, AnalysisError>;
}
