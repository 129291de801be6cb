//! Switching Cost Orchestrator
//!
//! Entry point of the engine:
//! - Resolves the industry template and competitor profile
//! - Runs the four analyses concurrently behind a join barrier
//! - Hands their outputs to the synthesizer

use crate::analysis::{
    AnalysisTask, BarrierAnalysis, OpportunityAnalysis, RoadmapGeneration, RoiCalculation,
};
use crate::error::{OrchestratorError, OrchestratorResult};
use crate::strategy::{AnalysisOutputs, Strategy};
use crate::synthesis::Synthesizer;
use crate::types::{AnalysisRequest, OrchestratorConfig};
use futures::TryFutureExt;
use scf_config::{ConfigDocument, ConfigProvider};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::Instrument;

/// The analysis orchestrator
///
/// Holds no per-request state; one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct SwitchingCostOrchestrator {
    /// Configuration
    config: OrchestratorConfig,
    /// Source of industry and competitor documents
    provider: Arc<dyn ConfigProvider>,
    /// Final merge step
    synthesizer: Synthesizer,
}

impl SwitchingCostOrchestrator {
    /// Create orchestrator with default configuration
    #[inline]
    #[must_use]
    pub fn new(provider: Arc<dyn ConfigProvider>) -> Self {
        Self {
            config: OrchestratorConfig::default(),
            provider,
            synthesizer: Synthesizer::new(),
        }
    }

    /// With configuration
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: OrchestratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Analyze a switching scenario
    ///
    /// # Workflow
    /// 1. Resolve industry config (unknown industry aborts here)
    /// 2. Resolve competitor profile (unknown competitor uses the default)
    /// 3. Run barrier, opportunity, roadmap and ROI analyses concurrently
    /// 4. Synthesize the strategy
    ///
    /// # Errors
    /// - `OrchestratorError::ConfigurationNotFound` for an unknown industry
    /// - `OrchestratorError::TaskFailed` for the first failing analysis
    /// - `OrchestratorError::MalformedConfiguration` for mistyped success metrics
    /// - `OrchestratorError::Timeout` if a configured timeout expires
    #[tracing::instrument(
        name = "analyze",
        skip_all,
        fields(industry = %request.industry(), competitor = %request.competitor())
    )]
    pub async fn analyze(&self, request: &AnalysisRequest) -> OrchestratorResult<Strategy> {
        let started = Instant::now();

        let industry_config = self.provider.get_industry_config(request.industry())?;
        let competitor_profile = self.provider.get_competitor_profile(request.competitor())?;
        tracing::debug!(
            depth = %request.analysis_depth(),
            urgency = %request.timeline_urgency(),
            "configuration resolved"
        );

        let outputs = self
            .run_analyses(request, &industry_config, &competitor_profile)
            .await?;
        let strategy = self.synthesizer.synthesize(outputs, &industry_config)?;

        tracing::info!(
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            barriers = strategy.barriers().len(),
            opportunities = strategy.opportunities().len(),
            phases = strategy.roadmap().phases.len(),
            "analysis completed"
        );

        Ok(strategy)
    }

    /// Fan out the four analyses and wait for all of them
    async fn run_analyses(
        &self,
        request: &AnalysisRequest,
        industry_config: &ConfigDocument,
        competitor_profile: &ConfigDocument,
    ) -> OrchestratorResult<AnalysisOutputs> {
        let joined = async {
            tokio::try_join!(
                run_task(&BarrierAnalysis, request, industry_config),
                run_task(&OpportunityAnalysis, request, competitor_profile),
                run_task(&RoadmapGeneration, request, industry_config),
                run_task(&RoiCalculation, request, industry_config),
            )
        };

        let (barriers, opportunities, roadmap, roi_analysis) =
            within_deadline(self.config.task_timeout(), joined).await?;

        Ok(AnalysisOutputs {
            barriers,
            opportunities,
            roadmap,
            roi_analysis,
        })
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Get configuration provider
    #[inline]
    #[must_use]
    pub fn provider(&self) -> &dyn ConfigProvider {
        self.provider.as_ref()
    }
}

/// Await `work`, failing with `Timeout` once `limit` elapses
///
/// No limit means wait indefinitely. The deadline is only observed while
/// `work` is suspended.
async fn within_deadline<T>(
    limit: Option<Duration>,
    work: impl Future<Output = OrchestratorResult<T>>,
) -> OrchestratorResult<T> {
    let Some(limit) = limit else {
        return work.await;
    };
    let duration_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
    tokio::time::timeout(limit, work).await.unwrap_or_else(|_| {
        tracing::warn!(limit_ms = duration_ms, "analysis timed out");
        Err(OrchestratorError::Timeout { duration_ms })
    })
}

/// Run one task, tagging any failure with the task's identity
async fn run_task<T: AnalysisTask>(
    task: &T,
    request: &AnalysisRequest,
    document: &ConfigDocument,
) -> OrchestratorResult<T::Output> {
    let kind = task.kind();
    task.run(request, document)
        .map_err(|source| {
            tracing::warn!(task = %kind, error = %source, "analysis task failed");
            OrchestratorError::TaskFailed { task: kind, source }
        })
        .instrument(tracing::debug_span!("analysis_task", task = %kind))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::types::TaskKind;
    use scf_config::{DocumentKind, InMemoryProvider};
    use serde_json::json;

    fn orchestrator(provider: InMemoryProvider) -> SwitchingCostOrchestrator {
        SwitchingCostOrchestrator::new(Arc::new(provider))
    }

    #[tokio::test]
    async fn orchestrator_creation() {
        let coordinator = orchestrator(InMemoryProvider::new());
        assert_eq!(coordinator.config().task_timeout(), None);
        assert!(coordinator.provider().keys(DocumentKind::Industry).is_empty());
    }

    #[tokio::test]
    async fn unknown_industry_aborts() {
        let coordinator = orchestrator(InMemoryProvider::new());
        let err = coordinator
            .analyze(&AnalysisRequest::new("energy", "acme"))
            .await
            .unwrap_err();
        assert!(matches!(err, OrchestratorError::ConfigurationNotFound { .. }));
    }

    #[tokio::test]
    async fn empty_industry_produces_default_strategy() {
        let provider = InMemoryProvider::new().with_industry("retail", ConfigDocument::new());
        let strategy = orchestrator(provider)
            .analyze(&AnalysisRequest::new("retail", "unknown"))
            .await
            .unwrap();

        assert!(strategy.barriers().is_empty());
        assert!(strategy.opportunities().is_empty());
        assert_eq!(strategy.roadmap().total_timeline, "6-12_months");
        assert_eq!(strategy.success_metrics().len(), 4);
    }

    #[tokio::test]
    async fn failing_task_is_identified() {
        let provider = InMemoryProvider::new().with_industry(
            "retail",
            ConfigDocument::new().with_entry("timeline_phases", json!(["not", "a", "mapping"])),
        );
        let err = orchestrator(provider)
            .analyze(&AnalysisRequest::new("retail", "unknown"))
            .await
            .unwrap_err();

        assert_eq!(err.failed_task(), Some(TaskKind::RoadmapGeneration));
        assert_eq!(err.malformed_field(), Some("timeline_phases"));
    }

    #[tokio::test]
    async fn generous_timeout_does_not_interfere() {
        let provider = InMemoryProvider::new().with_industry("retail", ConfigDocument::new());
        let coordinator = orchestrator(provider)
            .with_config(OrchestratorConfig::new().with_task_timeout(Duration::from_secs(5)));

        assert!(coordinator
            .analyze(&AnalysisRequest::new("retail", "unknown"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn deadline_expiry_is_a_timeout() {
        tokio::time::pause();
        let err = within_deadline(
            Some(Duration::from_millis(250)),
            futures::future::pending::<OrchestratorResult<()>>(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, OrchestratorError::Timeout { duration_ms: 250 }));
        assert!(!err.is_caller_error());
    }

    #[tokio::test]
    async fn deadline_allows_suspended_work_that_finishes_in_time() {
        tokio::time::pause();
        let work = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            Ok(7)
        };
        assert_eq!(within_deadline(Some(Duration::from_secs(1)), work).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn no_deadline_waits_for_work() {
        tokio::time::pause();
        let work = async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("done")
        };
        assert_eq!(within_deadline(None, work).await.unwrap(), "done");
    }

    #[tokio::test]
    async fn deadline_passes_task_failures_through() {
        let work = async {
            Err::<(), _>(OrchestratorError::TaskFailed {
                task: TaskKind::BarrierAnalysis,
                source: AnalysisError::invalid_entry("switching_barriers[0]", "missing field"),
            })
        };
        let err = within_deadline(Some(Duration::from_secs(1)), work)
            .await
            .unwrap_err();
        assert_eq!(err.failed_task(), Some(TaskKind::BarrierAnalysis));
    }
}
