//! Core types for SCF
//!
//! Defines the inputs of an analysis:
//! - Orchestrator configuration
//! - Analysis requests and their options
//! - Task identity

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Free-form description of the prospect account
pub type AccountProfile = Map<String, Value>;

/// Orchestrator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// Upper bound on the concurrent analysis region, in milliseconds
    #[serde(default)]
    pub task_timeout_ms: Option<u64>,
}

impl OrchestratorConfig {
    /// Create default configuration (no timeout)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a timeout on the analysis tasks
    #[inline]
    #[must_use]
    pub fn with_task_timeout(mut self, timeout: Duration) -> Self {
        self.task_timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Configured timeout, if any
    #[inline]
    #[must_use]
    pub fn task_timeout(&self) -> Option<Duration> {
        self.task_timeout_ms.map(Duration::from_millis)
    }
}

/// How deep the analysis should go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisDepth {
    /// Headline findings only
    Basic,
    /// Full analysis
    #[default]
    Comprehensive,
}

impl AnalysisDepth {
    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisDepth::Basic => "basic",
            AnalysisDepth::Comprehensive => "comprehensive",
        }
    }
}

impl fmt::Display for AnalysisDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisDepth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(AnalysisDepth::Basic),
            "comprehensive" => Ok(AnalysisDepth::Comprehensive),
            other => Err(format!("unknown analysis depth: {other}")),
        }
    }
}

/// How urgently the switch must happen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineUrgency {
    /// Normal planning horizon
    #[default]
    Standard,
    /// Compressed planning horizon
    Urgent,
}

impl TimelineUrgency {
    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TimelineUrgency::Standard => "standard",
            TimelineUrgency::Urgent => "urgent",
        }
    }
}

impl fmt::Display for TimelineUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimelineUrgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(TimelineUrgency::Standard),
            "urgent" => Ok(TimelineUrgency::Urgent),
            other => Err(format!("unknown timeline urgency: {other}")),
        }
    }
}

/// A single switching analysis request
///
/// Read-only once built; every analysis task borrows the same instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    industry: String,
    competitor: String,
    #[serde(default)]
    account_profile: AccountProfile,
    #[serde(default)]
    analysis_depth: AnalysisDepth,
    #[serde(default)]
    timeline_urgency: TimelineUrgency,
}

impl AnalysisRequest {
    /// Create request with default depth and urgency
    #[inline]
    #[must_use]
    pub fn new(industry: impl Into<String>, competitor: impl Into<String>) -> Self {
        Self {
            industry: industry.into(),
            competitor: competitor.into(),
            account_profile: AccountProfile::new(),
            analysis_depth: AnalysisDepth::default(),
            timeline_urgency: TimelineUrgency::default(),
        }
    }

    /// With account profile
    #[inline]
    #[must_use]
    pub fn with_account_profile(mut self, profile: AccountProfile) -> Self {
        self.account_profile = profile;
        self
    }

    /// With analysis depth
    #[inline]
    #[must_use]
    pub fn with_depth(mut self, depth: AnalysisDepth) -> Self {
        self.analysis_depth = depth;
        self
    }

    /// With timeline urgency
    #[inline]
    #[must_use]
    pub fn with_urgency(mut self, urgency: TimelineUrgency) -> Self {
        self.timeline_urgency = urgency;
        self
    }

    /// Industry key
    #[inline]
    #[must_use]
    pub fn industry(&self) -> &str {
        &self.industry
    }

    /// Competitor key
    #[inline]
    #[must_use]
    pub fn competitor(&self) -> &str {
        &self.competitor
    }

    /// Account profile
    #[inline]
    #[must_use]
    pub fn account_profile(&self) -> &AccountProfile {
        &self.account_profile
    }

    /// Analysis depth
    #[inline]
    #[must_use]
    pub fn analysis_depth(&self) -> AnalysisDepth {
        self.analysis_depth
    }

    /// Timeline urgency
    #[inline]
    #[must_use]
    pub fn timeline_urgency(&self) -> TimelineUrgency {
        self.timeline_urgency
    }
}

/// Identity of one of the four concurrent analyses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Switching barriers from the industry template
    BarrierAnalysis,
    /// Opportunities from competitor vulnerabilities
    OpportunityAnalysis,
    /// Migration roadmap from timeline phases
    RoadmapGeneration,
    /// ROI and business case
    RoiCalculation,
}

impl TaskKind {
    /// All tasks, in result order
    pub const ALL: [TaskKind; 4] = [
        TaskKind::BarrierAnalysis,
        TaskKind::OpportunityAnalysis,
        TaskKind::RoadmapGeneration,
        TaskKind::RoiCalculation,
    ];

    /// Stable name used in logs and errors
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TaskKind::BarrierAnalysis => "barrier_analysis",
            TaskKind::OpportunityAnalysis => "opportunity_analysis",
            TaskKind::RoadmapGeneration => "roadmap_generation",
            TaskKind::RoiCalculation => "roi_calculation",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
