//! Plain-text rendering of a strategy

use scf_core::{AnalysisRequest, Strategy};
use std::fmt;

/// Human-readable report for one analysis
pub(crate) struct TextReport<'a> {
    request: &'a AnalysisRequest,
    strategy: &'a Strategy,
}

impl<'a> TextReport<'a> {
    pub(crate) fn new(request: &'a AnalysisRequest, strategy: &'a Strategy) -> Self {
        Self { request, strategy }
    }

    fn write_headline(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy = self.strategy;
        let projections = &strategy.roi_analysis().financial_projections;

        writeln!(f, "Switching Strategy")?;
        writeln!(f, "==================")?;
        writeln!(f)?;
        writeln!(f, "Industry:      {}", self.request.industry())?;
        writeln!(f, "Competitor:    {}", self.request.competitor())?;
        writeln!(f, "Barriers:      {}", strategy.barriers().len())?;
        writeln!(f, "Opportunities: {}", strategy.opportunities().len())?;
        writeln!(f, "Phases:        {}", strategy.roadmap().phases.len())?;
        writeln!(f, "Timeline:      {}", strategy.roadmap().total_timeline)?;
        writeln!(f, "ROI:           {}%", projections.roi_percentage)?;
        writeln!(f, "Break-even:    {} months", projections.break_even_months)?;
        writeln!(f)
    }

    fn write_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let barriers = self.strategy.barriers();
        if !barriers.is_empty() {
            writeln!(f, "Barriers:")?;
            for barrier in barriers {
                writeln!(
                    f,
                    "  [{}] {} ({}, {})",
                    barrier.severity, barrier.name, barrier.estimated_cost, barrier.timeline_impact
                )?;
            }
            writeln!(f)?;
        }

        let opportunities = self.strategy.opportunities();
        if !opportunities.is_empty() {
            writeln!(f, "Opportunities:")?;
            for opportunity in opportunities {
                writeln!(
                    f,
                    "  {} - {}% ({})",
                    opportunity.vulnerability_type,
                    opportunity.success_probability,
                    opportunity.recommended_timing
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_headline(f)?;
        self.write_details(f)?;
        f.write_str(self.strategy.executive_summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scf_test_utils::{setup_test_orchestrator, test_request};

    #[tokio::test]
    async fn report_lists_headline_figures() {
        let request = test_request();
        let strategy = setup_test_orchestrator().analyze(&request).await.unwrap();
        let text = TextReport::new(&request, &strategy).to_string();

        assert!(text.starts_with("Switching Strategy\n"));
        assert!(text.contains("Industry:      financial_services\n"));
        assert!(text.contains("Barriers:      3\n"));
        assert!(text.contains("Opportunities: 2\n"));
        assert!(text.contains("ROI:           275%\n"));
        assert!(text.contains("Break-even:    18 months\n"));
        assert!(text.contains("  pricing - 70% (contract_renewal_period)\n"));
        assert!(text.ends_with(strategy.executive_summary()));
    }

    #[tokio::test]
    async fn empty_sections_are_omitted() {
        let request = AnalysisRequest::new("minimal", "nobody");
        let strategy = setup_test_orchestrator().analyze(&request).await.unwrap();
        let text = TextReport::new(&request, &strategy).to_string();

        assert!(!text.contains("Opportunities:\n"));
        assert_eq!(text.matches("Barriers:").count(), 2);
    }
}
