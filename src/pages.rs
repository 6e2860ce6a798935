//! Page builders: each appends one logical page of the report to a [`Flow`].
//!
//! The page sequence is fixed: summary, one page per [`TaskCategory`] in order, then the call to
//! action.  Only the number of task cards depends on the input.

use log::debug;

use crate::blocks::{
    AnalysisBlock, ClientBlock, CtaBlock, Footer, HeroMetric, InvestmentBlock, Metric,
    MetricsRow, ReportHeader, SectionTitle, TaskCard,
};
use crate::flow::Flow;
use crate::format;
use crate::model::{ReportData, TaskCategory};
use crate::tokens::DesignTokens;

const HERO_LABEL: &str = "Annual value you could unlock by delegating";

const WHERE_TO_START: &str = "Begin with daily tasks like email and calendar management \u{2014} \
    they'll give you immediate time back while you build trust with your EA. Then expand to \
    weekly and monthly tasks as you develop systems together.";

/// Appends the summary page: header, client, headline metric, metric triad, analysis and the
/// investment breakdown.  It is the first page, so no page break precedes it.
pub fn build_summary_page(flow: &mut Flow, data: &ReportData, tokens: &DesignTokens) {
    let width = tokens.content_width();

    flow.push_block(ReportHeader::new(width));
    flow.push_spacer(8.0);
    flow.push_block(ClientBlock::new(
        data.client_name.as_str(),
        data.date.as_str(),
        width,
    ));
    flow.push_spacer(28.0);
    flow.push_block(HeroMetric::new(
        format::currency(data.annual_value),
        HERO_LABEL,
        width,
    ));
    flow.push_spacer(28.0);
    flow.push_block(MetricsRow::new(
        [
            Metric::new(format::hours(data.weekly_hours), "Reclaimed Weekly"),
            Metric::new(data.total_tasks_ea.to_string(), "Tasks to Delegate"),
            Metric::new(format::multiplier(data.roi_multiplier), "Projected ROI"),
        ],
        width,
    ));
    flow.push_spacer(28.0);
    flow.push_block(AnalysisBlock::new(
        "Summary Analysis",
        &data.analysis_text,
        width,
    ));
    flow.push_spacer(22.0);
    flow.push_block(InvestmentBlock::new(
        data.annual_value,
        data.ea_investment,
        data.net_return,
        data.roi_multiplier,
        width,
    ));
}

/// Appends the page listing the tasks of `category`, one numbered card per task.
pub fn build_tasks_page(
    flow: &mut Flow,
    data: &ReportData,
    category: TaskCategory,
    tokens: &DesignTokens,
) {
    let width = tokens.content_width();
    let tasks = data.tasks(category);
    debug!("{:?} page: {} task card(s)", category, tasks.len());

    flow.push_page_break();
    flow.push_block(SectionTitle::new(category.title(), width).with_subtitle(category.subtitle()));
    flow.push_spacer(12.0);

    for (index, task) in tasks.iter().enumerate() {
        flow.push_block(TaskCard::new(
            index + 1,
            task.name.as_str(),
            &task.description,
            task.time_saved.as_str(),
            width,
        ));
        flow.push_spacer(8.0);
    }
}

/// Appends the closing page: next steps, the call to action and the footer.
pub fn build_cta_page(flow: &mut Flow, tokens: &DesignTokens) {
    let width = tokens.content_width();

    flow.push_page_break();
    flow.push_block(SectionTitle::new("Next Steps", width));
    flow.push_spacer(12.0);
    flow.push_block(AnalysisBlock::new("Where to Start", WHERE_TO_START, width));
    flow.push_spacer(30.0);
    flow.push_block(CtaBlock::new(width));
    flow.push_spacer(35.0);
    flow.push_block(Footer::new(width));
}

/// Builds the complete flow for `data`.
pub fn build_flow(data: &ReportData, tokens: &DesignTokens) -> Flow {
    let mut flow = Flow::new();
    build_summary_page(&mut flow, data, tokens);
    for category in TaskCategory::ALL {
        build_tasks_page(&mut flow, data, category, tokens);
    }
    build_cta_page(&mut flow, tokens);
    debug!(
        "built flow with {} item(s) across {} page(s)",
        flow.items().len(),
        flow.page_count()
    );
    flow
}
