//! Self-sized, self-drawing units of the report.
//!
//! Every block stores the data it shows plus its width, reports its height up front and records
//! its appearance into a [`Canvas`] in its own frame (see [`crate::canvas`] for the coordinate
//! conventions).  Blocks are built fresh for each document and never share state; colors come
//! from the [`DesignTokens`] passed to [`Drawable::draw`].

use crate::canvas::{Canvas, TextStyle};
use crate::format;
use crate::tokens::DesignTokens;
use crate::wrap;

/// Characters per line in the analysis panel.
pub const ANALYSIS_LINE_CHARS: usize = 95;
/// Vertical distance between wrapped analysis lines.
pub const ANALYSIS_LINE_PITCH: f64 = 18.0;
/// Title and padding height of the analysis panel, excluding its text lines.
pub const ANALYSIS_PADDING: f64 = 45.0;
/// Longest task description shown on a card before it is truncated.
pub const DESCRIPTION_LIMIT: usize = 90;

/// Sizing and drawing contract shared by all blocks.
pub trait Drawable {
    /// Width in points.
    fn width(&self) -> f64;

    /// Height in points.
    fn height(&self) -> f64;

    /// Records the block's shapes into `canvas`.
    fn draw(&self, canvas: &mut Canvas, tokens: &DesignTokens);
}

/// Brand line, accent rule and report title.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportHeader {
    width: f64,
}

impl ReportHeader {
    pub const TITLE: &'static str = "Time Freedom Report";
    const BRAND: &'static str = "ASSISTANT LAUNCH";

    pub fn new(width: f64) -> Self {
        Self { width }
    }
}

impl Drawable for ReportHeader {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        80.0
    }

    fn draw(&self, canvas: &mut Canvas, tokens: &DesignTokens) {
        let palette = &tokens.palette;
        let h = self.height();
        canvas.text(0.0, h - 12.0, TextStyle::bold(10, palette.accent), Self::BRAND);
        canvas.line((0.0, h - 20.0), (100.0, h - 20.0), 2.0, palette.accent);
        canvas.text(0.0, h - 55.0, TextStyle::bold(26, palette.ink), Self::TITLE);
    }
}

/// Who the report was prepared for, and when.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientBlock {
    name: String,
    date: String,
    width: f64,
}

impl ClientBlock {
    pub fn new(name: impl Into<String>, date: impl Into<String>, width: f64) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            width,
        }
    }
}

impl Drawable for ClientBlock {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        55.0
    }

    fn draw(&self, canvas: &mut Canvas, tokens: &DesignTokens) {
        let palette = &tokens.palette;
        let h = self.height();
        let muted = TextStyle::regular(10, palette.ink_muted);
        canvas.text(0.0, h - 12.0, muted, "Prepared for");
        canvas.text(0.0, h - 32.0, TextStyle::bold(18, palette.ink), self.name.as_str());
        canvas.text(0.0, h - 50.0, muted, self.date.as_str());
    }
}

/// The headline figure in large type.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroMetric {
    value: String,
    label: String,
    width: f64,
}

impl HeroMetric {
    pub fn new(value: impl Into<String>, label: impl Into<String>, width: f64) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            width,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Drawable for HeroMetric {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        95.0
    }

    fn draw(&self, canvas: &mut Canvas, tokens: &DesignTokens) {
        let palette = &tokens.palette;
        canvas.text(0.0, 38.0, TextStyle::bold(56, palette.ink), self.value.as_str());
        canvas.text(
            0.0,
            10.0,
            TextStyle::regular(12, palette.ink_secondary),
            self.label.as_str(),
        );
    }
}

/// A value and the caption printed beneath it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

impl Metric {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Three metrics side by side in tinted boxes.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricsRow {
    metrics: [Metric; 3],
    width: f64,
}

impl MetricsRow {
    const GAP: f64 = 16.0;

    pub fn new(metrics: [Metric; 3], width: f64) -> Self {
        Self { metrics, width }
    }

    pub fn metrics(&self) -> &[Metric; 3] {
        &self.metrics
    }

    fn box_width(&self) -> f64 {
        (self.width - 2.0 * Self::GAP) / 3.0
    }
}

impl Drawable for MetricsRow {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        85.0
    }

    fn draw(&self, canvas: &mut Canvas, tokens: &DesignTokens) {
        let palette = &tokens.palette;
        let box_width = self.box_width();
        let mut x = 0.0;
        for metric in &self.metrics {
            canvas.round_rect(x, 0.0, box_width, self.height(), 8.0, palette.accent_light);
            let centre = x + box_width / 2.0;
            canvas.text_centred(
                centre,
                42.0,
                TextStyle::bold(26, palette.ink),
                metric.value.as_str(),
            );
            canvas.text_centred(
                centre,
                18.0,
                TextStyle::regular(10, palette.ink_secondary),
                metric.label.as_str(),
            );
            x += box_width + Self::GAP;
        }
    }
}

/// A titled paragraph with an accent bar on its left edge.
///
/// The text is wrapped once, at construction, and the height follows from the line count.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisBlock {
    title: String,
    lines: Vec<String>,
    width: f64,
}

impl AnalysisBlock {
    const INSET: f64 = 16.0;

    pub fn new(title: impl Into<String>, text: &str, width: f64) -> Self {
        Self {
            title: title.into(),
            lines: wrap::wrap_text(text, ANALYSIS_LINE_CHARS),
            width,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Drawable for AnalysisBlock {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.lines.len() as f64 * ANALYSIS_LINE_PITCH + ANALYSIS_PADDING
    }

    fn draw(&self, canvas: &mut Canvas, tokens: &DesignTokens) {
        let palette = &tokens.palette;
        let h = self.height();
        canvas.rect(0.0, 0.0, 4.0, h, palette.accent);
        canvas.text(
            Self::INSET,
            h - 18.0,
            TextStyle::bold(11, palette.ink),
            self.title.as_str(),
        );

        let body = TextStyle::regular(11, palette.ink_secondary);
        let mut y = h - 40.0;
        for line in &self.lines {
            canvas.text(Self::INSET, y, body, line.as_str());
            y -= ANALYSIS_LINE_PITCH;
        }
    }
}

/// Value, cost, net return and ROI badge.
#[derive(Clone, Debug, PartialEq)]
pub struct InvestmentBlock {
    value: u64,
    cost: u64,
    net: u64,
    roi: f64,
    width: f64,
}

impl InvestmentBlock {
    const PADDING: f64 = 20.0;
    const BADGE_WIDTH: f64 = 55.0;
    const BADGE_HEIGHT: f64 = 22.0;

    pub fn new(value: u64, cost: u64, net: u64, roi: f64, width: f64) -> Self {
        Self {
            value,
            cost,
            net,
            roi,
            width,
        }
    }
}

impl Drawable for InvestmentBlock {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        125.0
    }

    fn draw(&self, canvas: &mut Canvas, tokens: &DesignTokens) {
        let palette = &tokens.palette;
        let (w, h) = (self.width, self.height());
        let left = Self::PADDING;
        let right = w - Self::PADDING;

        canvas.round_rect(0.0, 0.0, w, h, 8.0, palette.background);
        canvas.text(
            left,
            h - 20.0,
            TextStyle::bold(9, palette.ink_muted),
            "THE INVESTMENT",
        );

        let rows = [
            ("Annual value unlocked", format::currency(self.value)),
            (
                "EA investment (annual)",
                format!("-{}", format::currency(self.cost)),
            ),
        ];
        let mut y = h - 48.0;
        for (label, amount) in rows {
            canvas.text(left, y, TextStyle::regular(12, palette.ink_secondary), label);
            canvas.text_right(right, y, TextStyle::bold(12, palette.ink), amount);
            y -= 26.0;
        }

        canvas.line((left, y + 12.0), (right, y + 12.0), 1.0, palette.divider);

        y -= 8.0;
        canvas.text(
            left,
            y,
            TextStyle::bold(13, palette.ink),
            "Net annual return",
        );
        canvas.text_right(
            right,
            y,
            TextStyle::bold(16, palette.accent),
            format::currency(self.net),
        );

        let badge_x = w - 185.0;
        canvas.round_rect(
            badge_x,
            y - 5.0,
            Self::BADGE_WIDTH,
            Self::BADGE_HEIGHT,
            Self::BADGE_HEIGHT / 2.0,
            palette.accent,
        );
        canvas.text_centred(
            badge_x + Self::BADGE_WIDTH / 2.0,
            y + 1.0,
            TextStyle::bold(10, palette.white),
            format::roi_badge(self.roi),
        );
    }
}

/// Page heading with an optional subtitle.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionTitle {
    title: String,
    subtitle: Option<String>,
    width: f64,
}

impl SectionTitle {
    pub fn new(title: impl Into<String>, width: f64) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            width,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        let subtitle = subtitle.into();
        self.subtitle = (!subtitle.is_empty()).then_some(subtitle);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }
}

impl Drawable for SectionTitle {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        if self.subtitle.is_some() {
            60.0
        } else {
            35.0
        }
    }

    fn draw(&self, canvas: &mut Canvas, tokens: &DesignTokens) {
        let palette = &tokens.palette;
        let h = self.height();
        canvas.text(0.0, h - 22.0, TextStyle::bold(22, palette.ink), self.title.as_str());
        if let Some(subtitle) = &self.subtitle {
            canvas.text(
                0.0,
                h - 45.0,
                TextStyle::regular(11, palette.ink_secondary),
                subtitle.as_str(),
            );
        }
    }
}

/// A numbered task with its description and time saving.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskCard {
    number: usize,
    name: String,
    description: String,
    time_saved: String,
    width: f64,
}

impl TaskCard {
    const TEXT_X: f64 = 42.0;

    pub fn new(
        number: usize,
        name: impl Into<String>,
        description: &str,
        time_saved: impl Into<String>,
        width: f64,
    ) -> Self {
        Self {
            number,
            name: name.into(),
            description: wrap::truncate(description, DESCRIPTION_LIMIT).into_owned(),
            time_saved: time_saved.into(),
            width,
        }
    }

    /// 1-based position of the task within its category.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description as displayed, after truncation.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Drawable for TaskCard {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        70.0
    }

    fn draw(&self, canvas: &mut Canvas, tokens: &DesignTokens) {
        let palette = &tokens.palette;
        let h = self.height();

        canvas.circle(16.0, h - 20.0, 14.0, palette.accent);
        canvas.text_centred(
            16.0,
            h - 25.0,
            TextStyle::bold(12, palette.white),
            self.number.to_string(),
        );

        canvas.text(
            Self::TEXT_X,
            h - 16.0,
            TextStyle::bold(13, palette.ink),
            self.name.as_str(),
        );
        canvas.text(
            Self::TEXT_X,
            h - 35.0,
            TextStyle::regular(10, palette.ink_secondary),
            self.description.as_str(),
        );
        canvas.text(
            Self::TEXT_X,
            h - 54.0,
            TextStyle::regular(9, palette.ink_muted),
            format!("Time saved: {}", self.time_saved),
        );

        canvas.line((0.0, 2.0), (self.width, 2.0), 0.5, palette.divider);
    }
}

/// Closing panel with the consultation button.
#[derive(Clone, Debug, PartialEq)]
pub struct CtaBlock {
    width: f64,
}

impl CtaBlock {
    const BUTTON_WIDTH: f64 = 220.0;
    const BUTTON_HEIGHT: f64 = 42.0;
    const BUTTON_Y: f64 = 38.0;

    pub fn new(width: f64) -> Self {
        Self { width }
    }
}

impl Drawable for CtaBlock {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        130.0
    }

    fn draw(&self, canvas: &mut Canvas, tokens: &DesignTokens) {
        let palette = &tokens.palette;
        let (w, h) = (self.width, self.height());
        let centre = w / 2.0;

        canvas.round_rect(0.0, 0.0, w, h, 12.0, palette.accent_light);
        canvas.text_centred(
            centre,
            h - 38.0,
            TextStyle::bold(20, palette.ink),
            "Ready to Get Started?",
        );

        let button_x = (w - Self::BUTTON_WIDTH) / 2.0;
        canvas.round_rect(
            button_x,
            Self::BUTTON_Y,
            Self::BUTTON_WIDTH,
            Self::BUTTON_HEIGHT,
            Self::BUTTON_HEIGHT / 2.0,
            palette.accent,
        );
        canvas.text_centred(
            centre,
            Self::BUTTON_Y + 14.0,
            TextStyle::bold(12, palette.white),
            "Schedule Free Consultation",
        );
        canvas.text_centred(
            centre,
            16.0,
            TextStyle::regular(10, palette.ink_secondary),
            "calendly.com/assistantlaunch/discovery-call",
        );
    }
}

/// Divider and brand line closing the document.
#[derive(Clone, Debug, PartialEq)]
pub struct Footer {
    width: f64,
}

impl Footer {
    pub fn new(width: f64) -> Self {
        Self { width }
    }
}

impl Drawable for Footer {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        28.0
    }

    fn draw(&self, canvas: &mut Canvas, tokens: &DesignTokens) {
        let palette = &tokens.palette;
        let h = self.height();
        canvas.line((0.0, h - 5.0), (self.width, h - 5.0), 1.0, palette.divider);
        canvas.text_centred(
            self.width / 2.0,
            4.0,
            TextStyle::regular(9, palette.ink_muted),
            "Assistant Launch  \u{2022}  assistantlaunch.com",
        );
    }
}

/// Any block that can appear in a [`Flow`](crate::flow::Flow).
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutBlock {
    Header(ReportHeader),
    Client(ClientBlock),
    Hero(HeroMetric),
    Metrics(MetricsRow),
    Analysis(AnalysisBlock),
    Investment(InvestmentBlock),
    SectionTitle(SectionTitle),
    Task(TaskCard),
    Cta(CtaBlock),
    Footer(Footer),
}

impl LayoutBlock {
    fn as_drawable(&self) -> &dyn Drawable {
        match self {
            LayoutBlock::Header(block) => block,
            LayoutBlock::Client(block) => block,
            LayoutBlock::Hero(block) => block,
            LayoutBlock::Metrics(block) => block,
            LayoutBlock::Analysis(block) => block,
            LayoutBlock::Investment(block) => block,
            LayoutBlock::SectionTitle(block) => block,
            LayoutBlock::Task(block) => block,
            LayoutBlock::Cta(block) => block,
            LayoutBlock::Footer(block) => block,
        }
    }

    /// Records the block into a fresh canvas.
    pub fn display_list(&self, tokens: &DesignTokens) -> Canvas {
        let mut canvas = Canvas::new();
        self.draw(&mut canvas, tokens);
        canvas
    }

    /// Outline entry for blocks that open a logical page.
    pub fn outline_title(&self) -> Option<&str> {
        match self {
            LayoutBlock::Header(_) => Some(ReportHeader::TITLE),
            LayoutBlock::SectionTitle(block) => Some(block.title()),
            _ => None,
        }
    }
}

impl Drawable for LayoutBlock {
    fn width(&self) -> f64 {
        self.as_drawable().width()
    }

    fn height(&self) -> f64 {
        self.as_drawable().height()
    }

    fn draw(&self, canvas: &mut Canvas, tokens: &DesignTokens) {
        self.as_drawable().draw(canvas, tokens);
    }
}

macro_rules! impl_from_block {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for LayoutBlock {
                fn from(block: $ty) -> Self {
                    LayoutBlock::$variant(block)
                }
            }
        )*
    };
}

impl_from_block! {
    Header => ReportHeader,
    Client => ClientBlock,
    Hero => HeroMetric,
    Metrics => MetricsRow,
    Analysis => AnalysisBlock,
    Investment => InvestmentBlock,
    SectionTitle => SectionTitle,
    Task => TaskCard,
    Cta => CtaBlock,
    Footer => Footer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Shape, TextAnchor};
    use crate::tokens::FontWeight;

    const WIDTH: f64 = 504.0;

    fn texts(block: impl Into<LayoutBlock>) -> Vec<String> {
        let block: LayoutBlock = block.into();
        block
            .display_list(&DesignTokens::default())
            .texts()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn analysis_height_follows_line_count() {
        let empty = AnalysisBlock::new("Summary Analysis", "", WIDTH);
        assert_eq!(empty.height(), ANALYSIS_PADDING);

        let text = "word ".repeat(40);
        let block = AnalysisBlock::new("Summary Analysis", &text, WIDTH);
        assert_eq!(block.lines().len(), 3);
        assert_eq!(block.height(), 3.0 * ANALYSIS_LINE_PITCH + ANALYSIS_PADDING);
    }

    #[test]
    fn analysis_lines_step_down_from_title() {
        let block = AnalysisBlock::new("Where to Start", &"word ".repeat(40), WIDTH);
        let canvas = LayoutBlock::from(block.clone()).display_list(&DesignTokens::default());
        let baselines: Vec<f64> = canvas
            .shapes()
            .iter()
            .filter_map(|shape| match shape {
                Shape::Text { y, style, .. } if style.size == 11 => Some(*y),
                _ => None,
            })
            .collect();
        let h = block.height();
        assert_eq!(baselines, vec![h - 18.0, h - 40.0, h - 58.0, h - 76.0]);
    }

    #[test]
    fn section_title_height_depends_on_subtitle() {
        assert_eq!(SectionTitle::new("Next Steps", WIDTH).height(), 35.0);
        let titled = SectionTitle::new("Top 5 Daily Tasks", WIDTH).with_subtitle("Every day");
        assert_eq!(titled.height(), 60.0);
        assert_eq!(
            SectionTitle::new("Next Steps", WIDTH)
                .with_subtitle("")
                .height(),
            35.0
        );
    }

    #[test]
    fn task_card_truncates_long_descriptions() {
        let long = "d".repeat(120);
        let card = TaskCard::new(1, "Inbox", &long, "3 hrs", WIDTH);
        assert_eq!(card.description(), format!("{}...", "d".repeat(90)));

        let exact = "e".repeat(90);
        let card = TaskCard::new(2, "Calendar", &exact, "1 hr", WIDTH);
        assert_eq!(card.description(), exact);
    }

    #[test]
    fn task_card_shows_number_and_time_saved() {
        let card = TaskCard::new(3, "Travel booking", "Flights and hotels", "2 hrs/month", WIDTH);
        assert_eq!(
            texts(card),
            vec!["3", "Travel booking", "Flights and hotels", "Time saved: 2 hrs/month"]
        );
    }

    #[test]
    fn investment_block_formats_amounts() {
        let block = InvestmentBlock::new(50_000, 12_000, 38_000, 3.2, WIDTH);
        let texts = texts(block);
        assert!(texts.contains(&"$50,000".to_owned()));
        assert!(texts.contains(&"-$12,000".to_owned()));
        assert!(texts.contains(&"$38,000".to_owned()));
        assert!(texts.contains(&"3.2x ROI".to_owned()));
    }

    #[test]
    fn hero_draws_value_bold_and_label_regular() {
        let hero = HeroMetric::new("$50,000", "Annual value", WIDTH);
        let canvas = LayoutBlock::from(hero).display_list(&DesignTokens::default());
        let runs: Vec<(&str, FontWeight, u8)> = canvas
            .shapes()
            .iter()
            .filter_map(|shape| match shape {
                Shape::Text { text, style, .. } => Some((text.as_str(), style.weight, style.size)),
                _ => None,
            })
            .collect();
        assert_eq!(
            runs,
            vec![
                ("$50,000", FontWeight::Bold, 56),
                ("Annual value", FontWeight::Regular, 12)
            ]
        );
    }

    #[test]
    fn investment_amounts_align_right() {
        let block = InvestmentBlock::new(1, 2, 3, 1.0, WIDTH);
        let canvas = LayoutBlock::from(block).display_list(&DesignTokens::default());
        let right_edges: Vec<f64> = canvas
            .shapes()
            .iter()
            .filter_map(|shape| match shape {
                Shape::Text {
                    x,
                    anchor: TextAnchor::End,
                    ..
                } => Some(*x),
                _ => None,
            })
            .collect();
        assert_eq!(right_edges, vec![WIDTH - 20.0; 3]);
    }

    #[test]
    fn metrics_row_splits_width_into_three_boxes() {
        let row = MetricsRow::new(
            [
                Metric::new("10 hrs", "Reclaimed Weekly"),
                Metric::new("12", "Tasks to Delegate"),
                Metric::new("3.2x", "Projected ROI"),
            ],
            WIDTH,
        );
        let canvas = LayoutBlock::from(row).display_list(&DesignTokens::default());
        let boxes: Vec<(f64, f64)> = canvas
            .shapes()
            .iter()
            .filter_map(|shape| match shape {
                Shape::RoundRect { x, width, .. } => Some((*x, *width)),
                _ => None,
            })
            .collect();
        let box_width = (WIDTH - 32.0) / 3.0;
        assert_eq!(boxes.len(), 3);
        for (index, (x, width)) in boxes.into_iter().enumerate() {
            assert_eq!(width, box_width);
            assert!((x - index as f64 * (box_width + 16.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn outline_titles_mark_page_openers() {
        assert_eq!(
            LayoutBlock::from(ReportHeader::new(WIDTH)).outline_title(),
            Some("Time Freedom Report")
        );
        assert_eq!(
            LayoutBlock::from(SectionTitle::new("Next Steps", WIDTH)).outline_title(),
            Some("Next Steps")
        );
        assert_eq!(LayoutBlock::from(Footer::new(WIDTH)).outline_title(), None);
    }

    #[test]
    fn every_shape_stays_inside_its_block() {
        let blocks: Vec<LayoutBlock> = vec![
            ReportHeader::new(WIDTH).into(),
            ClientBlock::new("Jordan", "March 2025", WIDTH).into(),
            HeroMetric::new("$50,000", "Annual value", WIDTH).into(),
            InvestmentBlock::new(50_000, 12_000, 38_000, 3.2, WIDTH).into(),
            TaskCard::new(1, "Inbox", "Triage", "3 hrs", WIDTH).into(),
            CtaBlock::new(WIDTH).into(),
            Footer::new(WIDTH).into(),
        ];
        for block in blocks {
            let h = block.height();
            for shape in block.display_list(&DesignTokens::default()).shapes() {
                let (y_low, y_high) = match shape {
                    Shape::Text { y, .. } => (*y, *y),
                    Shape::Rect { y, height, .. } | Shape::RoundRect { y, height, .. } => {
                        (*y, y + height)
                    }
                    Shape::Circle { cy, radius, .. } => (cy - radius, cy + radius),
                    Shape::Line { from, to, .. } => (from.1.min(to.1), from.1.max(to.1)),
                };
                assert!(y_low >= 0.0 && y_high <= h, "{shape:?} escapes {block:?}");
            }
        }
    }
}
