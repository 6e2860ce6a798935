//! Document assembly for the Time Freedom Report.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use genpdf::error::Error;
use genpdf::style;
use genpdf::{self, Margins, PageDecorator};
use log::{debug, info};

use crate::blocks::ReportHeader;
use crate::error::ReportError;
use crate::flow::{Flow, FlowItem};
use crate::fonts::{FontProvider, SystemFontProvider};
use crate::model::ReportData;
use crate::pages;
use crate::render::{BlockElement, OutlineEntry, PageTracker, RenderStyles, Spacer};
use crate::tokens::DesignTokens;

#[cfg(feature = "bookmarks")]
use crate::bookmarks;

/// Output of a successful render.
#[derive(Clone, Debug)]
pub struct RenderedReport {
    /// The serialized PDF document.
    pub bytes: Vec<u8>,
    /// Number of physical pages in the document.
    pub page_count: usize,
    /// Start page of every logical page, in document order.
    pub outline: Vec<OutlineEntry>,
}

impl RenderedReport {
    /// Writes the PDF to `path` and returns the location written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<PathBuf, ReportError> {
        let path = path.as_ref();
        fs::write(path, &self.bytes)?;
        info!(
            "Wrote {} ({} page(s), {} bytes)",
            path.display(),
            self.page_count,
            self.bytes.len()
        );
        Ok(path.to_path_buf())
    }
}

/// Builder that turns [`ReportData`] into a rendered PDF.
pub struct ReportBuilder {
    tokens: DesignTokens,
    title: String,
    fonts: Box<dyn FontProvider>,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self {
            tokens: DesignTokens::default(),
            title: ReportHeader::TITLE.to_owned(),
            fonts: Box::new(SystemFontProvider::default()),
        }
    }
}

impl ReportBuilder {
    /// Creates a new builder instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the palette, geometry and typography.
    pub fn with_tokens(mut self, tokens: DesignTokens) -> Self {
        self.tokens = tokens;
        self
    }

    /// Sets the title stored in the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets where the report fonts come from.
    pub fn with_font_provider<P>(mut self, provider: P) -> Self
    where
        P: FontProvider + 'static,
    {
        self.fonts = Box::new(provider);
        self
    }

    pub fn tokens(&self) -> &DesignTokens {
        &self.tokens
    }

    /// Lays out `data` without touching fonts or producing any output.
    pub fn build_flow(&self, data: &ReportData) -> Flow {
        pages::build_flow(data, &self.tokens)
    }

    /// Validates `data`, paginates it and returns the PDF bytes.
    pub fn render(&self, data: &ReportData) -> Result<RenderedReport, ReportError> {
        data.validate()?;

        let typography = &self.tokens.typography;
        self.fonts.prepare(typography);
        let fonts = self.fonts.load(typography).map_err(ReportError::FontLoad)?;
        debug!(
            "Rendering with '{}'{}",
            fonts.family_name,
            if fonts.is_fallback { " (fallback)" } else { "" }
        );

        let tracker = PageTracker::default();
        let mut document = genpdf::Document::new(fonts.family);
        document.set_title(self.title.as_str());
        document.set_paper_size(self.tokens.paper_size());
        document.set_page_decorator(ReportPageDecorator::new(
            self.tokens.margins(),
            tracker.clone(),
        ));

        let styles = Rc::new(RenderStyles::new(self.tokens.clone()));

        for item in self.build_flow(data).into_items() {
            match item {
                FlowItem::Block(block) => {
                    document.push(BlockElement::new(block, styles.clone(), tracker.clone()))
                }
                FlowItem::Spacer(height) => document.push(Spacer::new(height)),
                FlowItem::PageBreak => document.push(genpdf::elements::PageBreak::new()),
            }
        }

        let mut bytes = Vec::new();
        document.render(&mut bytes).map_err(ReportError::Render)?;

        let page_count = tracker.page_count();
        debug!("Rendered {} page(s), {} bytes", page_count, bytes.len());

        Ok(RenderedReport {
            bytes,
            page_count,
            outline: tracker.outline(),
        })
    }

    /// Renders `data` and embeds a document outline with one entry per logical page.
    #[cfg(feature = "bookmarks")]
    pub fn render_with_bookmarks(&self, data: &ReportData) -> Result<RenderedReport, ReportError> {
        let mut report = self.render(data)?;
        report.bytes = bookmarks::apply_outline(&report.bytes, &report.outline)?;
        Ok(report)
    }

    /// Renders `data` and writes the PDF to `path`.
    pub fn generate(
        &self,
        data: &ReportData,
        path: impl AsRef<Path>,
    ) -> Result<PathBuf, ReportError> {
        self.render(data)?.write_to(path)
    }
}

/// Renders `data` to `path` with the default tokens and system fonts.
pub fn generate_report(data: &ReportData, path: impl AsRef<Path>) -> Result<PathBuf, ReportError> {
    ReportBuilder::new().generate(data, path)
}

/// Applies the page margins and counts pages as `genpdf` starts them.
struct ReportPageDecorator {
    margins: Margins,
    tracker: PageTracker,
}

impl ReportPageDecorator {
    fn new(margins: Margins, tracker: PageTracker) -> Self {
        Self { margins, tracker }
    }
}

impl PageDecorator for ReportPageDecorator {
    fn decorate_page<'a>(
        &mut self,
        _context: &genpdf::Context,
        mut area: genpdf::render::Area<'a>,
        _style: style::Style,
    ) -> Result<genpdf::render::Area<'a>, Error> {
        let page = self.tracker.start_page();
        debug!("Starting page {}", page);
        area.add_margins(self.margins);
        Ok(area)
    }
}
