//! `genpdf` elements that put layout blocks onto pages.
//!
//! A [`BlockElement`] replays a block's display list inside the area `genpdf` hands it.  The area
//! origin is the block's top-left corner with `y` growing downwards, so every shape is flipped
//! from the block's bottom-left frame on the way out.  `genpdf` only strokes lines at the PDF
//! default width of one point, so filled shapes and thick rules are painted as stacks of
//! parallel strokes spaced closer than that width.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use genpdf::error::Error;
use genpdf::style::Style;
use genpdf::{render, Element, Mm, Position, RenderResult, Size};

use crate::blocks::{Drawable, LayoutBlock};
use crate::canvas::{Shape, TextAnchor, TextStyle};
use crate::tokens::{pt_to_mm, DesignTokens, FontWeight, Rgb};

/// Width of every stroke `genpdf` emits; it never sets the line width operator.
const LINE_WIDTH_PT: f64 = 1.0;
/// Largest distance between neighbouring strokes of a fill.
const STRIP_PITCH_PT: f64 = 0.75;

fn mm(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

fn mm_from_pt(points: f64) -> Mm {
    mm(pt_to_mm(points))
}

/// A logical page start recorded while rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineEntry {
    /// Heading that opens the logical page.
    pub title: String,
    /// 1-based physical page the heading landed on.
    pub page: usize,
}

/// Shared bookkeeping between the page decorator and the block elements of one render.
#[derive(Clone, Debug, Default)]
pub struct PageTracker {
    page: Rc<Cell<usize>>,
    outline: Rc<RefCell<Vec<OutlineEntry>>>,
}

impl PageTracker {
    /// Advances to the next physical page and returns its 1-based number.
    pub fn start_page(&self) -> usize {
        let page = self.page.get() + 1;
        self.page.set(page);
        page
    }

    /// Number of physical pages started so far.
    pub fn page_count(&self) -> usize {
        self.page.get()
    }

    fn record(&self, title: &str) {
        self.outline.borrow_mut().push(OutlineEntry {
            title: title.to_owned(),
            page: self.page.get(),
        });
    }

    /// Outline entries recorded so far, in document order.
    pub fn outline(&self) -> Vec<OutlineEntry> {
        self.outline.borrow().clone()
    }
}

/// Tokens shared by every element of one document.
pub struct RenderStyles {
    tokens: DesignTokens,
}

impl RenderStyles {
    pub fn new(tokens: DesignTokens) -> Self {
        Self { tokens }
    }

    fn text_style(&self, text: &TextStyle) -> Style {
        let mut style = Style::new()
            .with_font_size(text.size)
            .with_color(text.color.into());
        if text.weight == FontWeight::Bold {
            style.set_bold();
        }
        style
    }
}

/// Maps block-local points to positions inside the element's area.
#[derive(Clone, Copy, Debug)]
struct Frame {
    height: f64,
}

impl Frame {
    fn position(&self, x: f64, y: f64) -> Position {
        Position::new(mm_from_pt(x), mm_from_pt(self.height - y))
    }
}

/// Renders one [`LayoutBlock`].
///
/// A block is never split: when it does not fit in the remaining area the element asks for a
/// new page and draws there.
pub struct BlockElement {
    block: LayoutBlock,
    styles: Rc<RenderStyles>,
    tracker: PageTracker,
}

impl BlockElement {
    pub fn new(block: LayoutBlock, styles: Rc<RenderStyles>, tracker: PageTracker) -> Self {
        Self {
            block,
            styles,
            tracker,
        }
    }

    fn draw_shape(
        &self,
        context: &genpdf::Context,
        area: &render::Area<'_>,
        frame: Frame,
        shape: &Shape,
    ) -> Result<(), Error> {
        match shape {
            Shape::Text {
                x,
                y,
                anchor,
                style,
                text,
            } => {
                let style = self.styles.text_style(style);
                draw_text(context, area, frame, (*x, *y), *anchor, style, text)
            }
            Shape::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => {
                fill_rect(area, frame, *x, *y, *width, *height, *fill);
                Ok(())
            }
            Shape::RoundRect {
                x,
                y,
                width,
                height,
                radius,
                fill,
            } => {
                fill_round_rect(area, frame, *x, *y, *width, *height, *radius, *fill);
                Ok(())
            }
            Shape::Circle {
                cx,
                cy,
                radius,
                fill,
            } => {
                fill_circle(area, frame, *cx, *cy, *radius, *fill);
                Ok(())
            }
            Shape::Line {
                from,
                to,
                thickness,
                color,
            } => {
                stroke(area, frame, *from, *to, *thickness, *color);
                Ok(())
            }
        }
    }
}

impl Element for BlockElement {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        let height = mm_from_pt(self.block.height());
        if height > area.size().height {
            result.has_more = true;
            return Ok(result);
        }

        let frame = Frame {
            height: self.block.height(),
        };
        let canvas = self.block.display_list(&self.styles.tokens);
        for shape in canvas.shapes() {
            self.draw_shape(context, &area, frame, shape)?;
        }

        if let Some(title) = self.block.outline_title() {
            self.tracker.record(title);
        }

        result.size = Size::new(mm_from_pt(self.block.width()), height);
        Ok(result)
    }
}

/// Vertical whitespace that is clipped at the bottom of a page.
pub struct Spacer {
    height: f64,
}

impl Spacer {
    pub fn new(height: f64) -> Self {
        Self { height }
    }
}

impl Element for Spacer {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().height;
        let wanted = mm_from_pt(self.height);
        let height = if wanted > available { available } else { wanted };

        let mut result = RenderResult::default();
        result.size = Size::new(0, height);
        Ok(result)
    }
}

fn draw_text(
    context: &genpdf::Context,
    area: &render::Area<'_>,
    frame: Frame,
    (x, baseline): (f64, f64),
    anchor: TextAnchor,
    style: Style,
    text: &str,
) -> Result<(), Error> {
    let width = style.str_width(&context.font_cache, text);
    let mut position = frame.position(x, baseline);
    position.x = match anchor {
        TextAnchor::Start => position.x,
        TextAnchor::Middle => position.x - width / 2.0,
        TextAnchor::End => position.x - width,
    };
    // Text sections put the baseline one glyph height below the given position.
    let glyph_height = style
        .font(&context.font_cache)
        .glyph_height(style.font_size());
    position.y = position.y - glyph_height;

    area.print_str(&context.font_cache, position, style, text)?;
    Ok(())
}

fn draw_segment(
    area: &render::Area<'_>,
    frame: Frame,
    from: (f64, f64),
    to: (f64, f64),
    color: Rgb,
) {
    area.draw_line(
        vec![frame.position(from.0, from.1), frame.position(to.0, to.1)],
        Style::new().with_color(color.into()),
    );
}

fn stroke(
    area: &render::Area<'_>,
    frame: Frame,
    from: (f64, f64),
    to: (f64, f64),
    thickness: f64,
    color: Rgb,
) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        return;
    }
    let (nx, ny) = (-dy / length, dx / length);
    for offset in strip_offsets(thickness) {
        draw_segment(
            area,
            frame,
            (from.0 + nx * offset, from.1 + ny * offset),
            (to.0 + nx * offset, to.1 + ny * offset),
            color,
        );
    }
}

fn fill_rect(
    area: &render::Area<'_>,
    frame: Frame,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    fill: Rgb,
) {
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    let middle = y + height / 2.0;
    stroke(area, frame, (x, middle), (x + width, middle), height, fill);
}

#[allow(clippy::too_many_arguments)]
fn fill_round_rect(
    area: &render::Area<'_>,
    frame: Frame,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    radius: f64,
    fill: Rgb,
) {
    let r = radius.min(width / 2.0).min(height / 2.0).max(0.0);
    fill_rect(area, frame, x + r, y, width - 2.0 * r, height, fill);
    fill_rect(area, frame, x, y + r, r, height - 2.0 * r, fill);
    fill_rect(area, frame, x + width - r, y + r, r, height - 2.0 * r, fill);
    for (cx, cy) in [
        (x + r, y + r),
        (x + width - r, y + r),
        (x + r, y + height - r),
        (x + width - r, y + height - r),
    ] {
        fill_circle(area, frame, cx, cy, r, fill);
    }
}

fn fill_circle(
    area: &render::Area<'_>,
    frame: Frame,
    cx: f64,
    cy: f64,
    radius: f64,
    fill: Rgb,
) {
    for (offset, half_width) in circle_strips(radius) {
        draw_segment(
            area,
            frame,
            (cx - half_width, cy + offset),
            (cx + half_width, cy + offset),
            fill,
        );
    }
}

/// Offsets, across a band of `extent` points, of the one-point strokes that cover it.
///
/// The outermost strokes sit half a line width inside the band edges and no two neighbours
/// are further apart than [`STRIP_PITCH_PT`].
fn strip_offsets(extent: f64) -> Vec<f64> {
    if extent <= 0.0 {
        return Vec::new();
    }
    if extent <= LINE_WIDTH_PT {
        return vec![0.0];
    }
    let span = extent - LINE_WIDTH_PT;
    let gaps = (span / STRIP_PITCH_PT).ceil().max(1.0);
    let step = span / gaps;
    (0..=gaps as usize)
        .map(|index| -span / 2.0 + step * index as f64)
        .collect()
}

/// Offsets and half chord widths of the strokes covering a circle of `radius`.
fn circle_strips(radius: f64) -> Vec<(f64, f64)> {
    strip_offsets(2.0 * radius)
        .into_iter()
        .map(|offset| (offset, (radius * radius - offset * offset).max(0.0).sqrt()))
        .collect()
}
