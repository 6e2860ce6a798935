//! Display lists recorded by layout blocks.
//!
//! Blocks do not talk to the PDF backend directly.  They describe their appearance as a list of
//! [`Shape`]s positioned in a block-local frame: points, origin at the bottom-left corner, `y`
//! growing upwards, text anchored at its baseline.  The [`render`](crate::render) module replays
//! the list onto a `genpdf` page area.  Keeping the list as data makes block output easy to
//! inspect without loading any fonts.

use crate::tokens::{FontWeight, Rgb};

/// Horizontal anchoring of a text run relative to its `x` coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// `x` is the left edge of the text.
    #[default]
    Start,
    /// `x` is the horizontal centre of the text.
    Middle,
    /// `x` is the right edge of the text.
    End,
}

/// Font and color used for a run of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    pub weight: FontWeight,
    /// Font size in points.
    pub size: u8,
    pub color: Rgb,
}

impl TextStyle {
    pub fn regular(size: u8, color: Rgb) -> Self {
        Self {
            weight: FontWeight::Regular,
            size,
            color,
        }
    }

    pub fn bold(size: u8, color: Rgb) -> Self {
        Self {
            weight: FontWeight::Bold,
            size,
            color,
        }
    }
}

/// One drawing instruction in block-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A single line of text placed on its baseline.
    Text {
        x: f64,
        y: f64,
        anchor: TextAnchor,
        style: TextStyle,
        text: String,
    },
    /// A filled rectangle with its bottom-left corner at (`x`, `y`).
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Rgb,
    },
    /// A filled rectangle with circular corners of `radius`.
    RoundRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
        fill: Rgb,
    },
    /// A filled circle.
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        fill: Rgb,
    },
    /// A stroked straight line.
    Line {
        from: (f64, f64),
        to: (f64, f64),
        thickness: f64,
        color: Rgb,
    },
}

/// Records the shapes drawn by one block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Canvas {
    shapes: Vec<Shape>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `text` with its left edge at `x`.
    pub fn text(&mut self, x: f64, y: f64, style: TextStyle, text: impl Into<String>) {
        self.push_text(x, y, TextAnchor::Start, style, text.into());
    }

    /// Draws `text` horizontally centred on `x`.
    pub fn text_centred(&mut self, x: f64, y: f64, style: TextStyle, text: impl Into<String>) {
        self.push_text(x, y, TextAnchor::Middle, style, text.into());
    }

    /// Draws `text` with its right edge at `x`.
    pub fn text_right(&mut self, x: f64, y: f64, style: TextStyle, text: impl Into<String>) {
        self.push_text(x, y, TextAnchor::End, style, text.into());
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: Rgb) {
        self.shapes.push(Shape::Rect {
            x,
            y,
            width,
            height,
            fill,
        });
    }

    pub fn round_rect(&mut self, x: f64, y: f64, width: f64, height: f64, radius: f64, fill: Rgb) {
        self.shapes.push(Shape::RoundRect {
            x,
            y,
            width,
            height,
            radius,
            fill,
        });
    }

    pub fn circle(&mut self, cx: f64, cy: f64, radius: f64, fill: Rgb) {
        self.shapes.push(Shape::Circle {
            cx,
            cy,
            radius,
            fill,
        });
    }

    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), thickness: f64, color: Rgb) {
        self.shapes.push(Shape::Line {
            from,
            to,
            thickness,
            color,
        });
    }

    /// Shapes in drawing order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }

    /// Iterates over the text runs in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn push_text(&mut self, x: f64, y: f64, anchor: TextAnchor, style: TextStyle, text: String) {
        // Empty runs have no glyphs to place.
        if text.is_empty() {
            return;
        }
        self.shapes.push(Shape::Text {
            x,
            y,
            anchor,
            style,
            text,
        });
    }
}
