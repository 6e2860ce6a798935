//! Core entry point for the time_freedom_report crate.
//!
//! Turns a [`ReportData`] record into a branded, multi-page PDF: a summary page, one page
//! per task category, and a closing call to action.

pub mod blocks;
pub mod builder;
pub mod canvas;
pub mod error;
pub mod flow;
pub mod fonts;
pub mod format;
pub mod model;
pub mod pages;
pub mod render;
pub mod tokens;
pub mod wrap;

#[cfg(feature = "bookmarks")]
pub mod bookmarks;

pub use builder::{generate_report, RenderedReport, ReportBuilder};
pub use error::ReportError;
pub use model::{ReportData, Task, TaskCategory};
pub use tokens::DesignTokens;
