//! Error type shared by the report pipeline.

use std::fmt;
use std::io;

#[cfg(feature = "bookmarks")]
use crate::bookmarks::BookmarkError;

/// Errors that can occur while validating input or producing the report.
#[derive(Debug)]
pub enum ReportError {
    /// Neither the preferred typeface nor any fallback family could be loaded.
    FontLoad(genpdf::error::Error),
    /// A numeric field violated its invariant.
    InvalidData {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// The JSON input was malformed or lacked a required key.
    Parse(serde_json::Error),
    /// Pagination or drawing failed inside `genpdf`.
    Render(genpdf::error::Error),
    /// Writing the output failed.
    Io(io::Error),
    /// The document outline could not be embedded.
    #[cfg(feature = "bookmarks")]
    Bookmarks(BookmarkError),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontLoad(err) => write!(f, "Failed to load report fonts: {err}"),
            Self::InvalidData { field, reason } => {
                write!(f, "Invalid report data in `{field}`: {reason}")
            }
            Self::Parse(err) => write!(f, "Failed to parse report data: {err}"),
            Self::Render(err) => write!(f, "Failed to render report: {err}"),
            Self::Io(err) => write!(f, "Failed to write report: {err}"),
            #[cfg(feature = "bookmarks")]
            Self::Bookmarks(err) => write!(f, "Failed to add bookmarks: {err}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FontLoad(err) | Self::Render(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::InvalidData { .. } => None,
            #[cfg(feature = "bookmarks")]
            Self::Bookmarks(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<io::Error> for ReportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(feature = "bookmarks")]
impl From<BookmarkError> for ReportError {
    fn from(err: BookmarkError) -> Self {
        Self::Bookmarks(err)
    }
}
