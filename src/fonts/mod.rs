//! Font resolution for the report.
//!
//! The report prefers IBM Plex Sans in regular and bold.  Fonts are obtained through a
//! [`FontProvider`] so that callers and tests can decide where fonts come from.  The stock
//! [`SystemFontProvider`] looks in the system font directory, optionally tries to install the
//! family with the package manager, then tries the generic sans-serif families installed on the
//! host, and finally uses the DejaVu Sans family compiled into the crate from `assets/fonts`.
//! Falling back is logged, never fatal.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use genpdf::error::Error;
use genpdf::fonts::{FontData, FontFamily};
use log::{debug, info, warn};

use crate::tokens::Typography;

/// Directory the `fonts-ibm-plex` Debian package installs into.
pub const PLEX_FONT_DIRECTORY: &str = "/usr/share/fonts/truetype/ibm-plex";

/// Name of the family shipped with the crate.
pub const BUNDLED_FONT_FAMILY_NAME: &str = "DejaVu Sans";

const PLEX_PACKAGE: &str = "fonts-ibm-plex";

static BUNDLED_REGULAR: &[u8] =
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fonts/DejaVuSans.ttf"));
static BUNDLED_BOLD: &[u8] =
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fonts/DejaVuSans-Bold.ttf"));

/// Fonts resolved for one document.
#[derive(Clone, Debug)]
pub struct ReportFonts {
    /// Regular and bold faces; the italic slots reuse them.
    pub family: FontFamily<FontData>,
    /// Name of the family that was loaded.
    pub family_name: String,
    /// Whether a fallback family stands in for the preferred one.
    pub is_fallback: bool,
}

/// Supplies the fonts a report is drawn with.
pub trait FontProvider {
    /// Best-effort setup run before [`FontProvider::load`].  Failures are logged, not returned.
    fn prepare(&self, _typography: &Typography) {}

    /// Loads the fonts described by `typography`, or a substitute.
    fn load(&self, typography: &Typography) -> Result<ReportFonts, Error>;
}

/// A generic family used when the preferred fonts are unavailable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackFamily {
    pub name: String,
    pub regular: PathBuf,
    pub bold: PathBuf,
}

impl FallbackFamily {
    pub fn new(
        name: impl Into<String>,
        regular: impl Into<PathBuf>,
        bold: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            regular: regular.into(),
            bold: bold.into(),
        }
    }

    fn is_available(&self) -> bool {
        self.regular.is_file() && self.bold.is_file()
    }

    fn load(&self) -> Result<ReportFonts, Error> {
        let regular = load_font(&self.regular, "regular")?;
        let bold = load_font(&self.bold, "bold")?;
        Ok(ReportFonts {
            family: two_weight_family(regular, bold),
            family_name: self.name.clone(),
            is_fallback: true,
        })
    }
}

fn default_fallbacks() -> Vec<FallbackFamily> {
    vec![
        FallbackFamily::new(
            "Liberation Sans",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
        ),
        FallbackFamily::new(
            "Liberation Sans",
            "/usr/share/fonts/truetype/liberation2/LiberationSans-Regular.ttf",
            "/usr/share/fonts/truetype/liberation2/LiberationSans-Bold.ttf",
        ),
        FallbackFamily::new(
            "DejaVu Sans",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        ),
        FallbackFamily::new(
            "FreeSans",
            "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
            "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
        ),
        FallbackFamily::new(
            "Arial",
            "C:\\Windows\\Fonts\\arial.ttf",
            "C:\\Windows\\Fonts\\arialbd.ttf",
        ),
    ]
}

/// Loads the family compiled into the crate.
pub fn bundled_fonts() -> Result<ReportFonts, Error> {
    let regular = FontData::new(BUNDLED_REGULAR.to_vec(), None)?;
    let bold = FontData::new(BUNDLED_BOLD.to_vec(), None)?;
    Ok(ReportFonts {
        family: two_weight_family(regular, bold),
        family_name: BUNDLED_FONT_FAMILY_NAME.to_owned(),
        is_fallback: true,
    })
}

/// Looks for the preferred fonts on the host and substitutes another family when needed.
#[derive(Clone, Debug)]
pub struct SystemFontProvider {
    directory: PathBuf,
    install: bool,
    fallbacks: Vec<FallbackFamily>,
}

impl Default for SystemFontProvider {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(PLEX_FONT_DIRECTORY),
            install: true,
            fallbacks: default_fallbacks(),
        }
    }
}

impl SystemFontProvider {
    /// Creates a provider that looks for the preferred fonts in `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// Enables or disables the package installation attempt in [`FontProvider::prepare`].
    pub fn with_install(mut self, install: bool) -> Self {
        self.install = install;
        self
    }

    /// Replaces the system fallback families, tried in order before the bundled family.
    pub fn with_fallbacks<I>(mut self, fallbacks: I) -> Self
    where
        I: IntoIterator<Item = FallbackFamily>,
    {
        self.fallbacks = fallbacks.into_iter().collect();
        self
    }

    /// Directory searched for the preferred fonts.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn preferred_available(&self, typography: &Typography) -> bool {
        missing_font_files(&self.directory, typography).is_empty()
    }

    fn load_system_fallback(&self) -> Option<ReportFonts> {
        for fallback in &self.fallbacks {
            if !fallback.is_available() {
                debug!(
                    "Fallback family {} not found at {}",
                    fallback.name,
                    fallback.regular.display()
                );
                continue;
            }

            match fallback.load() {
                Ok(fonts) => return Some(fonts),
                Err(err) => warn!("Skipping fallback family {}: {}", fallback.name, err),
            }
        }
        None
    }
}

impl FontProvider for SystemFontProvider {
    fn prepare(&self, typography: &Typography) {
        if !self.install || self.preferred_available(typography) {
            return;
        }

        info!(
            "{} not found in {}; attempting to install {}",
            typography.family,
            self.directory.display(),
            PLEX_PACKAGE
        );
        run_quietly("apt-get", &["update", "-qq"]);
        run_quietly("apt-get", &["install", "-y", "-qq", PLEX_PACKAGE]);
    }

    fn load(&self, typography: &Typography) -> Result<ReportFonts, Error> {
        let err = match load_preferred(&self.directory, typography) {
            Ok(fonts) => return Ok(fonts),
            Err(err) => err,
        };

        let fonts = match self.load_system_fallback() {
            Some(fonts) => fonts,
            None => bundled_fonts()?,
        };
        warn!(
            "{} unavailable ({}); falling back to '{}'.",
            typography.family, err, fonts.family_name
        );
        Ok(fonts)
    }
}

fn missing_font_files(directory: &Path, typography: &Typography) -> Vec<PathBuf> {
    [&typography.regular, &typography.bold]
        .into_iter()
        .map(|name| directory.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect()
}

fn load_preferred(directory: &Path, typography: &Typography) -> Result<ReportFonts, Error> {
    let missing = missing_font_files(directory, typography);
    if !missing.is_empty() {
        let display_list = missing
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(Error::new(
            format!("Missing font files: {}", display_list),
            io::Error::new(io::ErrorKind::NotFound, "preferred fonts missing"),
        ));
    }

    let regular = load_font(&directory.join(&typography.regular), "regular")?;
    let bold = load_font(&directory.join(&typography.bold), "bold")?;

    Ok(ReportFonts {
        family: two_weight_family(regular, bold),
        family_name: typography.family.clone(),
        is_fallback: false,
    })
}

fn load_font(path: &Path, weight: &str) -> Result<FontData, Error> {
    FontData::load(path, None).map_err(|err| {
        let io_kind = if path.is_file() {
            io::ErrorKind::InvalidData
        } else {
            io::ErrorKind::NotFound
        };
        Error::new(
            format!(
                "Failed to load {} font at {}: {}",
                weight,
                path.display(),
                err
            ),
            io::Error::new(io_kind, err.to_string()),
        )
    })
}

fn two_weight_family(regular: FontData, bold: FontData) -> FontFamily<FontData> {
    FontFamily {
        italic: regular.clone(),
        bold_italic: bold.clone(),
        regular,
        bold,
    }
}

fn run_quietly(program: &str, args: &[&str]) {
    match Command::new(program).args(args).output() {
        Ok(output) if output.status.success() => {
            debug!("`{} {}` succeeded", program, args.join(" "));
        }
        Ok(output) => warn!(
            "`{} {}` exited with {}: {}",
            program,
            args.join(" "),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ),
        Err(err) => warn!("Could not run `{} {}`: {}", program, args.join(" "), err),
    }
}
