//! Design tokens shared by every layout block.
//!
//! The tokens are plain data: a palette, the page geometry and the identifiers of the three
//! typeface weights.  A single [`DesignTokens`] value is handed to the document builder and
//! threaded through to the blocks, so nothing in the crate reads process-wide styling state.

/// Points per inch in PDF user space.
pub const POINTS_PER_INCH: f64 = 72.0;

const MM_PER_INCH: f64 = 25.4;

/// Converts PDF points into millimetres.
pub fn pt_to_mm(points: f64) -> f64 {
    points * MM_PER_INCH / POINTS_PER_INCH
}

/// An sRGB color stored as 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

impl From<Rgb> for genpdf::style::Color {
    fn from(color: Rgb) -> Self {
        genpdf::style::Color::Rgb(color.r, color.g, color.b)
    }
}

/// Weight of the typeface used for a run of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Body text.
    #[default]
    Regular,
    /// Headings, values and emphasis.
    Bold,
}

/// The report palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub white: Rgb,
    pub ink: Rgb,
    pub ink_secondary: Rgb,
    pub ink_muted: Rgb,
    pub accent: Rgb,
    pub accent_light: Rgb,
    pub divider: Rgb,
    pub background: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            white: Rgb::hex(0xFFFFFF),
            ink: Rgb::hex(0x111827),
            ink_secondary: Rgb::hex(0x4B5563),
            ink_muted: Rgb::hex(0x9CA3AF),
            accent: Rgb::hex(0x0D7377),
            accent_light: Rgb::hex(0xE6F4F4),
            divider: Rgb::hex(0xE5E7EB),
            background: Rgb::hex(0xF9FAFB),
        }
    }
}

/// Font identifiers for the two weights the report uses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typography {
    /// Human readable family name, used in log output.
    pub family: String,
    pub regular: String,
    pub bold: String,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            family: "IBM Plex Sans".to_owned(),
            regular: "IBMPlexSans-Regular.ttf".to_owned(),
            bold: "IBMPlexSans-Bold.ttf".to_owned(),
        }
    }
}

/// Fixed palette, page geometry and typography for one report.
///
/// All lengths are PDF points.  The defaults describe a US Letter portrait page with
/// three-quarter-inch margins.
#[derive(Clone, Debug, PartialEq)]
pub struct DesignTokens {
    pub palette: Palette,
    pub typography: Typography,
    pub page_width: f64,
    pub page_height: f64,
    pub margin: f64,
}

impl Default for DesignTokens {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            typography: Typography::default(),
            page_width: 8.5 * POINTS_PER_INCH,
            page_height: 11.0 * POINTS_PER_INCH,
            margin: 0.75 * POINTS_PER_INCH,
        }
    }
}

impl DesignTokens {
    /// Width available to blocks between the left and right margins.
    pub fn content_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    /// Height available to blocks between the top and bottom margins.
    pub fn content_height(&self) -> f64 {
        self.page_height - 2.0 * self.margin
    }

    /// Paper size in the units `genpdf` expects.
    pub fn paper_size(&self) -> genpdf::Size {
        genpdf::Size::new(pt_to_mm(self.page_width), pt_to_mm(self.page_height))
    }

    /// Uniform page margins in the units `genpdf` expects.
    pub fn margins(&self) -> genpdf::Margins {
        genpdf::Margins::all(pt_to_mm(self.margin))
    }
}
