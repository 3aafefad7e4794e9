// File: crates/chart-touch/src/theme.rs
// Summary: Plain RGBA colours, stroke styles and palette presets used for legend swatches.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    /// `#rrggbb` (alpha omitted when opaque) or `#rrggbbaa`.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Stroke used to draw a line series; legends for line charts mirror it.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub colour: Rgba,
    pub width: f32,
    /// Dash pattern in points; empty means solid.
    pub dash: Vec<f32>,
}

impl StrokeStyle {
    pub fn solid(colour: Rgba, width: f32) -> Self {
        Self { colour, width, dash: Vec::new() }
    }
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Segment/series colours, cycled by index.
    pub palette: Vec<Rgba>,
    pub line_width: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            palette: vec![
                Rgba::rgb(64, 160, 255),
                Rgba::rgb(40, 200, 120),
                Rgba::rgb(220, 80, 80),
                Rgba::rgb(255, 230, 70),
                Rgba::rgb(180, 120, 255),
                Rgba::rgb(96, 156, 255),
            ],
            line_width: 2.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            palette: vec![
                Rgba::rgb(32, 120, 200),
                Rgba::rgb(20, 160, 90),
                Rgba::rgb(200, 60, 60),
                Rgba::rgb(30, 120, 240),
                Rgba::rgb(140, 80, 200),
                Rgba::rgb(40, 120, 200),
            ],
            line_width: 2.0,
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            palette: vec![
                Rgba::rgb(0x26, 0x8b, 0xd2), // blue
                Rgba::rgb(0x2a, 0xa1, 0x98), // cyan
                Rgba::rgb(0xdc, 0x32, 0x2f), // red
                Rgba::rgb(0xb5, 0x89, 0x00), // yellow
                Rgba::rgb(0x6c, 0x71, 0xc4), // violet
                Rgba::rgb(0xcb, 0x4b, 0x16), // orange
            ],
            line_width: 2.0,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            palette: vec![
                Rgba::rgb(0x00, 0xff, 0xff),
                Rgba::rgb(0x00, 0xff, 0x00),
                Rgba::rgb(0xff, 0x00, 0x00),
                Rgba::rgb(0xff, 0xff, 0x00),
                Rgba::rgb(0xff, 0xff, 0xff),
            ],
            line_width: 3.0,
        }
    }

    /// Palette colour for the `index`-th item, wrapping around.
    pub fn colour_at(&self, index: usize) -> Rgba {
        if self.palette.is_empty() {
            return Rgba::rgb(0, 0, 0);
        }
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
