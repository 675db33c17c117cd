use ratatui::style::Color;

use pinwheel_domain::Rgba;

/// Base color palette
pub struct Palette;

impl Palette {
    pub const DUCKBONES: Color = Color::Rgb(0x15, 0x19, 0x26);
    pub const SURFACE: Color = Color::Rgb(0x45, 0x47, 0x5a);
}

/// Demo color theme constants
pub struct Theme;

impl Theme {
    // Borders
    pub const PANEL_BORDER: Color = Color::Gray;
    pub const ACTIVE_BORDER: Color = Color::Cyan;

    // Text
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const TEXT_ACCENT: Color = Color::Yellow;
    pub const TEXT_MUTED: Color = Color::DarkGray;

    // Key chips
    pub const KEY_CHIP_BG: Color = Palette::SURFACE;
    pub const KEY_CHIP_FG: Color = Color::White;

    // Slider
    pub const SLIDER_TRACK: Color = Color::DarkGray;
    pub const SLIDER_FILL: Color = Color::Cyan;
    pub const SLIDER_KNOB: Color = Color::White;

    pub const HEADER_BG: Color = Palette::DUCKBONES;
}

pub fn to_color(color: Rgba) -> Color {
    let (r, g, b) = color.over(Rgba::BLACK);
    Color::Rgb(r, g, b)
}
