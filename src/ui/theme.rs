// SPDX-License-Identifier: MIT

//! Light and dark visuals for the portfolio shell.

use egui::{Color32, Visuals};

use crate::prefs::ThemeMode;

/// Light palette.
pub struct LightPalette;

impl LightPalette {
    pub const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 252);
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    pub const CARD_BG: Color32 = Color32::from_rgb(244, 244, 248);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(30, 32, 40);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(96, 98, 108);
    /// Indigo accent matching the site's gradient branding.
    pub const ACCENT: Color32 = Color32::from_rgb(99, 102, 241);
    pub const ERROR: Color32 = Color32::from_rgb(200, 50, 40);
    pub const BORDER: Color32 = Color32::from_rgb(218, 218, 226);
}

/// Dark palette.
pub struct DarkPalette;

impl DarkPalette {
    pub const BACKGROUND: Color32 = Color32::from_rgb(15, 17, 24);
    pub const PANEL_BG: Color32 = Color32::from_rgb(22, 24, 33);
    pub const CARD_BG: Color32 = Color32::from_rgb(32, 35, 46);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(238, 239, 245);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(158, 160, 172);
    pub const ACCENT: Color32 = Color32::from_rgb(129, 140, 248);
    pub const ERROR: Color32 = Color32::from_rgb(248, 113, 113);
    pub const BORDER: Color32 = Color32::from_rgb(58, 60, 74);
}

/// Build the egui `Visuals` for a theme mode.
pub fn visuals(mode: ThemeMode) -> Visuals {
    match mode {
        ThemeMode::Light => light_visuals(),
        ThemeMode::Dark => dark_visuals(),
    }
}

fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightPalette::PANEL_BG;
    visuals.panel_fill = LightPalette::PANEL_BG;
    visuals.faint_bg_color = LightPalette::CARD_BG;
    visuals.extreme_bg_color = LightPalette::BACKGROUND;
    visuals.error_fg_color = LightPalette::ERROR;

    visuals.widgets.noninteractive.bg_fill = LightPalette::CARD_BG;
    visuals.widgets.noninteractive.fg_stroke.color = LightPalette::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightPalette::TEXT_SECONDARY;
    visuals.widgets.active.bg_fill = LightPalette::ACCENT;

    visuals.selection.bg_fill = LightPalette::ACCENT.linear_multiply(0.25);
    visuals.selection.stroke.color = LightPalette::ACCENT;
    visuals.hyperlink_color = LightPalette::ACCENT;

    visuals.widgets.noninteractive.bg_stroke.color = LightPalette::BORDER;

    visuals
}

fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkPalette::PANEL_BG;
    visuals.panel_fill = DarkPalette::PANEL_BG;
    visuals.faint_bg_color = DarkPalette::CARD_BG;
    visuals.extreme_bg_color = DarkPalette::BACKGROUND;
    visuals.error_fg_color = DarkPalette::ERROR;

    visuals.widgets.noninteractive.bg_fill = DarkPalette::CARD_BG;
    visuals.widgets.noninteractive.fg_stroke.color = DarkPalette::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = DarkPalette::TEXT_SECONDARY;
    visuals.widgets.active.bg_fill = DarkPalette::ACCENT;

    visuals.selection.bg_fill = DarkPalette::ACCENT.linear_multiply(0.4);
    visuals.selection.stroke.color = DarkPalette::ACCENT;
    visuals.hyperlink_color = DarkPalette::ACCENT;

    visuals.widgets.noninteractive.bg_stroke.color = DarkPalette::BORDER;

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visuals_follow_mode() {
        assert!(visuals(ThemeMode::Dark).dark_mode);
        assert!(!visuals(ThemeMode::Light).dark_mode);
    }
}
