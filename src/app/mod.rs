// SPDX-License-Identifier: MIT

//! Application entry point wiring egui/eframe to launch the portfolio UI.

use eframe::egui;
use egui_phosphor::Variant;
use tracing_subscriber::EnvFilter;

use crate::ui::PortfolioApp;

/// System font locations likely to carry Arabic glyph coverage. egui's
/// bundled fonts do not include Arabic, so one of these is appended as a
/// proportional fallback when present.
const ARABIC_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoNaskhArabic-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSansArabic-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansArabic-Regular.ttf",
    "/System/Library/Fonts/Supplemental/GeezaPro.ttc",
    "C:\\Windows\\Fonts\\tahoma.ttf",
];

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Register Phosphor icon font plus an Arabic-capable fallback.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);
    install_arabic_fallback(&mut fonts);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "devfolio",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(PortfolioApp::new()))
        }),
    )
}

/// Append the first readable Arabic-capable system font to the proportional family.
fn install_arabic_fallback(fonts: &mut egui::FontDefinitions) {
    for path in ARABIC_FONT_CANDIDATES {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        fonts.font_data.insert(
            "arabic-fallback".to_owned(),
            std::sync::Arc::new(egui::FontData::from_owned(bytes)),
        );
        fonts
            .families
            .entry(egui::FontFamily::Proportional)
            .or_default()
            .push("arabic-fallback".to_owned());
        tracing::debug!(%path, "registered Arabic fallback font");
        return;
    }
    tracing::warn!("no Arabic-capable system font found; Arabic text may not render");
}
