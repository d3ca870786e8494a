// SPDX-License-Identifier: MIT

mod app;
mod i18n;
mod models;
mod mvu;
mod prefs;
mod relay;
mod ui;

fn main() -> eframe::Result<()> {
    app::run()
}
