// src/ui/helpers.rs
use egui::{Color32, ProgressBar, RichText, Ui};

use crate::view_models::ScoreBand;

pub fn band_color(band: ScoreBand) -> Color32 {
    match band {
        ScoreBand::High => Color32::from_rgb(46, 160, 67),
        ScoreBand::Medium => Color32::from_rgb(210, 153, 34),
        ScoreBand::Low => Color32::from_rgb(207, 83, 74),
    }
}

/// Percentage badge colored by its band.
pub fn score_badge(ui: &mut Ui, score: u32) {
    let color = band_color(ScoreBand::for_score(score));
    ui.label(RichText::new(format!("{score}%")).color(color).strong());
}

/// One dashboard stat cell: big value over a small caption.
pub fn stat_cell(ui: &mut Ui, value: String, caption: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(value).heading().strong());
        ui.label(RichText::new(caption).weak());
    });
}

pub fn banded_progress_bar(ui: &mut Ui, progress: u32, band: ScoreBand) {
    ui.add(
        ProgressBar::new(progress as f32 / 100.0)
            .fill(band_color(band))
            .show_percentage(),
    );
}
