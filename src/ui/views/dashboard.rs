use egui::{CentralPanel, Context, RichText, ScrollArea, Sense};

use crate::TrackerApp;
use crate::ui::helpers::{banded_progress_bar, score_badge, stat_cell};

pub fn ui_dashboard(app: &mut TrackerApp, ctx: &Context) {
    // Precompute everything before handing out `ui` closures
    let stats = app.progress.overall_stats();
    let quote = app.daily_quote().to_owned();
    let cards = app.subject_cards();
    let recent = app.recent_achievements().to_vec();
    let target = app.curriculum.target_score;

    let mut open_subject: Option<usize> = None;

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(8.0);
            ui.columns(4, |columns| {
                stat_cell(
                    &mut columns[0],
                    format!("{}%", stats.overall_progress),
                    "Overall progress",
                );
                stat_cell(
                    &mut columns[1],
                    stats.completed_topics.to_string(),
                    "Completed topics",
                );
                stat_cell(
                    &mut columns[2],
                    stats.pending_topics.to_string(),
                    "Pending topics",
                );
                stat_cell(
                    &mut columns[3],
                    format!("{}%", stats.average_score),
                    "Average score",
                );
            });

            ui.add_space(12.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(format!("“{quote}”")).italics());
            });

            ui.add_space(12.0);
            ui.heading("Subjects overview");
            ui.add_space(4.0);
            for card in &cards {
                let response = egui::Frame::group(ui.style())
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.strong(&card.name);
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| score_badge(ui, card.average_score),
                            );
                        });
                        banded_progress_bar(ui, card.progress, card.band());
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(card.topics_label()).weak());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| ui.label(RichText::new(format!("Target: {target}%")).weak()),
                            );
                        });
                    })
                    .response;
                if response.interact(Sense::click()).clicked() {
                    open_subject = Some(card.idx);
                }
                ui.add_space(4.0);
            }

            ui.add_space(12.0);
            ui.heading("Recent achievements");
            ui.add_space(4.0);
            if recent.is_empty() {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("🎯").size(24.0));
                        ui.vertical(|ui| {
                            ui.strong("Ready to Start!");
                            ui.label(
                                RichText::new(
                                    "Complete your first topic to earn your first achievement",
                                )
                                .weak(),
                            );
                        });
                    });
                });
            } else {
                for achievement in &recent {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&achievement.emoji).size(24.0));
                            ui.vertical(|ui| {
                                ui.strong(&achievement.title);
                                ui.label(RichText::new(&achievement.description).weak());
                            });
                        });
                    });
                    ui.add_space(4.0);
                }
            }
        });
    });

    if let Some(idx) = open_subject {
        app.open_subject(idx);
    }
}
