use egui::{CentralPanel, Context, RichText, ScrollArea};

use crate::TrackerApp;

pub fn ui_planner(app: &mut TrackerApp, ctx: &Context) {
    // Fresh grouping before the view reads anything
    let cards = app.week_cards();
    let mut pending_toggle: Option<(String, String, usize)> = None;

    CentralPanel::default().show(ctx, |ui| {
        ui.add_space(4.0);
        ui.heading("📅 Weekly Planner");
        ui.add_space(4.0);

        ScrollArea::vertical().show(ui, |ui| {
            for card in &cards {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.strong(card.header_label());
                    ui.add_space(2.0);

                    if card.rows.is_empty() {
                        ui.label(RichText::new("No tasks planned").weak().italics());
                        return;
                    }
                    for row in &card.rows {
                        ui.horizontal(|ui| {
                            let mut done = row.completed;
                            if ui.checkbox(&mut done, "").changed() {
                                pending_toggle =
                                    Some((row.subject.clone(), row.topic.clone(), card.number - 1));
                            }
                            let text = if row.completed {
                                RichText::new(&row.text).strikethrough().weak()
                            } else {
                                RichText::new(&row.text)
                            };
                            ui.label(text);
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        RichText::new(format!("{} · {}", row.subject, row.topic))
                                            .weak()
                                            .small(),
                                    );
                                },
                            );
                        });
                    }
                });
                ui.add_space(6.0);
            }
        });
    });

    if let Some((subject, topic, week_idx)) = pending_toggle {
        app.toggle_task(&subject, &topic, week_idx);
    }
}
