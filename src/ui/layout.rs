use egui::{Align2, Context, RichText, Visuals};

use crate::TrackerApp;
use crate::model::AppView;

pub fn top_panel(app: &mut TrackerApp, ctx: &Context) {
    egui::TopBottomPanel::top("nav_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new("📚 Class 9 Study Tracker").strong());
            ui.separator();

            let tabs = [
                (AppView::Dashboard, "🏠 Dashboard"),
                (AppView::Subjects, "📖 Subjects"),
                (AppView::Planner, "📅 Planner"),
                (AppView::Analytics, "📊 Analytics"),
            ];
            for (view, label) in tabs {
                if ui.selectable_label(app.view == view, label).clicked() {
                    app.select_view(view);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🔄 Reset progress").clicked() {
                    app.confirm_reset = true;
                }
            });
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

pub fn confirm_reset(app: &mut TrackerApp, ctx: &Context) {
    egui::Window::new("Confirm reset")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Wipe all scores, statuses, tasks and achievements? This cannot be undone!");
            ui.horizontal(|ui| {
                if ui.button("Yes, wipe it").clicked() {
                    app.reset_progress();
                }
                if ui.button("No").clicked() {
                    app.confirm_reset = false;
                }
            });
        });
}

/// One modal per firing; dismissing it reveals the next queued one.
pub fn achievement_modal(app: &mut TrackerApp, ctx: &Context) {
    let Some(achievement) = app.pending_achievements.first().cloned() else {
        return;
    };
    egui::Window::new("Achievement unlocked")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&achievement.emoji).size(48.0));
                ui.heading(&achievement.title);
                ui.label(&achievement.description);
                ui.add_space(8.0);
                if ui.button("Keep going!").clicked() {
                    app.pending_achievements.remove(0);
                }
            });
        });
}
