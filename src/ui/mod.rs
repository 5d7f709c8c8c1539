pub mod helpers;
pub mod layout;
pub mod views;

use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;

use crate::app::TrackerApp;
use crate::model::AppView;
use layout::{bottom_panel, top_panel};

impl App for TrackerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        top_panel(self, ctx);
        bottom_panel(ctx);

        // Dispatch by view to the functions in views/
        match self.view {
            AppView::Dashboard => views::dashboard::ui_dashboard(self, ctx),
            AppView::Subjects => views::subjects::ui_subjects(self, ctx),
            AppView::Planner => views::planner::ui_planner(self, ctx),
            AppView::Analytics => views::analytics::ui_analytics(self, ctx),
        }

        if self.confirm_reset {
            layout::confirm_reset(self, ctx);
        }
        layout::achievement_modal(self, ctx);
    }

    // Runs on eframe's ~30 s autosave tick and on shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        log::debug!("progress saved");
        set_value(storage, APP_KEY, self);
    }
}
