use egui::{CentralPanel, Context, Grid, RichText, ScrollArea};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};

use crate::TrackerApp;
use crate::ui::helpers::{band_color, score_badge};
use crate::view_models::ScoreBand;

pub fn ui_analytics(app: &mut TrackerApp, ctx: &Context) {
    // One series per visit; re-rolling the jitter every frame would make
    // the chart shimmer.
    let series = match &app.analytics_series {
        Some(series) => series.clone(),
        None => {
            let series = app.progress.synthetic_progress_series();
            app.analytics_series = Some(series.clone());
            series
        }
    };
    let cards = app.subject_cards();
    let improvements = app.improvement_rows();
    let summary = app.performance_summary();

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(4.0);
            ui.heading("Progress over time");
            ui.label(
                RichText::new("Illustrative trend ending at today's progress, not measured history")
                    .weak()
                    .small(),
            );
            let points: PlotPoints = series
                .iter()
                .enumerate()
                .map(|(i, p)| [(i + 1) as f64, *p as f64])
                .collect();
            Plot::new("progress_plot")
                .height(220.0)
                .include_y(0.0)
                .include_y(100.0)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .x_axis_label("Week")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Overall progress %", points));
                });

            ui.add_space(12.0);
            ui.heading("Average score by subject");
            let bars: Vec<Bar> = cards
                .iter()
                .enumerate()
                .map(|(i, card)| {
                    Bar::new(i as f64, card.average_score as f64)
                        .name(&card.name)
                        .fill(band_color(card.band()))
                })
                .collect();
            Plot::new("subject_plot")
                .height(220.0)
                .include_y(0.0)
                .include_y(100.0)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(BarChart::new("Average score %", bars));
                });

            ui.add_space(12.0);
            ui.heading("Areas for improvement");
            ui.add_space(4.0);
            if improvements.is_empty() {
                ui.label(
                    RichText::new("🎉 Great job! All subjects are performing well!")
                        .color(band_color(ScoreBand::High)),
                );
            } else {
                for row in &improvements {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.strong(&row.subject);
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| score_badge(ui, row.average_score),
                            );
                        });
                    });
                    ui.add_space(4.0);
                }
            }

            ui.add_space(12.0);
            ui.heading("Performance summary");
            ui.add_space(4.0);
            Grid::new("performance_summary")
                .num_columns(2)
                .striped(true)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Total Topics");
                    ui.label(summary.total_topics.to_string());
                    ui.end_row();

                    ui.label("Completed Topics");
                    ui.label(summary.completed_topics.to_string());
                    ui.end_row();

                    ui.label("Average Score");
                    score_badge(ui, summary.average_score);
                    ui.end_row();

                    ui.label("Target Status");
                    let color = if summary.target_met() {
                        band_color(ScoreBand::High)
                    } else {
                        band_color(ScoreBand::Medium)
                    };
                    ui.label(RichText::new(summary.target_status_label()).color(color));
                    ui.end_row();
                });
        });
    });
}
