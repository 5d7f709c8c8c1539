use egui::{CentralPanel, ComboBox, Context, Grid, RichText, ScrollArea, TextEdit, Ui};

use crate::TrackerApp;
use crate::app::TopicEdit;
use crate::model::{TOTAL_WEEKS, TopicField, TopicStatus};
use crate::ui::helpers::band_color;
use crate::view_models::ScoreBand;

/// Edits collected while the widgets hold the buffer borrow; applied
/// through the input boundary once the card is done rendering.
enum EditCommit {
    Field(TopicField, String),
    Task(usize, String),
}

pub fn ui_subjects(app: &mut TrackerApp, ctx: &Context) {
    let subject_names: Vec<String> = app
        .curriculum
        .subjects
        .iter()
        .map(|s| s.name.clone())
        .collect();
    if subject_names.is_empty() {
        return;
    }

    CentralPanel::default().show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            for (i, name) in subject_names.iter().enumerate() {
                if ui.selectable_label(app.selected_subject == i, name).clicked() {
                    app.select_subject(i);
                }
            }
        });
        ui.separator();

        let subject_idx = app.selected_subject.min(subject_names.len() - 1);
        let subject = subject_names[subject_idx].clone();
        let topics = app.curriculum.subjects[subject_idx].topics.clone();

        ui.heading(format!("{subject} - Topics"));
        ui.add_space(4.0);
        ScrollArea::vertical().show(ui, |ui| {
            for (topic_idx, topic) in topics.iter().enumerate() {
                topic_card(app, ui, subject_idx, &subject, topic_idx, topic);
                ui.add_space(6.0);
            }
        });
    });
}

fn topic_card(
    app: &mut TrackerApp,
    ui: &mut Ui,
    subject_idx: usize,
    subject: &str,
    topic_idx: usize,
    topic: &str,
) {
    let record = app
        .progress
        .record(subject, topic)
        .cloned()
        .unwrap_or_default();
    let mut commits: Vec<EditCommit> = Vec::new();
    let mut status_choice = record.status;

    let edit = app
        .topic_edits
        .entry((subject_idx, topic_idx))
        .or_insert_with(|| TopicEdit::from_record(&record));

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.strong(topic);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let color = match record.status {
                    TopicStatus::Completed => band_color(ScoreBand::High),
                    TopicStatus::InProgress => band_color(ScoreBand::Medium),
                    TopicStatus::NotStarted => ui.visuals().weak_text_color(),
                };
                ui.label(RichText::new(record.status.label()).color(color).strong());
            });
        });
        ui.add_space(4.0);

        Grid::new((subject_idx, topic_idx, "details"))
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Half Yearly Score (%)");
                let response = ui.add(TextEdit::singleline(&mut edit.half_yearly).desired_width(60.0));
                if response.lost_focus() {
                    commits.push(EditCommit::Field(
                        TopicField::HalfYearlyScore,
                        edit.half_yearly.clone(),
                    ));
                }
                ui.end_row();

                ui.label("Current Score (%)");
                let response = ui.add(TextEdit::singleline(&mut edit.current).desired_width(60.0));
                if response.lost_focus() {
                    commits.push(EditCommit::Field(
                        TopicField::CurrentScore,
                        edit.current.clone(),
                    ));
                }
                ui.end_row();

                ui.label("Status");
                ComboBox::from_id_salt((subject_idx, topic_idx, "status"))
                    .selected_text(status_choice.label())
                    .show_ui(ui, |ui| {
                        for status in TopicStatus::ALL {
                            ui.selectable_value(&mut status_choice, status, status.label());
                        }
                    });
                ui.end_row();
            });

        ui.add_space(4.0);
        ui.collapsing(
            RichText::new("📅 Weekly Task Planner").strong(),
            |ui| {
                Grid::new((subject_idx, topic_idx, "tasks"))
                    .num_columns(2)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for week in 0..TOTAL_WEEKS {
                            ui.label(format!("Week {}", week + 1));
                            let response = ui.add(
                                TextEdit::singleline(&mut edit.tasks[week])
                                    .hint_text(format!("Task for week {}", week + 1))
                                    .desired_width(f32::INFINITY),
                            );
                            if response.lost_focus() {
                                commits.push(EditCommit::Task(week, edit.tasks[week].clone()));
                            }
                            ui.end_row();
                        }
                    });
            },
        );

        ui.add_space(4.0);
        ui.label("Notes & Remarks");
        let response = ui.add(
            TextEdit::multiline(&mut edit.notes)
                .hint_text("Add your notes here...")
                .desired_rows(2)
                .desired_width(f32::INFINITY),
        );
        if response.lost_focus() {
            commits.push(EditCommit::Field(TopicField::Notes, edit.notes.clone()));
        }
    });

    if status_choice != record.status {
        commits.push(EditCommit::Field(
            TopicField::Status,
            status_choice.token().to_owned(),
        ));
    }

    if commits.is_empty() {
        return;
    }
    for commit in commits {
        match commit {
            EditCommit::Field(field, raw) => app.commit_field(subject, topic, field, &raw),
            EditCommit::Task(week, text) => app.commit_weekly_task(subject, topic, week, &text),
        }
    }
    // resync the buffers with whatever the store kept (clamped scores etc.)
    app.topic_edits.remove(&(subject_idx, topic_idx));
}
