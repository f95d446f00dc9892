use chrono::Local;
use eframe::egui;
use serde::{Deserialize, Serialize};

use model::{TaskBoard, MAX_SUBTASKS_PER_TASK};

use crate::controller::actions::{apply_action, feedback_for, ActionOutcome};
use crate::controller::events::{Feedback, UiAction};

pub const SETTINGS_STORAGE_KEY: &str = "taskboard_desktop_settings_v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemePreset {
    Dark,
    Light,
}

impl ThemePreset {
    fn label(self) -> &'static str {
        match self {
            ThemePreset::Dark => "Dark",
            ThemePreset::Light => "Light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ThemeSettings {
    preset: ThemePreset,
    accent_color: egui::Color32,
    panel_rounding: u8,
}

impl ThemeSettings {
    fn dark_default() -> Self {
        Self {
            preset: ThemePreset::Dark,
            accent_color: egui::Color32::from_rgb(88, 101, 242),
            panel_rounding: 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct UiReadabilitySettings {
    text_scale: f32,
    show_subtask_dates: bool,
}

impl UiReadabilitySettings {
    fn defaults() -> Self {
        Self {
            text_scale: 1.0,
            show_subtask_dates: true,
        }
    }
}

/// Serialized form of the cosmetic settings kept across runs through
/// `eframe::Storage`. Task state is deliberately never part of this:
/// the board is memory-resident and gone when the app exits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersistedSettings {
    theme_preset: ThemePreset,
    accent_color: [u8; 4],
    panel_rounding: u8,
    text_scale: f32,
    show_subtask_dates: bool,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        let theme = ThemeSettings::dark_default();
        let readability = UiReadabilitySettings::defaults();
        Self {
            theme_preset: theme.preset,
            accent_color: [
                theme.accent_color.r(),
                theme.accent_color.g(),
                theme.accent_color.b(),
                theme.accent_color.a(),
            ],
            panel_rounding: theme.panel_rounding,
            text_scale: readability.text_scale,
            show_subtask_dates: readability.show_subtask_dates,
        }
    }
}

impl PersistedSettings {
    fn into_runtime(self) -> (ThemeSettings, UiReadabilitySettings) {
        (
            ThemeSettings {
                preset: self.theme_preset,
                accent_color: egui::Color32::from_rgba_unmultiplied(
                    self.accent_color[0],
                    self.accent_color[1],
                    self.accent_color[2],
                    self.accent_color[3],
                ),
                panel_rounding: self.panel_rounding.min(16),
            },
            UiReadabilitySettings {
                text_scale: self.text_scale.clamp(0.8, 1.4),
                show_subtask_dates: self.show_subtask_dates,
            },
        )
    }

    fn from_runtime(theme: ThemeSettings, readability: UiReadabilitySettings) -> Self {
        Self {
            theme_preset: theme.preset,
            accent_color: [
                theme.accent_color.r(),
                theme.accent_color.g(),
                theme.accent_color.b(),
                theme.accent_color.a(),
            ],
            panel_rounding: theme.panel_rounding,
            text_scale: readability.text_scale,
            show_subtask_dates: readability.show_subtask_dates,
        }
    }
}

/// Single-window task manager. The board is the Model; rendering reads it
/// and queues [`UiAction`]s, which are applied once the frame's widgets are
/// drawn so widget code never observes a half-mutated board.
pub struct TaskboardApp {
    board: TaskBoard,

    // Form drafts, cleared on successful submission.
    description_input: String,
    hours_input: String,
    subtask_name_input: String,
    subtask_date_input: String,

    // Feedback surfaces.
    inline_error: Option<String>,
    alert: Option<String>,
    status: String,

    theme: ThemeSettings,
    readability: UiReadabilitySettings,
    applied_theme: Option<ThemeSettings>,
    settings_open: bool,
    focus_description: bool,
}

impl TaskboardApp {
    pub fn new(board: TaskBoard, persisted: Option<PersistedSettings>) -> Self {
        let (theme, readability) = persisted.unwrap_or_default().into_runtime();
        Self {
            board,
            description_input: String::new(),
            hours_input: String::new(),
            subtask_name_input: String::new(),
            subtask_date_input: String::new(),
            inline_error: None,
            alert: None,
            status: "Ready".to_string(),
            theme,
            readability,
            applied_theme: None,
            settings_open: false,
            focus_description: true,
        }
    }

    fn scaled(&self, size: f32) -> f32 {
        size * self.readability.text_scale
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }

        let mut visuals = match self.theme.preset {
            ThemePreset::Dark => egui::Visuals::dark(),
            ThemePreset::Light => egui::Visuals::light(),
        };
        visuals.selection.bg_fill = self.theme.accent_color;
        visuals.hyperlink_color = self.theme.accent_color;
        let radius = egui::CornerRadius::same(self.theme.panel_rounding);
        visuals.widgets.inactive.corner_radius = radius;
        visuals.widgets.hovered.corner_radius = radius;
        visuals.widgets.active.corner_radius = radius;
        visuals.widgets.open.corner_radius = radius;
        visuals.widgets.noninteractive.corner_radius = radius;
        ctx.set_visuals(visuals);

        self.applied_theme = Some(self.theme);
    }

    /// Applies one queued action to the board and routes the resulting
    /// feedback to its surface. Successful submissions also clear the form
    /// that produced them.
    fn handle_action(&mut self, action: UiAction) {
        let outcome = apply_action(&mut self.board, action);

        match &outcome {
            ActionOutcome::TaskAdded => {
                self.description_input.clear();
                self.hours_input.clear();
                self.inline_error = None;
                self.focus_description = true;
            }
            ActionOutcome::SubtaskAdded => {
                self.subtask_name_input.clear();
                self.subtask_date_input.clear();
            }
            _ => {}
        }

        let feedback = feedback_for(&outcome);
        if feedback.is_error() {
            tracing::warn!(?outcome, "ui action rejected");
        }
        match feedback {
            Feedback::Status(message) => {
                self.status = message;
            }
            Feedback::InlineError(message) => {
                self.status = message.clone();
                self.inline_error = Some(message);
            }
            Feedback::Alert(message) => {
                self.status = message.clone();
                self.alert = Some(message);
            }
        }
    }

    // ---------- Form helpers (stable IDs + stacked layout) ----------

    fn form_text_field(
        ui: &mut egui::Ui,
        id: &'static str,
        label: &str,
        hint: &str,
        value: &mut String,
        should_focus: bool,
    ) -> egui::Response {
        ui.label(egui::RichText::new(label).strong());
        let edit = egui::TextEdit::singleline(value)
            .id_salt(id)
            .hint_text(
                egui::RichText::new(hint)
                    .color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
            )
            .desired_width(f32::INFINITY);

        let response = ui.add_sized([ui.available_width(), 30.0], edit);
        if should_focus {
            response.request_focus();
        }
        response
    }

    fn card_frame(&self, ui: &egui::Ui) -> egui::Frame {
        egui::Frame::NONE
            .fill(ui.visuals().faint_bg_color.gamma_multiply(0.55))
            .corner_radius(self.theme.panel_rounding as f32 + 2.0)
            .inner_margin(egui::Margin::symmetric(12, 10))
    }

    fn show_inline_error_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(message) = self.inline_error.clone() {
            egui::Frame::NONE
                .fill(egui::Color32::from_rgb(111, 53, 53))
                .stroke(egui::Stroke::new(
                    1.0,
                    egui::Color32::from_rgb(175, 96, 96),
                ))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&message).color(egui::Color32::WHITE));
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.button("Dismiss").clicked() {
                                    self.inline_error = None;
                                }
                            },
                        );
                    });
                });
            ui.add_space(8.0);
        }
    }

    fn show_task_form(&mut self, ui: &mut egui::Ui) -> Option<UiAction> {
        let mut submit = false;
        let focus_description = std::mem::take(&mut self.focus_description);

        let mut description_buf = self.description_input.clone();
        let mut hours_buf = self.hours_input.clone();

        self.card_frame(ui).show(ui, |ui| {
            ui.label(
                egui::RichText::new("New task")
                    .strong()
                    .size(self.scaled(16.0)),
            );
            ui.add_space(4.0);

            let description_resp = Self::form_text_field(
                ui,
                "task_description",
                "Description",
                "Write report",
                &mut description_buf,
                focus_description,
            );
            ui.add_space(4.0);
            let hours_resp = Self::form_text_field(
                ui,
                "task_hours",
                "Hours to complete",
                "5",
                &mut hours_buf,
                false,
            );

            ui.add_space(6.0);
            let enter_pressed = ui.ctx().input(|i| i.key_pressed(egui::Key::Enter));
            let field_focused = description_resp.has_focus() || hours_resp.has_focus();

            ui.horizontal(|ui| {
                let button = egui::Button::new(
                    egui::RichText::new("Add task").strong().size(self.scaled(14.0)),
                )
                .fill(self.theme.accent_color);
                if ui.add(button).clicked() || (field_focused && enter_pressed) {
                    submit = true;
                }
            });
        });

        self.description_input = description_buf;
        self.hours_input = hours_buf;

        submit.then(|| UiAction::SubmitTask {
            description: self.description_input.clone(),
            hours: self.hours_input.clone(),
        })
    }

    fn show_subtask_form(&mut self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let mut submit = false;
        let mut name_buf = self.subtask_name_input.clone();
        let mut date_buf = self.subtask_date_input.clone();
        let date_hint = Local::now().format("%Y-%m-%d").to_string();

        self.card_frame(ui).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Subtasks for the next task")
                        .strong()
                        .size(self.scaled(16.0)),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!(
                        "{} / {MAX_SUBTASKS_PER_TASK}",
                        self.board.subtask_buffer().len()
                    ));
                });
            });
            ui.add_space(4.0);

            Self::form_text_field(
                ui,
                "subtask_name",
                "Name",
                "Design",
                &mut name_buf,
                false,
            );
            ui.add_space(4.0);
            Self::form_text_field(
                ui,
                "subtask_date",
                "Date",
                &date_hint,
                &mut date_buf,
                false,
            );

            ui.add_space(6.0);
            if ui.button("Add subtask").clicked() {
                submit = true;
            }

            if !self.board.subtask_buffer().is_empty() {
                ui.add_space(6.0);
                ui.separator();
                for (index, subtask) in self.board.subtask_buffer().iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&subtask.name).size(self.scaled(13.0)));
                        ui.weak(format!("({})", subtask.date));
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.small_button("✕").clicked() {
                                    actions.push(UiAction::RemoveSubtask { index });
                                }
                            },
                        );
                    });
                }
            }
        });

        self.subtask_name_input = name_buf;
        self.subtask_date_input = date_buf;

        if submit {
            actions.push(UiAction::SubmitSubtask {
                name: self.subtask_name_input.clone(),
                date: self.subtask_date_input.clone(),
            });
        }
    }

    fn show_task_row(
        &self,
        ui: &mut egui::Ui,
        index: usize,
        task: &model::Task,
        actions: &mut Vec<UiAction>,
    ) {
        self.card_frame(ui).show(ui, |ui| {
            ui.horizontal(|ui| {
                let mut completed = task.completed;
                if ui.checkbox(&mut completed, "").changed() {
                    actions.push(UiAction::ToggleTask { index });
                }

                let mut text = egui::RichText::new(&task.description).size(self.scaled(15.0));
                if task.completed {
                    text = text.strikethrough().weak();
                } else {
                    text = text.strong();
                }
                ui.label(text);
                ui.weak(format!("{} h", task.hours_to_complete));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕ Remove").clicked() {
                        actions.push(UiAction::RemoveTask { index });
                    }
                });
            });

            if !task.subtasks.is_empty() {
                ui.indent(("task_subtasks", index), |ui| {
                    for subtask in &task.subtasks {
                        let line = if self.readability.show_subtask_dates {
                            format!("• {} ({})", subtask.name, subtask.date)
                        } else {
                            format!("• {}", subtask.name)
                        };
                        ui.label(
                            egui::RichText::new(line)
                                .size(self.scaled(12.5))
                                .color(ui.visuals().weak_text_color()),
                        );
                    }
                });
            }
        });
        ui.add_space(6.0);
    }

    fn show_task_list(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        if self.board.tasks().is_empty() {
            ui.weak("No tasks yet. Add one above.");
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for (index, task) in self.board.tasks().iter().enumerate() {
                    self.show_task_row(ui, index, task, actions);
                }
            });
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }

        let mut settings_open = self.settings_open;
        let mut close_requested = false;

        egui::Window::new("Settings")
            .open(&mut settings_open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("Theme").strong());
                egui::ComboBox::from_id_salt("theme_preset")
                    .selected_text(self.theme.preset.label())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.theme.preset,
                            ThemePreset::Dark,
                            ThemePreset::Dark.label(),
                        );
                        ui.selectable_value(
                            &mut self.theme.preset,
                            ThemePreset::Light,
                            ThemePreset::Light.label(),
                        );
                    });

                ui.label("Accent color");
                ui.color_edit_button_srgba(&mut self.theme.accent_color);
                ui.add(
                    egui::Slider::new(&mut self.theme.panel_rounding, 0..=16)
                        .text("Panel rounding"),
                );

                ui.separator();
                ui.label(egui::RichText::new("Readability").strong());
                ui.add(
                    egui::Slider::new(&mut self.readability.text_scale, 0.8..=1.4)
                        .text("Text scale")
                        .step_by(0.05),
                );
                ui.checkbox(
                    &mut self.readability.show_subtask_dates,
                    "Show subtask dates in the task list",
                );

                ui.separator();
                if ui.button("Reset to defaults").clicked() {
                    self.theme = ThemeSettings::dark_default();
                    self.readability = UiReadabilitySettings::defaults();
                }
                if ui.button("Close").clicked() {
                    close_requested = true;
                }
            });

        self.settings_open = settings_open && !close_requested;
    }

    /// Blocking dialog for subtask validation failures, standing in for the
    /// page-level alert in the original layout.
    fn show_alert_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.alert.clone() {
            let modal = egui::Modal::new(egui::Id::new("subtask_alert")).show(ctx, |ui| {
                ui.set_width(280.0);
                ui.heading("Cannot add subtask");
                ui.add_space(4.0);
                ui.label(&message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    self.alert = None;
                }
            });
            if modal.should_close() {
                self.alert = None;
            }
        }
    }

    fn completed_count(&self) -> usize {
        self.board
            .tasks()
            .iter()
            .filter(|task| task.completed)
            .count()
    }
}

impl eframe::App for TaskboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);

        let mut actions: Vec<UiAction> = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new("Taskboard").size(self.scaled(22.0)));
                ui.weak(format!(
                    "{} tasks, {} completed",
                    self.board.tasks().len(),
                    self.completed_count()
                ));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙ Settings").clicked() {
                        self.settings_open = !self.settings_open;
                    }
                });
            });
            ui.add_space(8.0);

            self.show_inline_error_banner(ui);

            if let Some(action) = self.show_task_form(ui) {
                actions.push(action);
            }
            ui.add_space(8.0);
            self.show_subtask_form(ui, &mut actions);

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(6.0);

            self.show_task_list(ui, &mut actions);

            ui.add_space(6.0);
            ui.separator();
            ui.horizontal_wrapped(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
            });
        });

        self.show_settings_window(ctx);
        self.show_alert_modal(ctx);

        for action in actions {
            self.handle_action(action);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedSettings::from_runtime(self.theme, self.readability);
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
