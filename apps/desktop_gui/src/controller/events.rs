//! UI actions and user-facing feedback modeling for the desktop controller.

/// A user gesture captured by the view during a frame, applied to the model
/// once the frame's widgets are drawn. Indices address the current render
/// order, which is the model's order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    SubmitTask { description: String, hours: String },
    SubmitSubtask { name: String, date: String },
    RemoveSubtask { index: usize },
    RemoveTask { index: usize },
    ToggleTask { index: usize },
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::SubmitTask { .. } => "submit_task",
            UiAction::SubmitSubtask { .. } => "submit_subtask",
            UiAction::RemoveSubtask { .. } => "remove_subtask",
            UiAction::RemoveTask { .. } => "remove_task",
            UiAction::ToggleTask { .. } => "toggle_task",
        }
    }
}

/// Where a piece of feedback should surface in the UI. Task-form rejections
/// land in the inline banner next to the form; subtask rejections interrupt
/// with a blocking dialog, matching how the two forms report in the original
/// page layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Status line only; the action succeeded.
    Status(String),
    /// Dismissible inline error banner above the task form.
    InlineError(String),
    /// Blocking modal dialog requiring an OK click.
    Alert(String),
}

impl Feedback {
    pub fn is_error(&self) -> bool {
        !matches!(self, Feedback::Status(_))
    }
}
