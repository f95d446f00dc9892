//! Applies UI actions to the task board and turns each outcome into the
//! feedback the view should surface.

use model::TaskBoard;

use crate::controller::events::{Feedback, UiAction};

/// What an applied action did to the board. The view uses this to decide
/// which input fields to clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    TaskAdded,
    TaskRejected(model::TaskValidationError),
    SubtaskAdded,
    SubtaskRejected(model::SubtaskValidationError),
    SubtaskRemoved,
    TaskRemoved { description: String },
    TaskToggled { completed: bool },
    OutOfRange(model::IndexOutOfRange),
}

/// The single mutation path from UI to model. Every action is logged by name
/// so a debug-level trace reads as the user's click sequence.
pub fn apply_action(board: &mut TaskBoard, action: UiAction) -> ActionOutcome {
    tracing::debug!(action = action.name(), "applying ui action");

    match action {
        UiAction::SubmitTask { description, hours } => {
            match board.add_task(&description, &hours) {
                Ok(()) => ActionOutcome::TaskAdded,
                Err(err) => ActionOutcome::TaskRejected(err),
            }
        }
        UiAction::SubmitSubtask { name, date } => match board.add_subtask(&name, &date) {
            Ok(()) => ActionOutcome::SubtaskAdded,
            Err(err) => ActionOutcome::SubtaskRejected(err),
        },
        UiAction::RemoveSubtask { index } => match board.remove_subtask(index) {
            Ok(_) => ActionOutcome::SubtaskRemoved,
            Err(err) => ActionOutcome::OutOfRange(err),
        },
        UiAction::RemoveTask { index } => match board.remove_task(index) {
            Ok(task) => ActionOutcome::TaskRemoved {
                description: task.description,
            },
            Err(err) => ActionOutcome::OutOfRange(err),
        },
        UiAction::ToggleTask { index } => match board.toggle_task(index) {
            Ok(completed) => ActionOutcome::TaskToggled { completed },
            Err(err) => ActionOutcome::OutOfRange(err),
        },
    }
}

/// Maps an outcome to the surface it should appear on: successes update the
/// status line, task rejections go to the inline banner, subtask rejections
/// block with a dialog, and stale indices (possible when a row vanished in
/// the same frame) report in the status line as errors too.
pub fn feedback_for(outcome: &ActionOutcome) -> Feedback {
    match outcome {
        ActionOutcome::TaskAdded => Feedback::Status("Task added".to_string()),
        ActionOutcome::TaskRejected(err) => Feedback::InlineError(err.to_string()),
        ActionOutcome::SubtaskAdded => Feedback::Status("Subtask queued".to_string()),
        ActionOutcome::SubtaskRejected(err) => Feedback::Alert(err.to_string()),
        ActionOutcome::SubtaskRemoved => Feedback::Status("Pending subtask removed".to_string()),
        ActionOutcome::TaskRemoved { description } => {
            Feedback::Status(format!("Removed task '{description}'"))
        }
        ActionOutcome::TaskToggled { completed: true } => {
            Feedback::Status("Task marked complete".to_string())
        }
        ActionOutcome::TaskToggled { completed: false } => {
            Feedback::Status("Task reopened".to_string())
        }
        ActionOutcome::OutOfRange(err) => {
            Feedback::InlineError(format!("Stale list entry: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{SubtaskValidationError, TaskValidationError};

    #[test]
    fn empty_description_is_rejected_with_inline_feedback() {
        let mut board = TaskBoard::new();
        let outcome = apply_action(
            &mut board,
            UiAction::SubmitTask {
                description: String::new(),
                hours: "3".to_string(),
            },
        );

        assert_eq!(
            outcome,
            ActionOutcome::TaskRejected(TaskValidationError::EmptyDescription)
        );
        assert!(board.tasks().is_empty());
        assert!(matches!(feedback_for(&outcome), Feedback::InlineError(_)));
    }

    #[test]
    fn successful_submit_appends_task_and_reports_status() {
        let mut board = TaskBoard::new();
        let outcome = apply_action(
            &mut board,
            UiAction::SubmitTask {
                description: "Write report".to_string(),
                hours: "5".to_string(),
            },
        );

        assert_eq!(outcome, ActionOutcome::TaskAdded);
        assert_eq!(board.tasks().len(), 1);
        assert!(!feedback_for(&outcome).is_error());
    }

    #[test]
    fn subtask_rejections_surface_as_blocking_alerts() {
        let mut board = TaskBoard::new();
        for i in 0..model::MAX_SUBTASKS_PER_TASK {
            apply_action(
                &mut board,
                UiAction::SubmitSubtask {
                    name: format!("step {i}"),
                    date: "2024-01-01".to_string(),
                },
            );
        }
        let outcome = apply_action(
            &mut board,
            UiAction::SubmitSubtask {
                name: "overflow".to_string(),
                date: "2024-01-02".to_string(),
            },
        );

        assert_eq!(
            outcome,
            ActionOutcome::SubtaskRejected(SubtaskValidationError::BufferFull)
        );
        assert!(matches!(feedback_for(&outcome), Feedback::Alert(_)));
    }

    #[test]
    fn toggle_reports_the_new_completion_state() {
        let mut board = TaskBoard::new();
        board.add_task("only", "1").expect("valid task");

        let first = apply_action(&mut board, UiAction::ToggleTask { index: 0 });
        assert_eq!(first, ActionOutcome::TaskToggled { completed: true });
        let second = apply_action(&mut board, UiAction::ToggleTask { index: 0 });
        assert_eq!(second, ActionOutcome::TaskToggled { completed: false });
    }

    #[test]
    fn stale_index_reports_without_mutating() {
        let mut board = TaskBoard::new();
        board.add_task("only", "1").expect("valid task");

        let outcome = apply_action(&mut board, UiAction::RemoveTask { index: 5 });
        assert!(matches!(outcome, ActionOutcome::OutOfRange(_)));
        assert_eq!(board.tasks().len(), 1);
        assert!(feedback_for(&outcome).is_error());
    }

    #[test]
    fn remove_task_feedback_names_the_removed_task() {
        let mut board = TaskBoard::new();
        board.add_task("Write report", "5").expect("valid task");

        let outcome = apply_action(&mut board, UiAction::RemoveTask { index: 0 });
        match feedback_for(&outcome) {
            Feedback::Status(message) => assert!(message.contains("Write report")),
            other => panic!("expected status feedback, got {other:?}"),
        }
    }
}
