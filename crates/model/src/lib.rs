//! Domain model for the taskboard: tasks, subtasks, and the board that owns
//! them. All mutation goes through [`TaskBoard`] operations, which validate
//! their inputs and report failures as explicit error values instead of
//! panicking.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on subtasks per task, and therefore on the pending buffer.
pub const MAX_SUBTASKS_PER_TASK: usize = 5;

/// A named, dated sub-item attached to a task at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub name: String,
    pub date: String,
}

impl Subtask {
    /// Builds a subtask from raw user input. Name and date must be non-empty
    /// after trimming; the date format itself is not validated.
    pub fn new(name: &str, date: &str) -> Result<Self, SubtaskValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SubtaskValidationError::EmptyName);
        }
        let date = date.trim();
        if date.is_empty() {
            return Err(SubtaskValidationError::EmptyDate);
        }
        Ok(Self {
            name: name.to_string(),
            date: date.to_string(),
        })
    }
}

/// A user-created work item. Subtasks are captured at creation time and are
/// immutable afterwards; only the `completed` flag changes over a task's life.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    pub hours_to_complete: i64,
    pub completed: bool,
    pub subtasks: Vec<Subtask>,
}

impl Task {
    pub fn new(
        description: &str,
        hours_to_complete: i64,
        subtasks: Vec<Subtask>,
    ) -> Result<Self, TaskValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskValidationError::EmptyDescription);
        }
        if hours_to_complete <= 0 {
            return Err(TaskValidationError::HoursNotPositive {
                hours: hours_to_complete,
            });
        }
        if subtasks.len() > MAX_SUBTASKS_PER_TASK {
            return Err(TaskValidationError::TooManySubtasks {
                count: subtasks.len(),
            });
        }
        Ok(Self {
            description: description.to_string(),
            hours_to_complete,
            completed: false,
            subtasks,
        })
    }
}

/// Why a task failed to validate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskValidationError {
    #[error("task description must not be empty")]
    EmptyDescription,
    #[error("hours to complete must be a whole number, got '{input}'")]
    HoursNotNumeric { input: String },
    #[error("hours to complete must be greater than zero, got {hours}")]
    HoursNotPositive { hours: i64 },
    #[error("a task can hold at most {MAX_SUBTASKS_PER_TASK} subtasks, got {count}")]
    TooManySubtasks { count: usize },
}

/// Why a subtask failed to enter the pending buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubtaskValidationError {
    #[error("subtask name must not be empty")]
    EmptyName,
    #[error("subtask date must not be empty")]
    EmptyDate,
    #[error("the pending buffer already holds {MAX_SUBTASKS_PER_TASK} subtasks")]
    BufferFull,
}

/// A positional operation addressed an index past the end of its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of range for {len} entries")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Ordered task list plus the transient buffer of subtasks entered before
/// their parent task exists. Fields are private so every state transition
/// passes through a validating operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    subtask_buffer: Vec<Subtask>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn subtask_buffer(&self) -> &[Subtask] {
        &self.subtask_buffer
    }

    /// Parses the raw hours text and appends a new task built from the
    /// current subtask buffer. The buffer is drained only on success; any
    /// validation failure leaves both the task list and the buffer untouched.
    pub fn add_task(
        &mut self,
        description: &str,
        hours_text: &str,
    ) -> Result<(), TaskValidationError> {
        let hours = parse_hours(hours_text)?;
        // Validate against a copy first so a rejected task cannot eat the buffer.
        let task = Task::new(description, hours, self.subtask_buffer.clone())?;
        self.subtask_buffer.clear();
        self.tasks.push(task);
        Ok(())
    }

    /// Appends a subtask to the pending buffer, refusing once the buffer
    /// holds [`MAX_SUBTASKS_PER_TASK`] entries.
    pub fn add_subtask(&mut self, name: &str, date: &str) -> Result<(), SubtaskValidationError> {
        if self.subtask_buffer.len() >= MAX_SUBTASKS_PER_TASK {
            return Err(SubtaskValidationError::BufferFull);
        }
        let subtask = Subtask::new(name, date)?;
        self.subtask_buffer.push(subtask);
        Ok(())
    }

    /// Removes and returns the pending subtask at `index`.
    pub fn remove_subtask(&mut self, index: usize) -> Result<Subtask, IndexOutOfRange> {
        if index >= self.subtask_buffer.len() {
            return Err(IndexOutOfRange {
                index,
                len: self.subtask_buffer.len(),
            });
        }
        Ok(self.subtask_buffer.remove(index))
    }

    /// Removes and returns the task at `index`.
    pub fn remove_task(&mut self, index: usize) -> Result<Task, IndexOutOfRange> {
        if index >= self.tasks.len() {
            return Err(IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(self.tasks.remove(index))
    }

    /// Inverts the completion flag of the task at `index` and returns the
    /// new value.
    pub fn toggle_task(&mut self, index: usize) -> Result<bool, IndexOutOfRange> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(IndexOutOfRange { index, len })?;
        task.completed = !task.completed;
        Ok(task.completed)
    }
}

/// Parses user-entered hours text, keeping "not a number" distinct from
/// "not positive" so the UI can word its feedback accordingly.
pub fn parse_hours(text: &str) -> Result<i64, TaskValidationError> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| TaskValidationError::HoursNotNumeric {
            input: trimmed.to_string(),
        })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
