use super::*;

fn board_with_tasks(descriptions: &[&str]) -> TaskBoard {
    let mut board = TaskBoard::new();
    for description in descriptions {
        board.add_task(description, "1").expect("valid task");
    }
    board
}

#[test]
fn rejects_empty_description() {
    let mut board = TaskBoard::new();
    let err = board.add_task("", "3").expect_err("empty description");
    assert_eq!(err, TaskValidationError::EmptyDescription);
    assert!(board.tasks().is_empty());
}

#[test]
fn rejects_whitespace_only_description() {
    let mut board = TaskBoard::new();
    let err = board.add_task("   ", "3").expect_err("blank description");
    assert_eq!(err, TaskValidationError::EmptyDescription);
    assert!(board.tasks().is_empty());
}

#[test]
fn rejects_non_numeric_hours() {
    let mut board = TaskBoard::new();
    let err = board.add_task("Write report", "soon").expect_err("bad hours");
    assert_eq!(
        err,
        TaskValidationError::HoursNotNumeric {
            input: "soon".to_string(),
        }
    );
    assert!(board.tasks().is_empty());
}

#[test]
fn rejects_zero_and_negative_hours() {
    let mut board = TaskBoard::new();
    assert_eq!(
        board.add_task("Write report", "0").expect_err("zero hours"),
        TaskValidationError::HoursNotPositive { hours: 0 }
    );
    assert_eq!(
        board.add_task("Write report", "-4").expect_err("negative hours"),
        TaskValidationError::HoursNotPositive { hours: -4 }
    );
    assert!(board.tasks().is_empty());
}

#[test]
fn failed_add_task_leaves_subtask_buffer_intact() {
    let mut board = TaskBoard::new();
    board.add_subtask("Design", "2024-01-01").expect("subtask");
    board.add_task("", "3").expect_err("empty description");
    assert_eq!(board.subtask_buffer().len(), 1);
}

#[test]
fn adds_task_and_drains_buffer() {
    let mut board = TaskBoard::new();
    board.add_subtask("Design", "2024-01-01").expect("subtask");
    board.add_task("Write report", "5").expect("valid task");

    assert_eq!(board.tasks().len(), 1);
    let task = &board.tasks()[0];
    assert_eq!(task.description, "Write report");
    assert_eq!(task.hours_to_complete, 5);
    assert!(!task.completed);
    assert_eq!(
        task.subtasks,
        vec![Subtask {
            name: "Design".to_string(),
            date: "2024-01-01".to_string(),
        }]
    );
    assert!(board.subtask_buffer().is_empty());
}

#[test]
fn trims_description_and_hours_input() {
    let mut board = TaskBoard::new();
    board.add_task("  Write report  ", " 5 ").expect("valid task");
    assert_eq!(board.tasks()[0].description, "Write report");
    assert_eq!(board.tasks()[0].hours_to_complete, 5);
}

#[test]
fn rejects_subtask_with_missing_fields() {
    let mut board = TaskBoard::new();
    assert_eq!(
        board.add_subtask("", "2024-01-01").expect_err("no name"),
        SubtaskValidationError::EmptyName
    );
    assert_eq!(
        board.add_subtask("Design", "  ").expect_err("no date"),
        SubtaskValidationError::EmptyDate
    );
    assert!(board.subtask_buffer().is_empty());
}

#[test]
fn subtask_buffer_caps_at_five() {
    let mut board = TaskBoard::new();
    for i in 0..MAX_SUBTASKS_PER_TASK {
        board
            .add_subtask(&format!("step {i}"), "2024-01-01")
            .expect("buffer has room");
    }
    let err = board
        .add_subtask("one too many", "2024-01-02")
        .expect_err("buffer full");
    assert_eq!(err, SubtaskValidationError::BufferFull);
    assert_eq!(board.subtask_buffer().len(), MAX_SUBTASKS_PER_TASK);
    assert!(board
        .subtask_buffer()
        .iter()
        .all(|subtask| subtask.name != "one too many"));
}

#[test]
fn buffer_is_usable_again_after_task_creation() {
    let mut board = TaskBoard::new();
    for i in 0..MAX_SUBTASKS_PER_TASK {
        board
            .add_subtask(&format!("step {i}"), "2024-01-01")
            .expect("buffer has room");
    }
    board.add_task("Big task", "8").expect("valid task");
    board
        .add_subtask("next batch", "2024-02-01")
        .expect("buffer drained by task creation");
    assert_eq!(board.subtask_buffer().len(), 1);
}

#[test]
fn removes_pending_subtask_by_index() {
    let mut board = TaskBoard::new();
    board.add_subtask("first", "2024-01-01").expect("subtask");
    board.add_subtask("second", "2024-01-02").expect("subtask");

    let removed = board.remove_subtask(0).expect("in range");
    assert_eq!(removed.name, "first");
    assert_eq!(board.subtask_buffer().len(), 1);
    assert_eq!(board.subtask_buffer()[0].name, "second");
}

#[test]
fn toggle_inverts_and_double_toggle_restores() {
    let mut board = board_with_tasks(&["only"]);
    assert!(board.toggle_task(0).expect("in range"));
    assert!(board.tasks()[0].completed);
    assert!(!board.toggle_task(0).expect("in range"));
    assert!(!board.tasks()[0].completed);
}

#[test]
fn remove_task_drops_exactly_the_addressed_element() {
    let mut board = board_with_tasks(&["first", "second", "third"]);
    let removed = board.remove_task(1).expect("in range");
    assert_eq!(removed.description, "second");
    assert_eq!(board.tasks().len(), 2);
    assert_eq!(board.tasks()[0].description, "first");
    assert_eq!(board.tasks()[1].description, "third");
}

#[test]
fn positional_ops_report_out_of_range_and_leave_state_alone() {
    let mut board = board_with_tasks(&["only"]);
    board.add_subtask("pending", "2024-01-01").expect("subtask");

    assert_eq!(
        board.remove_task(1).expect_err("past the end"),
        IndexOutOfRange { index: 1, len: 1 }
    );
    assert_eq!(
        board.toggle_task(7).expect_err("past the end"),
        IndexOutOfRange { index: 7, len: 1 }
    );
    assert_eq!(
        board.remove_subtask(3).expect_err("past the end"),
        IndexOutOfRange { index: 3, len: 1 }
    );
    assert_eq!(board.tasks().len(), 1);
    assert!(!board.tasks()[0].completed);
    assert_eq!(board.subtask_buffer().len(), 1);
}

#[test]
fn task_new_rejects_more_than_five_subtasks() {
    let subtasks: Vec<Subtask> = (0..6)
        .map(|i| Subtask {
            name: format!("step {i}"),
            date: "2024-01-01".to_string(),
        })
        .collect();
    let err = Task::new("overfull", 2, subtasks).expect_err("too many subtasks");
    assert_eq!(err, TaskValidationError::TooManySubtasks { count: 6 });
}

#[test]
fn parse_hours_distinguishes_non_numeric_from_non_positive() {
    assert_eq!(parse_hours(" 12 "), Ok(12));
    assert!(matches!(
        parse_hours("2.5"),
        Err(TaskValidationError::HoursNotNumeric { .. })
    ));
    // The sign is numeric; positivity is the task constructor's call.
    assert_eq!(parse_hours("-3"), Ok(-3));
}
