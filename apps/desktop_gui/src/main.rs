mod controller;
mod ui;

use clap::Parser;
use eframe::egui;
use model::TaskBoard;

use crate::ui::app::{PersistedSettings, SETTINGS_STORAGE_KEY};
use crate::ui::TaskboardApp;

/// In-memory task management desktop app. Nothing but cosmetic settings
/// survives a restart.
#[derive(Debug, Parser)]
#[command(name = "taskboard")]
struct Cli {
    /// Pre-populate the board with a few sample tasks.
    #[arg(long)]
    demo: bool,

    /// Tracing env filter, e.g. "debug" or "desktop_gui=debug".
    #[arg(long, default_value = "info")]
    log_filter: String,
}

/// Sample content for `--demo`, built through the same validated operations
/// the UI uses.
fn demo_board() -> TaskBoard {
    let mut board = TaskBoard::new();

    board
        .add_subtask("Outline chapters", "2026-09-01")
        .expect("demo subtask is valid");
    board
        .add_subtask("Collect figures", "2026-09-03")
        .expect("demo subtask is valid");
    board
        .add_task("Write report", "5")
        .expect("demo task is valid");

    board
        .add_task("Review pull requests", "2")
        .expect("demo task is valid");

    board
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter.as_str())
        .init();

    let board = if cli.demo {
        tracing::info!("seeding board with demo tasks");
        demo_board()
    } else {
        TaskBoard::new()
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Taskboard")
            .with_inner_size([760.0, 680.0])
            .with_min_inner_size([520.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Taskboard",
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedSettings>(&text).ok())
            });
            Ok(Box::new(TaskboardApp::new(board, persisted)))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_board_holds_valid_tasks_and_an_empty_buffer() {
        let board = demo_board();

        assert_eq!(board.tasks().len(), 2);
        assert!(board.subtask_buffer().is_empty());
        assert_eq!(board.tasks()[0].description, "Write report");
        assert_eq!(board.tasks()[0].subtasks.len(), 2);
        assert!(board.tasks().iter().all(|task| !task.completed));
    }

    #[test]
    fn cli_defaults_to_empty_board_and_info_logging() {
        let cli = Cli::parse_from(["taskboard"]);
        assert!(!cli.demo);
        assert_eq!(cli.log_filter, "info");
    }
}
