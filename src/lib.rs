// Library root
// -----------
// This crate exposes a small library surface for the habit tracker. The
// binary (`main.rs`) uses these modules to run the interactive menu.
//
// Module responsibilities:
// - `store`: The habit registry (names -> completion dates) and its JSON
//   file persistence.
// - `streak`: Totals and current-streak calculation over a completion log.
// - `prompt`: Input sources and the read-validate-retry helper.
// - `style`: Colored terminal output, kept apart from any logic.
// - `ui`: The menu loop and the add / mark / stats / quit flows.
// - `config` and `logging`: Data file location and logger setup.
//
// Keeping the store and streak logic free of terminal I/O makes them easy
// to test, and lets the UI be driven by scripted input in tests.
pub mod config;
pub mod logging;
pub mod prompt;
pub mod store;
pub mod streak;
pub mod style;
pub mod ui;

pub use config::Config;
pub use store::{AddOutcome, Habit, HabitStore, MarkOutcome, StorageError};
pub use streak::{calculate_streak, HabitStats};
