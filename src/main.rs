// Entrypoint for the habit tracker.
// - Keeps `main` small: set up logging, load the store into an `App` and
//   hand it to the menu loop.
// - Returns `anyhow::Result`; the process exits with success after the user
//   confirms quitting.

use habit_tracker::prompt::TerminalInput;
use habit_tracker::ui::{main_menu, App};
use habit_tracker::{logging, Config};

fn main() -> anyhow::Result<()> {
    logging::init();

    // Habit data lives in `habits.json` in the current directory. A missing
    // or unreadable file starts an empty tracker.
    let mut app = App::load(Config::default(), TerminalInput, std::io::stdout());

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(&mut app)?;
    Ok(())
}
