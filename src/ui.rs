// UI layer: the interactive menu and the flows behind each entry.
// Everything the flows need (store, config, input, output, clock) lives in
// an owned `App` that `main_menu` drives until the user confirms quitting.

use crate::config::{Config, DATE_FORMAT};
use crate::prompt::{prompt_validated, LineSource};
use crate::store::{AddOutcome, HabitStore, MarkOutcome};
use crate::style;
use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use log::{error, info};
use std::io::Write;

/// Entries of the main menu, numbered 1-4 on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddHabit,
    MarkDone,
    ShowStats,
    Quit,
}

impl MenuChoice {
    pub const LABELS: [&'static str; 4] = [
        "Add habit",
        "Mark habit done today",
        "Show stats",
        "Quit",
    ];

    pub fn parse(answer: &str) -> Option<Self> {
        match answer {
            "1" => Some(MenuChoice::AddHabit),
            "2" => Some(MenuChoice::MarkDone),
            "3" => Some(MenuChoice::ShowStats),
            "4" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Owned application context passed through the menu loop.
pub struct App<L, W> {
    config: Config,
    store: HabitStore,
    input: L,
    out: W,
    today: fn() -> NaiveDate,
}

impl<L: LineSource, W: Write> App<L, W> {
    /// Build an app around an already loaded store.
    pub fn new(config: Config, store: HabitStore, input: L, out: W) -> Self {
        App {
            config,
            store,
            input,
            out,
            today: local_today,
        }
    }

    /// Build an app, loading the store from `config.data_file`.
    pub fn load(config: Config, input: L, out: W) -> Self {
        let store = HabitStore::load(&config.data_file);
        Self::new(config, store, input, out)
    }

    /// Replace the clock used for "today".
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn store(&self) -> &HabitStore {
        &self.store
    }

    pub fn input(&self) -> &L {
        &self.input
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Print the menu and read a valid choice.
    pub fn choose(&mut self) -> Result<MenuChoice> {
        style::header(&mut self.out, "DAILY HABIT TRACKER")?;
        for (idx, label) in MenuChoice::LABELS.iter().enumerate() {
            writeln!(self.out, "{}. {}", idx + 1, label)?;
        }
        let answer = prompt_validated(
            &mut self.input,
            &mut self.out,
            "Choose option (1-4)",
            |x| MenuChoice::parse(x).is_some(),
            "Choose a number between 1 and 4.",
        )?;
        MenuChoice::parse(&answer).ok_or_else(|| anyhow!("unexpected menu answer `{answer}`"))
    }

    /// Ask for a name and register it. Duplicates are reported, not added.
    pub fn add_habit(&mut self) -> Result<()> {
        style::header(&mut self.out, "ADD NEW HABIT")?;
        let name = prompt_validated(
            &mut self.input,
            &mut self.out,
            "Enter habit name",
            |x| !x.is_empty(),
            "Habit name cannot be empty.",
        )?;
        match self.store.add_habit(&name) {
            AddOutcome::Added(name) => {
                info!("added habit `{name}`");
                style::success(&mut self.out, &format!("Habit '{name}' added successfully!"))?;
            }
            AddOutcome::AlreadyExists(name) => {
                style::warning(&mut self.out, &format!("Habit '{name}' already exists."))?;
            }
            AddOutcome::EmptyName => {
                style::warning(&mut self.out, "Habit name cannot be empty.")?;
            }
        }
        Ok(())
    }

    /// List habits and return the one the user picks, or `None` when there
    /// is nothing to pick from. No number is asked for in that case.
    pub fn select_habit(&mut self) -> Result<Option<String>> {
        if self.store.is_empty() {
            style::warning(&mut self.out, "No habits to choose from. Add some first.")?;
            return Ok(None);
        }
        let names: Vec<String> = self.store.names().map(str::to_string).collect();
        for (idx, name) in names.iter().enumerate() {
            writeln!(self.out, "{}. {}", idx + 1, name)?;
        }
        let count = names.len();
        let answer = prompt_validated(
            &mut self.input,
            &mut self.out,
            &format!("Select habit number (1-{count})"),
            |x| parse_index(x, count).is_some(),
            "Enter a valid habit number.",
        )?;
        Ok(parse_index(&answer, count).map(|idx| names[idx].clone()))
    }

    /// Mark the selected habit as done for today.
    pub fn mark_done(&mut self) -> Result<()> {
        style::header(&mut self.out, "MARK HABIT DONE")?;
        let Some(name) = self.select_habit()? else {
            return Ok(());
        };
        let today = (self.today)();
        let date = today.format(DATE_FORMAT).to_string();
        match self.store.mark_done(&name, today) {
            MarkOutcome::Marked => {
                info!("marked `{name}` done for {date}");
                style::success(&mut self.out, &format!("Marked '{name}' done for {date}!"))?;
            }
            MarkOutcome::AlreadyMarked => {
                style::warning(&mut self.out, &format!("'{name}' already marked done for today."))?;
            }
            MarkOutcome::UnknownHabit => {
                error!("selected habit `{name}` is missing from the store");
            }
        }
        Ok(())
    }

    /// Print totals and current streaks for every habit.
    pub fn show_stats(&mut self) -> Result<()> {
        style::header(&mut self.out, "HABIT STATISTICS")?;
        if self.store.is_empty() {
            style::warning(&mut self.out, "No habits tracked yet.")?;
            return Ok(());
        }
        for stats in self.store.stats((self.today)()) {
            style::label(&mut self.out, &format!("Habit: {}", stats.name))?;
            writeln!(self.out, "  Total days done: {}", stats.total_days)?;
            writeln!(self.out, "  Current streak:  {}", stats.current_streak)?;
            style::separator(&mut self.out)?;
        }
        Ok(())
    }

    /// Ask whether to quit. `true` only for an explicit "y".
    pub fn confirm_exit(&mut self) -> Result<bool> {
        let answer = prompt_validated(
            &mut self.input,
            &mut self.out,
            "Are you sure you want to quit? (y/n)",
            |x| matches!(x.to_lowercase().as_str(), "y" | "n"),
            "Please enter y or n.",
        )?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    /// Write the store to disk. A failure is shown to the user and logged
    /// but does not stop the session.
    pub fn persist(&mut self) -> Result<()> {
        if let Err(err) = self.store.save(&self.config.data_file) {
            error!("{err}");
            style::failure(&mut self.out, &format!("Error saving data: {err}"))?;
        }
        Ok(())
    }
}

// 1-based menu answer to 0-based index; digits only.
fn parse_index(answer: &str, count: usize) -> Option<usize> {
    if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let n: usize = answer.parse().ok()?;
    (1..=count).contains(&n).then(|| n - 1)
}

/// Main interactive menu. Runs until the user confirms quitting, saving
/// after every add or mark and once more on the way out.
pub fn main_menu<L: LineSource, W: Write>(app: &mut App<L, W>) -> Result<()> {
    loop {
        match app.choose()? {
            MenuChoice::AddHabit => {
                app.add_habit()?;
                app.persist()?;
            }
            MenuChoice::MarkDone => {
                app.mark_done()?;
                app.persist()?;
            }
            MenuChoice::ShowStats => app.show_stats()?,
            MenuChoice::Quit => {
                if app.confirm_exit()? {
                    app.persist()?;
                    style::success(&mut app.out, "Peace out. Keep crushing it!")?;
                    break;
                }
            }
        }
    }
    Ok(())
}
