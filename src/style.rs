// Presentation helpers: colored one-line messages and section headers.
// Nothing here knows about habits; the UI decides what to say and these
// functions only decide how it looks.

use crate::config::SCREEN_WIDTH;
use crossterm::style::{style, Stylize};
use std::io::{self, Write};

/// Bold cyan title framed by `=` rules, preceded by a blank line.
pub fn header<W: Write + ?Sized>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "=".repeat(SCREEN_WIDTH);
    let centered = format!("{title:^width$}", width = SCREEN_WIDTH);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "{}", style(centered).cyan().bold())?;
    writeln!(out, "{rule}")
}

pub fn separator<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(SCREEN_WIDTH))
}

pub fn success<W: Write + ?Sized>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{}", style(msg).green())
}

pub fn warning<W: Write + ?Sized>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{}", style(msg).yellow())
}

pub fn failure<W: Write + ?Sized>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{}", style(msg).red())
}

/// Bold blue label, used for habit names on the stats screen.
pub fn label<W: Write + ?Sized>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{}", style(msg).blue().bold())
}
