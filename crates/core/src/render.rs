//! Terminal output for the progress tree
//!
//! Lines are written straight to the output stream. In interactive mode an
//! uncategorized task first gets a placeholder without a newline, which the
//! completion line later overwrites by returning the cursor to column zero.
//! Every partial write is flushed immediately so the cursor return lands on
//! the line that is already on screen.

use crossterm::{
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Prefix of a top-level task line
pub const TOP_LEVEL_PREFIX: &str = "   ├─ ";
/// Prefix of a condensed line for a categorized task
pub const CONDENSED_PREFIX: &str = "   │  ├─ ";
/// Prefix of the error detail under a failed task
pub const DETAIL_PREFIX: &str = "   │  └─ ";

/// Dot-fill target for top-level lines
pub const TOP_LEVEL_WIDTH: usize = 50;
/// Dot-fill target for condensed lines
pub const CONDENSED_WIDTH: usize = 35;

pub const SUCCESS_GLYPH: char = '✓';
pub const FAILURE_GLYPH: char = '✗';

const CURSOR_RETURN: &str = "\r";

/// How completion lines reach the terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Placeholders on task start, overwritten in place on completion
    #[default]
    Interactive,
    /// No placeholders or cursor control; one finished line per task
    Plain,
}

/// Dots padding `name` out to `width` columns; never negative
pub fn dot_fill(name: &str, width: usize) -> String {
    ".".repeat(width.saturating_sub(name.chars().count()))
}

/// Writes progress lines to an output stream
#[derive(Debug)]
pub struct Renderer<W: Write> {
    writer: W,
    mode: RenderMode,
}

impl<W: Write> Renderer<W> {
    pub fn new(writer: W, mode: RenderMode) -> Self {
        Self { writer, mode }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write the in-progress line for a task.
    ///
    /// Returns whether a placeholder is now waiting to be overwritten.
    pub fn placeholder(&mut self, name: &str) -> io::Result<bool> {
        if self.mode == RenderMode::Plain {
            return Ok(false);
        }
        write!(self.writer, "{TOP_LEVEL_PREFIX}{name} ")?;
        self.writer.flush()?;
        Ok(true)
    }

    /// Write a finished top-level line, overwriting any placeholder
    pub fn task_line(&mut self, name: &str, glyph: char) -> io::Result<()> {
        self.cursor_return()?;
        writeln!(
            self.writer,
            "{TOP_LEVEL_PREFIX}{name} {} {glyph}",
            dot_fill(name, TOP_LEVEL_WIDTH)
        )?;
        self.writer.flush()
    }

    /// Write a condensed line for a categorized task
    pub fn condensed_line(&mut self, display_name: &str, glyph: char) -> io::Result<()> {
        self.cursor_return()?;
        writeln!(
            self.writer,
            "{CONDENSED_PREFIX}{display_name} {} {glyph}",
            dot_fill(display_name, CONDENSED_WIDTH)
        )?;
        self.writer.flush()
    }

    /// Write the indented error line under a failed task
    pub fn error_detail(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{DETAIL_PREFIX}Error: {message}")?;
        self.writer.flush()
    }

    /// Erase a placeholder whose task will never complete on screen
    pub fn clear_placeholder(&mut self) -> io::Result<()> {
        if self.mode == RenderMode::Plain {
            return Ok(());
        }
        self.cursor_return()?;
        queue!(self.writer, Clear(ClearType::CurrentLine))?;
        self.writer.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn cursor_return(&mut self) -> io::Result<()> {
        match self.mode {
            RenderMode::Interactive => self.writer.write_all(CURSOR_RETURN.as_bytes()),
            RenderMode::Plain => Ok(()),
        }
    }
}
