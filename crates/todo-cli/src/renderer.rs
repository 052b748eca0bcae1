//! Terminal rendering module for todo list output
//!
//! Rendered lists are printed as-is in plain mode. Rich mode colors the list
//! header and done markers using termimad's crossterm styling; the text
//! itself is unchanged. Rich mode is only used when stdout is a terminal.

use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use termimad::crossterm::style::{style, Color, Stylize};
use todo_core::DONE_MARKER;

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    done_marker: String,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        Self {
            rich_enabled,
            done_marker: format!("[{DONE_MARKER}]"),
        }
    }

    /// Create a renderer for stdout: rich only when color is allowed and
    /// stdout is a terminal
    pub fn for_stdout(no_color: bool) -> Self {
        Self::new(rich_output_enabled(no_color, io::stdout().is_terminal()))
    }

    /// Render text to stdout, ending with exactly one newline
    pub fn render(&self, text: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        self.write_to(&mut out, text)?;
        out.flush()?;
        Ok(())
    }

    fn write_to(&self, out: &mut impl Write, text: &str) -> io::Result<()> {
        if self.rich_enabled {
            for line in text.lines() {
                writeln!(out, "{}", self.style_line(line))?;
            }
        } else {
            write!(out, "{text}")?;
            if !text.ends_with('\n') {
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn style_line(&self, line: &str) -> String {
        if line.starts_with("---- ") && line.ends_with(" ----") {
            style(line).with(Color::Blue).bold().to_string()
        } else if let Some(rest) = line.strip_prefix(self.done_marker.as_str()) {
            format!("{}{rest}", style(&self.done_marker).with(Color::Green))
        } else {
            line.to_string()
        }
    }
}

fn rich_output_enabled(no_color: bool, is_terminal: bool) -> bool {
    !no_color && is_terminal
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
