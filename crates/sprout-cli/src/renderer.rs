//! Terminal rendering module for rich markdown output
//!
//! Markdown from the core display types is printed through termimad, with
//! plant headers colored by watering status. `--no-color` prints the
//! markdown untouched.

use anyhow::Result;
use sprout_core::PlantStatus;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[{}m{line}\x1b[0m", header_color(line));
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// ANSI color code for a header line, picked from the status icon it carries.
fn header_color(line: &str) -> &'static str {
    let status = [
        PlantStatus::Overdue,
        PlantStatus::DueToday,
        PlantStatus::DueSoon,
        PlantStatus::Healthy,
    ]
    .into_iter()
    .find(|status| line.contains(status.with_icon()));

    match status {
        Some(PlantStatus::Overdue) => "31",
        Some(PlantStatus::DueToday) => "33",
        Some(PlantStatus::DueSoon) => "36",
        Some(PlantStatus::Healthy) => "32",
        None => "34",
    }
}
