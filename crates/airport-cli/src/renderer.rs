//! Terminal rendering module for rich markdown output
//!
//! Views are produced as markdown by the core display types and rendered with
//! termimad, with optional fallback to plain text.

use airport_core::{AlertBanner, AlertSlots};
use anyhow::Result;
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

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            let mut table = String::new();
            for line in markdown.lines() {
                // Table rows are rendered as one block so columns line up.
                if line.starts_with('|') {
                    table.push_str(line);
                    table.push('\n');
                    continue;
                }
                self.flush_table(&mut table);

                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
            self.flush_table(&mut table);
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    fn flush_table(&self, table: &mut String) {
        if !table.is_empty() {
            self.skin.print_text(table);
            table.clear();
        }
    }

    /// Render the alert slots: success and warning on stdout, the error on
    /// stderr.
    pub fn render_alerts(&self, slots: &AlertSlots) -> Result<()> {
        let shown = AlertSlots {
            error: None,
            ..slots.clone()
        };
        if !shown.is_empty() {
            self.render(&AlertBanner(&shown).to_string())?;
        }
        if let Some(error) = &slots.error {
            if self.rich_enabled {
                eprintln!("\x1b[31mError:\x1b[0m {error}");
            } else {
                eprintln!("Error: {error}");
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
