use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::warn;

use crate::command::{parse_command, Command, HELP_TEXT};
use crate::order_gate::OrderState;
use crate::render::{render_catalog, render_panel};
use crate::session::DishSession;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(Option<String>),
    Quit,
}

/// Text front-end over a `DishSession`: turns command lines into session
/// operations and returns what should be printed.
#[derive(Debug, Default)]
pub struct Console {
    session: DishSession,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: DishSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &DishSession {
        &self.session
    }

    /// Runs one line. Bad input is reported back as text and the session
    /// carries on unchanged.
    pub fn execute_line(&mut self, line: &str) -> Step {
        match parse_command(line) {
            Ok(Some(command)) => self.apply(command),
            Ok(None) => Step::Continue(None),
            Err(e) => {
                warn!(line, error = %e, "rejected command");
                Step::Continue(Some(format!("Error: {}", e)))
            }
        }
    }

    pub fn apply(&mut self, command: Command) -> Step {
        let output = match command {
            Command::Toggle { category, id } => {
                self.session.toggle_ingredient(category, id);
                let verb = if self.session.selection().is_selected(category, id) {
                    "selected"
                } else {
                    "deselected"
                };
                Some(format!("{} {}", id, verb))
            }
            Command::Health(value) => Some(match self.session.set_health(&value) {
                Ok(()) => format!("Health condition: {}", value),
                Err(e) => format!("Error: {}", e),
            }),
            Command::Spice(value) => Some(match self.session.set_spice(&value) {
                Ok(()) => format!("Spice level: {}", value),
                Err(e) => format!("Error: {}", e),
            }),
            Command::Generate => {
                self.session.generate();
                self.session.displayed_text()
            }
            Command::Order => match self.session.place_order() {
                OrderState::Ordered => self.session.displayed_text(),
                OrderState::Idle => Some("Nothing to order: generate a dish with at least one ingredient first.".to_string()),
            },
            Command::Show => Some(render_panel(&self.session)),
            Command::Catalog => Some(render_catalog()),
            Command::Json => Some(self.snapshot_json()),
            Command::Help => Some(HELP_TEXT.to_string()),
            Command::Quit => return Step::Quit,
        };
        Step::Continue(output)
    }

    pub fn snapshot_json(&self) -> String {
        serde_json::to_string_pretty(&self.session.snapshot())
            .unwrap_or_else(|e| format!("Error: failed to serialize session: {}", e))
    }

    /// Output printed when a script or interactive run ends: the JSON
    /// snapshot when JSON output is configured.
    pub fn closing_output(&self, json_output: bool) -> Option<String> {
        json_output.then(|| self.snapshot_json())
    }

    /// Executes every line of `script` in order, stopping early at `quit`,
    /// and collects the printable output.
    pub fn run_script(&mut self, script: &str) -> Vec<String> {
        let mut outputs = Vec::new();
        for line in script.lines() {
            match self.execute_line(line) {
                Step::Continue(Some(text)) => outputs.push(text),
                Step::Continue(None) => {}
                Step::Quit => break,
            }
        }
        outputs
    }
}

pub async fn load_script(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read script file '{}'", path.display()))
}
