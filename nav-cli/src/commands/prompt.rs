//! Prompt command - Input forms for the campus web front end
//!
//! The forms carry fixed element ids the front-end script binds to:
//! `start`, `end` and `findShortest` for routes, `from` and `findFurthest`
//! for the furthest-destination query.

use crate::output::{HtmlOutput, Output, OutputConfig, Outputter, TableOutput};
use anyhow::Result;
use serde::Serialize;

/// Which query the form is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PromptKind {
    /// Shortest path between two locations
    Path,
    /// Furthest destination from a location
    Furthest,
}

#[derive(Debug, Serialize)]
pub struct PromptField {
    pub id: &'static str,
    pub placeholder: &'static str,
}

/// Form description: text inputs plus a submit button
#[derive(Debug, Serialize)]
pub struct PromptForm {
    pub fields: Vec<PromptField>,
    pub button_id: &'static str,
    pub button_label: &'static str,
}

impl PromptForm {
    pub fn new(kind: PromptKind) -> Self {
        match kind {
            PromptKind::Path => Self {
                fields: vec![
                    PromptField {
                        id: "start",
                        placeholder: "Enter the starting location:",
                    },
                    PromptField {
                        id: "end",
                        placeholder: "Enter the final destination:",
                    },
                ],
                button_id: "findShortest",
                button_label: "Find Shortest Path",
            },
            PromptKind::Furthest => Self {
                fields: vec![PromptField {
                    id: "from",
                    placeholder: "Enter the starting location:",
                }],
                button_id: "findFurthest",
                button_label: "Furthest Destination From",
            },
        }
    }
}

impl Outputter for PromptForm {
    fn to_table(&self, config: &OutputConfig) -> String {
        let mut rows: Vec<Vec<String>> = self
            .fields
            .iter()
            .map(|f| vec!["input".to_string(), f.id.to_string(), f.placeholder.to_string()])
            .collect();
        rows.push(vec![
            "button".to_string(),
            self.button_id.to_string(),
            self.button_label.to_string(),
        ]);
        TableOutput::from_rows(&["Element", "Id", "Text"], &rows, &[], config)
    }

    fn to_html(&self, _config: &OutputConfig) -> String {
        let mut html: String = self
            .fields
            .iter()
            .map(|f| HtmlOutput::text_input(f.id, f.placeholder))
            .collect();
        html.push_str(&HtmlOutput::button(self.button_id, self.button_label));
        html
    }
}

/// Run the prompt command
pub fn run(kind: PromptKind, config: &OutputConfig) -> Result<()> {
    Output::with_config(PromptForm::new(kind), config.clone()).render()
}
