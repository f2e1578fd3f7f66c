// src/editor/question_panel.rs

use std::fmt;

use crate::{
    models::question::Question,
    utils::html::{clean_html, to_plain_text},
};

use super::{Theme, console::Palette};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleView {
    pub number: usize,
    pub input: String,
    pub expected_output: String,
}

/// Question panel render model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPanel {
    pub title: String,
    pub points_label: String,
    /// Sanitized HTML for rich front ends.
    pub description_html: String,
    /// Tag-free text for the terminal.
    pub description_text: String,
    pub constraints: Option<String>,
    pub samples: Vec<SampleView>,
    pub palette: Palette,
}

impl QuestionPanel {
    pub fn render(question: &Question, theme: Theme) -> Self {
        let constraints = question.constraints.trim();
        Self {
            title: question.title.clone(),
            points_label: match question.points {
                1 => "1 point".to_string(),
                n => format!("{} points", n),
            },
            description_html: clean_html(&question.description),
            description_text: to_plain_text(&question.description),
            constraints: (!constraints.is_empty()).then(|| constraints.to_string()),
            samples: question
                .public_test_cases
                .iter()
                .enumerate()
                .map(|(i, case)| SampleView {
                    number: i + 1,
                    input: case.input.clone(),
                    expected_output: case.expected_output.clone(),
                })
                .collect(),
            palette: Palette::for_theme(theme),
        }
    }
}

impl fmt::Display for QuestionPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.title, self.points_label)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description_text)?;
        if let Some(constraints) = &self.constraints {
            writeln!(f)?;
            writeln!(f, "Constraints:")?;
            writeln!(f, "{}", constraints)?;
        }
        for sample in &self.samples {
            writeln!(f)?;
            writeln!(f, "Example {}:", sample.number)?;
            write_block(f, "  Input:    ", &sample.input)?;
            write_block(f, "  Expected: ", &sample.expected_output)?;
        }
        Ok(())
    }
}

/// Writes `text` after `label`, indenting continuation lines to line up with the first.
fn write_block(f: &mut fmt::Formatter<'_>, label: &str, text: &str) -> fmt::Result {
    let indent = " ".repeat(label.len());
    let mut lines = text.lines();
    writeln!(f, "{}{}", label, lines.next().unwrap_or_default())?;
    for line in lines {
        writeln!(f, "{}{}", indent, line)?;
    }
    Ok(())
}
