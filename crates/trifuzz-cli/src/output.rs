//! Output formatting for the CLI.

use crate::config::{OutputFormat, Settings};
use crate::error::Result;
use colored::*;
use std::cmp::Ordering;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use trifuzz_domain::TriFuzzyNum;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    precision: Option<usize>,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool, precision: Option<usize>) -> Self {
        Self {
            format,
            color_enabled,
            precision,
        }
    }

    /// Render a number as `(l, m, u)`, honoring the configured precision.
    pub fn render(&self, number: &TriFuzzyNum) -> String {
        match self.precision {
            Some(p) => format!("{:.*}", p, number),
            None => number.to_string(),
        }
    }

    /// Format a single computed number.
    pub fn format_number(&self, number: &TriFuzzyNum) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&self.number_json(number))?),
            OutputFormat::Table => Ok(self.numbers_table(&[*number], false)),
            OutputFormat::Quiet => Ok(self.render(number)),
        }
    }

    /// Format a list of numbers, one per row or line.
    pub fn format_numbers(&self, numbers: &[TriFuzzyNum]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<serde_json::Value> =
                    numbers.iter().map(|n| self.number_json(n)).collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => Ok(self.numbers_table(numbers, true)),
            OutputFormat::Quiet => {
                let lines: Vec<String> = numbers.iter().map(|n| self.render(n)).collect();
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format the result of comparing two numbers.
    pub fn format_ordering(
        &self,
        left: &TriFuzzyNum,
        right: &TriFuzzyNum,
        ordering: Ordering,
    ) -> Result<String> {
        let symbol = match ordering {
            Ordering::Less => "<",
            Ordering::Equal => "=",
            Ordering::Greater => ">",
        };

        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "left": self.number_json(left),
                    "right": self.number_json(right),
                    "ordering": format!("{:?}", ordering).to_lowercase(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => Ok(format!(
                "{} {} {}",
                self.render(left),
                self.colorize(symbol, "cyan"),
                self.render(right)
            )),
            OutputFormat::Quiet => Ok(symbol.to_string()),
        }
    }

    /// Format the effective settings.
    pub fn format_settings(&self, settings: &Settings) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(settings)?),
            OutputFormat::Table | OutputFormat::Quiet => {
                let precision = settings
                    .precision
                    .map_or_else(|| "shortest".to_string(), |p| p.to_string());
                Ok(format!(
                    "format: {:?}\ncolor: {}\nprecision: {}",
                    settings.format, settings.color, precision
                ))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    fn number_json(&self, number: &TriFuzzyNum) -> serde_json::Value {
        serde_json::json!({
            "lower": number.lower_value(),
            "modal": number.modal_value(),
            "upper": number.upper_value(),
        })
    }

    fn numbers_table(&self, numbers: &[TriFuzzyNum], with_index: bool) -> String {
        let mut builder = Builder::default();
        if with_index {
            builder.push_record(["#", "Number", "Lower", "Modal", "Upper"]);
        } else {
            builder.push_record(["Number", "Lower", "Modal", "Upper"]);
        }

        for (i, number) in numbers.iter().enumerate() {
            let mut row = Vec::with_capacity(5);
            if with_index {
                row.push((i + 1).to_string());
            }
            row.push(self.render(number));
            row.push(self.render_bound(number.lower_value()));
            row.push(self.render_bound(number.modal_value()));
            row.push(self.render_bound(number.upper_value()));
            builder.push_record(row);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn render_bound(&self, value: f64) -> String {
        match self.precision {
            Some(p) => format!("{:.*}", p, value),
            None => value.to_string(),
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
