//! Console output formatter for translation responses

use colored::Colorize;
use nlq_application::TranslationResponse;
use nlq_domain::ToolSpec;
use serde_json::Value;

/// Formats translation responses and the tool catalog for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a response as a readable summary
    pub fn format(response: &TranslationResponse) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Query Result"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Message:".cyan().bold(),
            response.message
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Intent:".cyan().bold(),
            response.intent
        ));
        if !response.arguments.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                "Arguments:".cyan().bold(),
                Value::Object(response.arguments.clone())
            ));
        }

        output.push_str(&Self::section_header("Query"));
        output.push_str(&format!("{}\n", response.query.dimmed()));

        match (&response.result, &response.error) {
            (_, Some(error)) => {
                output.push_str(&Self::section_header("Error"));
                output.push_str(&format!("{}\n", error.red()));
            }
            (Some(result), None) => {
                output.push_str(&Self::section_header("Result"));
                output.push_str(&Self::summarize(result));
                output.push_str(&format!(
                    "{}\n",
                    serde_json::to_string_pretty(result).unwrap_or_default()
                ));
            }
            (None, None) => {}
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(response: &TranslationResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the tool catalog
    pub fn format_tools<'a>(tools: impl IntoIterator<Item = &'a ToolSpec>) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Available tools".cyan().bold()));
        for tool in tools {
            output.push_str(&format!(
                "\n  {} {}\n",
                tool.name.yellow().bold(),
                tool.description.dimmed()
            ));
            for param in &tool.parameters {
                let mut line = format!(
                    "      {}: {}{}",
                    param.name,
                    param.param_type,
                    if param.required { " (required)" } else { "" }
                );
                if let Some(values) = &param.enum_values {
                    line.push_str(&format!(" [{}]", values.join(", ")));
                }
                output.push_str(&line);
                output.push('\n');
            }
            for group in &tool.required_one_of {
                output.push_str(&format!("      requires one of: {}\n", group.join(", ")));
            }
        }

        output
    }

    /// One line describing the size of the first top-level result field
    fn summarize(result: &Value) -> String {
        let Some((key, value)) = result.as_object().and_then(|map| map.iter().next()) else {
            return String::new();
        };

        match value {
            Value::Array(items) => format!(
                "{} {} {}\n\n",
                "Found".green(),
                items.len().to_string().green().bold(),
                format!("result(s) in {}", key).green()
            ),
            Value::Null => format!("{}\n\n", format!("No {} returned", key).yellow()),
            _ => String::new(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
