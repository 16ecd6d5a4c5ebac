//! Prompt templates for the intent classifier

use crate::query::selection::Field;
use crate::tool::catalog::entity_fields;
use crate::tool::registry::ToolRegistry;

/// Templates for generating classifier prompts
pub struct ClassifierPromptTemplate;

impl ClassifierPromptTemplate {
    /// System instruction enumerating every registered tool and the output contract
    pub fn system(registry: &ToolRegistry) -> String {
        let tool_descriptions = registry
            .list_tools()
            .enumerate()
            .map(|(i, t)| {
                let mut line = format!("{}. {} - {}", i + 1, t.name, t.description);
                for p in &t.parameters {
                    let required = if p.required { ", required" } else { "" };
                    line.push_str(&format!(
                        "\n   - {} ({}{}): {}",
                        p.name, p.param_type, required, p.description
                    ));
                    if let Some(values) = &p.enum_values {
                        line.push_str(&format!(" [one of: {}]", values.join(", ")));
                    }
                }
                for group in &t.required_one_of {
                    line.push_str(&format!("\n   (requires one of: {})", group.join(", ")));
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n");

        let field_descriptions = entity_fields()
            .iter()
            .map(|(entity, fields)| format!("- {}: {}", entity, describe_fields(fields)))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"You are an intent detection system for an e-commerce API. Analyze user messages and determine the appropriate API call.

Available tools:
{tool_descriptions}

Available fields for each entity:
{field_descriptions}

IMPORTANT:
- If the user mentions a customer by name (e.g., "Alice", "John"), use the "customerName" parameter instead of "customerId"
- If the user mentions "customer 1" or "customer ID 1", use the "customerId" parameter
- Extract names naturally from phrases like "orders of Alice", "Alice's orders", "for customer Alice"

Respond ONLY with a JSON object containing:
- "tool": the tool name
- "arguments": object with the tool's parameters
- "fields": array of field names the user wants to see (if not specified, return ["all"])

Examples:
{{"tool": "get_products", "arguments": {{}}, "fields": ["all"]}}
{{"tool": "get_products", "arguments": {{}}, "fields": ["name"]}}
{{"tool": "get_customer_orders", "arguments": {{"customerId": "1"}}, "fields": ["all"]}}
{{"tool": "get_customer_orders", "arguments": {{"customerName": "Alice"}}, "fields": ["all"]}}
{{"tool": "get_customers", "arguments": {{"tier": "GOLD"}}, "fields": ["name", "email"]}}"#
        )
    }

    /// Single user turn wrapping the raw message
    pub fn user_message(message: &str) -> String {
        format!(
            "User message: \"{}\"\n\nDetect intent and extract parameters. Return ONLY valid JSON, no markdown formatting.",
            message
        )
    }
}

fn describe_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| match f {
            Field::Scalar(name) => name.to_string(),
            Field::Nested { name, children } => {
                format!("{} ({})", name, describe_fields(children))
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
