//! Tool Registry
//!
//! The [`ToolRegistry`] is an indexed table keyed by tool name. Each
//! [`ToolEntry`] owns the tool's [`ToolSpec`], its default field list and the
//! [`DocumentTemplate`] that renders it, so the name the resolver emits and the
//! template the builder runs cannot drift apart.
//!
//! # Usage
//!
//! ```ignore
//! let registry = ToolRegistry::new()
//!     .register(ToolEntry::new(products_spec(), PRODUCT_FIELDS, templates::get_products))
//!     .with_browse_tool("get_products");
//!
//! let entry = registry.entry("get_products")?;
//! let step = entry.render(&arguments, &["name".to_string()])?;
//! ```

use super::entities::ToolSpec;
use crate::core::error::DomainError;
use crate::intent::entities::Arguments;
use crate::query::document::BuildStep;
use crate::query::selection::{Field, FieldSelection};
use std::collections::HashMap;

/// Renders a tool's document from its arguments and a field selection.
///
/// Returns [`BuildStep::Lookup`] when an argument must be resolved from a
/// human-readable name first; rendering again with the resolved id must then
/// produce [`BuildStep::Ready`].
pub type DocumentTemplate = fn(&Arguments, &FieldSelection) -> Result<BuildStep, DomainError>;

/// A registered tool: spec, default fields and template
#[derive(Debug, Clone)]
pub struct ToolEntry {
    spec: ToolSpec,
    default_fields: &'static [Field],
    template: DocumentTemplate,
}

impl ToolEntry {
    pub fn new(spec: ToolSpec, default_fields: &'static [Field], template: DocumentTemplate) -> Self {
        Self {
            spec,
            default_fields,
            template,
        }
    }

    pub fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// Compute the field selection for a request.
    ///
    /// A request whose fields all fall outside the default list would yield
    /// an empty selection set, which is not a valid document; the full
    /// default list is used instead.
    pub fn select_fields(&self, requested: &[String]) -> FieldSelection {
        let selection = FieldSelection::select(self.default_fields, requested);
        if selection.is_empty() {
            FieldSelection::all(self.default_fields)
        } else {
            selection
        }
    }

    /// Render this tool's document.
    pub fn render(&self, arguments: &Arguments, requested: &[String]) -> Result<BuildStep, DomainError> {
        let selection = self.select_fields(requested);
        (self.template)(arguments, &selection)
    }
}

/// Read-only catalog of supported tools
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    entries: Vec<ToolEntry>,
    index: HashMap<String, usize>,
    browse_tool: Option<String>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool entry (builder pattern).
    ///
    /// Registering a name twice replaces the earlier entry in place, keeping
    /// its position in the listing.
    pub fn register(mut self, entry: ToolEntry) -> Self {
        match self.index.get(entry.name()) {
            Some(&idx) => self.entries[idx] = entry,
            None => {
                self.index.insert(entry.name().to_string(), self.entries.len());
                self.entries.push(entry);
            }
        }
        self
    }

    /// Designate the tool used when no intent can be determined.
    pub fn with_browse_tool(mut self, name: impl Into<String>) -> Self {
        self.browse_tool = Some(name.into());
        self
    }

    /// All tool specs, in registration order
    pub fn list_tools(&self) -> impl Iterator<Item = &ToolSpec> {
        self.entries.iter().map(|e| &e.spec)
    }

    pub fn get_tool(&self, name: &str) -> Result<&ToolSpec, DomainError> {
        self.entry(name).map(|e| &e.spec)
    }

    pub fn entry(&self, name: &str) -> Result<&ToolEntry, DomainError> {
        self.index
            .get(name)
            .map(|&idx| &self.entries[idx])
            .ok_or_else(|| DomainError::UnknownTool(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The designated browse tool, or the first registered tool.
    ///
    /// A designated name that was never registered is ignored.
    pub fn browse_tool(&self) -> Option<&str> {
        self.browse_tool
            .as_deref()
            .filter(|name| self.contains(name))
            .or_else(|| self.entries.first().map(|e| e.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::document::{GraphqlRequest, OperationKind};

    static FIELDS: &[Field] = &[Field::scalar("id"), Field::scalar("name")];

    fn render_stub(_args: &Arguments, selection: &FieldSelection) -> Result<BuildStep, DomainError> {
        Ok(BuildStep::Ready(GraphqlRequest::new(
            OperationKind::Query,
            "Stub",
            selection.names().join(","),
        )))
    }

    fn registry() -> ToolRegistry {
        ToolRegistry::new()
            .register(ToolEntry::new(ToolSpec::new("first", "First"), FIELDS, render_stub))
            .register(ToolEntry::new(ToolSpec::new("second", "Second"), FIELDS, render_stub))
    }

    #[test]
    fn test_get_tool() {
        let registry = registry();
        assert_eq!(registry.get_tool("second").unwrap().description, "Second");
        assert_eq!(
            registry.get_tool("unknown").unwrap_err(),
            DomainError::UnknownTool("unknown".to_string())
        );
    }

    #[test]
    fn test_list_tools_keeps_registration_order() {
        let names: Vec<_> = registry().list_tools().map(|t| t.name.clone()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_register_replaces_in_place() {
        let registry = registry().register(ToolEntry::new(
            ToolSpec::new("first", "Replaced"),
            FIELDS,
            render_stub,
        ));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.list_tools().next().unwrap().description, "Replaced");
    }

    #[test]
    fn test_browse_tool_defaults_to_first() {
        assert_eq!(registry().browse_tool(), Some("first"));
        assert_eq!(registry().with_browse_tool("second").browse_tool(), Some("second"));
        assert_eq!(ToolRegistry::new().browse_tool(), None);
    }

    #[test]
    fn test_unregistered_browse_tool_is_ignored() {
        let registry = registry().with_browse_tool("missing");
        assert!(!registry.contains("missing"));
        assert_eq!(registry.browse_tool(), Some("first"));
    }

    #[test]
    fn test_render_falls_back_to_all_fields_when_nothing_matches() {
        let registry = registry();
        let entry = registry.entry("first").unwrap();

        let BuildStep::Ready(request) = entry
            .render(&Arguments::new(), &["unknown".to_string()])
            .unwrap()
        else {
            panic!("expected a ready document");
        };
        assert_eq!(request.document, "id,name");
    }
}
