//! Field selection over a tool's default field list.

/// Sentinel requesting every default field
pub const ALL_FIELDS: &str = "all";

const INDENT: &str = "  ";

/// A selectable field of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// A leaf field (e.g. `name`)
    Scalar(&'static str),
    /// An object field with its own sub-selection (e.g. `address { ... }`)
    Nested {
        name: &'static str,
        children: &'static [Field],
    },
}

impl Field {
    pub const fn scalar(name: &'static str) -> Self {
        Field::Scalar(name)
    }

    pub const fn nested(name: &'static str, children: &'static [Field]) -> Self {
        Field::Nested { name, children }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Field::Scalar(name) => name,
            Field::Nested { name, .. } => name,
        }
    }

    fn write(&self, out: &mut String, depth: usize) {
        let pad = INDENT.repeat(depth);
        match self {
            Field::Scalar(name) => {
                out.push_str(&pad);
                out.push_str(name);
                out.push('\n');
            }
            Field::Nested { name, children } => {
                out.push_str(&pad);
                out.push_str(name);
                out.push_str(" {\n");
                for child in *children {
                    child.write(out, depth + 1);
                }
                out.push_str(&pad);
                out.push_str("}\n");
            }
        }
    }
}

/// A filtered view of a tool's default fields.
///
/// Derived per request, never stored. Requested names outside the default
/// list are dropped; the result always follows default-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    fields: Vec<Field>,
}

impl FieldSelection {
    /// Every default field
    pub fn all(defaults: &[Field]) -> Self {
        Self {
            fields: defaults.to_vec(),
        }
    }

    /// Intersect `requested` with `defaults`.
    ///
    /// An empty request or one containing [`ALL_FIELDS`] selects everything.
    pub fn select(defaults: &[Field], requested: &[String]) -> Self {
        if requested.is_empty() || requested.iter().any(|f| f == ALL_FIELDS) {
            return Self::all(defaults);
        }

        let fields = defaults
            .iter()
            .filter(|field| requested.iter().any(|r| r.trim() == field.name()))
            .copied()
            .collect();
        Self { fields }
    }

    /// Ensure `field` is part of the selection, appending it if absent.
    pub fn with_field(mut self, field: Field) -> Self {
        if !self.contains(field.name()) {
            self.fields.push(field);
        }
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render the selection set body, one field per line, at `depth` indentation.
    pub fn render(&self, depth: usize) -> String {
        let mut out = String::new();
        for field in &self.fields {
            field.write(&mut out, depth);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ADDRESS: &[Field] = &[Field::scalar("street"), Field::scalar("city")];
    static CUSTOMER: &[Field] = &[
        Field::scalar("id"),
        Field::scalar("name"),
        Field::scalar("email"),
        Field::nested("address", ADDRESS),
    ];

    fn req(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_sentinel_selects_full_list() {
        let selection = FieldSelection::select(CUSTOMER, &req(&["all"]));
        assert_eq!(selection.names(), vec!["id", "name", "email", "address"]);
    }

    #[test]
    fn test_all_sentinel_wins_over_other_names() {
        let selection = FieldSelection::select(CUSTOMER, &req(&["email", "all"]));
        assert_eq!(selection, FieldSelection::all(CUSTOMER));
    }

    #[test]
    fn test_subset_follows_default_order() {
        let selection = FieldSelection::select(CUSTOMER, &req(&["email", "id"]));
        assert_eq!(selection.names(), vec!["id", "email"]);
    }

    #[test]
    fn test_unknown_fields_are_dropped() {
        let selection = FieldSelection::select(CUSTOMER, &req(&["name", "password", "ssn"]));
        assert_eq!(selection.names(), vec!["name"]);
    }

    #[test]
    fn test_selection_is_idempotent() {
        let first = FieldSelection::select(CUSTOMER, &req(&["address", "name"]));
        let again = FieldSelection::select(
            CUSTOMER,
            &first.names().iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        );
        assert_eq!(first, again);
    }

    #[test]
    fn test_empty_request_selects_everything() {
        assert_eq!(FieldSelection::select(CUSTOMER, &[]), FieldSelection::all(CUSTOMER));
    }

    #[test]
    fn test_with_field_does_not_duplicate() {
        let selection = FieldSelection::select(CUSTOMER, &req(&["address"]))
            .with_field(Field::nested("address", ADDRESS));
        assert_eq!(selection.names(), vec!["address"]);

        let selection = selection.with_field(Field::scalar("id"));
        assert_eq!(selection.names(), vec!["address", "id"]);
    }

    #[test]
    fn test_render_nested() {
        let selection = FieldSelection::select(CUSTOMER, &req(&["name", "address"]));
        assert_eq!(
            selection.render(1),
            "  name\n  address {\n    street\n    city\n  }\n"
        );
    }
}
