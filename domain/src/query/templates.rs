//! Per-tool document templates.
//!
//! Every template has the [`DocumentTemplate`](crate::tool::registry::DocumentTemplate)
//! signature. User-supplied values only ever appear in the request's variable
//! bindings; the document text is built from fixed operation names, variable
//! declarations and the field selection.

use super::document::{BuildStep, GraphqlRequest, OperationKind, SymbolicLookup};
use super::selection::FieldSelection;
use crate::core::error::DomainError;
use crate::intent::entities::{Arguments, argument_as_string};
use crate::tool::catalog::{
    CREATE_ORDER, CUSTOMER_LOOKUP_FIELDS, ORDER_HISTORY, SEARCH_PRODUCTS, UPDATE_ORDER_STATUS,
};
use serde_json::{Value, json};

/// Status assigned to orders created through chat
const NEW_ORDER_STATUS: &str = "PENDING";

/// Shape of a single operation: `<kind> <name>(<declarations>) { <root> { ... } }`
struct Operation<'a> {
    kind: OperationKind,
    name: &'a str,
    /// `(variable, GraphQL type)` pairs
    declarations: &'a [(&'a str, &'a str)],
    /// Root field including its argument list, e.g. `customer(id: $id)`
    root: &'a str,
}

impl Operation<'_> {
    fn render(&self, selection: &FieldSelection) -> String {
        let mut doc = format!("{} {}", self.kind, self.name);
        if !self.declarations.is_empty() {
            let declarations = self
                .declarations
                .iter()
                .map(|(var, ty)| format!("${}: {}", var, ty))
                .collect::<Vec<_>>()
                .join(", ");
            doc.push('(');
            doc.push_str(&declarations);
            doc.push(')');
        }
        doc.push_str(" {\n  ");
        doc.push_str(self.root);
        doc.push_str(" {\n");
        doc.push_str(&selection.render(2));
        doc.push_str("  }\n}");
        doc
    }

    fn request(&self, selection: &FieldSelection) -> GraphqlRequest {
        GraphqlRequest::new(self.kind, self.name, self.render(selection))
    }
}

fn string_arg(arguments: &Arguments, name: &str) -> Option<String> {
    arguments
        .get(name)
        .and_then(argument_as_string)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn require_string(arguments: &Arguments, name: &str, tool: &str) -> Result<String, DomainError> {
    string_arg(arguments, name).ok_or_else(|| {
        DomainError::validation(format!(
            "Missing required argument '{}' for tool '{}'",
            name, tool
        ))
    })
}

/// Render either the filtered or the unfiltered variant of a list query.
fn list_or_filtered(
    arguments: &Arguments,
    selection: &FieldSelection,
    filter: &str,
    all: Operation<'_>,
    filtered: Operation<'_>,
) -> Result<BuildStep, DomainError> {
    let request = match string_arg(arguments, filter) {
        Some(value) => filtered.request(selection).with_variable(filter, value),
        None => all.request(selection),
    };
    Ok(BuildStep::Ready(request))
}

pub fn get_products(
    arguments: &Arguments,
    selection: &FieldSelection,
) -> Result<BuildStep, DomainError> {
    list_or_filtered(
        arguments,
        selection,
        "category",
        Operation {
            kind: OperationKind::Query,
            name: "GetProducts",
            declarations: &[],
            root: "products",
        },
        Operation {
            kind: OperationKind::Query,
            name: "GetProductsByCategory",
            declarations: &[("category", "String!")],
            root: "productsByCategory(category: $category)",
        },
    )
}

pub fn search_products(
    arguments: &Arguments,
    selection: &FieldSelection,
) -> Result<BuildStep, DomainError> {
    let query = require_string(arguments, "query", SEARCH_PRODUCTS)?;
    let operation = Operation {
        kind: OperationKind::Query,
        name: "SearchProducts",
        declarations: &[("query", "String!")],
        root: "searchProducts(query: $query)",
    };
    Ok(BuildStep::Ready(
        operation.request(selection).with_variable("query", query),
    ))
}

pub fn get_customers(
    arguments: &Arguments,
    selection: &FieldSelection,
) -> Result<BuildStep, DomainError> {
    list_or_filtered(
        arguments,
        selection,
        "tier",
        Operation {
            kind: OperationKind::Query,
            name: "GetCustomers",
            declarations: &[],
            root: "customers",
        },
        Operation {
            kind: OperationKind::Query,
            name: "GetCustomersByTier",
            declarations: &[("tier", "String!")],
            root: "customersByTier(tier: $tier)",
        },
    )
}

/// Customer order history, addressed by id or by name.
///
/// A known `customerId` always takes precedence. With only `customerName`
/// the template asks for a lookup; once the id is bound it renders the same
/// document as the direct path.
pub fn get_customer_orders(
    arguments: &Arguments,
    selection: &FieldSelection,
) -> Result<BuildStep, DomainError> {
    if let Some(id) = string_arg(arguments, "customerId") {
        let operation = Operation {
            kind: OperationKind::Query,
            name: "GetCustomerOrders",
            declarations: &[("id", "ID!")],
            root: "customer(id: $id)",
        };
        let selection = selection.clone().with_field(ORDER_HISTORY);
        return Ok(BuildStep::Ready(
            operation.request(&selection).with_variable("id", id),
        ));
    }

    if let Some(name) = string_arg(arguments, "customerName") {
        let operation = Operation {
            kind: OperationKind::Query,
            name: "SearchCustomer",
            declarations: &[("name", "String!")],
            root: "searchCustomers(query: $name)",
        };
        let request = operation
            .request(&FieldSelection::all(CUSTOMER_LOOKUP_FIELDS))
            .with_variable("name", name.clone());
        return Ok(BuildStep::Lookup(SymbolicLookup {
            entity: "Customer".to_string(),
            symbolic_key: name,
            id_argument: "customerId".to_string(),
            result_field: "searchCustomers".to_string(),
            request,
        }));
    }

    Err(DomainError::validation(
        "Please specify a customer id or name to look up orders",
    ))
}

pub fn get_orders(
    arguments: &Arguments,
    selection: &FieldSelection,
) -> Result<BuildStep, DomainError> {
    list_or_filtered(
        arguments,
        selection,
        "status",
        Operation {
            kind: OperationKind::Query,
            name: "GetOrders",
            declarations: &[],
            root: "orders",
        },
        Operation {
            kind: OperationKind::Query,
            name: "GetOrdersByStatus",
            declarations: &[("status", "String!")],
            root: "ordersByStatus(status: $status)",
        },
    )
}

fn whole_number(value: f64) -> Option<i64> {
    (value.fract() == 0.0 && value.abs() < i64::MAX as f64).then_some(value as i64)
}

/// Read a whole-number quantity from a JSON number or numeric string.
fn parse_quantity(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_number)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_number))
        }
        _ => None,
    }
}

/// Read a finite price from a JSON number or numeric string.
fn parse_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|price| price.is_finite())
}

/// Normalize one order item into the `OrderItemInput` shape.
///
/// A missing quantity defaults to 1 and a missing price to 0. Values that are
/// present but not numeric are rejected rather than replaced.
fn order_item(index: usize, item: &Value) -> Result<Value, DomainError> {
    let position = index + 1;
    let product_id = item
        .get("productId")
        .and_then(argument_as_string)
        .ok_or_else(|| {
            DomainError::validation(format!("Order item {} is missing a productId", position))
        })?;

    let quantity = match item.get("quantity").filter(|v| !v.is_null()) {
        None => 1,
        Some(value) => parse_quantity(value).ok_or_else(|| {
            DomainError::validation(format!("Order item {} has an invalid quantity", position))
        })?,
    };
    if quantity < 1 {
        return Err(DomainError::validation(format!(
            "Order item {} must have a positive quantity",
            position
        )));
    }

    let price = match item.get("price").filter(|v| !v.is_null()) {
        None => 0.0,
        Some(value) => parse_price(value).ok_or_else(|| {
            DomainError::validation(format!("Order item {} has an invalid price", position))
        })?,
    };

    Ok(json!({
        "productId": product_id,
        "quantity": quantity,
        "price": price,
    }))
}

pub fn create_order(
    arguments: &Arguments,
    selection: &FieldSelection,
) -> Result<BuildStep, DomainError> {
    let items = arguments
        .get("items")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or_else(|| DomainError::validation("Please specify items for the order"))?;
    let items = items
        .iter()
        .enumerate()
        .map(|(index, item)| order_item(index, item))
        .collect::<Result<Vec<_>, _>>()?;
    let customer_id = require_string(arguments, "customerId", CREATE_ORDER)?;

    let operation = Operation {
        kind: OperationKind::Mutation,
        name: "CreateOrder",
        declarations: &[
            ("customerId", "ID!"),
            ("items", "[OrderItemInput!]!"),
            ("status", "String"),
        ],
        root: "createOrder(customerId: $customerId, items: $items, status: $status)",
    };
    Ok(BuildStep::Ready(
        operation
            .request(selection)
            .with_variable("customerId", customer_id)
            .with_variable("items", Value::Array(items))
            .with_variable("status", NEW_ORDER_STATUS),
    ))
}

pub fn update_order_status(
    arguments: &Arguments,
    selection: &FieldSelection,
) -> Result<BuildStep, DomainError> {
    let order_id = require_string(arguments, "orderId", UPDATE_ORDER_STATUS)?;
    let status = require_string(arguments, "status", UPDATE_ORDER_STATUS)?;

    let operation = Operation {
        kind: OperationKind::Mutation,
        name: "UpdateOrderStatus",
        declarations: &[("orderId", "ID!"), ("status", "String!")],
        root: "updateOrderStatus(orderId: $orderId, status: $status)",
    };
    Ok(BuildStep::Ready(
        operation
            .request(selection)
            .with_variable("orderId", order_id)
            .with_variable("status", status),
    ))
}
