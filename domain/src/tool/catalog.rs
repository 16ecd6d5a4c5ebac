//! Built-in tool catalog
//!
//! The seven operations the federated gateway exposes to chat users, with
//! their parameter schemas and default field lists.
//!
//! | Tool | Filter / key | Kind |
//! |------|--------------|------|
//! | `get_products` | optional `category` | query |
//! | `search_products` | `query` | query |
//! | `get_customers` | optional `tier` | query |
//! | `get_customer_orders` | `customerId` or `customerName` | query (+ lookup) |
//! | `get_orders` | optional `status` | query |
//! | `create_order` | `customerId`, `items` | mutation |
//! | `update_order_status` | `orderId`, `status` | mutation |

use super::entities::{ParamType, ParameterSpec, ToolSpec};
use super::registry::{ToolEntry, ToolRegistry};
use crate::query::selection::Field;
use crate::query::templates;

pub const GET_PRODUCTS: &str = "get_products";
pub const SEARCH_PRODUCTS: &str = "search_products";
pub const GET_CUSTOMERS: &str = "get_customers";
pub const GET_CUSTOMER_ORDERS: &str = "get_customer_orders";
pub const GET_ORDERS: &str = "get_orders";
pub const CREATE_ORDER: &str = "create_order";
pub const UPDATE_ORDER_STATUS: &str = "update_order_status";

/// Category keywords recognised in free text (stored lower-case)
pub const KNOWN_CATEGORIES: &[&str] = &["electronics", "furniture"];

pub const LOYALTY_TIERS: &[&str] = &["BRONZE", "SILVER", "GOLD", "PLATINUM"];

pub const ORDER_STATUSES: &[&str] = &["PENDING", "PROCESSING", "SHIPPED", "DELIVERED", "CANCELLED"];

pub const PRODUCT_FIELDS: &[Field] = &[
    Field::scalar("id"),
    Field::scalar("name"),
    Field::scalar("category"),
    Field::scalar("price"),
    Field::scalar("stock"),
    Field::scalar("sku"),
];

pub const ADDRESS_FIELDS: &[Field] = &[
    Field::scalar("street"),
    Field::scalar("city"),
    Field::scalar("state"),
    Field::scalar("zipCode"),
    Field::scalar("country"),
];

pub const CUSTOMER_FIELDS: &[Field] = &[
    Field::scalar("id"),
    Field::scalar("name"),
    Field::scalar("email"),
    Field::scalar("tier"),
    Field::scalar("loyaltyPoints"),
    Field::nested("address", ADDRESS_FIELDS),
];

pub const ORDER_ITEM_FIELDS: &[Field] = &[
    Field::scalar("productId"),
    Field::scalar("quantity"),
    Field::scalar("price"),
];

pub const ORDER_FIELDS: &[Field] = &[
    Field::scalar("id"),
    Field::scalar("customerId"),
    Field::scalar("totalAmount"),
    Field::scalar("status"),
    Field::scalar("createdAt"),
    Field::nested("items", ORDER_ITEM_FIELDS),
];

const ORDER_HISTORY_FIELDS: &[Field] = &[
    Field::scalar("id"),
    Field::scalar("totalAmount"),
    Field::scalar("status"),
    Field::scalar("createdAt"),
    Field::nested("items", ORDER_ITEM_FIELDS),
];

/// A customer's order history, always part of a customer-orders document
pub const ORDER_HISTORY: Field = Field::nested("orders", ORDER_HISTORY_FIELDS);

pub const CUSTOMER_ORDER_FIELDS: &[Field] = &[
    Field::scalar("id"),
    Field::scalar("name"),
    Field::scalar("email"),
    ORDER_HISTORY,
];

pub const CREATED_ORDER_FIELDS: &[Field] = &[
    Field::scalar("id"),
    Field::scalar("customerId"),
    Field::scalar("totalAmount"),
    Field::scalar("status"),
    Field::scalar("createdAt"),
];

pub const UPDATED_ORDER_FIELDS: &[Field] = &[
    Field::scalar("id"),
    Field::scalar("status"),
    Field::scalar("updatedAt"),
];

/// Fields fetched when resolving a customer name to an id
pub const CUSTOMER_LOOKUP_FIELDS: &[Field] = &[Field::scalar("id"), Field::scalar("name")];

/// Entity field lists, as described to the classifier
pub fn entity_fields() -> [(&'static str, &'static [Field]); 3] {
    [
        ("Products", PRODUCT_FIELDS),
        ("Customers", CUSTOMER_FIELDS),
        ("Orders", ORDER_FIELDS),
    ]
}

fn get_products_spec() -> ToolSpec {
    ToolSpec::new(
        GET_PRODUCTS,
        "Get all products from the catalog or filter by category",
    )
    .with_parameter(ParameterSpec::new(
        "category",
        "Optional: filter products by category (e.g., Electronics, Furniture)",
        false,
    ))
}

fn search_products_spec() -> ToolSpec {
    ToolSpec::new(SEARCH_PRODUCTS, "Search for products by name or SKU").with_parameter(
        ParameterSpec::new("query", "Search query for product name or SKU", true),
    )
}

fn get_customers_spec() -> ToolSpec {
    ToolSpec::new(GET_CUSTOMERS, "Get all customers or filter by loyalty tier").with_parameter(
        ParameterSpec::new("tier", "Optional: filter by loyalty tier", false)
            .with_enum_values(LOYALTY_TIERS.iter().copied()),
    )
}

fn get_customer_orders_spec() -> ToolSpec {
    ToolSpec::new(
        GET_CUSTOMER_ORDERS,
        "Get order history for a specific customer, addressed by id or by name",
    )
    .with_parameter(ParameterSpec::new(
        "customerId",
        "Customer ID, when the message names a numeric id",
        false,
    ))
    .with_parameter(ParameterSpec::new(
        "customerName",
        "Customer name, when the message names a person",
        false,
    ))
    .requiring_one_of(["customerId", "customerName"])
}

fn get_orders_spec() -> ToolSpec {
    ToolSpec::new(GET_ORDERS, "Get all orders or filter by status").with_parameter(
        ParameterSpec::new("status", "Optional: filter by order status", false)
            .with_enum_values(ORDER_STATUSES.iter().copied()),
    )
}

fn create_order_spec() -> ToolSpec {
    ToolSpec::new(CREATE_ORDER, "Create a new order for a customer")
        .with_parameter(ParameterSpec::new("customerId", "Customer ID", true))
        .with_parameter(
            ParameterSpec::new(
                "items",
                "Order items, each {productId: string, quantity: number, price: number}",
                true,
            )
            .with_type(ParamType::Array),
        )
}

fn update_order_status_spec() -> ToolSpec {
    ToolSpec::new(UPDATE_ORDER_STATUS, "Update the status of an existing order")
        .with_parameter(ParameterSpec::new("orderId", "Order ID", true))
        .with_parameter(
            ParameterSpec::new("status", "New status", true)
                .with_enum_values(ORDER_STATUSES.iter().copied()),
        )
}

/// Build the registry of every supported tool.
///
/// `get_products` is the browse tool used when no intent can be determined.
pub fn default_registry() -> ToolRegistry {
    ToolRegistry::new()
        .register(ToolEntry::new(
            get_products_spec(),
            PRODUCT_FIELDS,
            templates::get_products,
        ))
        .register(ToolEntry::new(
            search_products_spec(),
            PRODUCT_FIELDS,
            templates::search_products,
        ))
        .register(ToolEntry::new(
            get_customers_spec(),
            CUSTOMER_FIELDS,
            templates::get_customers,
        ))
        .register(ToolEntry::new(
            get_customer_orders_spec(),
            CUSTOMER_ORDER_FIELDS,
            templates::get_customer_orders,
        ))
        .register(ToolEntry::new(
            get_orders_spec(),
            ORDER_FIELDS,
            templates::get_orders,
        ))
        .register(ToolEntry::new(
            create_order_spec(),
            CREATED_ORDER_FIELDS,
            templates::create_order,
        ))
        .register(ToolEntry::new(
            update_order_status_spec(),
            UPDATED_ORDER_FIELDS,
            templates::update_order_status,
        ))
        .with_browse_tool(GET_PRODUCTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_lists_every_tool_in_order() {
        let registry = default_registry();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(
            names,
            vec![
                GET_PRODUCTS,
                SEARCH_PRODUCTS,
                GET_CUSTOMERS,
                GET_CUSTOMER_ORDERS,
                GET_ORDERS,
                CREATE_ORDER,
                UPDATE_ORDER_STATUS,
            ]
        );
        assert_eq!(registry.browse_tool(), Some(GET_PRODUCTS));
    }

    #[test]
    fn test_enum_parameters() {
        let registry = default_registry();
        let tier = registry
            .get_tool(GET_CUSTOMERS)
            .unwrap()
            .parameter("tier")
            .unwrap();
        assert_eq!(tier.enum_values.as_ref().unwrap().len(), 4);
        assert!(!tier.required);

        let category = registry
            .get_tool(GET_PRODUCTS)
            .unwrap()
            .parameter("category")
            .unwrap();
        assert!(category.enum_values.is_none());
    }

    #[test]
    fn test_customer_orders_requires_id_or_name() {
        let registry = default_registry();
        let spec = registry.get_tool(GET_CUSTOMER_ORDERS).unwrap();
        assert_eq!(spec.required_parameters().count(), 0);
        assert_eq!(
            spec.required_one_of,
            vec![vec!["customerId".to_string(), "customerName".to_string()]]
        );
    }

    #[test]
    fn test_create_order_items_is_array() {
        let registry = default_registry();
        let items = registry
            .get_tool(CREATE_ORDER)
            .unwrap()
            .parameter("items")
            .unwrap();
        assert_eq!(items.param_type, ParamType::Array);
        assert!(items.required);
    }
}
