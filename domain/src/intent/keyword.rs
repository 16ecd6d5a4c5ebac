//! Keyword-based intent detection.
//!
//! Deterministic and always available. The message is lower-cased and run
//! through an ordered rule list; the first rule that matches wins:
//!
//! | # | Condition | Tool |
//! |---|-----------|------|
//! | 1 | "product" and ("search" or "find") | `search_products` |
//! | 2 | "product" or "catalog" | `get_products` (+ category) |
//! | 3 | "customer" and "order" | `get_customer_orders` (id, default "1") |
//! | 4 | "customer" | `get_customers` (+ tier) |
//! | 5 | "order" and ("create" or "new") | `create_order` |
//! | 6 | "order" | `get_orders` (+ status) |
//! | - | nothing matched | `get_products` |
//!
//! Field selection is always `["all"]` under these rules.

use super::entities::DetectedIntent;
use crate::tool::catalog::{
    CREATE_ORDER, GET_CUSTOMER_ORDERS, GET_CUSTOMERS, GET_ORDERS, GET_PRODUCTS, KNOWN_CATEGORIES,
    LOYALTY_TIERS, ORDER_STATUSES, SEARCH_PRODUCTS,
};
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Words removed from a message when no explicit search phrase is found
const SEARCH_STOPWORDS: &[&str] = &[
    "search", "find", "product", "products", "for", "me", "the", "a", "an", "please", "show",
    "with", "named", "called",
];

/// Customer id used when a customer-orders message names no id
const DEFAULT_CUSTOMER_ID: &str = "1";

static RULES: LazyLock<KeywordRules> = LazyLock::new(KeywordRules::new);

/// Detect an intent from a free-text message using the shared rule set.
pub fn detect_intent(message: &str) -> DetectedIntent {
    RULES.detect(message)
}

/// Compiled extraction patterns
pub struct KeywordRules {
    search_for: Regex,
    find_product: Regex,
    customer_or_id: Regex,
    customer_id: Regex,
    product_id: Regex,
    quantity: Regex,
}

impl Default for KeywordRules {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordRules {
    pub fn new() -> Self {
        Self {
            search_for: Regex::new(r"(?i)\bsearch\b(?:\s+(?:for|products?))*\s+(.+)")
                .expect("search pattern is valid"),
            find_product: Regex::new(r"(?i)\bfind\b(?:\s+(?:me|a|an|the|products?))*\s+(.+)")
                .expect("find pattern is valid"),
            customer_or_id: Regex::new(r"(?i)customer\s+(\d+)|\bid\s+(\d+)")
                .expect("customer id pattern is valid"),
            customer_id: Regex::new(r"(?i)customer\s+(\d+)").expect("customer pattern is valid"),
            product_id: Regex::new(r"(?i)product\s+(\d+)").expect("product pattern is valid"),
            quantity: Regex::new(r"(?i)(\d+)\s+(?:unit|item|piece)")
                .expect("quantity pattern is valid"),
        }
    }

    pub fn detect(&self, message: &str) -> DetectedIntent {
        let lower = message.to_lowercase();
        let has = |word: &str| lower.contains(word);

        if has("product") && (has("search") || has("find")) {
            return DetectedIntent::new(SEARCH_PRODUCTS).with_arg("query", self.search_term(message));
        }

        if has("product") || has("catalog") {
            let intent = DetectedIntent::new(GET_PRODUCTS);
            return match KNOWN_CATEGORIES.iter().find(|c| lower.contains(*c)) {
                Some(category) => intent.with_arg("category", title_case(category)),
                None => intent,
            };
        }

        if has("customer") && has("order") {
            let id = self
                .customer_or_id
                .captures(message)
                .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| DEFAULT_CUSTOMER_ID.to_string());
            return DetectedIntent::new(GET_CUSTOMER_ORDERS).with_arg("customerId", id);
        }

        if has("customer") {
            let intent = DetectedIntent::new(GET_CUSTOMERS);
            return match find_keyword(&lower, LOYALTY_TIERS) {
                Some(tier) => intent.with_arg("tier", tier),
                None => intent,
            };
        }

        if has("order") && (has("create") || has("new")) {
            return self.create_order(message);
        }

        if has("order") {
            let intent = DetectedIntent::new(GET_ORDERS);
            return match find_keyword(&lower, ORDER_STATUSES) {
                Some(status) => intent.with_arg("status", status),
                None => intent,
            };
        }

        DetectedIntent::new(GET_PRODUCTS)
    }

    fn create_order(&self, message: &str) -> DetectedIntent {
        let capture = |re: &Regex| {
            re.captures(message)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        };

        let customer_id = capture(&self.customer_id).unwrap_or_else(|| DEFAULT_CUSTOMER_ID.to_string());
        let quantity = capture(&self.quantity)
            .and_then(|q| q.parse::<u32>().ok())
            .unwrap_or(1);
        let items = match capture(&self.product_id) {
            Some(product_id) => json!([{
                "productId": product_id,
                "quantity": quantity,
                "price": 0,
            }]),
            None => json!([]),
        };

        DetectedIntent::new(CREATE_ORDER)
            .with_arg("customerId", customer_id)
            .with_arg("items", items)
    }

    /// Extract the search term from "search for X" / "find product X",
    /// falling back to the message with stopwords removed.
    fn search_term(&self, message: &str) -> String {
        let phrase = self
            .search_for
            .captures(message)
            .or_else(|| self.find_product.captures(message))
            .and_then(|caps| caps.get(1))
            .map(|m| strip_stopwords(m.as_str()))
            .filter(|term| !term.is_empty());

        phrase
            .or_else(|| Some(strip_stopwords(message)).filter(|term| !term.is_empty()))
            .unwrap_or_else(|| message.trim().to_string())
    }
}

/// Find the first canonical keyword whose lower-case form appears in `lower`.
fn find_keyword(lower: &str, canonical: &[&str]) -> Option<String> {
    canonical
        .iter()
        .find(|k| lower.contains(&k.to_lowercase()))
        .map(|k| k.to_uppercase())
}

fn strip_stopwords(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric() && c != '-'))
        .filter(|word| !word.is_empty())
        .filter(|word| !SEARCH_STOPWORDS.contains(&word.to_lowercase().as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
