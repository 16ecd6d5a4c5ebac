//! Helpers for log output.

use std::borrow::Cow;

/// Shorten text for a log line to at most `max_chars` characters.
///
/// Truncated text ends with `…`. Cutting by character keeps multi-byte
/// input (customer names, product titles) valid UTF-8.
pub fn preview(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        None => Cow::Borrowed(text),
        Some((end, _)) => Cow::Owned(format!("{}…", &text[..end])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_messages_are_borrowed() {
        let message = "show me electronics products";
        assert!(matches!(preview(message, 100), Cow::Borrowed(_)));
        assert_eq!(preview(message, message.chars().count()), message);
    }

    #[test]
    fn long_messages_get_an_ellipsis() {
        assert_eq!(preview("orders for Alice Johnson", 10), "orders for…");
    }

    #[test]
    fn cuts_on_character_boundaries() {
        assert_eq!(preview("orders for José Müller", 14), "orders for Jos…");
        assert_eq!(preview("orders for José Müller", 15), "orders for José…");
        assert_eq!(preview("Café Crème", 4), "Café…");
    }

    #[test]
    fn empty_and_zero() {
        assert_eq!(preview("", 10), "");
        assert_eq!(preview("list orders", 0), "…");
    }
}
