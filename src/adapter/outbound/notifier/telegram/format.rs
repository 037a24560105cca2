//! Message formatting for Telegram notifications.

use crate::domain::format_price;
use crate::port::outbound::notifier::Event;

use super::notifier::TelegramConfig;

/// Maximum products listed in one announcement before summarizing.
const MAX_LISTED_PRODUCTS: usize = 30;

/// Format an event into a Telegram `MarkdownV2` message, or None if the
/// event should be skipped.
pub fn format_event_message(event: &Event, config: &TelegramConfig) -> Option<String> {
    match event {
        Event::ProductsAvailable(e) => {
            if e.products.is_empty() {
                return None;
            }

            let mut msg = String::from(
                "🎉 *New Products Available\\!*\n\
                \n\
                The following products are now available:\n\n",
            );

            for product in e.products.iter().take(MAX_LISTED_PRODUCTS) {
                let name = truncate(&product.name, 80);
                match product.price {
                    Some(_) => msg.push_str(&format!(
                        "• *{}* \\- `{}`\n",
                        escape_markdown(&name),
                        escape_markdown(&format_price(product.price, &config.currency_symbol))
                    )),
                    None => msg.push_str(&format!("• *{}*\n", escape_markdown(&name))),
                }
            }

            if e.products.len() > MAX_LISTED_PRODUCTS {
                msg.push_str(&format!(
                    "\n\\.\\.\\.and {} more",
                    e.products.len() - MAX_LISTED_PRODUCTS
                ));
            }

            Some(msg)
        }
        Event::CycleFailed { kind, reason } if config.notify_failures => Some(format!(
            "⚠️ *Availability Check Failed*\n\
            \n\
            🏷️ Kind: `{}`\n\
            🚫 Reason: {}",
            escape_markdown(kind),
            escape_markdown(&truncate(reason, 200))
        )),
        Event::CycleFailed { .. } => None,
    }
}

/// Truncate a string with ellipsis (Unicode-safe).
pub fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
        '\\',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}
