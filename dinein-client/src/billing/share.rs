//! WhatsApp share link

use crate::{ClientError, ClientResult};

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Digits in a subscriber number without country code
const LOCAL_NUMBER_LEN: usize = 10;

/// `https://wa.me/<country><digits>?text=<message>`
///
/// Everything but ASCII digits is stripped from `phone`; a number with no
/// digits left is rejected. A number already carrying `country_code` is
/// used as is, a trunk `0` in front of a local number is dropped.
pub fn whatsapp_link(country_code: &str, phone: &str, message: &str) -> ClientResult<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Err(ClientError::Validation("Please enter a valid phone number".into()));
    }
    let number = if digits.len() > LOCAL_NUMBER_LEN && digits.starts_with(country_code) {
        digits.to_string()
    } else {
        format!("{}{}", country_code, digits)
    };
    let text: String = url::form_urlencoded::byte_serialize(message.as_bytes()).collect();
    // form encoding uses '+' for spaces
    let text = text.replace('+', "%20");
    Ok(format!("{}{}?text={}", WHATSAPP_BASE, number, text))
}

/// Message sent along with an uploaded bill
pub fn bill_message(order_id: &str, bill_url: &str) -> String {
    format!("Your bill for order {}: {}", order_id, bill_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_non_digits() {
        let link = whatsapp_link("91", "(987) 654-3210", "hi").unwrap();
        assert_eq!(link, "https://wa.me/919876543210?text=hi");
    }

    #[test]
    fn test_country_code_not_doubled() {
        let link = whatsapp_link("91", "+91 98765 43210", "hi").unwrap();
        assert_eq!(link, "https://wa.me/919876543210?text=hi");

        let link = whatsapp_link("91", "0091 98765 43210", "hi").unwrap();
        assert_eq!(link, "https://wa.me/919876543210?text=hi");
    }

    #[test]
    fn test_trunk_zero_dropped() {
        let link = whatsapp_link("91", "09876543210", "hi").unwrap();
        assert_eq!(link, "https://wa.me/919876543210?text=hi");
    }

    #[test]
    fn test_local_number_starting_with_country_digits_is_prefixed() {
        let link = whatsapp_link("91", "9123456789", "hi").unwrap();
        assert_eq!(link, "https://wa.me/919123456789?text=hi");
    }

    #[test]
    fn test_encodes_message() {
        let link = whatsapp_link("91", "9876543210", "Bill: https://x.io/a b?c=1&d").unwrap();
        assert_eq!(
            link,
            "https://wa.me/919876543210?text=Bill%3A%20https%3A%2F%2Fx.io%2Fa%20b%3Fc%3D1%26d"
        );
    }

    #[test]
    fn test_no_digits_rejected() {
        assert!(matches!(whatsapp_link("91", "abc", "hi"), Err(ClientError::Validation(_))));
    }
}
