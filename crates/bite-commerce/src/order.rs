//! Order message composition and WhatsApp dispatch links.
//!
//! The message is read by a person taking the order, so its layout is part of
//! the storefront's contract with the restaurant: header, one block per cart
//! line in cart order, grand total, then the customer's details.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::cart::{cart_total, line_total, LineItem};
use crate::catalog::Settings;
use crate::error::CommerceError;

/// Messaging host used when none is configured.
pub const DEFAULT_MESSAGING_DOMAIN: &str = "wa.me";

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const SEPARATOR: &str = "—";
const ADDON_SEPARATOR: &str = "، ";
const NO_ADDONS: &str = "بدون إضافات";

/// Details the customer types into the order form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub mobile: String,
    pub address: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub payment_method: String,
}

impl Customer {
    /// Notes worth printing, `None` when absent or blank.
    fn printable_notes(&self) -> Option<&str> {
        self.notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

/// Compose the order message for `cart`.
pub fn compose_message(
    cart: &[LineItem],
    customer: &Customer,
    brand: &str,
) -> Result<String, CommerceError> {
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    let mut lines = Vec::with_capacity(cart.len() * 3 + 9);
    lines.push(format!("*طلب جديد - {brand}*"));

    for (idx, item) in cart.iter().enumerate() {
        let combo = if item.has_combo() { " + كومبو" } else { "" };
        let addons = if item.addons.is_empty() {
            NO_ADDONS.to_string()
        } else {
            item.addon_names().join(ADDON_SEPARATOR)
        };
        lines.push(format!(
            "{}) {} - {}{} عدد ({})",
            idx + 1,
            item.name,
            item.size,
            combo,
            item.quantity
        ));
        lines.push(format!("   إضافات: {addons}"));
        lines.push(format!("   السعر: {}", line_total(item)?));
    }

    lines.push(SEPARATOR.to_string());
    lines.push(format!("*المجموع*: {}", cart_total(cart)?));
    lines.push(SEPARATOR.to_string());
    lines.push(format!("الاسم: {}", customer.name));
    lines.push(format!("موبايل: {}", customer.mobile));
    lines.push(format!("العنوان: {}", customer.address));
    if let Some(notes) = customer.printable_notes() {
        lines.push(format!("ملاحظات: {notes}"));
    }
    lines.push(format!("*طريقة الدفع*: {}", customer.payment_method));

    Ok(lines.join("\n"))
}

/// Deep link that opens a chat with `phone` prefilled with `message`.
///
/// Only builds the link; opening it and clearing the cart are up to the host.
pub fn dispatch_target(domain: &str, phone: &str, message: &str) -> String {
    format!(
        "https://{}/{}?text={}",
        domain,
        phone,
        utf8_percent_encode(message, URI_COMPONENT)
    )
}

/// A composed order ready to hand to the messaging app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDispatch {
    pub message: String,
    pub target: String,
}

impl OrderDispatch {
    /// Compose the message and its link using the brand and phone in `settings`.
    ///
    /// The cart is left untouched. Hosts clear it after handing the link off.
    pub fn prepare(
        cart: &[LineItem],
        customer: &Customer,
        settings: &Settings,
        domain: &str,
    ) -> Result<Self, CommerceError> {
        let message = compose_message(cart, customer, &settings.brand)?;
        let target = dispatch_target(domain, &settings.whatsapp, &message);
        tracing::info!(lines = cart.len(), bytes = message.len(), "order prepared");
        Ok(Self { message, target })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{AddOnSnapshot, ComboSnapshot};
    use crate::ids::{AddOnId, ComboId, ProductId};
    use crate::money::Money;

    fn cart() -> Vec<LineItem> {
        vec![
            LineItem::new(ProductId::new("1"), "تشيز برجر", "دابل", Money::new(100), 2)
                .with_addon(AddOnSnapshot {
                    id: AddOnId::new("cheese"),
                    name: "جبنة".into(),
                    price: Money::new(10),
                })
                .with_addon(AddOnSnapshot {
                    id: AddOnId::new("bacon"),
                    name: "بيكون".into(),
                    price: Money::new(5),
                })
                .with_combo(ComboSnapshot {
                    id: ComboId::new("c1"),
                    name: "كومبو".into(),
                    extra: Money::new(20),
                }),
            LineItem::new(ProductId::new("2"), "بطاطس", "سينجل", Money::new(30), 1),
        ]
    }

    fn customer(notes: Option<&str>) -> Customer {
        Customer {
            name: "أحمد".into(),
            mobile: "01000000000".into(),
            address: "المعادي".into(),
            notes: notes.map(str::to_string),
            payment_method: "كاش".into(),
        }
    }

    #[test]
    fn test_message_layout() {
        let message = compose_message(&cart(), &customer(Some("بدون بصل")), "Burger Bar").unwrap();
        let expected = [
            "*طلب جديد - Burger Bar*",
            "1) تشيز برجر - دابل + كومبو عدد (2)",
            "   إضافات: جبنة، بيكون",
            "   السعر: ٢٧٠ ج",
            "2) بطاطس - سينجل عدد (1)",
            "   إضافات: بدون إضافات",
            "   السعر: ٣٠ ج",
            "—",
            "*المجموع*: ٣٠٠ ج",
            "—",
            "الاسم: أحمد",
            "موبايل: 01000000000",
            "العنوان: المعادي",
            "ملاحظات: بدون بصل",
            "*طريقة الدفع*: كاش",
        ]
        .join("\n");
        assert_eq!(message, expected);
    }

    #[test]
    fn test_blank_notes_are_omitted() {
        for notes in [None, Some(""), Some("   ")] {
            let message = compose_message(&cart(), &customer(notes), "Burger Bar").unwrap();
            assert!(!message.contains("ملاحظات"));
        }
    }

    #[test]
    fn test_every_line_appears_once_in_order() {
        let message = compose_message(&cart(), &customer(None), "Burger Bar").unwrap();
        let first = message.find("1) تشيز برجر").unwrap();
        let second = message.find("2) بطاطس").unwrap();
        assert!(first < second);
        assert_eq!(message.matches("   السعر:").count(), 2);
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        assert!(matches!(
            compose_message(&[], &customer(None), "Burger Bar"),
            Err(CommerceError::EmptyCart)
        ));
    }

    #[test]
    fn test_dispatch_target_encoding() {
        let url = dispatch_target("wa.me", "201000000000", "*a b*\n(c)!~'é");
        assert_eq!(url, "https://wa.me/201000000000?text=*a%20b*%0A(c)!~'%C3%A9");
    }

    #[test]
    fn test_dispatch_target_encodes_reserved_characters() {
        let url = dispatch_target("wa.me", "1", "a&b=c?d/e#f+g");
        assert_eq!(url, "https://wa.me/1?text=a%26b%3Dc%3Fd%2Fe%23f%2Bg");
    }

    #[test]
    fn test_prepare_uses_settings() {
        let settings = Settings::new("201000000000", "Burger Bar");
        let dispatch =
            OrderDispatch::prepare(&cart(), &customer(None), &settings, DEFAULT_MESSAGING_DOMAIN)
                .unwrap();

        assert!(dispatch.message.starts_with("*طلب جديد - Burger Bar*"));
        assert!(dispatch
            .target
            .starts_with("https://wa.me/201000000000?text="));
    }
}
