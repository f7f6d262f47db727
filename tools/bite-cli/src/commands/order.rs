//! Order checkout: compose the WhatsApp message and hand off the link.

use anyhow::{bail, Result};
use bite_commerce::order::{Customer, OrderDispatch};

use super::{confirm, OrderArgs};
use crate::context::Context;
use crate::output::price;

/// Run the order command.
pub fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut store = ctx.store()?;

    if store.cart().is_empty() {
        bail!("The cart is empty. Add something from the menu first.");
    }

    let customer = customer_from(&args);
    let dispatch = OrderDispatch::prepare(
        store.cart(),
        &customer,
        catalog.settings(),
        &ctx.config.messaging.domain,
    )?;
    let total = store.summary()?.total;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "message": dispatch.message,
            "target": dispatch.target,
            "total": total,
        }));
    } else {
        ctx.output.header("Order");
        println!("{}", dispatch.message);
        println!();
        ctx.output.kv("Total", &price(total));
        ctx.output.kv("Send via", &dispatch.target);
    }

    // The link is out; the cart only empties once the customer is done with it.
    if args.yes || (!ctx.output.is_json() && confirm("Order sent? Empty the cart")?) {
        store.clear_cart()?;
        ctx.output.success("Cart cleared");
    }

    Ok(())
}

fn customer_from(args: &OrderArgs) -> Customer {
    Customer {
        name: args.name.trim().to_string(),
        mobile: args.mobile.trim().to_string(),
        address: args.address.trim().to_string(),
        notes: args.notes.clone(),
        payment_method: args.payment.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_from_args() {
        let args = OrderArgs {
            name: " منى ".into(),
            mobile: "01111111111".into(),
            address: "مدينة نصر".into(),
            notes: Some("بدون بصل".into()),
            payment: "كاش".into(),
            yes: false,
        };

        let customer = customer_from(&args);
        assert_eq!(customer.name, "منى");
        assert_eq!(customer.notes.as_deref(), Some("بدون بصل"));
        assert_eq!(customer.payment_method, "كاش");
    }
}
