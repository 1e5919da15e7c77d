//! Checkout commands.

use clap::{Args, Subcommand};

use servex_storefront::services::{CheckoutError, PaymentMethod};
use servex_storefront::state::AppState;

#[derive(Subcommand)]
pub enum CheckoutAction {
    /// Show the order summary and due-now amount
    Summary,
    /// Submit payment for the current cart
    Pay(PayArgs),
}

#[derive(Args)]
pub struct PayArgs {
    /// Pay with the PayPal stub instead of a card
    #[arg(long, conflicts_with_all = ["card_name", "card_number", "expiry", "cvc"])]
    pub paypal: bool,

    /// Name on the card
    #[arg(long, required_unless_present = "paypal")]
    pub card_name: Option<String>,

    /// Card number
    #[arg(long, required_unless_present = "paypal")]
    pub card_number: Option<String>,

    /// Expiry date (MM/YY)
    #[arg(long, required_unless_present = "paypal")]
    pub expiry: Option<String>,

    /// Card verification code
    #[arg(long, required_unless_present = "paypal")]
    pub cvc: Option<String>,
}

impl PayArgs {
    fn into_method(self) -> PaymentMethod {
        if self.paypal {
            PaymentMethod::PayPal
        } else {
            PaymentMethod::CreditCard {
                name_on_card: self.card_name.unwrap_or_default(),
                number: self.card_number.unwrap_or_default(),
                expiry: self.expiry.unwrap_or_default(),
                cvc: self.cvc.unwrap_or_default(),
            }
        }
    }
}

#[allow(clippy::print_stdout)]
pub async fn run(state: &AppState, action: CheckoutAction) -> Result<(), CheckoutError> {
    match action {
        CheckoutAction::Summary => {
            let items = state.cart().items();
            if items.is_empty() {
                println!("Your cart is empty - nothing to check out");
                return Ok(());
            }
            for item in &items {
                println!(
                    "{:>2} x {:<38} {:>10}",
                    item.quantity,
                    item.service.title,
                    item.line_price().to_string()
                );
            }
            println!("Total:            {}", state.cart().total_price());
            println!("50% due now:      {}", state.checkout().due_now());
            println!("The remaining 50% is due upon project completion.");
        }
        CheckoutAction::Pay(args) => {
            let method = args.into_method();
            println!("Processing payment...");
            let confirmation = state.checkout().submit_payment(&method).await?;
            println!("Payment successful!");
            println!("  Order:      {}", confirmation.order_id);
            println!("  Payment id: {}", confirmation.payment_id);
            println!("  Paid now:   {}", confirmation.amount_paid);
            println!("  Order total: {}", confirmation.total);
            println!("We've sent a confirmation email; the team will be in touch shortly.");
        }
    }
    Ok(())
}
