//! Cart commands.

use clap::Subcommand;

use servex_core::ServiceId;
use servex_storefront::state::AppState;

#[derive(Subcommand)]
pub enum CartAction {
    /// Add one unit of a service to the cart
    Add {
        /// Catalog service id
        service_id: String,
    },
    /// Remove a service's line from the cart
    Remove {
        /// Catalog service id
        service_id: String,
    },
    /// Show the cart lines and totals
    Show,
    /// Empty the cart
    Clear,
}

#[allow(clippy::print_stdout)]
pub fn run(state: &AppState, action: &CartAction) {
    match action {
        CartAction::Add { service_id } => {
            let id = ServiceId::new(service_id.clone());
            match state.catalog().get(&id) {
                Some(service) => {
                    state.cart().add_item(service);
                    println!("Added \"{}\" to cart", service.title);
                }
                None => println!("No service with id {service_id}"),
            }
        }
        CartAction::Remove { service_id } => {
            let id = ServiceId::new(service_id.clone());
            state.cart().remove_item(&id);
            println!("Removed {service_id} from cart");
        }
        CartAction::Show => show(state),
        CartAction::Clear => {
            state.cart().clear();
            println!("Cart cleared");
        }
    }
}

#[allow(clippy::print_stdout)]
fn show(state: &AppState) {
    let items = state.cart().items();
    if items.is_empty() {
        println!("Your cart is empty");
        return;
    }

    for item in &items {
        println!(
            "{:>2} x {:<38} {:>10}",
            item.quantity,
            item.service.title,
            item.line_price().to_string()
        );
    }
    println!("Total ({} items): {}", state.cart().total_items(), state.cart().total_price());
}
