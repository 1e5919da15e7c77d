//! Catalog browsing commands.

use clap::Subcommand;

use servex_storefront::models::{Service, ServiceCategory};
use servex_storefront::state::AppState;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List services, optionally filtered by category
    List {
        /// Category tag (web, app, testing, ai, scraper, api)
        #[arg(short, long)]
        category: Option<ServiceCategory>,
    },
    /// Search titles and descriptions
    Search {
        /// Case-insensitive substring
        query: String,
    },
    /// List the available categories
    Categories,
}

pub fn run(state: &AppState, action: CatalogAction) {
    match action {
        CatalogAction::List { category } => {
            let catalog = state.catalog();
            match category {
                Some(category) => print_services(&catalog.by_category(category)),
                None => print_services(&catalog.all().iter().collect::<Vec<_>>()),
            }
        }
        CatalogAction::Search { query } => {
            let hits = state.catalog().search(&query);
            if hits.is_empty() {
                #[allow(clippy::print_stdout)]
                {
                    println!("No services match \"{query}\"");
                }
            } else {
                print_services(&hits);
            }
        }
        CatalogAction::Categories => print_categories(state),
    }
}

#[allow(clippy::print_stdout)]
fn print_services(services: &[&Service]) {
    for service in services {
        println!(
            "{:>3}  {:<38} {:>9}  [{}]",
            service.id, service.title, service.price.to_string(), service.category
        );
        println!("     {}", service.description);
    }
}

#[allow(clippy::print_stdout)]
fn print_categories(state: &AppState) {
    for category in state.catalog().categories() {
        println!("{:<8} {}", category.as_str(), category.label());
    }
}
