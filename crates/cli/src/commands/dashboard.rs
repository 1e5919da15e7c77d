//! Dashboard commands.

use clap::Subcommand;
use thiserror::Error;

use servex_storefront::dashboard::Dashboard;
use servex_storefront::state::AppState;

#[derive(Subcommand)]
pub enum DashboardAction {
    /// List past orders
    Orders,
    /// List tracked projects
    Projects,
}

/// Errors for dashboard commands.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The dashboard is only available to a logged-in session.
    #[error("not logged in - run `servex auth login` first")]
    NotLoggedIn,
}

#[allow(clippy::print_stdout)]
pub fn run(state: &AppState, action: &DashboardAction) -> Result<(), DashboardError> {
    let dashboard =
        Dashboard::for_session(state.session()).ok_or(DashboardError::NotLoggedIn)?;

    match action {
        DashboardAction::Orders => {
            println!("Orders for {}", dashboard.user.display_name);
            for order in &dashboard.orders {
                println!(
                    "{}  {}  {:<12} {:<8} total {:>10}  paid {:>10}",
                    order.id,
                    order.date,
                    order.status.label(),
                    order.payment_status.label(),
                    order.total_amount.to_string(),
                    order.paid_amount.to_string()
                );
                for service in &order.services {
                    println!("    - {} ({})", service.name, service.price);
                }
            }
        }
        DashboardAction::Projects => {
            println!("Projects for {}", dashboard.user.display_name);
            for project in &dashboard.projects {
                println!(
                    "{}  {:<28} {} -> {}  {:>3}%",
                    project.id,
                    project.name,
                    project.start_date,
                    project.expected_end_date,
                    project.progress
                );
            }
        }
    }
    Ok(())
}
