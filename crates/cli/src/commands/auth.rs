//! Session commands.

use clap::Subcommand;

use servex_storefront::services::AuthError;
use servex_storefront::state::AppState;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Log in with an email and password
    Login {
        /// Contact email address
        #[arg(short, long)]
        email: String,

        /// Password (6 characters minimum)
        #[arg(short, long)]
        password: String,
    },
    /// Register a new account
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Contact email address
        #[arg(short, long)]
        email: String,

        /// Password (8 characters minimum)
        #[arg(short, long)]
        password: String,
    },
    /// Log out of the current session
    Logout,
    /// Show the logged-in user, if any
    Whoami,
}

#[allow(clippy::print_stdout)]
pub async fn run(state: &AppState, action: AuthAction) -> Result<(), AuthError> {
    match action {
        AuthAction::Login { email, password } => {
            let user = state.session().login(&email, &password).await?;
            println!("Logged in as {} <{}>", user.display_name, user.email);
        }
        AuthAction::Register {
            name,
            email,
            password,
        } => {
            let user = state.session().register(&name, &email, &password).await?;
            println!("Registered {} <{}>", user.display_name, user.email);
        }
        AuthAction::Logout => {
            state.session().logout();
            println!("Logged out");
        }
        AuthAction::Whoami => match state.session().current_user() {
            Some(user) => println!("{} <{}> ({})", user.display_name, user.email, user.id),
            None => println!("Not logged in"),
        },
    }
    Ok(())
}
