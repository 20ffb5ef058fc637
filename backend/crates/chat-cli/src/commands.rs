use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Ask the chatbot a question (saved to history when signed in)
    Ask { message: String },

    /// Show the conversation history of the signed-in account
    History,

    /// Remove every exchange from the conversation history
    Clear,

    /// Register a new account
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: Option<String>,
    },

    /// Sign in and print a session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Show the signed-in profile
    Profile,

    /// Change the display name; omit the name to clear it
    Rename { name: Option<String> },

    /// Delete the signed-in account
    DeleteAccount,
}
