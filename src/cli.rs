use clap::{Parser, Subcommand};

/// Verbs are clap subcommands; the noun (`accounts`, `keys`,
/// `account`) stays a free-form argument validated by the dispatcher,
/// so an unknown noun or missing argument is reported as a usage error
/// with exit code 1 rather than clap's parse failure.
#[derive(Parser, Debug)]
#[command(
    name = "dothtml-admin",
    version,
    about = "Administrative CLI for dothtml accounts and their public keys"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List items from the system
    List {
        /// What to list ('accounts' or 'keys')
        what: String,
        /// Account UUID, required when listing keys
        uuid: Option<String>,
    },
    /// Add items to the system
    Add {
        /// What to add ('account')
        what: String,
        /// Identifier for the new account
        identifier: Option<String>,
    },
    /// Remove items from the system
    Remove {
        /// What to remove ('account')
        what: String,
        /// UUID of the account to remove
        uuid: Option<String>,
    },
    /// Remove the connected public keys from the account with the given UUID
    Disconnect {
        /// UUID of the account to disconnect
        uuid: Option<String>,
    },
}
