//! Command dispatcher.
//!
//! `AdminCommand::from_cli` validates nouns and argument presence
//! before any configuration or database work happens, so usage errors
//! never touch the database. Each command struct owns its typed
//! arguments and executes against a passed-in store and console.

pub mod add;
pub mod disconnect;
pub mod list;
pub mod remove;

pub use add::AddAccountCommand;
pub use disconnect::DisconnectCommand;
pub use list::{ListAccountsCommand, ListKeysCommand};
pub use remove::RemoveAccountCommand;

use crate::cli::Commands;
use crate::db::AccountStore;
use crate::error::AdminError;
use crate::output::Console;
use uuid::Uuid;

pub enum AdminCommand {
    ListAccounts(ListAccountsCommand),
    ListKeys(ListKeysCommand),
    AddAccount(AddAccountCommand),
    RemoveAccount(RemoveAccountCommand),
    Disconnect(DisconnectCommand),
}

fn parse_uuid(raw: &str) -> Result<Uuid, AdminError> {
    Uuid::parse_str(raw).map_err(|_| AdminError::usage(format!("Invalid UUID '{raw}'")))
}

impl AdminCommand {
    pub fn from_cli(command: Commands) -> Result<Self, AdminError> {
        match command {
            Commands::List { what, uuid } => match what.as_str() {
                "accounts" => Ok(Self::ListAccounts(ListAccountsCommand::new())),
                "keys" => {
                    let raw = uuid
                        .ok_or_else(|| AdminError::usage("UUID is required for listing keys"))?;
                    Ok(Self::ListKeys(ListKeysCommand::new(parse_uuid(&raw)?)))
                }
                _ => Err(AdminError::usage(
                    "Only 'accounts' and 'keys' listings are supported",
                )),
            },
            Commands::Add { what, identifier } => match what.as_str() {
                "account" => {
                    let identifier = identifier.ok_or_else(|| {
                        AdminError::usage("Identifier is required when adding an account")
                    })?;
                    Ok(Self::AddAccount(AddAccountCommand::new(identifier)))
                }
                _ => Err(AdminError::usage("Only 'account' addition is supported")),
            },
            Commands::Remove { what, uuid } => match what.as_str() {
                "account" => {
                    let raw = uuid.ok_or_else(|| {
                        AdminError::usage("UUID is required when removing an account")
                    })?;
                    Ok(Self::RemoveAccount(RemoveAccountCommand::new(parse_uuid(
                        &raw,
                    )?)))
                }
                _ => Err(AdminError::usage("Only 'account' removal is supported")),
            },
            Commands::Disconnect { uuid } => {
                let raw = uuid.ok_or_else(|| {
                    AdminError::usage("UUID is required to disconnect public keys")
                })?;
                Ok(Self::Disconnect(DisconnectCommand::new(parse_uuid(&raw)?)))
            }
        }
    }

    pub async fn execute(
        &self,
        store: &AccountStore,
        console: &Console,
    ) -> Result<(), AdminError> {
        match self {
            Self::ListAccounts(cmd) => cmd.execute(store, console).await,
            Self::ListKeys(cmd) => cmd.execute(store, console).await,
            Self::AddAccount(cmd) => cmd.execute(store, console).await,
            Self::RemoveAccount(cmd) => cmd.execute(store, console).await,
            Self::Disconnect(cmd) => cmd.execute(store, console).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_rejects_unknown_noun() {
        let err = AdminCommand::from_cli(Commands::List {
            what: "widgets".into(),
            uuid: None,
        })
        .err()
        .expect("unknown noun must fail");
        assert!(matches!(err, AdminError::Usage(_)));
        assert!(err.to_string().contains("'accounts' and 'keys'"));
    }

    #[test]
    fn list_keys_requires_uuid() {
        let err = AdminCommand::from_cli(Commands::List {
            what: "keys".into(),
            uuid: None,
        })
        .err()
        .expect("missing uuid must fail");
        assert!(err.to_string().contains("UUID is required"));
    }

    #[test]
    fn malformed_uuid_is_a_usage_error() {
        let err = AdminCommand::from_cli(Commands::Disconnect {
            uuid: Some("not-a-uuid".into()),
        })
        .err()
        .expect("malformed uuid must fail");
        assert!(err.to_string().contains("Invalid UUID"));
    }

    #[test]
    fn well_formed_commands_parse() {
        let uuid = uuid::Uuid::new_v4().to_string();
        assert!(AdminCommand::from_cli(Commands::List {
            what: "accounts".into(),
            uuid: None,
        })
        .is_ok());
        assert!(AdminCommand::from_cli(Commands::List {
            what: "keys".into(),
            uuid: Some(uuid.clone()),
        })
        .is_ok());
        assert!(AdminCommand::from_cli(Commands::Add {
            what: "account".into(),
            identifier: Some("alice".into()),
        })
        .is_ok());
        assert!(AdminCommand::from_cli(Commands::Remove {
            what: "account".into(),
            uuid: Some(uuid.clone()),
        })
        .is_ok());
        assert!(AdminCommand::from_cli(Commands::Disconnect { uuid: Some(uuid) }).is_ok());
    }
}
