use crate::db::AccountStore;
use crate::error::AdminError;
use crate::output::{Cell, Console, Table};
use uuid::Uuid;

/// `list accounts`: every account with its connection status.
pub struct ListAccountsCommand;

impl ListAccountsCommand {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(
        &self,
        store: &AccountStore,
        console: &Console,
    ) -> Result<(), AdminError> {
        let accounts = store.list_accounts().await?;
        if accounts.is_empty() {
            console.notice("No account found");
            return Ok(());
        }

        let mut table = Table::new("Accounts List", &["uuid", "identifier", "key"]);
        for account in &accounts {
            let status = if account.is_connected() {
                Cell::green("CONNECTED")
            } else {
                Cell::red("NOT CONNECTED")
            };
            table.row(vec![
                Cell::plain(&account.uuid),
                Cell::plain(&account.identifier),
                status,
            ]);
        }
        console.table(&table);
        console.summary("Total results", accounts.len());
        Ok(())
    }
}

impl Default for ListAccountsCommand {
    fn default() -> Self {
        Self::new()
    }
}

/// `list keys <uuid>`: public keys joined to one account.
///
/// The account is looked up first so that a missing account is a
/// notice while a real database failure still surfaces as an error.
pub struct ListKeysCommand {
    uuid: Uuid,
}

impl ListKeysCommand {
    pub fn new(uuid: Uuid) -> Self {
        Self { uuid }
    }

    pub async fn execute(
        &self,
        store: &AccountStore,
        console: &Console,
    ) -> Result<(), AdminError> {
        let uuid = self.uuid.to_string();
        if store.find_identifier(&uuid).await?.is_none() {
            console.notice(&format!("No account found with UUID '{uuid}'"));
            return Ok(());
        }

        let keys = store.list_keys(&uuid).await?;
        if keys.is_empty() {
            console.notice("No keys found for the given UUID");
            return Ok(());
        }

        // header 'uuid' over key-id values matches the tool's
        // long-standing display contract
        let mut table = Table::new(
            format!("Public Keys for UUID: {uuid}"),
            &["uuid", "public_key"],
        );
        for key in &keys {
            table.row(vec![
                Cell::plain(key.key_id.to_string()),
                Cell::plain(&key.public_key),
            ]);
        }
        console.table(&table);
        console.summary("Total keys found", keys.len());
        Ok(())
    }
}
