use crate::db::AccountStore;
use crate::error::AdminError;
use crate::output::Console;
use uuid::Uuid;

/// `disconnect <uuid>`: drop every key for the account's identifier,
/// leaving the account row in place. Idempotent; an unknown uuid is a
/// notice, matching the removal path.
pub struct DisconnectCommand {
    uuid: Uuid,
}

impl DisconnectCommand {
    pub fn new(uuid: Uuid) -> Self {
        Self { uuid }
    }

    pub async fn execute(
        &self,
        store: &AccountStore,
        console: &Console,
    ) -> Result<(), AdminError> {
        let uuid = self.uuid.to_string();
        match store.disconnect_keys(&uuid).await? {
            None => {
                console.notice(&format!("No account found with UUID '{uuid}'"));
            }
            Some(0) => {
                console.notice(&format!("No public key connected to account '{uuid}'"));
            }
            Some(count) => {
                console.success(&format!(
                    "{count} public key(s) disconnected from account '{uuid}' successfully"
                ));
            }
        }
        Ok(())
    }
}
