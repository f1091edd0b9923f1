use crate::db::AccountStore;
use crate::error::AdminError;
use crate::output::Console;
use uuid::Uuid;

/// `remove account <uuid>`: delete the account and every key sharing
/// its identifier in one transaction. An unknown uuid is a notice, not
/// an error.
pub struct RemoveAccountCommand {
    uuid: Uuid,
}

impl RemoveAccountCommand {
    pub fn new(uuid: Uuid) -> Self {
        Self { uuid }
    }

    pub async fn execute(
        &self,
        store: &AccountStore,
        console: &Console,
    ) -> Result<(), AdminError> {
        let uuid = self.uuid.to_string();
        match store.remove_account(&uuid).await? {
            None => {
                console.notice(&format!("No account found with UUID '{uuid}'"));
            }
            Some(removed) => {
                console.success(&format!(
                    "{} key(s) associated with account '{uuid}' removed",
                    removed.keys_deleted
                ));
                console.success(&format!(
                    "Account with UUID '{uuid}' removed successfully"
                ));
            }
        }
        Ok(())
    }
}
