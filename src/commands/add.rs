use crate::db::AccountStore;
use crate::error::AdminError;
use crate::output::Console;
use uuid::Uuid;

/// `add account <identifier>`: insert a fresh account under a
/// generated UUID v4. A duplicate identifier is a distinct,
/// user-actionable failure.
pub struct AddAccountCommand {
    identifier: String,
}

impl AddAccountCommand {
    pub fn new(identifier: String) -> Self {
        Self { identifier }
    }

    pub async fn execute(
        &self,
        store: &AccountStore,
        console: &Console,
    ) -> Result<(), AdminError> {
        let uuid = Uuid::new_v4();
        store
            .insert_account(&uuid.to_string(), &self.identifier)
            .await?;
        console.success(&format!(
            "Account '{}' created successfully (uuid: {uuid})",
            self.identifier
        ));
        Ok(())
    }
}
