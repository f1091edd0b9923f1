use sqlx::FromRow;

/// One row of the `list accounts` aggregation: the account plus how
/// many public keys share its identifier.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AccountSummary {
    pub uuid: String,
    pub identifier: String,
    pub key_count: i64,
}

impl AccountSummary {
    pub fn is_connected(&self) -> bool {
        self.key_count > 0
    }
}

/// One row of the `list keys` join.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct KeyRow {
    pub key_id: i64,
    pub public_key: String,
}

/// Outcome of a committed account removal.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedAccount {
    pub identifier: String,
    pub keys_deleted: u64,
}
