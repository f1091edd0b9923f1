//! SQL DDL for initializing the account storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `accounts.id` TEXT PRIMARY KEY (tool-generated UUID v4)
/// - `accounts.identifier` UNIQUE (creates an index implicitly)
/// - `public_keys.identifier` referencing `accounts.identifier`, NOT
///   `accounts.id` -- the join key between the two tables is the
///   identifier string (existing layout, kept as-is)
/// - Separate index on `public_keys.identifier` for the join/cascade paths
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id TEXT PRIMARY KEY,
    identifier TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS public_keys (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    identifier TEXT NOT NULL REFERENCES accounts(identifier),
    public_key TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_public_keys_identifier ON public_keys(identifier);
"#;
