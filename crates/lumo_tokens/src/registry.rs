//! Process-wide token table registry.
//!
//! The dataset is loaded once at startup and installed here; accessors then
//! borrow the table for the life of the process. Callers that manage their
//! own table can skip the registry entirely and pass a [`TokenTable`] by
//! reference instead.

use std::sync::OnceLock;

use crate::table::TokenTable;

/// Global token table instance
static TOKEN_TABLE: OnceLock<TokenTable> = OnceLock::new();

impl TokenTable {
    /// Install the global token table (call once at startup).
    pub fn init(table: TokenTable) {
        tracing::debug!("installing token table with {} entries", table.len());
        let _ = TOKEN_TABLE.set(table);
    }

    /// Get the global token table instance.
    pub fn global() -> &'static TokenTable {
        TOKEN_TABLE
            .get()
            .expect("TokenTable not initialized. Call TokenTable::init() at startup.")
    }

    /// Try to get the global token table (returns None if not initialized).
    pub fn try_global() -> Option<&'static TokenTable> {
        TOKEN_TABLE.get()
    }
}
