//! Scoped query cursor.

use crate::domain::LedgerError;
use crate::ports::outbound::QueryCursor;
use tracing::warn;

/// Owns a query cursor and closes it exactly once when dropped.
///
/// Dropping covers every exit path of the query loop: completion, an
/// iteration error, a decode failure, or the result bound being hit.
pub(crate) struct CursorGuard<'a> {
    cursor: Box<dyn QueryCursor + 'a>,
}

impl<'a> CursorGuard<'a> {
    pub(crate) fn new(cursor: Box<dyn QueryCursor + 'a>) -> Self {
        Self { cursor }
    }

    pub(crate) fn has_next(&self) -> bool {
        self.cursor.has_next()
    }

    pub(crate) fn next(&mut self) -> Result<Vec<u8>, LedgerError> {
        self.cursor.next()
    }
}

impl Drop for CursorGuard<'_> {
    fn drop(&mut self) {
        // Close failures can not change the outcome of the query.
        if let Err(e) = self.cursor.close() {
            warn!(error = %e, "Failed to close query cursor");
        }
    }
}
