//! # In-Memory Ledger
//!
//! `LedgerState` over a `BTreeMap`, with an equality-only query engine that
//! evaluates JSON selectors against stored JSON documents.
//!
//! Behaves like the external ledger where the contract depends on it:
//! missing keys read as empty bytes, query results are a snapshot in key
//! order, and cursors must be closed. Call counters make "no write happened"
//! and "cursor was released" observable in tests.

use crate::domain::LedgerError;
use crate::ports::{LedgerState, QueryCursor};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct Counters {
    puts: AtomicU64,
    gets: AtomicU64,
    queries: AtomicU64,
    cursors_opened: AtomicU64,
    cursors_closed: AtomicU64,
}

/// Snapshot of ledger call counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerStats {
    pub puts: u64,
    pub gets: u64,
    pub queries: u64,
    pub cursors_opened: u64,
    pub cursors_closed: u64,
}

impl LedgerStats {
    /// Cursors opened but not yet closed.
    pub fn open_cursors(&self) -> u64 {
        self.cursors_opened.saturating_sub(self.cursors_closed)
    }

    /// Total calls that reached the ledger.
    pub fn total_calls(&self) -> u64 {
        self.puts + self.gets + self.queries
    }
}

/// In-memory implementation of `LedgerState` for testing and embedding
pub struct InMemoryLedger {
    state: RwLock<BTreeMap<String, Vec<u8>>>,
    counters: Arc<Counters>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(BTreeMap::new()),
            counters: Arc::new(Counters::default()),
        }
    }

    pub fn stats(&self) -> LedgerStats {
        LedgerStats {
            puts: self.counters.puts.load(Ordering::SeqCst),
            gets: self.counters.gets.load(Ordering::SeqCst),
            queries: self.counters.queries.load(Ordering::SeqCst),
            cursors_opened: self.counters.cursors_opened.load(Ordering::SeqCst),
            cursors_closed: self.counters.cursors_closed.load(Ordering::SeqCst),
        }
    }

    /// Number of keys in world state.
    pub fn len(&self) -> Result<usize, LedgerError> {
        let state = self.state.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(state.len())
    }

    pub fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerState for InMemoryLedger {
    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        self.counters.puts.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.write().map_err(|_| LedgerError::LockPoisoned)?;
        state.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get_state(&self, key: &str) -> Result<Vec<u8>, LedgerError> {
        self.counters.gets.fetch_add(1, Ordering::SeqCst);
        let state = self.state.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(state.get(key).cloned().unwrap_or_default())
    }

    fn get_query_result(&self, query: &str) -> Result<Box<dyn QueryCursor + '_>, LedgerError> {
        self.counters.queries.fetch_add(1, Ordering::SeqCst);
        let selector = parse_selector(query)?;

        let state = self.state.read().map_err(|_| LedgerError::LockPoisoned)?;
        let rows: VecDeque<Vec<u8>> = state
            .values()
            .filter(|value| document_matches(value, &selector))
            .cloned()
            .collect();

        self.counters.cursors_opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(InMemoryCursor {
            rows,
            counters: Arc::clone(&self.counters),
        }))
    }
}

/// Extract the equality pairs from `{"selector": {...}}`.
fn parse_selector(query: &str) -> Result<Map<String, Value>, LedgerError> {
    let parsed: Value = serde_json::from_str(query)
        .map_err(|e| LedgerError::QueryRejected(format!("invalid selector JSON: {}", e)))?;

    let selector = parsed
        .get("selector")
        .and_then(Value::as_object)
        .ok_or_else(|| LedgerError::QueryRejected("missing selector object".to_string()))?;

    if let Some((field, _)) = selector.iter().find(|(_, v)| !v.is_string()) {
        return Err(LedgerError::QueryRejected(format!(
            "unsupported operator on field {}",
            field
        )));
    }

    Ok(selector.clone())
}

/// Non-JSON documents never match, as in a document store's query engine.
fn document_matches(value: &[u8], selector: &Map<String, Value>) -> bool {
    let Ok(Value::Object(doc)) = serde_json::from_slice::<Value>(value) else {
        return false;
    };
    selector
        .iter()
        .all(|(field, expected)| doc.get(field) == Some(expected))
}

struct InMemoryCursor {
    rows: VecDeque<Vec<u8>>,
    counters: Arc<Counters>,
}

impl QueryCursor for InMemoryCursor {
    fn has_next(&self) -> bool {
        !self.rows.is_empty()
    }

    fn next(&mut self) -> Result<Vec<u8>, LedgerError> {
        self.rows
            .pop_front()
            .ok_or_else(|| LedgerError::Cursor("cursor exhausted".to_string()))
    }

    fn close(&mut self) -> Result<(), LedgerError> {
        self.rows.clear();
        self.counters.cursors_closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
