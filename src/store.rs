//! High-score persistence seam
//!
//! The engine never touches storage itself. It loads the prior high score
//! once at construction and pushes every new high score through this trait.
//! A failed load means "no prior high score"; a failed save is logged by
//! the engine and the in-memory value stays authoritative for the session.

use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;

/// Collaborator contract for persisting the high score across sessions
pub trait HighScoreStore: Send {
    /// Read the persisted high score. Called once at engine construction.
    fn load(&mut self) -> Result<u32>;

    /// Persist a new high score. Called each time the high score increases.
    fn save(&mut self, high_score: u32) -> Result<()>;
}

/// Store for sessions without persistence: no prior score, saves vanish
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl HighScoreStore for NullStore {
    fn load(&mut self) -> Result<u32> {
        Ok(0)
    }

    fn save(&mut self, _high_score: u32) -> Result<()> {
        Ok(())
    }
}

/// In-memory store with a shared handle.
///
/// Cloning yields another handle to the same value, so a test (or a host
/// application) can hand one clone to the engine and keep another to
/// observe what gets persisted.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    inner: Arc<MemoryStoreState>,
}

#[derive(Debug, Default)]
struct MemoryStoreState {
    value: AtomicU32,
    saves: AtomicUsize,
}

impl MemoryStore {
    /// Start with a pre-existing persisted high score
    pub fn with_value(value: u32) -> Self {
        let store = Self::default();
        store.inner.value.store(value, Ordering::Relaxed);
        store
    }

    /// The currently persisted value
    pub fn value(&self) -> u32 {
        self.inner.value.load(Ordering::Relaxed)
    }

    /// How many times `save` has been called
    pub fn save_count(&self) -> usize {
        self.inner.saves.load(Ordering::Relaxed)
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> Result<u32> {
        Ok(self.inner.value.load(Ordering::Relaxed))
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        self.inner.value.store(high_score, Ordering::Relaxed);
        self.inner.saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
