//! Ordered scenario storage
//!
//! Pure storage for the authored scenario sequence; playback logic lives in
//! the engine. Records are addressed both by stable [`ScenarioId`] and by
//! presentation position. While a playback run holds the list
//! (`begin_run`), every mutation is rejected with [`ListError::Locked`];
//! the lock clears when the run's permit drops, on every exit path.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use hashbrown::HashMap;

use super::error::ListError;
use super::record::ScenarioRecord;

/// Stable identifier for a stored scenario.
///
/// Ids are unique per list and never reused, so they stay valid across
/// removal and reordering of other entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScenarioId(u64);

/// Ordered collection of scenario records.
///
/// Insertion order is presentation order.
#[derive(Debug, Default)]
pub struct ScenarioList {
    order: Vec<ScenarioId>,
    records: HashMap<ScenarioId, ScenarioRecord>,
    next_id: u64,
    run_lock: Arc<AtomicBool>,
}

impl ScenarioList {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Mutation (rejected while a run holds the list) ──────────────────────

    /// Append a record, returning its stable id.
    pub fn add(&mut self, record: ScenarioRecord) -> Result<ScenarioId, ListError> {
        self.ensure_unlocked()?;

        let id = ScenarioId(self.next_id);
        self.next_id += 1;
        self.order.push(id);
        self.records.insert(id, record);
        Ok(id)
    }

    /// Remove the record at a presentation position.
    pub fn remove_at(&mut self, index: usize) -> Result<ScenarioRecord, ListError> {
        self.ensure_unlocked()?;
        let id = self.id_at(index)?;
        self.take(id)
    }

    /// Remove a record by id.
    pub fn remove(&mut self, id: ScenarioId) -> Result<ScenarioRecord, ListError> {
        self.ensure_unlocked()?;
        if !self.records.contains_key(&id) {
            return Err(ListError::UnknownId);
        }
        self.take(id)
    }

    /// Replace the delay of the record at a presentation position.
    ///
    /// Delay edits go through the run lock like structural mutation; editing
    /// the collection a run is iterating is unsafe.
    pub fn set_delay_at(&mut self, index: usize, delay: Duration) -> Result<(), ListError> {
        self.ensure_unlocked()?;
        let id = self.id_at(index)?;
        self.replace_delay(id, delay)
    }

    /// Replace the delay of a record by id.
    pub fn set_delay(&mut self, id: ScenarioId, delay: Duration) -> Result<(), ListError> {
        self.ensure_unlocked()?;
        self.replace_delay(id, delay)
    }

    // ─── Playback coordination ───────────────────────────────────────────────

    /// Lock the list for one playback run.
    ///
    /// Fails with [`ListError::Locked`] when a run is already active. The
    /// returned permit holds the lock; dropping it releases the list.
    pub fn begin_run(&self) -> Result<RunPermit, ListError> {
        if self
            .run_lock
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ListError::Locked);
        }
        Ok(RunPermit {
            lock: Arc::clone(&self.run_lock),
        })
    }

    /// Frozen copy of the records in presentation order.
    ///
    /// Mutations to the live list after the snapshot never affect a run
    /// that holds it.
    pub fn snapshot(&self) -> Vec<ScenarioRecord> {
        self.order.iter().map(|id| self.records[id].clone()).collect()
    }

    pub fn is_locked(&self) -> bool {
        self.run_lock.load(Ordering::Acquire)
    }

    // ─── Accessors ───────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Record at a presentation position.
    pub fn get(&self, index: usize) -> Result<&ScenarioRecord, ListError> {
        let id = self.id_at(index)?;
        self.records.get(&id).ok_or(ListError::UnknownId)
    }

    /// Id of the record at a presentation position.
    pub fn id_at(&self, index: usize) -> Result<ScenarioId, ListError> {
        self.order.get(index).copied().ok_or(ListError::OutOfRange {
            index,
            len: self.order.len(),
        })
    }

    pub fn by_id(&self, id: ScenarioId) -> Option<&ScenarioRecord> {
        self.records.get(&id)
    }

    /// Records with their ids, in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (ScenarioId, &ScenarioRecord)> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id).map(|record| (*id, record)))
    }

    // ─── Internals ───────────────────────────────────────────────────────────

    fn ensure_unlocked(&self) -> Result<(), ListError> {
        if self.is_locked() {
            return Err(ListError::Locked);
        }
        Ok(())
    }

    fn take(&mut self, id: ScenarioId) -> Result<ScenarioRecord, ListError> {
        self.order.retain(|&entry| entry != id);
        self.records.remove(&id).ok_or(ListError::UnknownId)
    }

    fn replace_delay(&mut self, id: ScenarioId, delay: Duration) -> Result<(), ListError> {
        let record = self.records.get_mut(&id).ok_or(ListError::UnknownId)?;
        *record = record.with_delay(delay);
        Ok(())
    }
}

/// Holds the list's run lock for the duration of one playback run.
#[derive(Debug)]
pub struct RunPermit {
    lock: Arc<AtomicBool>,
}

impl Drop for RunPermit {
    fn drop(&mut self) {
        self.lock.store(false, Ordering::Release);
    }
}
