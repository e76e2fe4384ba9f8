// 12.6: snapshot selection. loading replaces the entire book with a fresh owned
// copy of the named template; the history windows restart with the new book. the
// drift counter is the one thing that never resets.

use super::core::StateStore;
use super::results::StoreError;
use crate::events::ChangeKind;
use crate::fixtures;

impl StateStore {
    pub fn load_snapshot(&mut self, key: &str) -> Result<(), StoreError> {
        let state = fixtures::build_snapshot(key)
            .ok_or_else(|| StoreError::UnknownSnapshot(key.to_string()))?;
        self.state = state;
        self.snapshot_key = key.to_string();
        self.engine.clear_history();
        self.finish(ChangeKind::SnapshotLoaded {
            key: key.to_string(),
        });
        Ok(())
    }

    /// Reload the current snapshot from its template, discarding every
    /// mutation made since it was selected.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        let key = self.snapshot_key.clone();
        self.load_snapshot(&key)
    }
}
