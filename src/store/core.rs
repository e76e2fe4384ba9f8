// 12.1: store struct and the shared mutate-recompute-emit plumbing. commands live
// in the sibling files; they all funnel through finish() so every successful
// mutation recomputes the valuation and notifies subscribers exactly once.

use super::results::StoreError;
use crate::book::BookState;
use crate::drift::DriftState;
use crate::events::{self, ChangeEvent, ChangeKind, Listener, ListenerId, SnapshotInfo};
use crate::fixtures;
use crate::types::{Commodity, MonthCode, Timestamp};
use crate::valuation::ValuationEngine;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// sanity bound on pricing edits; Decimal is finite by construction
const MAX_PRICE_MAGNITUDE: Decimal = dec!(1000000000);

pub struct StateStore {
    pub(super) state: BookState,
    pub(super) snapshot_key: String,
    pub(super) engine: ValuationEngine,
    pub(super) drift: DriftState,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

// listeners are opaque closures, so Debug skips them
impl std::fmt::Debug for StateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStore")
            .field("snapshot_key", &self.snapshot_key)
            .field("drift_counter", &self.drift.counter())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl StateStore {
    /// Build a store from a named snapshot template and run the initial
    /// valuation. Unknown keys are a hard failure.
    pub fn new(snapshot_key: &str) -> Result<Self, StoreError> {
        let state = fixtures::build_snapshot(snapshot_key)
            .ok_or_else(|| StoreError::UnknownSnapshot(snapshot_key.to_string()))?;
        Ok(Self::from_book(snapshot_key, state))
    }

    /// Build a store around an externally constructed book. Used by embedders
    /// and tests that need a book outside the fixture templates.
    pub fn from_book(key: &str, mut state: BookState) -> Self {
        let mut engine = ValuationEngine::new();
        engine.evaluate(&mut state, Timestamp::now());
        Self {
            state,
            snapshot_key: key.to_string(),
            engine,
            drift: DriftState::new(),
            listeners: Vec::new(),
            next_listener_id: 1,
        }
    }

    pub fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    // 12.2: shared tail of every successful command.
    pub(super) fn finish(&mut self, kind: ChangeKind) {
        let now = Timestamp::now();
        let aggregates = self.engine.evaluate(&mut self.state, now).aggregates;
        tracing::debug!(reason = kind.reason(), "book mutated; valuation recomputed");
        let event = ChangeEvent {
            kind,
            snapshot: SnapshotInfo {
                key: self.snapshot_key.clone(),
                label: self.state.label.clone(),
            },
            aggregates,
            timestamp: now,
        };
        events::dispatch(&self.listeners, &event);
    }

    /// Nudge the board cell for (commodity, month) by one deterministic drift
    /// step. A cell that does not exist is left alone.
    pub(super) fn drift_board(&mut self, commodity: Commodity, month: &MonthCode) {
        if self.state.pricing.has_board_price(commodity, month) {
            let current = self.state.pricing.board_price(commodity, month);
            let nudged = self.drift.apply(current);
            self.state.pricing.set_board_price(commodity, month.clone(), nudged);
        }
    }

    pub(super) fn validate_price_value(value: Decimal) -> Result<(), StoreError> {
        if value.abs() > MAX_PRICE_MAGNITUDE {
            return Err(StoreError::ValueOutOfRange(value));
        }
        Ok(())
    }
}
