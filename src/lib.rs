// grainbook-core: commodity trading book valuation and exposure engine.
// recompute-on-write architecture: every mutation re-derives the whole
// valuation from the live book. all computation is deterministic with no
// external I/O; even the post-mutation price drift is a pure counter function.
//
// file map (search X.0 for structs, X.1+ for logic):
//   1.x  types.rs: primitives: Commodity, Direction, MonthCode, IDs, Timestamp
//   2.x  trade.rs: physical trades, freight accruals, lifecycle status
//   3.x  inventory.rs: inventory lots and aging classification
//   4.x  futures.rs: futures positions, vwap blending, roll realization
//   5.x  pricing.rs: three-layer pricing tables and local price resolution
//   6.x  drift.rs: deterministic sine-hash board price drift
//   7.x  history.rs: bounded rolling series for coverage and net P&L
//   8.x  book.rs: BookState: the one mutable world, plus tickets/adjustments
//   9.x  valuation.rs: the evaluate() pass: aggregates, exposures, breakdowns
//   10.x events.rs: change events and fault-isolated listener dispatch
//   11.x fixtures.rs: demo snapshot templates
//   12.x store/: StateStore: mutation commands and the read-only query surface

pub mod book;
pub mod drift;
pub mod events;
pub mod fixtures;
pub mod futures;
pub mod history;
pub mod inventory;
pub mod pricing;
pub mod store;
pub mod trade;
pub mod types;
pub mod valuation;

// re exports for convenience
pub use book::{Adjustments, BookState, OpenTicket, TicketStatus};
pub use drift::DriftState;
pub use events::{ChangeEvent, ChangeKind, Listener, ListenerId, SnapshotInfo};
pub use fixtures::{build_snapshot, SNAPSHOT_KEYS};
pub use futures::{roll_realization, FuturesPosition};
pub use history::{HistoryBuffer, HistoryPoint, HISTORY_CAPACITY};
pub use inventory::{age_bucket, InventoryLot};
pub use pricing::{resolve_local_price, LocalPrice, PricingTables};
pub use store::{BoardRow, StateStore, StoreError};
pub use trade::{FreightAccrual, Trade, TradeStatus};
pub use types::{
    Commodity, Direction, LotId, MonthCode, PositionId, TicketId, Timestamp, TradeId,
    UnitOfMeasure,
};
pub use valuation::{
    Aggregates, BreakdownRow, ExposureBucket, InventoryBreakdown, ValuationEngine,
    ValuationResult,
};
