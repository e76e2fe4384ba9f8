// 12.0: the state store. owns the one live BookState, the valuation engine, the
// drift counter, and the subscriber list. every mutation command follows the same
// discipline: validate fully, mutate in place, drift where specified, re-run the
// valuation, emit one change event. a failed validation leaves no trace.

mod core;
mod hedging;
mod pricing_cmds;
mod queries;
mod results;
mod snapshots;
mod tickets;

pub use self::core::StateStore;
pub use self::queries::BoardRow;
pub use self::results::StoreError;
