// 10.0: change notifications. every successful mutation produces exactly one
// ChangeEvent carrying the reason, the snapshot identity, and the fresh
// aggregates, delivered synchronously to every subscriber. delivery is
// fault-isolated per listener: one panicking subscriber is caught and logged
// and the rest still run.

use crate::types::{Commodity, MonthCode, TicketId, TradeId, Timestamp};
use crate::valuation::Aggregates;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::panic::{catch_unwind, AssertUnwindSafe};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(pub u64);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotInfo {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChangeKind {
    MarketPriceUpdated {
        commodity: Commodity,
        month: MonthCode,
        value: Decimal,
    },
    PricingPointUpdated {
        name: String,
        commodity: Commodity,
        value: Decimal,
    },
    ZoneSpreadUpdated {
        zone: String,
        commodity: Commodity,
        value: Decimal,
    },
    PricingReverted,
    HedgePlaced {
        commodity: Commodity,
        month: MonthCode,
        contracts: Decimal,
    },
    MonthRolled {
        symbol: String,
        from: MonthCode,
        to: MonthCode,
        realized: Decimal,
    },
    TicketMatched {
        ticket_id: TicketId,
        trade_id: TradeId,
    },
    SnapshotLoaded {
        key: String,
    },
}

impl ChangeKind {
    pub fn reason(&self) -> &'static str {
        match self {
            ChangeKind::MarketPriceUpdated { .. } => "market-price",
            ChangeKind::PricingPointUpdated { .. } => "pricing-point",
            ChangeKind::ZoneSpreadUpdated { .. } => "zone-spread",
            ChangeKind::PricingReverted => "pricing-reverted",
            ChangeKind::HedgePlaced { .. } => "hedge-placed",
            ChangeKind::MonthRolled { .. } => "month-rolled",
            ChangeKind::TicketMatched { .. } => "ticket-matched",
            ChangeKind::SnapshotLoaded { .. } => "snapshot-loaded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub snapshot: SnapshotInfo,
    pub aggregates: Aggregates,
    pub timestamp: Timestamp,
}

pub type Listener = Box<dyn Fn(&ChangeEvent)>;

// 10.1: per-listener isolation. a panic in one subscriber must not roll back
// the mutation that emitted the event or starve later subscribers.
pub fn dispatch(listeners: &[(ListenerId, Listener)], event: &ChangeEvent) {
    for (id, listener) in listeners {
        if catch_unwind(AssertUnwindSafe(|| listener(event))).is_err() {
            tracing::warn!(
                listener = id.0,
                reason = event.kind.reason(),
                "listener panicked during change notification; continuing"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::cell::Cell;

    fn sample_event() -> ChangeEvent {
        ChangeEvent {
            kind: ChangeKind::PricingReverted,
            snapshot: SnapshotInfo {
                key: "prairie".to_string(),
                label: "Prairie Origination Book".to_string(),
            },
            aggregates: Aggregates {
                basis_pl: dec!(0.35),
                futures_pl: Decimal::ZERO,
                freight_var: Decimal::ZERO,
                other_pl: Decimal::ZERO,
                net_pl: dec!(0.35),
                hedge_coverage: Decimal::ZERO,
                working_capital: Decimal::ZERO,
            },
            timestamp: Timestamp::from_millis(0),
        }
    }

    #[test]
    fn reason_tags_are_stable() {
        assert_eq!(ChangeKind::PricingReverted.reason(), "pricing-reverted");
        assert_eq!(
            ChangeKind::SnapshotLoaded {
                key: "gulf".to_string()
            }
            .reason(),
            "snapshot-loaded"
        );
    }

    #[test]
    fn panicking_listener_does_not_starve_the_rest() {
        thread_local! {
            static CALLS: Cell<u32> = const { Cell::new(0) };
        }
        let listeners: Vec<(ListenerId, Listener)> = vec![
            (ListenerId(1), Box::new(|_| CALLS.with(|c| c.set(c.get() + 1)))),
            (ListenerId(2), Box::new(|_| panic!("subscriber bug"))),
            (ListenerId(3), Box::new(|_| CALLS.with(|c| c.set(c.get() + 1)))),
        ];
        dispatch(&listeners, &sample_event());
        assert_eq!(CALLS.with(Cell::get), 2);
    }
}
