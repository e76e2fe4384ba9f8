// 9.0: the valuation engine. evaluate() is a full deterministic recomputation over
// the current book: one pass each over trades, inventory lots, and futures
// positions, re-resolving prices from the live tables every time. the engine owns
// the two rolling history windows and the latest result; the store re-runs it
// after every mutation and all read queries come off the stored result.

use crate::book::BookState;
use crate::history::{HistoryBuffer, HistoryPoint};
use crate::inventory::age_bucket;
use crate::pricing::resolve_local_price;
use crate::types::{Commodity, Timestamp};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const MILLION: Decimal = dec!(1000000);

// monetary aggregates quote in millions at 2dp, coverage in percent at 1dp
fn to_millions(value: Decimal) -> Decimal {
    (value / MILLION).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn round_pct(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

// 9.1: per-commodity exposure. physical is signed open quantity, hedged is the
// physical-equivalent futures offset. hedged is deliberately left uncapped here;
// hedged_display() is the read-time projection that caps it at the physical size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExposureBucket {
    pub physical: Decimal,
    pub hedged: Decimal,
}

impl ExposureBucket {
    /// Display projection: hedged capped at |physical|.
    pub fn hedged_display(&self) -> Decimal {
        self.hedged.min(self.physical.abs())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    pub basis_pl: Decimal,
    pub futures_pl: Decimal,
    pub freight_var: Decimal,
    pub other_pl: Decimal,
    pub net_pl: Decimal,
    /// Percent of total physical exposure covered by hedges, in [0, 100].
    pub hedge_coverage: Decimal,
    pub working_capital: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub label: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryBreakdown {
    /// Quantity by market month, chronological by calendar month index.
    pub by_month: Vec<BreakdownRow>,
    /// Quantity by grade, encounter order.
    pub by_quality: Vec<BreakdownRow>,
    /// Quantity by age bucket, encounter order.
    pub by_aging: Vec<BreakdownRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationResult {
    pub timestamp: Timestamp,
    pub aggregates: Aggregates,
    pub exposures: BTreeMap<Commodity, ExposureBucket>,
    pub inventory: InventoryBreakdown,
}

impl ValuationResult {
    /// Exposure bucket for a commodity. Absent means flat, never missing.
    pub fn exposure(&self, commodity: Commodity) -> ExposureBucket {
        self.exposures.get(&commodity).copied().unwrap_or_default()
    }
}

// encounter-ordered label accumulation for the breakdown rows
#[derive(Debug, Default)]
struct RowAccumulator {
    rows: Vec<BreakdownRow>,
}

impl RowAccumulator {
    fn add(&mut self, label: &str, value: Decimal) {
        match self.rows.iter_mut().find(|r| r.label == label) {
            Some(row) => row.value += value,
            None => self.rows.push(BreakdownRow {
                label: label.to_string(),
                value,
            }),
        }
    }

    fn into_rows(self) -> Vec<BreakdownRow> {
        self.rows
    }
}

// 9.2: the engine instance. history survives across evaluations; everything in
// the result is rebuilt from scratch each call.
#[derive(Debug, Default)]
pub struct ValuationEngine {
    hedge_history: HistoryBuffer,
    pnl_history: HistoryBuffer,
    latest: Option<ValuationResult>,
}

impl ValuationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<&ValuationResult> {
        self.latest.as_ref()
    }

    pub fn hedge_history(&self) -> Vec<HistoryPoint> {
        self.hedge_history.to_vec()
    }

    pub fn pnl_history(&self) -> Vec<HistoryPoint> {
        self.pnl_history.to_vec()
    }

    /// A new book starts fresh series.
    pub fn clear_history(&mut self) {
        self.hedge_history.clear();
        self.pnl_history.clear();
    }

    // 9.3: the recompute. the only mutation performed on the input is the
    // write-back of the two derived price fields on each trade.
    pub fn evaluate(&mut self, state: &mut BookState, now: Timestamp) -> &ValuationResult {
        let mut exposures: BTreeMap<Commodity, ExposureBucket> = BTreeMap::new();
        let mut basis_value = Decimal::ZERO;
        let mut freight_variance = Decimal::ZERO;

        // trades pass
        for trade in &mut state.trades {
            let price = resolve_local_price(
                &state.pricing,
                trade.commodity,
                &trade.market_month,
                &trade.pricing_point,
                &trade.zone,
            );
            let open_qty = trade.open_qty();
            let sign = trade.direction.sign();

            exposures.entry(trade.commodity).or_default().physical += sign * open_qty;
            basis_value += (price.local - trade.contract_local_price) * open_qty * sign;
            freight_variance += trade.freight.variance();

            trade.current_local_price = Some(price.local);
            trade.flat_price = Some(price.local + trade.basis);
        }

        // inventory pass
        let mut inventory_mtm = Decimal::ZERO;
        let mut wc_notional = Decimal::ZERO;
        let mut by_month = RowAccumulator::default();
        let mut by_quality = RowAccumulator::default();
        let mut by_aging = RowAccumulator::default();

        for lot in &state.inventory_lots {
            let price = resolve_local_price(
                &state.pricing,
                lot.commodity,
                &lot.market_month,
                &lot.pricing_point,
                &lot.zone,
            );
            inventory_mtm += (price.local - lot.carrying_price) * lot.qty;
            wc_notional += price.local * lot.qty;

            by_month.add(lot.market_month.label(), lot.qty);
            by_quality.add(&lot.grade, lot.qty);
            by_aging.add(age_bucket(lot.age_days(now)), lot.qty);
        }

        // futures pass
        let mut futures_value = Decimal::ZERO;
        for position in &state.futures_positions {
            let board = state
                .pricing
                .board_price(position.commodity, &position.contract_month);
            futures_value += (board - position.avg_price)
                * position.qty
                * position.commodity.contract_multiplier();
            exposures.entry(position.commodity).or_default().hedged += position.hedged_qty();
        }
        futures_value += state.adjustments.futures_realized;

        let other_value = state.adjustments.other + inventory_mtm;

        let basis_pl = to_millions(basis_value);
        let futures_pl = to_millions(futures_value);
        let freight_var = to_millions(freight_variance);
        let other_pl = to_millions(other_value);
        let net_pl = (basis_pl + futures_pl + freight_var + other_pl)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        let total_physical: Decimal = exposures.values().map(|b| b.physical.abs()).sum();
        let total_hedged: Decimal = exposures.values().map(|b| b.hedged).sum();
        let hedge_coverage = if total_physical.is_zero() {
            Decimal::ZERO
        } else {
            round_pct(
                (total_hedged / total_physical * dec!(100))
                    .min(dec!(100))
                    .max(Decimal::ZERO),
            )
        };

        let working_capital =
            to_millions(state.adjustments.working_capital_base + wc_notional);

        // month rows sort by calendar index from the label; ties keep encounter order
        let mut month_rows = by_month.into_rows();
        month_rows.sort_by_key(|row| {
            crate::types::MonthCode::new(row.label.clone())
                .calendar_index()
                .unwrap_or(13)
        });

        self.hedge_history.push(now, hedge_coverage);
        self.pnl_history.push(now, net_pl);

        &*self.latest.insert(ValuationResult {
            timestamp: now,
            aggregates: Aggregates {
                basis_pl,
                futures_pl,
                freight_var,
                other_pl,
                net_pl,
                hedge_coverage,
                working_capital,
            },
            exposures,
            inventory: InventoryBreakdown {
                by_month: month_rows,
                by_quality: by_quality.into_rows(),
                by_aging: by_aging.into_rows(),
            },
        })
    }
}
