// 12.7: the read-only query surface. everything reads off the last computed
// valuation result; nothing here triggers a recompute.

use super::core::StateStore;
use crate::futures::FuturesPosition;
use crate::history::HistoryPoint;
use crate::trade::Trade;
use crate::types::{Commodity, MonthCode, TradeId};
use crate::valuation::{Aggregates, ExposureBucket, InventoryBreakdown, ValuationResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One flattened board-price row for pricing grids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardRow {
    pub commodity: Commodity,
    pub month: MonthCode,
    pub price: Decimal,
}

impl StateStore {
    // the constructor always runs one evaluation before handing the store out
    fn result(&self) -> &ValuationResult {
        self.engine
            .latest()
            .expect("store is evaluated at construction")
    }

    pub fn snapshot_key(&self) -> &str {
        &self.snapshot_key
    }

    pub fn snapshot_label(&self) -> &str {
        &self.state.label
    }

    pub fn bulletins(&self) -> &[String] {
        &self.state.bulletins
    }

    pub fn aggregates(&self) -> Aggregates {
        self.result().aggregates
    }

    /// Trades including the engine-written derived price fields.
    pub fn trades(&self) -> &[Trade] {
        &self.state.trades
    }

    pub fn trade(&self, id: TradeId) -> Option<&Trade> {
        self.state.trade(id)
    }

    /// Raw exposure buckets. `hedged` is uncapped here.
    pub fn exposures(&self) -> Vec<(Commodity, ExposureBucket)> {
        self.result()
            .exposures
            .iter()
            .map(|(c, b)| (*c, *b))
            .collect()
    }

    pub fn exposure(&self, commodity: Commodity) -> ExposureBucket {
        self.result().exposure(commodity)
    }

    /// Display projection of the exposure map with `hedged` capped at the
    /// physical size. The raw map stays available via `exposures()`.
    pub fn display_exposures(&self) -> Vec<(Commodity, ExposureBucket)> {
        self.result()
            .exposures
            .iter()
            .map(|(c, b)| {
                (
                    *c,
                    ExposureBucket {
                        physical: b.physical,
                        hedged: b.hedged_display(),
                    },
                )
            })
            .collect()
    }

    pub fn hedge_history(&self) -> Vec<HistoryPoint> {
        self.engine.hedge_history()
    }

    pub fn pnl_history(&self) -> Vec<HistoryPoint> {
        self.engine.pnl_history()
    }

    pub fn inventory_breakdown(&self) -> &InventoryBreakdown {
        &self.result().inventory
    }

    pub fn positions(&self) -> &[FuturesPosition] {
        &self.state.futures_positions
    }

    /// Board months quoted for a commodity, chronological. These are the
    /// months hedging and rolling can sensibly target.
    pub fn suggested_hedge_months(&self, commodity: Commodity) -> Vec<MonthCode> {
        self.state.pricing.months_for(commodity)
    }

    pub fn board_rows(&self) -> Vec<BoardRow> {
        self.state
            .pricing
            .market_prices
            .iter()
            .flat_map(|(commodity, by_month)| {
                by_month.iter().map(|(month, price)| BoardRow {
                    commodity: *commodity,
                    month: month.clone(),
                    price: *price,
                })
            })
            .collect()
    }

    pub fn commodities(&self) -> Vec<Commodity> {
        Commodity::ALL.to_vec()
    }

    pub fn pricing_point_names(&self) -> Vec<String> {
        self.state.pricing.pricing_points.keys().cloned().collect()
    }

    pub fn zone_names(&self) -> Vec<String> {
        self.state.pricing.zone_spreads.keys().cloned().collect()
    }

    pub fn elevators(&self) -> Vec<String> {
        self.state.elevators()
    }
}
