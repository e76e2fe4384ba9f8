// 5.0: the three-layer pricing stack. board price by commodity/month, point
// adjustment by pricing point/commodity, zone spread by zone/commodity. every
// lookup miss resolves to zero because fixture tables are intentionally sparse.
// resolution reads the live tables on every call; there is no cache to go stale.

use crate::types::{Commodity, MonthCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// BTreeMap keyed by MonthCode iterates chronologically, which makes
// "first known month" for a commodity a deterministic choice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingTables {
    pub market_prices: BTreeMap<Commodity, BTreeMap<MonthCode, Decimal>>,
    pub pricing_points: BTreeMap<String, BTreeMap<Commodity, Decimal>>,
    pub zone_spreads: BTreeMap<String, BTreeMap<Commodity, Decimal>>,
}

impl PricingTables {
    pub fn board_price(&self, commodity: Commodity, month: &MonthCode) -> Decimal {
        self.market_prices
            .get(&commodity)
            .and_then(|by_month| by_month.get(month))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn point_adjustment(&self, point: &str, commodity: Commodity) -> Decimal {
        self.pricing_points
            .get(point)
            .and_then(|by_commodity| by_commodity.get(&commodity))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn zone_spread(&self, zone: &str, commodity: Commodity) -> Decimal {
        self.zone_spreads
            .get(zone)
            .and_then(|by_commodity| by_commodity.get(&commodity))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn set_board_price(&mut self, commodity: Commodity, month: MonthCode, value: Decimal) {
        self.market_prices
            .entry(commodity)
            .or_default()
            .insert(month, value);
    }

    pub fn set_point_adjustment(&mut self, point: &str, commodity: Commodity, value: Decimal) {
        self.pricing_points
            .entry(point.to_string())
            .or_default()
            .insert(commodity, value);
    }

    pub fn set_zone_spread(&mut self, zone: &str, commodity: Commodity, value: Decimal) {
        self.zone_spreads
            .entry(zone.to_string())
            .or_default()
            .insert(commodity, value);
    }

    /// Earliest board month quoted for a commodity, if any.
    pub fn first_month(&self, commodity: Commodity) -> Option<MonthCode> {
        self.market_prices
            .get(&commodity)
            .and_then(|by_month| by_month.keys().next().cloned())
    }

    pub fn has_board_price(&self, commodity: Commodity, month: &MonthCode) -> bool {
        self.market_prices
            .get(&commodity)
            .is_some_and(|by_month| by_month.contains_key(month))
    }

    /// Board months quoted for a commodity, chronological.
    pub fn months_for(&self, commodity: Commodity) -> Vec<MonthCode> {
        self.market_prices
            .get(&commodity)
            .map(|by_month| by_month.keys().cloned().collect())
            .unwrap_or_default()
    }
}

// 5.1: resolved local price decomposition. local = board + point + zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalPrice {
    pub board: Decimal,
    pub point_adj: Decimal,
    pub zone_adj: Decimal,
    pub local: Decimal,
}

pub fn resolve_local_price(
    tables: &PricingTables,
    commodity: Commodity,
    month: &MonthCode,
    point: &str,
    zone: &str,
) -> LocalPrice {
    let board = tables.board_price(commodity, month);
    let point_adj = tables.point_adjustment(point, commodity);
    let zone_adj = tables.zone_spread(zone, commodity);
    LocalPrice {
        board,
        point_adj,
        zone_adj,
        local: board + point_adj + zone_adj,
    }
}
