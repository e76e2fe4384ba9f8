// 3.0: inventory lots and the aging classification used by the breakdown pass.

use crate::types::{Commodity, LotId, MonthCode, Timestamp, UnitOfMeasure};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryLot {
    pub id: LotId,
    pub commodity: Commodity,
    pub qty: Decimal,
    pub unit: UnitOfMeasure,
    pub elevator: String,
    pub grade: String,
    pub moisture_pct: Decimal,
    pub protein_pct: Decimal,
    pub intake_date: Timestamp,
    /// Book (carrying) price the lot was taken in at.
    pub carrying_price: Decimal,
    pub market_month: MonthCode,
    pub pricing_point: String,
    pub zone: String,
}

impl InventoryLot {
    pub fn age_days(&self, now: Timestamp) -> i64 {
        now.elapsed_days(self.intake_date)
    }
}

// 3.1: bucket thresholds are inclusive upper bounds in whole days.
pub fn age_bucket(days: i64) -> &'static str {
    match days {
        d if d <= 15 => "0-15d",
        d if d <= 30 => "16-30d",
        d if d <= 60 => "31-60d",
        d if d <= 90 => "61-90d",
        _ => "90d+",
    }
}
