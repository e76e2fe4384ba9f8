// 4.0: futures position tracking. qty is a signed contract count, negative = short.
// 4.1 has the vwap blend and roll realization math at the bottom.

use crate::types::{Commodity, MonthCode, PositionId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuturesPosition {
    pub id: PositionId,
    pub symbol: String,
    pub commodity: Commodity,
    pub contract_month: MonthCode,
    /// Signed contract count. Negative hedges a long physical book.
    pub qty: Decimal,
    /// Volume-weighted average entry price.
    pub avg_price: Decimal,
    pub updated_at: Timestamp,
}

impl FuturesPosition {
    pub fn new(
        id: PositionId,
        commodity: Commodity,
        contract_month: MonthCode,
        seed_price: Decimal,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id,
            symbol: commodity.futures_symbol().to_string(),
            commodity,
            contract_month,
            qty: Decimal::ZERO,
            avg_price: seed_price,
            updated_at: timestamp,
        }
    }

    pub fn is_flat(&self) -> bool {
        self.qty.is_zero()
    }

    /// Physical-equivalent hedge quantity: −qty × multiplier. A short position
    /// contributes positive hedge against long physical exposure.
    pub fn hedged_qty(&self) -> Decimal {
        -self.qty * self.commodity.contract_multiplier()
    }

    // 4.1: retarget the contract count, blending the average price over the
    // incremental contracts traded at fill_price. reductions and flips blend
    // the same way; only a no-op retarget leaves the average untouched.
    pub fn retarget(&mut self, target_qty: Decimal, fill_price: Decimal, timestamp: Timestamp) {
        let delta = target_qty - self.qty;
        if delta.is_zero() {
            return;
        }
        let total_abs = self.qty.abs() + delta.abs();
        if !total_abs.is_zero() {
            self.avg_price =
                (self.qty.abs() * self.avg_price + delta.abs() * fill_price) / total_abs;
        }
        self.qty = target_qty;
        self.updated_at = timestamp;
    }
}

/// P&L realized when a position leaves a contract month at its board price.
pub fn roll_realization(position: &FuturesPosition, board_from: Decimal) -> Decimal {
    (board_from - position.avg_price) * position.qty * position.commodity.contract_multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn position(qty: Decimal, avg: Decimal) -> FuturesPosition {
        let mut p = FuturesPosition::new(
            PositionId(1),
            Commodity::Soybeans,
            MonthCode::from("Nov-24"),
            avg,
            Timestamp::from_millis(0),
        );
        p.qty = qty;
        p
    }

    #[test]
    fn retarget_blends_vwap_over_increment() {
        let mut p = position(dec!(-40), dec!(13.00));
        p.retarget(dec!(-100), dec!(13.50), Timestamp::from_millis(1));
        assert_eq!(p.qty, dec!(-100));
        // (40*13.00 + 60*13.50) / 100 = 13.30
        assert_eq!(p.avg_price, dec!(13.30));
    }

    #[test]
    fn retarget_same_qty_keeps_average() {
        let mut p = position(dec!(-40), dec!(13.00));
        p.retarget(dec!(-40), dec!(14.00), Timestamp::from_millis(1));
        assert_eq!(p.avg_price, dec!(13.00));
    }

    #[test]
    fn retarget_from_flat_takes_fill_price() {
        let mut p = position(Decimal::ZERO, dec!(13.20));
        p.retarget(dec!(-100), dec!(13.40), Timestamp::from_millis(1));
        assert_eq!(p.avg_price, dec!(13.40));
    }

    #[test]
    fn hedged_qty_inverts_sign_and_scales() {
        let p = position(dec!(-100), dec!(13.00));
        assert_eq!(p.hedged_qty(), dec!(500000));
    }

    #[test]
    fn roll_realization_short_gains_when_board_falls() {
        let p = position(dec!(-100), dec!(13.50));
        // board at 13.20: short 100 contracts × 5000 gains 0.30 each
        assert_eq!(roll_realization(&p, dec!(13.20)), dec!(150000));
    }
}
