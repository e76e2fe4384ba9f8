// 2.0: physical trade records. a trade carries its own pricing keys (month, point,
// zone) plus the freight accrual. the engine writes the two derived price fields
// back onto the record during evaluation; nothing else touches them.

use crate::types::{Commodity, Direction, MonthCode, TradeId, UnitOfMeasure};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Open -> Working/Nominated -> Confirmed -> Closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeStatus {
    Open,
    Working,
    Nominated,
    Confirmed,
    Closed,
}

// reserved is booked up front; actual lands once the carrier invoices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreightAccrual {
    pub reserved: Decimal,
    pub actual: Option<Decimal>,
    pub zone_variance: Decimal,
}

impl FreightAccrual {
    /// Variance contribution: reserved − actual + zone variance once the actual
    /// is known, otherwise the reserve stands on its own.
    pub fn variance(&self) -> Decimal {
        match self.actual {
            Some(actual) => self.reserved - actual + self.zone_variance,
            None => self.reserved,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: TradeId,
    pub counterparty: String,
    pub direction: Direction,
    pub commodity: Commodity,
    pub qty: Decimal,
    pub unit: UnitOfMeasure,
    /// Quantity not yet priced. `None` means the whole trade is open.
    pub unpriced_qty: Option<Decimal>,
    pub market_month: MonthCode,
    pub pricing_point: String,
    pub zone: String,
    pub basis: Decimal,
    pub contract_local_price: Decimal,
    pub freight: FreightAccrual,
    pub status: TradeStatus,
    // derived, written by the valuation engine each pass
    pub current_local_price: Option<Decimal>,
    pub flat_price: Option<Decimal>,
}

impl Trade {
    /// Open (unpriced) quantity, falling back to the full quantity.
    pub fn open_qty(&self) -> Decimal {
        self.unpriced_qty.unwrap_or(self.qty)
    }

    /// Signed open quantity: Purchase positive, Sale negative.
    pub fn signed_open_qty(&self) -> Decimal {
        self.direction.sign() * self.open_qty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;
    use rust_decimal_macros::dec;

    fn trade(direction: Direction, qty: Decimal, unpriced: Option<Decimal>) -> Trade {
        Trade {
            id: TradeId(1),
            counterparty: "AgriCo".to_string(),
            direction,
            commodity: Commodity::Corn,
            qty,
            unit: UnitOfMeasure::Bushels,
            unpriced_qty: unpriced,
            market_month: MonthCode::from("Dec-24"),
            pricing_point: "P1".to_string(),
            zone: "Z1".to_string(),
            basis: dec!(0.15),
            contract_local_price: dec!(4.50),
            freight: FreightAccrual {
                reserved: dec!(1000),
                actual: None,
                zone_variance: Decimal::ZERO,
            },
            status: TradeStatus::Open,
            current_local_price: None,
            flat_price: None,
        }
    }

    #[test]
    fn open_qty_falls_back_to_total() {
        assert_eq!(trade(Direction::Purchase, dec!(500), None).open_qty(), dec!(500));
        assert_eq!(
            trade(Direction::Purchase, dec!(500), Some(dec!(200))).open_qty(),
            dec!(200)
        );
    }

    #[test]
    fn signed_open_qty_by_direction() {
        assert_eq!(
            trade(Direction::Purchase, dec!(500), None).signed_open_qty(),
            dec!(500)
        );
        assert_eq!(
            trade(Direction::Sale, dec!(500), None).signed_open_qty(),
            dec!(-500)
        );
    }

    #[test]
    fn freight_variance_with_and_without_actual() {
        let mut f = FreightAccrual {
            reserved: dec!(2500),
            actual: None,
            zone_variance: dec!(-120),
        };
        assert_eq!(f.variance(), dec!(2500));

        f.actual = Some(dec!(2300));
        assert_eq!(f.variance(), dec!(80));
    }
}
