// 12.3: pricing table commands. market price edits drift the edited cell; point
// and zone edits drift the commodity's first quoted board month instead, since
// they have no month of their own. revert restores the snapshot seed untouched.

use super::core::StateStore;
use super::results::StoreError;
use crate::events::ChangeKind;
use crate::types::{Commodity, MonthCode};
use rust_decimal::Decimal;

impl StateStore {
    pub fn update_market_price(
        &mut self,
        commodity: Commodity,
        month: MonthCode,
        value: Decimal,
    ) -> Result<(), StoreError> {
        if month.is_empty() {
            return Err(StoreError::EmptyField("month"));
        }
        Self::validate_price_value(value)?;

        self.state
            .pricing
            .set_board_price(commodity, month.clone(), value);
        self.drift_board(commodity, &month);
        self.finish(ChangeKind::MarketPriceUpdated {
            commodity,
            month,
            value,
        });
        Ok(())
    }

    pub fn update_pricing_point(
        &mut self,
        name: &str,
        commodity: Commodity,
        value: Decimal,
    ) -> Result<(), StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyField("name"));
        }
        Self::validate_price_value(value)?;

        self.state
            .pricing
            .set_point_adjustment(name, commodity, value);
        if let Some(month) = self.state.pricing.first_month(commodity) {
            self.drift_board(commodity, &month);
        }
        self.finish(ChangeKind::PricingPointUpdated {
            name: name.to_string(),
            commodity,
            value,
        });
        Ok(())
    }

    pub fn update_zone_spread(
        &mut self,
        zone: &str,
        commodity: Commodity,
        value: Decimal,
    ) -> Result<(), StoreError> {
        if zone.trim().is_empty() {
            return Err(StoreError::EmptyField("zone"));
        }
        Self::validate_price_value(value)?;

        self.state.pricing.set_zone_spread(zone, commodity, value);
        if let Some(month) = self.state.pricing.first_month(commodity) {
            self.drift_board(commodity, &month);
        }
        self.finish(ChangeKind::ZoneSpreadUpdated {
            zone: zone.to_string(),
            commodity,
            value,
        });
        Ok(())
    }

    /// Restore all three pricing tables to the snapshot's seed copy. No drift.
    pub fn revert_pricing(&mut self) {
        self.state.pricing = self.state.pricing_seed.clone();
        self.finish(ChangeKind::PricingReverted);
    }
}
