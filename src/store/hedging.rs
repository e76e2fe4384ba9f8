// 12.4: hedge placement and month rolls. hedging retargets a position to cover a
// percentage of the commodity's physical exposure, signed opposite to it; rolls
// realize the gone month's P&L into the book's futures_realized accumulator.

use super::core::StateStore;
use super::results::StoreError;
use crate::events::ChangeKind;
use crate::futures::{roll_realization, FuturesPosition};
use crate::types::{Commodity, MonthCode, Timestamp};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

impl StateStore {
    /// Hedge `percent` of the commodity's current physical exposure in the
    /// given contract month. The target contract count is rounded to whole
    /// contracts and signed opposite the physical side; incremental contracts
    /// are assumed traded at the current board price, which blends into the
    /// position's volume-weighted average.
    pub fn hedge_exposure(
        &mut self,
        commodity: Commodity,
        percent: Decimal,
        month: MonthCode,
    ) -> Result<(), StoreError> {
        if month.is_empty() {
            return Err(StoreError::EmptyField("month"));
        }
        if percent < Decimal::ZERO || percent > dec!(100) {
            return Err(StoreError::PercentOutOfRange(percent));
        }

        let physical = self
            .engine
            .latest()
            .map(|r| r.exposure(commodity).physical)
            .unwrap_or_default();
        let multiplier = commodity.contract_multiplier();
        let contracts = (physical.abs() * percent / dec!(100) / multiplier)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        // signed opposite the physical side; a flat book targets zero
        let target = if physical > Decimal::ZERO {
            -contracts
        } else if physical < Decimal::ZERO {
            contracts
        } else {
            Decimal::ZERO
        };

        let board = self.state.pricing.board_price(commodity, &month);
        let now = Timestamp::now();
        let symbol = commodity.futures_symbol();

        if self.state.position_mut(symbol, &month).is_none() {
            let id = self.state.next_position_id();
            self.state
                .futures_positions
                .push(FuturesPosition::new(id, commodity, month.clone(), board, now));
        }
        if let Some(position) = self.state.position_mut(symbol, &month) {
            position.retarget(target, board, now);
        }

        self.drift_board(commodity, &month);
        self.finish(ChangeKind::HedgePlaced {
            commodity,
            month,
            contracts: target,
        });
        Ok(())
    }

    /// Roll the position at (symbol, from) into the `to` month: realize the
    /// P&L against the old month's board price and restrike the average at the
    /// new month's board price.
    pub fn roll_month(
        &mut self,
        symbol: &str,
        from: MonthCode,
        to: MonthCode,
    ) -> Result<(), StoreError> {
        let commodity = Commodity::from_symbol(symbol)
            .ok_or_else(|| StoreError::UnknownSymbol(symbol.to_string()))?;

        for month in [&from, &to] {
            if !self.state.pricing.has_board_price(commodity, month) {
                return Err(StoreError::UnknownBoardMonth {
                    commodity,
                    month: month.clone(),
                });
            }
        }
        if self.state.position_mut(symbol, &from).is_none() {
            return Err(StoreError::PositionNotFound {
                symbol: symbol.to_string(),
                month: from,
            });
        }

        let board_from = self.state.pricing.board_price(commodity, &from);
        let board_to = self.state.pricing.board_price(commodity, &to);
        let now = Timestamp::now();

        let mut realized = Decimal::ZERO;
        if let Some(position) = self.state.position_mut(symbol, &from) {
            realized = roll_realization(position, board_from);
            position.contract_month = to.clone();
            position.avg_price = board_to;
            position.updated_at = now;
        }
        self.state.adjustments.futures_realized += realized;

        self.drift_board(commodity, &to);
        self.finish(ChangeKind::MonthRolled {
            symbol: symbol.to_string(),
            from,
            to,
            realized,
        });
        Ok(())
    }
}
