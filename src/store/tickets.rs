// 12.5: ticket matching. applying a scale ticket prices part of the linked trade,
// draws down the matching elevator's inventory, and may close the trade outright
// when the open remainder falls inside the 5% tolerance.

use super::core::StateStore;
use super::results::StoreError;
use crate::book::TicketStatus;
use crate::events::ChangeKind;
use crate::trade::TradeStatus;
use crate::types::TicketId;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const FULLY_PRICED_TOLERANCE: Decimal = dec!(0.05);

impl StateStore {
    pub fn match_ticket(&mut self, ticket_id: TicketId) -> Result<(), StoreError> {
        // validate everything up front so a rejected command touches nothing
        let (trade_id, ticket_qty, elevator, ticket_commodity) = {
            let ticket = self
                .state
                .open_tickets
                .iter()
                .find(|t| t.id == ticket_id)
                .ok_or(StoreError::TicketNotFound(ticket_id))?;
            if ticket.status != TicketStatus::Open {
                return Err(StoreError::TicketNotOpen(ticket_id));
            }
            (
                ticket.trade_id,
                ticket.qty,
                ticket.elevator.clone(),
                ticket.commodity,
            )
        };
        if self.state.trade(trade_id).is_none() {
            return Err(StoreError::TradeNotFound(trade_id));
        }

        if let Some(ticket) = self.state.ticket_mut(ticket_id) {
            ticket.status = TicketStatus::Matched;
        }

        let (drift_commodity, drift_month) = {
            // trade existence checked above
            let trade = match self.state.trade_mut(trade_id) {
                Some(t) => t,
                None => return Err(StoreError::TradeNotFound(trade_id)),
            };
            let remaining = (trade.open_qty() - ticket_qty).max(Decimal::ZERO);
            if remaining <= trade.qty * FULLY_PRICED_TOLERANCE {
                trade.unpriced_qty = Some(Decimal::ZERO);
                trade.status = TradeStatus::Closed;
            } else {
                trade.unpriced_qty = Some(remaining);
                if trade.status == TradeStatus::Open {
                    trade.status = TradeStatus::Working;
                }
            }
            (trade.commodity, trade.market_month.clone())
        };

        if let Some(lot) = self
            .state
            .inventory_lots
            .iter_mut()
            .find(|l| l.elevator == elevator && l.commodity == ticket_commodity)
        {
            lot.qty = (lot.qty - ticket_qty).max(Decimal::ZERO);
        }

        self.drift_board(drift_commodity, &drift_month);
        self.finish(ChangeKind::TicketMatched {
            ticket_id,
            trade_id,
        });
        Ok(())
    }
}
