// 8.0: the book itself. one BookState is the whole mutable world: trades, lots,
// futures positions, the pricing stack, book-level adjustments, and open tickets.
// it is replaced wholesale when a snapshot loads and mutated field-by-field by
// store commands; it never mutates itself.

use crate::futures::FuturesPosition;
use crate::inventory::InventoryLot;
use crate::pricing::PricingTables;
use crate::trade::Trade;
use crate::types::{Commodity, MonthCode, PositionId, TicketId, TradeId, UnitOfMeasure};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    Matched,
}

// scale tickets waiting to be applied against a trade's unpriced balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenTicket {
    pub id: TicketId,
    pub trade_id: TradeId,
    pub commodity: Commodity,
    pub qty: Decimal,
    pub unit: UnitOfMeasure,
    pub elevator: String,
    pub zone: String,
    pub status: TicketStatus,
}

// 8.1: scalar book-level terms. futures_realized accumulates across month rolls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Adjustments {
    pub other: Decimal,
    pub working_capital_base: Decimal,
    pub futures_realized: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookState {
    pub label: String,
    pub bulletins: Vec<String>,
    pub trades: Vec<Trade>,
    pub inventory_lots: Vec<InventoryLot>,
    pub futures_positions: Vec<FuturesPosition>,
    pub pricing: PricingTables,
    /// Untouched copy of the snapshot's pricing tables, for revert.
    pub pricing_seed: PricingTables,
    pub adjustments: Adjustments,
    pub open_tickets: Vec<OpenTicket>,
}

impl BookState {
    pub fn trade(&self, id: TradeId) -> Option<&Trade> {
        self.trades.iter().find(|t| t.id == id)
    }

    pub fn trade_mut(&mut self, id: TradeId) -> Option<&mut Trade> {
        self.trades.iter_mut().find(|t| t.id == id)
    }

    pub fn ticket_mut(&mut self, id: TicketId) -> Option<&mut OpenTicket> {
        self.open_tickets.iter_mut().find(|t| t.id == id)
    }

    pub fn position_mut(
        &mut self,
        symbol: &str,
        month: &MonthCode,
    ) -> Option<&mut FuturesPosition> {
        self.futures_positions
            .iter_mut()
            .find(|p| p.symbol == symbol && &p.contract_month == month)
    }

    pub fn next_position_id(&self) -> PositionId {
        let max = self
            .futures_positions
            .iter()
            .map(|p| p.id.0)
            .max()
            .unwrap_or(0);
        PositionId(max + 1)
    }

    /// Elevator names seen across lots and tickets, deduplicated, first-seen order.
    pub fn elevators(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for name in self
            .inventory_lots
            .iter()
            .map(|l| l.elevator.as_str())
            .chain(self.open_tickets.iter().map(|t| t.elevator.as_str()))
        {
            if !seen.iter().any(|s: &String| s == name) {
                seen.push(name.to_string());
            }
        }
        seen
    }
}
