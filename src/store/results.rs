// 12.0.2: typed command errors. the source system swallowed bad input silently;
// here every rejection is a value, with the same guarantee behind it: an Err
// means nothing was mutated and no event went out.

use crate::types::{Commodity, MonthCode, TicketId, TradeId};
use rust_decimal::Decimal;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Unknown snapshot key '{0}'")]
    UnknownSnapshot(String),

    #[error("Required field '{0}' is empty")]
    EmptyField(&'static str),

    #[error("Value {0} is outside the accepted magnitude")]
    ValueOutOfRange(Decimal),

    #[error("Hedge percent {0} must be within 0..=100")]
    PercentOutOfRange(Decimal),

    #[error("No board price for {commodity} {month}")]
    UnknownBoardMonth {
        commodity: Commodity,
        month: MonthCode,
    },

    #[error("No futures position at ({symbol}, {month})")]
    PositionNotFound { symbol: String, month: MonthCode },

    #[error("Unknown futures symbol '{0}'")]
    UnknownSymbol(String),

    #[error("Ticket {0:?} not found")]
    TicketNotFound(TicketId),

    #[error("Ticket {0:?} is not open")]
    TicketNotOpen(TicketId),

    #[error("Trade {0:?} not found")]
    TradeNotFound(TradeId),
}
