// 1.0: all the primitives live here. nothing in the engine works without these types.
// commodities, trade direction, contract months, IDs, timestamps. each is its own type
// so the compiler catches mixups between, say, a ticket id and a trade id.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// 1.1: the four commodities the book trades. the contract multiplier is the number of
// physical units one futures contract represents and is fixed per commodity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Commodity {
    Soybeans,
    Corn,
    Wheat,
    Canola,
}

impl Commodity {
    pub const ALL: [Commodity; 4] = [
        Commodity::Soybeans,
        Commodity::Corn,
        Commodity::Wheat,
        Commodity::Canola,
    ];

    pub fn contract_multiplier(&self) -> Decimal {
        match self {
            Commodity::Soybeans | Commodity::Corn | Commodity::Wheat => dec!(5000),
            Commodity::Canola => dec!(100),
        }
    }

    pub fn futures_symbol(&self) -> &'static str {
        match self {
            Commodity::Soybeans => "ZS",
            Commodity::Corn => "ZC",
            Commodity::Wheat => "ZW",
            Commodity::Canola => "RS",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Commodity::ALL.iter().copied().find(|c| c.futures_symbol() == symbol)
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Commodity::Soybeans => "Soybeans",
            Commodity::Corn => "Corn",
            Commodity::Wheat => "Wheat",
            Commodity::Canola => "Canola",
        };
        write!(f, "{name}")
    }
}

// Purchase = the book gets longer, Sale = the book gets shorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Purchase,
    Sale,
}

impl Direction {
    pub fn sign(&self) -> Decimal {
        match self {
            Direction::Purchase => dec!(1),
            Direction::Sale => dec!(-1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitOfMeasure {
    Bushels,
    Tonnes,
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitOfMeasure::Bushels => write!(f, "bu"),
            UnitOfMeasure::Tonnes => write!(f, "mt"),
        }
    }
}

// 1.2: contract month label, e.g. "Nov-24". the calendar index parsed from the month
// name before the dash drives chronological ordering of pricing tables and breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthCode(pub String);

impl MonthCode {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Calendar month index 1..=12 parsed from the name before the dash.
    pub fn calendar_index(&self) -> Option<u32> {
        let name = self.0.split('-').next()?;
        let index = match name.to_ascii_lowercase().as_str() {
            "jan" => 1,
            "feb" => 2,
            "mar" => 3,
            "apr" => 4,
            "may" => 5,
            "jun" => 6,
            "jul" => 7,
            "aug" => 8,
            "sep" => 9,
            "oct" => 10,
            "nov" => 11,
            "dec" => 12,
            _ => return None,
        };
        Some(index)
    }

    fn year_suffix(&self) -> Option<u32> {
        self.0.split('-').nth(1)?.parse().ok()
    }

    // unparseable labels sort last, after every real month
    fn sort_key(&self) -> (u32, u32) {
        (
            self.year_suffix().unwrap_or(u32::MAX),
            self.calendar_index().unwrap_or(u32::MAX),
        )
    }
}

impl Ord for MonthCode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for MonthCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MonthCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MonthCode {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TradeId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LotId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PositionId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TicketId(pub u32);

// 1.3: millisecond timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }

    pub fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Whole days elapsed since `earlier`. Negative differences clamp to 0.
    pub fn elapsed_days(&self, earlier: Timestamp) -> i64 {
        ((self.0 - earlier.0) / 86_400_000).max(0)
    }
}
