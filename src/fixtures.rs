// 11.0: demo snapshot templates. each build_* function returns a fresh owned
// BookState by construction, so loading a snapshot can never alias a previous
// book's data. intake dates are laid out relative to build time so the aging
// buckets land where the demo expects them.

use crate::book::{Adjustments, BookState, OpenTicket, TicketStatus};
use crate::futures::FuturesPosition;
use crate::inventory::InventoryLot;
use crate::pricing::PricingTables;
use crate::trade::{FreightAccrual, Trade, TradeStatus};
use crate::types::{
    Commodity, Direction, LotId, MonthCode, PositionId, TicketId, Timestamp, TradeId,
    UnitOfMeasure,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const SNAPSHOT_KEYS: [&str; 2] = ["prairie", "gulf"];

pub fn build_snapshot(key: &str) -> Option<BookState> {
    match key {
        "prairie" => Some(prairie()),
        "gulf" => Some(gulf()),
        _ => None,
    }
}

fn days_ago(now: Timestamp, days: i64) -> Timestamp {
    Timestamp::from_millis(now.as_millis() - days * 86_400_000)
}

#[allow(clippy::too_many_arguments)]
fn trade(
    id: u32,
    counterparty: &str,
    direction: Direction,
    commodity: Commodity,
    qty: Decimal,
    unit: UnitOfMeasure,
    unpriced: Option<Decimal>,
    month: &str,
    point: &str,
    zone: &str,
    basis: Decimal,
    contract_local_price: Decimal,
    freight: FreightAccrual,
    status: TradeStatus,
) -> Trade {
    Trade {
        id: TradeId(id),
        counterparty: counterparty.to_string(),
        direction,
        commodity,
        qty,
        unit,
        unpriced_qty: unpriced,
        market_month: MonthCode::from(month),
        pricing_point: point.to_string(),
        zone: zone.to_string(),
        basis,
        contract_local_price,
        freight,
        status,
        current_local_price: None,
        flat_price: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn lot(
    id: u32,
    commodity: Commodity,
    qty: Decimal,
    unit: UnitOfMeasure,
    elevator: &str,
    grade: &str,
    moisture: Decimal,
    protein: Decimal,
    intake_date: Timestamp,
    carrying_price: Decimal,
    month: &str,
    point: &str,
    zone: &str,
) -> InventoryLot {
    InventoryLot {
        id: LotId(id),
        commodity,
        qty,
        unit,
        elevator: elevator.to_string(),
        grade: grade.to_string(),
        moisture_pct: moisture,
        protein_pct: protein,
        intake_date,
        carrying_price,
        market_month: MonthCode::from(month),
        pricing_point: point.to_string(),
        zone: zone.to_string(),
    }
}

fn position(id: u32, commodity: Commodity, month: &str, qty: Decimal, avg: Decimal) -> FuturesPosition {
    FuturesPosition {
        id: PositionId(id),
        symbol: commodity.futures_symbol().to_string(),
        commodity,
        contract_month: MonthCode::from(month),
        qty,
        avg_price: avg,
        updated_at: Timestamp::from_millis(0),
    }
}

fn ticket(
    id: u32,
    trade_id: u32,
    commodity: Commodity,
    qty: Decimal,
    unit: UnitOfMeasure,
    elevator: &str,
    zone: &str,
    status: TicketStatus,
) -> OpenTicket {
    OpenTicket {
        id: TicketId(id),
        trade_id: TradeId(trade_id),
        commodity,
        qty,
        unit,
        elevator: elevator.to_string(),
        zone: zone.to_string(),
        status,
    }
}

fn prairie_pricing() -> PricingTables {
    let mut t = PricingTables::default();
    t.set_board_price(Commodity::Soybeans, MonthCode::from("Nov-24"), dec!(13.20));
    t.set_board_price(Commodity::Soybeans, MonthCode::from("Jan-25"), dec!(13.35));
    t.set_board_price(Commodity::Corn, MonthCode::from("Dec-24"), dec!(4.55));
    t.set_board_price(Commodity::Corn, MonthCode::from("Mar-25"), dec!(4.68));
    t.set_board_price(Commodity::Wheat, MonthCode::from("Mar-25"), dec!(5.95));
    t.set_board_price(Commodity::Canola, MonthCode::from("Nov-24"), dec!(615.00));
    t.set_board_price(Commodity::Canola, MonthCode::from("Jan-25"), dec!(621.50));
    t.set_point_adjustment("Decatur", Commodity::Soybeans, dec!(0.10));
    t.set_point_adjustment("Decatur", Commodity::Corn, dec!(0.05));
    t.set_point_adjustment("Cedar Rapids", Commodity::Corn, dec!(0.04));
    t.set_point_adjustment("Thunder Bay", Commodity::Wheat, dec!(-0.08));
    t.set_point_adjustment("Thunder Bay", Commodity::Canola, dec!(-2.50));
    t.set_zone_spread("Z-East", Commodity::Soybeans, dec!(0.05));
    t.set_zone_spread("Z-East", Commodity::Corn, dec!(0.02));
    t.set_zone_spread("Z-West", Commodity::Wheat, dec!(-0.03));
    t.set_zone_spread("Z-West", Commodity::Canola, dec!(1.25));
    t
}

fn prairie() -> BookState {
    let now = Timestamp::now();
    let pricing = prairie_pricing();
    BookState {
        label: "Prairie Origination Book".to_string(),
        bulletins: vec![
            "Rail embargo lifted on the northern corridor; freight reserves under review".to_string(),
            "Crush margins firming; canola basis bids widened at Thunder Bay".to_string(),
        ],
        trades: vec![
            trade(
                1001,
                "Heartland Growers Co-op",
                Direction::Purchase,
                Commodity::Soybeans,
                dec!(850000),
                UnitOfMeasure::Bushels,
                Some(dec!(600000)),
                "Nov-24",
                "Decatur",
                "Z-East",
                dec!(0.20),
                dec!(13.10),
                FreightAccrual {
                    reserved: dec!(42000),
                    actual: None,
                    zone_variance: Decimal::ZERO,
                },
                TradeStatus::Open,
            ),
            trade(
                1002,
                "Gulf Export Terminal",
                Direction::Sale,
                Commodity::Corn,
                dec!(500000),
                UnitOfMeasure::Bushels,
                Some(dec!(500000)),
                "Dec-24",
                "Cedar Rapids",
                "Z-East",
                dec!(0.15),
                dec!(4.70),
                FreightAccrual {
                    reserved: dec!(30000),
                    actual: Some(dec!(28500)),
                    zone_variance: dec!(-750),
                },
                TradeStatus::Working,
            ),
            trade(
                1003,
                "Prairie Pool Elevators",
                Direction::Purchase,
                Commodity::Wheat,
                dec!(240000),
                UnitOfMeasure::Bushels,
                Some(dec!(180000)),
                "Mar-25",
                "Thunder Bay",
                "Z-West",
                dec!(0.25),
                dec!(5.80),
                FreightAccrual {
                    reserved: dec!(15000),
                    actual: None,
                    zone_variance: Decimal::ZERO,
                },
                TradeStatus::Open,
            ),
            trade(
                1004,
                "Viterra Crush Plant",
                Direction::Purchase,
                Commodity::Canola,
                dec!(12000),
                UnitOfMeasure::Tonnes,
                None,
                "Nov-24",
                "Thunder Bay",
                "Z-West",
                dec!(8.00),
                dec!(612.00),
                FreightAccrual {
                    reserved: dec!(22000),
                    actual: Some(dec!(21000)),
                    zone_variance: dec!(400),
                },
                TradeStatus::Confirmed,
            ),
        ],
        inventory_lots: vec![
            lot(
                1,
                Commodity::Soybeans,
                dec!(220000),
                UnitOfMeasure::Bushels,
                "Decatur East",
                "No.1",
                dec!(12.5),
                dec!(34.8),
                days_ago(now, 10),
                dec!(12.95),
                "Nov-24",
                "Decatur",
                "Z-East",
            ),
            lot(
                2,
                Commodity::Corn,
                dec!(340000),
                UnitOfMeasure::Bushels,
                "Cedar Rapids Main",
                "No.2",
                dec!(14.0),
                dec!(8.1),
                days_ago(now, 25),
                dec!(4.40),
                "Dec-24",
                "Cedar Rapids",
                "Z-East",
            ),
            lot(
                3,
                Commodity::Corn,
                dec!(150000),
                UnitOfMeasure::Bushels,
                "Decatur East",
                "No.2",
                dec!(14.8),
                dec!(7.9),
                days_ago(now, 48),
                dec!(4.52),
                "Mar-25",
                "Decatur",
                "Z-East",
            ),
            lot(
                4,
                Commodity::Wheat,
                dec!(90000),
                UnitOfMeasure::Bushels,
                "Thunder Bay Port",
                "CWRS 13.5",
                dec!(13.2),
                dec!(13.5),
                days_ago(now, 95),
                dec!(6.05),
                "Mar-25",
                "Thunder Bay",
                "Z-West",
            ),
        ],
        futures_positions: vec![
            position(1, Commodity::Soybeans, "Nov-24", dec!(-60), dec!(13.05)),
            position(2, Commodity::Corn, "Dec-24", dec!(40), dec!(4.60)),
        ],
        pricing_seed: pricing.clone(),
        pricing,
        adjustments: Adjustments {
            other: dec!(180000),
            working_capital_base: dec!(2500000),
            futures_realized: Decimal::ZERO,
        },
        open_tickets: vec![
            ticket(
                1,
                1001,
                Commodity::Soybeans,
                dec!(45000),
                UnitOfMeasure::Bushels,
                "Decatur East",
                "Z-East",
                TicketStatus::Open,
            ),
            ticket(
                2,
                1002,
                Commodity::Corn,
                dec!(30000),
                UnitOfMeasure::Bushels,
                "Cedar Rapids Main",
                "Z-East",
                TicketStatus::Open,
            ),
            ticket(
                3,
                1001,
                Commodity::Soybeans,
                dec!(20000),
                UnitOfMeasure::Bushels,
                "Decatur East",
                "Z-East",
                TicketStatus::Matched,
            ),
        ],
    }
}

fn gulf_pricing() -> PricingTables {
    let mut t = PricingTables::default();
    t.set_board_price(Commodity::Soybeans, MonthCode::from("Jan-25"), dec!(13.42));
    t.set_board_price(Commodity::Soybeans, MonthCode::from("Mar-25"), dec!(13.55));
    t.set_board_price(Commodity::Corn, MonthCode::from("Mar-25"), dec!(4.72));
    t.set_board_price(Commodity::Wheat, MonthCode::from("May-25"), dec!(6.10));
    t.set_point_adjustment("NOLA", Commodity::Soybeans, dec!(0.35));
    t.set_point_adjustment("NOLA", Commodity::Corn, dec!(0.28));
    t.set_point_adjustment("NOLA", Commodity::Wheat, dec!(0.22));
    t.set_zone_spread("Z-Gulf", Commodity::Soybeans, dec!(0.08));
    t.set_zone_spread("Z-Gulf", Commodity::Corn, dec!(0.06));
    t
}

fn gulf() -> BookState {
    let now = Timestamp::now();
    let pricing = gulf_pricing();
    BookState {
        label: "Gulf Export Book".to_string(),
        bulletins: vec![
            "Barge freight easing on lower river stages".to_string(),
            "Two panamax slots uncovered for March loading".to_string(),
        ],
        trades: vec![
            trade(
                2001,
                "Pacifico Trading SA",
                Direction::Sale,
                Commodity::Soybeans,
                dec!(1200000),
                UnitOfMeasure::Bushels,
                Some(dec!(900000)),
                "Jan-25",
                "NOLA",
                "Z-Gulf",
                dec!(0.45),
                dec!(13.95),
                FreightAccrual {
                    reserved: dec!(96000),
                    actual: None,
                    zone_variance: Decimal::ZERO,
                },
                TradeStatus::Nominated,
            ),
            trade(
                2002,
                "Alexandria Grain Board",
                Direction::Sale,
                Commodity::Corn,
                dec!(640000),
                UnitOfMeasure::Bushels,
                Some(dec!(640000)),
                "Mar-25",
                "NOLA",
                "Z-Gulf",
                dec!(0.34),
                dec!(5.02),
                FreightAccrual {
                    reserved: dec!(51000),
                    actual: Some(dec!(49300)),
                    zone_variance: dec!(1200),
                },
                TradeStatus::Open,
            ),
            trade(
                2003,
                "Delta Elevator LLC",
                Direction::Purchase,
                Commodity::Wheat,
                dec!(300000),
                UnitOfMeasure::Bushels,
                None,
                "May-25",
                "NOLA",
                "Z-Gulf",
                dec!(0.18),
                dec!(6.25),
                FreightAccrual {
                    reserved: dec!(18500),
                    actual: None,
                    zone_variance: Decimal::ZERO,
                },
                TradeStatus::Open,
            ),
        ],
        inventory_lots: vec![
            lot(
                10,
                Commodity::Soybeans,
                dec!(410000),
                UnitOfMeasure::Bushels,
                "Myrtle Grove",
                "No.1",
                dec!(12.8),
                dec!(35.1),
                days_ago(now, 18),
                dec!(13.30),
                "Jan-25",
                "NOLA",
                "Z-Gulf",
            ),
            lot(
                11,
                Commodity::Corn,
                dec!(275000),
                UnitOfMeasure::Bushels,
                "Destrehan",
                "No.2",
                dec!(14.3),
                dec!(8.0),
                days_ago(now, 70),
                dec!(4.61),
                "Mar-25",
                "NOLA",
                "Z-Gulf",
            ),
        ],
        futures_positions: vec![position(10, Commodity::Soybeans, "Jan-25", dec!(120), dec!(13.38))],
        pricing_seed: pricing.clone(),
        pricing,
        adjustments: Adjustments {
            other: dec!(-95000),
            working_capital_base: dec!(4100000),
            futures_realized: Decimal::ZERO,
        },
        open_tickets: vec![ticket(
            10,
            2001,
            Commodity::Soybeans,
            dec!(60000),
            UnitOfMeasure::Bushels,
            "Myrtle Grove",
            "Z-Gulf",
            TicketStatus::Open,
        )],
    }
}
