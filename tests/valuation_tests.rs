//! End-to-end valuation scenarios over seeded books.
//!
//! The first group pins the arithmetic of a single-trade book down to the cent;
//! the rest cover breakdown ordering, aging buckets, and the uncapped-vs-capped
//! exposure views.

use grainbook_core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn empty_book(label: &str) -> BookState {
    BookState {
        label: label.to_string(),
        bulletins: Vec::new(),
        trades: Vec::new(),
        inventory_lots: Vec::new(),
        futures_positions: Vec::new(),
        pricing: PricingTables::default(),
        pricing_seed: PricingTables::default(),
        adjustments: Adjustments::default(),
        open_tickets: Vec::new(),
    }
}

fn soybean_trade(qty: Decimal, unpriced: Decimal) -> Trade {
    Trade {
        id: TradeId(1),
        counterparty: "Test Counterparty".to_string(),
        direction: Direction::Purchase,
        commodity: Commodity::Soybeans,
        qty,
        unit: UnitOfMeasure::Bushels,
        unpriced_qty: Some(unpriced),
        market_month: MonthCode::from("Nov-24"),
        pricing_point: "P1".to_string(),
        zone: "Z1".to_string(),
        basis: dec!(0.20),
        contract_local_price: dec!(13.00),
        freight: FreightAccrual {
            reserved: Decimal::ZERO,
            actual: None,
            zone_variance: Decimal::ZERO,
        },
        status: TradeStatus::Open,
        current_local_price: None,
        flat_price: None,
    }
}

/// One purchase of a million bushels against a 13.20 board, 0.10 point, 0.05
/// zone stack at a 13.00 contract price.
fn million_bushel_book() -> BookState {
    let mut book = empty_book("Million Bushel Book");
    let mut pricing = PricingTables::default();
    pricing.set_board_price(Commodity::Soybeans, MonthCode::from("Nov-24"), dec!(13.20));
    pricing.set_point_adjustment("P1", Commodity::Soybeans, dec!(0.10));
    pricing.set_zone_spread("Z1", Commodity::Soybeans, dec!(0.05));
    book.pricing_seed = pricing.clone();
    book.pricing = pricing;
    book.trades.push(soybean_trade(dec!(1000000), dec!(1000000)));
    book
}

#[test]
fn single_trade_book_values_to_the_cent() {
    let mut engine = ValuationEngine::new();
    let mut book = million_bushel_book();
    let result = engine.evaluate(&mut book, Timestamp::from_millis(0));

    let a = result.aggregates;
    assert_eq!(a.basis_pl, dec!(0.35));
    assert_eq!(a.futures_pl, Decimal::ZERO);
    assert_eq!(a.freight_var, Decimal::ZERO);
    assert_eq!(a.other_pl, Decimal::ZERO);
    assert_eq!(a.net_pl, dec!(0.35));
    assert_eq!(a.hedge_coverage, Decimal::ZERO);

    let bucket = result.exposure(Commodity::Soybeans);
    assert_eq!(bucket.physical, dec!(1000000));
    assert_eq!(bucket.hedged, Decimal::ZERO);

    // derived fields written back: local 13.35, flat 13.55
    assert_eq!(book.trades[0].current_local_price, Some(dec!(13.35)));
    assert_eq!(book.trades[0].flat_price, Some(dec!(13.55)));
}

#[test]
fn hedging_half_the_book_yields_fifty_percent_coverage() {
    let mut store = StateStore::from_book("test", million_bushel_book());
    store
        .hedge_exposure(Commodity::Soybeans, dec!(50), MonthCode::from("Nov-24"))
        .unwrap();

    // round(1,000,000 * 0.5 / 5000) contracts, short against long physical
    let position = &store.positions()[0];
    assert_eq!(position.qty, dec!(-100));
    assert_eq!(position.symbol, "ZS");

    let bucket = store.exposure(Commodity::Soybeans);
    assert_eq!(bucket.physical, dec!(1000000));
    assert_eq!(bucket.hedged, dec!(500000));
    assert_eq!(store.aggregates().hedge_coverage, dec!(50.0));
}

#[test]
fn zero_physical_book_reports_zero_coverage() {
    let mut engine = ValuationEngine::new();
    let mut book = empty_book("Flat Book");
    let result = engine.evaluate(&mut book, Timestamp::from_millis(0));
    assert_eq!(result.aggregates.hedge_coverage, Decimal::ZERO);
    assert_eq!(result.aggregates.net_pl, Decimal::ZERO);
}

#[test]
fn overhedged_book_caps_coverage_and_keeps_raw_bucket() {
    // a short three times the physical size, placed by hand
    let mut book = million_bushel_book();
    book.futures_positions.push(FuturesPosition {
        id: PositionId(7),
        symbol: "ZS".to_string(),
        commodity: Commodity::Soybeans,
        contract_month: MonthCode::from("Nov-24"),
        qty: dec!(-300),
        avg_price: dec!(13.20),
        updated_at: Timestamp::from_millis(0),
    });
    let store = StateStore::from_book("test", book);

    let raw = store.exposure(Commodity::Soybeans);
    assert_eq!(raw.hedged, dec!(1500000));
    assert!(raw.hedged > raw.physical.abs(), "raw bucket stays uncapped");
    assert_eq!(raw.hedged_display(), dec!(1000000));
    assert_eq!(store.aggregates().hedge_coverage, dec!(100.0));

    let display = store.display_exposures();
    let (_, capped) = display
        .iter()
        .find(|(c, _)| *c == Commodity::Soybeans)
        .unwrap();
    assert_eq!(capped.hedged, dec!(1000000));
}

#[test]
fn freight_variance_uses_actual_when_present() {
    let mut book = million_bushel_book();
    book.trades[0].freight = FreightAccrual {
        reserved: dec!(500000),
        actual: Some(dec!(420000)),
        zone_variance: dec!(20000),
    };
    let mut engine = ValuationEngine::new();
    let result = engine.evaluate(&mut book, Timestamp::from_millis(0));
    // (500000 - 420000 + 20000) / 1e6 = 0.10
    assert_eq!(result.aggregates.freight_var, dec!(0.10));
}

#[test]
fn sale_direction_flips_both_exposure_and_basis_sign() {
    let mut book = million_bushel_book();
    book.trades[0].direction = Direction::Sale;
    let mut engine = ValuationEngine::new();
    let result = engine.evaluate(&mut book, Timestamp::from_millis(0));
    assert_eq!(result.exposure(Commodity::Soybeans).physical, dec!(-1000000));
    assert_eq!(result.aggregates.basis_pl, dec!(-0.35));
}

#[test]
fn inventory_pass_feeds_other_pl_and_working_capital() {
    let mut book = million_bushel_book();
    book.trades.clear();
    book.adjustments.other = dec!(250000);
    book.adjustments.working_capital_base = dec!(1000000);
    book.inventory_lots.push(InventoryLot {
        id: LotId(1),
        commodity: Commodity::Soybeans,
        qty: dec!(200000),
        unit: UnitOfMeasure::Bushels,
        elevator: "E1".to_string(),
        grade: "No.1".to_string(),
        moisture_pct: dec!(12.5),
        protein_pct: dec!(34.0),
        intake_date: Timestamp::from_millis(0),
        carrying_price: dec!(13.10),
        market_month: MonthCode::from("Nov-24"),
        pricing_point: "P1".to_string(),
        zone: "Z1".to_string(),
    });
    let mut engine = ValuationEngine::new();
    let result = engine.evaluate(&mut book, Timestamp::from_millis(0));

    // mtm = (13.35 - 13.10) * 200000 = 50000; other = 250000 + 50000
    assert_eq!(result.aggregates.other_pl, dec!(0.30));
    // wc = (1,000,000 + 13.35 * 200,000) / 1e6
    assert_eq!(result.aggregates.working_capital, dec!(3.67));
}

#[test]
fn month_breakdown_sorts_by_calendar_index_not_label() {
    let mut book = million_bushel_book();
    book.trades.clear();
    let day = 86_400_000i64;
    let now = Timestamp::from_millis(200 * day);
    for (i, (month, age_days, grade)) in [
        ("Nov-24", 5i64, "No.1"),
        ("Mar-25", 40, "No.2"),
        ("Jan-25", 100, "No.1"),
    ]
    .iter()
    .enumerate()
    {
        book.inventory_lots.push(InventoryLot {
            id: LotId(i as u32 + 1),
            commodity: Commodity::Soybeans,
            qty: dec!(1000),
            unit: UnitOfMeasure::Bushels,
            elevator: "E1".to_string(),
            grade: grade.to_string(),
            moisture_pct: dec!(13.0),
            protein_pct: dec!(34.0),
            intake_date: Timestamp::from_millis((200 - age_days) * day),
            carrying_price: dec!(13.00),
            market_month: MonthCode::from(*month),
            pricing_point: "P1".to_string(),
            zone: "Z1".to_string(),
        });
    }
    let mut engine = ValuationEngine::new();
    let result = engine.evaluate(&mut book, now);

    let months: Vec<&str> = result
        .inventory
        .by_month
        .iter()
        .map(|r| r.label.as_str())
        .collect();
    // calendar index ordering: Jan (1) < Mar (3) < Nov (11)
    assert_eq!(months, vec!["Jan-25", "Mar-25", "Nov-24"]);

    let aging: Vec<&str> = result
        .inventory
        .by_aging
        .iter()
        .map(|r| r.label.as_str())
        .collect();
    // encounter order of the buckets hit: 5d, 40d, 100d
    assert_eq!(aging, vec!["0-15d", "31-60d", "90d+"]);

    let quality: Vec<&str> = result
        .inventory
        .by_quality
        .iter()
        .map(|r| r.label.as_str())
        .collect();
    assert_eq!(quality, vec!["No.1", "No.2"]);
    // the two No.1 lots merged into one row
    assert_eq!(result.inventory.by_quality[0].value, dec!(2000));
}

#[test]
fn futures_realized_flows_into_futures_pl() {
    let mut book = million_bushel_book();
    book.trades.clear();
    book.adjustments.futures_realized = dec!(150000);
    let mut engine = ValuationEngine::new();
    let result = engine.evaluate(&mut book, Timestamp::from_millis(0));
    assert_eq!(result.aggregates.futures_pl, dec!(0.15));
}

#[test]
fn net_pl_is_the_sum_of_rounded_components() {
    let mut store = StateStore::new("prairie").unwrap();
    store.revert_pricing();
    let a = store.aggregates();
    assert_eq!(a.net_pl, a.basis_pl + a.futures_pl + a.freight_var + a.other_pl);
}
