//! Commodity book valuation walkthrough.
//!
//! Loads a demo snapshot and exercises every mutation command once, printing the
//! recomputed aggregates after each step.

use grainbook_core::*;
use rust_decimal_macros::dec;

fn main() {
    println!("Grainbook Core Engine Walkthrough");
    println!("Single Book, Recompute-on-Write, Full Command Surface\n");

    let mut store = match StateStore::new("prairie") {
        Ok(store) => store,
        Err(e) => {
            eprintln!("failed to load snapshot: {e}");
            std::process::exit(1);
        }
    };

    store.subscribe(Box::new(|event: &ChangeEvent| {
        println!(
            "  [event] {} -> net P&L {}M, coverage {}%",
            event.kind.reason(),
            event.aggregates.net_pl,
            event.aggregates.hedge_coverage
        );
    }));

    println!("Snapshot: {} ({})", store.snapshot_label(), store.snapshot_key());
    for line in store.bulletins() {
        println!("  bulletin: {line}");
    }
    print_aggregates(&store);

    println!("\nScenario 1: mark the soybean board up a dime");
    if let Err(e) = store.update_market_price(Commodity::Soybeans, MonthCode::from("Nov-24"), dec!(13.30)) {
        eprintln!("  rejected: {e}");
    }

    println!("\nScenario 2: hedge soybeans to 50% for Nov-24");
    if let Err(e) = store.hedge_exposure(Commodity::Soybeans, dec!(50), MonthCode::from("Nov-24")) {
        eprintln!("  rejected: {e}");
    }
    let bucket = store.exposure(Commodity::Soybeans);
    println!(
        "  soybeans exposure: physical {} / hedged {} (display {})",
        bucket.physical,
        bucket.hedged,
        bucket.hedged_display()
    );

    println!("\nScenario 3: roll the soybean hedge Nov-24 -> Jan-25");
    if let Err(e) = store.roll_month("ZS", MonthCode::from("Nov-24"), MonthCode::from("Jan-25")) {
        eprintln!("  rejected: {e}");
    }

    println!("\nScenario 4: match the first open scale ticket");
    if let Err(e) = store.match_ticket(TicketId(1)) {
        eprintln!("  rejected: {e}");
    }

    println!("\nScenario 5: revert pricing to the snapshot seed");
    store.revert_pricing();
    print_aggregates(&store);

    println!("\nScenario 6: switch to the gulf book");
    if let Err(e) = store.load_snapshot("gulf") {
        eprintln!("  rejected: {e}");
    }
    println!("Snapshot: {} ({})", store.snapshot_label(), store.snapshot_key());
    print_aggregates(&store);

    println!("\nWalkthrough complete. {} history points buffered.", store.pnl_history().len());
}

fn print_aggregates(store: &StateStore) {
    let a = store.aggregates();
    println!(
        "  basis {}M | futures {}M | freight {}M | other {}M | net {}M | coverage {}% | wc {}M",
        a.basis_pl, a.futures_pl, a.freight_var, a.other_pl, a.net_pl, a.hedge_coverage, a.working_capital
    );
    for (commodity, bucket) in store.display_exposures() {
        println!(
            "    {commodity}: physical {} hedged {}",
            bucket.physical, bucket.hedged
        );
    }
}
