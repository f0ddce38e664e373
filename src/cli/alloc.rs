use super::ui;
use crate::core::{Clock, Portfolio};
use anyhow::Result;
use comfy_table::Cell;

fn display_symbol_table(portfolio: &Portfolio, now: i64) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Symbol"), ui::header_cell("Allocation")]);

    let mut percentages: Vec<_> = portfolio.percentages(now).into_iter().collect();
    // Largest holdings first, ties by symbol
    percentages.sort_by(|(a_symbol, a), (b_symbol, b)| b.cmp(a).then(a_symbol.cmp(b_symbol)));
    for (symbol, share) in percentages {
        table.add_row(vec![Cell::new(symbol), ui::percentage_cell(share)]);
    }
    table.to_string()
}

fn display_class_table(portfolio: &Portfolio, now: i64) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Asset Class"),
        ui::header_cell("Allocation"),
    ]);
    for (class, share) in portfolio.asset_classes(now) {
        table.add_row(vec![Cell::new(class.name()), ui::percentage_cell(share)]);
    }
    table.to_string()
}

pub fn display_allocation(portfolio: &Portfolio, now: i64) -> String {
    format!(
        "{}\n\n{}\n\n{}\n\n{}",
        ui::style_text("Allocation by Symbol", ui::StyleType::Title),
        display_symbol_table(portfolio, now),
        ui::style_text("Allocation by Asset Class", ui::StyleType::Title),
        display_class_table(portfolio, now),
    )
}

pub fn run(portfolio: &Portfolio, clock: &dyn Clock) -> Result<()> {
    if portfolio.assets().next().is_none() {
        println!(
            "{}",
            ui::style_text("No assets found in the ledger.", ui::StyleType::Subtle)
        );
    }
    println!("{}", display_allocation(portfolio, clock.now()));
    ui::print_separator();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AccountConfig, FixedClock};
    use rust_decimal_macros::dec;

    #[test]
    fn test_allocation_lists_symbols_and_every_class() {
        let mut portfolio = Portfolio::new();
        let mut asset = AccountConfig {
            name: "Vanguard Bond Fund".to_string(),
            investment: "VTIBX".to_string(),
            asset_class: Some("Fixed Income".to_string()),
            ..Default::default()
        }
        .build()
        .unwrap();
        asset.import_snapshot(100, dec!(2000));
        portfolio.import_account(asset);

        let output = display_allocation(&portfolio, 200);
        assert!(output.contains("VTIBX"));
        assert!(output.contains("100.0%"));
        for class in ["Cash Equivalents", "Equities", "Fixed Income", "Real Estate", "Commodities"] {
            assert!(output.contains(class), "missing {class}");
        }
    }

    #[test]
    fn test_run_with_an_empty_portfolio() {
        assert!(run(&Portfolio::new(), &FixedClock(0)).is_ok());
    }
}
