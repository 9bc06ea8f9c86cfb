use super::ui;
use crate::core::exchange::CurrencyInfo;
use comfy_table::Cell;

/// Renders the supported currencies with their rates against the base.
pub fn display_as_table(currencies: &[CurrencyInfo]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Currency"),
        ui::header_cell("Rate (per 1 USD)"),
    ]);

    for currency in currencies {
        table.add_row(vec![
            Cell::new(currency.code.code()),
            Cell::new(currency.description),
            ui::number_cell(format!("{:.4}", currency.rate)),
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text("Available currencies", ui::StyleType::Title),
        table
    )
}

/// Plain `CODE: description` listing used by the interactive shell.
pub fn display_as_list(currencies: &[CurrencyInfo]) -> String {
    let mut output = String::from("Available currencies:");
    for currency in currencies {
        output.push_str(&format!("\n{}: {}", currency.code, currency.description));
    }
    output
}
