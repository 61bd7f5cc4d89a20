//! # Receipt Rendering
//!
//! Text and structured views of an [`Invoice`].
//!
//! ```text
//! 1 imported box of chocolates: 10.50
//! 1 imported bottle of perfume: 54.65
//! Sales Taxes: 7.65
//! Total: 65.15
//! ```
//!
//! Every amount goes through an explicit [`NumberFormat`]; nothing here
//! depends on host locale.

use serde::Serialize;

use crate::invoice::{Invoice, PricedLine};
use crate::money::NumberFormat;

/// Renders one receipt line: `<quantity> <description>: <total>`.
pub fn render_line(line: &PricedLine, format: &NumberFormat) -> String {
    let item = line.item();
    format!(
        "{} {}: {}",
        item.quantity(),
        item.display_description(),
        line.total_amount().format(format)
    )
}

/// Renders a full receipt: item lines, then `Sales Taxes` and `Total`.
pub fn render_receipt(invoice: &Invoice, format: &NumberFormat) -> Vec<String> {
    let mut out: Vec<String> = invoice
        .lines()
        .iter()
        .map(|line| render_line(line, format))
        .collect();

    out.push(format!("Sales Taxes: {}", invoice.total_tax().format(format)));
    out.push(format!("Total: {}", invoice.total_amount().format(format)));
    out
}

// =============================================================================
// Structured Receipt
// =============================================================================

/// One receipt line with its amounts already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub quantity: u32,
    pub description: String,
    pub imported: bool,
    pub tax: String,
    pub total: String,
}

/// A receipt ready to be emitted as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptSummary {
    pub lines: Vec<ReceiptLine>,
    pub sales_taxes: String,
    pub total: String,
}

impl ReceiptSummary {
    pub fn new(invoice: &Invoice, format: &NumberFormat) -> Self {
        let lines = invoice
            .lines()
            .iter()
            .map(|line| ReceiptLine {
                quantity: line.item().quantity(),
                description: line.item().display_description(),
                imported: line.item().is_imported(),
                tax: line.tax_amount().format(format),
                total: line.total_amount().format(format),
            })
            .collect();

        ReceiptSummary {
            lines,
            sales_taxes: invoice.total_tax().format(format),
            total: invoice.total_amount().format(format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ItemLineParser;
    use crate::tax::TaxRules;

    fn invoice(lines: &[&str]) -> Invoice {
        let items = ItemLineParser::new().parse_all(lines).unwrap();
        Invoice::build(items, &TaxRules::default()).unwrap()
    }

    #[test]
    fn test_render_line() {
        let fmt = NumberFormat::default();
        let cases = [
            ("1 book at 12.49", "1 book: 12.49"),
            ("1 music CD at 14.99", "1 music CD: 16.49"),
            ("1 chocolate bar at 0.85", "1 chocolate bar: 0.85"),
            ("1 imported box of chocolates at 11.25", "1 imported box of chocolates: 11.85"),
            ("1 box of imported chocolates at 11.25", "1 imported box of chocolates: 11.85"),
            ("2 music CDs at 14.99", "2 music CDs: 32.98"),
        ];

        for (input, expected) in cases {
            let invoice = invoice(&[input]);
            assert_eq!(invoice.len(), 1);
            assert_eq!(render_line(&invoice.lines()[0], &fmt), expected);
        }
    }

    #[test]
    fn test_render_receipt() {
        let receipt = render_receipt(
            &invoice(&[
                "1 imported box of chocolates at 10.00",
                "1 imported bottle of perfume at 47.50",
            ]),
            &NumberFormat::default(),
        );

        assert_eq!(
            receipt,
            [
                "1 imported box of chocolates: 10.50",
                "1 imported bottle of perfume: 54.65",
                "Sales Taxes: 7.65",
                "Total: 65.15",
            ]
        );
    }

    #[test]
    fn test_render_with_explicit_format() {
        let fmt = NumberFormat {
            fraction_digits: 2,
            decimal_separator: ',',
        };
        let receipt = render_receipt(&invoice(&["1 book at 12.49"]), &fmt);
        assert_eq!(receipt, ["1 book: 12,49", "Sales Taxes: 0,00", "Total: 12,49"]);
    }

    #[test]
    fn test_summary() {
        let summary = ReceiptSummary::new(
            &invoice(&["1 book at 12.49", "1 imported bottle of perfume at 27.99"]),
            &NumberFormat::default(),
        );

        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[1].description, "imported bottle of perfume");
        assert!(summary.lines[1].imported);
        assert_eq!(summary.lines[1].tax, "4.20");
        assert_eq!(summary.sales_taxes, "4.20");
        assert_eq!(summary.total, "44.68");
    }
}
