//! Writes priced orders to stdout as receipt text or JSON.

use std::io::Write;

use salestax_core::{render_receipt, Invoice, NumberFormat, ReceiptSummary};
use serde::Serialize;

use crate::error::CliError;
use crate::orders::Order;

/// Text layout: optional `INPUT:` echo, then one `Output N:` block per order.
pub fn write_text<W: Write>(
    out: &mut W,
    priced: &[(Order, Invoice)],
    echo_input: bool,
    format: &NumberFormat,
) -> Result<(), CliError> {
    if echo_input {
        writeln!(out, "INPUT:")?;
        for (order, _) in priced {
            writeln!(out)?;
            writeln!(out, "Input {}:", order.number)?;
            for line in &order.lines {
                writeln!(out, "{line}")?;
            }
        }
        writeln!(out)?;
        writeln!(out, "OUTPUT:")?;
    }

    for (order, invoice) in priced {
        writeln!(out)?;
        writeln!(out, "Output {}:", order.number)?;
        for line in render_receipt(invoice, format) {
            writeln!(out, "{line}")?;
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct JsonReceipt<'a> {
    order: usize,
    input: &'a [String],
    receipt: ReceiptSummary,
}

/// JSON layout: an array with one receipt per order.
pub fn write_json<W: Write>(
    out: &mut W,
    priced: &[(Order, Invoice)],
    format: &NumberFormat,
) -> Result<(), CliError> {
    let receipts: Vec<JsonReceipt<'_>> = priced
        .iter()
        .map(|(order, invoice)| JsonReceipt {
            order: order.number,
            input: &order.lines,
            receipt: ReceiptSummary::new(invoice, format),
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &receipts)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::sample_orders;
    use crate::price_orders;
    use salestax_core::TaxRules;

    fn priced() -> Vec<(Order, Invoice)> {
        price_orders(sample_orders(), &TaxRules::default()).unwrap()
    }

    #[test]
    fn test_text_output_matches_reference() {
        let mut buf = Vec::new();
        write_text(&mut buf, &priced(), false, &NumberFormat::default()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let expected = "\nOutput 1:\n1 book: 12.49\n1 music CD: 16.49\n1 chocolate bar: 0.85\nSales Taxes: 1.50\nTotal: 29.83\n\
\nOutput 2:\n1 imported box of chocolates: 10.50\n1 imported bottle of perfume: 54.65\nSales Taxes: 7.65\nTotal: 65.15\n\
\nOutput 3:\n1 imported bottle of perfume: 32.19\n1 bottle of perfume: 20.89\n1 packet of headache pills: 9.75\n1 imported box of chocolates: 11.85\nSales Taxes: 6.70\nTotal: 74.68\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_text_output_echoes_input() {
        let mut buf = Vec::new();
        write_text(&mut buf, &priced(), true, &NumberFormat::default()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("INPUT:\n\nInput 1:\n1 book at 12.49\n"));
        assert!(text.contains("\nOUTPUT:\n\nOutput 1:\n"));
    }

    #[test]
    fn test_json_output() {
        let mut buf = Vec::new();
        write_json(&mut buf, &priced(), &NumberFormat::default()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(3));
        assert_eq!(value[2]["order"], 3);
        assert_eq!(value[2]["receipt"]["sales_taxes"], "6.70");
        assert_eq!(value[2]["receipt"]["total"], "74.68");
        assert_eq!(value[1]["receipt"]["lines"][0]["imported"], true);
    }
}
