//! End-to-end order scenarios: text lines in, receipt totals out.

use salestax_core::{
    render_receipt, CoreError, Invoice, ItemLineParser, Money, NumberFormat, TaxRules,
};

fn invoice_for(lines: &[&str]) -> Invoice {
    let items = ItemLineParser::new().parse_all(lines).expect("order lines parse");
    Invoice::build(items, &TaxRules::default()).expect("invoice builds")
}

fn single_line(line: &str) -> (Money, Money) {
    let invoice = invoice_for(&[line]);
    (invoice.total_tax(), invoice.total_amount())
}

#[test]
fn book_is_exempt() {
    assert_eq!(
        single_line("1 book at 12.49"),
        (Money::zero(), Money::from_cents(1249))
    );
}

#[test]
fn music_cd_pays_basic_tax() {
    assert_eq!(
        single_line("1 music CD at 14.99"),
        (Money::from_cents(150), Money::from_cents(1649))
    );
}

#[test]
fn imported_chocolates_pay_duty_only() {
    assert_eq!(
        single_line("1 imported box of chocolates at 10.00"),
        (Money::from_cents(50), Money::from_cents(1050))
    );
}

#[test]
fn imported_perfume_pays_both() {
    assert_eq!(
        single_line("1 imported bottle of perfume at 47.50"),
        (Money::from_cents(715), Money::from_cents(5465))
    );
}

#[test]
fn quantity_multiplies_unit_tax() {
    assert_eq!(
        single_line("2 imported bottles of perfume at 47.50"),
        (Money::from_cents(1430), Money::from_cents(10930))
    );
}

#[test]
fn first_order() {
    let invoice = invoice_for(&[
        "1 book at 12.49",
        "1 music CD at 14.99",
        "1 chocolate bar at 0.85",
    ]);
    assert_eq!(invoice.total_tax(), Money::from_cents(150));
    assert_eq!(invoice.total_amount(), Money::from_cents(2983));
}

#[test]
fn third_order_prints_like_the_reference_output() {
    let invoice = invoice_for(&[
        "1 imported bottle of perfume at 27.99",
        "1 bottle of perfume at 18.99",
        "1 packet of headache pills at 9.75",
        "1 box of imported chocolates at 11.25",
    ]);

    assert_eq!(
        render_receipt(&invoice, &NumberFormat::default()),
        [
            "1 imported bottle of perfume: 32.19",
            "1 bottle of perfume: 20.89",
            "1 packet of headache pills: 9.75",
            "1 imported box of chocolates: 11.85",
            "Sales Taxes: 6.70",
            "Total: 74.68",
        ]
    );
}

#[test]
fn empty_order_is_invalid_argument() {
    let err = Invoice::build(Vec::new(), &TaxRules::default()).unwrap_err();
    assert!(matches!(err, CoreError::InvalidArgument(_)));
}

#[test]
fn fractional_quantity_does_not_match() {
    let parsed = ItemLineParser::new().parse("1.5 books at 12.49").unwrap();
    assert!(parsed.is_none());
}

#[test]
fn unparsable_line_fails_the_order() {
    let err = ItemLineParser::new()
        .parse_all(["1 book at 12.49", "1 at 12.49"])
        .unwrap_err();
    assert!(matches!(err, CoreError::UnparsableLine { index: 1, .. }));
}

#[test]
fn oversized_line_amount_fails_the_order() {
    let err = ItemLineParser::new()
        .parse_all(["2 books at 79228162514264337593543950335"])
        .unwrap_err();
    assert!(matches!(err, CoreError::UnparsableLine { index: 0, .. }));
}

#[test]
fn largest_price_renders_without_overflow() {
    let invoice = invoice_for(&["1 book at 79228162514264337593543950335"]);
    let receipt = render_receipt(&invoice, &NumberFormat::default());

    assert!(receipt[0].starts_with("1 book: 79228162514264337593543950335"));
    assert_eq!(receipt[1], "Sales Taxes: 0.00");
    assert!(receipt[2].starts_with("Total: 79228162514264337593543950335"));
}
