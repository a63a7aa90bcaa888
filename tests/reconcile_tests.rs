use nfe_auditor::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn amounts(product: Decimal, total: Decimal, paid: Decimal, change: Decimal) -> DeclaredAmounts {
    DeclaredAmounts {
        product_total: product,
        invoice_total: total,
        gross_payment: paid,
        declared_change: change,
    }
}

fn record(a: DeclaredAmounts) -> InvoiceRecord {
    InvoiceRecord::from_declared(InvoiceHeader::default(), a, Vec::new(), "nota.xml", Vec::new())
}

// --- Worked examples ---

#[test]
fn example_balanced() {
    let r = record(amounts(dec!(100.00), dec!(100.00), dec!(100.00), dec!(0.00)));
    assert_eq!(r.discount, dec!(0));
    assert_eq!(r.net_payment, dec!(100.00));
    assert_eq!(r.financial_status.label(), "NORMAL");
}

#[test]
fn example_discount() {
    let r = record(amounts(dec!(100.00), dec!(90.00), dec!(90.00), dec!(0.00)));
    assert_eq!(r.discount, dec!(10.00));
    assert_eq!(r.financial_status.label(), "DESCONTO (R$ 10,00)");
}

#[test]
fn example_system_fee_with_tip() {
    let r = record(amounts(dec!(50.00), dec!(50.00), dec!(50.99), dec!(0.99)));
    assert_eq!(r.change_given, dec!(0));
    assert_eq!(r.change_note.as_deref(), Some("(Taxa 0.99)"));
    assert_eq!(r.net_payment, dec!(50.99));
    assert_eq!(
        r.financial_status.label(),
        "GORJETA/TAXA (R$ 0,99) + TAXA SISTEMA (0.99)"
    );
}

// --- Fragment order ---

#[test]
fn all_fragments_in_fixed_order() {
    // discount 20, paid 85.99 net of fee vs total 80 → 5.99 over
    let r = record(amounts(dec!(100.00), dec!(80.00), dec!(85.99), dec!(0.99)));
    assert_eq!(
        r.financial_status.fragments(),
        &[
            StatusFragment::Discount(dec!(20.00)),
            StatusFragment::TipOrFee(dec!(5.99)),
            StatusFragment::SystemFee,
        ]
    );
    assert_eq!(
        r.financial_status.label(),
        "DESCONTO (R$ 20,00) + GORJETA/TAXA (R$ 5,99) + TAXA SISTEMA (0.99)"
    );
}

#[test]
fn system_fee_alone() {
    // fee absorbed, net equals the invoice total
    let r = record(amounts(dec!(10.00), dec!(10.99), dec!(10.99), dec!(0.99)));
    assert_eq!(r.financial_status.label(), "TAXA SISTEMA (0.99)");
    assert!(r.financial_status.has_system_fee());
    assert!(!r.financial_status.has_tip_or_fee());
}

#[test]
fn discount_with_tip() {
    let r = record(amounts(dec!(1500.00), dec!(1200.00), dec!(1320.00), dec!(0)));
    assert_eq!(
        r.financial_status.label(),
        "DESCONTO (R$ 300,00) + GORJETA/TAXA (R$ 120,00)"
    );
}

// --- Boundaries ---

#[test]
fn underpayment_is_not_flagged() {
    let r = record(amounts(dec!(100.00), dec!(100.00), dec!(80.00), dec!(0)));
    assert!(r.financial_status.is_normal());
    assert_eq!(r.net_payment, dec!(80.00));
}

#[test]
fn one_cent_is_noise_two_cents_is_not() {
    let one = record(amounts(dec!(100.01), dec!(100.00), dec!(100.01), dec!(0)));
    assert!(one.financial_status.is_normal());
    assert_eq!(one.discount, dec!(0.01));

    let two = record(amounts(dec!(100.02), dec!(100.00), dec!(100.02), dec!(0)));
    assert_eq!(
        two.financial_status.label(),
        "DESCONTO (R$ 0,02) + GORJETA/TAXA (R$ 0,02)"
    );
}

#[test]
fn zero_and_real_change_are_not_system_fee() {
    for change in [dec!(0.00), dec!(2.50), dec!(0.98), dec!(1.00)] {
        let r = record(amounts(dec!(10), dec!(10), dec!(10) + change, change));
        assert_eq!(r.change_given, change);
        assert_eq!(r.change_note, None);
        assert!(!r.financial_status.has_system_fee(), "change {change}");
        assert_eq!(r.net_payment, dec!(10));
    }
}

#[test]
fn change_larger_than_payment_gives_negative_net() {
    let r = record(amounts(dec!(10), dec!(10), dec!(5), dec!(7.50)));
    assert_eq!(r.net_payment, dec!(-2.50));
    assert!(r.financial_status.is_normal());
}

#[test]
fn classify_is_pure() {
    let input = ReconciliationInput {
        product_total: dec!(30),
        invoice_total: dec!(25),
        discount: derive_discount(dec!(30), dec!(25)),
        gross_payment: dec!(30.99),
        declared_change: dec!(0.99),
    };
    assert_eq!(classify(&input), classify(&input));
}

#[test]
fn record_serializes_status_fragments() {
    let r = record(amounts(dec!(100.00), dec!(90.00), dec!(90.00), dec!(0.00)));
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["parse_status"], "OK");
    assert_eq!(json["discount"], "10.00");
    assert_eq!(json["financial_status"]["fragments"][0]["kind"], "Discount");
    let back: InvoiceRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, r);
}
