use nfe_auditor::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn show(title: &str, product_total: Decimal, invoice_total: Decimal, gross: Decimal, change: Decimal) {
    let outcome = classify(&ReconciliationInput {
        product_total,
        invoice_total,
        discount: derive_discount(product_total, invoice_total),
        gross_payment: gross,
        declared_change: change,
    });

    println!("=== {title} ===");
    println!("  vProd {product_total}  vNF {invoice_total}  vPag {gross}  vTroco {change}");
    println!(
        "  troco real: {}{}",
        money::format_brl(outcome.change_given),
        outcome.change_note.map(|n| format!(" {n}")).unwrap_or_default()
    );
    println!("  pago líquido: {}", money::format_brl(outcome.net_payment));
    println!("  situação: {}\n", outcome.financial_status);
}

fn main() {
    show("Balanced", dec!(100.00), dec!(100.00), dec!(100.00), dec!(0.00));
    show("Discount", dec!(100.00), dec!(90.00), dec!(90.00), dec!(0.00));
    show("System fee", dec!(50.00), dec!(50.00), dec!(50.99), dec!(0.99));
    show("Real change", dec!(80.00), dec!(80.00), dec!(100.00), dec!(20.00));
    show("Everything", dec!(100.00), dec!(80.00), dec!(85.99), dec!(0.99));
}
