//! Audits every `*.xml` file in a folder and writes the CSV report next to it.
//!
//! ```text
//! RUST_LOG=nfe_auditor=debug cargo run --example audit_folder -- ./notas
//! ```

use std::path::PathBuf;

use nfe_auditor::core::*;
use nfe_auditor::export::to_csv;
use nfe_auditor::nfe::process_paths;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| ".".into()));
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .expect("readable directory")
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
        })
        .collect();
    paths.sort();

    let results = process_paths(&paths);
    println!(
        "{} notas processadas, {} com erro",
        results.len(),
        results.error_count()
    );

    let config = AuditConfig::default();
    let state = ViewState::new(&config);
    let view = build_view(&results, &state);

    for record in view.visible_rows() {
        println!(
            "{:>10}  {:>14}  {}",
            record.invoice_number,
            money::format_brl(record.net_payment),
            record.financial_status
        );
    }
    if view.has_more() {
        println!("... {} mais", view.rows.len() - view.visible_rows().len());
    }

    let s = &view.summary;
    println!("\nTOTAL ({} notas)", s.count);
    println!("  vProd:        {}", money::format_brl(s.product_total));
    println!("  desconto:     {}", money::format_brl(s.discount));
    println!("  vNF:          {}", money::format_brl(s.invoice_total));
    println!("  pago bruto:   {}", money::format_brl(s.gross_payment));
    println!("  troco:        {}", money::format_brl(s.change_given));
    println!("  pago líquido: {}", money::format_brl(s.net_payment));

    match to_csv(view.rows.iter().copied(), &config) {
        Ok(export) => {
            let out = dir.join(&export.file_name);
            std::fs::write(&out, export.content).expect("write CSV");
            println!("\nCSV gravado em {}", out.display());
        }
        Err(e) => println!("\nSem exportação: {e}"),
    }
}
