#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any input yields a record; malformed XML only sets the error status.
    let record = nfe_auditor::nfe::extract_invoice(data, "fuzz.xml");
    let _ = record.financial_status.label();
});
