#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let amount = nfe_auditor::core::money::parse_amount(Some(s));
        assert!(amount.scale() <= 2);
        let _ = nfe_auditor::core::money::format_brl(amount);
    }
});
