#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(amount) = cadastro::locale::parse_brl(s) {
            // At most two decimal places survive parsing
            let shown = cadastro::locale::format_brl(amount);
            assert_eq!(cadastro::locale::parse_brl(&shown), Ok(amount));
        }
    }
});
