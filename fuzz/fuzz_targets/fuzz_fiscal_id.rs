#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Facade and typed parser must agree and never panic.
        let result = cadastro::validate_fiscal_id(s);
        let parsed = cadastro::FiscalId::parse(s);
        assert_eq!(result.is_valid(), parsed.is_ok());
        if let Ok(id) = parsed {
            assert_eq!(result.canonical(), Some(id.to_string().as_str()));
        }
    }
});
