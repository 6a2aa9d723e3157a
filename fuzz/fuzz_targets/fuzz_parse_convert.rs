// Fuzz target feeding arbitrary text through parsing and rendering.
#![no_main]

use libfuzzer_sys::fuzz_target;
use spoken_time_rules::{BritishTimeConverter, TimeConverter};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let converter = BritishTimeConverter::new();
    match converter.parse(text) {
        Ok(time) => {
            assert!(time.is_valid());
            let spoken = converter.convert(&time).expect("valid times always render");
            assert!(!spoken.is_empty());
        }
        Err(err) => assert!(err.is_client_error()),
    }
});
