#![no_main]
use libfuzzer_sys::fuzz_target;
use nxml::{from_str_with_config, to_string, Config};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(doc) = from_str_with_config(s, Config::strict()) {
            let _ = from_str_with_config(&to_string(&doc), Config::strict());
        }
    }
});
