#![no_main]

use asmident::{extract_name, extract_version, ComponentIdentity};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(identity) = std::str::from_utf8(data) {
        let _ = extract_name(identity);
        let _ = extract_version(identity);
        let _ = ComponentIdentity::parse(identity);
    }
});
