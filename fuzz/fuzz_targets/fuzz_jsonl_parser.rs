#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Darf nur Fehler liefern, nie paniken
        let _ = xform_maker::jsonl::parse_xforms_jsonl(text);
    }
});
