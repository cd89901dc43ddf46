#![no_main]

use libfuzzer_sys::fuzz_target;
use stlquote::{ProcessParameters, process_stl_file};

fuzz_target!(|data: &[u8]| {
    // Fuzz the complete pipeline: decode -> validate -> measure -> estimate
    // Mesh validation must catch any non-finite geometry the decoders let
    // through before the arithmetic runs on it
    let params = ProcessParameters::new(1.25);
    let _ = process_stl_file(data, &params);
});
