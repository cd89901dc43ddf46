#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz the STL decoding entry point
    // This exercises the binary/ASCII dispatch, the exact-size binary
    // decoder, and the tolerant text scan; any input must produce a typed
    // result, never a panic
    let _ = stlquote::parser::parse_stl(data);
});
