#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtjson::{from_bytes_with_opts, from_reader_with_opts, DecodeOpts, RootMode};

fuzz_target!(|data: &[u8]| {
    let opts = DecodeOpts::new().root(RootMode::Named).max_seq_len(100);

    // Slice and reader input must agree on the result. Compared as JSON since
    // NaN floats never compare equal.
    let from_slice = from_bytes_with_opts(data, opts);
    let from_reader = from_reader_with_opts(data, opts);
    match (from_slice, from_reader) {
        (Ok(a), Ok(b)) => assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        ),
        (Err(a), Err(b)) => assert_eq!(a.kind(), b.kind()),
        (a, b) => panic!("slice gave {:?}, reader gave {:?}", a, b),
    }
});
