#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtjson::error::Result;
use nbtjson::{from_bytes_with_opts, DecodeOpts, Value};

fuzz_target!(|data: &[u8]| {
    let value: Result<Value> = from_bytes_with_opts(data, DecodeOpts::new().max_seq_len(100));
    if let Ok(v) = value {
        let _json = serde_json::to_string(&v).unwrap();
    }
});
