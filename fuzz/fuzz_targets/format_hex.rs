#![no_main]

use hyperfuel_format::{Data, Hash, Hex, UInt};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(hash) = Hash::decode_hex(data) {
        assert_eq!(Hash::decode_hex(&hash.encode_hex()).unwrap(), hash);
    }

    if let Ok(bytes) = Data::decode_hex(data) {
        assert_eq!(Data::decode_hex(&bytes.encode_hex()).unwrap(), bytes);
    }

    if let Ok(num) = UInt::decode_hex(data) {
        assert_eq!(UInt::decode_hex(&num.encode_hex()).unwrap(), num);
    }
});
