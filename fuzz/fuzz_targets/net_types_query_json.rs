#![no_main]

use hyperfuel_net_types::Query;
use libfuzzer_sys::fuzz_target;

// Any query that parses must survive a json round trip, and validation must not panic
fuzz_target!(|data: &[u8]| {
    let Ok(query) = serde_json::from_slice::<Query>(data) else {
        return;
    };

    let json = serde_json::to_vec(&query).unwrap();
    let out: Query = serde_json::from_slice(&json).unwrap();
    assert_eq!(out, query, "json should read to the same value as the query");

    if let Ok(validated) = query.validate() {
        let resumed = validated.with_from_block(validated.from_block);
        assert_eq!(serde_json::to_vec(&resumed).unwrap(), json);
    }
});
