// Checks that values shaped the way hyperfuel servers send them deserialize
// into the format types.

use hyperfuel_format::*;
use serde::Deserialize;

#[derive(Deserialize)]
struct InputRecord {
    tx_id: Hash,
    block_height: BlockHeight,
    input_type: InputType,
    owner: Option<Address>,
    amount: Option<UInt>,
    asset_id: Option<AssetId>,
    predicate: Option<Data>,
}

#[test]
fn test_input_record_deserialize() {
    let json = r#"{
        "tx_id": "0x94a8e322ff02baeb1d625e83dadf5ec88870ac801da370d4b15bbd5f0af01169",
        "block_height": 1427625,
        "input_type": 0,
        "owner": "0x94a8e322ff02baeb1d625e83dadf5ec88870ac801da370d4b15bbd5f0af01169",
        "amount": "18446744073709551615",
        "asset_id": "0x2a0d0ed9d2217ec7f32dcd9a1902ce2a66d68437aeff84e3a3cc8bebee0d2eea",
        "predicate": "0x1a40500091000020"
    }"#;

    let input: InputRecord = serde_json::from_str(json).unwrap();

    assert_eq!(*input.block_height, 1427625);
    assert_eq!(input.input_type, InputType::Coin);
    assert_eq!(input.amount, Some(UInt::from(u64::MAX)));
    assert_eq!(input.owner.as_ref(), Some(&input.tx_id));
    assert_eq!(input.predicate.unwrap().len(), 8);
    assert!(input.asset_id.is_some());
}

#[test]
fn test_missing_optional_fields() {
    let json = r#"{
        "tx_id": "0x00",
        "block_height": "0x10",
        "input_type": 2
    }"#;

    let input: InputRecord = serde_json::from_str(json).unwrap();

    assert_eq!(input.tx_id, Hash::default());
    assert_eq!(*input.block_height, 16);
    assert_eq!(input.input_type, InputType::Message);
    assert!(input.owner.is_none());
    assert!(input.amount.is_none());
}

#[test]
fn test_unknown_code_is_rejected() {
    let json = r#"{ "tx_id": "0x00", "block_height": 1, "input_type": 7 }"#;

    let err = serde_json::from_str::<InputRecord>(json)
        .err()
        .expect("unknown input type must fail");

    assert!(err.to_string().contains("Unknown input type code: 7"));
}
