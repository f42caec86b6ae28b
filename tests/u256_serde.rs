use uint256::primitives::U256;

#[test]
fn serializes_as_minimal_hex_string() {
    let v = U256::from_u32(0xA5500);

    assert_eq!(serde_json::to_string(&v).unwrap(), "\"a5500\"");
    assert_eq!(serde_json::to_string(&U256::ZERO).unwrap(), "\"0\"");
}

#[test]
fn deserializes_with_hex_rules() {
    let v: U256 = serde_json::from_str("\"ABCDEF0000123456\"").unwrap();
    assert_eq!(
        v,
        U256::from_words([0x0012_3456, 0xABCD_EF00, 0, 0, 0, 0, 0, 0])
    );

    let rot = U256::from_words([0xAB, 0, 0, 0, 0, 0, 0, 0xCD00_0000]);
    let json = serde_json::to_string(&rot).unwrap();
    assert_eq!(serde_json::from_str::<U256>(&json).unwrap(), rot);
}

#[test]
fn rejects_invalid_digits() {
    let err = serde_json::from_str::<U256>("\"0x10\"").unwrap_err();
    assert!(err.to_string().contains("invalid hex digit"));

    assert!(serde_json::from_str::<U256>("16").is_err());
}
