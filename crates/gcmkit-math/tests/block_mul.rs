use gcmkit_core::GcmError;
use gcmkit_math::{GcmBlock, ReductionTable, TableLayout, REDUCTION_TABLE};
use proptest::prelude::*;

fn block(hex_str: &str) -> GcmBlock {
    let mut bytes = [0u8; 16];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = u8::from_str_radix(&hex_str[2 * i..2 * i + 2], 16).unwrap();
    }
    GcmBlock(bytes)
}

#[test]
fn test_gcm_case_2_product() {
    // GCM test case 2: X1 = C1 * H
    let h = block("66e94bd4ef8a2c3b884cfa59ca342b2e");
    let c = block("0388dace60b6a392f328c2b971b2fe78");
    let expected = block("5e2ec746917062882c85b0685353deb7");

    assert_eq!(c.mul_bitwise(h), expected, "Bitwise Mul Failed");
    assert_eq!(c.mul(h), expected, "Table Mul Failed");
    assert_eq!(c * h, expected);
}

#[test]
fn test_identity_and_zero() {
    let h = block("66e94bd4ef8a2c3b884cfa59ca342b2e");
    assert_eq!(h * GcmBlock::ONE, h);
    assert_eq!(GcmBlock::ONE * h, h);
    assert_eq!(h * GcmBlock::ZERO, GcmBlock::ZERO);
    assert_eq!(h + h, GcmBlock::ZERO);
}

#[test]
fn test_mul_x_wraps_through_polynomial() {
    // x^127 * x = x^128 = x^7 + x^2 + x + 1
    let mut top = [0u8; 16];
    top[15] = 0x01;
    let mut reduced = [0u8; 16];
    reduced[0] = 0xE1;
    assert_eq!(GcmBlock(top).mul_x(), GcmBlock(reduced));
}

#[test]
fn test_mul_x8_single_high_byte() {
    // Only the shifted-out byte is set, so the result is the table entry itself.
    for j in 0..=255u8 {
        let mut bytes = [0u8; 16];
        bytes[15] = j;
        let out = GcmBlock(bytes).mul_x8();
        let entry = REDUCTION_TABLE.get(j);
        assert_eq!(out.0[0], (entry >> 8) as u8);
        assert_eq!(out.0[1], entry as u8);
        assert!(out.0[2..].iter().all(|b| *b == 0));
    }
}

#[test]
fn test_mul_x8_with_wrong_table_disagrees() {
    let bad = ReductionTable::generate(0x87);
    let h = block("66e94bd4ef8a2c3b884cfa59ca342b2e");
    assert_ne!(h.mul_x8_with(&bad), h.mul_x8());
    assert_eq!(h.mul_x8_with(&REDUCTION_TABLE.layout(TableLayout::Generic)), h.mul_x8());
}

#[test]
fn test_from_slice_length() {
    assert_eq!(GcmBlock::from_slice(&[0u8; 15]), Err(GcmError::InvalidLength));
    assert_eq!(GcmBlock::from_slice(&[0u8; 16]), Ok(GcmBlock::ZERO));
}

proptest! {
    #[test]
    fn prop_mul_x8_is_eight_mul_x(bytes in any::<[u8; 16]>()) {
        let b = GcmBlock(bytes);
        let mut slow = b;
        for _ in 0..8 {
            slow = slow.mul_x();
        }
        prop_assert_eq!(b.mul_x8(), slow);
    }

    #[test]
    fn prop_table_mul_matches_bitwise(a in any::<[u8; 16]>(), b in any::<[u8; 16]>()) {
        let (a, b) = (GcmBlock(a), GcmBlock(b));
        prop_assert_eq!(a.mul(b), a.mul_bitwise(b));
        prop_assert_eq!(a.mul(b), b.mul(a));
    }
}
