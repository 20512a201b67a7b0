use super::*;

#[test]
fn fnv_hash_is_split_invariant() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"loop");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"lo");
    b.write_bytes(b"op");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn fnv_distinguishes_u32_order() {
    let mut a = Fnv1a64::new_default();
    a.write_u32(1);
    a.write_u32(2);
    let mut b = Fnv1a64::new_default();
    b.write_u32(2);
    b.write_u32(1);
    assert_ne!(a.finish(), b.finish());
}

#[test]
fn unit_to_u8_truncates_and_clamps() {
    assert_eq!(unit_to_u8(0.0), 0);
    assert_eq!(unit_to_u8(0.5), 127);
    assert_eq!(unit_to_u8(0.999_999), 254);
    assert_eq!(unit_to_u8(1.0), 255);
    assert_eq!(unit_to_u8(1.7), 255);
    assert_eq!(unit_to_u8(-0.3), 0);
    assert_eq!(unit_to_u8(f64::NAN), 0);
}
