use super::*;

#[test]
fn integers_render_decimal() {
    assert_eq!(Literal::I32(-42).to_string(), "-42");
    assert_eq!(Literal::U64(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(Literal::I8(i8::MIN).to_string(), "-128");
}

#[test]
fn floats_round_trip() {
    assert_eq!(Literal::F64(0.1).to_string(), "0.1");
    assert_eq!(Literal::F64(1.0).to_string(), "1.0");
    assert_eq!(Literal::F32(0.5).to_string(), "0.5f");

    let text = Literal::F64(std::f64::consts::PI).to_string();
    assert_eq!(text.parse::<f64>().ok(), Some(std::f64::consts::PI));
}

#[test]
fn non_finite_floats_use_macros() {
    assert_eq!(Literal::F64(f64::NAN).to_string(), "NAN");
    assert_eq!(Literal::F64(f64::INFINITY).to_string(), "INFINITY");
    assert_eq!(Literal::F32(f32::NEG_INFINITY).to_string(), "-INFINITY");
}

#[test]
fn half_precision_renders_raw_bits() {
    assert_eq!(Literal::Fp16b(0x3f80).to_string(), "16256");
    assert_eq!(Literal::Fp16a(0x3c00).kind(), PrimKind::Fp16a);
}

#[test]
fn native_conversion_picks_matching_kind() {
    assert_eq!(Literal::from(5).kind(), PrimKind::I32);
    assert_eq!(Literal::from(5u8).kind(), PrimKind::U8);
    assert_eq!(Literal::from(2.5).kind(), PrimKind::F64);
    assert_eq!(Literal::from(true), Literal::Bool(true));
    assert_eq!(Literal::Bool(false).to_string(), "false");
}
