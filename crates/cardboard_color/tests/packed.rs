use cardboard_color::*;
use oorandom::Rand32;

const TEST: u32 = rgba(0x1a2b3c4d);
const FROM_CONST: Color8 = Color8::from_rgba8(TEST);

fn assert_within_rel(actual: f64, expected: f64, eps: f64) {
  let margin = eps * actual.abs().max(expected.abs());
  assert!((actual - expected).abs() <= margin, "{} is not within {} of {}", actual, eps, expected);
}

#[test]
fn u8_channels() {
  let c = Color8::from(0x1a2b3c4d);
  assert_eq!(c.as_array(), &[0x1a, 0x2b, 0x3c, 0x4d]);
  assert!(c == rgba(0x1a2b3c4d));
  assert_eq!(c, FROM_CONST);
  assert_eq!(c, Color8::from(TEST));
}

#[test]
fn u16_channels() {
  let c = Color16::from(0x1a2b3c4d);
  assert_eq!(c, color(0x1a * 0xFF, 0x2b * 0xFF, 0x3c * 0xFF, 0x4d * 0xFF));
  assert!(c == rgba(0x1a2b3c4d));
}

#[test]
fn u32_channels() {
  let c = Color32::from(0x1a2b3c4d);
  assert_eq!(c, color(0x1a * 0xFFFF, 0x2b * 0xFFFF, 0x3c * 0xFFFF, 0x4d * 0xFFFF));
  assert!(c == rgba(0x1a2b3c4d));
}

#[test]
fn u64_channels() {
  let c = Color64::from(0x1a2b3c4d);
  assert_eq!(c, color(0x1a * 0xFF_FFFF, 0x2b * 0xFF_FFFF, 0x3c * 0xFF_FFFF, 0x4d * 0xFF_FFFF));
  assert!(c == rgba(0x1a2b3c4d));
}

#[test]
fn float_channels() {
  let expected = [0.101961, 0.168627, 0.235294, 0.301961];

  let c = Colorf::from(0x1a2b3c4d);
  for (&actual, &expected) in c.iter().zip(&expected) {
    assert_within_rel(f64::from(actual), expected, 1e-4);
  }
  assert!(c == rgba(0x1a2b3c4d));

  let c = Colord::from(0x1a2b3c4d);
  for (&actual, &expected) in c.iter().zip(&expected) {
    assert_within_rel(actual, expected, 1e-4);
  }
  assert!(c == rgba(0x1a2b3c4d));
}

#[test]
fn literal_forms() {
  assert_eq!(rgba(0x883a1215), 2_285_507_093);
  assert_eq!(rgb(0x883a12), rgba(0x883a12ff));
  assert_eq!("0x883a12_rgb".parse::<Color8>(), Ok(Color8::from(rgba(0x883a12ff))));
}

#[test]
fn every_boundary_channel_value() {
  for &packed in &[0x0000_0000_u32, 0xFFFF_FFFF, 0x00FF_00FF, 0xFF00_FF00, 0x8000_0001] {
    assert_eq!(Color8::from(packed).to_rgba(), packed);
    assert_eq!(Color16::from(packed).to_rgba(), packed);
    assert_eq!(Color32::from(packed).to_rgba(), packed);
    assert_eq!(Color64::from(packed).to_rgba(), packed);
    assert_eq!(Colorf::from(packed).to_rgba(), packed);
    assert_eq!(Colord::from(packed).to_rgba(), packed);
  }
}

#[test]
fn random_packed_values_round_trip() {
  let mut rng = Rand32::new(0x5eed_c010);
  for _ in 0..10_000 {
    let packed = rng.rand_u32();
    let c = Color8::from(packed);
    assert_eq!(c, Color8::from_rgba8(packed));
    assert_eq!(u32::from(c), packed);
    assert_eq!(Color64::from(packed).cast::<u8>(), c);
    assert_eq!(u32::from(Colord::from(packed)), packed);
    assert_eq!(Colorf::from(packed).cast::<u16>(), Color16::from(packed));
  }
}
