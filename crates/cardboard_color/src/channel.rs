//! Scaling of a single 8-bit color channel into the range of a wider
//! channel type and back.

use std::convert::TryFrom;
use std::fmt;

/// Scalar type which can hold one channel of a [`GenericColor`].
///
/// Integer channels are widened by multiplying the 8-bit value with
/// [`Channel::SCALE`] (`1`, `0xFF`, `0xFFFF` and `0xFF_FFFF` for 8, 16, 32
/// and 64 bits), floating-point channels are normalized into `0.0..=1.0`.
///
/// [`GenericColor`]: crate::GenericColor
pub trait Channel: Copy + Default + PartialEq + fmt::Debug {
  /// Multiplier applied to an 8-bit value by [`Channel::from_u8`] for
  /// integer channels. Floating-point channels store `1 / 255` here for
  /// reference only: their conversions divide by `255.0`, and `0xFF` maps to
  /// exactly `1.0`.
  const SCALE: Self;

  fn from_u8(c: u8) -> Self;

  /// Inverse of [`Channel::from_u8`]. Values outside of the range reachable
  /// from 8 bits are saturated.
  fn to_u8(self) -> u8;

  #[inline]
  fn cast<U: Channel>(self) -> U { U::from_u8(self.to_u8()) }
}

macro_rules! impl_channel {
  (int: $($ty:ty => $scale:expr),+ $(,)?) => {
    $(impl Channel for $ty {
      const SCALE: Self = $scale;

      #[inline(always)]
      fn from_u8(c: u8) -> Self { <$ty>::from(c) * Self::SCALE }

      #[inline]
      fn to_u8(self) -> u8 { u8::try_from(self / Self::SCALE).unwrap_or(u8::MAX) }
    })+
  };

  (float: $($ty:ty),+ $(,)?) => {
    $(impl Channel for $ty {
      const SCALE: Self = 1.0 / 255.0;

      #[inline(always)]
      fn from_u8(c: u8) -> Self { <$ty>::from(c) / 255.0 }

      #[inline]
      fn to_u8(self) -> u8 {
        // NaN ends up as zero, `as` saturates the rest
        (self * 255.0).round().max(0.0).min(255.0) as u8
      }
    })+
  };
}

impl_channel!(int: u8 => 1, u16 => 0xFF, u32 => 0xFFFF, u64 => 0xFF_FFFF);
impl_channel!(float: f32, f64);

/// Extracts channel `i` (0 = R, 3 = A) out of a packed `0xRRGGBBAA` value.
/// `i` must be less than 4.
#[inline(always)]
pub(crate) const fn unpack_channel(packed: u32, i: usize) -> u8 { (packed >> (24 - 8 * i)) as u8 }

/// Puts four 8-bit channels back into the packed `0xRRGGBBAA` layout.
#[inline(always)]
pub const fn pack_channels(channels: [u8; 4]) -> u32 { u32::from_be_bytes(channels) }
