//! Packed color literals.
//!
//! A color literal is a hexadecimal number holding 8 bits per channel in
//! `0xRRGGBBAA` order. `rgb` literals omit the alpha byte, which then
//! defaults to fully opaque: `rgb(0x883a12) == rgba(0x883a12ff)`.

use crate::channel::Channel;
use crate::colors::GenericColor;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Packed `0xRRGGBBAA` value, returned unchanged.
#[inline(always)]
pub const fn rgba(packed: u32) -> u32 { packed }

/// Packed `0xRRGGBB` value with an opaque alpha byte appended. Bits above
/// the low 24 are dropped.
#[inline(always)]
pub const fn rgb(packed: u32) -> u32 { (packed & 0x00FF_FFFF) << 8 | 0xFF }

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LiteralKind {
  Rgba,
  Rgb,
}

impl LiteralKind {
  pub const fn name(self) -> &'static str {
    match self {
      Self::Rgba => "rgba",
      Self::Rgb => "rgb",
    }
  }

  pub const fn max_digits(self) -> usize {
    match self {
      Self::Rgba => 8,
      Self::Rgb => 6,
    }
  }

  pub const fn suffix(self) -> &'static str {
    match self {
      Self::Rgba => "_rgba",
      Self::Rgb => "_rgb",
    }
  }

  /// Turns the digits of a literal of this kind into the packed form.
  pub const fn pack(self, value: u32) -> u32 {
    match self {
      Self::Rgba => rgba(value),
      Self::Rgb => rgb(value),
    }
  }
}

impl fmt::Display for LiteralKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum LiteralError {
  #[error("empty color literal")]
  Empty,
  #[error("invalid hex digit {digit:?} at position {position}")]
  InvalidDigit { digit: char, position: usize },
  #[error("too many digits for an {kind} literal: {count} (at most {max})")]
  TooManyDigits { kind: LiteralKind, count: usize, max: usize },
  #[error("{0} hex digits, expected 3, 4, 6 or 8 (or use an _rgb/_rgba suffix)")]
  AmbiguousLength(usize),
}

/// Parses a color literal into the packed `0xRRGGBBAA` form.
///
/// Accepted syntax: an optional `0x`, `0X` or `#` prefix, hex digits which
/// may be separated with `_`, and an optional `_rgba` or `_rgb` suffix.
/// Without a suffix the digit count decides: 8 is rgba, 6 is rgb, and the
/// short forms `RGB` and `RGBA` (3 and 4 digits) have every nibble doubled.
pub fn parse_literal(text: &str) -> Result<u32, LiteralError> {
  parse_literal_kind(text).map(|(packed, _)| packed)
}

/// Like [`parse_literal`], also reporting which form the digits were read as.
pub fn parse_literal_kind(text: &str) -> Result<(u32, LiteralKind), LiteralError> {
  let text = text.trim();
  let (body, suffix_kind) = strip_suffix(text);
  let (prefix_len, digits) = strip_prefix(body);

  let mut value: u32 = 0;
  let mut count = 0;
  for (offset, ch) in digits.char_indices() {
    if ch == '_' {
      continue;
    }
    let digit =
      ch.to_digit(16).ok_or(LiteralError::InvalidDigit { digit: ch, position: prefix_len + offset })?;
    count += 1;
    // overlong input loses its high digits here, the count check below rejects it
    value = value << 4 | digit;
  }

  if count == 0 {
    return Err(LiteralError::Empty);
  }

  if let Some(kind) = suffix_kind {
    let max = kind.max_digits();
    if count > max {
      return Err(LiteralError::TooManyDigits { kind, count, max });
    }
    return Ok((kind.pack(value), kind));
  }

  match count {
    8 => Ok((rgba(value), LiteralKind::Rgba)),
    6 => Ok((rgb(value), LiteralKind::Rgb)),
    4 => Ok((expand_nibbles(value, 4), LiteralKind::Rgba)),
    3 => Ok((rgb(expand_nibbles(value, 3)), LiteralKind::Rgb)),
    _ if count > LiteralKind::Rgba.max_digits() => Err(LiteralError::TooManyDigits {
      kind: LiteralKind::Rgba,
      count,
      max: LiteralKind::Rgba.max_digits(),
    }),
    _ => Err(LiteralError::AmbiguousLength(count)),
  }
}

fn strip_suffix(text: &str) -> (&str, Option<LiteralKind>) {
  // `_rgba` has to be tried first, `_rgb` is its prefix
  for &kind in &[LiteralKind::Rgba, LiteralKind::Rgb] {
    if let Some(body) = text.strip_suffix(kind.suffix()) {
      return (body, Some(kind));
    }
  }
  (text, None)
}

fn strip_prefix(text: &str) -> (usize, &str) {
  for prefix in &["0x", "0X", "#"] {
    if let Some(rest) = text.strip_prefix(prefix) {
      return (prefix.len(), rest);
    }
  }
  (0, text)
}

/// `0xabc` -> `0xaabbcc`: every one of the low `count` nibbles is doubled.
fn expand_nibbles(value: u32, count: u32) -> u32 {
  let mut result = 0;
  for i in (0..count).rev() {
    let nibble = (value >> (4 * i)) & 0xF;
    result = result << 8 | nibble << 4 | nibble;
  }
  result
}

impl<T: Channel> FromStr for GenericColor<T> {
  type Err = LiteralError;
  fn from_str(text: &str) -> Result<Self, Self::Err> { parse_literal(text).map(Self::from) }
}
