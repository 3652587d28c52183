use crate::channel::*;
use std::fmt;
use std::iter::FromIterator;
use std::ops::*;
use std::slice;

/// Fixed-size color with `N` channels (R, G, B, A for the default `N = 4`)
/// stored contiguously in that order.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(C)]
pub struct GenericColor<T, const N: usize = 4>(pub [T; N]);

impl<T: fmt::Debug, const N: usize> fmt::Debug for GenericColor<T, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut tuple = f.debug_tuple("GenericColor");
    for c in &self.0 {
      tuple.field(c);
    }
    tuple.finish()
  }
}

pub type Color8 = GenericColor<u8>;
pub type Color16 = GenericColor<u16>;
pub type Color32 = GenericColor<u32>;
pub type Color64 = GenericColor<u64>;
pub type Colorf = GenericColor<f32>;
pub type Colord = GenericColor<f64>;

#[inline(always)]
pub const fn color<T>(r: T, g: T, b: T, a: T) -> GenericColor<T> { GenericColor([r, g, b, a]) }

#[inline]
pub const fn colorn<T: Copy>(n: T, a: T) -> GenericColor<T> { GenericColor([n, n, n, a]) }

impl<T, const N: usize> GenericColor<T, N> {
  #[inline(always)]
  pub const fn new(channels: [T; N]) -> Self { Self(channels) }

  #[inline(always)]
  pub const fn len(&self) -> usize { N }

  #[inline(always)]
  pub const fn is_empty(&self) -> bool { N == 0 }

  #[inline(always)]
  pub const fn as_array(&self) -> &[T; N] { &self.0 }

  #[inline(always)]
  pub fn into_array(self) -> [T; N] { self.0 }

  #[inline(always)]
  pub fn as_slice(&self) -> &[T] { &self.0 }

  #[inline(always)]
  pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.0 }

  #[inline(always)]
  pub fn iter(&self) -> slice::Iter<'_, T> { self.0.iter() }

  #[inline(always)]
  pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> { self.0.iter_mut() }

  #[inline(always)]
  pub fn get(&self, i: usize) -> Option<&T> { self.0.get(i) }

  #[inline(always)]
  pub fn get_mut(&mut self, i: usize) -> Option<&mut T> { self.0.get_mut(i) }

  /// # Safety
  ///
  /// `i` must be less than `N`.
  #[inline(always)]
  pub unsafe fn get_unchecked(&self, i: usize) -> &T { self.0.get_unchecked(i) }

  /// # Safety
  ///
  /// `i` must be less than `N`.
  #[inline(always)]
  pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T { self.0.get_unchecked_mut(i) }

  #[inline]
  pub fn map<U, F: FnMut(T) -> U>(self, op: F) -> GenericColor<U, N> {
    GenericColor(self.0.map(op))
  }
}

impl<T: Copy + Default, const N: usize> GenericColor<T, N> {
  /// Copies at most `N` leading elements of `src`; the remaining channels
  /// are left at their default value.
  pub fn from_slice(src: &[T]) -> Self {
    let mut channels = [T::default(); N];
    let count = src.len().min(N);
    channels[..count].copy_from_slice(&src[..count]);
    Self(channels)
  }
}

impl<T: Copy> GenericColor<T> {
  #[inline(always)]
  pub fn r(&self) -> T { self.0[0] }
  #[inline(always)]
  pub fn g(&self) -> T { self.0[1] }
  #[inline(always)]
  pub fn b(&self) -> T { self.0[2] }
  #[inline(always)]
  pub fn a(&self) -> T { self.0[3] }
}

impl<T> GenericColor<T> {
  #[inline]
  pub fn with_alpha(self, a: T) -> Self {
    let [r, g, b, _] = self.0;
    Self([r, g, b, a])
  }
}

impl<T: Channel> GenericColor<T> {
  /// Packs the color back into `0xRRGGBBAA`, see [`Channel::to_u8`].
  #[inline]
  pub fn to_rgba(self) -> u32 { pack_channels(self.0.map(Channel::to_u8)) }

  /// Converts to another channel type through the 8-bit representation.
  #[inline]
  pub fn cast<U: Channel>(self) -> GenericColor<U> { GenericColor(self.0.map(|c| c.cast::<U>())) }
}

impl GenericColor<u8> {
  /// Same as `GenericColor::<u8>::from(packed)`, usable in constants.
  #[inline(always)]
  pub const fn from_rgba8(packed: u32) -> Self { Self(packed.to_be_bytes()) }
}

impl<T: Copy + Default, const N: usize> Default for GenericColor<T, N> {
  #[inline]
  fn default() -> Self { Self([T::default(); N]) }
}

impl<T, const N: usize> From<[T; N]> for GenericColor<T, N> {
  #[inline(always)]
  fn from(channels: [T; N]) -> Self { Self(channels) }
}

impl<T: Channel> From<u32> for GenericColor<T> {
  #[inline]
  fn from(packed: u32) -> Self {
    let mut channels = [T::default(); 4];
    for (i, c) in channels.iter_mut().enumerate() {
      *c = T::from_u8(unpack_channel(packed, i));
    }
    Self(channels)
  }
}

impl<T: Channel> From<GenericColor<T>> for u32 {
  #[inline]
  fn from(color: GenericColor<T>) -> Self { color.to_rgba() }
}

impl<T: Channel> PartialEq<u32> for GenericColor<T> {
  #[inline]
  fn eq(&self, packed: &u32) -> bool { *self == Self::from(*packed) }
}

impl<T: Channel> PartialEq<GenericColor<T>> for u32 {
  #[inline]
  fn eq(&self, color: &GenericColor<T>) -> bool { color == self }
}

/// Takes at most `N` items; missing trailing channels stay at their default.
impl<T: Copy + Default, const N: usize> FromIterator<T> for GenericColor<T, N> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut channels = [T::default(); N];
    for (slot, c) in channels.iter_mut().zip(iter) {
      *slot = c;
    }
    Self(channels)
  }
}

impl<T, const N: usize> Index<usize> for GenericColor<T, N> {
  type Output = T;
  #[inline(always)]
  fn index(&self, i: usize) -> &T { &self.0[i] }
}

impl<T, const N: usize> IndexMut<usize> for GenericColor<T, N> {
  #[inline(always)]
  fn index_mut(&mut self, i: usize) -> &mut T { &mut self.0[i] }
}

impl<T, const N: usize> AsRef<[T]> for GenericColor<T, N> {
  #[inline(always)]
  fn as_ref(&self) -> &[T] { &self.0 }
}

impl<T, const N: usize> AsMut<[T]> for GenericColor<T, N> {
  #[inline(always)]
  fn as_mut(&mut self) -> &mut [T] { &mut self.0 }
}

impl<T, const N: usize> IntoIterator for GenericColor<T, N> {
  type Item = T;
  type IntoIter = std::array::IntoIter<T, N>;
  #[inline(always)]
  fn into_iter(self) -> Self::IntoIter { IntoIterator::into_iter(self.0) }
}

impl<'a, T, const N: usize> IntoIterator for &'a GenericColor<T, N> {
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;
  #[inline(always)]
  fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut GenericColor<T, N> {
  type Item = &'a mut T;
  type IntoIter = slice::IterMut<'a, T>;
  #[inline(always)]
  fn into_iter(self) -> Self::IntoIter { self.0.iter_mut() }
}

impl<T: Channel> fmt::LowerHex for GenericColor<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if f.alternate() {
      f.write_str("0x")?;
    }
    write!(f, "{:08x}", self.to_rgba())
  }
}

impl<T: Channel> fmt::UpperHex for GenericColor<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if f.alternate() {
      f.write_str("0x")?;
    }
    write!(f, "{:08X}", self.to_rgba())
  }
}
