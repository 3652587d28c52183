//! `GenericColor<T, N>` is (de)serialized as a tuple of exactly `N`
//! channels. `serde` can't derive this for arrays of arbitrary length, hence
//! the handwritten impls.

use crate::colors::GenericColor;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<T: Serialize, const N: usize> Serialize for GenericColor<T, N> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut tuple = serializer.serialize_tuple(N)?;
    for c in self.iter() {
      tuple.serialize_element(c)?;
    }
    tuple.end()
  }
}

impl<'de, T, const N: usize> Deserialize<'de> for GenericColor<T, N>
where
  T: Deserialize<'de> + Copy + Default,
{
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_tuple(N, ColorVisitor(PhantomData))
  }
}

struct ColorVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> Visitor<'de> for ColorVisitor<T, N>
where
  T: Deserialize<'de> + Copy + Default,
{
  type Value = GenericColor<T, N>;

  fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "a sequence of {} color channels", N)
  }

  fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
    let mut color = GenericColor::<T, N>::default();
    for (i, slot) in color.iter_mut().enumerate() {
      *slot = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(i, &self))?;
    }
    if seq.next_element::<de::IgnoredAny>()?.is_some() {
      return Err(de::Error::invalid_length(N + 1, &self));
    }
    Ok(color)
  }
}
