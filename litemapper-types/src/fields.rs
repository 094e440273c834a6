//! Declared field names, read from a type's `Deserialize` impl.
//!
//! Derived `Deserialize` impls hand their field list to
//! `Deserializer::deserialize_struct`. [`FieldCapture`] records that list and
//! stops; no value is ever produced.

use serde::de::{self, DeserializeOwned, Deserializer, Visitor};
use serde::forward_to_deserialize_any;

/// Field names declared by `T`, or `None` when `T` is not deserialized as a
/// plain struct (maps, enums, `#[serde(flatten)]` containers).
pub(crate) fn declared_fields<T: DeserializeOwned>() -> Option<&'static [&'static str]> {
    let mut captured = None;
    // The capture always ends in an error once the field list is recorded.
    let _ = T::deserialize(FieldCapture(&mut captured));
    captured
}

struct FieldCapture<'a>(&'a mut Option<&'static [&'static str]>);

impl<'de> Deserializer<'de> for FieldCapture<'_> {
    type Error = de::value::Error;

    fn deserialize_any<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value, Self::Error> {
        Err(de::Error::custom("not a struct"))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value, Self::Error> {
        *self.0 = Some(fields);
        Err(de::Error::custom("fields captured"))
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map enum identifier ignored_any
    }
}
