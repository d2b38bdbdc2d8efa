//! Bare-or-array values.
//!
//! Many option properties accept either one element or an array of them
//! (`title: {...}` vs `title: [{...}, {...}]`). Decoding always yields a
//! sequence. Two encode policies exist and each field picks one:
//! - [`ListOrSingle`] remembers the literal [`Shape`] and writes it back.
//! - [`one_or_many`] decodes the same inputs into a plain `Vec<T>` and always
//!   writes an array.
//!
//! Element types must not themselves be array-shaped, otherwise a bare element
//! and a one-element list cannot be told apart.

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::value::{
    BoolDeserializer, F64Deserializer, I64Deserializer, MapAccessDeserializer, StrDeserializer,
    StringDeserializer, U64Deserializer,
};
use serde::de::{self, Deserializer, IntoDeserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

/// Literal JSON form a [`ListOrSingle`] was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shape {
    /// A bare element, not wrapped in an array
    Bare,
    /// A JSON array
    #[default]
    Array,
}

/// A sequence of `T` that was written either as a bare element or as an array.
///
/// Re-encoding reproduces the original shape: a `Bare` list holding exactly
/// one element is written as that element, everything else as an array.
#[derive(Debug, Clone, PartialEq)]
pub struct ListOrSingle<T> {
    items: Vec<T>,
    shape: Shape,
}

impl<T> ListOrSingle<T> {
    /// A single element written bare.
    pub fn single(item: T) -> Self {
        ListOrSingle {
            items: vec![item],
            shape: Shape::Bare,
        }
    }

    /// A list written as an array, whatever its length.
    pub fn many(items: Vec<T>) -> Self {
        ListOrSingle {
            items,
            shape: Shape::Array,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn is_bare(&self) -> bool {
        self.shape == Shape::Bare
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Whether encoding writes the bare element rather than an array.
    fn encodes_bare(&self) -> bool {
        self.shape == Shape::Bare && self.items.len() == 1
    }
}

impl<T> From<Vec<T>> for ListOrSingle<T> {
    fn from(items: Vec<T>) -> Self {
        ListOrSingle::many(items)
    }
}

impl<T> FromIterator<T> for ListOrSingle<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ListOrSingle::many(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for ListOrSingle<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ListOrSingle<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for ListOrSingle<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.encodes_bare() {
            self.items[0].serialize(serializer)
        } else {
            serializer.collect_seq(&self.items)
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ListOrSingle<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ListOrSingleVisitor(PhantomData))
    }
}

impl<T: JsonSchema> JsonSchema for ListOrSingle<T> {
    fn schema_name() -> Cow<'static, str> {
        format!("ListOrSingle_{}", T::schema_name()).into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let item = generator.subschema_for::<T>();
        json_schema!({
            "anyOf": [
                item,
                { "type": "array", "items": item }
            ]
        })
    }
}

/// Arrays become `Shape::Array`; every other token is handed to `T` as a bare element.
struct ListOrSingleVisitor<T>(PhantomData<T>);

impl<T> ListOrSingleVisitor<T> {
    fn bare<E>(item: Result<T, E>) -> Result<ListOrSingle<T>, E> {
        item.map(ListOrSingle::single)
    }
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for ListOrSingleVisitor<T> {
    type Value = ListOrSingle<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a single value or an array of values")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<ListOrSingle<T>, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(ListOrSingle::many(items))
    }

    fn visit_map<M>(self, map: M) -> Result<ListOrSingle<T>, M::Error>
    where
        M: MapAccess<'de>,
    {
        Self::bare(T::deserialize(MapAccessDeserializer::new(map)))
    }

    fn visit_str<E>(self, v: &str) -> Result<ListOrSingle<T>, E>
    where
        E: de::Error,
    {
        let deserializer: StrDeserializer<'_, E> = v.into_deserializer();
        Self::bare(T::deserialize(deserializer))
    }

    fn visit_string<E>(self, v: String) -> Result<ListOrSingle<T>, E>
    where
        E: de::Error,
    {
        let deserializer: StringDeserializer<E> = v.into_deserializer();
        Self::bare(T::deserialize(deserializer))
    }

    fn visit_bool<E>(self, v: bool) -> Result<ListOrSingle<T>, E>
    where
        E: de::Error,
    {
        let deserializer: BoolDeserializer<E> = v.into_deserializer();
        Self::bare(T::deserialize(deserializer))
    }

    fn visit_i64<E>(self, v: i64) -> Result<ListOrSingle<T>, E>
    where
        E: de::Error,
    {
        let deserializer: I64Deserializer<E> = v.into_deserializer();
        Self::bare(T::deserialize(deserializer))
    }

    fn visit_u64<E>(self, v: u64) -> Result<ListOrSingle<T>, E>
    where
        E: de::Error,
    {
        let deserializer: U64Deserializer<E> = v.into_deserializer();
        Self::bare(T::deserialize(deserializer))
    }

    fn visit_f64<E>(self, v: f64) -> Result<ListOrSingle<T>, E>
    where
        E: de::Error,
    {
        let deserializer: F64Deserializer<E> = v.into_deserializer();
        Self::bare(T::deserialize(deserializer))
    }
}

/// Converter for `Vec<T>` fields that accept a bare element but always encode an array.
///
/// ```
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Palette {
///     #[serde(with = "chartopts_core::codec::one_or_many")]
///     colors: Vec<String>,
/// }
///
/// let palette: Palette = serde_json::from_str(r#"{"colors": "red"}"#).unwrap();
/// assert_eq!(palette.colors, vec!["red".to_string()]);
/// assert_eq!(serde_json::to_string(&palette).unwrap(), r#"{"colors":["red"]}"#);
/// ```
pub mod one_or_many {
    use super::ListOrSingle;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        ListOrSingle::<T>::deserialize(deserializer).map(ListOrSingle::into_vec)
    }

    pub fn serialize<S, T>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        serializer.collect_seq(items)
    }

    /// Same policy for optional fields; pair with
    /// `#[serde(default, skip_serializing_if = "Option::is_none")]`.
    pub mod option {
        use super::ListOrSingle;
        use serde::{Deserialize, Deserializer, Serialize, Serializer};

        pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
        where
            D: Deserializer<'de>,
            T: Deserialize<'de>,
        {
            Option::<ListOrSingle<T>>::deserialize(deserializer)
                .map(|list| list.map(ListOrSingle::into_vec))
        }

        pub fn serialize<S, T>(items: &Option<Vec<T>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            T: Serialize,
        {
            match items {
                Some(items) => serializer.collect_seq(items),
                None => serializer.serialize_none(),
            }
        }
    }
}
