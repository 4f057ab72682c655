use serde::Serialize;

use crate::{error::Result, NbtString, Tag};

/// The map held by a [`Value::Compound`].
///
/// With the `preserve-order` feature this is an `IndexMap`, keeping names in
/// the order they were read. Otherwise it is a `HashMap`.
#[cfg(not(feature = "preserve-order"))]
pub type Compound = std::collections::HashMap<NbtString, Value>;

/// The map held by a [`Value::Compound`].
///
/// With the `preserve-order` feature this is an `IndexMap`, keeping names in
/// the order they were read. Otherwise it is a `HashMap`.
#[cfg(feature = "preserve-order")]
pub type Compound = indexmap::IndexMap<NbtString, Value>;

/// Value is a complete NBT value. It owns its data. Compounds and Lists are
/// recursively decoded.
///
/// Lists remember the tag of their elements, so an empty list of compounds
/// can be told apart from an empty list of bytes.
///
/// ```
/// # use nbtjson::{Value, Tag};
/// # use nbtjson::error::Result;
/// # fn main() -> Result<()> {
/// // A list named "l" of three bytes.
/// let data = [9, 0, 1, b'l', 1, 0, 0, 0, 3, 1, 2, 3];
/// let value = nbtjson::from_bytes(&data)?;
///
/// match value.get("l") {
///     Some(Value::List(Tag::Byte, bytes)) => assert_eq!(bytes.len(), 3),
///     other => panic!("unexpected: {:?}", other),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(NbtString),
    List(Tag, Vec<Value>),
    Compound(Compound),
}

impl Value {
    /// The tag this value would have in NBT.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_, _) => Tag::List,
            Value::Compound(_) => Tag::Compound,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            Value::Float(v) => Some(v as i64),
            Value::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    /// The string as text, if this is a string of valid modified UTF-8.
    pub fn as_str(&self) -> Option<std::borrow::Cow<'_, str>> {
        match self {
            Value::String(v) => v.to_str().ok(),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(_, v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    /// Look up a name in a compound. `None` if this is not a compound or the
    /// name is not present.
    pub fn get<K: AsRef<[u8]>>(&self, name: K) -> Option<&Value> {
        self.as_compound()?.get(name.as_ref())
    }

    /// Check every name and string in this value is valid modified UTF-8,
    /// failing with a `Nonunicode` error on the first that is not.
    pub fn check_text(&self) -> Result<()> {
        match self {
            Value::String(s) => s.to_str().map(|_| ()),
            Value::List(_, vs) => vs.iter().try_for_each(Value::check_text),
            Value::Compound(c) => c.iter().try_for_each(|(k, v)| {
                k.to_str()?;
                v.check_text()
            }),
            _ => Ok(()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::Byte(v) => serializer.serialize_i8(*v),
            Value::Short(v) => serializer.serialize_i16(*v),
            Value::Int(v) => serializer.serialize_i32(*v),
            Value::Long(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f32(*v),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::ByteArray(v) => v.serialize(serializer),
            Value::String(v) => v.serialize(serializer),
            Value::List(_, v) => v.serialize(serializer),
            Value::Compound(v) => v.serialize(serializer),
        }
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(i16, Short);
from!(i32, Int);
from!(i64, Long);
from!(f32, Float);
from!(f64, Double);
from!(Vec<i8>, ByteArray);
from!(NbtString, String);
from!(&str, String, .into());
from!(Compound, Compound);
