use std::{borrow::Borrow, borrow::Cow, fmt, ops::Deref};

use serde::Serialize;

use crate::error::{Error, Result};

/// A string as it appears in NBT: raw bytes, used for both tag names and
/// `String` payloads.
///
/// Minecraft writes these in Java's "modified UTF-8" (CESU-8 with a two byte
/// NUL). The decoder never checks this; turning the bytes into text is a
/// separate step done with [`to_str`][`NbtString::to_str`] or
/// [`to_string_lossy`][`NbtString::to_string_lossy`].
///
/// Serializing an `NbtString` produces a string using the lossy conversion.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NbtString(Vec<u8>);

impl NbtString {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Decode as modified UTF-8. Fails with a `Nonunicode` error if the
    /// bytes are not valid.
    pub fn to_str(&self) -> Result<Cow<'_, str>> {
        cesu8::from_java_cesu8(&self.0).map_err(|_| Error::nonunicode(&self.0))
    }

    /// Decode as modified UTF-8, falling back to plain UTF-8 with
    /// replacement characters for invalid sequences.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        match cesu8::from_java_cesu8(&self.0) {
            Ok(s) => s,
            Err(_) => String::from_utf8_lossy(&self.0),
        }
    }
}

impl From<&str> for NbtString {
    fn from(s: &str) -> Self {
        Self(cesu8::to_java_cesu8(s).into_owned())
    }
}

impl From<String> for NbtString {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Vec<u8>> for NbtString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Deref for NbtString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for NbtString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for NbtString {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<str> for NbtString {
    fn eq(&self, other: &str) -> bool {
        self.to_str().map_or(false, |s| s == other)
    }
}

impl PartialEq<&str> for NbtString {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Debug for NbtString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_str() {
            Ok(s) => write!(f, "{:?}", s),
            Err(_) => write!(f, "b{:?}", String::from_utf8_lossy(&self.0)),
        }
    }
}

impl fmt::Display for NbtString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// Serializes as a string, decoded the same way as
/// [`to_string_lossy`][NbtString::to_string_lossy]. Distinct invalid names can
/// render to the same text, so a compound holding both keeps only one of them
/// in the output. Use [`Value::check_text`][crate::Value::check_text] first
/// when that matters.
impl Serialize for NbtString {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string_lossy())
    }
}
