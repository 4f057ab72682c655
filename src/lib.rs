//! nbtjson decodes NBT data from *Minecraft: Java Edition* into a generic
//! [`Value`] tree, ready to be rendered as JSON (or anything else `serde` can
//! serialize to).
//!
//! The decoder understands the original eleven tags, `End` through
//! `Compound`. It is read-only, there is no encoder.
//!
//! ```toml
//! [dependencies]
//! nbtjson = "0.1"
//! ```
//!
//! # Quick example
//!
//! ```
//! use nbtjson::{from_bytes, Value};
//! # use nbtjson::error::Result;
//! # fn main() -> Result<()> {
//! // A byte named "a" with the value 1, then the end of the compound.
//! let data = [1, 0, 1, b'a', 1, 0];
//! let value = from_bytes(&data)?;
//!
//! assert_eq!(value.get("a"), Some(&Value::Byte(1)));
//! # Ok(())
//! # }
//! ```
//!
//! # The root
//!
//! By default the input is decoded as the *contents* of a compound: a run of
//! named tags up to an `End` tag or the end of input. A normal NBT file starts
//! with a named root compound, usually with the empty name, so it decodes to a
//! compound with a single entry, `""`, holding the real data. Nothing is lost
//! this way. To unwrap the root instead, use [`RootMode::Named`]:
//!
//! ```
//! use nbtjson::{from_bytes_with_opts, DecodeOpts, RootMode, Value};
//! # use nbtjson::error::Result;
//! # fn main() -> Result<()> {
//! let data = [10, 0, 0, 3, 0, 1, b'x', 0, 0, 0, 42, 0];
//! let value = from_bytes_with_opts(&data, DecodeOpts::new().root(RootMode::Named))?;
//!
//! assert_eq!(value.get("x"), Some(&Value::Int(42)));
//! # Ok(())
//! # }
//! ```
//!
//! # Decompression
//!
//! NBT files are usually GZip or Zlib compressed. This crate only decodes,
//! so wrap the file in a decoder first, for example from `flate2`:
//!
//! ```no_run
//! use flate2::read::GzDecoder;
//!
//! let file = std::fs::File::open("level.dat").unwrap();
//! let value = nbtjson::from_reader(GzDecoder::new(file)).unwrap();
//! println!("{}", serde_json::to_string(&value).unwrap());
//! ```

use num_enum::{IntoPrimitive, TryFromPrimitive};

pub mod de;
pub mod error;
pub mod header;
pub mod input;

mod string;
mod value;

pub use de::{
    from_bytes, from_bytes_named, from_bytes_with_opts, from_reader, from_reader_with_opts,
};
pub use string::NbtString;
pub use value::*;

#[cfg(test)]
mod test;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Debug, TryFromPrimitive, IntoPrimitive, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a string. The bytes are kept as they are in the input.
    String = 8,
    /// Represents a list of other objects, all of the same tag.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
}

/// How the start of the input should be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootMode {
    /// The input starts directly with the named tags of the root compound.
    /// A root tag header, if present, is decoded like any other named tag.
    Headerless,
    /// The input starts with a named root tag, which must be a compound.
    Named,
}

/// Default limit on the nesting of lists and compounds. Fits comfortably in
/// a 2 MiB thread stack even without optimisations.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options for customizing decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOpts {
    pub(crate) root: RootMode,
    pub(crate) max_depth: usize,
    pub(crate) max_seq_len: usize,
    pub(crate) deny_duplicate_names: bool,
}

impl DecodeOpts {
    pub fn new() -> Self {
        Default::default()
    }

    /// How to treat the start of the input. Defaults to
    /// [`RootMode::Headerless`].
    pub fn root(mut self, root: RootMode) -> Self {
        self.root = root;
        self
    }

    /// Maximum nesting of lists and compounds, the root compound included.
    /// Going deeper is an error rather than a stack overflow. Defaults to
    /// [`DEFAULT_MAX_DEPTH`].
    ///
    /// Each level costs a few KiB of stack in unoptimised builds. Raising this
    /// far past the default may need a thread with a bigger stack.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }

    /// Maximum length of a byte array or list. Defaults to 10,000,000.
    pub fn max_seq_len(mut self, value: usize) -> Self {
        self.max_seq_len = value;
        self
    }

    /// Fail on a compound that repeats a name, rather than keeping the last
    /// value. Defaults to false.
    pub fn deny_duplicate_names(mut self, value: bool) -> Self {
        self.deny_duplicate_names = value;
        self
    }
}

impl Default for DecodeOpts {
    fn default() -> Self {
        Self {
            root: RootMode::Headerless,
            max_depth: DEFAULT_MAX_DEPTH,
            max_seq_len: 10_000_000,
            deny_duplicate_names: false,
        }
    }
}
