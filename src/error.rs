//! Contains the Error and Result type used by the decoder.

use crate::NbtString;

/// Various errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// EOF that occurred part way through some NBT value. EOF where the next
    /// tag would start is not an error, it ends the current compound.
    UnexpectedEof,

    /// A tag type outside of the known range was encountered. Contains the
    /// offending byte.
    InvalidTag(u8),

    /// A byte array or list had a negative length, or one beyond the
    /// configured maximum.
    MalformedLength(i32),

    /// Lists and compounds were nested deeper than the configured maximum.
    MaxDepthExceeded,

    /// A compound contained the same name twice and duplicates were denied.
    DuplicateName(NbtString),

    /// The root tag was not a compound.
    NoRootCompound,

    /// Expected unicode data but was not valid. Contained bytes are the
    /// invalid data.
    Nonunicode(Vec<u8>),

    /// Any other IO error from the underlying reader.
    Io,
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, ErrorKind::UnexpectedEof)
    }

    pub(crate) fn unexpected_eof() -> Self {
        Self {
            msg: "eof: unexpectedly ran out of input".into(),
            kind: ErrorKind::UnexpectedEof,
        }
    }

    pub(crate) fn invalid_tag(t: u8) -> Self {
        Self {
            msg: format!("invalid nbt tag value: {}", t),
            kind: ErrorKind::InvalidTag(t),
        }
    }

    pub(crate) fn malformed_length(len: i32, max: usize) -> Self {
        let msg = if len < 0 {
            format!("invalid nbt: negative length ({})", len)
        } else {
            format!("invalid nbt: length ({}) greater than maximum ({})", len, max)
        };

        Self {
            msg,
            kind: ErrorKind::MalformedLength(len),
        }
    }

    pub(crate) fn max_depth_exceeded(max: usize) -> Self {
        Self {
            msg: format!("invalid nbt: nested deeper than {} levels", max),
            kind: ErrorKind::MaxDepthExceeded,
        }
    }

    pub(crate) fn duplicate_name(name: NbtString) -> Self {
        Self {
            msg: format!("invalid nbt: duplicate name in compound: {}", name),
            kind: ErrorKind::DuplicateName(name),
        }
    }

    pub(crate) fn no_root_compound() -> Self {
        Self {
            msg: "invalid nbt: no root compound".into(),
            kind: ErrorKind::NoRootCompound,
        }
    }

    pub(crate) fn nonunicode(d: &[u8]) -> Self {
        Self {
            msg: format!(
                "invalid string, non-unicode: {}",
                String::from_utf8_lossy(d),
            ),
            kind: ErrorKind::Nonunicode(d.to_vec()),
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::unexpected_eof(),
            _ => Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Io,
            },
        }
    }
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;
