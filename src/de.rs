//! Decoding NBT into a [`Value`].
//!
//! Decoding is a recursive descent over the input. A compound is a run of
//! named tags finished by an `End` tag; a list is an element tag, a count,
//! and that many payloads with no header of their own.
//!
//! Two kinds of input are supported. [`from_bytes`] works on a slice already
//! in memory, [`from_reader`] on anything implementing [`Read`]. Neither does
//! any decompression.
//!
//! # Running out of input
//!
//! Running out of input exactly where the next tag of a compound would start
//! ends that compound, as if an `End` tag was there. This means a stream of
//! named tags with no trailing `End` decodes fine. Running out anywhere else
//! is an [`UnexpectedEof`][`crate::error::ErrorKind::UnexpectedEof`] error.
//!
//! # Limits
//!
//! The nesting of lists and compounds, and the length of byte arrays and
//! lists, are limited by [`DecodeOpts`]. Negative lengths are always an
//! error.

use std::io::Read;

use log::debug;

use crate::{
    error::{Error, Result},
    header::{read_header, read_name, u8_to_tag},
    input::{Input, Reader, Slice},
    Compound, DecodeOpts, NbtString, RootMode, Tag, Value,
};

/// Capacity reserved up front for a list, whatever count it declares.
const MAX_PREALLOCATED: usize = 1024;

/// Decode NBT held in memory, with the default options.
pub fn from_bytes(input: &[u8]) -> Result<Value> {
    from_bytes_with_opts(input, DecodeOpts::default())
}

/// Decode NBT held in memory.
pub fn from_bytes_with_opts(input: &[u8], opts: DecodeOpts) -> Result<Value> {
    debug!("decoding {} bytes", input.len());
    let mut decoder = Decoder::new(Slice::new(input), opts);
    let value = decoder.decode_root()?.1;
    debug!("{} bytes left after root", decoder.input.remaining().len());
    Ok(value)
}

/// Decode NBT with a named root compound, returning the name of the root
/// alongside its value. The root name is typically empty.
pub fn from_bytes_named(input: &[u8], opts: DecodeOpts) -> Result<(NbtString, Value)> {
    let mut decoder = Decoder::new(Slice::new(input), opts.root(RootMode::Named));
    decoder.decode_root()
}

/// Decode NBT from a reader, with the default options.
pub fn from_reader<R: Read>(reader: R) -> Result<Value> {
    from_reader_with_opts(reader, DecodeOpts::default())
}

/// Decode NBT from a reader. The reader is read up to the end of the root
/// compound and no further.
pub fn from_reader_with_opts<R: Read>(reader: R, opts: DecodeOpts) -> Result<Value> {
    let mut decoder = Decoder::new(Reader::new(reader), opts);
    Ok(decoder.decode_root()?.1)
}

/// Decoder for NBT. Holds the input and tracks how deep into nested lists
/// and compounds it currently is.
pub struct Decoder<I: Input> {
    input: I,
    opts: DecodeOpts,
    depth: usize,
}

impl<I: Input> Decoder<I> {
    pub fn new(input: I, opts: DecodeOpts) -> Self {
        Self {
            input,
            opts,
            depth: 0,
        }
    }

    /// Consumes this decoder, returning the underlying input.
    pub fn into_inner(self) -> I {
        self.input
    }

    /// Decode the root of the input according to the configured
    /// [`RootMode`]. For a headerless root the returned name is empty.
    pub fn decode_root(&mut self) -> Result<(NbtString, Value)> {
        match self.opts.root {
            RootMode::Headerless => Ok((NbtString::default(), self.read_compound()?)),
            RootMode::Named => {
                let header = read_header(&mut self.input, false)?;
                if header.tag != Tag::Compound {
                    return Err(Error::no_root_compound());
                }
                let name = read_name(&mut self.input, &header)?;
                Ok((name, self.read_compound()?))
            }
        }
    }

    /// Read the payload of a tag. This is everything after the header; for
    /// list elements it is everything.
    pub fn read_payload(&mut self, tag: Tag) -> Result<Value> {
        Ok(match tag {
            // Only reachable as the element of a list of End, compounds stop
            // at End before getting here.
            Tag::End => Value::Byte(self.input.consume_i8()?),
            Tag::Byte => Value::Byte(self.input.consume_i8()?),
            Tag::Short => Value::Short(self.input.consume_i16()?),
            Tag::Int => Value::Int(self.input.consume_i32()?),
            Tag::Long => Value::Long(self.input.consume_i64()?),
            Tag::Float => Value::Float(self.input.consume_f32()?),
            Tag::Double => Value::Double(self.input.consume_f64()?),
            Tag::ByteArray => self.read_byte_array()?,
            Tag::String => self.read_string()?,
            Tag::List => self.read_list()?,
            Tag::Compound => self.read_compound()?,
        })
    }

    fn read_byte_array(&mut self) -> Result<Value> {
        let len = self.read_len()?;
        let bytes = self.input.consume_bytes(len)?;
        Ok(Value::ByteArray(bytes.into_iter().map(|b| b as i8).collect()))
    }

    fn read_string(&mut self) -> Result<Value> {
        let len = self.input.consume_u16()? as usize;
        Ok(Value::String(NbtString::new(self.input.consume_bytes(len)?)))
    }

    fn read_list(&mut self) -> Result<Value> {
        let element_tag = self.input.consume_byte()?;
        let len = self.read_len()?;

        if len == 0 {
            // Nothing gets dispatched, so a bad element tag goes unnoticed.
            let element_tag = u8_to_tag(element_tag).unwrap_or(Tag::End);
            return Ok(Value::List(element_tag, vec![]));
        }

        let element_tag = u8_to_tag(element_tag)?;

        self.enter()?;
        let mut elements = Vec::with_capacity(len.min(MAX_PREALLOCATED));
        for _ in 0..len {
            elements.push(self.read_payload(element_tag)?);
        }
        self.exit();

        Ok(Value::List(element_tag, elements))
    }

    fn read_compound(&mut self) -> Result<Value> {
        self.enter()?;
        let mut compound = Compound::new();

        loop {
            let header = read_header(&mut self.input, false)?;
            if header.tag == Tag::End {
                break;
            }

            let name = read_name(&mut self.input, &header)?;
            let value = self.read_payload(header.tag)?;

            if self.opts.deny_duplicate_names && compound.contains_key(&name) {
                return Err(Error::duplicate_name(name));
            }
            compound.insert(name, value);
        }

        self.exit();
        Ok(Value::Compound(compound))
    }

    /// Read the `i32` length of a byte array or list, checking it against
    /// the options.
    fn read_len(&mut self) -> Result<usize> {
        let len = self.input.consume_i32()?;
        match usize::try_from(len) {
            Ok(n) if n <= self.opts.max_seq_len => Ok(n),
            _ => Err(Error::malformed_length(len, self.opts.max_seq_len)),
        }
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.opts.max_depth {
            return Err(Error::max_depth_exceeded(self.opts.max_depth));
        }
        self.depth += 1;
        Ok(())
    }

    fn exit(&mut self) {
        self.depth -= 1;
    }
}
