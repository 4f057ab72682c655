//! Primitive readers for the two kinds of input the decoder accepts: a slice
//! already in memory, and anything implementing [`Read`].
//!
//! Every multi-byte value in NBT is big-endian.

use std::io::{ErrorKind, Read};

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{Error, Result};

mod private {
    // Only this crate can implement this trait. Other traits can inherit from
    // Sealed in order to prevent other crates from creating implementations.
    pub trait Sealed {}
}

pub trait Input: private::Sealed {
    /// Consume a single byte, or `None` if the input has cleanly ended.
    /// This is the only read where running out of input is not an error.
    fn try_consume_byte(&mut self) -> Result<Option<u8>>;

    /// Consume exactly `n` bytes.
    fn consume_bytes(&mut self, n: usize) -> Result<Vec<u8>>;

    fn consume_u16(&mut self) -> Result<u16>;
    fn consume_i16(&mut self) -> Result<i16>;
    fn consume_i32(&mut self) -> Result<i32>;
    fn consume_i64(&mut self) -> Result<i64>;
    fn consume_f32(&mut self) -> Result<f32>;
    fn consume_f64(&mut self) -> Result<f64>;

    fn consume_byte(&mut self) -> Result<u8> {
        self.try_consume_byte()?.ok_or_else(Error::unexpected_eof)
    }

    fn consume_i8(&mut self) -> Result<i8> {
        Ok(self.consume_byte()? as i8)
    }
}

pub struct Slice<'de> {
    pub(crate) data: &'de [u8],
}

impl<'de> Slice<'de> {
    pub fn new(data: &'de [u8]) -> Self {
        Self { data }
    }

    /// The input that has not yet been consumed.
    pub fn remaining(&self) -> &'de [u8] {
        self.data
    }

    fn consume(&mut self, n: usize) -> Result<&'de [u8]> {
        if n <= self.data.len() {
            let (ret, rest) = self.data.split_at(n);
            self.data = rest;
            Ok(ret)
        } else {
            Err(Error::unexpected_eof())
        }
    }
}

impl<'de> private::Sealed for Slice<'de> {}

impl<'de> Input for Slice<'de> {
    fn try_consume_byte(&mut self) -> Result<Option<u8>> {
        match self.data.split_first() {
            Some((b, rest)) => {
                self.data = rest;
                Ok(Some(*b))
            }
            None => Ok(None),
        }
    }

    fn consume_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        Ok(self.consume(n)?.to_vec())
    }

    fn consume_u16(&mut self) -> Result<u16> {
        let mut bs = self.consume(std::mem::size_of::<u16>())?;
        Ok(bs.read_u16::<BigEndian>()?)
    }

    fn consume_i16(&mut self) -> Result<i16> {
        let mut bs = self.consume(std::mem::size_of::<i16>())?;
        Ok(bs.read_i16::<BigEndian>()?)
    }

    fn consume_i32(&mut self) -> Result<i32> {
        let mut bs = self.consume(std::mem::size_of::<i32>())?;
        Ok(bs.read_i32::<BigEndian>()?)
    }

    fn consume_i64(&mut self) -> Result<i64> {
        let mut bs = self.consume(std::mem::size_of::<i64>())?;
        Ok(bs.read_i64::<BigEndian>()?)
    }

    fn consume_f32(&mut self) -> Result<f32> {
        let mut bs = self.consume(std::mem::size_of::<f32>())?;
        Ok(bs.read_f32::<BigEndian>()?)
    }

    fn consume_f64(&mut self) -> Result<f64> {
        let mut bs = self.consume(std::mem::size_of::<f64>())?;
        Ok(bs.read_f64::<BigEndian>()?)
    }
}

pub struct Reader<R: Read> {
    pub(crate) reader: R,
}

impl<R: Read> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Consumes this input, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> private::Sealed for Reader<R> {}

impl<R: Read> Input for Reader<R> {
    fn try_consume_byte(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn consume_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        // Allocation grows with the bytes actually read, not with `n`.
        let mut buf = Vec::new();
        let read = (&mut self.reader).take(n as u64).read_to_end(&mut buf)?;
        if read < n {
            return Err(Error::unexpected_eof());
        }
        Ok(buf)
    }

    fn consume_u16(&mut self) -> Result<u16> {
        Ok(self.reader.read_u16::<BigEndian>()?)
    }

    fn consume_i16(&mut self) -> Result<i16> {
        Ok(self.reader.read_i16::<BigEndian>()?)
    }

    fn consume_i32(&mut self) -> Result<i32> {
        Ok(self.reader.read_i32::<BigEndian>()?)
    }

    fn consume_i64(&mut self) -> Result<i64> {
        Ok(self.reader.read_i64::<BigEndian>()?)
    }

    fn consume_f32(&mut self) -> Result<f32> {
        Ok(self.reader.read_f32::<BigEndian>()?)
    }

    fn consume_f64(&mut self) -> Result<f64> {
        Ok(self.reader.read_f64::<BigEndian>()?)
    }
}
