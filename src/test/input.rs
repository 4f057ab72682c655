use crate::error::{ErrorKind, Result};
use crate::input::{Input, Reader, Slice};

const DATA: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

#[test]
fn slice_big_endian() -> Result<()> {
    let mut input = Slice::new(&DATA);
    assert_eq!(input.consume_i16()?, 0x0102);
    assert_eq!(input.consume_u16()?, 0x0304);
    assert_eq!(input.consume_i32()?, 0x05060708);

    let mut input = Slice::new(&DATA);
    assert_eq!(input.consume_i64()?, 0x0102030405060708);
    Ok(())
}

#[test]
fn reader_big_endian() -> Result<()> {
    let mut input = Reader::new(&DATA[..]);
    assert_eq!(input.consume_i16()?, 0x0102);
    assert_eq!(input.consume_u16()?, 0x0304);
    assert_eq!(input.consume_i32()?, 0x05060708);

    let mut input = Reader::new(&DATA[..]);
    assert_eq!(input.consume_i64()?, 0x0102030405060708);
    Ok(())
}

#[test]
fn signed_values() -> Result<()> {
    let mut input = Slice::new(&[0xff, 0xff, 0xfe]);
    assert_eq!(input.consume_i8()?, -1);
    assert_eq!(input.consume_byte()?, 0xff);
    assert_eq!(input.consume_i8()?, -2);

    let mut input = Reader::new(&[0x80u8, 0x00][..]);
    assert_eq!(input.consume_i16()?, i16::MIN);
    Ok(())
}

#[test]
fn floats() -> Result<()> {
    let mut bytes = vec![];
    bytes.extend_from_slice(&1.5f32.to_be_bytes());
    bytes.extend_from_slice(&(-2.25f64).to_be_bytes());

    let mut input = Slice::new(&bytes);
    assert_eq!(input.consume_f32()?, 1.5);
    assert_eq!(input.consume_f64()?, -2.25);

    let mut input = Reader::new(bytes.as_slice());
    assert_eq!(input.consume_f32()?, 1.5);
    assert_eq!(input.consume_f64()?, -2.25);
    Ok(())
}

#[test]
fn try_consume_byte_at_end() -> Result<()> {
    let mut input = Slice::new(&[9]);
    assert_eq!(input.try_consume_byte()?, Some(9));
    assert_eq!(input.try_consume_byte()?, None);

    let mut input = Reader::new(&[9u8][..]);
    assert_eq!(input.try_consume_byte()?, Some(9));
    assert_eq!(input.try_consume_byte()?, None);
    Ok(())
}

#[test]
fn short_reads_are_eof() {
    let mut input = Slice::new(&DATA[..3]);
    assert_eq!(
        input.consume_i32().unwrap_err().kind(),
        &ErrorKind::UnexpectedEof
    );

    let mut input = Reader::new(&DATA[..3]);
    assert_eq!(
        input.consume_i32().unwrap_err().kind(),
        &ErrorKind::UnexpectedEof
    );

    let mut input = Slice::new(&[]);
    assert!(input.consume_byte().unwrap_err().is_eof());
}

#[test]
fn slice_short_read_consumes_nothing() {
    let mut input = Slice::new(&DATA[..3]);
    assert!(input.consume_bytes(4).is_err());
    assert_eq!(input.remaining(), &DATA[..3]);
}

#[test]
fn consume_bytes() -> Result<()> {
    let mut input = Slice::new(&DATA);
    assert_eq!(input.consume_bytes(3)?, vec![1, 2, 3]);
    assert_eq!(input.consume_bytes(0)?, Vec::<u8>::new());

    let mut input = Reader::new(&DATA[..]);
    assert_eq!(input.consume_bytes(3)?, vec![1, 2, 3]);
    assert!(input.consume_bytes(6).unwrap_err().is_eof());
    Ok(())
}
