use serde_json::json;

use super::builder::Builder;
use crate::error::{ErrorKind, Result};
use crate::{from_bytes, Compound, NbtString, Tag, Value};

// Given a v: Value, a key: str, and a pattern, check the value is a compound
// with that key and its value matches the pattern.
macro_rules! assert_contains {
    ($v:ident, $key:expr, $p:pat) => {
        match $v.get($key) {
            Some($p) => {}
            other => panic!("expected Some({}), got {:?}", stringify!($p), other),
        }
    };
}

#[test]
fn every_tag() -> Result<()> {
    let input = Builder::new()
        .byte("byte", 1)
        .short("short", 2)
        .int("int", 3)
        .long("long", 4)
        .float("float", 5.0)
        .double("double", 6.0)
        .byte_array("byte_array", &[7])
        .string("string", "8")
        .start_list("list", Tag::Int, 1)
        .int_payload(9)
        .start_compound("compound")
        .end_compound()
        .build();

    let v = from_bytes(&input)?;

    assert_contains!(v, "byte", Value::Byte(1));
    assert_contains!(v, "short", Value::Short(2));
    assert_contains!(v, "int", Value::Int(3));
    assert_contains!(v, "long", Value::Long(4));
    assert_contains!(v, "float", Value::Float(_));
    assert_contains!(v, "double", Value::Double(_));
    assert_contains!(v, "byte_array", Value::ByteArray(_));
    assert_contains!(v, "string", Value::String(_));
    assert_contains!(v, "list", Value::List(Tag::Int, _));
    assert_contains!(v, "compound", Value::Compound(_));

    for (name, value) in v.as_compound().unwrap() {
        let expected = match &*name.to_str()? {
            "byte_array" => Tag::ByteArray,
            "string" => Tag::String,
            "list" => Tag::List,
            "compound" => Tag::Compound,
            "byte" => Tag::Byte,
            "short" => Tag::Short,
            "int" => Tag::Int,
            "long" => Tag::Long,
            "float" => Tag::Float,
            "double" => Tag::Double,
            other => panic!("unexpected name {}", other),
        };
        assert_eq!(value.tag(), expected);
    }
    Ok(())
}

#[test]
fn numeric_accessors() {
    assert_eq!(Value::Byte(-1).as_i64(), Some(-1));
    assert_eq!(Value::Long(i64::MAX).as_i64(), Some(i64::MAX));
    assert_eq!(Value::Float(1.5).as_f64(), Some(1.5));
    assert_eq!(Value::Short(3).as_f64(), Some(3.0));
    assert_eq!(Value::String("1".into()).as_i64(), None);
    assert_eq!(Value::Int(1).as_str(), None);
    assert_eq!(Value::Int(1).get("a"), None);
}

#[test]
fn cesu8_string() -> Result<()> {
    // Some unicode that has a different representation in cesu8 and utf-8.
    let modified_unicode_str = cesu8::to_java_cesu8("😈");

    let input = Builder::new()
        .tag(Tag::String)
        .name("cesu8")
        .raw_str_len(modified_unicode_str.len())
        .raw_bytes(&modified_unicode_str)
        .build();

    let v = from_bytes(&input)?;
    let s = v.get("cesu8").unwrap();

    assert_eq!(s.as_str().as_deref(), Some("😈"));
    assert_ne!(
        s,
        &Value::String(NbtString::new("😈".as_bytes().to_vec()))
    );
    Ok(())
}

#[test]
fn check_text_finds_invalid_strings() -> Result<()> {
    let bs = [255, 255, 255];
    let input = Builder::new()
        .start_compound("outer")
        .start_list("list", Tag::String, 1)
        .raw_str_len(bs.len())
        .raw_bytes(&bs)
        .end_compound()
        .build();

    let v = from_bytes(&input)?;
    let err = v.check_text().unwrap_err();

    assert_eq!(err.kind(), &ErrorKind::Nonunicode(bs.to_vec()));
    Ok(())
}

#[test]
fn check_text_finds_invalid_names() -> Result<()> {
    let input = Builder::new()
        .tag(Tag::Int)
        .raw_str_len(1)
        .raw_bytes(&[0xff])
        .int_payload(1)
        .build();

    let v = from_bytes(&input)?;

    assert!(v.check_text().is_err());
    Ok(())
}

#[test]
fn check_text_accepts_valid() -> Result<()> {
    let input = Builder::new()
        .start_compound("ü")
        .string("name", "Ærø")
        .end_compound()
        .build();

    from_bytes(&input)?.check_text()
}

#[test]
fn json_rendering() -> Result<()> {
    let input = Builder::new()
        .start_compound("")
        .byte("byte", -1)
        .short("short", 2)
        .int("int", 3)
        .long("long", i64::MAX)
        .float("float", 0.5)
        .double("double", 0.25)
        .byte_array("bytes", &[1, -2])
        .string("string", "hello")
        .start_list("list", Tag::Compound, 1)
        .start_anon_compound()
        .byte("a", 1)
        .end_compound()
        .start_list("empty", Tag::Byte, 0)
        .end_compound()
        .build();

    let v = from_bytes(&input)?;

    assert_eq!(
        serde_json::to_value(&v).unwrap(),
        json!({
            "": {
                "byte": -1,
                "short": 2,
                "int": 3,
                "long": i64::MAX,
                "float": 0.5,
                "double": 0.25,
                "bytes": [1, -2],
                "string": "hello",
                "list": [{"a": 1}],
                "empty": [],
            }
        })
    );
    Ok(())
}

#[test]
fn json_non_finite_floats_are_null() {
    let v = Value::Double(f64::NAN);
    assert_eq!(serde_json::to_string(&v).unwrap(), "null");

    let v = Value::Float(f32::INFINITY);
    assert_eq!(serde_json::to_string(&v).unwrap(), "null");
}

#[test]
fn json_invalid_text_is_lossy() {
    let mut c = Compound::new();
    c.insert(NbtString::new(vec![b'k', 0xff]), Value::String(NbtString::new(vec![0xff])));
    let v = Value::Compound(c);

    assert_eq!(
        serde_json::to_string(&v).unwrap(),
        "{\"k\u{fffd}\":\"\u{fffd}\"}"
    );
}

#[test]
fn from_impls() {
    assert_eq!(Value::from(1i8), Value::Byte(1));
    assert_eq!(Value::from(1i16), Value::Short(1));
    assert_eq!(Value::from(1i32), Value::Int(1));
    assert_eq!(Value::from(1i64), Value::Long(1));
    assert_eq!(Value::from(1f32), Value::Float(1.0));
    assert_eq!(Value::from(1f64), Value::Double(1.0));
    assert_eq!(Value::from(vec![1i8]), Value::ByteArray(vec![1]));
    assert_eq!(Value::from("s"), Value::String("s".into()));
}

#[cfg(feature = "preserve-order")]
#[test]
fn preserve_order() -> Result<()> {
    let input = Builder::new()
        .byte("z", 1)
        .byte("a", 2)
        .byte("m", 3)
        .build();

    let v = from_bytes(&input)?;
    let keys: Vec<_> = v
        .as_compound()
        .unwrap()
        .keys()
        .map(|k| k.to_string())
        .collect();

    assert_eq!(keys, vec!["z", "a", "m"]);
    assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"z":1,"a":2,"m":3}"#);
    Ok(())
}

#[test]
fn json_invalid_names_can_collide() -> Result<()> {
    let input = Builder::new()
        .tag(Tag::Byte)
        .raw_str_len(1)
        .raw_bytes(&[0xff])
        .byte_payload(1)
        .tag(Tag::Byte)
        .raw_str_len(1)
        .raw_bytes(&[0xfe])
        .byte_payload(2)
        .end_compound()
        .build();

    let v = from_bytes(&input)?;
    assert_eq!(v.as_compound().map(|c| c.len()), Some(2));

    // Both names render as U+FFFD, so one entry is lost in the JSON.
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json.as_object().map(|o| o.len()), Some(1));

    assert!(matches!(
        v.check_text().unwrap_err().kind(),
        ErrorKind::Nonunicode(_)
    ));
    Ok(())
}
