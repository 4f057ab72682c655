//! Reading the header at the start of each named tag.
//!
//! A named tag is a type byte, then for anything but `End` a `u16` name
//! length and that many bytes of name. Elements of a list have no header at
//! all, their tag comes from the list.

use crate::{
    error::{Error, Result},
    input::Input,
    NbtString, Tag,
};

/// The start of a tag, before its name and payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagHeader {
    pub tag: Tag,
    /// Always zero for `End`, and for tags read as unnamed.
    pub name_len: u16,
}

impl TagHeader {
    pub(crate) const END: TagHeader = TagHeader {
        tag: Tag::End,
        name_len: 0,
    };
}

pub(crate) fn u8_to_tag(tag: u8) -> Result<Tag> {
    Tag::try_from(tag).map_err(|_| Error::invalid_tag(tag))
}

/// Read a tag header. Running out of input right where the header would
/// start is treated as an `End` tag.
pub fn read_header<I: Input>(input: &mut I, assume_unnamed: bool) -> Result<TagHeader> {
    let tag = match input.try_consume_byte()? {
        Some(t) => u8_to_tag(t)?,
        None => return Ok(TagHeader::END),
    };

    if assume_unnamed || tag == Tag::End {
        return Ok(TagHeader { tag, name_len: 0 });
    }

    let name_len = input.consume_u16()?;
    Ok(TagHeader { tag, name_len })
}

/// Read the name following `header`. The bytes are not checked to be text.
pub fn read_name<I: Input>(input: &mut I, header: &TagHeader) -> Result<NbtString> {
    if header.name_len == 0 {
        return Ok(NbtString::default());
    }

    Ok(NbtString::new(input.consume_bytes(header.name_len as usize)?))
}
