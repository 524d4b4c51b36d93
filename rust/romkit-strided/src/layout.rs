//! Element layout: the stride of an element and how its bytes are decoded.

use byteorder::{ByteOrder, LE};
use romkit_common::{Result, error::Error};

/// How the bytes of one element are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementCodec {
    /// The element is an opaque group of `stride` bytes.
    Bytes,
    /// The element is a Unicode scalar value stored as a little-endian `u32`.
    CodePoint,
}

/// Width and interpretation of the elements of a strided view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementLayout {
    stride: usize,
    codec: ElementCodec,
}

impl ElementLayout {
    /// Elements of `stride` raw bytes.
    pub const fn bytes(stride: usize) -> ElementLayout {
        ElementLayout {
            stride,
            codec: ElementCodec::Bytes,
        }
    }

    /// Elements that are 32-bit little-endian code points.
    pub const fn code_points() -> ElementLayout {
        ElementLayout {
            stride: 4,
            codec: ElementCodec::CodePoint,
        }
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn codec(&self) -> ElementCodec {
        self.codec
    }

    /// Decodes the bytes of one element, which must be exactly `stride` long.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Element<'a>> {
        debug_assert_eq!(bytes.len(), self.stride);
        match self.codec {
            ElementCodec::Bytes => Ok(Element::Bytes(bytes)),
            ElementCodec::CodePoint => decode_code_point(bytes).map(Element::Char),
        }
    }
}

/// A decoded element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element<'a> {
    Bytes(&'a [u8]),
    Char(char),
}

impl<'a> Element<'a> {
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match *self {
            Element::Bytes(bytes) => Some(bytes),
            Element::Char(_) => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match *self {
            Element::Char(c) => Some(c),
            Element::Bytes(_) => None,
        }
    }
}

pub fn decode_code_point(bytes: &[u8]) -> Result<char> {
    if bytes.len() != 4 {
        return Err(Error::invalid_format(
            "code point",
            format!("expected 4 bytes, got {}", bytes.len()),
        ));
    }
    let unit = LE::read_u32(bytes);
    char::from_u32(unit).ok_or_else(|| {
        Error::invalid_format("code point", format!("{unit:#x} is not a scalar value"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bytes() {
        let layout = ElementLayout::bytes(2);
        assert_eq!(layout.decode(b"1h").unwrap(), Element::Bytes(b"1h"));
        assert_eq!(layout.decode(b"1h").unwrap().as_char(), None);
    }

    #[test]
    fn test_decode_code_points() {
        let layout = ElementLayout::code_points();
        assert_eq!(layout.stride(), 4);
        assert_eq!(layout.decode(&[b'H', 0, 0, 0]).unwrap(), Element::Char('H'));
        let snowman = ('☃' as u32).to_le_bytes();
        assert_eq!(layout.decode(&snowman).unwrap().as_char(), Some('☃'));

        let surrogate = 0xD800u32.to_le_bytes();
        assert!(layout.decode(&surrogate).is_err());
        assert!(decode_code_point(&[0, 0]).is_err());
    }
}
