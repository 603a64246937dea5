/*!
Text encodings and code units.

A field's payload is a flat run of bytes; the field's `TextEncoding` says how wide each code unit is and in which order its bytes are stored.
*/
pub mod conv;

use std::fmt;
use std::mem;
use std::slice;

macro_rules! naive_unit_impl {
    ($ty_name:ident) => {
        impl Unit for $ty_name {
            const WIDTH: usize = mem::size_of::<$ty_name>();

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0
            }
        }
    };
}

/**
A fixed-width storage unit of some text encoding.
*/
pub trait Unit: Copy + PartialEq {
    /**
    Width of the unit, in bytes.
    */
    const WIDTH: usize;

    fn zero() -> Self;
    fn is_zero(&self) -> bool;
}

naive_unit_impl! { u8 }
naive_unit_impl! { u16 }

/**
A single wide code unit, as exchanged with callers of the Unicode accessors.
*/
pub type UnicodeUnit = u16;

/**
The terminating wide unit.
*/
pub const NULL_UNICODE: UnicodeUnit = 0;

/**
Text encodings a tag field may declare.

The discriminants match the encoding byte stored at the start of an ID3v2 text frame.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    /// ISO-8859-1.  One byte per unit.
    Latin1 = 0,
    /// UTF-16.  Held in memory in host byte order, without a byte order mark.
    Utf16 = 1,
    /// UTF-16, big-endian.
    Utf16Be = 2,
    /// UTF-8.  One byte per unit.
    Utf8 = 3,
}

/**
The two states of the encoding gate: a payload either holds single-byte units or double-byte units.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    Narrow,
    Wide,
}

/**
Byte order of a double-byte payload.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Native,
    Big,
}

impl TextEncoding {
    /**
    Maps an ID3v2 encoding byte to an encoding.
    */
    pub fn from_id3(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(TextEncoding::Latin1),
            1 => Some(TextEncoding::Utf16),
            2 => Some(TextEncoding::Utf16Be),
            3 => Some(TextEncoding::Utf8),
            _ => None,
        }
    }

    pub fn id3(self) -> u8 {
        self as u8
    }

    pub fn width(self) -> Width {
        match self {
            TextEncoding::Latin1 | TextEncoding::Utf8 => Width::Narrow,
            TextEncoding::Utf16 | TextEncoding::Utf16Be => Width::Wide,
        }
    }

    #[inline]
    pub fn is_wide(self) -> bool {
        self.width() == Width::Wide
    }

    /**
    Number of bytes in one code unit of this encoding.
    */
    pub fn unit_bytes(self) -> usize {
        match self.width() {
            Width::Narrow => <u8 as Unit>::WIDTH,
            Width::Wide => <u16 as Unit>::WIDTH,
        }
    }

    /**
    Byte order of the units.  Meaningless for narrow encodings, which report `Native`.
    */
    pub fn byte_order(self) -> ByteOrder {
        match self {
            TextEncoding::Utf16Be => ByteOrder::Big,
            _ => ByteOrder::Native,
        }
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        TextEncoding::Latin1
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            TextEncoding::Latin1 => "ISO-8859-1",
            TextEncoding::Utf16 => "UTF-16",
            TextEncoding::Utf16Be => "UTF-16BE",
            TextEncoding::Utf8 => "UTF-8",
        };
        fmt.write_str(name)
    }
}

impl ByteOrder {
    #[inline]
    pub fn read(self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::Native => u16::from_ne_bytes(bytes),
            ByteOrder::Big => u16::from_be_bytes(bytes),
        }
    }

    #[inline]
    pub fn write(self, unit: u16) -> [u8; 2] {
        match self {
            ByteOrder::Native => unit.to_ne_bytes(),
            ByteOrder::Big => unit.to_be_bytes(),
        }
    }
}

/**
Iterates over the double-byte units of a payload.

A trailing odd byte is not a unit, and is never yielded.
*/
#[derive(Clone, Debug)]
pub struct WideUnits<'a> {
    chunks: slice::ChunksExact<'a, u8>,
    order: ByteOrder,
}

impl<'a> WideUnits<'a> {
    pub fn new(bytes: &'a [u8], order: ByteOrder) -> Self {
        WideUnits {
            chunks: bytes.chunks_exact(2),
            order: order,
        }
    }
}

impl<'a> Iterator for WideUnits<'a> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        self.chunks.next().map(|pair| self.order.read([pair[0], pair[1]]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<'a> ExactSizeIterator for WideUnits<'a> {}

/**
Serialises wide units into payload bytes.
*/
pub fn wide_bytes(units: &[u16], order: ByteOrder) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(units.len() * 2);
    for &unit in units {
        bytes.extend_from_slice(&order.write(unit));
    }
    bytes
}
