/*!
Borrowed views of wide field text.
*/
use std::char;
use std::fmt::{self, Debug};
use crate::encoding::{ByteOrder, UnicodeUnit, Unit, WideUnits};

/**
A non-owning view of wide text held by a field.

The view borrows the field, so it cannot outlive it, and the field cannot be mutated while the view exists.  To keep the text past the next mutation, copy it out with `to_vec`.

Units are read from the field's own bytes in the field's byte order.  The view never includes a trailing odd byte.
*/
#[derive(Copy, Clone)]
pub struct WideText<'a> {
    bytes: &'a [u8],
    order: ByteOrder,
}

impl<'a> WideText<'a> {
    pub(crate) fn new(bytes: &'a [u8], order: ByteOrder) -> Self {
        let even = bytes.len() - bytes.len() % 2;
        WideText {
            bytes: &bytes[..even],
            order: order,
        }
    }

    /**
    Number of units in the view.
    */
    pub fn len(&self) -> usize {
        self.bytes.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<UnicodeUnit> {
        let at = index.checked_mul(2)?;
        let pair = self.bytes.get(at..at.checked_add(2)?)?;
        Some(self.order.read([pair[0], pair[1]]))
    }

    pub fn iter(&self) -> WideUnits<'a> {
        WideUnits::new(self.bytes, self.order)
    }

    /**
    Length, in units, of the text before the first zero unit.

    For a view over a whole multi-item payload, this is the length of the first item.
    */
    pub fn unit_len(&self) -> usize {
        self.iter().position(|u| u.is_zero()).unwrap_or(self.len())
    }

    /**
    Copies the viewed units into an owned buffer.
    */
    pub fn to_vec(&self) -> Vec<UnicodeUnit> {
        self.iter().collect()
    }

    /**
    Decodes the view as UTF-16, replacing unpaired surrogates with U+FFFD.
    */
    pub fn to_string_lossy(&self) -> String {
        char::decode_utf16(self.iter())
            .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }

    /**
    The underlying payload bytes.
    */
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /**
    Splits the view on zero units.

    Each item is yielded as its own view, without its terminator.  An empty view yields nothing, so the view of a payload holding one empty item cannot be told apart from that of an empty payload; use `Field::num_text_items` to tell them apart.
    */
    pub fn items(&self) -> Items<'a> {
        Items {
            rest: if self.bytes.is_empty() { None } else { Some(self.bytes) },
            order: self.order,
        }
    }
}

/**
Iterator over the zero-separated items of a `WideText`.
*/
#[derive(Clone, Debug)]
pub struct Items<'a> {
    rest: Option<&'a [u8]>,
    order: ByteOrder,
}

impl<'a> Iterator for Items<'a> {
    type Item = WideText<'a>;

    fn next(&mut self) -> Option<WideText<'a>> {
        let rest = self.rest?;
        let end = rest.chunks_exact(2)
            .position(|pair| pair[0] == 0 && pair[1] == 0)
            .map(|unit| unit * 2);

        match end {
            Some(end) => {
                self.rest = Some(&rest[end + 2..]);
                Some(WideText::new(&rest[..end], self.order))
            },
            None => {
                self.rest = None;
                Some(WideText::new(rest, self.order))
            },
        }
    }
}

impl<'a> Debug for WideText<'a> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "WideText({:?})", self.to_string_lossy())
    }
}

impl<'a, 'b> PartialEq<WideText<'b>> for WideText<'a> {
    fn eq(&self, other: &WideText<'b>) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<'a> Eq for WideText<'a> {}

impl<'a> PartialEq<[UnicodeUnit]> for WideText<'a> {
    fn eq(&self, other: &[UnicodeUnit]) -> bool {
        self.iter().eq(other.iter().cloned())
    }
}

impl<'a, 'b> PartialEq<&'b [UnicodeUnit]> for WideText<'a> {
    fn eq(&self, other: &&'b [UnicodeUnit]) -> bool {
        self.iter().eq(other.iter().cloned())
    }
}
