/*!
Tag fields.

A `Field` is one typed value inside a tag frame.  Text-string fields keep their text as an encoded byte payload which can hold several null-delimited items; see the `structure` module for the layout.

The payload and the declared encoding only change together, so the payload is always laid out in the declared encoding's unit width and byte order.
*/
use std::iter;
use log::{debug, trace};
use crate::encoding::conv::convert;
use crate::encoding::TextEncoding;
use crate::error::FieldError;
use crate::structure::{self, ItemBounds};

mod unicode;

/**
Classification of a field's value.

Discriminants match the field type codes of the C interface.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Integer = 0,
    Binary = 1,
    TextString = 2,
}

impl FieldKind {
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(FieldKind::Integer),
            1 => Some(FieldKind::Binary),
            2 => Some(FieldKind::TextString),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    kind: FieldKind,
    encoding: TextEncoding,
    data: Vec<u8>,
    items: ItemBounds,
}

impl Field {
    /**
    Creates an empty field, encoded as ISO-8859-1.
    */
    pub fn new(kind: FieldKind) -> Self {
        Field::with_encoding(kind, TextEncoding::default())
    }

    pub fn with_encoding(kind: FieldKind, encoding: TextEncoding) -> Self {
        Field {
            kind: kind,
            encoding: encoding,
            data: Vec::new(),
            items: ItemBounds::default(),
        }
    }

    /**
    Creates a field around a payload produced elsewhere, typically by a tag parser.

    For text-string fields, `data` must already be in `encoding`.  A stray partial unit at the end is dropped, and a final item without a terminator gets one.  Other kinds keep `data` as-is.
    */
    pub fn with_raw_text(kind: FieldKind, encoding: TextEncoding, mut data: Vec<u8>) -> Self {
        let items = if kind == FieldKind::TextString {
            let stray = data.len() % encoding.unit_bytes();
            if stray != 0 {
                debug!("dropping {} stray byte(s) from {} payload", stray, encoding);
                let keep = data.len() - stray;
                data.truncate(keep);
            }
            structure::terminate(&mut data, encoding);
            ItemBounds::scan(&data, encoding)
        } else {
            ItemBounds::default()
        };

        Field {
            kind: kind,
            encoding: encoding,
            data: data,
            items: items,
        }
    }

    pub fn get_type(&self) -> FieldKind {
        self.kind
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /**
    Number of text items in the payload.
    */
    pub fn num_text_items(&self) -> usize {
        self.items.len()
    }

    /**
    The payload, including item terminators.
    */
    pub fn raw_bytes(&self) -> &[u8] {
        &self.data
    }

    /**
    Empties the payload.  The encoding is left alone.
    */
    pub fn clear(&mut self) {
        self.data.clear();
        self.items.clear();
    }

    /**
    Re-encodes a text field.  Returns `true` if the encoding changed.

    See `try_set_encoding`.
    */
    pub fn set_encoding(&mut self, encoding: TextEncoding) -> bool {
        self.try_set_encoding(encoding).unwrap_or_else(|err| {
            debug!("encoding not changed: {}", err);
            false
        })
    }

    /**
    Re-encodes a text field, converting its payload to the new encoding.

    Returns `Ok(false)` if the field already has this encoding.

    # Failure

    Fails, leaving the field untouched, if the field is not a text-string field or if its text cannot be represented in `encoding`.
    */
    pub fn try_set_encoding(&mut self, encoding: TextEncoding) -> Result<bool, FieldError> {
        self.require_text()?;
        if encoding == self.encoding {
            return Ok(false);
        }

        let data = convert(&self.data, self.encoding, encoding)?;
        trace!("re-encoded field from {} to {}", self.encoding, encoding);

        self.items = ItemBounds::scan(&data, encoding);
        self.data = data;
        self.encoding = encoding;
        Ok(true)
    }

    pub(crate) fn require_text(&self) -> Result<(), FieldError> {
        match self.kind {
            FieldKind::TextString => Ok(()),
            kind => Err(FieldError::WrongFieldKind { kind: kind }),
        }
    }

    /**
    Replaces the payload with a single item.  Returns the number of units stored.

    `text` must be encoded in the field's encoding and must not contain a zero unit.  An empty `text` leaves the field with no items.
    */
    pub(crate) fn set_text_i(&mut self, text: &[u8]) -> usize {
        self.clear();
        if text.is_empty() {
            return 0;
        }
        self.push_item(text)
    }

    /**
    Appends one item.  Returns the number of units stored.

    On a field with no items this is `set_text_i`.  The same restrictions on `text` apply.
    */
    pub(crate) fn add_text_i(&mut self, text: &[u8]) -> usize {
        if self.items.is_empty() {
            return self.set_text_i(text);
        }
        self.push_item(text)
    }

    fn push_item(&mut self, text: &[u8]) -> usize {
        let width = self.encoding.unit_bytes();
        let start = self.data.len();

        self.data.extend_from_slice(text);
        self.items.push(start..self.data.len());
        self.data.extend(iter::repeat(0u8).take(width));

        trace!("stored item {} ({} bytes)", self.items.len() - 1, text.len());
        text.len() / width
    }

    /**
    Payload bytes without the final terminator.
    */
    fn content(&self) -> &[u8] {
        let width = self.encoding.unit_bytes();
        if structure::is_terminated(&self.data, self.encoding) {
            &self.data[..self.data.len() - width]
        } else {
            &self.data
        }
    }
}
