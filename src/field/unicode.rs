/*!
Wide-character accessors for text-string fields.

`set_unicode` is a hard reset: it discards the payload and declares the field UTF-16, whatever it held before.  `add_unicode` only appends, and only to a field that is already wide; appending wide units to a narrow payload would corrupt it.
*/
use std::ops::Range;
use log::trace;
use crate::copy::bounded_copy;
use crate::encoding::conv::convert;
use crate::encoding::{wide_bytes, ByteOrder, TextEncoding, UnicodeUnit, WideUnits, Width};
use crate::error::{FieldError, Legacy};
use crate::structure::ucslen;
use crate::view::WideText;
use super::Field;

impl Field {
    /**
    Replaces the field's text with `text`.  Returns the number of units stored, or `0` if rejected.

    See `try_set_unicode`.
    */
    pub fn set_unicode(&mut self, text: &[UnicodeUnit]) -> usize {
        self.try_set_unicode(text).legacy()
    }

    /**
    Replaces the field's text with `text`, and switches the field to UTF-16.

    `text` is read up to its first zero unit, if it has one.  Setting empty text leaves the field with no items.

    # Failure

    Fails if the field is not a text-string field.  The field is not modified.
    */
    pub fn try_set_unicode(&mut self, text: &[UnicodeUnit]) -> Result<usize, FieldError> {
        self.require_text()?;
        let text = &text[..ucslen(text)];

        // The old payload is being replaced, so there is nothing to convert.
        self.clear();
        self.encoding = TextEncoding::Utf16;
        trace!("set {} units of wide text", text.len());

        let bytes = wide_bytes(text, self.encoding.byte_order());
        Ok(self.set_text_i(&bytes))
    }

    /**
    Appends `text` as a new item.  Returns the number of units stored, or `0` if rejected.

    See `try_add_unicode`.
    */
    pub fn add_unicode(&mut self, text: &[UnicodeUnit]) -> usize {
        self.try_add_unicode(text).legacy()
    }

    /**
    Appends `text` as a new item, after a separating zero unit.

    `text` is read up to its first zero unit, if it has one.  On a field with no items, this behaves like `try_set_unicode`, except that the encoding is never changed.

    # Failure

    Fails if the field is not a text-string field, or if it is not already in a wide encoding.  The field is not modified.
    */
    pub fn try_add_unicode(&mut self, text: &[UnicodeUnit]) -> Result<usize, FieldError> {
        self.require_text()?;
        self.require_wide()?;
        let text = &text[..ucslen(text)];

        let bytes = wide_bytes(text, self.encoding.byte_order());
        Ok(self.add_text_i(&bytes))
    }

    /**
    Copies the field's whole text into `buffer` as UTF-16.  Returns the number of units copied, or `0` if rejected.

    See `try_get_unicode`.
    */
    pub fn get_unicode(&self, buffer: &mut [UnicodeUnit]) -> usize {
        self.try_get_unicode(buffer).legacy()
    }

    /**
    Copies the field's whole text into `buffer` as UTF-16, truncating to `buffer.len() - 1` units and zero-terminating.

    For fields with several items, the copy includes the zero units separating them.  Truncation is silent; compare the result against `raw_unicode_text().len()` to detect it.

    # Failure

    Fails if the field is not a text-string field, if `buffer` is empty, or if the payload cannot be converted to UTF-16.  `buffer` is not written on failure.
    */
    pub fn try_get_unicode(&self, buffer: &mut [UnicodeUnit]) -> Result<usize, FieldError> {
        self.require_text()?;
        if buffer.is_empty() {
            return Err(FieldError::NullOrEmptyInput);
        }

        let utf = self.to_wide(self.content())?;
        Ok(bounded_copy(&utf, buffer))
    }

    /**
    Copies one item into `buffer` as UTF-16.  Returns the number of units copied, or `0` if rejected.

    See `try_get_unicode_item`.
    */
    pub fn get_unicode_item(&self, buffer: &mut [UnicodeUnit], index: usize) -> usize {
        self.try_get_unicode_item(buffer, index).legacy()
    }

    /**
    Copies the item at `index` into `buffer` as UTF-16, with the same truncation and termination rules as `try_get_unicode`.

    Only the selected item is converted, so this works for fields in any encoding.

    # Failure

    As `try_get_unicode`, and also if `index` is not less than `num_text_items()`.
    */
    pub fn try_get_unicode_item(&self, buffer: &mut [UnicodeUnit], index: usize) -> Result<usize, FieldError> {
        self.require_text()?;
        if buffer.is_empty() {
            return Err(FieldError::NullOrEmptyInput);
        }

        let range = self.item_range(index)?;
        let utf = self.to_wide(&self.data[range])?;
        Ok(bounded_copy(&utf, buffer))
    }

    /**
    Views the whole payload as wide units, or `None` if rejected.

    See `try_raw_unicode_text`.
    */
    pub fn raw_unicode_text(&self) -> Option<WideText<'_>> {
        self.try_raw_unicode_text().legacy()
    }

    /**
    Views the whole payload as wide units, without the final terminator.

    No conversion takes place: the payload bytes are read pairwise in the field's byte order, whatever the field's encoding.  Only a wide field yields meaningful text.

    # Failure

    Fails if the field is not a text-string field.
    */
    pub fn try_raw_unicode_text(&self) -> Result<WideText<'_>, FieldError> {
        self.require_text()?;
        Ok(WideText::new(self.content(), self.encoding.byte_order()))
    }

    /**
    Views a single item, or `None` if rejected.

    See `try_raw_unicode_text_item`.
    */
    pub fn raw_unicode_text_item(&self, index: usize) -> Option<WideText<'_>> {
        self.try_raw_unicode_text_item(index).legacy()
    }

    /**
    Views the item at `index`, without its terminator.

    The view points into the field's own payload, so it remains valid for as long as the borrow of the field does.

    # Failure

    Fails if the field is not a text-string field, if it is not in a wide encoding, or if `index` is not less than `num_text_items()`.
    */
    pub fn try_raw_unicode_text_item(&self, index: usize) -> Result<WideText<'_>, FieldError> {
        self.require_text()?;
        self.require_wide()?;

        let range = self.item_range(index)?;
        Ok(WideText::new(&self.data[range], self.encoding.byte_order()))
    }

    fn require_wide(&self) -> Result<(), FieldError> {
        match self.encoding.width() {
            Width::Wide => Ok(()),
            Width::Narrow => Err(FieldError::EncodingMismatch { encoding: self.encoding }),
        }
    }

    fn item_range(&self, index: usize) -> Result<Range<usize>, FieldError> {
        self.items.get(index).ok_or(FieldError::ItemIndexOutOfRange {
            index: index,
            count: self.items.len(),
        })
    }

    fn to_wide(&self, bytes: &[u8]) -> Result<Vec<UnicodeUnit>, FieldError> {
        let utf = convert(bytes, self.encoding, TextEncoding::Utf16)?;
        Ok(WideUnits::new(&utf, ByteOrder::Native).collect())
    }
}
