/*!
This crate implements the wide-character text accessors of a tag field: the operations which set, append to, and read back UTF-16 text held by one field of a metadata tag.

For more details, see the [additional documentation](doc/index.html).

# Quick Reference

A text-string `Field` holds an encoded byte payload made of zero or more null-terminated items.  The following table describes the Unicode operations, and when each one does nothing.  Every operation does nothing on a field which is not a text-string field.

| Operation | Effect | Rejected when |
| ---: | --- | --- |
| `set_unicode` | Replaces the text; declares the field UTF-16 | Only by the field kind |
| `add_unicode` | Appends an item | Field is not in a wide encoding |
| `get_unicode` | Copies the whole text, bounded and terminated | Empty buffer; unconvertible payload |
| `get_unicode_item` | Copies one item, bounded and terminated | Empty buffer; index out of range; unconvertible item |
| `raw_unicode_text` | Borrows the whole payload as wide units | Only by the field kind |
| `raw_unicode_text_item` | Borrows one item as wide units | Field is not in a wide encoding; index out of range |

Rejected operations return `0` or `None`.  Each has a `try_` sibling which returns a `FieldError` saying why.
*/
pub mod copy;
#[doc(hidden)] pub mod doc;
pub mod encoding;
pub mod error;
pub mod field;
pub mod structure;
pub mod view;

#[cfg(feature="ffi")]
pub mod ffi;

mod util;

pub use copy::bounded_copy;
pub use encoding::{ByteOrder, TextEncoding, UnicodeUnit, Width, NULL_UNICODE};
pub use encoding::conv::{convert, ConvertError};
pub use error::{FieldError, Legacy};
pub use field::{Field, FieldKind};
pub use structure::ucslen;
pub use view::{Items, WideText};
