/*!
C interface.

Every function accepts null pointers.  A null field, a null text or buffer pointer, or a zero capacity makes the call return `0` without touching anything.

Fields are created with `tagfield_new` and must be released with `tagfield_free`.
*/
#![allow(non_camel_case_types)]

use std::ptr;
use std::slice;
use libc::{c_int, size_t};
use crate::field::{Field, FieldKind};

pub type unicode_t = u16;

/**
Computes the length of a zero-terminated wide string.

# Safety

`text` must be non-null and point to a zero-terminated sequence of units.
*/
unsafe fn ucslen_ptr(text: *const unicode_t) -> usize {
    let mut len = 0;
    let mut cur = text;

    while *cur != 0 {
        len += 1;
        cur = cur.offset(1);
    }

    len
}

unsafe fn borrow_text<'a>(text: *const unicode_t) -> Option<&'a [unicode_t]> {
    if text.is_null() {
        None
    } else {
        Some(slice::from_raw_parts(text, ucslen_ptr(text)))
    }
}

unsafe fn borrow_buffer<'a>(buffer: *mut unicode_t, max_chars: size_t) -> Option<&'a mut [unicode_t]> {
    if buffer.is_null() || max_chars == 0 {
        None
    } else {
        Some(slice::from_raw_parts_mut(buffer, max_chars))
    }
}

/**
Allocates an empty field of the given kind.  Returns null if `kind` is not a known field type.
*/
#[no_mangle]
pub extern "C" fn tagfield_new(kind: c_int) -> *mut Field {
    match FieldKind::from_raw(kind) {
        Some(kind) => Box::into_raw(Box::new(Field::new(kind))),
        None => ptr::null_mut(),
    }
}

/**
Releases a field allocated by `tagfield_new`.

# Safety

`field` must be null or a pointer returned by `tagfield_new` which has not already been freed.
*/
#[no_mangle]
pub unsafe extern "C" fn tagfield_free(field: *mut Field) {
    if !field.is_null() {
        drop(Box::from_raw(field));
    }
}

/**
# Safety

`field` must be null or a live field.  `text` must be null or zero-terminated.
*/
#[no_mangle]
pub unsafe extern "C" fn tagfield_set_unicode(field: *mut Field, text: *const unicode_t) -> size_t {
    match (field.as_mut(), borrow_text(text)) {
        (Some(field), Some(text)) => field.set_unicode(text),
        _ => 0,
    }
}

/**
# Safety

`field` must be null or a live field.  `text` must be null or zero-terminated.
*/
#[no_mangle]
pub unsafe extern "C" fn tagfield_add_unicode(field: *mut Field, text: *const unicode_t) -> size_t {
    match (field.as_mut(), borrow_text(text)) {
        (Some(field), Some(text)) => field.add_unicode(text),
        _ => 0,
    }
}

/**
Copies up to `max_chars - 1` units of the field's text into `buffer`, and terminates it.

# Safety

`field` must be null or a live field.  `buffer` must be null or valid for writes of `max_chars` units.
*/
#[no_mangle]
pub unsafe extern "C" fn tagfield_get_unicode(field: *const Field, buffer: *mut unicode_t, max_chars: size_t) -> size_t {
    match (field.as_ref(), borrow_buffer(buffer, max_chars)) {
        (Some(field), Some(buffer)) => field.get_unicode(buffer),
        _ => 0,
    }
}

/**
As `tagfield_get_unicode`, for the item at `item_num`.

# Safety

As `tagfield_get_unicode`.
*/
#[no_mangle]
pub unsafe extern "C" fn tagfield_get_unicode_item(
    field: *const Field,
    buffer: *mut unicode_t,
    max_chars: size_t,
    item_num: size_t,
) -> size_t {
    match (field.as_ref(), borrow_buffer(buffer, max_chars)) {
        (Some(field), Some(buffer)) => field.get_unicode_item(buffer, item_num),
        _ => 0,
    }
}

/**
# Safety

`field` must be null or a live field.
*/
#[no_mangle]
pub unsafe extern "C" fn tagfield_num_items(field: *const Field) -> size_t {
    match field.as_ref() {
        Some(field) => field.num_text_items(),
        None => 0,
    }
}
