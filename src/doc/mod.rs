/*!
Additional documentation.

# Encodings

See the `encoding` module.

| Byte | Name      | Width  | In-memory layout |
| ---- | --------- | ------ | ---------------- |
| `0`  | `Latin1`  | Narrow | One byte per character. |
| `1`  | `Utf16`   | Wide   | Host byte order.  The byte order mark written to tags is *not* part of the payload. |
| `2`  | `Utf16Be` | Wide   | Big-endian. |
| `3`  | `Utf8`    | Narrow | Possibly invalid UTF-8, until converted. |

# Payload layout

See the `structure` module.  Every item is followed by one zero unit of the encoding's width, including the last.  An empty payload has no items; a payload of a single zero unit has one empty item.

# Common Misconceptions and Mistakes

* *"`add_unicode` works on any text field."*  Only on fields already in a wide encoding.  Call `set_unicode` first, or `set_encoding`.

* *"A return of `0` means the field is empty."*  It can also mean the call was rejected.  Use the `try_` forms if the difference matters.

* *"`get_unicode` returns the first item."*  It returns all of them, separated by zero units.  Use `get_unicode_item` for one item.

* *"A short return from `get_unicode` means the text was short."*  Copies are truncated silently to fit the buffer, terminator included.  Compare against `raw_unicode_text().len()`.

* *"A `WideText` can be kept around."*  It borrows the field.  Copy it out with `to_vec` before changing the field.
*/
