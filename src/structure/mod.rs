/*!
Zero-terminated, multi-item text structure.

A text payload holds zero or more items packed back to back.  Every item is followed by exactly one zero unit of the payload's unit width:

```text
"Alice" + "Bob", UTF-16LE:   41 00 6c 00 69 00 63 00 65 00 00 00 42 00 6f 00 62 00 00 00
                             |-------------- item 0 --------------| term |---- item 1 ----| term
```

Items are recovered by scanning for terminators.  The scan also accepts a final item with no terminator, so payloads produced elsewhere can be indexed before they are normalised with `terminate`.
*/
use std::ops::Range;
use std::slice;
use crate::encoding::{TextEncoding, Unit, WideUnits, Width};

/**
Returns the length, in units, of the zero-terminated string at the start of `units`.

If `units` contains no zero unit, the whole slice is the string.
*/
pub fn ucslen<U>(units: &[U]) -> usize where U: Unit {
    units.iter().position(Unit::is_zero).unwrap_or(units.len())
}

/**
Returns `true` if the payload ends with a zero unit of the encoding's width.
*/
pub fn is_terminated(bytes: &[u8], encoding: TextEncoding) -> bool {
    let width = encoding.unit_bytes();
    bytes.len() >= width
        && bytes.len() % width == 0
        && bytes[bytes.len() - width..].iter().all(|&b| b == 0)
}

/**
Appends a zero unit to a non-empty payload which does not already end with one.
*/
pub fn terminate(bytes: &mut Vec<u8>, encoding: TextEncoding) {
    if !bytes.is_empty() && !is_terminated(bytes, encoding) {
        let width = encoding.unit_bytes();
        bytes.extend((0..width).map(|_| 0u8));
    }
}

/**
Byte ranges of each item in a payload, terminators excluded.

These are computed once per mutation of the owning field, so indexing an item does not rescan the payload.
*/
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemBounds {
    ranges: Vec<Range<usize>>,
}

impl ItemBounds {
    /**
    Scans a payload for item boundaries.

    An empty payload has no items.  A payload consisting of a single zero unit has one empty item.  For wide encodings, a trailing odd byte is ignored.
    */
    pub fn scan(bytes: &[u8], encoding: TextEncoding) -> Self {
        let ranges = match encoding.width() {
            Width::Narrow => scan_units(bytes.iter().cloned()),
            Width::Wide => scan_units(WideUnits::new(bytes, encoding.byte_order())),
        };
        ItemBounds { ranges: ranges }
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /**
    Byte range of the given item, if it exists.
    */
    pub fn get(&self, index: usize) -> Option<Range<usize>> {
        self.ranges.get(index).cloned()
    }

    pub fn iter(&self) -> slice::Iter<'_, Range<usize>> {
        self.ranges.iter()
    }

    /**
    Records one more item occupying `range`.
    */
    pub fn push(&mut self, range: Range<usize>) {
        self.ranges.push(range);
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }
}

fn scan_units<U, It>(units: It) -> Vec<Range<usize>>
where
    U: Unit,
    It: Iterator<Item=U>,
{
    let mut ranges = Vec::new();
    let mut start = 0;
    let mut end = 0;

    for unit in units {
        if unit.is_zero() {
            ranges.push(start * U::WIDTH..end * U::WIDTH);
            start = end + 1;
        }
        end += 1;
    }

    // Unterminated final item.
    if start < end {
        ranges.push(start * U::WIDTH..end * U::WIDTH);
    }

    ranges
}
