macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

use tagfield::structure::ItemBounds;
use tagfield::{ByteOrder, Field, FieldError, FieldKind, TextEncoding, NULL_UNICODE};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn w(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

fn alice_and_bob() -> Field {
    let mut field = Field::new(FieldKind::TextString);
    field.set_unicode(&w("Alice"));
    field.add_unicode(&w("Bob"));
    field
}

#[test]
fn test_item_indexing() {
    init();
    let field = alice_and_bob();
    assert_eq!(field.num_text_items(), 2);

    let mut buf = [0u16; 32];
    assert_eq!(field.get_unicode_item(&mut buf, 0), 5);
    assert_eq!(&buf[..6], &w("Alice\u{0}")[..]);

    assert_eq!(field.get_unicode_item(&mut buf, 1), 3);
    assert_eq!(&buf[..4], &w("Bob\u{0}")[..]);

    let mut untouched = [0x5555u16; 4];
    assert_eq!(field.get_unicode_item(&mut untouched, 2), 0);
    assert_eq!(untouched, [0x5555; 4]);
    assert_eq!(
        field.try_get_unicode_item(&mut untouched, 2),
        Err(FieldError::ItemIndexOutOfRange { index: 2, count: 2 })
    );
}

#[test]
fn test_whole_text_includes_separators() {
    init();
    let field = alice_and_bob();

    let mut buf = [0xffffu16; 32];
    assert_eq!(field.get_unicode(&mut buf), 9);
    assert_eq!(&buf[..9], &w("Alice\u{0}Bob")[..]);
    assert_eq!(buf[9], 0);
}

#[test]
fn test_item_truncation() {
    init();
    let field = alice_and_bob();

    let mut buf = [0xffffu16; 3];
    assert_eq!(field.get_unicode_item(&mut buf, 0), 2);
    assert_eq!(buf, [0x41, 0x6c, 0]);
}

#[test]
fn test_raw_item_views() {
    init();
    let field = alice_and_bob();

    let bob = field.raw_unicode_text_item(1).expect(here!());
    assert_eq!(bob, &w("Bob")[..]);
    assert_eq!(bob.to_string_lossy(), "Bob");
    assert_eq!(bob.unit_len(), 3);

    assert!(field.raw_unicode_text_item(2).is_none());
}

#[test]
fn test_raw_item_requires_wide_encoding() {
    init();
    let field = Field::with_raw_text(FieldKind::TextString, TextEncoding::Latin1, b"a\0b".to_vec());
    assert_eq!(field.num_text_items(), 2);

    assert!(field.raw_unicode_text_item(0).is_none());
    assert_eq!(
        field.try_raw_unicode_text_item(0),
        Err(FieldError::EncodingMismatch { encoding: TextEncoding::Latin1 })
    );

    // Copying an item converts it, so any encoding will do.
    let mut buf = [0u16; 4];
    assert_eq!(field.get_unicode_item(&mut buf, 1), 1);
    assert_eq!(&buf[..2], &[0x62, 0]);
}

#[test]
fn test_empty_items() {
    init();
    let mut field = Field::new(FieldKind::TextString);
    field.set_unicode(&w("A"));
    assert_eq!(field.try_add_unicode(&[]), Ok(0));
    assert_eq!(field.num_text_items(), 2);

    let mut buf = [0x5555u16; 4];
    assert_eq!(field.try_get_unicode_item(&mut buf, 1), Ok(0));
    assert_eq!(buf[0], 0);

    let empty = field.raw_unicode_text_item(1).expect(here!());
    assert!(empty.is_empty());
}

#[test]
fn test_scan_edge_cases() {
    init();
    let empty = Field::with_raw_text(FieldKind::TextString, TextEncoding::Utf16, Vec::new());
    assert_eq!(empty.num_text_items(), 0);

    let single_null = Field::with_raw_text(FieldKind::TextString, TextEncoding::Utf16, vec![0, 0]);
    assert_eq!(single_null.num_text_items(), 1);
    assert!(single_null.raw_unicode_text_item(0).expect(here!()).is_empty());

    // A stray half unit is not part of the payload.
    let stray = Field::with_raw_text(FieldKind::TextString, TextEncoding::Utf16, vec![0x41, 0x00, 0x42]);
    assert_eq!(stray.raw_bytes().len(), 4);
    assert_eq!(stray.num_text_items(), 1);

    assert_eq!(ItemBounds::scan(b"a\0b", TextEncoding::Latin1).len(), 2);
    assert_eq!(ItemBounds::scan(b"a\0b\0", TextEncoding::Latin1).len(), 2);
    assert_eq!(ItemBounds::scan(b"\0", TextEncoding::Utf8).len(), 1);
    assert_eq!(ItemBounds::scan(b"", TextEncoding::Utf8).len(), 0);
}

#[test]
fn test_big_endian_items() {
    init();
    let mut field = Field::with_raw_text(
        FieldKind::TextString,
        TextEncoding::Utf16Be,
        vec![0x00, 0x41, 0x00, 0x00, 0x00, 0x42],
    );
    assert_eq!(field.num_text_items(), 2);
    assert_eq!(field.raw_unicode_text_item(0).expect(here!()), &[0x41u16][..]);

    assert_eq!(field.add_unicode(&w("C")), 1);
    assert_eq!(field.encoding(), TextEncoding::Utf16Be);
    assert_eq!(&field.raw_bytes()[6..], &[0x00, 0x00, 0x00, 0x43, 0x00, 0x00]);

    let mut buf = [0u16; 4];
    assert_eq!(field.get_unicode_item(&mut buf, 2), 1);
    assert_eq!(&buf[..2], &[0x43, 0]);
}

#[test]
fn test_set_after_items_resets() {
    init();
    let mut field = alice_and_bob();
    field.set_unicode(&w("Zed"));
    assert_eq!(field.num_text_items(), 1);
    assert!(field.raw_unicode_text_item(1).is_none());
}

#[test]
fn test_cached_bounds_match_scan() {
    init();
    let mut field = Field::new(FieldKind::TextString);
    field.set_unicode(&w("one"));
    for name in &["two", "", "𝄞", "four"] {
        field.add_unicode(&w(name));
    }
    assert_eq!(field.num_text_items(), 5);
    assert_eq!(ItemBounds::scan(field.raw_bytes(), field.encoding()).len(), 5);

    let mut buf = [0u16; 8];
    assert_eq!(field.get_unicode_item(&mut buf, 3), 2);
    assert_eq!(&buf[..3], &[0xd834, 0xdd1e, 0]);
}

#[test]
fn test_items_survive_reencoding() {
    init();
    let mut field = alice_and_bob();

    assert!(field.set_encoding(TextEncoding::Utf8));
    assert_eq!(field.num_text_items(), 2);
    assert_eq!(field.raw_bytes(), b"Alice\0Bob\0");
    assert_eq!(field.add_unicode(&w("Carol")), 0);

    let mut buf = [0u16; 8];
    assert_eq!(field.get_unicode_item(&mut buf, 1), 3);
    assert_eq!(&buf[..4], &w("Bob\u{0}")[..]);

    assert!(field.set_encoding(TextEncoding::Utf16Be));
    assert_eq!(field.add_unicode(&w("Carol")), 5);
    assert_eq!(field.num_text_items(), 3);
    assert_eq!(field.raw_unicode_text_item(2).expect(here!()).to_string_lossy(), "Carol");
}

#[test]
fn test_whole_view_items() {
    init();
    let field = alice_and_bob();
    let view = field.raw_unicode_text().expect(here!());

    let items: Vec<String> = view.items().map(|item| item.to_string_lossy()).collect();
    assert_eq!(items, vec!["Alice".to_string(), "Bob".to_string()]);

    let mut field = Field::new(FieldKind::TextString);
    field.set_unicode(&w("Alice"));
    field.add_unicode(&[]);
    field.add_unicode(&w("Bob"));

    let view = field.raw_unicode_text().expect(here!());
    let items: Vec<Vec<u16>> = view.items().map(|item| item.to_vec()).collect();
    assert_eq!(items, vec![w("Alice"), Vec::new(), w("Bob")]);
    assert_eq!(items.len(), field.num_text_items());

    let empty = Field::with_encoding(FieldKind::TextString, TextEncoding::Utf16);
    assert_eq!(empty.raw_unicode_text().expect(here!()).items().count(), 0);
}

#[test]
fn test_trailing_empty_item_is_kept() {
    init();
    let mut field = Field::new(FieldKind::TextString);
    field.set_unicode(&w("A"));
    field.add_unicode(&[]);

    let view = field.raw_unicode_text().expect(here!());
    let lens: Vec<usize> = view.items().map(|item| item.len()).collect();
    assert_eq!(lens, vec![1, 0]);
}

#[test]
fn test_view_exposes_payload_bytes() {
    init();
    let field = Field::with_raw_text(
        FieldKind::TextString,
        TextEncoding::Utf16Be,
        vec![0x00, 0x41, 0x00, 0x00, 0x00, 0x42, 0x00, 0x00],
    );

    let view = field.raw_unicode_text().expect(here!());
    assert_eq!(view.byte_order(), ByteOrder::Big);
    assert_eq!(view.as_bytes(), &[0x00, 0x41, 0x00, 0x00, 0x00, 0x42]);
    assert_eq!(view.get(1), Some(NULL_UNICODE));

    let item = field.raw_unicode_text_item(1).expect(here!());
    assert_eq!(item.as_bytes(), &field.raw_bytes()[4..6]);
}

#[test]
fn test_item_bounds_ranges() {
    init();
    let bounds = ItemBounds::scan(b"ab\0\0cde\0", TextEncoding::Latin1);
    let ranges: Vec<_> = bounds.iter().cloned().collect();
    assert_eq!(ranges, vec![0..2, 3..3, 4..7]);
}
