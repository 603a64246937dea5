use tagfield::{bounded_copy, convert, ucslen, ConvertError, TextEncoding, Width};

const ALL: &'static [TextEncoding] = &[
    TextEncoding::Latin1,
    TextEncoding::Utf16,
    TextEncoding::Utf16Be,
    TextEncoding::Utf8,
];

fn ne(units: &[u16]) -> Vec<u8> {
    units.iter().flat_map(|u| u.to_ne_bytes().to_vec()).collect()
}

#[test]
fn test_identity() {
    // Malformed in every encoding but Latin-1; identity must not care.
    let junk: &[u8] = b"\xff\xfe\x00";
    for &enc in ALL {
        assert_eq!(convert(junk, enc, enc), Ok(junk.to_vec()));
    }
}

#[test]
fn test_latin1_to_wide() {
    assert_eq!(convert(b"g\xaar\xe7on", TextEncoding::Latin1, TextEncoding::Utf16),
        Ok(ne(&[0x67, 0xaa, 0x72, 0xe7, 0x6f, 0x6e])));
    assert_eq!(convert(b"\xe7", TextEncoding::Latin1, TextEncoding::Utf16Be), Ok(vec![0x00, 0xe7]));
}

#[test]
fn test_nulls_survive() {
    assert_eq!(convert(b"a\0b\0", TextEncoding::Latin1, TextEncoding::Utf16), Ok(ne(&[0x61, 0, 0x62, 0])));
    assert_eq!(convert(&ne(&[0x61, 0, 0x62, 0]), TextEncoding::Utf16, TextEncoding::Utf8), Ok(b"a\0b\0".to_vec()));
}

#[test]
fn test_surrogate_pairs() {
    let clef = "𝄞";
    assert_eq!(convert(&ne(&[0xd834, 0xdd1e]), TextEncoding::Utf16, TextEncoding::Utf8),
        Ok(clef.as_bytes().to_vec()));
    assert_eq!(convert(clef.as_bytes(), TextEncoding::Utf8, TextEncoding::Utf16Be),
        Ok(vec![0xd8, 0x34, 0xdd, 0x1e]));
}

#[test]
fn test_byte_order_swap() {
    assert_eq!(convert(&ne(&[0x0041, 0x00e7]), TextEncoding::Utf16, TextEncoding::Utf16Be),
        Ok(vec![0x00, 0x41, 0x00, 0xe7]));
    assert_eq!(convert(&[0x00, 0x41], TextEncoding::Utf16Be, TextEncoding::Utf16), Ok(ne(&[0x0041])));
}

#[test]
fn test_malformed_sources() {
    assert_eq!(convert(&ne(&[0x41, 0xdc00]), TextEncoding::Utf16, TextEncoding::Utf8),
        Err(ConvertError::InvalidAt(1)));
    assert_eq!(convert(&ne(&[0xd834]), TextEncoding::Utf16, TextEncoding::Utf8),
        Err(ConvertError::Incomplete));
    assert_eq!(convert(&ne(&[0xd834, 0x41]), TextEncoding::Utf16, TextEncoding::Utf8),
        Err(ConvertError::InvalidAt(0)));
    assert_eq!(convert(&[0x41, 0x00, 0x42], TextEncoding::Utf16, TextEncoding::Utf8),
        Err(ConvertError::Incomplete));
    assert_eq!(convert(b"a\xc3", TextEncoding::Utf8, TextEncoding::Utf16),
        Err(ConvertError::Incomplete));
    assert_eq!(convert(b"ab\xff", TextEncoding::Utf8, TextEncoding::Latin1),
        Err(ConvertError::InvalidAt(2)));
}

#[test]
fn test_unmappable() {
    assert_eq!(convert("aЖ".as_bytes(), TextEncoding::Utf8, TextEncoding::Latin1),
        Err(ConvertError::Unmappable { ch: 'Ж', at: 1, to: TextEncoding::Latin1 }));
    assert_eq!(ConvertError::InvalidAt(3).to_string(), "invalid unit at offset 3");
}

#[test]
fn test_encoding_table() {
    for &enc in ALL {
        assert_eq!(TextEncoding::from_id3(enc.id3()), Some(enc));
    }
    assert_eq!(TextEncoding::from_id3(4), None);
    assert_eq!(TextEncoding::Utf16Be.width(), Width::Wide);
    assert_eq!(TextEncoding::Utf8.width(), Width::Narrow);
    assert_eq!(TextEncoding::Utf16.unit_bytes(), 2);
    assert_eq!(TextEncoding::default(), TextEncoding::Latin1);
}

#[test]
fn test_ucslen() {
    assert_eq!(ucslen(&[1u16, 2, 0, 3]), 2);
    assert_eq!(ucslen::<u16>(&[]), 0);
    assert_eq!(ucslen(&b"abc"[..]), 3);
    assert_eq!(ucslen(&[0u8]), 0);
}

#[test]
fn test_bounded_copy() {
    let mut dst = [0xffu8; 3];
    assert_eq!(bounded_copy(&b"hello"[..], &mut dst), 2);
    assert_eq!(&dst, b"he\0");

    let mut dst = [0xffffu16; 8];
    assert_eq!(bounded_copy(&[1u16, 2], &mut dst), 2);
    assert_eq!(&dst[..4], &[1, 2, 0, 0xffff]);

    let mut none: [u16; 0] = [];
    assert_eq!(bounded_copy(&[1u16, 2], &mut none), 0);
}
