use std::str;
use super::ConvertError;

/**
Decodes UTF-8 bytes.

The longest valid prefix is decoded before the error is reported.
*/
pub struct Decode<'a> {
    chars: str::Chars<'a>,
    err: Option<ConvertError>,
}

impl<'a> Decode<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        match str::from_utf8(bytes) {
            Ok(s) => Decode {
                chars: s.chars(),
                err: None,
            },
            Err(e) => {
                let valid = str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or("");
                let err = match e.error_len() {
                    Some(_) => ConvertError::InvalidAt(e.valid_up_to()),
                    None => ConvertError::Incomplete,
                };
                Decode {
                    chars: valid.chars(),
                    err: Some(err),
                }
            },
        }
    }
}

impl<'a> Iterator for Decode<'a> {
    type Item = Result<char, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.chars.next() {
            Some(c) => Some(Ok(c)),
            None => self.err.take().map(Err),
        }
    }
}
