use std::slice;
use crate::encoding::TextEncoding;
use super::ConvertError;

pub struct Decode<'a> {
    iter: slice::Iter<'a, u8>,
}

impl<'a> Decode<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Decode {
            iter: bytes.iter(),
        }
    }
}

impl<'a> Iterator for Decode<'a> {
    type Item = Result<char, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        // Every byte is a code point of the same value.
        self.iter.next().map(|&b| Ok(char::from(b)))
    }
}

pub fn encode<It>(chars: It) -> Result<Vec<u8>, ConvertError>
where
    It: Iterator<Item=char>,
{
    let mut out = Vec::new();
    for (at, ch) in chars.enumerate() {
        match ch as u32 {
            cp @ 0x00..=0xff => out.push(cp as u8),
            _ => return Err(ConvertError::Unmappable {
                ch: ch,
                at: at,
                to: TextEncoding::Latin1,
            }),
        }
    }
    Ok(out)
}
