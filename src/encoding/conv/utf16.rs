use crate::encoding::ByteOrder;
use super::ConvertError;

/**
Decodes UTF-16 units into Unicode scalar values, pairing surrogates.

An unpaired surrogate stops iteration with an error.
*/
pub struct Decode<It> {
    at: usize,
    iter: Option<It>,
}

impl<It> Decode<It> {
    pub fn new(iter: It) -> Decode<It> {
        Decode {
            at: 0,
            iter: Some(iter),
        }
    }

    fn fail(&mut self, err: ConvertError) -> Option<Result<char, ConvertError>> {
        self.iter = None;
        Some(Err(err))
    }
}

impl<It> Iterator for Decode<It> where It: Iterator<Item=u16> {
    type Item = Result<char, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        let at = self.at;
        let cu0 = self.iter.as_mut()?.next()?;

        let cp = match cu0 {
            0x0000..=0xd7ff | 0xe000..=0xffff => {
                self.at += 1;
                cu0 as u32
            },
            0xdc00..=0xdfff => return self.fail(ConvertError::InvalidAt(at)),
            _ /* 0xd800..=0xdbff */ => {
                let cu1 = match self.iter.as_mut().and_then(Iterator::next) {
                    Some(cu1) => cu1,
                    None => return self.fail(ConvertError::Incomplete),
                };

                if !(0xdc00..=0xdfff).contains(&cu1) {
                    return self.fail(ConvertError::InvalidAt(at));
                }

                self.at += 2;

                let hi = (cu0 & 0x3ff) as u32;
                let lo = (cu1 & 0x3ff) as u32;
                0x10000 + ((hi << 10) | lo)
            },
        };

        match char::from_u32(cp) {
            Some(c) => Some(Ok(c)),
            None => self.fail(ConvertError::InvalidAt(at)),
        }
    }
}

pub fn encode<It>(chars: It, order: ByteOrder) -> Vec<u8>
where
    It: Iterator<Item=char>,
{
    let mut out = Vec::new();
    let mut buf = [0u16; 2];
    for ch in chars {
        for &cu in ch.encode_utf16(&mut buf).iter() {
            out.extend_from_slice(&order.write(cu));
        }
    }
    out
}
