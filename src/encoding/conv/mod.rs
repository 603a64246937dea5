/*!
Encoding conversion support.

Conversion goes through Unicode scalar values: the source payload is decoded into `char`s, which are then encoded into the target encoding.  Null units survive conversion as null units, so a multi-item payload can be converted in one pass without disturbing its item separators.
*/
use log::trace;
use crate::encoding::{wide_bytes, TextEncoding, WideUnits};
use crate::util::TrapErrExt;

pub mod latin1;
pub mod utf16;
pub mod utf8;

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("invalid unit at offset {0}")]
    InvalidAt(usize),
    #[error("incomplete unit")]
    Incomplete,
    #[error("{ch:?} at character {at} has no {to} representation")]
    Unmappable {
        ch: char,
        at: usize,
        to: TextEncoding,
    },
}

/**
Converts a payload from one encoding to another.

Converting to the encoding the payload is already in returns the payload unchanged, byte for byte.

# Failure

Fails if the payload is malformed in its source encoding, or if it contains a character the target encoding cannot represent.  `InvalidAt` offsets are in source units; `Unmappable` positions count decoded characters.
*/
pub fn convert(bytes: &[u8], from: TextEncoding, to: TextEncoding) -> Result<Vec<u8>, ConvertError> {
    if from == to {
        return Ok(bytes.to_vec());
    }

    if from.is_wide() && bytes.len() % 2 != 0 {
        return Err(ConvertError::Incomplete);
    }

    trace!("converting {} bytes from {} to {}", bytes.len(), from, to);

    if from.is_wide() && to.is_wide() {
        // Same units, different byte order.
        let units: Vec<u16> = WideUnits::new(bytes, from.byte_order()).collect();
        return Ok(wide_bytes(&units, to.byte_order()));
    }

    let mut trap = Ok(());
    let out = encode(Decode::new(bytes, from).trap_err(&mut trap), to)?;
    trap?;
    Ok(out)
}

/**
Decodes a payload in any supported encoding into Unicode scalar values.

Iteration stops after the first error.
*/
pub enum Decode<'a> {
    Latin1(latin1::Decode<'a>),
    Wide(utf16::Decode<WideUnits<'a>>),
    Utf8(utf8::Decode<'a>),
}

impl<'a> Decode<'a> {
    pub fn new(bytes: &'a [u8], encoding: TextEncoding) -> Self {
        match encoding {
            TextEncoding::Latin1 => Decode::Latin1(latin1::Decode::new(bytes)),
            TextEncoding::Utf16 | TextEncoding::Utf16Be => {
                let units = WideUnits::new(bytes, encoding.byte_order());
                Decode::Wide(utf16::Decode::new(units))
            },
            TextEncoding::Utf8 => Decode::Utf8(utf8::Decode::new(bytes)),
        }
    }
}

impl<'a> Iterator for Decode<'a> {
    type Item = Result<char, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        match *self {
            Decode::Latin1(ref mut iter) => iter.next(),
            Decode::Wide(ref mut iter) => iter.next(),
            Decode::Utf8(ref mut iter) => iter.next(),
        }
    }
}

fn encode<It>(chars: It, to: TextEncoding) -> Result<Vec<u8>, ConvertError>
where
    It: Iterator<Item=char>,
{
    match to {
        TextEncoding::Latin1 => latin1::encode(chars),
        TextEncoding::Utf16 | TextEncoding::Utf16Be => Ok(utf16::encode(chars, to.byte_order())),
        TextEncoding::Utf8 => Ok(chars.collect::<String>().into_bytes()),
    }
}
