/*!
Errors reported by field operations.

Each Unicode accessor comes in two forms.  The `try_` form reports why an operation was rejected.  The plain form keeps the traditional contract, where any rejection reads as "nothing happened": a count of `0`, or no view.  The plain forms are the `try_` forms passed through `Legacy`.
*/
use log::debug;
use crate::encoding::conv::ConvertError;
use crate::encoding::TextEncoding;
use crate::field::FieldKind;
use crate::view::WideText;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{kind:?} field does not hold text")]
    WrongFieldKind {
        kind: FieldKind,
    },
    #[error("field is encoded as {encoding}, not a wide encoding")]
    EncodingMismatch {
        encoding: TextEncoding,
    },
    #[error("null or empty input")]
    NullOrEmptyInput,
    #[error("item {index} requested, but the field holds {count}")]
    ItemIndexOutOfRange {
        index: usize,
        count: usize,
    },
    #[error("could not convert field text: {0}")]
    Conversion(#[from] ConvertError),
}

/**
Collapses a detailed outcome into the zero-result contract.
*/
pub trait Legacy {
    type Output;

    fn legacy(self) -> Self::Output;
}

impl Legacy for Result<usize, FieldError> {
    type Output = usize;

    fn legacy(self) -> usize {
        self.unwrap_or_else(|err| {
            debug!("rejected: {}", err);
            0
        })
    }
}

impl<'a> Legacy for Result<WideText<'a>, FieldError> {
    type Output = Option<WideText<'a>>;

    fn legacy(self) -> Option<WideText<'a>> {
        match self {
            Ok(text) => Some(text),
            Err(err) => {
                debug!("rejected: {}", err);
                None
            },
        }
    }
}
