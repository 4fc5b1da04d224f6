/*!
error module defines the error types used when decoding withdrawal attributes.
*/
use crate::models::{FlowSpecError, NlriKind};
use num_enum::{TryFromPrimitive, TryFromPrimitiveError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    /// The attribute body is too short to hold the 3-byte AFI/SAFI header.
    ///
    /// ## Occurs during:
    ///  - Parsing of an MP_UNREACH_NLRI attribute
    #[error("malformed MP_UNREACH_NLRI attribute: {0}")]
    MalformedAttribute(String),
    /// A family decoder rejected the withdrawn routes payload. `source` carries the decoder's own
    /// diagnostic.
    ///
    /// ## Occurs during:
    ///  - Resolving an attribute into a typed NLRI
    #[error("failed to decode {kind} NLRI: {source}")]
    NlriDecode {
        kind: NlriKind,
        #[source]
        source: Box<ParserError>,
    },
    /// This error represents a [num_enum::TryFromPrimitiveError] error for any of a number of
    /// different types.
    #[error("unrecognized value {value} for {type_name}")]
    UnrecognizedEnumVariant { type_name: &'static str, value: u64 },
    /// This error represents a [ipnet::PrefixLenError] error. It occurs if an address mask is
    /// larger than the length of the address it is being applied to.
    ///
    /// ## Occurs during:
    ///  - Reading network prefixes
    #[error("invalid network prefix mask")]
    InvalidPrefixLength(#[from] ipnet::PrefixLenError),
    #[error("flowspec: {0}")]
    FlowSpec(#[from] FlowSpecError),
    #[error("not enough bytes: need {needed}, {remaining} remaining")]
    IoNotEnoughBytes { needed: usize, remaining: usize },
    #[error("{0}")]
    ParseError(String),
    #[error("truncated message: {0}")]
    TruncatedMsg(String),
}

impl<T> From<TryFromPrimitiveError<T>> for ParserError
where
    T: TryFromPrimitive,
    T::Primitive: Into<u64>,
{
    #[inline]
    fn from(value: TryFromPrimitiveError<T>) -> Self {
        ParserError::UnrecognizedEnumVariant {
            type_name: T::NAME,
            value: value.number.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Afi;
    use std::error::Error;

    #[test]
    fn test_enum_conversion() {
        let err: ParserError = Afi::try_from(7u16).unwrap_err().into();
        assert!(matches!(
            err,
            ParserError::UnrecognizedEnumVariant {
                type_name: "Afi",
                value: 7
            }
        ));
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let err = ParserError::NlriDecode {
            kind: NlriKind::FlowSpec,
            source: Box::new(FlowSpecError::InsufficientData.into()),
        };
        assert_eq!(
            err.to_string(),
            "failed to decode flowspec NLRI: flowspec: insufficient data for parsing"
        );
        assert!(err.source().is_some());
    }
}
