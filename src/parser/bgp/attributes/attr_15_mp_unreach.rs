use bytes::{Buf, Bytes};
use log::trace;

use crate::models::*;
use crate::parser::ReadUtils;
use crate::ParserError;

/// Parse an MP_UNREACH_NLRI attribute body.
///
/// <https://datatracker.ietf.org/doc/html/rfc4760#section-4>
/// The attribute is encoded as shown below:
/// +---------------------------------------------------------+
/// | Address Family Identifier (2 octets)                    |
/// +---------------------------------------------------------+
/// | Subsequent Address Family Identifier (1 octet)          |
/// +---------------------------------------------------------+
/// | Withdrawn Routes (variable)                             |
/// +---------------------------------------------------------+
///
/// A body holding nothing but AFI and SAFI is the End-of-RIB marker,
/// <https://datatracker.ietf.org/doc/html/rfc4724#section-2>.
pub fn parse_mp_unreach_nlri(mut input: Bytes) -> Result<MpUnreachNlri, ParserError> {
    match input.len() {
        0 => {
            return Err(ParserError::MalformedAttribute(
                "attribute length is 0".to_string(),
            ))
        }
        n @ 1..=2 => {
            return Err(ParserError::MalformedAttribute(format!(
                "attribute length {} is shorter than the 3-byte AFI/SAFI header",
                n
            )))
        }
        _ => {}
    }

    let afi = input.read_u16()?;
    let safi = input.read_u8()?;
    trace!(
        "MP_UNREACH_NLRI afi {} safi {}, {} bytes of withdrawn routes",
        afi,
        safi,
        input.remaining()
    );

    Ok(MpUnreachNlri::new(afi, safi, input))
}

impl MpUnreachNlri {
    /// Parse an attribute body from a byte slice, see [parse_mp_unreach_nlri].
    pub fn parse(data: &[u8]) -> Result<MpUnreachNlri, ParserError> {
        parse_mp_unreach_nlri(Bytes::copy_from_slice(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_and_payload() {
        let attr = parse_mp_unreach_nlri(Bytes::from_static(&[
            0x00, 0x01, 0x01, 0x18, 0xC0, 0x00, 0x02,
        ]))
        .unwrap();
        assert_eq!(attr.afi(), 1);
        assert_eq!(attr.safi(), 1);
        assert!(!attr.is_end_of_rib());
        assert_eq!(
            attr.withdrawn_routes().as_ref(),
            &[0x18, 0xC0, 0x00, 0x02][..]
        );
    }

    #[test]
    fn test_parse_end_of_rib() {
        let attr = MpUnreachNlri::parse(&[0x00, 0x02, 0x04]).unwrap();
        assert_eq!(attr.afi(), 2);
        assert_eq!(attr.safi(), 4);
        assert!(attr.is_end_of_rib());
        assert!(attr.withdrawn_routes().is_empty());
    }

    #[test]
    fn test_parse_big_endian_afi() {
        let attr = MpUnreachNlri::parse(&[0x40, 0x04, 0x47]).unwrap();
        assert_eq!(attr.afi(), 16388);
        assert_eq!(attr.safi(), 71);
    }

    #[test]
    fn test_parse_too_short() {
        for input in [&[][..], &[0x00][..], &[0x00, 0x01][..]] {
            assert!(matches!(
                MpUnreachNlri::parse(input),
                Err(ParserError::MalformedAttribute(_))
            ));
        }
    }
}
