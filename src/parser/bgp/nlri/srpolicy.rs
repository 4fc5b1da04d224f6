//! SR Policy withdrawn NLRI (SAFI 73).

use bytes::{Buf, Bytes};
use log::warn;
use std::net::IpAddr;

use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;

/// Parse an SR Policy NLRI.
///
/// <https://datatracker.ietf.org/doc/html/rfc9830#section-2.1>
/// ```text
/// +------------------+
/// |  NLRI Length     | 1 octet
/// +------------------+
/// |  Distinguisher   | 4 octets
/// +------------------+
/// |  Policy Color    | 4 octets
/// +------------------+
/// |  Endpoint        | 4 or 16 octets
/// +------------------+
/// ```
/// The length is in bits: 96 for an IPv4 endpoint, 192 for IPv6.
pub fn parse_sr_policy_nlri(mut input: Bytes) -> Result<SrPolicyNlri, ParserError> {
    let length = input.read_u8()?;
    let endpoint_len = match length {
        96 => 4,
        192 => 16,
        v => {
            return Err(ParserError::ParseError(format!(
                "invalid SR Policy NLRI length: {} bits",
                v
            )))
        }
    };
    input.has_n_remaining(8 + endpoint_len)?;

    let distinguisher = input.get_u32();
    let color = input.get_u32();
    let endpoint = match endpoint_len {
        4 => IpAddr::V4(input.read_ipv4_address()?),
        _ => IpAddr::V6(input.read_ipv6_address()?),
    };

    if input.has_remaining() {
        warn!(
            "{} trailing bytes after SR Policy NLRI ignored",
            input.remaining()
        );
    }

    Ok(SrPolicyNlri {
        length,
        distinguisher,
        color,
        endpoint: Some(endpoint),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;

    #[test]
    fn test_parse_sr_policy_ipv4() {
        let input = Bytes::from_static(&[
            0x60, // 96 bits
            0x00, 0x00, 0x00, 0x02, // distinguisher
            0x00, 0x00, 0x00, 0x64, // color 100
            0xC0, 0x00, 0x02, 0x01, // 192.0.2.1
        ]);
        let nlri = parse_sr_policy_nlri(input).unwrap();
        assert_eq!(nlri.length, 96);
        assert_eq!(nlri.distinguisher, 2);
        assert_eq!(nlri.color, 100);
        assert_eq!(nlri.endpoint, Some("192.0.2.1".parse().unwrap()));
        assert!(!nlri.is_ipv6());
    }

    #[test]
    fn test_parse_sr_policy_ipv6() {
        let mut input = vec![0xC0, 0, 0, 0, 1, 0, 0, 0, 7];
        input.extend_from_slice(&Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1).octets());
        let nlri = parse_sr_policy_nlri(Bytes::from(input)).unwrap();
        assert_eq!(nlri.color, 7);
        assert!(nlri.is_ipv6());
    }

    #[test]
    fn test_parse_sr_policy_invalid() {
        let bad_len = Bytes::from_static(&[0x50, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(matches!(
            parse_sr_policy_nlri(bad_len),
            Err(ParserError::ParseError(_))
        ));

        let truncated = Bytes::from_static(&[0x60, 0, 0, 0, 1, 0, 0]);
        assert!(matches!(
            parse_sr_policy_nlri(truncated),
            Err(ParserError::IoNotEnoughBytes { .. })
        ));
    }
}
