//! Unicast and labeled-unicast withdrawn routes.

use bytes::{Buf, Bytes};

use crate::error::ParserError;
use crate::models::*;
use crate::parser::{parse_nlri_list, ReadUtils};

/// Parse unicast withdrawn routes (SAFI 1): a plain list of prefixes, RFC 4760 section 5.
pub fn parse_unicast_nlri(input: Bytes, afi: Afi, add_path: bool) -> Result<MpNlri, ParserError> {
    let routes = parse_nlri_list(input, add_path, afi)?
        .into_iter()
        .map(MpNlriRoute::new)
        .collect();
    Ok(MpNlri::new(routes))
}

/// Parse labeled-unicast withdrawn routes (SAFI 4).
///
/// <https://datatracker.ietf.org/doc/html/rfc8277#section-2>
/// ```text
/// +---------------------------+
/// |   Length (1 octet)        |
/// +---------------------------+
/// |   Label (3 octets)        |
/// +---------------------------+
/// .............................
/// +---------------------------+
/// |   Prefix (variable)       |
/// +---------------------------+
/// ```
/// The length covers the labels and the prefix, in bits.
pub fn parse_labeled_unicast_nlri(
    mut input: Bytes,
    afi: Afi,
    add_path: bool,
) -> Result<MpNlri, ParserError> {
    let mut routes = vec![];
    while input.remaining() > 0 {
        let path_id = match add_path {
            true => Some(input.read_u32()?),
            false => None,
        };
        let bit_len = input.read_u8()?;
        let labels = input.read_mpls_labels()?;
        let label_bits = labels.len() * 24;
        let prefix_len = (bit_len as usize).checked_sub(label_bits).ok_or_else(|| {
            ParserError::ParseError(format!(
                "labeled NLRI length {} shorter than its {} label bits",
                bit_len, label_bits
            ))
        })?;
        let prefix = input.read_prefix_bits(afi, prefix_len as u8)?;
        routes.push(MpNlriRoute {
            prefix: NetworkPrefix::new(prefix, path_id),
            labels,
            route_distinguisher: None,
        });
    }
    Ok(MpNlri::new(routes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_unicast_nlri() {
        let input = Bytes::from(vec![
            0x18, 0xC0, 0x00, 0x02, // 192.0.2.0/24
            0x10, 0x0A, 0x01, // 10.1.0.0/16
        ]);
        let nlri = parse_unicast_nlri(input, Afi::Ipv4, false).unwrap();
        assert_eq!(
            nlri.prefixes().cloned().collect::<Vec<_>>(),
            vec![
                NetworkPrefix::from_str("192.0.2.0/24").unwrap(),
                NetworkPrefix::from_str("10.1.0.0/16").unwrap(),
            ]
        );
        assert!(nlri.routes.iter().all(|r| r.labels.is_empty()));
    }

    #[test]
    fn test_parse_unicast_nlri_ipv6_truncated() {
        let input = Bytes::from(vec![0x40, 0x20, 0x01, 0x0D, 0xB8]);
        assert!(parse_unicast_nlri(input, Afi::Ipv6, false).is_err());
    }

    #[test]
    fn test_parse_labeled_unicast_nlri() {
        let input = Bytes::from(vec![
            0x30, // 48 bits: 24 label + 24 prefix
            0x00, 0x3E, 0x81, // label 1000, bottom of stack
            0xC6, 0x33, 0x64, // 198.51.100.0/24
        ]);
        let nlri = parse_labeled_unicast_nlri(input, Afi::Ipv4, false).unwrap();
        assert_eq!(nlri.routes.len(), 1);
        assert_eq!(nlri.routes[0].labels[0].value, 1000);
        assert_eq!(nlri.routes[0].prefix.to_string(), "198.51.100.0/24");
    }

    #[test]
    fn test_parse_labeled_unicast_nlri_withdraw_label() {
        let input = Bytes::from(vec![
            0x98, // 152 bits: 24 label + 128 prefix
            0x80, 0x00, 0x00, // withdrawal label
            0x20, 0x01, 0x0D, 0xB8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x01,
        ]);
        let nlri = parse_labeled_unicast_nlri(input, Afi::Ipv6, false).unwrap();
        assert!(nlri.routes[0].labels[0].is_withdrawal_compat());
        assert_eq!(nlri.routes[0].prefix.to_string(), "2001:db8::1/128");
    }

    #[test]
    fn test_parse_labeled_unicast_nlri_short_length() {
        let input = Bytes::from(vec![0x10, 0x00, 0x3E, 0x81]);
        assert!(matches!(
            parse_labeled_unicast_nlri(input, Afi::Ipv4, false),
            Err(ParserError::ParseError(_))
        ));
    }
}
