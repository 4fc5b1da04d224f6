//! MPLS L3VPN withdrawn routes (SAFI 128).

use bytes::{Buf, Bytes};

use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;

/// Parse VPN withdrawn routes.
///
/// <https://datatracker.ietf.org/doc/html/rfc4364#section-4.3.4>
///
/// Each route is a bit length covering labels, the 8-octet route distinguisher and the prefix,
/// followed by those fields in that order.
pub fn parse_l3vpn_nlri(mut input: Bytes, afi: Afi, add_path: bool) -> Result<MpNlri, ParserError> {
    let mut routes = vec![];
    while input.remaining() > 0 {
        let path_id = match add_path {
            true => Some(input.read_u32()?),
            false => None,
        };
        let bit_len = input.read_u8()? as usize;
        let labels = input.read_mpls_labels()?;
        let overhead = labels.len() * 24 + 64;
        if bit_len < overhead {
            return Err(ParserError::ParseError(format!(
                "VPN NLRI length {} shorter than labels and route distinguisher ({} bits)",
                bit_len, overhead
            )));
        }
        let rd = input.read_route_distinguisher()?;
        let prefix = input.read_prefix_bits(afi, (bit_len - overhead) as u8)?;
        routes.push(MpNlriRoute {
            prefix: NetworkPrefix::new(prefix, path_id),
            labels,
            route_distinguisher: Some(rd),
        });
    }
    Ok(MpNlri::new(routes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_l3vpn_nlri() {
        let input = Bytes::from(vec![
            0x70, // 112 bits: 24 label + 64 RD + 24 prefix
            0x00, 0x06, 0x41, // label 100, bottom of stack
            0x00, 0x00, 0xFD, 0xE8, 0x00, 0x00, 0x00, 0x64, // RD 65000:100
            0x0A, 0x0A, 0x0A, // 10.10.10.0/24
        ]);
        let nlri = parse_l3vpn_nlri(input, Afi::Ipv4, false).unwrap();
        assert_eq!(nlri.routes.len(), 1);
        let route = &nlri.routes[0];
        assert_eq!(route.labels[0].value, 100);
        assert_eq!(
            route.route_distinguisher.map(|rd| rd.to_string()),
            Some("65000:100".to_string())
        );
        assert_eq!(route.prefix.to_string(), "10.10.10.0/24");
        assert_eq!(route.to_string(), "65000:100:10.10.10.0/24 label 100");
    }

    #[test]
    fn test_parse_l3vpn_nlri_add_path() {
        let input = Bytes::from(vec![
            0x00, 0x00, 0x00, 0x05, // path id 5
            0x58, // 88 bits: 24 label + 64 RD, default route
            0x80, 0x00, 0x00, // withdrawal label
            0x00, 0x01, 0xC0, 0x00, 0x02, 0x01, 0x00, 0x07, // RD 192.0.2.1:7
        ]);
        let nlri = parse_l3vpn_nlri(input, Afi::Ipv4, true).unwrap();
        assert_eq!(nlri.routes[0].prefix.path_id, Some(5));
        assert_eq!(nlri.routes[0].prefix.to_string(), "0.0.0.0/0");
    }

    #[test]
    fn test_parse_l3vpn_nlri_truncated_rd() {
        let input = Bytes::from(vec![0x70, 0x00, 0x06, 0x41, 0x00, 0x00, 0xFD]);
        assert!(parse_l3vpn_nlri(input, Afi::Ipv4, false).is_err());
    }
}
