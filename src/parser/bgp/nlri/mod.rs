//! Decoders for the withdrawn routes payload of each NLRI kind.
//!
//! [NlriDecoder] is the seam between the attribute resolver and the family decoders.
//! [DefaultNlriDecoder] wires it to the decoders in this module.

mod evpn;
mod flowspec;
mod l3vpn;
mod linkstate;
mod srpolicy;
mod unicast;

pub use evpn::parse_evpn_nlri;
pub use flowspec::parse_flowspec_nlri;
pub use l3vpn::parse_l3vpn_nlri;
pub use linkstate::parse_link_state_nlri;
pub use srpolicy::parse_sr_policy_nlri;
pub use unicast::{parse_labeled_unicast_nlri, parse_unicast_nlri};

use bytes::Bytes;

use crate::error::ParserError;
use crate::models::*;

/// Decodes the withdrawn routes payload of one NLRI kind.
///
/// The resolver only calls a method after the attribute's AFI/SAFI pair has selected that kind and
/// the payload is non-empty. Methods receiving `afi` get the raw AFI of the attribute.
pub trait NlriDecoder {
    fn decode_link_state(&self, payload: Bytes) -> Result<LinkStateNlri, ParserError>;

    fn decode_sr_policy(&self, payload: Bytes) -> Result<SrPolicyNlri, ParserError>;

    fn decode_l3vpn(&self, payload: Bytes) -> Result<MpNlri, ParserError>;

    fn decode_evpn(&self, payload: Bytes) -> Result<EvpnNlri, ParserError>;

    fn decode_unicast(&self, afi: u16, payload: Bytes) -> Result<MpNlri, ParserError>;

    fn decode_labeled_unicast(&self, afi: u16, payload: Bytes) -> Result<MpNlri, ParserError>;

    fn decode_flowspec(&self, afi: u16, payload: Bytes) -> Result<FlowSpecNlri, ParserError>;
}

/// Decoder backed by the parsers in this crate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultNlriDecoder {
    /// Expect RFC 7911 path identifiers in front of prefixes.
    pub add_path: bool,
}

impl DefaultNlriDecoder {
    pub const fn new(add_path: bool) -> Self {
        DefaultNlriDecoder { add_path }
    }
}

impl NlriDecoder for DefaultNlriDecoder {
    fn decode_link_state(&self, payload: Bytes) -> Result<LinkStateNlri, ParserError> {
        parse_link_state_nlri(payload)
    }

    fn decode_sr_policy(&self, payload: Bytes) -> Result<SrPolicyNlri, ParserError> {
        parse_sr_policy_nlri(payload)
    }

    fn decode_l3vpn(&self, payload: Bytes) -> Result<MpNlri, ParserError> {
        parse_l3vpn_nlri(payload, Afi::Ipv4, self.add_path)
    }

    fn decode_evpn(&self, payload: Bytes) -> Result<EvpnNlri, ParserError> {
        parse_evpn_nlri(payload)
    }

    fn decode_unicast(&self, afi: u16, payload: Bytes) -> Result<MpNlri, ParserError> {
        parse_unicast_nlri(payload, Afi::try_from(afi)?, self.add_path)
    }

    fn decode_labeled_unicast(&self, afi: u16, payload: Bytes) -> Result<MpNlri, ParserError> {
        parse_labeled_unicast_nlri(payload, Afi::try_from(afi)?, self.add_path)
    }

    fn decode_flowspec(&self, afi: u16, payload: Bytes) -> Result<FlowSpecNlri, ParserError> {
        let afi = match Afi::try_from(afi) {
            Ok(Afi::Ipv6) => Afi::Ipv6,
            _ => Afi::Ipv4,
        };
        parse_flowspec_nlri(payload, afi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_decoder_unicast_afi() {
        let decoder = DefaultNlriDecoder::default();
        let nlri = decoder
            .decode_unicast(2, Bytes::from_static(&[0x20, 0x20, 0x01, 0x0D, 0xB8]))
            .unwrap();
        assert_eq!(nlri.routes[0].prefix.to_string(), "2001:db8::/32");

        assert!(matches!(
            decoder.decode_unicast(9, Bytes::from_static(&[0x00])),
            Err(ParserError::UnrecognizedEnumVariant {
                type_name: "Afi",
                value: 9
            })
        ));
    }

    #[test]
    fn test_default_decoder_add_path() {
        let decoder = DefaultNlriDecoder::new(true);
        let nlri = decoder
            .decode_unicast(1, Bytes::from_static(&[0, 0, 0, 9, 0x08, 0x0A]))
            .unwrap();
        assert_eq!(nlri.routes[0].prefix.path_id, Some(9));
        assert_eq!(nlri.routes[0].prefix.to_string(), "10.0.0.0/8");
    }
}
