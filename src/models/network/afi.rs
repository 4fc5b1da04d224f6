use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt::{Display, Formatter};
use std::net::IpAddr;

/// AFI -- Address Family Identifier
///
/// <https://www.iana.org/assignments/address-family-numbers/address-family-numbers.xhtml>
#[derive(Debug, PartialEq, TryFromPrimitive, IntoPrimitive, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Afi {
    Ipv4 = 1,
    Ipv6 = 2,
    /// Layer-2 VPN, used by EVPN - RFC 7432
    L2vpn = 25,
    /// BGP Link-State - RFC 7752
    LinkState = 16388,
}

impl From<IpAddr> for Afi {
    #[inline]
    fn from(value: IpAddr) -> Self {
        match value {
            IpAddr::V4(_) => Afi::Ipv4,
            IpAddr::V6(_) => Afi::Ipv6,
        }
    }
}

/// SAFI -- Subsequent Address Family Identifier
///
/// <https://www.iana.org/assignments/safi-namespace/safi-namespace.xhtml>
#[derive(Debug, PartialEq, TryFromPrimitive, IntoPrimitive, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Safi {
    Unicast = 1,
    Multicast = 2,
    /// MPLS labeled unicast - RFC 8277
    MplsLabel = 4,
    /// EVPN - RFC 7432
    Evpn = 70,
    /// BGP Link-State - RFC 7752
    LinkState = 71,
    /// BGP Link-State VPN - RFC 7752
    LinkStateVpn = 72,
    /// SR Policy - RFC 9830
    SrPolicy = 73,
    /// MPLS-labeled VPN address - RFC 4364
    MplsVpn = 128,
    /// Flow Specification - RFC 8955
    FlowSpec = 133,
    /// L3VPN Flow Specification - RFC 8955
    FlowSpecVpn = 134,
}

/// The NLRI encodings a withdrawal attribute can be resolved into.
///
/// Which kind applies is decided by the AFI/SAFI pair alone, see [NlriKind::classify].
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NlriKind {
    LinkState,
    SrPolicy,
    L3Vpn,
    Evpn,
    Unicast,
    LabeledUnicast,
    FlowSpec,
}

impl NlriKind {
    /// Look up the NLRI kind carried under the given AFI/SAFI pair.
    ///
    /// Link-State, SR Policy and Flowspec are selected by SAFI regardless of the AFI; the
    /// remaining kinds are only recognized under their specific AFI values. Returns `None` for
    /// combinations without a decoder.
    pub const fn classify(afi: u16, safi: u8) -> Option<NlriKind> {
        match (afi, safi) {
            (_, 71) => Some(NlriKind::LinkState),
            (_, 73) => Some(NlriKind::SrPolicy),
            (1, 128) => Some(NlriKind::L3Vpn),
            (25, 70) => Some(NlriKind::Evpn),
            (1 | 2, 1) => Some(NlriKind::Unicast),
            (1 | 2, 4) => Some(NlriKind::LabeledUnicast),
            (_, 133) => Some(NlriKind::FlowSpec),
            _ => None,
        }
    }
}

impl Display for NlriKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NlriKind::LinkState => "link-state",
            NlriKind::SrPolicy => "sr-policy",
            NlriKind::L3Vpn => "l3vpn",
            NlriKind::Evpn => "evpn",
            NlriKind::Unicast => "unicast",
            NlriKind::LabeledUnicast => "labeled-unicast",
            NlriKind::FlowSpec => "flowspec",
        };
        write!(f, "{}", name)
    }
}

/// Message type a BMP collector publishes routes of a given AFI/SAFI pair under.
///
/// This is coarser than the wire encoding for unicast (plain and labeled unicast share a
/// message type) and finer for SR Policy and Flowspec, which are split per address family.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageType {
    UnicastPrefixV4,
    UnicastPrefixV6,
    L3VpnV4,
    L3VpnV6,
    Evpn,
    LinkState,
    SrPolicyV4,
    SrPolicyV6,
    FlowSpecV4,
    FlowSpecV6,
}

impl MessageType {
    pub const fn from_afi_safi(afi: u16, safi: u8) -> Option<MessageType> {
        match (afi, safi) {
            (1, 1) | (1, 4) => Some(MessageType::UnicastPrefixV4),
            (2, 1) | (2, 4) => Some(MessageType::UnicastPrefixV6),
            (1, 128) => Some(MessageType::L3VpnV4),
            (2, 128) => Some(MessageType::L3VpnV6),
            (25, 70) => Some(MessageType::Evpn),
            (16388, 71) => Some(MessageType::LinkState),
            (1, 73) => Some(MessageType::SrPolicyV4),
            (2, 73) => Some(MessageType::SrPolicyV6),
            (1, 133) => Some(MessageType::FlowSpecV4),
            (2, 133) => Some(MessageType::FlowSpecV6),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_afi_from() {
        assert_eq!(
            Afi::from(IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))),
            Afi::Ipv4
        );
        assert_eq!(
            Afi::from(IpAddr::V6(std::net::Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1))),
            Afi::Ipv6
        );
    }

    #[test]
    fn test_afi_safi_repr() {
        assert_eq!(Afi::Ipv4 as u16, 1);
        assert_eq!(Afi::L2vpn as u16, 25);
        assert_eq!(Afi::LinkState as u16, 16388);

        assert_eq!(Safi::MplsLabel as u8, 4);
        assert_eq!(Safi::SrPolicy as u8, 73);
        assert_eq!(Safi::FlowSpec as u8, 133);

        assert_eq!(Afi::try_from(25u16).unwrap(), Afi::L2vpn);
        assert!(Afi::try_from(3u16).is_err());
        assert!(Safi::try_from(3u8).is_err());
    }

    #[test]
    fn test_classify() {
        assert_eq!(NlriKind::classify(16388, 71), Some(NlriKind::LinkState));
        assert_eq!(NlriKind::classify(1, 71), Some(NlriKind::LinkState));
        assert_eq!(NlriKind::classify(2, 73), Some(NlriKind::SrPolicy));
        assert_eq!(NlriKind::classify(1, 128), Some(NlriKind::L3Vpn));
        assert_eq!(NlriKind::classify(2, 128), None);
        assert_eq!(NlriKind::classify(25, 70), Some(NlriKind::Evpn));
        assert_eq!(NlriKind::classify(1, 70), None);
        assert_eq!(NlriKind::classify(1, 1), Some(NlriKind::Unicast));
        assert_eq!(NlriKind::classify(2, 1), Some(NlriKind::Unicast));
        assert_eq!(NlriKind::classify(25, 1), None);
        assert_eq!(NlriKind::classify(2, 4), Some(NlriKind::LabeledUnicast));
        assert_eq!(NlriKind::classify(999, 133), Some(NlriKind::FlowSpec));
        assert_eq!(NlriKind::classify(1, 2), None);
    }

    #[test]
    fn test_message_type() {
        assert_eq!(
            MessageType::from_afi_safi(1, 4),
            Some(MessageType::UnicastPrefixV4)
        );
        assert_eq!(MessageType::from_afi_safi(2, 128), Some(MessageType::L3VpnV6));
        assert_eq!(
            MessageType::from_afi_safi(2, 133),
            Some(MessageType::FlowSpecV6)
        );
        assert_eq!(MessageType::from_afi_safi(25, 71), None);
    }
}
