//! BGP EVPN route structures based on RFC 7432 and RFC 9136

use crate::models::*;
use num_enum::FromPrimitive;
use std::net::IpAddr;

/// EVPN Route Types
///
/// <https://www.iana.org/assignments/evpn/evpn.xhtml#route-types>
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum EvpnRouteType {
    EthernetAutoDiscovery = 1,
    MacIpAdvertisement = 2,
    InclusiveMulticastEthernetTag = 3,
    EthernetSegment = 4,
    IpPrefix = 5,
    #[num_enum(catch_all)]
    Unknown(u8),
}

/// Ethernet Segment Identifier, 10 octets - RFC 7432 section 5
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EthernetSegmentId(pub [u8; 10]);

/// A single EVPN route.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvpnRouteValue {
    /// Route Type 1
    EthernetAutoDiscovery {
        rd: RouteDistinguisher,
        esi: EthernetSegmentId,
        ethernet_tag: u32,
        label: MplsLabel,
    },
    /// Route Type 2
    MacIpAdvertisement {
        rd: RouteDistinguisher,
        esi: EthernetSegmentId,
        ethernet_tag: u32,
        mac: [u8; 6],
        ip: Option<IpAddr>,
        label1: MplsLabel,
        label2: Option<MplsLabel>,
    },
    /// Route Type 3
    InclusiveMulticastEthernetTag {
        rd: RouteDistinguisher,
        ethernet_tag: u32,
        originator: IpAddr,
    },
    /// Route Type 4
    EthernetSegment {
        rd: RouteDistinguisher,
        esi: EthernetSegmentId,
        originator: IpAddr,
    },
    /// Route Type 5 - RFC 9136
    IpPrefix {
        rd: RouteDistinguisher,
        esi: EthernetSegmentId,
        ethernet_tag: u32,
        prefix: NetworkPrefix,
        gateway: IpAddr,
        label: MplsLabel,
    },
    /// Route types without a structured decoder, kept as raw bytes
    Raw { route_type: u8, value: Vec<u8> },
}

impl EvpnRouteValue {
    pub fn route_type(&self) -> EvpnRouteType {
        match self {
            EvpnRouteValue::EthernetAutoDiscovery { .. } => EvpnRouteType::EthernetAutoDiscovery,
            EvpnRouteValue::MacIpAdvertisement { .. } => EvpnRouteType::MacIpAdvertisement,
            EvpnRouteValue::InclusiveMulticastEthernetTag { .. } => {
                EvpnRouteType::InclusiveMulticastEthernetTag
            }
            EvpnRouteValue::EthernetSegment { .. } => EvpnRouteType::EthernetSegment,
            EvpnRouteValue::IpPrefix { .. } => EvpnRouteType::IpPrefix,
            EvpnRouteValue::Raw { route_type, .. } => EvpnRouteType::from(*route_type),
        }
    }

    pub fn route_distinguisher(&self) -> Option<RouteDistinguisher> {
        match self {
            EvpnRouteValue::EthernetAutoDiscovery { rd, .. }
            | EvpnRouteValue::MacIpAdvertisement { rd, .. }
            | EvpnRouteValue::InclusiveMulticastEthernetTag { rd, .. }
            | EvpnRouteValue::EthernetSegment { rd, .. }
            | EvpnRouteValue::IpPrefix { rd, .. } => Some(*rd),
            EvpnRouteValue::Raw { .. } => None,
        }
    }
}

/// All EVPN routes carried in one withdrawal attribute.
///
/// The default value (no routes) stands for an End-of-RIB withdrawal.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvpnNlri {
    pub routes: Vec<EvpnRouteValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_type() {
        assert_eq!(EvpnRouteType::from(2), EvpnRouteType::MacIpAdvertisement);
        assert_eq!(EvpnRouteType::from(9), EvpnRouteType::Unknown(9));

        let raw = EvpnRouteValue::Raw {
            route_type: 7,
            value: vec![],
        };
        assert_eq!(raw.route_type(), EvpnRouteType::Unknown(7));
        assert_eq!(raw.route_distinguisher(), None);
    }
}
