//! EVPN withdrawn routes (AFI 25, SAFI 70).

use bytes::{Buf, Bytes};
use log::{debug, warn};
use std::net::IpAddr;

use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;

/// Parse EVPN withdrawn routes.
///
/// <https://datatracker.ietf.org/doc/html/rfc7432#section-7>
/// ```text
/// +-----------------------------------+
/// |    Route Type (1 octet)           |
/// +-----------------------------------+
/// |     Length (1 octet)              |
/// +-----------------------------------+
/// | Route Type specific (variable)    |
/// +-----------------------------------+
/// ```
pub fn parse_evpn_nlri(mut input: Bytes) -> Result<EvpnNlri, ParserError> {
    let mut routes = vec![];
    while input.remaining() > 0 {
        let route_type = input.read_u8()?;
        let length = input.read_u8()? as usize;
        if input.remaining() < length {
            return Err(ParserError::TruncatedMsg(format!(
                "Expected {} bytes for EVPN route type {}, but only {} remaining",
                length,
                route_type,
                input.remaining()
            )));
        }
        let data = input.split_to(length);
        routes.push(parse_evpn_route(route_type, data)?);
    }
    Ok(EvpnNlri { routes })
}

fn parse_evpn_route(route_type: u8, mut data: Bytes) -> Result<EvpnRouteValue, ParserError> {
    let route = match EvpnRouteType::from(route_type) {
        EvpnRouteType::EthernetAutoDiscovery => EvpnRouteValue::EthernetAutoDiscovery {
            rd: data.read_route_distinguisher()?,
            esi: read_esi(&mut data)?,
            ethernet_tag: data.read_u32()?,
            label: data.read_mpls_label()?,
        },
        EvpnRouteType::MacIpAdvertisement => {
            let rd = data.read_route_distinguisher()?;
            let esi = read_esi(&mut data)?;
            let ethernet_tag = data.read_u32()?;
            let mac_len = data.read_u8()?;
            if mac_len != 48 {
                return Err(ParserError::ParseError(format!(
                    "invalid EVPN MAC address length: {}",
                    mac_len
                )));
            }
            data.has_n_remaining(6)?;
            let mut mac = [0u8; 6];
            data.copy_to_slice(&mut mac);
            let ip_len = data.read_u8()?;
            let ip = data.read_address_by_bit_len(ip_len)?;
            let label1 = data.read_mpls_label()?;
            let label2 = match data.remaining() {
                0 => None,
                _ => Some(data.read_mpls_label()?),
            };
            EvpnRouteValue::MacIpAdvertisement {
                rd,
                esi,
                ethernet_tag,
                mac,
                ip,
                label1,
                label2,
            }
        }
        EvpnRouteType::InclusiveMulticastEthernetTag => {
            let rd = data.read_route_distinguisher()?;
            let ethernet_tag = data.read_u32()?;
            let originator = read_originator(&mut data)?;
            EvpnRouteValue::InclusiveMulticastEthernetTag {
                rd,
                ethernet_tag,
                originator,
            }
        }
        EvpnRouteType::EthernetSegment => {
            let rd = data.read_route_distinguisher()?;
            let esi = read_esi(&mut data)?;
            let originator = read_originator(&mut data)?;
            EvpnRouteValue::EthernetSegment {
                rd,
                esi,
                originator,
            }
        }
        EvpnRouteType::IpPrefix => parse_ip_prefix_route(data.split_to(data.len()))?,
        EvpnRouteType::Unknown(t) => {
            debug!("EVPN route type {} kept as raw bytes", t);
            EvpnRouteValue::Raw {
                route_type: t,
                value: data.split_to(data.len()).to_vec(),
            }
        }
    };
    if data.has_remaining() {
        warn!(
            "{} trailing bytes after EVPN route type {} ignored",
            data.remaining(),
            route_type
        );
    }
    Ok(route)
}

/// RFC 9136 section 3.1: the route is 34 octets for IPv4 and 58 octets for IPv6, the address
/// family of prefix and gateway follows from that total.
fn parse_ip_prefix_route(mut data: Bytes) -> Result<EvpnRouteValue, ParserError> {
    let afi = match data.len() {
        34 => Afi::Ipv4,
        58 => Afi::Ipv6,
        v => {
            return Err(ParserError::ParseError(format!(
                "invalid EVPN IP prefix route length: {}",
                v
            )))
        }
    };
    let rd = data.read_route_distinguisher()?;
    let esi = read_esi(&mut data)?;
    let ethernet_tag = data.read_u32()?;
    let prefix_len = data.read_u8()?;
    let (addr, gateway) = match afi {
        Afi::Ipv4 => (
            IpAddr::V4(data.read_ipv4_address()?),
            IpAddr::V4(data.read_ipv4_address()?),
        ),
        _ => (
            IpAddr::V6(data.read_ipv6_address()?),
            IpAddr::V6(data.read_ipv6_address()?),
        ),
    };
    let prefix = ipnet::IpNet::new(addr, prefix_len)?;
    Ok(EvpnRouteValue::IpPrefix {
        rd,
        esi,
        ethernet_tag,
        prefix: NetworkPrefix::new(prefix, None),
        gateway,
        label: data.read_mpls_label()?,
    })
}

fn read_esi(data: &mut Bytes) -> Result<EthernetSegmentId, ParserError> {
    data.has_n_remaining(10)?;
    let mut esi = [0u8; 10];
    data.copy_to_slice(&mut esi);
    Ok(EthernetSegmentId(esi))
}

fn read_originator(data: &mut Bytes) -> Result<IpAddr, ParserError> {
    let bit_len = data.read_u8()?;
    data.read_address_by_bit_len(bit_len)?.ok_or_else(|| {
        ParserError::ParseError("EVPN originating router address missing".to_string())
    })
}
