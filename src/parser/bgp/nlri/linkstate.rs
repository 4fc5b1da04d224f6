//! BGP Link-State NLRI parsing - RFC 7752

use bytes::{Buf, Bytes};
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;

/// Parse BGP Link-State withdrawn NLRI.
///
/// <https://datatracker.ietf.org/doc/html/rfc7752#section-3.2>
/// ```text
/// +------------------------------------+
/// |  NLRI Type (2 octets)              |
/// +------------------------------------+
/// |  Total NLRI Length (2 octets)      |
/// +------------------------------------+
/// |  Link-State NLRI (variable)        |
/// +------------------------------------+
/// ```
pub fn parse_link_state_nlri(mut data: Bytes) -> Result<LinkStateNlri, ParserError> {
    let mut entries = Vec::new();

    while data.remaining() > 0 {
        let nlri_type = data.read_u16()?;
        let nlri_len = data.read_u16()? as usize;

        if data.remaining() < nlri_len {
            return Err(ParserError::TruncatedMsg(format!(
                "Expected {} bytes for NLRI, but only {} remaining",
                nlri_len,
                data.remaining()
            )));
        }

        let nlri_data = data.split_to(nlri_len);
        entries.push(parse_single_link_state_nlri(nlri_type, nlri_data)?);
    }

    Ok(LinkStateNlri { entries })
}

/// Parse a single Link-State NLRI entry
fn parse_single_link_state_nlri(
    nlri_type: u16,
    mut data: Bytes,
) -> Result<LinkStateEntry, ParserError> {
    let nlri_type = NlriType::from(nlri_type);

    // Protocol-ID (1 byte) and Identifier (8 bytes)
    if data.remaining() < 9 {
        return Err(ParserError::TruncatedMsg(format!(
            "Expected at least 9 bytes for Link-State NLRI header, but only {} remaining",
            data.remaining()
        )));
    }

    let protocol_id = ProtocolId::from(data.get_u8());
    let identifier = data.get_u64();

    let local_node_descriptors =
        parse_node_descriptors(&mut data, NodeDescriptorType::LocalNodeDescriptors)?;

    let mut entry = LinkStateEntry::new_node_nlri(protocol_id, identifier, local_node_descriptors);
    entry.nlri_type = nlri_type;

    match nlri_type {
        NlriType::Link => {
            entry.remote_node_descriptors = Some(parse_node_descriptors(
                &mut data,
                NodeDescriptorType::RemoteNodeDescriptors,
            )?);
            entry.link_descriptors = Some(parse_link_descriptors(data)?);
        }
        NlriType::Ipv4TopologyPrefix => {
            entry.prefix_descriptors = Some(parse_prefix_descriptors(data, Afi::Ipv4)?);
        }
        NlriType::Ipv6TopologyPrefix => {
            entry.prefix_descriptors = Some(parse_prefix_descriptors(data, Afi::Ipv6)?);
        }
        // other NLRI types only carry the local node descriptors we understand
        _ => {}
    }

    Ok(entry)
}

/// Iterate over the TLVs in `data`, handing each type and value to `f`.
fn for_each_tlv<F>(mut data: Bytes, mut f: F) -> Result<(), ParserError>
where
    F: FnMut(u16, Bytes) -> Result<(), ParserError>,
{
    while data.remaining() > 0 {
        let tlv_type = data.read_u16()?;
        let tlv_len = data.read_u16()? as usize;
        if data.remaining() < tlv_len {
            return Err(ParserError::TruncatedMsg(format!(
                "Expected {} bytes for TLV {}, but only {} remaining",
                tlv_len,
                tlv_type,
                data.remaining()
            )));
        }
        f(tlv_type, data.split_to(tlv_len))?;
    }
    Ok(())
}

/// Parse a Local (256) or Remote (257) Node Descriptors TLV and its sub-TLVs
fn parse_node_descriptors(
    data: &mut Bytes,
    expected: NodeDescriptorType,
) -> Result<NodeDescriptor, ParserError> {
    let tlv_type = NodeDescriptorType::from(data.read_u16()?);
    if tlv_type != expected {
        return Err(ParserError::ParseError(format!(
            "Expected {:?} TLV, found {:?}",
            expected, tlv_type
        )));
    }
    let desc_len = data.read_u16()? as usize;
    if data.remaining() < desc_len {
        return Err(ParserError::TruncatedMsg(format!(
            "Expected {} bytes for node descriptors, but only {} remaining",
            desc_len,
            data.remaining()
        )));
    }

    let mut node_desc = NodeDescriptor::default();
    for_each_tlv(data.split_to(desc_len), |sub_tlv_type, mut value| {
        match (NodeDescriptorType::from(sub_tlv_type), value.len()) {
            (NodeDescriptorType::AutonomousSystem, 4) => {
                node_desc.autonomous_system = Some(value.get_u32())
            }
            (NodeDescriptorType::BgpLsIdentifier, 4) => {
                node_desc.bgp_ls_identifier = Some(value.get_u32())
            }
            (NodeDescriptorType::OspfAreaId, 4) => node_desc.ospf_area_id = Some(value.get_u32()),
            (NodeDescriptorType::IgpRouterId, _) => node_desc.igp_router_id = Some(value.to_vec()),
            _ => node_desc
                .unknown_tlvs
                .push(Tlv::new(sub_tlv_type, value.to_vec())),
        }
        Ok(())
    })?;

    Ok(node_desc)
}

/// Parse Link Descriptor TLVs, which run to the end of the NLRI
fn parse_link_descriptors(data: Bytes) -> Result<LinkDescriptor, ParserError> {
    let mut link_desc = LinkDescriptor::default();

    for_each_tlv(data, |tlv_type, mut value| {
        match (LinkDescriptorType::from(tlv_type), value.len()) {
            (LinkDescriptorType::LinkLocalRemoteIdentifiers, 8) => {
                let local_id = value.get_u32();
                let remote_id = value.get_u32();
                link_desc.link_local_remote_identifiers = Some((local_id, remote_id));
            }
            (LinkDescriptorType::Ipv4InterfaceAddress, 4) => {
                link_desc.ipv4_interface_address = Some(Ipv4Addr::from(value.get_u32()))
            }
            (LinkDescriptorType::Ipv4NeighborAddress, 4) => {
                link_desc.ipv4_neighbor_address = Some(Ipv4Addr::from(value.get_u32()))
            }
            (LinkDescriptorType::Ipv6InterfaceAddress, 16) => {
                link_desc.ipv6_interface_address = Some(Ipv6Addr::from(value.get_u128()))
            }
            (LinkDescriptorType::Ipv6NeighborAddress, 16) => {
                link_desc.ipv6_neighbor_address = Some(Ipv6Addr::from(value.get_u128()))
            }
            (LinkDescriptorType::MultiTopologyId, 2) => {
                link_desc.multi_topology_id = Some(value.get_u16())
            }
            _ => link_desc
                .unknown_tlvs
                .push(Tlv::new(tlv_type, value.to_vec())),
        }
        Ok(())
    })?;

    Ok(link_desc)
}

/// Parse Prefix Descriptor TLVs, which run to the end of the NLRI
fn parse_prefix_descriptors(data: Bytes, afi: Afi) -> Result<PrefixDescriptor, ParserError> {
    let mut prefix_desc = PrefixDescriptor::default();

    for_each_tlv(data, |tlv_type, mut value| {
        match (PrefixDescriptorType::from(tlv_type), value.len()) {
            (PrefixDescriptorType::MultiTopologyId, 2) => {
                prefix_desc.multi_topology_id = Some(value.get_u16())
            }
            (PrefixDescriptorType::OspfRouteType, 1) => {
                prefix_desc.ospf_route_type = Some(value.get_u8())
            }
            (PrefixDescriptorType::IpReachabilityInformation, _) => {
                prefix_desc.ip_reachability_information =
                    Some(value.read_nlri_prefix(afi, false)?)
            }
            _ => prefix_desc
                .unknown_tlvs
                .push(Tlv::new(tlv_type, value.to_vec())),
        }
        Ok(())
    })?;

    Ok(prefix_desc)
}
