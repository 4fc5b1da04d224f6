//! BGP Link-State NLRI structures based on RFC 7752

use crate::models::*;
use num_enum::{FromPrimitive, IntoPrimitive};
use std::net::{Ipv4Addr, Ipv6Addr};

/// BGP Link-State NLRI Types as defined in RFC 7752 and IANA registry
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum NlriType {
    #[num_enum(default)]
    Reserved = 0,
    Node = 1,
    Link = 2,
    Ipv4TopologyPrefix = 3,
    Ipv6TopologyPrefix = 4,
    SrPolicyCandidatePath = 5,
    Srv6Sid = 6,
}

/// Protocol Identifier as defined in RFC 7752
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ProtocolId {
    #[num_enum(default)]
    Reserved = 0,
    IsisL1 = 1,
    IsisL2 = 2,
    Ospfv2 = 3,
    Direct = 4,
    Static = 5,
    Ospfv3 = 6,
    Bgp = 7,
    RsvpTe = 8,
    SegmentRouting = 9,
}

/// Node Descriptor Sub-TLV Types
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum NodeDescriptorType {
    #[num_enum(default)]
    Reserved = 0,
    LocalNodeDescriptors = 256,
    RemoteNodeDescriptors = 257,
    AutonomousSystem = 512,
    BgpLsIdentifier = 513,
    OspfAreaId = 514,
    IgpRouterId = 515,
}

/// Link Descriptor TLV Types
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum LinkDescriptorType {
    #[num_enum(default)]
    Reserved = 0,
    LinkLocalRemoteIdentifiers = 258,
    Ipv4InterfaceAddress = 259,
    Ipv4NeighborAddress = 260,
    Ipv6InterfaceAddress = 261,
    Ipv6NeighborAddress = 262,
    MultiTopologyId = 263,
}

/// Prefix Descriptor TLV Types
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum PrefixDescriptorType {
    #[num_enum(default)]
    Reserved = 0,
    MultiTopologyId = 263,
    OspfRouteType = 264,
    IpReachabilityInformation = 265,
}

/// TLV (Type-Length-Value) structure for Link-State information
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tlv {
    pub tlv_type: u16,
    pub value: Vec<u8>,
}

impl Tlv {
    pub fn new(tlv_type: u16, value: Vec<u8>) -> Self {
        Self { tlv_type, value }
    }
}

/// Node Descriptor TLVs
#[derive(Debug, PartialEq, Clone, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeDescriptor {
    pub autonomous_system: Option<u32>,
    pub bgp_ls_identifier: Option<u32>,
    pub ospf_area_id: Option<u32>,
    pub igp_router_id: Option<Vec<u8>>,
    pub unknown_tlvs: Vec<Tlv>,
}

/// Link Descriptor TLVs
#[derive(Debug, PartialEq, Clone, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkDescriptor {
    pub link_local_remote_identifiers: Option<(u32, u32)>,
    pub ipv4_interface_address: Option<Ipv4Addr>,
    pub ipv4_neighbor_address: Option<Ipv4Addr>,
    pub ipv6_interface_address: Option<Ipv6Addr>,
    pub ipv6_neighbor_address: Option<Ipv6Addr>,
    pub multi_topology_id: Option<u16>,
    pub unknown_tlvs: Vec<Tlv>,
}

/// Prefix Descriptor TLVs
#[derive(Debug, PartialEq, Clone, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrefixDescriptor {
    pub multi_topology_id: Option<u16>,
    pub ospf_route_type: Option<u8>,
    pub ip_reachability_information: Option<NetworkPrefix>,
    pub unknown_tlvs: Vec<Tlv>,
}

/// A single BGP Link-State NLRI entry
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkStateEntry {
    pub nlri_type: NlriType,
    pub protocol_id: ProtocolId,
    pub identifier: u64,
    pub local_node_descriptors: NodeDescriptor,
    pub remote_node_descriptors: Option<NodeDescriptor>,
    pub link_descriptors: Option<LinkDescriptor>,
    pub prefix_descriptors: Option<PrefixDescriptor>,
}

impl LinkStateEntry {
    pub fn new_node_nlri(
        protocol_id: ProtocolId,
        identifier: u64,
        local_node_descriptors: NodeDescriptor,
    ) -> Self {
        Self {
            nlri_type: NlriType::Node,
            protocol_id,
            identifier,
            local_node_descriptors,
            remote_node_descriptors: None,
            link_descriptors: None,
            prefix_descriptors: None,
        }
    }
}

/// All Link-State NLRI entries withdrawn by one attribute.
///
/// The default value (no entries) stands for an End-of-RIB withdrawal.
#[derive(Debug, PartialEq, Clone, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkStateNlri {
    pub entries: Vec<LinkStateEntry>,
}
