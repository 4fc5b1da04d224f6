use crate::models::*;
use thiserror::Error;

pub mod operators;

pub use operators::*;

/// Flow Specification NLRI containing an ordered list of components
///
/// The default value (no components) stands for an End-of-RIB withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowSpecNlri {
    pub components: Vec<FlowSpecComponent>,
}

/// Individual Flow-Spec component types as defined in RFC 8955/8956
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowSpecComponent {
    /// Type 1: Destination Prefix
    DestinationPrefix(NetworkPrefix),
    /// Type 2: Source Prefix
    SourcePrefix(NetworkPrefix),
    /// Type 3: IP Protocol
    IpProtocol(Vec<NumericOperator>),
    /// Type 4: Port (source OR destination)
    Port(Vec<NumericOperator>),
    /// Type 5: Destination Port
    DestinationPort(Vec<NumericOperator>),
    /// Type 6: Source Port
    SourcePort(Vec<NumericOperator>),
    /// Type 7: ICMP Type (IPv4) / ICMPv6 Type (IPv6)
    IcmpType(Vec<NumericOperator>),
    /// Type 8: ICMP Code (IPv4) / ICMPv6 Code (IPv6)
    IcmpCode(Vec<NumericOperator>),
    /// Type 9: TCP Flags
    TcpFlags(Vec<BitmaskOperator>),
    /// Type 10: Packet Length
    PacketLength(Vec<NumericOperator>),
    /// Type 11: DSCP
    Dscp(Vec<NumericOperator>),
    /// Type 12: Fragment
    Fragment(Vec<BitmaskOperator>),
    /// Type 13: Flow Label (IPv6 only)
    FlowLabel(Vec<NumericOperator>),
    /// IPv6 Destination Prefix with offset
    DestinationIpv6Prefix { offset: u8, prefix: NetworkPrefix },
    /// IPv6 Source Prefix with offset
    SourceIpv6Prefix { offset: u8, prefix: NetworkPrefix },
}

impl FlowSpecComponent {
    /// Get the numeric type identifier for this component
    pub const fn component_type(&self) -> u8 {
        match self {
            FlowSpecComponent::DestinationPrefix(_)
            | FlowSpecComponent::DestinationIpv6Prefix { .. } => 1,
            FlowSpecComponent::SourcePrefix(_) | FlowSpecComponent::SourceIpv6Prefix { .. } => 2,
            FlowSpecComponent::IpProtocol(_) => 3,
            FlowSpecComponent::Port(_) => 4,
            FlowSpecComponent::DestinationPort(_) => 5,
            FlowSpecComponent::SourcePort(_) => 6,
            FlowSpecComponent::IcmpType(_) => 7,
            FlowSpecComponent::IcmpCode(_) => 8,
            FlowSpecComponent::TcpFlags(_) => 9,
            FlowSpecComponent::PacketLength(_) => 10,
            FlowSpecComponent::Dscp(_) => 11,
            FlowSpecComponent::Fragment(_) => 12,
            FlowSpecComponent::FlowLabel(_) => 13,
        }
    }
}

impl FlowSpecNlri {
    pub fn new(components: Vec<FlowSpecComponent>) -> Self {
        FlowSpecNlri { components }
    }

    /// Check if this Flow-Spec rule matches IPv6 traffic
    pub fn is_ipv6(&self) -> bool {
        self.components.iter().any(|c| match c {
            FlowSpecComponent::DestinationPrefix(prefix)
            | FlowSpecComponent::SourcePrefix(prefix) => {
                matches!(prefix.prefix, ipnet::IpNet::V6(_))
            }
            FlowSpecComponent::DestinationIpv6Prefix { .. }
            | FlowSpecComponent::SourceIpv6Prefix { .. }
            | FlowSpecComponent::FlowLabel(_) => true,
            _ => false,
        })
    }
}

/// Flow-Spec parsing and validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowSpecError {
    /// Components not in ascending type order
    #[error("invalid component order: expected type > {expected_greater_than}, but found {found}")]
    InvalidComponentOrder {
        expected_greater_than: u8,
        found: u8,
    },
    #[error("invalid operator: 0x{0:02X}")]
    InvalidOperator(u8),
    #[error("invalid component type: {0}")]
    InvalidComponentType(u8),
    #[error("insufficient data for parsing")]
    InsufficientData,
    #[error("invalid prefix encoding")]
    InvalidPrefix,
}
