//! SR Policy NLRI structure - RFC 9830 section 2.1

use std::net::IpAddr;

/// SR Policy NLRI identifying one candidate path.
///
/// The default value (no endpoint) stands for an End-of-RIB withdrawal.
#[derive(Debug, PartialEq, Clone, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SrPolicyNlri {
    /// NLRI length in bits as carried on the wire
    pub length: u8,
    pub distinguisher: u32,
    pub color: u32,
    pub endpoint: Option<IpAddr>,
}

impl SrPolicyNlri {
    pub fn is_ipv6(&self) -> bool {
        matches!(self.endpoint, Some(IpAddr::V6(_)))
    }
}
