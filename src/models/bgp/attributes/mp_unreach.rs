use crate::models::*;
use bytes::Bytes;

/// A decoded MP_UNREACH_NLRI attribute (type 15).
///
/// <https://datatracker.ietf.org/doc/html/rfc4760#section-4>
///
/// The value is immutable once parsed: AFI and SAFI are read once from the attribute header, and
/// the NLRI kind they select is classified at construction time. Withdrawn routes are kept as the
/// opaque, family-specific payload; use [MpUnreachNlri::resolver] to decode them.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct MpUnreachNlri {
    afi: u16,
    safi: u8,
    withdrawn_routes: Bytes,
    end_of_rib: bool,
    kind: Option<NlriKind>,
}

impl MpUnreachNlri {
    /// Build an attribute from its header fields and withdrawn routes.
    ///
    /// An empty `withdrawn_routes` makes this an End-of-RIB marker (RFC 4724 section 2).
    pub fn new(afi: u16, safi: u8, withdrawn_routes: Bytes) -> MpUnreachNlri {
        MpUnreachNlri {
            afi,
            safi,
            end_of_rib: withdrawn_routes.is_empty(),
            withdrawn_routes,
            kind: NlriKind::classify(afi, safi),
        }
    }

    /// End-of-RIB marker for the given AFI/SAFI pair.
    pub fn end_of_rib(afi: u16, safi: u8) -> MpUnreachNlri {
        MpUnreachNlri::new(afi, safi, Bytes::new())
    }

    /// Raw address family identifier.
    pub const fn afi(&self) -> u16 {
        self.afi
    }

    /// Raw subsequent address family identifier.
    pub const fn safi(&self) -> u8 {
        self.safi
    }

    /// The AFI as a known [Afi], if it is one.
    pub fn afi_kind(&self) -> Option<Afi> {
        Afi::try_from(self.afi).ok()
    }

    /// The SAFI as a known [Safi], if it is one.
    pub fn safi_kind(&self) -> Option<Safi> {
        Safi::try_from(self.safi).ok()
    }

    /// The withdrawn routes payload; empty for End-of-RIB.
    pub fn withdrawn_routes(&self) -> &Bytes {
        &self.withdrawn_routes
    }

    pub const fn is_end_of_rib(&self) -> bool {
        self.end_of_rib
    }

    /// The NLRI kind selected by the AFI/SAFI pair, `None` if no decoder handles the pair.
    pub const fn kind(&self) -> Option<NlriKind> {
        self.kind
    }

    /// Message type the AFI/SAFI pair is published under.
    pub const fn afi_safi_type(&self) -> Option<MessageType> {
        MessageType::from_afi_safi(self.afi, self.safi)
    }

    pub const fn is_ipv6_nlri(&self) -> bool {
        self.afi == Afi::Ipv6 as u16
    }

    /// Withdrawals carry no next hop field, so this is always `None`.
    pub const fn next_hop(&self) -> Option<NextHopAddress> {
        None
    }

    /// Withdrawals carry no next hop field, so this is always `false`.
    pub const fn is_next_hop_ipv6(&self) -> bool {
        false
    }
}

/// The result of resolving an [MpUnreachNlri] into the NLRI kind its AFI/SAFI pair selects.
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "nlri", rename_all = "snake_case"))]
pub enum WithdrawnNlri {
    LinkState(LinkStateNlri),
    SrPolicy(SrPolicyNlri),
    L3Vpn(MpNlri),
    Evpn(EvpnNlri),
    Unicast(MpNlri),
    LabeledUnicast(MpNlri),
    FlowSpec(FlowSpecNlri),
    /// No decoder handles this AFI/SAFI pair.
    Unrecognized { afi: u16, safi: u8 },
}

impl WithdrawnNlri {
    /// The kind of NLRI held, `None` for [WithdrawnNlri::Unrecognized].
    pub const fn kind(&self) -> Option<NlriKind> {
        match self {
            WithdrawnNlri::LinkState(_) => Some(NlriKind::LinkState),
            WithdrawnNlri::SrPolicy(_) => Some(NlriKind::SrPolicy),
            WithdrawnNlri::L3Vpn(_) => Some(NlriKind::L3Vpn),
            WithdrawnNlri::Evpn(_) => Some(NlriKind::Evpn),
            WithdrawnNlri::Unicast(_) => Some(NlriKind::Unicast),
            WithdrawnNlri::LabeledUnicast(_) => Some(NlriKind::LabeledUnicast),
            WithdrawnNlri::FlowSpec(_) => Some(NlriKind::FlowSpec),
            WithdrawnNlri::Unrecognized { .. } => None,
        }
    }
}
