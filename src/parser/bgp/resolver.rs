/*!
Resolves an [MpUnreachNlri] into the typed NLRI its AFI/SAFI pair selects.

Each `resolve_*` method follows the same rules:
- `Ok(None)` when the attribute does not carry that kind of NLRI;
- `Ok(Some(T::default()))` for an End-of-RIB marker, without calling the decoder;
- otherwise the decoder's result, with failures wrapped in [ParserError::NlriDecode].
*/
use bytes::Bytes;
use log::debug;

use crate::models::*;
use crate::parser::bgp::nlri::{DefaultNlriDecoder, NlriDecoder};
use crate::ParserError;

static DEFAULT_DECODER: DefaultNlriDecoder = DefaultNlriDecoder { add_path: false };

/// Borrowing view over an attribute and the decoder used for its payload.
#[derive(Debug, Clone, Copy)]
pub struct NlriResolver<'a, D: NlriDecoder + ?Sized = DefaultNlriDecoder> {
    attr: &'a MpUnreachNlri,
    decoder: &'a D,
}

impl MpUnreachNlri {
    /// Resolver using [DefaultNlriDecoder] without add-path.
    pub fn resolver(&self) -> NlriResolver<'_> {
        NlriResolver {
            attr: self,
            decoder: &DEFAULT_DECODER,
        }
    }

    /// Resolver using the given decoder.
    pub fn resolver_with<'a, D: NlriDecoder + ?Sized>(
        &'a self,
        decoder: &'a D,
    ) -> NlriResolver<'a, D> {
        NlriResolver {
            attr: self,
            decoder,
        }
    }

    /// Decode the withdrawn routes with [DefaultNlriDecoder], see [NlriResolver::resolve].
    pub fn resolve(&self) -> Result<WithdrawnNlri, ParserError> {
        self.resolver().resolve()
    }
}

impl<'a, D: NlriDecoder + ?Sized> NlriResolver<'a, D> {
    pub fn attribute(&self) -> &'a MpUnreachNlri {
        self.attr
    }

    /// Decode the payload as `kind`, which the caller has already matched against the attribute.
    fn decode<T, F>(&self, kind: NlriKind, decode: F) -> Result<T, ParserError>
    where
        T: Default,
        F: FnOnce(&D, Bytes) -> Result<T, ParserError>,
    {
        if self.attr.is_end_of_rib() {
            debug!(
                "{} End-of-RIB for afi {} safi {}",
                kind,
                self.attr.afi(),
                self.attr.safi()
            );
            return Ok(T::default());
        }
        decode(self.decoder, self.attr.withdrawn_routes().clone()).map_err(|e| {
            ParserError::NlriDecode {
                kind,
                source: Box::new(e),
            }
        })
    }

    fn decode_if<T, F>(&self, kind: NlriKind, decode: F) -> Result<Option<T>, ParserError>
    where
        T: Default,
        F: FnOnce(&D, Bytes) -> Result<T, ParserError>,
    {
        match self.attr.kind() == Some(kind) {
            true => self.decode(kind, decode).map(Some),
            false => Ok(None),
        }
    }

    /// Link-State NLRI, any AFI with SAFI 71.
    pub fn resolve_link_state(&self) -> Result<Option<LinkStateNlri>, ParserError> {
        self.decode_if(NlriKind::LinkState, |d, p| d.decode_link_state(p))
    }

    /// SR Policy NLRI, any AFI with SAFI 73.
    pub fn resolve_sr_policy(&self) -> Result<Option<SrPolicyNlri>, ParserError> {
        self.decode_if(NlriKind::SrPolicy, |d, p| d.decode_sr_policy(p))
    }

    /// VPN routes, AFI 1 with SAFI 128.
    pub fn resolve_l3vpn(&self) -> Result<Option<MpNlri>, ParserError> {
        self.decode_if(NlriKind::L3Vpn, |d, p| d.decode_l3vpn(p))
    }

    /// EVPN routes, AFI 25 with SAFI 70.
    pub fn resolve_evpn(&self) -> Result<Option<EvpnNlri>, ParserError> {
        self.decode_if(NlriKind::Evpn, |d, p| d.decode_evpn(p))
    }

    /// Unicast prefixes, AFI 1 or 2 with SAFI 1.
    pub fn resolve_unicast(&self) -> Result<Option<MpNlri>, ParserError> {
        let afi = self.attr.afi();
        self.decode_if(NlriKind::Unicast, |d, p| d.decode_unicast(afi, p))
    }

    /// Labeled unicast prefixes, AFI 1 or 2 with SAFI 4.
    pub fn resolve_labeled_unicast(&self) -> Result<Option<MpNlri>, ParserError> {
        let afi = self.attr.afi();
        self.decode_if(NlriKind::LabeledUnicast, |d, p| {
            d.decode_labeled_unicast(afi, p)
        })
    }

    /// Flow-Spec NLRI, any AFI with SAFI 133.
    pub fn resolve_flowspec(&self) -> Result<Option<FlowSpecNlri>, ParserError> {
        let afi = self.attr.afi();
        self.decode_if(NlriKind::FlowSpec, |d, p| d.decode_flowspec(afi, p))
    }

    /// Decode into whichever kind the attribute was classified as at construction.
    pub fn resolve(&self) -> Result<WithdrawnNlri, ParserError> {
        let afi = self.attr.afi();
        let Some(kind) = self.attr.kind() else {
            debug!("no NLRI decoder for afi {} safi {}", afi, self.attr.safi());
            return Ok(WithdrawnNlri::Unrecognized {
                afi,
                safi: self.attr.safi(),
            });
        };
        Ok(match kind {
            NlriKind::LinkState => {
                WithdrawnNlri::LinkState(self.decode(kind, |d, p| d.decode_link_state(p))?)
            }
            NlriKind::SrPolicy => {
                WithdrawnNlri::SrPolicy(self.decode(kind, |d, p| d.decode_sr_policy(p))?)
            }
            NlriKind::L3Vpn => WithdrawnNlri::L3Vpn(self.decode(kind, |d, p| d.decode_l3vpn(p))?),
            NlriKind::Evpn => WithdrawnNlri::Evpn(self.decode(kind, |d, p| d.decode_evpn(p))?),
            NlriKind::Unicast => {
                WithdrawnNlri::Unicast(self.decode(kind, |d, p| d.decode_unicast(afi, p))?)
            }
            NlriKind::LabeledUnicast => WithdrawnNlri::LabeledUnicast(
                self.decode(kind, |d, p| d.decode_labeled_unicast(afi, p))?,
            ),
            NlriKind::FlowSpec => {
                WithdrawnNlri::FlowSpec(self.decode(kind, |d, p| d.decode_flowspec(afi, p))?)
            }
        })
    }
}
