/*!
`mp-unreach-nlri` decodes the BGP MP_UNREACH_NLRI path attribute and the withdrawn routes it
carries.

The attribute body is parsed into an immutable [MpUnreachNlri] holding the AFI, the SAFI and the
raw withdrawn routes. The AFI/SAFI pair is classified once into an [NlriKind], which selects the
decoder used for the payload:

| Kind | AFI | SAFI |
|---|---|---|
| Link-State | any | 71 |
| SR Policy | any | 73 |
| L3VPN | 1 | 128 |
| EVPN | 25 | 70 |
| Unicast | 1 or 2 | 1 |
| Labeled unicast | 1 or 2 | 4 |
| Flow-Spec | any | 133 |

An attribute without withdrawn routes is the End-of-RIB marker and resolves to the empty NLRI of
its kind without running a decoder.

```
use mp_unreach_nlri::{MpUnreachNlri, WithdrawnNlri};

let attr = MpUnreachNlri::parse(&[0x00, 0x01, 0x01, 0x18, 0xC0, 0x00, 0x02]).unwrap();
assert!(!attr.is_end_of_rib());

let nlri = attr.resolver().resolve_unicast().unwrap().unwrap();
assert_eq!(nlri.to_string(), "192.0.2.0/24");

// not an EVPN attribute
assert!(attr.resolver().resolve_evpn().unwrap().is_none());

let eor = MpUnreachNlri::parse(&[0x00, 0x19, 0x46]).unwrap();
assert!(matches!(eor.resolve().unwrap(), WithdrawnNlri::Evpn(routes) if routes.routes.is_empty()));
```

Custom decoders plug in through [NlriDecoder] and [MpUnreachNlri::resolver_with].

## Supported RFCs

- [X] [RFC 4760](https://datatracker.ietf.org/doc/html/rfc4760): Multiprotocol Extensions for BGP-4
- [X] [RFC 4724](https://datatracker.ietf.org/doc/html/rfc4724): Graceful Restart Mechanism for BGP (End-of-RIB)
- [X] [RFC 7911](https://datatracker.ietf.org/doc/html/rfc7911): Advertisement of Multiple Paths in BGP (ADD-PATH)
- [X] [RFC 8277](https://datatracker.ietf.org/doc/html/rfc8277): Using BGP to Bind MPLS Labels to Address Prefixes
- [X] [RFC 4364](https://datatracker.ietf.org/doc/html/rfc4364): BGP/MPLS IP Virtual Private Networks (VPNs)
- [X] [RFC 7432](https://datatracker.ietf.org/doc/html/rfc7432): BGP MPLS-Based Ethernet VPN
- [X] [RFC 9136](https://datatracker.ietf.org/doc/html/rfc9136): IP Prefix Advertisement in Ethernet VPN (EVPN)
- [X] [RFC 7752](https://datatracker.ietf.org/doc/html/rfc7752): North-Bound Distribution of Link-State and TE Information Using BGP
- [X] [RFC 9830](https://datatracker.ietf.org/doc/html/rfc9830): Advertising Segment Routing Policies in BGP
- [X] [RFC 8955](https://datatracker.ietf.org/doc/html/rfc8955): Dissemination of Flow Specification Rules
- [X] [RFC 8956](https://datatracker.ietf.org/doc/html/rfc8956): Dissemination of Flow Specification Rules for IPv6
*/

pub mod error;
pub mod models;
pub mod parser;

pub use error::ParserError;
pub use models::*;
pub use parser::{parse_mp_unreach_nlri, DefaultNlriDecoder, NlriDecoder, NlriResolver};
