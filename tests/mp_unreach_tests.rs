use bytes::Bytes;
use mp_unreach_nlri::*;
use std::str::FromStr;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn attr(hex_body: &str) -> MpUnreachNlri {
    init_logger();
    MpUnreachNlri::parse(&hex::decode(hex_body).unwrap()).unwrap()
}

#[test]
fn test_unicast_end_of_rib() {
    let attr = attr("000101");
    assert!(attr.is_end_of_rib());
    let resolver = attr.resolver();
    assert_eq!(resolver.resolve_unicast().unwrap(), Some(MpNlri::default()));
    assert_eq!(resolver.resolve_evpn().unwrap(), None);
    assert_eq!(
        attr.resolve().unwrap(),
        WithdrawnNlri::Unicast(MpNlri::default())
    );
}

#[test]
fn test_ipv6_unicast_withdrawal() {
    // 2001:db8:1::/48 and 2001:db8:2::/48
    let attr = attr("0002013020010db800013020010db80002");
    assert!(attr.is_ipv6_nlri());
    assert_eq!(attr.afi_safi_type(), Some(MessageType::UnicastPrefixV6));

    let nlri = attr.resolver().resolve_unicast().unwrap().unwrap();
    assert_eq!(
        nlri.prefixes().cloned().collect::<Vec<_>>(),
        vec![
            NetworkPrefix::from_str("2001:db8:1::/48").unwrap(),
            NetworkPrefix::from_str("2001:db8:2::/48").unwrap(),
        ]
    );
    assert_eq!(attr.resolver().resolve_labeled_unicast().unwrap(), None);
}

#[test]
fn test_resolve_matches_family_decoder() {
    let payload = hex::decode("03110001c000020100640000000020c0000201").unwrap();
    let mut body = vec![0x00, 0x19, 0x46];
    body.extend_from_slice(&payload);
    let attr = MpUnreachNlri::parse(&body).unwrap();

    let resolved = attr.resolver().resolve_evpn().unwrap().unwrap();
    let direct = parser::bgp::nlri::parse_evpn_nlri(Bytes::from(payload)).unwrap();
    assert_eq!(resolved, direct);
    assert_eq!(attr.resolver().resolve_l3vpn().unwrap(), None);
}

#[test]
fn test_l3vpn_withdrawal() {
    let attr = attr("000180700006410000fde8000000640a0a0a");
    assert_eq!(attr.kind(), Some(NlriKind::L3Vpn));
    match attr.resolve().unwrap() {
        WithdrawnNlri::L3Vpn(nlri) => {
            assert_eq!(nlri.to_string(), "65000:100:10.10.10.0/24 label 100")
        }
        other => panic!("unexpected {:?}", other),
    }

    // AFI 2 with SAFI 128 is not dispatched
    let attr = MpUnreachNlri::end_of_rib(2, 128);
    assert_eq!(attr.resolver().resolve_l3vpn().unwrap(), None);
    assert_eq!(
        attr.resolve().unwrap(),
        WithdrawnNlri::Unrecognized { afi: 2, safi: 128 }
    );
}

#[test]
fn test_safi_only_kinds_ignore_afi() {
    for afi in [1u16, 2, 16388, 999] {
        let ls = MpUnreachNlri::end_of_rib(afi, 71);
        assert_eq!(
            ls.resolver().resolve_link_state().unwrap(),
            Some(LinkStateNlri::default())
        );
        let sr = MpUnreachNlri::end_of_rib(afi, 73);
        assert_eq!(
            sr.resolver().resolve_sr_policy().unwrap(),
            Some(SrPolicyNlri::default())
        );
        let fs = MpUnreachNlri::end_of_rib(afi, 133);
        assert_eq!(
            fs.resolver().resolve_flowspec().unwrap(),
            Some(FlowSpecNlri::default())
        );
    }
}

#[test]
fn test_sr_policy_withdrawal() {
    let attr = attr("0001496000000002000000640a000001");
    let nlri = attr.resolver().resolve_sr_policy().unwrap().unwrap();
    assert_eq!(nlri.color, 100);
    assert_eq!(nlri.endpoint, Some("10.0.0.1".parse().unwrap()));
    assert_eq!(attr.afi_safi_type(), Some(MessageType::SrPolicyV4));
}

#[test]
fn test_flowspec_withdrawal() {
    let attr = attr("000185080118c00002038106");
    let nlri = attr.resolver().resolve_flowspec().unwrap().unwrap();
    assert_eq!(nlri.components.len(), 2);
    assert!(!nlri.is_ipv6());
}

#[test]
fn test_decode_error_is_reported() {
    // EVPN route claims 25 bytes but carries 2
    let attr = attr("00194601190001");
    let err = attr.resolver().resolve_evpn().unwrap_err();
    assert!(matches!(
        err,
        ParserError::NlriDecode {
            kind: NlriKind::Evpn,
            ..
        }
    ));
    assert!(err.to_string().starts_with("failed to decode evpn NLRI"));
    assert!(attr.resolve().is_err());
}

#[test]
fn test_flowspec_decode_error_is_reported() {
    // NLRI length 16 with only two component bytes present
    let attr = attr("000185100381");
    let err = attr.resolver().resolve_flowspec().unwrap_err();
    match err {
        ParserError::NlriDecode {
            kind: NlriKind::FlowSpec,
            source,
        } => assert!(matches!(
            *source,
            ParserError::FlowSpec(FlowSpecError::InsufficientData)
        )),
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(attr.resolver().resolve_sr_policy().unwrap(), None);
}

#[test]
fn test_header_and_payload_cover_input() {
    init_logger();
    let input: Vec<u8> = (0..64u8).map(|i| i.wrapping_mul(37)).collect();
    for len in 3..=input.len() {
        let attr = MpUnreachNlri::parse(&input[..len]).unwrap();
        let mut rebuilt = attr.afi().to_be_bytes().to_vec();
        rebuilt.push(attr.safi());
        rebuilt.extend_from_slice(attr.withdrawn_routes());
        assert_eq!(rebuilt, &input[..len]);
        assert_eq!(attr.is_end_of_rib(), len == 3);
    }
}

#[test]
fn test_malformed_attribute() {
    init_logger();
    assert!(matches!(
        parse_mp_unreach_nlri(Bytes::new()),
        Err(ParserError::MalformedAttribute(_))
    ));
    assert!(matches!(
        MpUnreachNlri::parse(&[0x00, 0x01]),
        Err(ParserError::MalformedAttribute(_))
    ));
}

#[test]
fn test_next_hop_is_never_present() {
    for body in [
        "000101",
        "0002013020010db800013020010db80002",
        "00194603110001c000020100640000000020c0000201",
    ] {
        let attr = attr(body);
        assert_eq!(attr.next_hop(), None);
        assert!(!attr.is_next_hop_ipv6());
    }
}

#[test]
fn test_add_path_decoder() {
    let decoder = DefaultNlriDecoder::new(true);
    let attr = attr("00010100000001180a0001");
    let nlri = attr
        .resolver_with(&decoder)
        .resolve_unicast()
        .unwrap()
        .unwrap();
    assert_eq!(nlri.routes[0].prefix.path_id, Some(1));
    assert_eq!(nlri.routes[0].prefix.to_string(), "10.0.1.0/24");
}

#[cfg(feature = "serde")]
#[test]
fn test_serialize_withdrawn_nlri() {
    let value = serde_json::to_value(attr("000101180a0001").resolve().unwrap()).unwrap();
    assert_eq!(value["kind"], "unicast");
    assert_eq!(value["nlri"]["routes"][0]["prefix"], "10.0.1.0/24");
}
