use bytes::{BufMut, Bytes, BytesMut};
use criterion::{criterion_group, criterion_main, Criterion};
use mp_unreach_nlri::{parse_mp_unreach_nlri, MpUnreachNlri};
use std::hint::black_box;

const PREFIXES_PER_ATTRIBUTE: u32 = 500;

/// IPv4 unicast withdrawal of `PREFIXES_PER_ATTRIBUTE` distinct /24 prefixes.
fn ipv4_unicast_attribute() -> Bytes {
    let mut buf = BytesMut::new();
    buf.put_u16(1);
    buf.put_u8(1);
    for i in 0..PREFIXES_PER_ATTRIBUTE {
        buf.put_u8(24);
        buf.put_u8(10);
        buf.put_u8((i >> 8) as u8);
        buf.put_u8(i as u8);
    }
    buf.freeze()
}

/// IPv4 L3VPN withdrawal, one label and RD per prefix.
fn ipv4_vpn_attribute() -> Bytes {
    let mut buf = BytesMut::new();
    buf.put_u16(1);
    buf.put_u8(128);
    for i in 0..PREFIXES_PER_ATTRIBUTE {
        buf.put_u8(24 + 64 + 24);
        buf.put_slice(&[0x80, 0x00, 0x00]);
        buf.put_u16(0);
        buf.put_u16(65000);
        buf.put_u32(i);
        buf.put_slice(&[172, (i >> 8) as u8, i as u8]);
    }
    buf.freeze()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let unicast = ipv4_unicast_attribute();
    let vpn = ipv4_vpn_attribute();

    c.bench_function("parse header", |b| {
        b.iter(|| parse_mp_unreach_nlri(black_box(unicast.clone())))
    });

    c.bench_function("resolve IPv4 unicast", |b| {
        let attr = parse_mp_unreach_nlri(unicast.clone()).unwrap();
        b.iter_with_large_drop(|| black_box(&attr).resolver().resolve_unicast())
    });

    c.bench_function("resolve IPv4 L3VPN", |b| {
        let attr = parse_mp_unreach_nlri(vpn.clone()).unwrap();
        b.iter_with_large_drop(|| black_box(&attr).resolve())
    });

    c.bench_function("resolve End-of-RIB", |b| {
        let attr = MpUnreachNlri::end_of_rib(2, 1);
        b.iter(|| black_box(&attr).resolve())
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}
criterion_main!(benches);
