//! Flow Specification withdrawn NLRI (SAFI 133), RFC 8955 and RFC 8956.

use bytes::{Buf, Bytes};
use ipnet::IpNet;
use log::warn;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::ParserError;
use crate::models::*;

/// Parse one Flow-Spec NLRI: a 1 or 2 octet length followed by components in ascending type
/// order.
///
/// Prefix components use the RFC 8956 encoding (length, offset, pattern) when `afi` is IPv6.
pub fn parse_flowspec_nlri(mut input: Bytes, afi: Afi) -> Result<FlowSpecNlri, ParserError> {
    let length = read_length(&mut input)? as usize;
    if input.remaining() < length {
        return Err(FlowSpecError::InsufficientData.into());
    }
    let mut data = input.split_to(length);
    if input.has_remaining() {
        warn!(
            "{} trailing bytes after Flow-Spec NLRI ignored",
            input.remaining()
        );
    }

    let mut components = Vec::new();
    let mut last_type = 0u8;
    while data.has_remaining() {
        let component_type = data.get_u8();
        if component_type <= last_type {
            return Err(FlowSpecError::InvalidComponentOrder {
                expected_greater_than: last_type,
                found: component_type,
            }
            .into());
        }
        last_type = component_type;

        let component = match (component_type, afi) {
            (1, Afi::Ipv6) => {
                let (offset, prefix) = read_ipv6_prefix(&mut data)?;
                FlowSpecComponent::DestinationIpv6Prefix { offset, prefix }
            }
            (2, Afi::Ipv6) => {
                let (offset, prefix) = read_ipv6_prefix(&mut data)?;
                FlowSpecComponent::SourceIpv6Prefix { offset, prefix }
            }
            (1, _) => FlowSpecComponent::DestinationPrefix(read_ipv4_prefix(&mut data)?),
            (2, _) => FlowSpecComponent::SourcePrefix(read_ipv4_prefix(&mut data)?),
            (3, _) => FlowSpecComponent::IpProtocol(read_numeric_operators(&mut data)?),
            (4, _) => FlowSpecComponent::Port(read_numeric_operators(&mut data)?),
            (5, _) => FlowSpecComponent::DestinationPort(read_numeric_operators(&mut data)?),
            (6, _) => FlowSpecComponent::SourcePort(read_numeric_operators(&mut data)?),
            (7, _) => FlowSpecComponent::IcmpType(read_numeric_operators(&mut data)?),
            (8, _) => FlowSpecComponent::IcmpCode(read_numeric_operators(&mut data)?),
            (9, _) => FlowSpecComponent::TcpFlags(read_bitmask_operators(&mut data)?),
            (10, _) => FlowSpecComponent::PacketLength(read_numeric_operators(&mut data)?),
            (11, _) => FlowSpecComponent::Dscp(read_numeric_operators(&mut data)?),
            (12, _) => FlowSpecComponent::Fragment(read_bitmask_operators(&mut data)?),
            (13, _) => FlowSpecComponent::FlowLabel(read_numeric_operators(&mut data)?),
            (t, _) => return Err(FlowSpecError::InvalidComponentType(t).into()),
        };
        components.push(component);
    }

    Ok(FlowSpecNlri::new(components))
}

fn read_byte(data: &mut Bytes) -> Result<u8, FlowSpecError> {
    match data.has_remaining() {
        true => Ok(data.get_u8()),
        false => Err(FlowSpecError::InsufficientData),
    }
}

/// Lengths of 240 octets and more take two octets, the first one starting with `0xF`.
fn read_length(data: &mut Bytes) -> Result<u16, FlowSpecError> {
    let first = read_byte(data)?;
    if first < 0xF0 {
        return Ok(first as u16);
    }
    let second = read_byte(data)?;
    Ok(((first & 0x0F) as u16) << 8 | second as u16)
}

fn read_value(data: &mut Bytes, len: usize) -> Result<u64, FlowSpecError> {
    if data.remaining() < len {
        return Err(FlowSpecError::InsufficientData);
    }
    Ok(data.get_uint(len))
}

fn read_ipv4_prefix(data: &mut Bytes) -> Result<NetworkPrefix, FlowSpecError> {
    let bit_len = read_byte(data)?;
    if bit_len > 32 {
        return Err(FlowSpecError::InvalidPrefix);
    }
    let byte_len = bit_len.div_ceil(8) as usize;
    if data.remaining() < byte_len {
        return Err(FlowSpecError::InsufficientData);
    }
    let mut buf = [0u8; 4];
    data.copy_to_slice(&mut buf[..byte_len]);
    let prefix = IpNet::new(IpAddr::V4(Ipv4Addr::from(buf)), bit_len)
        .map_err(|_| FlowSpecError::InvalidPrefix)?;
    Ok(NetworkPrefix::new(prefix, None))
}

/// RFC 8956 section 3.1: only the pattern bits between `offset` and the prefix length are sent.
fn read_ipv6_prefix(data: &mut Bytes) -> Result<(u8, NetworkPrefix), FlowSpecError> {
    let bit_len = read_byte(data)?;
    let offset = read_byte(data)?;
    if bit_len > 128 || offset > bit_len {
        return Err(FlowSpecError::InvalidPrefix);
    }
    let pattern_bits = (bit_len - offset) as usize;
    let byte_len = pattern_bits.div_ceil(8);
    if data.remaining() < byte_len {
        return Err(FlowSpecError::InsufficientData);
    }
    let mut buf = [0u8; 16];
    data.copy_to_slice(&mut buf[..byte_len]);
    let addr = u128::from_be_bytes(buf)
        .checked_shr(offset as u32)
        .unwrap_or(0);
    let prefix = IpNet::new(IpAddr::V6(Ipv6Addr::from(addr)), bit_len)
        .map_err(|_| FlowSpecError::InvalidPrefix)?;
    Ok((offset, NetworkPrefix::new(prefix, None)))
}

fn read_numeric_operators(data: &mut Bytes) -> Result<Vec<NumericOperator>, FlowSpecError> {
    let mut operators = Vec::new();
    loop {
        let op = read_byte(data)?;
        let value = read_value(data, operator_value_length(op) as usize)?;
        let operator = NumericOperator::from_byte_and_value(op, value)?;
        let end = operator.end_of_list;
        operators.push(operator);
        if end {
            return Ok(operators);
        }
    }
}

fn read_bitmask_operators(data: &mut Bytes) -> Result<Vec<BitmaskOperator>, FlowSpecError> {
    let mut operators = Vec::new();
    loop {
        let op = read_byte(data)?;
        let bitmask = read_value(data, operator_value_length(op) as usize)?;
        let operator = BitmaskOperator::from_byte_and_value(op, bitmask)?;
        let end = operator.end_of_list;
        operators.push(operator);
        if end {
            return Ok(operators);
        }
    }
}
