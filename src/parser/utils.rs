/*!
Provides IO utility functions for read bytes of different length and converting to corresponding structs.
*/
use ipnet::IpNet;
use smallvec::SmallVec;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::models::*;
use bytes::{Buf, Bytes};
use log::debug;

use crate::error::ParserError;

impl ReadUtils for Bytes {}

// Allow reading IPs from Reads
pub trait ReadUtils: Buf {
    #[inline]
    fn has_n_remaining(&self, n: usize) -> Result<(), ParserError> {
        let remaining = self.remaining();
        if remaining < n {
            Err(ParserError::IoNotEnoughBytes {
                needed: n,
                remaining,
            })
        } else {
            Ok(())
        }
    }

    #[inline]
    fn read_u8(&mut self) -> Result<u8, ParserError> {
        self.has_n_remaining(1)?;
        Ok(self.get_u8())
    }

    #[inline]
    fn read_u16(&mut self) -> Result<u16, ParserError> {
        self.has_n_remaining(2)?;
        Ok(self.get_u16())
    }

    #[inline]
    fn read_u32(&mut self) -> Result<u32, ParserError> {
        self.has_n_remaining(4)?;
        Ok(self.get_u32())
    }

    #[inline]
    fn read_u64(&mut self) -> Result<u64, ParserError> {
        self.has_n_remaining(8)?;
        Ok(self.get_u64())
    }

    fn read_ipv4_address(&mut self) -> Result<Ipv4Addr, ParserError> {
        let addr = self.read_u32()?;
        Ok(Ipv4Addr::from(addr))
    }

    fn read_ipv6_address(&mut self) -> Result<Ipv6Addr, ParserError> {
        self.has_n_remaining(16)?;
        let buf = self.get_u128();
        Ok(Ipv6Addr::from(buf))
    }

    fn read_n_bytes(&mut self, n_bytes: usize) -> Result<Vec<u8>, ParserError> {
        self.has_n_remaining(n_bytes)?;
        Ok(self.copy_to_bytes(n_bytes).into())
    }

    fn read_route_distinguisher(&mut self) -> Result<RouteDistinguisher, ParserError> {
        self.has_n_remaining(8)?;
        let mut rd = [0u8; 8];
        self.copy_to_slice(&mut rd);
        Ok(RouteDistinguisher(rd))
    }

    fn read_mpls_label(&mut self) -> Result<MplsLabel, ParserError> {
        self.has_n_remaining(3)?;
        let mut buf = [0u8; 3];
        self.copy_to_slice(&mut buf);
        Ok(MplsLabel::from_bytes(buf))
    }

    /// Read an MPLS label stack up to and including the entry with the bottom-of-stack bit.
    ///
    /// A withdrawal may carry the compatibility label `0x800000` instead of the original stack
    /// (RFC 8277 section 2.4); that label also ends the stack.
    fn read_mpls_labels(&mut self) -> Result<SmallVec<[MplsLabel; 2]>, ParserError> {
        let mut labels = SmallVec::new();
        loop {
            let label = self.read_mpls_label()?;
            let last = label.bottom_of_stack || label.is_withdrawal_compat();
            labels.push(label);
            if last {
                break;
            }
        }
        Ok(labels)
    }

    /// Read an address of the length implied by the given length in bits: 32 for IPv4, 128 for
    /// IPv6, 0 for no address.
    fn read_address_by_bit_len(&mut self, bit_len: u8) -> Result<Option<IpAddr>, ParserError> {
        match bit_len {
            0 => Ok(None),
            32 => Ok(Some(IpAddr::V4(self.read_ipv4_address()?))),
            128 => Ok(Some(IpAddr::V6(self.read_ipv6_address()?))),
            v => Err(ParserError::ParseError(format!(
                "invalid IP address length in bits: {}",
                v
            ))),
        }
    }

    /// Read the minimal number of octets holding `bit_len` bits of a prefix for the given AFI.
    fn read_prefix_bits(&mut self, afi: Afi, bit_len: u8) -> Result<IpNet, ParserError> {
        let byte_len: usize = (bit_len as usize).div_ceil(8);
        let addr: IpAddr = match afi {
            Afi::Ipv4 => {
                if byte_len > 4 {
                    return Err(ParserError::ParseError(format!(
                        "Invalid byte length for IPv4 prefix. byte_len: {}, bit_len: {}",
                        byte_len, bit_len
                    )));
                }
                self.has_n_remaining(byte_len)?;
                let mut buff = [0; 4];
                self.copy_to_slice(&mut buff[..byte_len]);
                IpAddr::V4(Ipv4Addr::from(buff))
            }
            Afi::Ipv6 => {
                if byte_len > 16 {
                    return Err(ParserError::ParseError(format!(
                        "Invalid byte length for IPv6 prefix. byte_len: {}, bit_len: {}",
                        byte_len, bit_len
                    )));
                }
                self.has_n_remaining(byte_len)?;
                let mut buff = [0; 16];
                self.copy_to_slice(&mut buff[..byte_len]);
                IpAddr::V6(Ipv6Addr::from(buff))
            }
            other => {
                return Err(ParserError::ParseError(format!(
                    "prefixes are not defined for address family {:?}",
                    other
                )))
            }
        };
        Ok(IpNet::new(addr, bit_len)?)
    }

    /// Read announced/withdrawn prefix.
    ///
    /// The length in bits is 1 byte, and then based on the IP version it reads different number of bytes.
    /// If the `add_path` is true, it will also first read a 4-byte path id first.
    fn read_nlri_prefix(&mut self, afi: Afi, add_path: bool) -> Result<NetworkPrefix, ParserError> {
        let path_id = if add_path {
            Some(self.read_u32()?)
        } else {
            None
        };

        // Length in bits
        let bit_len = self.read_u8()?;
        let prefix = self.read_prefix_bits(afi, bit_len)?;

        Ok(NetworkPrefix::new(prefix, path_id))
    }
}

/// Parse a list of NLRI prefixes until the input is exhausted.
///
/// The list is first read as negotiated. When that fails on a list not negotiated for add-path
/// whose first byte is zero, the sender most likely wrapped add-path NLRI into a plain message,
/// so the whole list is read again as add-path. The first error is returned if that also fails.
pub fn parse_nlri_list(
    input: Bytes,
    add_path: bool,
    afi: Afi,
) -> Result<Vec<NetworkPrefix>, ParserError> {
    match read_prefix_list(input.clone(), add_path, afi) {
        Ok(prefixes) => Ok(prefixes),
        Err(e) if !add_path && input.first() == Some(&0) => {
            debug!("not add-path but with NLRI size to be 0, likely add-path msg in wrong msg type, treat as add-path now");
            read_prefix_list(input, true, afi).map_err(|_| e)
        }
        Err(e) => Err(e),
    }
}

fn read_prefix_list(
    mut input: Bytes,
    add_path: bool,
    afi: Afi,
) -> Result<Vec<NetworkPrefix>, ParserError> {
    let mut prefixes = vec![];
    while input.remaining() > 0 {
        prefixes.push(input.read_nlri_prefix(afi, add_path)?);
    }
    Ok(prefixes)
}
