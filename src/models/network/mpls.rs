use std::fmt::{Display, Formatter};

/// A single entry of an MPLS label stack as encoded in labeled NLRI (RFC 8277).
///
/// The wire format is 3 octets: a 20-bit label value, 3 bits of traffic class (formerly EXP)
/// and the bottom-of-stack bit.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MplsLabel {
    pub value: u32,
    pub traffic_class: u8,
    pub bottom_of_stack: bool,
}

impl MplsLabel {
    /// Label value some implementations place in withdrawals instead of the original label.
    /// RFC 8277 section 2.4.
    pub const WITHDRAWAL_COMPAT: u32 = 0x80000;

    pub const fn from_bytes(bytes: [u8; 3]) -> MplsLabel {
        let raw = (bytes[0] as u32) << 16 | (bytes[1] as u32) << 8 | bytes[2] as u32;
        MplsLabel {
            value: raw >> 4,
            traffic_class: ((raw >> 1) & 0x07) as u8,
            bottom_of_stack: raw & 0x01 == 1,
        }
    }

    /// The original 3-octet encoding of the label contains only this value, which ends a
    /// withdrawal's label stack regardless of the bottom-of-stack bit.
    pub const fn is_withdrawal_compat(&self) -> bool {
        self.value == Self::WITHDRAWAL_COMPAT && self.traffic_class == 0 && !self.bottom_of_stack
    }
}

impl Display for MplsLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Route Distinguisher as defined in RFC 4364 section 4.2.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteDistinguisher(pub [u8; 8]);

impl RouteDistinguisher {
    /// The RD type field: 0 (2-byte ASN admin), 1 (IPv4 admin) or 2 (4-byte ASN admin).
    pub const fn rd_type(&self) -> u16 {
        (self.0[0] as u16) << 8 | self.0[1] as u16
    }
}

impl Display for RouteDistinguisher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let b = &self.0;
        match self.rd_type() {
            0 => {
                let admin = u16::from_be_bytes([b[2], b[3]]);
                let assigned = u32::from_be_bytes([b[4], b[5], b[6], b[7]]);
                write!(f, "{}:{}", admin, assigned)
            }
            1 => {
                let assigned = u16::from_be_bytes([b[6], b[7]]);
                write!(f, "{}.{}.{}.{}:{}", b[2], b[3], b[4], b[5], assigned)
            }
            2 => {
                let admin = u32::from_be_bytes([b[2], b[3], b[4], b[5]]);
                let assigned = u16::from_be_bytes([b[6], b[7]]);
                write!(f, "{}:{}", admin, assigned)
            }
            _ => write!(
                f,
                "{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
                b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]
            ),
        }
    }
}
