use super::FlowSpecError;

/// Numeric operator for Flow-Spec components (RFC 8955 Section 4.2.1)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericOperator {
    /// End-of-list flag (bit 7)
    pub end_of_list: bool,
    /// AND flag - true=AND with next, false=OR with next (bit 6)
    pub and_with_next: bool,
    /// Value length in octets (bits 5-4): 00=1, 01=2, 10=4, 11=8
    pub value_length: u8,
    /// Less-than comparison (bit 2)
    pub less_than: bool,
    /// Greater-than comparison (bit 1)
    pub greater_than: bool,
    /// Equal comparison (bit 0)
    pub equal: bool,
    pub value: u64,
}

/// Bitmask operator for Flow-Spec components (RFC 8955 Section 4.2.2)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitmaskOperator {
    /// End-of-list flag (bit 7)
    pub end_of_list: bool,
    /// AND flag - true=AND with next, false=OR with next (bit 6)
    pub and_with_next: bool,
    /// Value length in octets (bits 5-4): 00=1, 01=2, 10=4, 11=8
    pub value_length: u8,
    /// NOT flag - logical negation (bit 1)
    pub not: bool,
    /// Match flag - true=partial match, false=exact match (bit 0)
    pub match_flag: bool,
    pub bitmask: u64,
}

/// Value length in octets encoded in bits 5-4 of an operator byte.
#[inline]
pub const fn operator_value_length(operator_byte: u8) -> u8 {
    1 << ((operator_byte >> 4) & 0x03)
}

const fn value_length_for(value: u64) -> u8 {
    if value <= 0xFF {
        1
    } else if value <= 0xFFFF {
        2
    } else if value <= 0xFFFF_FFFF {
        4
    } else {
        8
    }
}

impl NumericOperator {
    /// Create a new numeric operator from raw byte and value
    pub fn from_byte_and_value(operator_byte: u8, value: u64) -> Result<Self, FlowSpecError> {
        // Bit 3 must be 0 for numeric operators
        if (operator_byte & 0x08) != 0 {
            return Err(FlowSpecError::InvalidOperator(operator_byte));
        }

        Ok(NumericOperator {
            end_of_list: (operator_byte & 0x80) != 0,
            and_with_next: (operator_byte & 0x40) != 0,
            value_length: operator_value_length(operator_byte),
            less_than: (operator_byte & 0x04) != 0,
            greater_than: (operator_byte & 0x02) != 0,
            equal: (operator_byte & 0x01) != 0,
            value,
        })
    }

    /// Create equality operator
    pub fn equal_to(value: u64) -> Self {
        NumericOperator {
            end_of_list: true,
            and_with_next: false,
            value_length: value_length_for(value),
            less_than: false,
            greater_than: false,
            equal: true,
            value,
        }
    }
}

impl BitmaskOperator {
    /// Create a new bitmask operator from raw byte and value
    pub fn from_byte_and_value(operator_byte: u8, bitmask: u64) -> Result<Self, FlowSpecError> {
        // Bits 3 and 2 must be 0 for bitmask operators
        if (operator_byte & 0x0C) != 0 {
            return Err(FlowSpecError::InvalidOperator(operator_byte));
        }

        Ok(BitmaskOperator {
            end_of_list: (operator_byte & 0x80) != 0,
            and_with_next: (operator_byte & 0x40) != 0,
            value_length: operator_value_length(operator_byte),
            not: (operator_byte & 0x02) != 0,
            match_flag: (operator_byte & 0x01) != 0,
            bitmask,
        })
    }

    /// Create partial match operator
    pub fn partial_match(bitmask: u64) -> Self {
        BitmaskOperator {
            end_of_list: true,
            and_with_next: false,
            value_length: value_length_for(bitmask),
            not: false,
            match_flag: true,
            bitmask,
        }
    }
}
