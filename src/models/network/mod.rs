//! Common network-related structs.

mod afi;
mod mpls;
mod nexthop;
mod prefix;

pub use afi::*;
pub use mpls::*;
pub use nexthop::*;
pub use prefix::*;
