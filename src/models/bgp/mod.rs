//! BGP attribute and NLRI structs.

pub mod attributes;
pub mod evpn;
pub mod flowspec;
pub mod linkstate;
pub mod srpolicy;

pub use attributes::*;
pub use evpn::*;
pub use flowspec::*;
pub use linkstate::*;
pub use srpolicy::*;
