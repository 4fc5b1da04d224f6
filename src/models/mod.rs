/*!
Data structures for withdrawal attributes and the NLRI families they carry.
*/
mod bgp;
mod network;

pub use bgp::*;
pub use network::*;
