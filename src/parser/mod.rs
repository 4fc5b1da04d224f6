/*!
parser module provides the decoding of withdrawal attributes and their NLRI payloads.
*/
pub mod bgp;
pub mod utils;

pub use self::utils::*;
pub use bgp::*;
