//! BGP path attribute structs.

mod mp_unreach;
mod nlri;

pub use mp_unreach::*;
pub use nlri::*;
