/*!
Provides parsing of the MP_UNREACH_NLRI attribute and the NLRI it withdraws.
*/
pub mod attributes;
pub mod nlri;
pub mod resolver;

pub use attributes::parse_mp_unreach_nlri;
pub use nlri::{DefaultNlriDecoder, NlriDecoder};
pub use resolver::NlriResolver;
