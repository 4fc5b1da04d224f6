mod attr_15_mp_unreach;

pub use attr_15_mp_unreach::parse_mp_unreach_nlri;
