use crate::models::*;
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::{Display, Formatter};

/// One withdrawn prefix of a unicast, labeled-unicast or L3VPN NLRI.
///
/// Plain unicast routes carry neither labels nor a route distinguisher; labeled unicast adds
/// the MPLS label stack; L3VPN adds both.
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MpNlriRoute {
    pub prefix: NetworkPrefix,
    pub labels: SmallVec<[MplsLabel; 2]>,
    pub route_distinguisher: Option<RouteDistinguisher>,
}

impl MpNlriRoute {
    pub fn new(prefix: NetworkPrefix) -> MpNlriRoute {
        MpNlriRoute {
            prefix,
            labels: SmallVec::new(),
            route_distinguisher: None,
        }
    }
}

impl Display for MpNlriRoute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(rd) = &self.route_distinguisher {
            write!(f, "{}:", rd)?;
        }
        write!(f, "{}", self.prefix)?;
        if !self.labels.is_empty() {
            write!(f, " label {}", self.labels.iter().join("/"))?;
        }
        Ok(())
    }
}

/// Prefix-based NLRI shared by the unicast, labeled-unicast and L3VPN families.
///
/// The default value (no routes) stands for an End-of-RIB withdrawal.
#[derive(Debug, PartialEq, Clone, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MpNlri {
    pub routes: Vec<MpNlriRoute>,
}

impl MpNlri {
    pub fn new(routes: Vec<MpNlriRoute>) -> MpNlri {
        MpNlri { routes }
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &NetworkPrefix> {
        self.routes.iter().map(|r| &r.prefix)
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Display for MpNlri {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.routes.iter().join(", "))
    }
}
