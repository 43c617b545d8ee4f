//! Sharing kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tollgate_core::Error;

/// How a subject is shared between accounts.
///
/// Streams and services form independent import graphs: a loop is only a
/// loop when every edge in it has the same kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// One-to-many publish.
    Stream,
    /// Request/reply.
    Service,
}

impl Kind {
    /// Every kind, in validation order.
    pub const ALL: [Kind; 2] = [Kind::Stream, Kind::Service];

    /// Returns the kind name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stream => "stream",
            Self::Service => "service",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stream" => Ok(Self::Stream),
            "service" => Ok(Self::Service),
            other => Err(Error::config(format!(
                "Unknown kind '{other}' (expected 'stream' or 'service')"
            ))),
        }
    }
}
