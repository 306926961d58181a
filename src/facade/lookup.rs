//! Lookup Result Module

use serde::Serialize;

// == Lookup ==
/// Outcome of a namespaced read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "content", rename_all = "snake_case")]
pub enum Lookup {
    /// Reads are switched off by the host setting; the provider was not consulted
    Disabled,
    /// No live entry under the namespaced key
    Absent,
    /// Content as returned to the caller, tag included when requested
    Found(String),
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Collapses `Disabled` and `Absent` into `None`.
    pub fn into_option(self) -> Option<String> {
        match self {
            Lookup::Found(content) => Some(content),
            Lookup::Disabled | Lookup::Absent => None,
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Lookup::Found(content) => Some(content.as_str()),
            Lookup::Disabled | Lookup::Absent => None,
        }
    }
}
