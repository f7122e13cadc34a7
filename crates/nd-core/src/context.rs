//! The user's physical context.

use std::fmt;

/// Where the user is and what they are doing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UserContext {
    /// Seated at a desk, on the office Wi-Fi (initial state).
    #[default]
    AtOffice,
    /// On the move, typically on a cellular link.
    Walking,
}

impl UserContext {
    pub fn as_str(self) -> &'static str {
        match self {
            UserContext::AtOffice => "At Office",
            UserContext::Walking  => "Walking",
        }
    }
}

impl fmt::Display for UserContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
