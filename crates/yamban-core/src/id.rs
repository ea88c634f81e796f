use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a task (`K-001` style).
///
/// Any string is accepted so that hand-edited board files keep working;
/// only ids matching the `K-<digits>` pattern participate in sequence
/// derivation.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Prefix shared by generated identifiers.
    pub const PREFIX: &'static str = "K-";

    /// Canonical id for a sequence number, zero-padded to three digits.
    #[must_use]
    pub fn from_sequence(seq: u64) -> Self {
        Self(format!("{}{seq:03}", Self::PREFIX))
    }

    /// Numeric suffix when the id matches the `K-<digits>` pattern.
    #[must_use]
    pub fn sequence(&self) -> Option<u64> {
        self.0.strip_prefix(Self::PREFIX)?.parse().ok()
    }

    /// Raw string form of the id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TaskId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Next free sequence number given the ids already in use (minimum 1).
///
/// Ids that do not match `K-<digits>` are ignored, so a board with
/// hand-written ids never collides with generated ones that follow the
/// pattern.
#[must_use]
pub fn next_sequence<'a, I>(ids: I) -> u64
where
    I: IntoIterator<Item = &'a TaskId>,
{
    ids.into_iter()
        .filter_map(TaskId::sequence)
        .max()
        .unwrap_or(0)
        + 1
}
