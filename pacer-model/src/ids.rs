use uuid::Uuid;

/// Store-assigned identifier for a runner record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RunnerID(pub Uuid);

impl Default for RunnerID {
    fn default() -> Self {
        Self::new()
    }
}

impl RunnerID {
    /// Time-ordered id, so insertion order and id order agree.
    pub fn new() -> Self {
        RunnerID(Uuid::now_v7())
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for RunnerID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
