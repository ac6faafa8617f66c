use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A subway stop, referenced by sections but owned by the lookup collaborator
/// that resolved it.
///
/// Identity lives in the id alone: the same logical station loaded twice must
/// compare equal even though the instances differ, so `PartialEq`/`Hash` go
/// through `id` and ignore the name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    id: u64,
    name: String,
}

impl Station {
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
