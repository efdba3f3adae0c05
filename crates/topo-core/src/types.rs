use serde::{Deserialize, Serialize};

/// Bounds on vertex degrees for a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeBounds {
    /// Minimum degree observed across all vertices.
    pub min_degree: Option<usize>,
    /// Maximum degree observed across all vertices.
    pub max_degree: Option<usize>,
}

impl DegreeBounds {
    /// Creates an empty descriptor where no degree information is known yet.
    pub fn unknown() -> Self {
        Self {
            min_degree: None,
            max_degree: None,
        }
    }

    /// Folds one more observed degree into the bounds.
    pub fn observe(&mut self, degree: usize) {
        self.min_degree = Some(self.min_degree.map_or(degree, |v| v.min(degree)));
        self.max_degree = Some(self.max_degree.map_or(degree, |v| v.max(degree)));
    }
}

impl Default for DegreeBounds {
    fn default() -> Self {
        Self::unknown()
    }
}
