/// Direction of optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Goal {
    Minimize,
    Maximize,
}

impl Goal {
    /// Maps an objective to a score where lower is better.
    pub(super) fn score(self, objective: f64) -> f64 {
        match self {
            Goal::Minimize => objective,
            Goal::Maximize => -objective,
        }
    }

    /// Returns true if `candidate` is strictly better than `incumbent`.
    pub(super) fn improves(self, candidate: f64, incumbent: f64) -> bool {
        self.score(candidate) < self.score(incumbent)
    }
}
