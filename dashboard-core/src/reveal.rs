use crate::models::ModelName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Simulated training latency before a result is shown.
pub const REVEAL_DELAY_MS: u64 = 2000;

/// Token handed out by [`RevealBoard::begin`]. Not cloneable, so each
/// started reveal can be completed exactly once.
#[derive(Debug)]
pub struct PendingReveal {
    model: ModelName,
}

impl PendingReveal {
    pub fn model(&self) -> ModelName {
        self.model
    }
}

/// Which model results have been revealed, plus the single in-flight flag.
/// Entries only ever go from hidden to revealed.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RevealBoard {
    revealed: BTreeSet<ModelName>,
    busy: bool,
}

impl RevealBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start revealing one model. Sets the busy flag synchronously and
    /// returns a completion token, or `None` if another reveal is already
    /// in flight (the request is dropped, not queued).
    pub fn begin(&mut self, model: ModelName) -> Option<PendingReveal> {
        if self.busy {
            return None;
        }
        self.busy = true;
        Some(PendingReveal { model })
    }

    /// Finish a reveal: the model becomes visible and the busy flag clears
    /// in the same mutation, so no observer sees one without the other.
    pub fn complete(&mut self, pending: PendingReveal) {
        self.revealed.insert(pending.model);
        self.busy = false;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_revealed(&self, model: ModelName) -> bool {
        self.revealed.contains(&model)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.len() == ModelName::ALL.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_sets_busy_immediately() {
        let mut board = RevealBoard::new();
        let pending = board.begin(ModelName::XgBoost).expect("idle board");
        assert!(board.is_busy());
        assert!(!board.is_revealed(ModelName::XgBoost));
        assert_eq!(pending.model(), ModelName::XgBoost);
    }

    #[test]
    fn complete_reveals_and_clears_busy_together() {
        let mut board = RevealBoard::new();
        let pending = board.begin(ModelName::RandomForest).expect("idle board");
        board.complete(pending);
        assert!(!board.is_busy());
        assert!(board.is_revealed(ModelName::RandomForest));
        assert_eq!(board.revealed_count(), 1);
    }

    #[test]
    fn begin_while_busy_is_rejected_and_changes_nothing() {
        let mut board = RevealBoard::new();
        let pending = board.begin(ModelName::MlpRegressor).expect("idle board");

        assert!(board.begin(ModelName::LinearRegression).is_none());
        assert!(board.begin(ModelName::MlpRegressor).is_none());
        assert!(board.is_busy());
        assert_eq!(board.revealed_count(), 0);

        // The original pending reveal still completes normally.
        board.complete(pending);
        assert!(board.is_revealed(ModelName::MlpRegressor));
        assert!(!board.is_revealed(ModelName::LinearRegression));
    }

    #[test]
    fn revealing_again_after_completion_is_allowed() {
        let mut board = RevealBoard::new();
        let first = board.begin(ModelName::XgBoost).expect("idle");
        board.complete(first);
        let second = board.begin(ModelName::XgBoost).expect("idle again");
        board.complete(second);
        assert!(board.is_revealed(ModelName::XgBoost));
        assert_eq!(board.revealed_count(), 1);
    }

    #[test]
    fn sequential_reveals_cover_all_models() {
        let mut board = RevealBoard::new();
        for &model in &ModelName::ALL {
            let pending = board.begin(model).expect("board idle between reveals");
            board.complete(pending);
        }
        assert!(board.all_revealed());
        assert!(!board.is_busy());
    }
}
