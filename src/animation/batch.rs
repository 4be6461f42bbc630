/// Global animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPhase {
    #[default]
    Idle,
    Running,
}

/// Emitted once when every coin of a run has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// 1-based index of the completed run.
    pub run: u64,
    /// Number of coins that took part.
    pub coins: usize,
}

/// Counts finished coins and flips the global phase back to idle.
///
/// State machine: `Idle -> (run start) -> Running -> (finished == total) -> Idle`.
#[derive(Debug, Clone, Default)]
pub struct BatchCoordinator {
    phase: BatchPhase,
    finished: usize,
    total: usize,
    runs_completed: u64,
}

impl BatchCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting a run of `total` coins.
    ///
    /// Returns the summary right away if the run is already complete, which
    /// only happens for `total == 0`; the phase is then back to `Idle`.
    pub fn on_run_start(&mut self, total: usize) -> Option<RunSummary> {
        self.finished = 0;
        self.total = total;
        self.phase = BatchPhase::Running;

        (total == 0).then(|| self.complete())
    }

    /// Records one finished coin. Returns the summary when it was the last.
    pub fn on_object_complete(&mut self) -> Option<RunSummary> {
        if self.phase != BatchPhase::Running {
            log::warn!("Completion signal received while idle, ignoring");
            return None;
        }

        self.finished += 1;
        if self.finished == self.total {
            Some(self.complete())
        } else {
            None
        }
    }

    fn complete(&mut self) -> RunSummary {
        self.runs_completed += 1;
        let summary = RunSummary {
            run: self.runs_completed,
            coins: self.total,
        };
        self.phase = BatchPhase::Idle;
        self.finished = 0;
        summary
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> BatchPhase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == BatchPhase::Running
    }

    /// Coins finished so far in the current run.
    #[inline]
    #[must_use]
    pub fn finished(&self) -> usize {
        self.finished
    }

    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub fn runs_completed(&self) -> u64 {
        self.runs_completed
    }
}
