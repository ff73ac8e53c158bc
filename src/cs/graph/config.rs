use std::time::Duration;

/// Parameters for a minimum cut run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinCutConfig {
    /// Number of independent trials (None = ceil(n^2 ln n))
    pub trials: Option<usize>,
    /// Upper bound applied to the trial count after the default is computed
    pub max_trials: Option<usize>,
    /// Seed for the ChaCha generator (None = seeded from entropy)
    pub seed: Option<u64>,
    /// Wall-clock budget for the whole run, checked before each trial
    pub deadline: Option<Duration>,
    /// Run trials on the rayon thread pool
    pub parallel: bool,
}

impl MinCutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }

    pub fn with_max_trials(mut self, max_trials: usize) -> Self {
        self.max_trials = Some(max_trials);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Resolves the number of trials to run given the default for the graph.
    pub fn trial_count(&self, default_trials: usize) -> usize {
        let trials = self.trials.unwrap_or(default_trials);
        match self.max_trials {
            Some(cap) => trials.min(cap),
            None => trials,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_count() {
        assert_eq!(MinCutConfig::new().trial_count(41), 41);
        assert_eq!(MinCutConfig::new().with_trials(5).trial_count(41), 5);
        assert_eq!(MinCutConfig::new().with_max_trials(10).trial_count(41), 10);
        assert_eq!(
            MinCutConfig::new()
                .with_trials(3)
                .with_max_trials(10)
                .trial_count(41),
            3
        );
    }

    #[test]
    fn test_builder() {
        let config = MinCutConfig::new()
            .with_seed(7)
            .with_deadline(Duration::from_millis(250))
            .parallel(true);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.deadline, Some(Duration::from_millis(250)));
        assert!(config.parallel);
        assert_eq!(config.trials, None);
    }
}
