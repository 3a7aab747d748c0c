//! Recurring spark emission

use crate::routine::{Routine, Step};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Timing of the recurring spark bursts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparkleConfig {
    /// Upper bound of the randomized pause between bursts (seconds)
    pub max_idle: f32,
    /// Sparks per burst
    pub burst_len: u32,
    /// Upper bound of the randomized gap between sparks in a burst (seconds)
    pub max_gap: f32,
    /// Sparks emitted at once when the emitter is first triggered
    pub initial_burst: u32,
}

impl Default for SparkleConfig {
    fn default() -> Self {
        Self {
            max_idle: 4.0,
            burst_len: 6,
            max_gap: 0.03,
            initial_burst: 20,
        }
    }
}

impl SparkleConfig {
    /// Set burst timing
    pub fn with_burst(mut self, burst_len: u32, max_gap: f32) -> Self {
        self.burst_len = burst_len;
        self.max_gap = max_gap;
        self
    }

    /// Set pause between bursts
    pub fn with_max_idle(mut self, max_idle: f32) -> Self {
        self.max_idle = max_idle;
        self
    }
}

/// Request to emit decorative sparks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sparkle {
    /// Number of particles
    pub count: u32,
}

/// Waits a random pause, then emits a burst of single sparks, forever
pub struct SparkleRoutine {
    config: SparkleConfig,
    rng: SmallRng,
    /// Sparks left in the current burst
    remaining: u32,
    /// Whether the next resume emits a spark
    emit_next: bool,
}

impl SparkleRoutine {
    /// Create with an entropy-seeded generator
    pub fn new(config: SparkleConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// Create with a fixed seed
    pub fn seeded(config: SparkleConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: SparkleConfig, rng: SmallRng) -> Self {
        Self {
            config,
            rng,
            remaining: 0,
            emit_next: false,
        }
    }

    fn random_wait(&mut self, max: f32) -> f32 {
        if max > 0.0 {
            self.rng.gen_range(0.0..max)
        } else {
            0.0
        }
    }
}

impl Routine<Sparkle> for SparkleRoutine {
    fn resume(&mut self, out: &mut Vec<Sparkle>) -> Step {
        if self.emit_next {
            out.push(Sparkle { count: 1 });
            self.remaining = self.remaining.saturating_sub(1);
            self.emit_next = false;
        }

        if self.remaining == 0 {
            self.remaining = self.config.burst_len;
            let pause = self.random_wait(self.config.max_idle);
            return Step::Wait(pause);
        }

        self.emit_next = true;
        let gap = self.random_wait(self.config.max_gap);
        Step::Wait(gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(routine: &mut SparkleRoutine, resumes: usize) -> (Vec<Step>, Vec<Sparkle>) {
        let mut out = Vec::new();
        let steps = (0..resumes).map(|_| routine.resume(&mut out)).collect();
        (steps, out)
    }

    #[test]
    fn test_burst_shape() {
        let config = SparkleConfig::default();
        let mut routine = SparkleRoutine::seeded(config.clone(), 42);

        // idle pause, 6 gaps (emitting after each), then the next idle pause
        let (steps, out) = drive(&mut routine, 1 + 6 + 1);
        assert_eq!(out.len(), 6);
        assert!(out.iter().all(|s| s.count == 1));

        let waits: Vec<f32> = steps
            .iter()
            .map(|step| match step {
                Step::Wait(t) => *t,
                Step::Done => panic!("sparkle routine never finishes"),
            })
            .collect();
        assert!((0.0..config.max_idle).contains(&waits[0]));
        for gap in &waits[1..7] {
            assert!((0.0..config.max_gap).contains(gap));
        }
        assert!((0.0..config.max_idle).contains(&waits[7]));
    }

    #[test]
    fn test_repeats_forever() {
        let mut routine = SparkleRoutine::seeded(SparkleConfig::default(), 1);
        let (_, out) = drive(&mut routine, 7 * 10 + 1);
        assert_eq!(out.len(), 60);
    }

    #[test]
    fn test_same_seed_same_timing() {
        let mut a = SparkleRoutine::seeded(SparkleConfig::default(), 9);
        let mut b = SparkleRoutine::seeded(SparkleConfig::default(), 9);
        assert_eq!(drive(&mut a, 20).0, drive(&mut b, 20).0);
    }

    #[test]
    fn test_zero_bounds() {
        let config = SparkleConfig::default().with_max_idle(0.0).with_burst(2, 0.0);
        let mut routine = SparkleRoutine::seeded(config, 3);
        let (steps, out) = drive(&mut routine, 3);
        assert_eq!(steps, vec![Step::Wait(0.0); 3]);
        assert_eq!(out.len(), 1);
    }
}
