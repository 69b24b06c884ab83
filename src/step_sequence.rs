/// The StepSequence struct holds a base position pattern and an iteration
/// count for building the repeated discrete sequence of a single motor.
///
/// The generated sequence is the base pattern played back to back, once per
/// iteration, so its length is always `pattern.len() * iterations`.
#[derive(Clone, Debug, PartialEq)]
pub struct StepSequence {
    /// Base positions played once per iteration.
    pattern: Vec<f64>,

    /// Number of times the base pattern is repeated.
    iterations: usize,

    is_pattern_valid: bool,
    is_iterations_valid: bool,
}

/// Provide a default StepSequence with an empty pattern and zero iterations.
impl Default for StepSequence {
    fn default() -> Self {
        StepSequence {
            pattern: Vec::new(),
            iterations: 0,
            is_pattern_valid: false,
            is_iterations_valid: false,
        }
    }
}

impl StepSequence {
    // Physical constraints to avoid math overflow and runaway allocations
    const P_MAX: f64 = 1e30;
    const N_MAX: usize = 1_000_000;

    /// Creates a new StepSequence with the provided parameters,
    /// while enforcing the feasibility checks of the setters below.
    pub fn new(pattern: &[f64], iterations: usize) -> Self {
        let mut sequence = StepSequence::default();
        sequence.set_pattern(pattern);
        sequence.set_iterations(iterations);
        sequence
    }

    pub fn is_valid(&self) -> bool {
        self.is_pattern_valid && self.is_iterations_valid
    }

    /// Set the base position pattern. The pattern must be non-empty and
    /// every position must be a finite value within a sane magnitude.
    pub fn set_pattern(&mut self, pattern: &[f64]) -> bool {
        // Every position must be finite and bounded
        let positions_valid = pattern
            .iter()
            .all(|p| p.is_finite() && p.abs() < Self::P_MAX);

        self.is_pattern_valid = !pattern.is_empty() && positions_valid;
        if self.is_pattern_valid {
            self.pattern = pattern.to_vec();
        }
        self.is_pattern_valid
    }

    /// Set the iteration count. Must be at least 1 and small enough
    /// that the generated sequence stays allocatable.
    pub fn set_iterations(&mut self, iterations: usize) -> bool {
        self.is_iterations_valid = iterations >= 1 && iterations <= Self::N_MAX;
        if self.is_iterations_valid {
            self.iterations = iterations;
        }
        self.is_iterations_valid
    }

    // -----------------------------------------------------------------
    //  Getter methods for StepSequence
    // -----------------------------------------------------------------

    /// Get the base pattern.
    pub fn get_pattern(&self) -> &[f64] {
        &self.pattern
    }

    /// Get the iteration count.
    pub fn get_iterations(&self) -> usize {
        self.iterations
    }

    /// Length of the base pattern.
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// Length of the generated sequence: `pattern_len() * iterations`,
    /// or zero while the sequence is invalid.
    pub fn len(&self) -> usize {
        if self.is_valid() {
            self.pattern.len() * self.iterations
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // -----------------------------------------------------------------
    //  Sequence generation
    // -----------------------------------------------------------------

    /// Position at step `index` of the generated sequence:
    /// `pattern[index % pattern_len()]`.
    pub fn sample(&self, index: usize) -> f64 {
        if !self.is_valid() {
            return 0.0;
        }
        self.pattern[index % self.pattern.len()]
    }

    /// The full repeated sequence, one position per step.
    /// Returns an empty vector while the sequence is invalid.
    pub fn generate(&self) -> Vec<f64> {
        let mut sequence = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            sequence.push(self.sample(i));
        }
        sequence
    }

    /// Synthetic time indices 0, 1, .. len()-1 matching `generate()`.
    pub fn time_steps(&self) -> Vec<f64> {
        (0..self.len()).map(|i| i as f64).collect()
    }

    /// Staircase expansion of the sequence for a post-step chart: each step
    /// contributes the pair of points (i, v) and (i+1, v), so the position is
    /// held constant until the next step begins.
    pub fn step_points(&self) -> (Vec<f64>, Vec<f64>) {
        let len = self.len();
        let mut time = Vec::with_capacity(2 * len);
        let mut positions = Vec::with_capacity(2 * len);
        for i in 0..len {
            let value = self.sample(i);
            time.push(i as f64);
            positions.push(value);
            time.push((i + 1) as f64);
            positions.push(value);
        }
        (time, positions)
    }

    /// X-positions of the iteration boundary markers: one marker at each
    /// multiple of the pattern length, excluding step zero and the final
    /// step, i.e. {L, 2L, .., (N-1)L}.
    pub fn iteration_boundaries(&self) -> Vec<f64> {
        if !self.is_valid() {
            return Vec::new();
        }
        (1..self.iterations)
            .map(|i| (i * self.pattern.len()) as f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_repeats_pattern() {
        let seq = StepSequence::new(&[0.0, 1.0, 0.5], 3);
        assert!(seq.is_valid());

        let generated = seq.generate();
        assert_eq!(generated.len(), 9);
        for (i, value) in generated.iter().enumerate() {
            assert_eq!(*value, seq.get_pattern()[i % 3]);
        }
    }

    #[test]
    fn motors_share_length_for_any_iteration_count() {
        for iterations in 1..=5 {
            let motor1 = StepSequence::new(&[0.0, 1.0, 0.5], iterations);
            let motor2 = StepSequence::new(&[1.0, 0.5, 1.0], iterations);
            assert_eq!(motor1.len(), motor2.len());
            assert_eq!(motor1.len(), 3 * iterations);
        }
    }

    #[test]
    fn boundaries_exclude_start_and_end() {
        let seq = StepSequence::new(&[0.0, 1.0, 0.5], 3);
        assert_eq!(seq.iteration_boundaries(), vec![3.0, 6.0]);

        // A single iteration has no interior boundaries
        let single = StepSequence::new(&[0.0, 1.0, 0.5], 1);
        assert!(single.iteration_boundaries().is_empty());
    }

    #[test]
    fn step_points_hold_value_until_next_step() {
        let seq = StepSequence::new(&[0.0, 1.0], 2);
        let (time, positions) = seq.step_points();
        assert_eq!(time.len(), 8);
        assert_eq!(positions.len(), 8);
        for i in 0..seq.len() {
            assert_eq!(time[2 * i], i as f64);
            assert_eq!(time[2 * i + 1], (i + 1) as f64);
            assert_eq!(positions[2 * i], seq.sample(i));
            assert_eq!(positions[2 * i + 1], seq.sample(i));
        }
    }

    #[test]
    fn rejects_invalid_inputs() {
        let mut seq = StepSequence::default();
        assert!(!seq.set_pattern(&[]));
        assert!(!seq.set_pattern(&[0.0, f64::NAN]));
        assert!(!seq.set_pattern(&[f64::INFINITY]));
        assert!(!seq.set_iterations(0));
        assert!(!seq.is_valid());
        assert!(seq.generate().is_empty());
        assert!(seq.iteration_boundaries().is_empty());
    }

    #[test]
    fn generation_is_deterministic() {
        let seq = StepSequence::new(&[1.0, 0.5, 1.0], 3);
        assert_eq!(seq.generate(), seq.generate());
        assert_eq!(seq.step_points(), seq.step_points());
    }
}
