use std::f64::consts::PI;

/// The Sinusoid struct holds the constants of a single wave evaluated as
/// `A * sin(2*pi*f*t + phi)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sinusoid {
    /// Peak amplitude A.
    amplitude: f64,

    /// Frequency f in cycles per time unit.
    frequency: f64,

    /// Phase offset phi in radians, shifting the wave in time
    /// relative to a zero-phase reference.
    phase: f64,

    is_params_valid: bool,
}

/// Provide a default Sinusoid with zeroed fields.
impl Default for Sinusoid {
    fn default() -> Self {
        Sinusoid {
            amplitude: 0.0,
            frequency: 0.0,
            phase: 0.0,
            is_params_valid: false,
        }
    }
}

impl Sinusoid {
    // Physical constraints to avoid math overflow
    const A_MAX: f64 = 1e30;
    const F_MAX: f64 = 1e10;

    /// Creates a new Sinusoid with the provided parameters,
    /// while enforcing the feasibility checks of `set_params`.
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        let mut wave = Sinusoid::default();
        wave.set_params(amplitude, frequency, phase);
        wave
    }

    pub fn is_valid(&self) -> bool {
        self.is_params_valid
    }

    /// Set the wave constants. Amplitude and phase must be finite and
    /// bounded; the frequency must additionally be positive so that the
    /// time shift `phase / (2*pi*frequency)` stays defined.
    pub fn set_params(&mut self, amplitude: f64, frequency: f64, phase: f64) -> bool {
        let amplitude_valid = amplitude.is_finite() && amplitude.abs() < Self::A_MAX;
        let frequency_valid = frequency.is_finite() && frequency > 0.0 && frequency < Self::F_MAX;
        let phase_valid = phase.is_finite();

        self.is_params_valid = amplitude_valid && frequency_valid && phase_valid;
        if self.is_params_valid {
            self.amplitude = amplitude;
            self.frequency = frequency;
            self.phase = phase;
        }
        self.is_params_valid
    }

    // -----------------------------------------------------------------
    //  Getter methods for Sinusoid
    // -----------------------------------------------------------------

    /// Get the peak amplitude.
    pub fn get_amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Get the frequency.
    pub fn get_frequency(&self) -> f64 {
        self.frequency
    }

    /// Get the phase offset in radians.
    pub fn get_phase(&self) -> f64 {
        self.phase
    }

    // -----------------------------------------------------------------
    //  Evaluation
    // -----------------------------------------------------------------

    /// Evaluate the wave at time `t`: `A * sin(2*pi*f*t + phi)`.
    /// An invalid wave evaluates to zero everywhere.
    pub fn eval(&self, t: f64) -> f64 {
        if !self.is_valid() {
            return 0.0;
        }
        self.amplitude * (2.0 * PI * self.frequency * t + self.phase).sin()
    }

    /// Evaluate the wave over a shared time axis, one value per sample.
    pub fn sample(&self, time_axis: &[f64]) -> Vec<f64> {
        time_axis.iter().map(|&t| self.eval(t)).collect()
    }

    /// The time delay on the horizontal axis implied by the phase offset:
    /// `phi / (2*pi*f)`. Used for chart annotation only.
    pub fn time_shift(&self) -> f64 {
        if !self.is_valid() {
            return 0.0;
        }
        self.phase / (2.0 * PI * self.frequency)
    }
}
