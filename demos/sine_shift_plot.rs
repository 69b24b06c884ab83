use std::error::Error;
use std::f64::consts::PI;

use motion_plot::{time_axis, Sinusoid};
// use gnuplot::{Figure, Caption, Color};
use gnuplot::*;

fn main() -> Result<(), Box<dyn Error>> {
    // -----------------------
    // 1. Set up parameters
    // -----------------------
    // First wave: the zero-phase reference.
    let a1 = 1.0; // Amplitude of the first wave
    let f1 = 1.0; // Frequency of the first wave
    let phi1 = 0.0; // Phase offset of the first wave

    // Second wave: same frequency, shifted in time by its phase offset.
    let a2 = 0.8; // Amplitude of the second wave
    let f2 = 1.0; // Frequency of the second wave
    let phi2 = PI / 4.0; // Phase offset of the second wave

    // -------------------------
    // 2. Create and configure
    // -------------------------
    let wave1 = Sinusoid::new(a1, f1, phi1);
    let wave2 = Sinusoid::new(a2, f2, phi2);

    if !wave1.is_valid() || !wave2.is_valid() {
        return Err("Failed to set wave parameters. Check your values.".into());
    }

    // ---------------------------------------
    // 3. Evaluate over a shared time axis
    // ---------------------------------------
    // One full cycle, 1000 samples, identical axis for both waves.
    let t = time_axis(0.0, 2.0 * PI, 1000);
    let y1 = wave1.sample(&t);
    let y2 = wave2.sample(&t);

    // Time shift on the horizontal axis implied by the second wave's phase
    let shift_time = wave2.time_shift();

    // --------------
    // 4. Plot data
    // --------------
    // Both waveforms plus one dashed vertical line at the time shift.
    // This uses the "gnuplot" crate, which must be in [dev-dependencies].

    let caption1 = format!("Wave 1: A={}, f={}, phi={}", a1, f1, phi1);
    let caption2 = format!("Wave 2: A={}, f={}, phi={:.2}", a2, f2, phi2);
    let shift_caption = format!("Time shift = {:.2} s", shift_time);

    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title("Sine waves with a phase-implied time shift", &[]);
        axes.set_x_label("Time (s)", &[]);
        axes.set_y_label("Amplitude", &[]);
        axes.set_x_grid(true);
        axes.set_y_grid(true);
        axes.lines(&t, &y1, &[Color("blue"), Caption(&caption1)]);
        axes.lines(&t, &y2, &[Color("orange"), Caption(&caption2)]);
        axes.lines(
            &[shift_time, shift_time],
            &[-a1, a1],
            &[
                Color("gray"),
                LineStyle(DashType::Dash),
                Caption(&shift_caption),
            ],
        );
    }

    // Attempt to show in a pop-up window (might require gnuplot installed)
    fg.show().map_err(|e| format!("Failed to display plot: {e}"))?;

    println!(
        "Plot generated. Second wave lags the reference by {:.3} s.",
        shift_time
    );
    Ok(())
}
