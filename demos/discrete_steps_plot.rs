use std::error::Error;

use motion_plot::StepSequence;
// use gnuplot::{Figure, Caption, Color};
use gnuplot::*;

fn main() -> Result<(), Box<dyn Error>> {
    // -----------------------
    // 1. Set up parameters
    // -----------------------
    // Discrete positions for each motor, played once per iteration.
    let motor1_pattern = [0.0, 1.0, 0.5];
    let motor2_pattern = [1.0, 0.5, 1.0];

    // Number of iterations
    let iterations = 3;

    // -------------------------
    // 2. Create and configure
    // -------------------------
    let motor1 = StepSequence::new(&motor1_pattern, iterations);
    let motor2 = StepSequence::new(&motor2_pattern, iterations);

    if !motor1.is_valid() || !motor2.is_valid() {
        return Err("Failed to build motor sequences. Check the patterns.".into());
    }

    // Both motors must cover the same number of steps
    if motor1.len() != motor2.len() {
        return Err("Motor sequences differ in length. Check the base patterns.".into());
    }

    // --------------------------------
    // 3. Expand to staircase points
    // --------------------------------
    // A post-step chart holds each position until the next step begins,
    // so every step contributes two points to the trace.
    let (time1, positions1) = motor1.step_points();
    let (time2, positions2) = motor2.step_points();

    // Y-range for the iteration boundary markers, padded a little
    let y_min = positions1
        .iter()
        .chain(positions2.iter())
        .cloned()
        .fold(f64::INFINITY, f64::min)
        - 0.1;
    let y_max = positions1
        .iter()
        .chain(positions2.iter())
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max)
        + 0.1;

    // --------------
    // 4. Plot data
    // --------------
    // Two step traces plus one dashed vertical marker per iteration boundary.
    // This uses the "gnuplot" crate, which must be in [dev-dependencies].

    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title("Discrete motor movements over three iterations", &[]);
        axes.set_x_label("Time (steps)", &[]);
        axes.set_y_label("Position", &[]);
        axes.set_x_grid(true);
        axes.set_y_grid(true);
        axes.lines(&time1, &positions1, &[Color("blue"), Caption("Motor 1")]);
        axes.lines(&time2, &positions2, &[Color("orange"), Caption("Motor 2")]);

        // Mark each iteration boundary (never step zero, never the final step)
        for x in motor1.iteration_boundaries() {
            axes.lines(
                &[x, x],
                &[y_min, y_max],
                &[Color("gray"), LineStyle(DashType::Dash)],
            );
        }
    }

    // Attempt to show in a pop-up window (might require gnuplot installed)
    fg.show().map_err(|e| format!("Failed to display plot: {e}"))?;

    println!(
        "Plot generated. {} steps per motor over {} iterations.",
        motor1.len(),
        iterations
    );
    Ok(())
}
