//! Current–voltage sweep of a single-diode photovoltaic cell.
//!
//! The single-diode model is implicit in the cell current, but it has an
//! explicit solution in terms of the principal branch of Lambert W. This
//! example sweeps the terminal voltage, reports the maximum power point, and
//! shows how the fast solver compares against the full solver.
//!
//! # Usage
//!
//! ```text
//! cargo run --example pv_cell
//! RUST_LOG=trace cargo run --example pv_cell
//! ```

use std::error::Error;

use lambert_w::{Action, Branch, Config, Event, Observer, fast_solve_w0, solve, solve_w0};
use tracing::{debug, info};

/// Boltzmann constant over elementary charge, in V/K.
const K_OVER_Q: f64 = 8.617_333_262e-5;

/// Parameters of the single-diode equivalent circuit.
#[derive(Debug, Clone, Copy)]
struct Cell {
    /// Photocurrent, in A.
    photocurrent: f64,
    /// Diode saturation current, in A.
    saturation_current: f64,
    /// Diode ideality factor.
    ideality: f64,
    /// Series resistance, in Ω.
    series_resistance: f64,
    /// Shunt resistance, in Ω.
    shunt_resistance: f64,
    /// Cell temperature, in K.
    temperature: f64,
}

impl Cell {
    fn modified_thermal_voltage(&self) -> f64 {
        self.ideality * K_OVER_Q * self.temperature
    }

    /// Returns the argument of W and the linear part of the current at `voltage`.
    fn lambert_argument(&self, voltage: f64) -> (f64, f64) {
        let Self {
            photocurrent: il,
            saturation_current: i0,
            series_resistance: rs,
            shunt_resistance: rsh,
            ..
        } = *self;
        let nvt = self.modified_thermal_voltage();
        let total = rs + rsh;

        let log_argument = (rs * rsh * i0 / (nvt * total)).ln()
            + rsh * (rs * (il + i0) + voltage) / (nvt * total);
        let linear = (rsh * (il + i0) - voltage) / total;

        (log_argument.exp(), linear)
    }

    /// Cell current at `voltage`, in A.
    fn current<F>(&self, voltage: f64, lambert: F) -> Result<f64, lambert_w::Error>
    where
        F: Fn(f64) -> Result<f64, lambert_w::Error>,
    {
        let (argument, linear) = self.lambert_argument(voltage);
        let w = lambert(argument)?;
        Ok(linear - self.modified_thermal_voltage() / self.series_resistance * w)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let cell = Cell {
        photocurrent: 8.0,
        saturation_current: 1.0e-10,
        ideality: 1.3,
        series_resistance: 0.005,
        shunt_resistance: 30.0,
        temperature: 298.15,
    };
    info!(?cell, "sweeping terminal voltage");

    let mut max_power = (0.0, 0.0, 0.0);
    let mut worst_fast_error = 0.0_f64;

    for step in 0..=200 {
        let voltage = f64::from(step) * 0.005;
        let current = cell.current(voltage, |x| solve_w0(x, 0.0))?;
        if current < 0.0 {
            info!(voltage, "past open circuit");
            break;
        }

        let fast = cell.current(voltage, fast_solve_w0)?;
        worst_fast_error = worst_fast_error.max((fast - current).abs());

        let power = voltage * current;
        debug!(voltage, current, power);
        if power > max_power.2 {
            max_power = (voltage, current, power);
        }
    }

    let (voltage, current, power) = max_power;
    info!(voltage, current, power, "maximum power point");
    info!(worst_fast_error, "fast solver deviation in current (A)");

    let (argument, _) = cell.lambert_argument(voltage);
    let solution = solve(Branch::Principal, argument, &Config::default(), StepLogger)?;
    info!(
        argument,
        w = solution.w,
        iters = solution.iters,
        status = ?solution.status,
        "lambert w at the maximum power point"
    );

    Ok(())
}

/// Logs every Halley step.
struct StepLogger;

impl Observer<Event, Action> for StepLogger {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        debug!(iter = event.iter, w = event.w, step = event.step, "halley step");
        None
    }
}
