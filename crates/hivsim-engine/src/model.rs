//! Discrete-time HIV dynamics model.
//!
//! Tracks healthy T cells, free virus and the latent reservoir day by day.
//! Once therapy starts, the payload clears `release_rate` of the virus per day
//! and half that fraction of the reservoir.

use hivsim_core::simulation::{SimulationParameters, SimulationResult};

pub const INITIAL_T_CELLS: f64 = 1000.0;
pub const INITIAL_VIRAL_LOAD: f64 = 50.0;
pub const INITIAL_RESERVOIR: f64 = 300.0;

const T_CELL_PRODUCTION: f64 = 2.0;
const T_CELL_INFECTION: f64 = 0.01;
const VIRAL_GROWTH: f64 = 0.5;
const RESERVOIR_CLEARANCE: f64 = 0.5;

/// Runs the model over `0..t_max` days.
///
/// Every population is floored at zero after each step.
pub fn simulate(params: &SimulationParameters) -> SimulationResult {
    let days = params.t_max as usize;
    let mut result = SimulationResult {
        time: Vec::with_capacity(days),
        t: Vec::with_capacity(days),
        v: Vec::with_capacity(days),
        l: Vec::with_capacity(days),
    };
    if days == 0 {
        return result;
    }

    let (mut t, mut v, mut l) = (INITIAL_T_CELLS, INITIAL_VIRAL_LOAD, INITIAL_RESERVOIR);
    push_day(&mut result, 0, t, v, l);

    for day in 1..params.t_max {
        let kill = if day >= params.therapy_start {
            params.release_rate
        } else {
            0.0
        };

        let next_t = t + T_CELL_PRODUCTION - T_CELL_INFECTION * v;
        let next_v = v + VIRAL_GROWTH * v - kill * v;
        let next_l = l - kill * l * RESERVOIR_CLEARANCE;

        t = next_t.max(0.0);
        v = next_v.max(0.0);
        l = next_l.max(0.0);
        push_day(&mut result, day, t, v, l);
    }

    result
}

fn push_day(result: &mut SimulationResult, day: u32, t: f64, v: f64, l: f64) {
    result.time.push(f64::from(day));
    result.t.push(t);
    result.v.push(v);
    result.l.push(l);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hivsim_core::simulation::PayloadType;

    fn params(t_max: u32, therapy_start: u32, release_rate: f64) -> SimulationParameters {
        SimulationParameters {
            t_max,
            therapy_start,
            release_rate,
            payload_type: PayloadType::SiRna,
        }
    }

    #[test]
    fn test_series_are_aligned() {
        let result = simulate(&SimulationParameters::default());
        assert_eq!(result.len(), 200);
        assert_eq!(result.t.len(), 200);
        assert_eq!(result.v.len(), 200);
        assert_eq!(result.l.len(), 200);
        assert_eq!(result.time[0], 0.0);
        assert_eq!(result.time[199], 199.0);
    }

    #[test]
    fn test_initial_conditions() {
        let result = simulate(&params(1, 0, 0.1));
        assert_eq!(result.t, vec![INITIAL_T_CELLS]);
        assert_eq!(result.v, vec![INITIAL_VIRAL_LOAD]);
        assert_eq!(result.l, vec![INITIAL_RESERVOIR]);
    }

    #[test]
    fn test_first_steps_without_therapy() {
        let result = simulate(&params(3, 100, 0.1));
        // day 1: T = 1000 + 2 - 0.5, V = 50 * 1.5
        assert_eq!(result.t[1], 1001.5);
        assert_eq!(result.v[1], 75.0);
        assert_eq!(result.v[2], 112.5);
        assert_eq!(result.l, vec![300.0, 300.0, 300.0]);
    }

    #[test]
    fn test_therapy_shrinks_reservoir() {
        let result = simulate(&params(3, 1, 0.2));
        // day 1: L = 300 - 0.2 * 300 * 0.5
        assert_eq!(result.l[1], 270.0);
        // day 1: V = 50 + 25 - 10
        assert_eq!(result.v[1], 65.0);
    }

    #[test]
    fn test_populations_never_negative() {
        let result = simulate(&params(200, 0, 3.0));
        for series in [&result.t, &result.v, &result.l] {
            assert!(series.iter().all(|x| *x >= 0.0));
        }
        assert_eq!(result.v[1], 0.0);
    }

    #[test]
    fn test_zero_days_is_empty() {
        assert!(simulate(&params(0, 0, 0.1)).is_empty());
    }
}
