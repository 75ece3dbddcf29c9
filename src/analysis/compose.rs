use chrono::{Datelike, NaiveDate};
use itertools::izip;

use crate::data::InstrumentSet;
use crate::models::{DisplayOptions, TraceKind, TraceSpec};

/// Assembles the renderable traces for the active display mode.
///
/// Raw mode emits one price trace per instrument; smoothed mode emits one
/// moving-average trace per instrument, labeled with the window size.
/// Traces for the inactive mode are omitted entirely, never emitted as
/// empty placeholders. Pure function of its inputs.
///
/// In smoothed mode `averages` must hold one vector per instrument, aligned
/// with `set.series` (the shell computes them with the moving-average calculator).
pub fn compose_traces(
    set: &InstrumentSet,
    averages: &[Vec<f64>],
    options: &DisplayOptions,
) -> Vec<TraceSpec> {
    let mut traces = Vec::with_capacity(set.series.len());

    if options.show_moving_average {
        debug_assert_eq!(averages.len(), set.series.len());
        for (series, average) in izip!(&set.series, averages) {
            traces.push(TraceSpec {
                instrument: series.name.clone(),
                label: format!(
                    "{} Moving Average ({} days)",
                    series.name, options.window_size
                ),
                points: plot_points(&series.dates, average),
                kind: TraceKind::MovingAverage {
                    window_size: options.window_size,
                },
            });
        }
    } else {
        for series in &set.series {
            traces.push(TraceSpec {
                instrument: series.name.clone(),
                label: format!("{} Price", series.name),
                points: plot_points(&series.dates, &series.prices),
                kind: TraceKind::Price,
            });
        }
    }

    traces
}

fn plot_points(dates: &[NaiveDate], values: &[f64]) -> Vec<[f64; 2]> {
    debug_assert_eq!(dates.len(), values.len());
    izip!(dates, values)
        .map(|(date, value)| [f64::from(date.num_days_from_ce()), *value])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InstrumentSeries, Observation};

    fn obs(date: &str, price: f64) -> Observation {
        Observation {
            date: date.parse().unwrap(),
            price,
        }
    }

    fn two_instrument_set() -> InstrumentSet {
        InstrumentSet {
            series: vec![
                InstrumentSeries::from_observations(
                    "Inst1",
                    vec![obs("2024-01-01", 10.0), obs("2024-01-02", 20.0)],
                ),
                InstrumentSeries::from_observations(
                    "Inst2",
                    vec![obs("2024-01-01", 5.0), obs("2024-01-02", 7.0)],
                ),
            ],
        }
    }

    #[test]
    fn test_raw_mode_emits_price_traces_only() {
        let set = two_instrument_set();
        let options = DisplayOptions {
            show_moving_average: false,
            window_size: 10,
        };

        let traces = compose_traces(&set, &[], &options);

        assert_eq!(traces.len(), 2, "One trace per instrument, nothing else");
        assert_eq!(traces[0].kind, TraceKind::Price);
        assert_eq!(traces[0].label, "Inst1 Price");
        assert_eq!(traces[1].label, "Inst2 Price");
        assert_eq!(traces[0].points.len(), 2);
        assert_eq!(traces[0].points[0][1], 10.0);
    }

    #[test]
    fn test_smoothed_mode_emits_average_traces_only() {
        let set = two_instrument_set();
        let options = DisplayOptions {
            show_moving_average: true,
            window_size: 2,
        };
        let averages = vec![vec![10.0, 15.0], vec![5.0, 6.0]];

        let traces = compose_traces(&set, &averages, &options);

        assert_eq!(traces.len(), 2);
        assert_eq!(
            traces[0].kind,
            TraceKind::MovingAverage { window_size: 2 },
            "Raw price traces must not appear in smoothed mode"
        );
        assert_eq!(traces[0].label, "Inst1 Moving Average (2 days)");
        assert_eq!(traces[1].points[1][1], 6.0);
    }

    #[test]
    fn test_compose_is_idempotent() {
        let set = two_instrument_set();
        let options = DisplayOptions {
            show_moving_average: true,
            window_size: 3,
        };
        let averages = vec![vec![10.0, 15.0], vec![5.0, 6.0]];

        let first = compose_traces(&set, &averages, &options);
        let second = compose_traces(&set, &averages, &options);

        assert_eq!(first, second);
    }

    #[test]
    fn test_points_use_ascending_date_axis() {
        let set = two_instrument_set();
        let options = DisplayOptions::default();

        let traces = compose_traces(&set, &[], &options);

        for trace in &traces {
            for pair in trace.points.windows(2) {
                assert!(pair[0][0] < pair[1][0], "x values must ascend with date");
            }
        }
    }
}
