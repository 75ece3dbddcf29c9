use chrono::NaiveDate;

// ============================================================================
// Observation: one sanitized (date, price) point
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,
    pub price: f64,
}

// ============================================================================
// InstrumentSeries: sanitized observations for one instrument
// ============================================================================

/// Column layout keeps the plot assembly cheap: the chart wants the date and
/// price sequences separately anyway.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InstrumentSeries {
    pub name: String,
    pub dates: Vec<NaiveDate>,
    pub prices: Vec<f64>,
}

impl InstrumentSeries {
    pub fn from_observations(name: impl Into<String>, observations: Vec<Observation>) -> Self {
        let mut dates = Vec::with_capacity(observations.len());
        let mut prices = Vec::with_capacity(observations.len());
        for obs in observations {
            dates.push(obs.date);
            prices.push(obs.price);
        }
        InstrumentSeries {
            name: name.into(),
            dates,
            prices,
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// First and last date of the series, if any. Valid because sanitization
    /// sorts ascending.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.dates.first(), self.dates.last()) {
            (Some(first), Some(last)) => Some((*first, *last)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> NaiveDate {
        text.parse().unwrap()
    }

    #[test]
    fn test_from_observations_splits_columns() {
        let series = InstrumentSeries::from_observations(
            "Inst1",
            vec![
                Observation {
                    date: date("2024-01-01"),
                    price: 10.0,
                },
                Observation {
                    date: date("2024-01-02"),
                    price: 20.0,
                },
            ],
        );

        assert_eq!(series.name, "Inst1");
        assert_eq!(series.dates, vec![date("2024-01-01"), date("2024-01-02")]);
        assert_eq!(series.prices, vec![10.0, 20.0]);
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_date_range_empty_series() {
        let series = InstrumentSeries::from_observations("Inst1", Vec::new());
        assert!(series.is_empty());
        assert_eq!(series.date_range(), None);
    }
}
