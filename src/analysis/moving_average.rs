use anyhow::{Result, ensure};

/// Trailing simple moving average.
///
/// The window at index i is the last `min(window_size, i + 1)` prices, so it
/// shrinks at the start of the series instead of being undefined or padded.
/// Output length always equals input length. Runs in linear time via a
/// running window sum.
pub fn moving_average(prices: &[f64], window_size: u32) -> Result<Vec<f64>> {
    ensure!(
        window_size >= 1,
        "moving-average window must be at least 1, got {}",
        window_size
    );

    let window = window_size as usize;
    let mut averages = Vec::with_capacity(prices.len());
    let mut window_sum = 0.0;

    for (i, price) in prices.iter().enumerate() {
        window_sum += price;
        if i >= window {
            window_sum -= prices[i - window];
        }
        let window_len = window.min(i + 1);
        averages.push(window_sum / window_len as f64);
    }

    Ok(averages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_one_is_identity() {
        let prices = vec![5.0, 3.0, 8.0, 1.0];
        let averages = moving_average(&prices, 1).unwrap();
        assert_eq!(averages, prices);
    }

    #[test]
    fn test_window_two_shrinks_at_start() {
        // [10, 20, 30] with window 2 -> [10, 15, 25]
        let averages = moving_average(&[10.0, 20.0, 30.0], 2).unwrap();
        assert_eq!(averages, vec![10.0, 15.0, 25.0]);
    }

    #[test]
    fn test_window_larger_than_series_ends_at_full_mean() {
        let prices = vec![2.0, 4.0, 6.0, 8.0];
        let averages = moving_average(&prices, 50).unwrap();

        let full_mean = prices.iter().sum::<f64>() / prices.len() as f64;
        assert!((averages.last().unwrap() - full_mean).abs() < 1e-12);
    }

    #[test]
    fn test_output_length_matches_input() {
        for len in [0usize, 1, 7, 40] {
            let prices: Vec<f64> = (0..len).map(|i| i as f64).collect();
            let averages = moving_average(&prices, 5).unwrap();
            assert_eq!(averages.len(), len);
        }
    }

    #[test]
    fn test_zero_window_is_rejected() {
        let err = moving_average(&[1.0, 2.0], 0);
        assert!(err.is_err(), "Window of 0 must be a validation error");
    }

    #[test]
    fn test_steady_window_after_warmup() {
        // Once i + 1 >= window the value is the plain mean of the last
        // `window` prices.
        let prices = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let averages = moving_average(&prices, 3).unwrap();
        assert!((averages[3] - 3.0).abs() < 1e-12); // (2+3+4)/3
        assert!((averages[4] - 4.0).abs() < 1e-12); // (3+4+5)/3
    }
}
