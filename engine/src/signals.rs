// Fast/slow moving-average crossover detection
use shared::models::SignalType;

/// A crossover found at `index` of the aligned input series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossover {
    pub index: usize,
    pub signal_type: SignalType,
}

/// Scans two aligned series for crossings of `fast` over `slow`.
///
/// A BUY fires at `i` when fast was at or below slow at `i - 1` and is
/// strictly above at `i`; a SELL is the mirror image. A tie at `i - 1`
/// counts as the prior state for both directions, so the event lands on
/// the first strict inequality after it. Indices where either series is
/// `None` at `i - 1` or `i` are skipped. Series of different lengths are
/// compared over their common prefix.
pub fn detect_crossovers(fast: &[Option<f64>], slow: &[Option<f64>]) -> Vec<Crossover> {
    let len = fast.len().min(slow.len());
    let mut crossovers = Vec::new();

    for i in 1..len {
        let (Some(f_prev), Some(s_prev), Some(f_now), Some(s_now)) =
            (fast[i - 1], slow[i - 1], fast[i], slow[i])
        else {
            continue;
        };

        if f_prev <= s_prev && f_now > s_now {
            crossovers.push(Crossover { index: i, signal_type: SignalType::Buy });
        } else if f_prev >= s_prev && f_now < s_now {
            crossovers.push(Crossover { index: i, signal_type: SignalType::Sell });
        }
    }

    crossovers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::moving_average;
    use proptest::prelude::*;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_single_cross_above_flat_slow_line() {
        let fast = some(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let slow = some(&[3.5; 5]);
        let signals = detect_crossovers(&fast, &slow);
        assert_eq!(signals, vec![Crossover { index: 3, signal_type: SignalType::Buy }]);
    }

    #[test]
    fn test_hand_computed_scenario() {
        // fast = SMA(2), slow = SMA(4); fast - slow from index 3:
        // 1.0, 1.0, 0.5, -0.5, -1.0, -1.0, -0.5, 0.5, 1.0, 1.0
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let fast = moving_average(&values, 2);
        let slow = moving_average(&values, 4);
        let signals = detect_crossovers(&fast, &slow);
        assert_eq!(
            signals,
            vec![
                Crossover { index: 6, signal_type: SignalType::Sell },
                Crossover { index: 10, signal_type: SignalType::Buy },
            ]
        );
    }

    #[test]
    fn test_tie_fires_on_next_strict_inequality() {
        let fast = some(&[1.0, 2.0, 3.0]);
        let slow = some(&[2.0, 2.0, 2.0]);
        // index 1 is the tie itself, index 2 leaves it upwards
        assert_eq!(
            detect_crossovers(&fast, &slow),
            vec![Crossover { index: 2, signal_type: SignalType::Buy }]
        );

        let fast = some(&[3.0, 2.0, 1.0]);
        assert_eq!(
            detect_crossovers(&fast, &slow),
            vec![Crossover { index: 2, signal_type: SignalType::Sell }]
        );
    }

    #[test]
    fn test_sustained_tie_emits_nothing() {
        let fast = some(&[2.0, 2.0, 2.0, 2.0]);
        let slow = some(&[2.0, 2.0, 2.0, 2.0]);
        assert!(detect_crossovers(&fast, &slow).is_empty());
    }

    #[test]
    fn test_missing_values_suppress_signals() {
        let fast = vec![None, Some(1.0), Some(3.0), Some(1.0)];
        let slow = vec![None, None, Some(2.0), Some(2.0)];
        // index 2 lacks slow[1]; only index 3 has a full pair of samples
        assert_eq!(
            detect_crossovers(&fast, &slow),
            vec![Crossover { index: 3, signal_type: SignalType::Sell }]
        );
    }

    #[test]
    fn test_short_and_mismatched_inputs() {
        assert!(detect_crossovers(&[], &[]).is_empty());
        assert!(detect_crossovers(&[Some(1.0)], &[Some(2.0)]).is_empty());

        let fast = some(&[1.0, 3.0, 1.0]);
        let slow = some(&[2.0, 2.0]);
        assert_eq!(
            detect_crossovers(&fast, &slow),
            vec![Crossover { index: 1, signal_type: SignalType::Buy }]
        );
    }

    proptest! {
        #[test]
        fn prop_at_most_one_signal_per_index(
            values in prop::collection::vec(1.0f64..500.0, 0..150),
            fast_period in 1usize..10,
            slow_period in 1usize..30,
        ) {
            let fast = moving_average(&values, fast_period);
            let slow = moving_average(&values, slow_period);
            let signals = detect_crossovers(&fast, &slow);
            for pair in signals.windows(2) {
                prop_assert!(pair[0].index < pair[1].index);
            }
            for signal in &signals {
                prop_assert!(signal.index >= 1 && signal.index < values.len());
            }
        }
    }
}
