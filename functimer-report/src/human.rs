//! Output Formatting
//!
//! Human-readable block for one timing result.

use crate::result::{TimeitResult, format_significant};

/// Format a result for terminal display
///
/// # Arguments
/// * `name` - Label shown in the header line
/// * `result` - Completed timing result
pub fn format_human_output(name: &str, result: &TimeitResult) -> String {
    let unit = result.unit();
    let show = |seconds: f64| format_significant(unit.convert(seconds), result.precision());
    let mut output = String::new();

    output.push_str(&format!("  {}\n", name));
    output.push_str(&format!(
        "      best: {} {unit}  mean: {} {unit}  stddev: {} {unit}\n",
        show(result.best()),
        show(result.mean()),
        show(result.std_dev()),
    ));
    output.push_str(&format!(
        "      worst: {} {unit}  loops: {}  trials: {}\n",
        show(result.worst()),
        result.number(),
        result.repeat()
    ));
    for warning in result.warnings() {
        output.push_str(&format!("      warning: {}\n", warning));
    }
    output.push_str(&format!("      {}\n", result.brief()));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use functimer_core::{TimeUnit, TrialSet, Warning};

    #[test]
    fn test_human_block() {
        let result = TimeitResult::new(
            TrialSet::new(10, vec![0.001, 0.002]).unwrap(),
            TimeUnit::Usec,
            1,
            vec![Warning::HighPrecision { precision: 10 }],
        );
        let out = format_human_output("max", &result);
        assert!(out.starts_with("  max\n"));
        assert!(out.contains("best: 100 usec"));
        assert!(out.contains("worst: 200 usec"));
        assert!(out.contains("loops: 10  trials: 2"));
        assert!(out.contains("warning: precision is rather high"));
        assert!(out.contains(result.brief()));
    }

    #[test]
    fn test_human_block_fast_target_in_seconds() {
        let result = TimeitResult::new(
            TrialSet::new(1_000_000, vec![0.02, 0.022]).unwrap(),
            TimeUnit::Sec,
            2,
            Vec::new(),
        );
        let out = format_human_output("noop", &result);
        assert!(out.contains("best: 0.000000020 sec"), "{out}");
        assert!(out.contains("worst: 0.000000022 sec"), "{out}");
    }
}
