//! JSON Output

use crate::result::TimeitResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Report metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    /// Tool version
    pub version: String,
    /// When the report was generated
    pub timestamp: DateTime<Utc>,
}

impl ReportMeta {
    /// Metadata stamped with the current time
    pub fn now() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// A result labelled with what was timed
#[derive(Debug, Clone, Serialize)]
pub struct NamedResult {
    /// Workload name
    pub name: String,
    /// Its timing
    pub result: TimeitResult,
}

/// Complete report
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Report metadata
    pub meta: ReportMeta,
    /// Results in run order
    pub results: Vec<NamedResult>,
}

/// Generate a prettified JSON report.
pub fn generate_json_report(results: &[NamedResult]) -> Result<String, serde_json::Error> {
    let report = Report {
        meta: ReportMeta::now(),
        results: results.to_vec(),
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use functimer_core::{TimeUnit, TrialSet};

    #[test]
    fn test_json_report() {
        let trials = TrialSet::new(5, vec![0.1, 0.2]).unwrap();
        let result = TimeitResult::new(trials, TimeUnit::Msec, 2, Vec::new());
        let json = generate_json_report(&[NamedResult {
            name: "sum".into(),
            result,
        }])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["meta"]["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(value["results"][0]["name"], "sum");
        assert_eq!(value["results"][0]["result"]["unit"], "msec");
        assert_eq!(value["results"][0]["result"]["repeat"], 2);
    }
}
