//! Configuration loading from functimer.toml
//!
//! Policy defaults can be specified in a `functimer.toml` file in the project
//! root. The file is discovered by walking up from the current directory.

use functimer::{TimeUnit, TimeitConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file
pub const CONFIG_FILE: &str = "functimer.toml";

/// Functimer configuration file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Timing defaults
    #[serde(default)]
    pub timeit: TimeitSection,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[timeit]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeitSection {
    /// Trials per workload
    #[serde(default = "default_repeat")]
    pub repeat: usize,
    /// Display unit: "sec", "msec", "usec", "nsec" or "auto"
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Digits after the decimal point
    #[serde(default = "default_precision")]
    pub precision: u32,
    /// Minimum autorange batch duration (e.g. "200ms", "1s")
    #[serde(default = "default_min_time")]
    pub min_time: String,
}

impl Default for TimeitSection {
    fn default() -> Self {
        Self {
            repeat: default_repeat(),
            unit: default_unit(),
            precision: default_precision(),
            min_time: default_min_time(),
        }
    }
}

fn default_repeat() -> usize {
    TimeitConfig::default().repeat
}
fn default_unit() -> String {
    TimeitConfig::default().unit.to_string()
}
fn default_precision() -> u32 {
    TimeitConfig::default().precision
}
fn default_min_time() -> String {
    "200ms".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

/// Unit choice after parsing; `Auto` picks per result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitChoice {
    /// Always this unit
    Fixed(TimeUnit),
    /// Largest unit in which the best time reads at least 1
    Auto,
}

impl UnitChoice {
    /// Parse a unit token or "auto"
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        if s == "auto" {
            return Ok(UnitChoice::Auto);
        }
        Ok(UnitChoice::Fixed(s.parse()?))
    }
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(path = %config_path.display(), error = %e, "ignoring unreadable config");
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Convert the `[timeit]` table into runner defaults.
    ///
    /// "auto" units map to the library default here; the CLI applies auto
    /// selection after each run.
    pub fn timeit_config(&self) -> anyhow::Result<TimeitConfig> {
        let unit = match UnitChoice::parse(&self.timeit.unit)? {
            UnitChoice::Fixed(unit) => unit,
            UnitChoice::Auto => TimeUnit::default(),
        };
        let config = TimeitConfig {
            repeat: self.timeit.repeat,
            unit,
            precision: self.timeit.precision,
            min_time: parse_duration(&self.timeit.min_time)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Functimer Configuration

[timeit]
# Trials per workload
repeat = 5
# Display unit: sec, msec, usec, nsec or auto
unit = "usec"
# Digits after the decimal point (1 to 20; 10 and above warns)
precision = 3
# Autorange stops at the first batch lasting at least this long
min_time = "200ms"

[output]
# Default output format: human or json
format = "human"
"#
        .to_string()
    }
}

/// Parse duration string (e.g., "3s", "500ms", "2m") to seconds
pub fn parse_duration(s: &str) -> anyhow::Result<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Err(anyhow::anyhow!("Empty duration string"));
    }

    // Find where the number ends and unit begins
    let (num_part, unit_part) = s
        .char_indices()
        .find(|(_, c)| c.is_alphabetic())
        .map(|(i, _)| s.split_at(i))
        .unwrap_or((s, "s"));

    let value: f64 = num_part
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid duration number: {}", num_part))?;

    // "200ms" must come out as exactly 0.2
    let per_second = match unit_part.to_lowercase().as_str() {
        "ns" => 1e9,
        "us" | "\u{b5}s" | "\u{3bc}s" => 1e6,
        "ms" => 1e3,
        "s" | "" => 1.0,
        "m" | "min" => return Ok(value * 60.0),
        _ => return Err(anyhow::anyhow!("Unknown duration unit: {}", unit_part)),
    };

    Ok(value / per_second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.timeit.repeat, 5);
        assert_eq!(config.timeit.unit, "usec");
        assert_eq!(config.output.format, "human");

        let timeit = config.timeit_config().unwrap();
        assert!((timeit.min_time - 0.2).abs() < 1e-12);
        assert_eq!(timeit, TimeitConfig::default());
    }

    #[test]
    fn test_parse_duration() {
        assert!((parse_duration("3s").unwrap() - 3.0).abs() < 1e-12);
        assert!((parse_duration("500ms").unwrap() - 0.5).abs() < 1e-12);
        assert!((parse_duration("100us").unwrap() - 1e-4).abs() < 1e-15);
        assert!((parse_duration("100µs").unwrap() - 1e-4).abs() < 1e-15);
        assert!((parse_duration("1000ns").unwrap() - 1e-6).abs() < 1e-15);
        assert!((parse_duration("2m").unwrap() - 120.0).abs() < 1e-12);
        assert!((parse_duration("0.25").unwrap() - 0.25).abs() < 1e-12);
        assert!(parse_duration("").is_err());
        assert!(parse_duration("5 fortnights").is_err());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [timeit]
            repeat = 9
            unit = "nsec"
            min_time = "50ms"
        "#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let timeit = config.timeit_config().unwrap();
        assert_eq!(timeit.repeat, 9);
        assert_eq!(timeit.unit, TimeUnit::Nsec);
        assert!((timeit.min_time - 0.05).abs() < 1e-12);
        // Defaults should still apply
        assert_eq!(timeit.precision, 3);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config: FileConfig = toml::from_str("[timeit]\nunit = \"bloops\"").unwrap();
        let err = config.timeit_config().unwrap_err();
        assert_eq!(err.to_string(), "unit must be one of sec, msec, usec, nsec");

        let config: FileConfig = toml::from_str("[timeit]\nrepeat = 0").unwrap();
        assert_eq!(
            config.timeit_config().unwrap_err().to_string(),
            "repeat must be positive"
        );
    }

    #[test]
    fn test_auto_unit() {
        assert_eq!(UnitChoice::parse("auto").unwrap(), UnitChoice::Auto);
        assert_eq!(
            UnitChoice::parse("msec").unwrap(),
            UnitChoice::Fixed(TimeUnit::Msec)
        );
        let config: FileConfig = toml::from_str("[timeit]\nunit = \"auto\"").unwrap();
        assert_eq!(config.timeit_config().unwrap().unit, TimeUnit::Usec);
    }

    #[test]
    fn test_default_toml_parses() {
        let config: FileConfig = toml::from_str(&FileConfig::default_toml()).unwrap();
        assert_eq!(config.timeit_config().unwrap(), TimeitConfig::default());
    }
}
