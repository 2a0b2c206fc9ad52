//! Built-in workloads
//!
//! Small, deterministic targets the CLI can time without any user code.

use functimer::{Args, CallError, Callable, Value};

/// A named target plus the arguments it is timed with
#[derive(Debug, Clone, Copy)]
pub struct Workload {
    /// Unique name, matched by the CLI filter
    pub name: &'static str,
    /// One-line description for `functimer list`
    pub description: &'static str,
    build: fn() -> (Callable, Args),
}

impl Workload {
    /// Construct the callable and its arguments
    pub fn build(&self) -> (Callable, Args) {
        (self.build)()
    }
}

/// Every built-in workload, in run order
pub const WORKLOADS: &[Workload] = &[
    Workload {
        name: "max",
        description: "max(1, 2)",
        build: || (max(), Args::positional([1, 2])),
    },
    Workload {
        name: "sum",
        description: "sum of 0..n with n = 1000",
        build: || (sum_range(), Args::positional([1000])),
    },
    Workload {
        name: "sort",
        description: "sort a reversed 256-element vector",
        build: || (sort_reversed(), Args::positional([256])),
    },
    Workload {
        name: "format",
        description: "format an integer with a keyword-selected radix",
        build: || (format_int(), Args::positional([1_234_567]).kwarg("radix", 16)),
    },
    Workload {
        name: "sleep",
        description: "sleep for 1 ms",
        build: || (sleep_ms(), Args::positional([1])),
    },
];

fn number_arg(args: &Args, index: usize) -> Result<f64, CallError> {
    let value = args
        .positional
        .get(index)
        .ok_or_else(|| CallError::Type(format!("missing positional argument {}", index)))?;
    value
        .as_number()
        .ok_or_else(|| CallError::Type(format!("expected a number, got '{}'", value.type_name())))
}

fn count_arg(args: &Args, index: usize) -> Result<u64, CallError> {
    let n = number_arg(args, index)?;
    if n < 0.0 {
        return Err(CallError::Value(format!("count must be non-negative, got {}", n)));
    }
    Ok(n as u64)
}

/// Largest numeric positional argument
pub fn max() -> Callable {
    Callable::new("max", |args| {
        let mut best: Option<f64> = None;
        for index in 0..args.positional.len() {
            let x = number_arg(args, index)?;
            best = Some(best.map_or(x, |b| b.max(x)));
        }
        best.map(Value::Float)
            .ok_or_else(|| CallError::Value("max() arg is an empty sequence".into()))
    })
}

/// Sum of `0..n`
pub fn sum_range() -> Callable {
    Callable::with_arity("sum_range", 1, |args| {
        let n = count_arg(args, 0)?;
        let total: u64 = (0..n).map(std::hint::black_box).sum();
        Ok(Value::Int(total as i64))
    })
}

/// Sort a freshly built descending vector of length `n`
pub fn sort_reversed() -> Callable {
    Callable::with_arity("sort_reversed", 1, |args| {
        let n = count_arg(args, 0)?;
        let mut items: Vec<u64> = (0..n).rev().collect();
        items.sort_unstable();
        Ok(Value::Int(items.first().copied().unwrap_or(0) as i64))
    })
}

/// Render an integer in the radix given by the `radix` keyword (default 10)
pub fn format_int() -> Callable {
    Callable::with_arity("format_int", 1, |args| {
        let n = number_arg(args, 0)? as i64;
        let radix = match args.get("radix") {
            Some(value) => value
                .as_number()
                .ok_or_else(|| CallError::Type("radix must be a number".into()))?
                as u32,
            None => 10,
        };
        let text = match radix {
            2 => format!("{:b}", n),
            8 => format!("{:o}", n),
            10 => n.to_string(),
            16 => format!("{:x}", n),
            other => return Err(CallError::Value(format!("unsupported radix {}", other))),
        };
        Ok(Value::Str(text))
    })
}

/// Sleep for `ms` milliseconds
pub fn sleep_ms() -> Callable {
    Callable::with_arity("sleep_ms", 1, |args| {
        let ms = count_arg(args, 0)?;
        std::thread::sleep(std::time::Duration::from_millis(ms));
        Ok(Value::None)
    })
}

/// Look a workload up by exact name
pub fn find(name: &str) -> Option<&'static Workload> {
    WORKLOADS.iter().find(|w| w.name == name)
}
