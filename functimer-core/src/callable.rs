//! Callable Model
//!
//! The harness times arbitrary host callables, so everything that crosses the
//! request boundary is a dynamic [`Value`]. A [`Callable`] is a named,
//! cheaply-clonable function of [`Args`] that either returns a value or fails
//! with a [`CallError`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Failure raised by a callable.
///
/// The harness never rewrites these: a failure raised by the function under
/// measurement reaches the caller exactly as it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// Wrong argument count or argument types
    #[error("TypeError: {0}")]
    Type(String),
    /// Argument had the right type but an unusable value
    #[error("ValueError: {0}")]
    Value(String),
    /// Any other failure, tagged with a caller-chosen kind
    #[error("{kind}: {message}")]
    Raised {
        /// Failure kind (e.g. "RuntimeError")
        kind: String,
        /// Failure message
        message: String,
    },
}

impl CallError {
    /// Build a [`CallError::Raised`]
    pub fn raised(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Raised {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Number of positional arguments a callable accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arity {
    /// Accepts any positional argument count
    #[default]
    Any,
    /// Accepts exactly this many positional arguments
    Exact(usize),
}

type CallFn = dyn Fn(&Args) -> Result<Value, CallError> + Send + Sync;

/// A named function over [`Args`].
#[derive(Clone)]
pub struct Callable {
    name: Arc<str>,
    arity: Arity,
    func: Arc<CallFn>,
}

impl Callable {
    /// Wrap a function accepting any argument list
    pub fn new<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&Args) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity: Arity::Any,
            func: Arc::new(func),
        }
    }

    /// Wrap a function that insists on exactly `positional` positional arguments
    pub fn with_arity<F>(name: impl Into<Arc<str>>, positional: usize, func: F) -> Self
    where
        F: Fn(&Args) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Self {
            arity: Arity::Exact(positional),
            ..Self::new(name, func)
        }
    }

    /// Wrap a zero-argument function whose result converts into a [`Value`]
    pub fn nullary<F, R>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: Into<Value>,
    {
        Self::with_arity(name, 0, move |_| Ok(func().into()))
    }

    /// Name used in diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared arity
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Invoke with `args`, enforcing the declared arity first
    #[inline]
    pub fn call(&self, args: &Args) -> Result<Value, CallError> {
        if let Arity::Exact(expected) = self.arity {
            let given = args.positional.len();
            if given != expected {
                return Err(CallError::Type(format!(
                    "{}() takes exactly {} positional argument{} ({} given)",
                    self.name,
                    expected,
                    if expected == 1 { "" } else { "s" },
                    given
                )));
            }
        }
        (self.func)(args)
    }

    /// Invoke with no arguments at all
    #[inline]
    pub fn call0(&self) -> Result<Value, CallError> {
        self.call(&Args::EMPTY)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Dynamic value passed to and returned from callables
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absence of a value
    #[default]
    None,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Text
    Str(String),
    /// Ordered collection
    Tuple(Vec<Value>),
    /// Something that can be called
    Func(Callable),
}

impl Value {
    /// Whether this value can be invoked
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Func(_))
    }

    /// The callable inside, if any
    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Func(c) => Some(c),
            _ => None,
        }
    }

    /// The float inside, if this is a [`Value::Float`]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Numeric view of ints and floats
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Short type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Tuple(_) => "tuple",
            Value::Func(_) => "function",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Func(a), Value::Func(b)) => Arc::ptr_eq(&a.func, &b.func),
            _ => false,
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::None
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Callable> for Value {
    fn from(c: Callable) -> Self {
        Value::Func(c)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Tuple(items.into_iter().map(Into::into).collect())
    }
}

/// Positional and keyword arguments for a call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    /// Positional arguments, in order
    pub positional: Vec<Value>,
    /// Keyword arguments
    pub keyword: BTreeMap<String, Value>,
}

impl Args {
    /// No arguments
    pub const EMPTY: Args = Args {
        positional: Vec::new(),
        keyword: BTreeMap::new(),
    };

    /// Empty argument list
    pub fn new() -> Self {
        Self::default()
    }

    /// Positional-only argument list
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            keyword: BTreeMap::new(),
        }
    }

    /// Add a keyword argument
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(key.into(), value.into());
        self
    }

    /// Look up a keyword argument
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.keyword.get(key)
    }
}
