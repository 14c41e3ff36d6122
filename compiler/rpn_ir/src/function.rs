//! Named single-argument functions and the table that resolves them.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::InvalidArgument;

type FunctionBody = dyn Fn(f64) -> f64 + Send + Sync;

/// A pure numeric function of one argument, known by name.
///
/// Two functions are equal when their names are equal; the body is not
/// compared. Cloning is cheap (reference-counted).
#[derive(Clone)]
pub struct UnaryFunction {
    name: Arc<str>,
    body: Arc<FunctionBody>,
}

impl UnaryFunction {
    /// Create a function. The name must not be empty.
    pub fn new<F>(name: &str, body: F) -> Result<Self, InvalidArgument>
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        if name.is_empty() {
            return Err(InvalidArgument::EmptyFunctionName);
        }
        Ok(Self::named(name, body))
    }

    fn named<F>(name: &str, body: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        UnaryFunction {
            name: Arc::from(name),
            body: Arc::new(body),
        }
    }

    /// The lookup and display name (without the `()` suffix).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the function to `x`.
    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        (self.body)(x)
    }
}

impl PartialEq for UnaryFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for UnaryFunction {}

impl fmt::Debug for UnaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}()", self.name)
    }
}

/// Map from function name to [`UnaryFunction`], consulted by the parser when
/// it meets a `name()` token.
#[derive(Clone, Debug, Default)]
pub struct FunctionTable {
    functions: FxHashMap<String, UnaryFunction>,
}

impl FunctionTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard library: `sqrt`, `abs`, `exp`, `log` (natural), `sin`,
    /// `cos`, `tan`, `floor`, `ceil`, `round`.
    pub fn builtins() -> Self {
        let builtins: [(&str, fn(f64) -> f64); 10] = [
            ("sqrt", f64::sqrt),
            ("abs", f64::abs),
            ("exp", f64::exp),
            ("log", f64::ln),
            ("sin", f64::sin),
            ("cos", f64::cos),
            ("tan", f64::tan),
            ("floor", f64::floor),
            ("ceil", f64::ceil),
            ("round", f64::round),
        ];
        let mut table = Self::new();
        for (name, body) in builtins {
            table.insert(UnaryFunction::named(name, body));
        }
        table
    }

    /// Add or replace a function, keyed by its name.
    pub fn insert(&mut self, function: UnaryFunction) -> Option<UnaryFunction> {
        self.functions.insert(function.name().to_owned(), function)
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, function: UnaryFunction) -> Self {
        self.insert(function);
        self
    }

    pub fn get(&self, name: &str) -> Option<&UnaryFunction> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Function names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests;
