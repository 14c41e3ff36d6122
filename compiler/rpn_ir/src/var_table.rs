//! Variable names and the binding table evaluation reads from.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{is_variable_word, InvalidArgument, UnboundVariable};

/// A validated variable name.
///
/// Names are non-empty and read back as a variable when tokenized, so a
/// variable always renders to text that parses to the same variable.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarName(Arc<str>);

impl VarName {
    pub fn new(name: &str) -> Result<Self, InvalidArgument> {
        if name.is_empty() {
            return Err(InvalidArgument::EmptyVariableName);
        }
        if !is_variable_word(name) {
            return Err(InvalidArgument::MalformedVariableName);
        }
        Ok(VarName(Arc::from(name)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for VarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VarName({:?})", &*self.0)
    }
}

impl fmt::Display for VarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VarName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Mapping from variable name to value.
///
/// Expressions only ever read from a table; the mutators exist for the
/// calculator session and for tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VarTable {
    bindings: FxHashMap<String, f64>,
}

impl VarTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table with a single binding.
    pub fn of(name: &VarName, value: f64) -> Self {
        Self::new().with(name, value)
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: &VarName, value: f64) -> Self {
        self.bindings.insert(name.as_str().to_owned(), value);
        self
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: f64) -> Result<Option<f64>, InvalidArgument> {
        let name = VarName::new(name)?;
        Ok(self.bindings.insert(name.as_str().to_owned(), value))
    }

    /// Remove the binding for `name`, returning its old value.
    pub fn unset(&mut self, name: &str) -> Option<f64> {
        self.bindings.remove(name)
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<f64, UnboundVariable> {
        self.bindings
            .get(name)
            .copied()
            .ok_or_else(|| UnboundVariable::new(name))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
