use serde::{Serialize, Deserialize};

use std::fmt;


/// A single constraint `column == value` on a path from the root.
/// `column` is 1-based and refers to a feature column,
/// so it is always positive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Filter {
    pub(crate) column: usize,
    pub(crate) value: String,
}


impl Filter {
    /// Construct a new filter on the 1-based `column`.
    #[inline]
    pub fn new<S: Into<String>>(column: usize, value: S) -> Self {
        assert!(column > 0, "Filter columns are 1-based");
        Self { column, value: value.into() }
    }


    /// Returns the 1-based column index.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }


    /// Returns the categorical value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}


impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] = {}", self.column, self.value)
    }
}
