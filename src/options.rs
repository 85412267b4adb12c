//! Sorting configuration.
//!
//! This module provides the types that tune [`Collection::sort_with`](crate::Collection::sort_with):
//!
//! - [`SortOptions`]: Main configuration struct
//! - [`SortOrder`]: Ascending or descending
//! - [`SortFlag`]: How two values are compared
//!
//! ## Examples
//!
//! ```rust
//! use keyed_collection::{collection, SortFlag, SortOptions};
//!
//! let mut versions = collection!(["10", "9", "2"]);
//!
//! // String comparison puts "10" first
//! versions.sort_with(SortOptions::new().with_flag(SortFlag::String));
//! assert_eq!(versions.first().and_then(|v| v.as_str()), Some("10"));
//!
//! // Numeric comparison, largest first
//! versions.sort_with(SortOptions::new().with_flag(SortFlag::Numeric).descending());
//! assert_eq!(versions.first().and_then(|v| v.as_str()), Some("10"));
//! assert_eq!(versions.get(2).and_then(|v| v.as_str()), Some("2"));
//! ```

use crate::Value;
use std::cmp::Ordering;

/// Direction of a sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Comparison used when sorting values.
///
/// - **Regular**: [`Value::natural_cmp`], the default
/// - **Numeric**: compare [`Value::numeric_projection`]s
/// - **String**: compare string forms; containers sort after every scalar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortFlag {
    #[default]
    Regular,
    Numeric,
    String,
}

impl SortFlag {
    /// Compares two values under this flag.
    #[must_use]
    pub fn compare(self, a: &Value, b: &Value) -> Ordering {
        match self {
            SortFlag::Regular => a.natural_cmp(b),
            SortFlag::Numeric => a.numeric_projection().total_cmp(&b.numeric_projection()),
            SortFlag::String => match (a.scalar_string(), b.scalar_string()) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => a.natural_cmp(b),
            },
        }
    }
}

/// Configuration for sorting a collection.
///
/// # Examples
///
/// ```rust
/// use keyed_collection::{SortFlag, SortOptions, SortOrder};
///
/// let options = SortOptions::new();
/// assert_eq!(options.order, SortOrder::Ascending);
/// assert_eq!(options.flag, SortFlag::Regular);
///
/// let options = SortOptions::new().descending().with_flag(SortFlag::Numeric);
/// assert_eq!(options.order, SortOrder::Descending);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SortOptions {
    pub order: SortOrder,
    pub flag: SortFlag,
}

impl SortOptions {
    /// Ascending, regular comparison.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sort order.
    #[must_use]
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Shorthand for `with_order(SortOrder::Descending)`.
    #[must_use]
    pub fn descending(self) -> Self {
        self.with_order(SortOrder::Descending)
    }

    /// Sets the comparison flag.
    #[must_use]
    pub fn with_flag(mut self, flag: SortFlag) -> Self {
        self.flag = flag;
        self
    }

    /// Compares two values, honoring both the flag and the order.
    #[must_use]
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        let ordering = self.flag.compare(a, b);
        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}
