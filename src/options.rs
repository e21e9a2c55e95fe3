//! Configuration options for key conversion.
//!
//! [`RecaseOptions`] selects the target [`Case`] and can optionally bound how
//! deep the traversal descends. By default every key is converted, however
//! deeply it is nested.
//!
//! ## Examples
//!
//! ```rust
//! use serde_recase::{recase_keys, value, RecaseOptions};
//!
//! let payload = value!({ "userId": 1 });
//!
//! let options = RecaseOptions::snake().with_max_depth(16);
//! let snake = recase_keys(payload, &options);
//! assert_eq!(snake, value!({ "user_id": 1 }));
//! ```

use crate::Case;

/// Configuration options for key conversion.
///
/// # Examples
///
/// ```rust
/// use serde_recase::{Case, RecaseOptions};
///
/// // camelCase, no depth limit
/// let options = RecaseOptions::new();
/// assert_eq!(options.case, Case::Camel);
/// assert_eq!(options.max_depth, None);
///
/// // snake_case, keys below depth 8 left alone
/// let options = RecaseOptions::snake().with_max_depth(8);
/// assert_eq!(options.max_depth, Some(8));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RecaseOptions {
    /// Case that object keys are converted to.
    pub case: Case,
    /// Containers nested deeper than this are left as they are. `None`, the
    /// default, converts keys at every depth.
    pub max_depth: Option<usize>,
}

impl Default for RecaseOptions {
    fn default() -> Self {
        RecaseOptions {
            case: Case::default(),
            max_depth: None,
        }
    }
}

impl RecaseOptions {
    /// Creates default options (camelCase, no depth limit).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options converting keys to camelCase.
    #[must_use]
    pub fn camel() -> Self {
        Self::new().with_case(Case::Camel)
    }

    /// Creates options converting keys to snake_case.
    #[must_use]
    pub fn snake() -> Self {
        Self::new().with_case(Case::Snake)
    }

    /// Sets the target case.
    #[must_use]
    pub fn with_case(mut self, case: Case) -> Self {
        self.case = case;
        self
    }

    /// Sets the maximum nesting depth.
    ///
    /// The top-level value sits at depth 0. A container at a depth greater than
    /// `max_depth` is returned unchanged, keys included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_recase::RecaseOptions;
    ///
    /// let options = RecaseOptions::new().with_max_depth(4);
    /// assert_eq!(options.max_depth, Some(4));
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Removes the nesting limit.
    #[must_use]
    pub fn without_depth_limit(mut self) -> Self {
        self.max_depth = None;
        self
    }
}

impl From<Case> for RecaseOptions {
    fn from(case: Case) -> Self {
        Self::new().with_case(case)
    }
}
