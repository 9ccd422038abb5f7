//! Pagination directives sent by clients and pagination facts reported by resolvers.
//! See: https://relay.dev/graphql/connections.htm#sec-Arguments

use crate::error::{PaginationError, PaginationResult};
use serde::Deserialize;
use std::{fmt, sync::Arc};

/// The four reserved pagination arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PaginationArgs {
    pub first: Option<i64>,
    pub last: Option<i64>,
    pub after: Option<String>,
    pub before: Option<String>,
}

impl PaginationArgs {
    pub const FIRST: &'static str = "first";
    pub const LAST: &'static str = "last";
    pub const AFTER: &'static str = "after";
    pub const BEFORE: &'static str = "before";

    pub const NAMES: [&'static str; 4] =
        [Self::FIRST, Self::LAST, Self::AFTER, Self::BEFORE];

    /// Page size used for page markers: `first`, else `last`, else unbounded (0).
    pub fn limit(&self) -> usize {
        self.first
            .or(self.last)
            .map(|n| usize::try_from(n).unwrap_or(0))
            .unwrap_or(0)
    }

    /// Reject negative counts, then reject `first` combined with `last`.
    pub fn validate(&self) -> PaginationResult<()> {
        if self.first.unwrap_or(0) < 0 || self.last.unwrap_or(0) < 0 {
            return Err(PaginationError::NegativeCount);
        }
        if self.first.is_some() && self.last.is_some() {
            return Err(PaginationError::FirstAndLast);
        }
        Ok(())
    }
}

pub type TotalCountFn = Arc<dyn Fn() -> i64 + Send + Sync>;

/// Pagination facts reported by a resolver that slices its own results.
#[derive(Clone, Default)]
pub struct PaginationInfo {
    pub total_count_fn: Option<TotalCountFn>,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PaginationInfo {
    pub fn new(has_next_page: bool, has_prev_page: bool) -> Self {
        Self {
            total_count_fn: None,
            has_next_page,
            has_prev_page,
        }
    }

    pub fn with_total_count(
        mut self,
        f: impl Fn() -> i64 + Send + Sync + 'static,
    ) -> Self {
        self.total_count_fn = Some(Arc::new(f));
        self
    }

    /// Zero when the resolver supplied no counting function.
    pub fn total_count(&self) -> i64 {
        self.total_count_fn.as_ref().map(|f| f()).unwrap_or(0)
    }
}

impl fmt::Debug for PaginationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationInfo")
            .field("total_count", &self.total_count())
            .field("has_next_page", &self.has_next_page)
            .field("has_prev_page", &self.has_prev_page)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_limit_prefers_first_then_last() {
        let args = PaginationArgs {
            first: Some(3),
            ..Default::default()
        };
        assert_eq!(args.limit(), 3);

        let args = PaginationArgs {
            last: Some(2),
            ..Default::default()
        };
        assert_eq!(args.limit(), 2);

        assert_eq!(PaginationArgs::default().limit(), 0);
    }

    #[test]
    fn test_validate_checks_negatives_before_conflicts() {
        let args = PaginationArgs {
            first: Some(1),
            last: Some(-1),
            ..Default::default()
        };
        assert_matches!(args.validate(), Err(PaginationError::NegativeCount));

        let args = PaginationArgs {
            first: Some(1),
            last: Some(1),
            ..Default::default()
        };
        assert_matches!(args.validate(), Err(PaginationError::FirstAndLast));

        assert_matches!(PaginationArgs::default().validate(), Ok(()));
    }

    #[test]
    fn test_total_count_defaults_to_zero() {
        assert_eq!(PaginationInfo::default().total_count(), 0);

        let info = PaginationInfo::new(true, false).with_total_count(|| 5);
        assert_eq!(info.total_count(), 5);
        assert!(info.has_next_page);
    }
}
