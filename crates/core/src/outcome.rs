//! Result of a single-flight operation

use imagefeed_domain::Result;

/// How a single-flight call ended.
///
/// `Superseded` is not an error: a newer call took over and this one has no
/// outcome to report.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum FlightOutcome<T> {
    Completed(Result<T>),
    Superseded,
}

impl<T> FlightOutcome<T> {
    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded)
    }

    /// The completed result, `None` if superseded.
    pub fn completed(self) -> Option<Result<T>> {
        match self {
            Self::Completed(result) => Some(result),
            Self::Superseded => None,
        }
    }
}

impl<T> From<Option<Result<T>>> for FlightOutcome<T> {
    fn from(value: Option<Result<T>>) -> Self {
        value.map_or(Self::Superseded, Self::Completed)
    }
}
