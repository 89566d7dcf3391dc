#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    TableUnavailable,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::TableUnavailable => {
                "Could not load the question table for this company."
            }
        }
    }
}

/// Lifecycle of data a view is waiting on.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}
