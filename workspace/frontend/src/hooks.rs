/// Lifecycle of a screen's load-on-mount request
#[derive(Clone, PartialEq)]
pub enum LoadState<T> {
    Pending,
    Success(T),
    Failure(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Pending
    }
}

impl<T> LoadState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> From<Result<T, String>> for LoadState<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(reason) => Self::Failure(reason),
        }
    }
}
