/// Tri-state envelope around an asynchronous fetch outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> Resource<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Resource::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Resource::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<Result<T, String>> for Resource<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Resource::Success(value),
            Err(message) => Resource::Error(message),
        }
    }
}
