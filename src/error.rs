use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiErrorKind {
    /// A string key outside a closed option set (button variant, size, ...).
    UnknownOption,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiError {
    pub kind: UiErrorKind,
    pub message: String,
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for UiError {}

impl UiError {
    pub(crate) fn unknown_option(option: &str, value: &str, expected: &[&str]) -> Self {
        Self {
            kind: UiErrorKind::UnknownOption,
            message: format!(
                "unrecognized {option} `{value}` (expected one of: {})",
                expected.join(", ")
            ),
        }
    }
}

pub type UiResult<T> = Result<T, UiError>;
