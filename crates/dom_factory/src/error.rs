use dom::PropertyError;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FactoryError {
    #[error("invalid tag name '{0}'")]
    InvalidTag(String),
    #[error("'{0}' is not an identifier; build it with `build` instead")]
    NotAnIdentifier(String),
}

/// A non-fatal problem met while building one element. The element is still returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildWarning {
    #[error("could not set property '{key}': {error}")]
    Property { key: String, error: PropertyError },
    #[error("could not add class '{class}': {error}")]
    InvalidClass { class: String, error: PropertyError },
    #[error("innerHTML and text content are both set; the innerHTML will be overridden by the text content")]
    TextOverridesMarkup,
}
