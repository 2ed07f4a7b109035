use thiserror::Error;

/// A builder or id constructor was handed a value outside its domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("invalid {what}: {reason}")]
    InvalidArgument { what: &'static str, reason: String },

    #[error("invalid base url `{0}`: must include a scheme and a host")]
    InvalidBaseUrl(String),
}

impl UrlError {
    pub(crate) fn invalid(what: &'static str, reason: impl Into<String>) -> Self {
        UrlError::InvalidArgument {
            what,
            reason: reason.into(),
        }
    }
}

/// Pattern table construction failed
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("routing regex `{0}` must begin with '^'")]
    Unanchored(String),

    #[error("routing regex `{pattern}` does not compile")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Extension for trusted call sites that would rather render an empty link
/// than fail the whole page
pub trait UrlResultExt {
    fn or_log(self) -> String;
}

impl UrlResultExt for Result<String, UrlError> {
    fn or_log(self) -> String {
        match self {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(error = %err, "failed to build url, rendering empty link");
                String::new()
            }
        }
    }
}
