/// Slide300 error types
#[derive(Debug, thiserror::Error)]
pub enum Slide300Error {
    /// A declared category has no matching archetype
    #[error("Configuration gap: category '{0}' has no archetype")]
    ConfigurationGap(String),

    /// Strategic variant requested without an audience
    #[error("Audience required: select a target audience first")]
    AudienceRequired,

    /// Registry colour does not follow the #RRGGBB contract
    #[error("Malformed color in {field}: '{value}'")]
    MalformedColor { field: String, value: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Slide300Error {
    /// Create configuration gap error
    pub fn configuration_gap<S: Into<String>>(category: S) -> Self {
        Self::ConfigurationGap(category.into())
    }

    /// Create malformed color error
    pub fn malformed_color<F: Into<String>, V: Into<String>>(field: F, value: V) -> Self {
        Self::MalformedColor {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create not found error
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }
}

// HTTP response mapping for the JSON shell
impl Slide300Error {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::AudienceRequired => 400,
            Self::NotFound(_) => 404,
            Self::ConfigurationGap(_) => 500,
            Self::MalformedColor { .. } => 500,
            Self::Config(_) => 500,
            Self::Io(_) => 500,
        }
    }

    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigurationGap(_) => "CONFIGURATION_GAP",
            Self::AudienceRequired => "AUDIENCE_REQUIRED",
            Self::MalformedColor { .. } => "MALFORMED_COLOR",
            Self::Config(_) => "CONFIG",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Io(_) => "IO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audience_required_is_client_error() {
        let err = Slide300Error::AudienceRequired;
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "AUDIENCE_REQUIRED");
    }

    #[test]
    fn test_malformed_color_message() {
        let err = Slide300Error::malformed_color("비즈니스.accent", "#12");
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "Malformed color in 비즈니스.accent: '#12'");
    }

    #[test]
    fn test_not_found() {
        let err = Slide300Error::not_found("template 999");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_io_error_conversion() {
        let err: Slide300Error = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken").into();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "IO");
    }
}
