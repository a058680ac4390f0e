//! Site content loading: the builtin copy, or an operator-supplied TOML
//! file with the same shape.

use std::path::Path;

use clinic_domain::content::SiteContent;
use clinic_domain::error::ClinicError;

/// Content loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// File I/O failure.
    #[error("failed to read content file")]
    Io(#[from] std::io::Error),
    /// TOML parse failure.
    #[error("failed to parse content file")]
    Parse(#[from] toml::de::Error),
    /// The content parsed but breaks a catalog invariant.
    #[error("invalid site content")]
    Invalid(#[from] ClinicError),
}

/// Load content from `path`, or the builtin copy when `None`.
///
/// # Errors
///
/// Returns [`ContentError`] if the file cannot be read, parsed or validated.
pub fn load(path: Option<&Path>) -> Result<SiteContent, ContentError> {
    match path {
        None => Ok(clinic_domain::builtin::content()),
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            parse(&raw)
        }
    }
}

fn parse(raw: &str) -> Result<SiteContent, ContentError> {
    let content: SiteContent = toml::from_str(raw)?;
    content.catalog()?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_builtin_content() {
        let content = load(None).unwrap();
        assert_eq!(content.clinic.name, "Osteopraktik");
        assert_eq!(content.services.len(), 5);
    }

    #[test]
    fn should_parse_content_in_builtin_shape() {
        let mut content = clinic_domain::builtin::content();
        content.clinic.name = "Osteopraktik Nord".to_string();
        content.services.truncate(2);
        let raw = toml::to_string(&content).unwrap();

        let parsed = parse(&raw).unwrap();
        assert_eq!(parsed.clinic.name, "Osteopraktik Nord");
        assert_eq!(parsed.services.len(), 2);
    }

    #[test]
    fn should_reject_content_without_services() {
        let mut content = clinic_domain::builtin::content();
        content.services.clear();
        let raw = toml::to_string(&content).unwrap();

        assert!(matches!(parse(&raw), Err(ContentError::Invalid(_))));
    }

    #[test]
    fn should_report_parse_error_for_malformed_file() {
        assert!(matches!(
            parse("[clinic]\nname = 42"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn should_report_missing_file() {
        let result = load(Some(Path::new("does-not-exist/site.toml")));
        assert!(matches!(result, Err(ContentError::Io(_))));
    }
}
