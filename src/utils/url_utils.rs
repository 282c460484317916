use crate::error::AnalysisError;
use url::Url;

/// Prefixes `https://` onto schemeless input and validates the result.
pub fn normalize_url(raw: &str) -> Result<Url, AnalysisError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::InvalidInput("URL is required".to_string()));
    }

    let candidate = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&candidate)
        .map_err(|e| AnalysisError::InvalidInput(format!("Invalid URL '{}': {}", trimmed, e)))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AnalysisError::InvalidInput(format!(
                "Unsupported URL scheme '{}'",
                other
            )))
        }
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(AnalysisError::InvalidInput(format!(
            "URL '{}' has no host",
            trimmed
        )));
    }

    Ok(url)
}

fn has_scheme(input: &str) -> bool {
    input.split_once("://").is_some_and(|(scheme, _)| {
        !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

pub fn is_https(url: &Url) -> bool {
    url.scheme() == "https"
}
