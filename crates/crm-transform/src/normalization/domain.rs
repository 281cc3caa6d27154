//! Website → domain extraction.

use crm_model::{CleaningStep, StepField};
use url::{Host, ParseError};

use super::Cleaned;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";
const WWW_PREFIX: &str = "www.";

/// Reduce a website value to its lowercase network location.
///
/// A step is produced only when the result differs from the trimmed,
/// lowercased input. Values that cannot be parsed as a URL fall back to
/// literal prefix stripping and are always logged.
///
/// # Example
///
/// ```
/// use crm_transform::clean_domain;
///
/// let cleaned = clean_domain("https://www.terrascend.com/");
/// assert_eq!(cleaned.value, "terrascend.com");
/// assert!(cleaned.is_changed());
///
/// assert!(!clean_domain("ayrwellness.com").is_changed());
/// ```
pub fn clean_domain(raw: &str) -> Cleaned {
    let original = raw.trim();
    if original.is_empty() {
        return Cleaned::unchanged(String::new());
    }

    let mut action = String::from("Extract domain");
    let url_text = if original.starts_with(HTTP_PREFIX) || original.starts_with(HTTPS_PREFIX) {
        original.to_string()
    } else {
        action.push_str(", Add https://");
        format!("{HTTPS_PREFIX}{original}")
    };

    match network_location(&url_text) {
        Ok(location) => {
            let domain = location.replacen(WWW_PREFIX, "", 1).to_lowercase();
            if domain == original.to_lowercase() {
                return Cleaned::unchanged(domain);
            }
            action.push_str(", Remove www/protocols");
            let step = CleaningStep::new(StepField::Domain, original, Some(domain.clone()), action);
            Cleaned::changed(domain, step)
        }
        Err(error) => {
            tracing::debug!(%error, "website is not a valid url, using fallback cleaning");
            let domain = fallback_domain(original);
            action.push_str(", Fallback cleaning");
            let step = CleaningStep::new(StepField::Domain, original, Some(domain.clone()), action);
            Cleaned::changed(domain, step)
        }
    }
}

/// Authority of `url_text` as typed, or its path when the authority is empty.
///
/// `url_text` always starts with a scheme. Only bracketed IPv6 literals are
/// checked; every other host is taken verbatim.
fn network_location(url_text: &str) -> Result<&str, ParseError> {
    let rest = url_text
        .split_once("://")
        .map_or(url_text, |(_, rest)| rest);
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let (authority, tail) = rest.split_at(end);
    check_brackets(authority)?;
    if !authority.is_empty() {
        return Ok(authority);
    }
    let path_end = tail.find(['?', '#']).unwrap_or(tail.len());
    Ok(&tail[..path_end])
}

fn check_brackets(authority: &str) -> Result<(), ParseError> {
    match (authority.find('['), authority.find(']')) {
        (None, None) => Ok(()),
        (Some(open), Some(close)) if open < close => {
            Host::parse(&authority[open..=close]).map(|_| ())
        }
        _ => Err(ParseError::InvalidIpv6Address),
    }
}

fn fallback_domain(original: &str) -> String {
    let stripped = original
        .replace(HTTP_PREFIX, "")
        .replace(HTTPS_PREFIX, "")
        .replace(WWW_PREFIX, "");
    stripped
        .split('/')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_domain_is_unchanged() {
        let cleaned = clean_domain("ayrwellness.com");
        assert_eq!(cleaned.value, "ayrwellness.com");
        assert!(cleaned.step.is_none());
    }

    #[test]
    fn protocol_www_and_path_are_removed() {
        let cleaned = clean_domain("https://www.terrascend.com/");
        assert_eq!(cleaned.value, "terrascend.com");
        let step = cleaned.step.expect("domain step");
        assert_eq!(step.field, StepField::Domain);
        assert_eq!(step.original, "https://www.terrascend.com/");
        assert_eq!(step.cleaned.as_deref(), Some("terrascend.com"));
        assert_eq!(step.action, "Extract domain, Remove www/protocols");
    }

    #[test]
    fn scheme_is_added_before_parsing() {
        let cleaned = clean_domain("www.Example.com/about");
        assert_eq!(cleaned.value, "example.com");
        let step = cleaned.step.expect("domain step");
        assert_eq!(
            step.action,
            "Extract domain, Add https://, Remove www/protocols"
        );
    }

    #[test]
    fn case_only_difference_is_not_logged() {
        let cleaned = clean_domain("  AyrWellness.com ");
        assert_eq!(cleaned.value, "ayrwellness.com");
        assert!(cleaned.step.is_none());
    }

    #[test]
    fn only_first_www_is_stripped() {
        assert_eq!(clean_domain("www.www.example.com").value, "www.example.com");
    }

    #[test]
    fn ports_are_kept_as_typed() {
        assert_eq!(clean_domain("http://intranet.acme.io:8080/x").value, "intranet.acme.io:8080");
        assert_eq!(clean_domain("https://acme.com:443/").value, "acme.com:443");
    }

    #[test]
    fn host_text_is_not_rewritten() {
        for input in ["1234", "192.168.1", "info@acme.com", "%41cme.com", "exa mple.com"] {
            let cleaned = clean_domain(input);
            assert_eq!(cleaned.value, input, "{input}");
            assert!(cleaned.step.is_none(), "{input}");
        }
        let cleaned = clean_domain("Bücher.de");
        assert_eq!(cleaned.value, "bücher.de");
        assert!(cleaned.step.is_none());
    }

    #[test]
    fn query_and_fragment_are_dropped() {
        assert_eq!(clean_domain("acme.com?ref=hs").value, "acme.com");
        assert_eq!(clean_domain("https://acme.com#about").value, "acme.com");
    }

    #[test]
    fn ipv6_literal_is_accepted() {
        let cleaned = clean_domain("http://[::1]:8080/");
        assert_eq!(cleaned.value, "[::1]:8080");
        assert_eq!(
            cleaned.step.expect("domain step").action,
            "Extract domain, Remove www/protocols"
        );
    }

    #[test]
    fn blank_input_yields_empty_value() {
        assert_eq!(clean_domain(""), Cleaned::unchanged(""));
        assert_eq!(clean_domain("   "), Cleaned::unchanged(""));
    }

    #[test]
    fn unbalanced_brackets_use_fallback() {
        let cleaned = clean_domain("http://[::1/path");
        assert_eq!(cleaned.value, "[::1");
        let step = cleaned.step.expect("fallback step");
        assert_eq!(step.action, "Extract domain, Fallback cleaning");
    }

    #[test]
    fn fallback_strips_every_prefix_occurrence() {
        assert_eq!(fallback_domain("https://www.Bad Host.com/x"), "bad host.com");
    }
}
