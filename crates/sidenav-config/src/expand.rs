//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}`, `${VAR:-default}`, `$VAR` and a leading `~`.
///
/// `field` names the config key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::full(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("docs", "docs.source_dir").unwrap(), "docs");
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SIDENAV_EXPAND_UNSET");
        }
        assert_eq!(
            expand_env("${SIDENAV_EXPAND_UNSET:-content}/docs", "docs.source_dir").unwrap(),
            "content/docs"
        );
    }

    #[test]
    fn test_set_variable_expanded() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SIDENAV_EXPAND_SET", "site");
        }
        assert_eq!(
            expand_env("${SIDENAV_EXPAND_SET}/sidebar.json", "output.path").unwrap(),
            "site/sidebar.json"
        );
        unsafe {
            std::env::remove_var("SIDENAV_EXPAND_SET");
        }
    }

    #[test]
    fn test_missing_variable_errors_with_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SIDENAV_EXPAND_MISSING");
        }
        let err = expand_env("${SIDENAV_EXPAND_MISSING}", "output.path").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("SIDENAV_EXPAND_MISSING"), "{msg}");
        assert!(msg.contains("output.path"), "{msg}");
    }
}
