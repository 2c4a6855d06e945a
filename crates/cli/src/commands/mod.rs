//! CLI command implementations.

use propbind_config::constants::REDACTED;
use propbind_config::is_secret_property;

pub mod check;
pub mod get;
pub mod ls;
pub mod show;

/// Print formatted output, ending it with exactly one newline.
pub(crate) fn print_output(output: &str) {
    if output.is_empty() || output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
}

/// True if the value of `key` must be replaced by `REDACTED` in output.
pub(crate) fn should_mask(key: &str, show_secrets: bool) -> bool {
    !show_secrets && is_secret_property(key)
}

/// `value`, or `REDACTED` when `key` looks secret and secrets are hidden.
pub(crate) fn mask_secret(key: &str, value: &str, show_secrets: bool) -> String {
    if should_mask(key, show_secrets) {
        REDACTED.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_values_are_masked_by_default() {
        assert_eq!(mask_secret("DB_PASSWORD", "hunter2", false), REDACTED);
        assert_eq!(mask_secret("api_key", "abc", false), REDACTED);
        assert_eq!(mask_secret("DB_PASSWORD", "hunter2", true), "hunter2");
        assert_eq!(mask_secret("DB_URL", "jdbc:x", false), "jdbc:x");
    }
}
