use regex::Regex;
use std::sync::LazyLock;

// Anchored at the start only: anything after a valid-looking prefix is accepted.
static EMAIL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email pattern is a valid regex")
});

/// Returns true if `email` starts with `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PREFIX.is_match(email)
}

/// True when every field is filled in and the email looks valid.
pub fn customer_ready(name: &str, email: &str, address: &str) -> bool {
    !name.trim().is_empty()
        && !email.trim().is_empty()
        && !address.trim().is_empty()
        && is_valid_email(email)
}
