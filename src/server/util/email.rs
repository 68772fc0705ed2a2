/// Normalises an email for whitelist storage and membership checks: trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
