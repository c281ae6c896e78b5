//! Denylist section - rejects commonly used passwords outright.

use crate::policy::PasswordPolicy;

pub const DENYLIST_MESSAGE: &str =
    "❌ This is a commonly used password. Please choose something more unique.";

/// Checks if the password is on the policy's denylist.
///
/// # Returns
/// - `Some(reason)` if the password is denylisted
/// - `None` otherwise
pub fn denylist_section(password: &str, policy: &PasswordPolicy) -> Option<&'static str> {
    policy.is_denylisted(password).then_some(DENYLIST_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denylist_section_common_password() {
        let policy = PasswordPolicy::builtin();
        assert_eq!(denylist_section("Password", policy), Some(DENYLIST_MESSAGE));
        assert_eq!(denylist_section("ABC123", policy), Some(DENYLIST_MESSAGE));
    }

    #[test]
    fn test_denylist_section_strong_password() {
        let policy = PasswordPolicy::builtin();
        assert_eq!(denylist_section("CorrectHorseBatteryStaple!123", policy), None);
        assert_eq!(denylist_section("password1234", policy), None);
    }
}
