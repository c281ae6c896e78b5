//! Length section - graded on the minimum and recommended lengths.

use crate::policy::PasswordPolicy;

pub const LENGTH_MESSAGE: &str =
    "❌ Password should be at least 8 characters long (12+ recommended).";

pub fn meets_recommended_length(chars: &[char], policy: &PasswordPolicy) -> bool {
    chars.len() >= policy.recommended_length()
}

pub fn meets_min_length(chars: &[char], policy: &PasswordPolicy) -> bool {
    chars.len() >= policy.min_length()
}
