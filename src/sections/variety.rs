//! Character variety section - mixed case, digits and special characters.

use crate::policy::{CharClass, PasswordPolicy};

pub const CASE_MESSAGE: &str = "❌ Include both uppercase and lowercase letters.";
pub const DIGIT_MESSAGE: &str = "❌ Add at least one number (0-9).";
pub const SPECIAL_MESSAGE: &str = "❌ Include at least one special character (!@#$%^&*).";

fn has_class(chars: &[char], class: CharClass) -> bool {
    chars.iter().any(|&c| class.contains(c))
}

pub fn has_mixed_case(chars: &[char], _policy: &PasswordPolicy) -> bool {
    has_class(chars, CharClass::Uppercase) && has_class(chars, CharClass::Lowercase)
}

pub fn has_digit(chars: &[char], _policy: &PasswordPolicy) -> bool {
    has_class(chars, CharClass::Digit)
}

/// Only `!@#$%^&*` count; other punctuation does not.
pub fn has_special(chars: &[char], _policy: &PasswordPolicy) -> bool {
    has_class(chars, CharClass::Special)
}
