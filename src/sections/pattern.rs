//! Pattern analysis section - detects repetitive and sequential patterns.

use crate::policy::PasswordPolicy;

pub const REPETITION_MESSAGE: &str = "❌ Avoid repeating characters (e.g., 'aaa').";
pub const SEQUENTIAL_LETTERS_MESSAGE: &str = "❌ Avoid sequential letters (e.g., 'abc').";
pub const SEQUENTIAL_DIGITS_MESSAGE: &str = "❌ Avoid sequential numbers (e.g., '123').";

/// True when any character appears three or more times in a row.
pub fn has_repeated_run(chars: &[char], _policy: &PasswordPolicy) -> bool {
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

/// True when three ASCII letters ascend by one, ignoring case (`abc`, `xYz`).
pub fn has_sequential_letters(chars: &[char], _policy: &PasswordPolicy) -> bool {
    chars.windows(3).any(|w| {
        w.iter().all(char::is_ascii_alphabetic)
            && ascending_by_one(w.iter().map(|c| c.to_ascii_lowercase() as u32))
    })
}

/// True when three ASCII digits ascend by one (`123`, `789`).
pub fn has_sequential_digits(chars: &[char], _policy: &PasswordPolicy) -> bool {
    chars.windows(3).any(|w| {
        w.iter().all(char::is_ascii_digit) && ascending_by_one(w.iter().filter_map(|c| c.to_digit(10)))
    })
}

fn ascending_by_one(mut values: impl Iterator<Item = u32>) -> bool {
    let Some(mut prev) = values.next() else {
        return false;
    };
    for value in values {
        if value != prev + 1 {
            return false;
        }
        prev = value;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(test: fn(&[char], &PasswordPolicy) -> bool, pwd: &str) -> bool {
        let chars: Vec<char> = pwd.chars().collect();
        test(&chars, PasswordPolicy::builtin())
    }

    #[test]
    fn test_pattern_repetitive_chars() {
        assert!(check(has_repeated_run, "xx!!!yy"));
        assert!(check(has_repeated_run, "\n\n\n"));
        assert!(!check(has_repeated_run, "aabbaabb"));
    }

    #[test]
    fn test_pattern_sequential_letters() {
        assert!(check(has_sequential_letters, "zzabczz"));
        assert!(check(has_sequential_letters, "xYz"));
        assert!(!check(has_sequential_letters, "cba"));
        assert!(!check(has_sequential_letters, "ace"));
        // '[' follows 'Z' in ASCII but is not a letter
        assert!(!check(has_sequential_letters, "YZ["));
    }

    #[test]
    fn test_pattern_sequential_digits() {
        assert!(check(has_sequential_digits, "test789"));
        assert!(!check(has_sequential_digits, "321"));
        assert!(!check(has_sequential_digits, "890"));
        assert!(!check(has_sequential_digits, "1a2b3"));
    }

    #[test]
    fn test_pattern_too_short() {
        for test in [has_repeated_run, has_sequential_letters, has_sequential_digits] {
            assert!(!check(test, "ab"));
            assert!(!check(test, ""));
        }
    }
}
