//! Sample passwords showing how a weak password evolves into a strong one.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePassword {
    pub name: &'static str,
    pub description: &'static str,
    pub password: &'static str,
}

/// Ordered from weakest to strongest.
pub static SAMPLE_PASSWORDS: [SamplePassword; 4] = [
    SamplePassword {
        name: "weak",
        description: "Starting with a Basic Password",
        password: "password123",
    },
    SamplePassword {
        name: "moderate",
        description: "Adding Complexity",
        password: "Password123!",
    },
    SamplePassword {
        name: "better",
        description: "Making it Unique",
        password: "Purpl3%Elephant",
    },
    SamplePassword {
        name: "strong",
        description: "The Perfect Password",
        password: "Kj#9mP$vN2xQ",
    },
];

pub fn sample(name: &str) -> Option<&'static SamplePassword> {
    SAMPLE_PASSWORDS.iter().find(|s| s.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_lookup() {
        assert_eq!(sample("strong").map(|s| s.password), Some("Kj#9mP$vN2xQ"));
        assert!(sample("legendary").is_none());
    }
}
