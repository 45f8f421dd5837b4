//! Password acceptance policy for new accounts.

use std::fmt;

use docesabor_core::config::AuthConfig;
use docesabor_core::error::AppError;

/// A single rule a candidate password broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyViolation {
    /// Fewer characters than the configured minimum.
    TooShort {
        /// The configured minimum.
        min_length: usize,
    },
    /// No character in `a-z`.
    MissingLowercase,
    /// No character in `A-Z`.
    MissingUppercase,
    /// No character in `0-9`.
    MissingDigit,
    /// No character outside the three classes above.
    MissingSymbol,
}

impl fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { min_length } => {
                write!(f, "Password must have at least {min_length} characters")
            }
            Self::MissingLowercase => write!(f, "Password must contain a lowercase letter"),
            Self::MissingUppercase => write!(f, "Password must contain an uppercase letter"),
            Self::MissingDigit => write!(f, "Password must contain a digit"),
            Self::MissingSymbol => write!(f, "Password must contain a symbol"),
        }
    }
}

/// Validates candidate passwords before they are hashed.
///
/// Every broken rule is reported, not just the first one.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// Minimum password length, in characters.
    min_length: usize,
}

impl PasswordPolicy {
    /// Creates a policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Lists every rule the password breaks, in a stable order.
    pub fn violations(&self, password: &str) -> Vec<PolicyViolation> {
        let (mut lower, mut upper, mut digit, mut symbol) = (false, false, false, false);
        for c in password.chars() {
            if c.is_ascii_lowercase() {
                lower = true;
            } else if c.is_ascii_uppercase() {
                upper = true;
            } else if c.is_ascii_digit() {
                digit = true;
            } else {
                symbol = true;
            }
        }

        let mut violations = Vec::new();
        if password.chars().count() < self.min_length {
            violations.push(PolicyViolation::TooShort {
                min_length: self.min_length,
            });
        }
        if !lower {
            violations.push(PolicyViolation::MissingLowercase);
        }
        if !upper {
            violations.push(PolicyViolation::MissingUppercase);
        }
        if !digit {
            violations.push(PolicyViolation::MissingDigit);
        }
        if !symbol {
            violations.push(PolicyViolation::MissingSymbol);
        }
        violations
    }

    /// Accepts the password or returns a validation error listing every
    /// broken rule.
    pub fn check(&self, password: &str) -> Result<(), AppError> {
        let violations = self.violations(password);
        if violations.is_empty() {
            return Ok(());
        }
        Err(AppError::validation_issues(
            "Password does not meet the requirements",
            violations.iter().map(ToString::to_string),
        ))
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(&AuthConfig::default())
    }
}
