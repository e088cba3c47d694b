//! Validation rules for schema fields

use super::value::FieldValue;

/// Text formats checked without a regex engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Email,
    Url,
    Phone,
}

impl TextFormat {
    pub fn check(&self, value: &str) -> bool {
        let value = value.trim();
        match self {
            Self::Email => {
                let mut parts = value.splitn(2, '@');
                match (parts.next(), parts.next()) {
                    (Some(local), Some(domain)) => {
                        !local.is_empty()
                            && domain.contains('.')
                            && !domain.starts_with('.')
                            && !domain.ends_with('.')
                            && !value.contains(char::is_whitespace)
                    }
                    _ => false,
                }
            }
            Self::Url => {
                (value.starts_with("http://") || value.starts_with("https://"))
                    && value.len() > "https://".len()
                    && !value.contains(char::is_whitespace)
            }
            Self::Phone => {
                let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
                digits >= 7
                    && value
                        .chars()
                        .all(|c| c.is_ascii_digit() || "+-() ".contains(c))
            }
        }
    }
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub format: Option<TextFormat>,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            format: None,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        let mut rules = Self::none();
        rules.required = true;
        rules
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(self.message(format!("{} is required", field_label)));
        }
        if value.is_empty() {
            return Ok(());
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(self.message(format!(
                    "{} must be at least {} characters",
                    field_label, min
                )));
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                return Err(self.message(format!(
                    "{} must not exceed {} characters",
                    field_label, max
                )));
            }
        }

        if let Some(format) = self.format {
            if !format.check(value) {
                let what = match format {
                    TextFormat::Email => "an email address",
                    TextFormat::Url => "a URL",
                    TextFormat::Phone => "a phone number",
                };
                return Err(self.message(format!("{} must be {}", field_label, what)));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(self.message(format!("{} must be at least {}", field_label, min)));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(self.message(format!("{} must be at most {}", field_label, max)));
            }
        }
        Ok(())
    }

    /// Validate any field value
    pub fn validate(&self, value: &FieldValue, field_label: &str) -> Result<(), String> {
        match value {
            FieldValue::Null => {
                if self.required {
                    Err(self.message(format!("{} is required", field_label)))
                } else {
                    Ok(())
                }
            }
            FieldValue::Text(s) => self.validate_string(s, field_label),
            FieldValue::Number(n) => self.validate_number(*n, field_label),
            FieldValue::List(items) if self.required && items.is_empty() => {
                Err(self.message(format!("{} is required", field_label)))
            }
            _ => Ok(()),
        }
    }

    fn message(&self, fallback: String) -> String {
        self.custom_error.map(str::to_string).unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_text_and_null() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("   ", "Title").is_err());
        assert!(rules.validate(&FieldValue::Null, "Title").is_err());
        assert!(rules.validate_string("Pilot", "Title").is_ok());
    }

    #[test]
    fn optional_empty_text_skips_format_checks() {
        let rules = ValidationRules {
            format: Some(TextFormat::Email),
            ..ValidationRules::none()
        };
        assert!(rules.validate_string("", "Email").is_ok());
        assert!(rules.validate_string("nope", "Email").is_err());
        assert!(rules.validate_string("crew@studio.io", "Email").is_ok());
    }

    #[test]
    fn number_bounds() {
        let rules = ValidationRules {
            min: Some(0.0),
            max: Some(5.0),
            ..ValidationRules::none()
        };
        assert!(rules.validate_number(-1.0, "Rating").is_err());
        assert!(rules.validate_number(5.0, "Rating").is_ok());
        assert_eq!(
            rules.validate_number(6.0, "Rating").unwrap_err(),
            "Rating must be at most 5"
        );
    }

    #[test]
    fn custom_error_overrides_message() {
        let rules = ValidationRules {
            custom_error: Some("Pick a budget code"),
            ..ValidationRules::required()
        };
        assert_eq!(rules.validate_string("", "Code").unwrap_err(), "Pick a budget code");
    }

    #[test]
    fn text_formats() {
        assert!(TextFormat::Url.check("https://example.com"));
        assert!(!TextFormat::Url.check("example.com"));
        assert!(TextFormat::Phone.check("+1 (555) 010-9999"));
        assert!(!TextFormat::Phone.check("call me"));
        assert!(!TextFormat::Email.check("a@b."));
    }

    #[test]
    fn required_list_must_not_be_empty() {
        let rules = ValidationRules::required();
        assert!(rules.validate(&FieldValue::List(vec![]), "Tags").is_err());
        assert!(rules
            .validate(&FieldValue::List(vec!["vip".into()]), "Tags")
            .is_ok());
    }
}
