use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_REQUIRED: &str = "Full name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str = "Invalid format. Use 9-15 digits (e.g. +48 123 456 789)";

pub const CONFIRMATION: &str = "Thank you! Your consultation request has been sent successfully.";

const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 9..=15;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9\s.()\-]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Phone,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl LeadForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            full_name: self.full_name.trim().is_empty().then_some(NAME_REQUIRED),
            email: check_email(&self.email),
            phone: check_phone(&self.phone),
        }
    }
}

fn check_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !EMAIL_RE.is_match(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

fn check_phone(phone: &str) -> Option<&'static str> {
    if phone.is_empty() {
        return Some(PHONE_REQUIRED);
    }
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if PHONE_RE.is_match(phone) && PHONE_DIGITS.contains(&digits) {
        None
    } else {
        Some(PHONE_INVALID)
    }
}

/// Per-field validation messages. Each field is cleared on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub full_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::FullName => self.full_name,
            Field::Email => self.email,
            Field::Phone => self.phone,
        }
    }

    /// Returns whether there was anything to clear.
    pub fn clear(&mut self, field: Field) -> bool {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        };
        slot.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, phone: &str) -> LeadForm {
        LeadForm {
            full_name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        let errors = form("Jan Kowalski", "jan@firma.pl", "+48 123 456 789").validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn blank_name_is_required() {
        assert_eq!(form("   ", "a@b.co", "123456789").validate().full_name, Some(NAME_REQUIRED));
    }

    #[test]
    fn email_rules() {
        assert_eq!(check_email(""), Some(EMAIL_REQUIRED));
        assert_eq!(check_email("foo"), Some(EMAIL_INVALID));
        assert_eq!(check_email("foo@bar"), Some(EMAIL_INVALID));
        assert_eq!(check_email("fo o@bar.com"), Some(EMAIL_INVALID));
        assert_eq!(check_email("foo@bar.com"), None);
    }

    #[test]
    fn phone_rules() {
        assert_eq!(check_phone(""), Some(PHONE_REQUIRED));
        assert_eq!(check_phone("123"), Some(PHONE_INVALID));
        assert_eq!(check_phone("+48 123 456 789"), None);
        assert_eq!(check_phone("(555) 123-4567"), None);
        assert_eq!(check_phone("555.123.4567"), None);
        assert_eq!(check_phone("1234567890123456"), Some(PHONE_INVALID));
        assert_eq!(check_phone("48+123456789"), Some(PHONE_INVALID));
        assert_eq!(check_phone("123 456 789 ext"), Some(PHONE_INVALID));
    }

    #[test]
    fn clearing_one_field_leaves_the_others() {
        let mut errors = form("", "foo", "123").validate();
        assert!(errors.clear(Field::Email));
        assert_eq!(errors.email, None);
        assert_eq!(errors.full_name, Some(NAME_REQUIRED));
        assert_eq!(errors.phone, Some(PHONE_INVALID));
        assert!(!errors.clear(Field::Email));
    }
}
