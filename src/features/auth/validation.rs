//! Field rules shared by the auth forms. The same rules are rendered as native
//! `pattern`/`minlength`/`maxlength` attributes, and checked again before a
//! request is built so a form never posts values the browser would reject.

use regex::Regex;
use std::sync::LazyLock;

pub const EMAIL_MIN_CHARS: usize = 6;
pub const EMAIL_MAX_CHARS: usize = 254;
pub const PASSWORD_MIN_CHARS: usize = 10;
pub const PASSWORD_MAX_CHARS: usize = 72;
pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 30;

/// HTML `pattern` attribute values. Browsers anchor them implicitly and compile
/// them with the `v` flag, which is why `-` is escaped inside classes.
pub const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}";
pub const PASSWORD_PATTERN: &str =
    r"(?=^.{10,72}$)(?=.*[A-Z])(?=.*[0-9])(?=.*[a-z])(?=.*[^\w\s]).*";
pub const NAME_PATTERN: &str = r"[a-zA-Zа-яА-ЯёЁ\s\-]{2,30}";

pub const EMAIL_HINT: &str = "Please enter a valid email (for example: example@domain.com).";
pub const PASSWORD_HINT: &str =
    "Password: 10-72 characters with at least 1 uppercase letter, 1 lowercase letter, 1 digit and 1 special character.";
pub const NAME_HINT: &str =
    "Name must be 2 to 30 characters long and contain only English or Russian letters.";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{EMAIL_PATTERN}$")).expect("email pattern compiles")
});

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{NAME_PATTERN}$")).expect("name pattern compiles"));

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let chars = email.chars().count();
    if !(EMAIL_MIN_CHARS..=EMAIL_MAX_CHARS).contains(&chars) || !EMAIL_RE.is_match(email) {
        return Err(EMAIL_HINT);
    }
    Ok(())
}

/// The `regex` crate has no lookahead, so the password policy is checked
/// class by class. "Special" follows the `[^\w\s]` class of the HTML
/// `pattern`: anything that is not an ASCII word character and not whitespace.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    let chars = password.chars().count();
    if !(PASSWORD_MIN_CHARS..=PASSWORD_MAX_CHARS).contains(&chars)
        || password.contains(['\n', '\r'])
    {
        return Err(PASSWORD_HINT);
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password
        .chars()
        .any(|c| !(c.is_ascii_alphanumeric() || c == '_') && !c.is_whitespace());

    if has_upper && has_lower && has_digit && has_special {
        Ok(())
    } else {
        Err(PASSWORD_HINT)
    }
}

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(NAME_HINT)
    }
}

/// Live hint shown under the repeat field while typing. Stays quiet until both
/// fields have content.
pub fn password_mismatch(password: &str, repeat: &str) -> Option<&'static str> {
    (!password.is_empty() && !repeat.is_empty() && password != repeat).then_some(PASSWORDS_DIFFER)
}

/// Pre-submit check: any difference blocks the request, including an empty
/// repeat field.
pub fn ensure_passwords_match(password: &str, repeat: &str) -> Result<(), &'static str> {
    if password == repeat {
        Ok(())
    } else {
        Err(PASSWORDS_DIFFER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rules() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last+tag@mail.example.org").is_ok());
        assert_eq!(validate_email("a@b.c"), Err(EMAIL_HINT));
        assert_eq!(validate_email("user@example"), Err(EMAIL_HINT));
        assert_eq!(validate_email("user example@mail.com"), Err(EMAIL_HINT));

        let local = "a".repeat(250);
        assert_eq!(validate_email(&format!("{local}@example.com")), Err(EMAIL_HINT));
    }

    #[test]
    fn password_requires_every_class() {
        assert!(validate_password("Str0ng!Passw0rd").is_ok());
        assert_eq!(validate_password("Sh0rt!"), Err(PASSWORD_HINT));
        assert_eq!(validate_password("n0upper!password"), Err(PASSWORD_HINT));
        assert_eq!(validate_password("N0LOWER!PASSWORD"), Err(PASSWORD_HINT));
        assert_eq!(validate_password("NoDigits!Password"), Err(PASSWORD_HINT));
        assert_eq!(validate_password("NoSpecial1Password"), Err(PASSWORD_HINT));
    }

    #[test]
    fn password_special_class_matches_html_pattern() {
        // Underscore is a word character and whitespace is excluded.
        assert_eq!(validate_password("Under_score1x"), Err(PASSWORD_HINT));
        assert_eq!(validate_password("With Space1xx"), Err(PASSWORD_HINT));
        // Non-ASCII letters are outside `\w` and count as special.
        assert!(validate_password("Pass1wordЖx").is_ok());
    }

    #[test]
    fn password_length_bounds() {
        let max = format!("Aa1!{}", "x".repeat(PASSWORD_MAX_CHARS - 4));
        assert!(validate_password(&max).is_ok());
        let over = format!("{max}x");
        assert_eq!(validate_password(&over), Err(PASSWORD_HINT));
        assert_eq!(validate_password("Aa1!xxxx\nxx"), Err(PASSWORD_HINT));
    }

    #[test]
    fn name_accepts_latin_and_cyrillic() {
        assert!(validate_name("Anna").is_ok());
        assert!(validate_name("Анна-Мария").is_ok());
        assert!(validate_name("Jean Luc").is_ok());
        assert_eq!(validate_name("A"), Err(NAME_HINT));
        assert_eq!(validate_name("R2D2"), Err(NAME_HINT));
        assert_eq!(validate_name(&"a".repeat(NAME_MAX_CHARS + 1)), Err(NAME_HINT));
    }

    #[test]
    fn mismatch_hint_waits_for_both_fields() {
        assert_eq!(password_mismatch("", ""), None);
        assert_eq!(password_mismatch("secret", ""), None);
        assert_eq!(password_mismatch("", "secret"), None);
        assert_eq!(password_mismatch("secret", "secret"), None);
        assert_eq!(password_mismatch("secret", "secreT"), Some(PASSWORDS_DIFFER));
    }

    #[test]
    fn pre_submit_check_blocks_any_difference() {
        assert!(ensure_passwords_match("secret", "secret").is_ok());
        assert_eq!(ensure_passwords_match("secret", ""), Err(PASSWORDS_DIFFER));
    }
}
