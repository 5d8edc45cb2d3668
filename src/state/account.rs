//! Input checks for the login and password-reset forms.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

/// Shortest password accepted by the reset form.
pub const MIN_PASSWORD_LEN: usize = 8;

pub const EMAIL_REQUIRED: &str = "El email es obligatorio.";
pub const EMAIL_INVALID: &str = "Ingresá un email válido.";
pub const PASSWORD_REQUIRED: &str = "La contraseña es obligatoria.";
pub const PASSWORD_TOO_SHORT: &str = "La contraseña debe tener al menos 8 caracteres.";
pub const PASSWORD_MISMATCH: &str = "Las contraseñas no coinciden.";

/// `local@domain.tld` with no whitespace and a non-empty part on each side.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty() && !domain.contains('@')
}

/// Trim and check an email address.
///
/// # Errors
///
/// A user-facing message when the address is missing or malformed.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    if !looks_like_email(email) {
        return Err(EMAIL_INVALID);
    }
    Ok(email.to_owned())
}

/// Login only needs a plausible email and some password.
///
/// # Errors
///
/// The first problem found.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = validate_email(email)?;
    if password.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    Ok((email, password.to_owned()))
}

/// Check a new password and its confirmation.
///
/// # Errors
///
/// The first problem found.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<String, &'static str> {
    if password.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(password.to_owned())
}
