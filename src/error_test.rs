use super::*;

#[test]
fn status_error_formats_code() {
    assert_eq!(ApiError::Status(404).to_string(), "request failed with status 404");
}

#[test]
fn rejected_error_shows_server_message_verbatim() {
    let err = ApiError::Rejected("Token inválido".to_owned());
    assert_eq!(err.to_string(), "Token inválido");
}

#[test]
fn session_errors_are_user_facing_spanish() {
    assert!(SessionError::Expired.to_string().contains("expirado"));
    assert!(SessionError::InvalidToken.to_string().contains("inválida"));
}

#[test]
fn too_large_image_names_the_cap() {
    assert_eq!(ImageError::TooLarge { max_mb: 5 }.to_string(), "La imagen supera 5 MB.");
}
