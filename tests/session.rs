#[cfg(test)]
mod tests {
    use tasklite::libs::session::{AuthError, Credentials, Session, DEFAULT_EMAIL, DEFAULT_PASSWORD};

    #[test]
    fn test_starts_signed_out() {
        assert!(!Session::default().is_signed_in());
    }

    #[test]
    fn test_valid_pair_signs_in() {
        let mut session = Session::default();

        assert_eq!(session.attempt_sign_in(DEFAULT_EMAIL, DEFAULT_PASSWORD), Ok(()));
        assert!(session.is_signed_in());

        // Repeating a successful attempt is harmless
        assert_eq!(session.attempt_sign_in(DEFAULT_EMAIL, DEFAULT_PASSWORD), Ok(()));
        assert!(session.is_signed_in());
    }

    #[test]
    fn test_other_pairs_are_rejected() {
        let attempts = [
            ("", ""),
            (DEFAULT_EMAIL, ""),
            ("", DEFAULT_PASSWORD),
            (DEFAULT_PASSWORD, DEFAULT_EMAIL),
            ("USUARIO@EJEMPLO.COM", DEFAULT_PASSWORD),
            ("usuario@ejemplo.com ", DEFAULT_PASSWORD),
            (DEFAULT_EMAIL, "Password123"),
            (DEFAULT_EMAIL, "password1234"),
        ];

        for (email, password) in attempts {
            let mut session = Session::default();
            assert_eq!(session.attempt_sign_in(email, password), Err(AuthError::InvalidCredentials));
            assert!(!session.is_signed_in(), "{:?}/{:?} must not sign in", email, password);
        }
    }

    #[test]
    fn test_error_message_is_static() {
        let mut session = Session::default();
        let err = session.attempt_sign_in("x", "y").unwrap_err();
        assert_eq!(err.to_string(), "Incorrect email or password.");
    }

    #[test]
    fn test_sign_out_closes_session() {
        let mut session = Session::default();
        session.attempt_sign_in(DEFAULT_EMAIL, DEFAULT_PASSWORD).unwrap();

        session.sign_out();
        assert!(!session.is_signed_in());

        session.sign_out();
        assert!(!session.is_signed_in());
    }

    #[test]
    fn test_configured_pair_replaces_default() {
        let mut session = Session::new(Credentials::new("me@example.com", "s3cret"));

        assert!(session.attempt_sign_in(DEFAULT_EMAIL, DEFAULT_PASSWORD).is_err());
        assert!(session.attempt_sign_in("me@example.com", "s3cret").is_ok());
    }
}
