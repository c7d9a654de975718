use vendo_api::error::ApiServiceError;
use vendo_api::usecase::auth::{
    LoginInput, LoginUseCase, SignupInput, SignupUseCase, issue_access_token,
};
use vendo_auth_types::token::validate_access_token;

use crate::helpers::{MockUserRepo, TEST_JWT_SECRET, test_user};

// ── Signup then login ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_signup_then_login_with_same_credentials() {
    let users = MockUserRepo::empty();
    let users_handle = users.users_handle();

    let signup = SignupUseCase {
        repo: users,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let signed_up = signup
        .execute(SignupInput {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            password: "hunter22".into(),
        })
        .await
        .unwrap();

    let stored = users_handle.lock().unwrap().clone();
    assert_eq!(stored.len(), 1);
    // The hash must never be the password itself.
    assert_ne!(stored[0].password_hash, "hunter22");

    let login = LoginUseCase {
        repo: MockUserRepo::new(stored),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let logged_in = login
        .execute(LoginInput {
            email: "alice@example.com".into(),
            password: "hunter22".into(),
        })
        .await
        .unwrap();

    assert_eq!(logged_in.user.id, signed_up.user.id);
    let info = validate_access_token(&logged_in.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, signed_up.user.id);
}

#[tokio::test]
async fn should_reject_second_signup_with_same_email() {
    let existing = test_user("alice@example.com", "pw");
    let signup = SignupUseCase {
        repo: MockUserRepo::new(vec![existing]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = signup
        .execute(SignupInput {
            name: "Also Alice".into(),
            email: "alice@example.com".into(),
            password: "different".into(),
        })
        .await;
    assert!(matches!(result, Err(ApiServiceError::EmailTaken)));
}

// ── Token validation ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_issue_token_that_validates_against_same_secret() {
    let user = test_user("bob@example.com", "pw");
    let (token, exp) = issue_access_token(&user, TEST_JWT_SECRET).unwrap();
    assert!(!token.is_empty());

    let info = validate_access_token(&token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
    assert_eq!(info.access_token_exp, exp);
}

#[tokio::test]
async fn should_reject_token_signed_with_other_secret() {
    let user = test_user("bob@example.com", "pw");
    let (token, _) = issue_access_token(&user, "another-secret").unwrap();
    assert!(validate_access_token(&token, TEST_JWT_SECRET).is_err());
}
