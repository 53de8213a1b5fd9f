//! Tests for authentication endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use medilink::{
    controller::auth::{get_user, login, logout, register},
    model::{
        app::AppState,
        auth::{LoginDto, RegisterDto},
        session::user::SessionUserId,
    },
};
use medilink_test_utils::{fixtures::TEST_PASSWORD, prelude::*};

fn register_body(correo: &str) -> RegisterDto {
    RegisterDto {
        nombre: "Ana García".to_string(),
        correo: correo.to_string(),
        contrasena: "contrasena-segura".to_string(),
        hospital_id: None,
    }
}

async fn auth_setup() -> Result<TestSetup, TestError> {
    test_setup_with_tables!(entity::prelude::Hospital, entity::prelude::AppUser)
}

#[tokio::test]
/// Expect 201 when registering with a fresh email
async fn registers_new_account() -> Result<(), TestError> {
    let test = auth_setup().await?;

    let result = register(
        State(AppState::from(test.db.clone())),
        Json(register_body("ana@example.org")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 409 when the email is already registered
async fn rejects_duplicate_email() -> Result<(), TestError> {
    let test = auth_setup().await?;
    test.insert_user("ana@example.org").await?;

    let result = register(
        State(AppState::from(test.db.clone())),
        Json(register_body("ana@example.org")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 when the registration body fails validation
async fn rejects_invalid_registration() -> Result<(), TestError> {
    let test = auth_setup().await?;

    let mut body = register_body("not-an-email");
    body.contrasena = "corta".to_string();

    let result = register(State(AppState::from(test.db.clone())), Json(body)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 200 and the user id stored in session after login
async fn logs_in_with_valid_credentials() -> Result<(), TestError> {
    let test = auth_setup().await?;
    let user = test.insert_user("ana@example.org").await?;

    let result = login(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Json(LoginDto {
            correo: "ana@example.org".to_string(),
            contrasena: TEST_PASSWORD.to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let session_user = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user, Some(user.id));

    Ok(())
}

#[tokio::test]
/// Expect 401 for a wrong password, with nothing stored in session
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = auth_setup().await?;
    test.insert_user("ana@example.org").await?;

    let result = login(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Json(LoginDto {
            correo: "ana@example.org".to_string(),
            contrasena: "incorrecta-totalmente".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let session_user = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 401 for an unknown email, same as a wrong password
async fn rejects_unknown_email() -> Result<(), TestError> {
    let test = auth_setup().await?;

    let result = login(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Json(LoginDto {
            correo: "nadie@example.org".to_string(),
            contrasena: TEST_PASSWORD.to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 204 and a cleared session after logout
async fn logs_out_and_clears_session() -> Result<(), TestError> {
    let test = auth_setup().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let session_user = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 204 when logging out without ever logging in
async fn logout_without_session_succeeds() -> Result<(), TestError> {
    let test = auth_setup().await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the logged-in user, 401 without a session
async fn returns_current_user() -> Result<(), TestError> {
    let test = auth_setup().await?;
    let user = test.insert_user("ana@example.org").await?;

    let anonymous = get_user(State(AppState::from(test.db.clone())), test.session.clone()).await;
    assert!(anonymous.is_err());
    assert_eq!(
        anonymous.err().unwrap().into_response().status(),
        StatusCode::UNAUTHORIZED
    );

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_user(State(AppState::from(test.db.clone())), test.session.clone()).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 and a cleared session when the account no longer exists
async fn clears_stale_session_user() -> Result<(), TestError> {
    let test = auth_setup().await?;
    SessionUserId::insert(&test.session, 42).await.unwrap();

    let result = get_user(State(AppState::from(test.db.clone())), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let session_user = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user.is_none());

    Ok(())
}
