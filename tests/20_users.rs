mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_rejects_invalid_payload() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/users/create", server.base_url))
        .json(&json!({
            "email": "not-an-email",
            "password": "abc",
            "firstName": "A",
            "lastName": "B",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["errors"]["email"], "Invalid email format");
    assert_eq!(body["errors"]["password"], "Password must be at least 6 characters");
    Ok(())
}

#[tokio::test]
async fn create_rejects_malformed_json() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/users/create", server.base_url))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<serde_json::Value>().await?;
    assert!(body.get("error").is_some(), "body should have 'error': {}", body);
    Ok(())
}

#[tokio::test]
async fn user_lifecycle() -> Result<()> {
    if !common::database_available() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (user, token) = common::create_user_and_login(server, "lifecycle").await?;
    let user_id = user["id"].as_str().unwrap();
    let email = user["email"].as_str().unwrap().to_string();

    // the hash never leaks out of any response
    assert!(user.get("password").is_none(), "create leaked password: {}", user);

    // fetch by id
    let res = client
        .get(format!("{}/users/{}", server.base_url, user_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let fetched = res.json::<serde_json::Value>().await?;
    assert_eq!(fetched["email"], email.as_str());
    assert!(fetched.get("password").is_none());

    // fetch by email
    let res = client
        .get(format!("{}/users/email/{}", server.base_url, email))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let by_email = res.json::<serde_json::Value>().await?;
    assert_eq!(by_email["id"], user_id);

    // update
    let res = client
        .put(format!("{}/users/{}", server.base_url, user_id))
        .bearer_auth(&token)
        .json(&json!({ "firstName": "Renamed" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = res.json::<serde_json::Value>().await?;
    assert_eq!(updated["firstName"], "Renamed");
    assert_eq!(updated["lastName"], "User");

    // delete, then the id is gone
    let res = client
        .delete(format!("{}/users/{}", server.base_url, user_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/users/{}", server.base_url, user_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "User not found");

    Ok(())
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() -> Result<()> {
    if !common::database_available() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (user, _token) = common::create_user_and_login(server, "badpass").await?;
    let email = user["email"].as_str().unwrap();

    let res = client
        .post(format!("{}/users/login", server.base_url))
        .json(&json!({ "email": email, "password": "wrong-password" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Invalid credentials");
    Ok(())
}

#[tokio::test]
async fn login_with_unknown_email_is_unauthorized() -> Result<()> {
    if !common::database_available() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/users/login", server.base_url))
        .json(&json!({
            "email": common::unique_email("nobody"),
            "password": "whatever-pass",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Invalid credentials");
    Ok(())
}

#[tokio::test]
async fn duplicate_email_is_rejected() -> Result<()> {
    if !common::database_available() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (user, _token) = common::create_user_and_login(server, "dup").await?;
    let email = user["email"].as_str().unwrap();

    let res = client
        .post(format!("{}/users/create", server.base_url))
        .json(&json!({
            "email": email,
            "password": "another-pass",
            "firstName": "Dup",
            "lastName": "User",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Resource already exists");
    Ok(())
}

#[tokio::test]
async fn get_by_id_rejects_malformed_uuid() -> Result<()> {
    if !common::database_available() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (_user, token) = common::create_user_and_login(server, "badid").await?;

    let res = client
        .get(format!("{}/users/not-a-uuid", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Invalid id");
    Ok(())
}
