//! End-to-end checks of the CLI actions against a mocked API.
//!
//! Each test parses real arguments, dispatches them to an `Action` and runs it,
//! so the command tree, the session bootstrap and the feature clients are
//! exercised together.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use anyhow::Result;
use projectdesk::cli::{actions::Action, commands, dispatch};
use serde_json::json;
use std::net::TcpListener;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn action(server: &MockServer, args: &[&str]) -> Action {
    let uri = server.uri();
    let mut argv = vec!["projectdesk"];
    argv.extend_from_slice(args);
    argv.extend_from_slice(&["--api-url", uri.as_str()]);

    temp_env::with_vars_unset(
        [
            "PROJECTDESK_API_BASE_URL",
            "PROJECTDESK_TIMEOUT_MS",
            "PROJECTDESK_EMAIL",
            "PROJECTDESK_PASSWORD",
            "PROJECTDESK_LOG_LEVEL",
        ],
        || {
            let matches = commands::new().get_matches_from(argv.iter().copied());
            dispatch::handler(&matches).expect("dispatch failed")
        },
    )
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/users/login"))
        .and(body_json(json!({"email": "a@b.com", "password": "x"})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=s1; Path=/; HttpOnly")
                .set_body_json(json!({"user": {"id": 7, "name": "Ann", "email": "a@b.com"}})),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_action_posts_credentials() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_login(&server).await;

    action(&server, &["login", "--email", "a@b.com", "--password", "x"])
        .execute()
        .await
}

#[tokio::test]
async fn login_action_requires_password() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    let result = action(&server, &["login", "--email", "a@b.com"])
        .execute()
        .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("--password"));
    Ok(())
}

#[tokio::test]
async fn projects_list_logs_in_first_and_reuses_cookie() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(query_param("search", "docs"))
        .and(wiremock::matchers::header("cookie", "session=s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "Docs"}])))
        .expect(1)
        .mount(&server)
        .await;

    action(
        &server,
        &[
            "projects",
            "list",
            "--search",
            "docs",
            "--email",
            "a@b.com",
            "--password",
            "x",
        ],
    )
    .execute()
    .await
}

#[tokio::test]
async fn whoami_without_credentials_checks_session() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/auth"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    // a failed session check means "signed out", not an error
    action(&server, &["whoami"]).execute().await
}

#[tokio::test]
async fn logout_failure_is_reported() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/users/logout"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let result = action(
        &server,
        &["logout", "--email", "a@b.com", "--password", "x"],
    )
    .execute()
    .await;

    assert!(result.is_err());
    Ok(())
}

#[tokio::test]
async fn create_project_sends_payload() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/auth"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"user": {"id": 7, "name": "Ann", "email": "a@b.com"}})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/projects"))
        .and(body_json(json!({"name": "Roadmap"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 3, "name": "Roadmap"})))
        .expect(1)
        .mount(&server)
        .await;

    action(&server, &["projects", "create", "--data", r#"{"name":"Roadmap"}"#])
        .execute()
        .await
}

#[tokio::test]
async fn route_action_needs_no_server() -> Result<()> {
    let matches = commands::new().get_matches_from(["projectdesk", "route", "/projects/7/edit"]);
    dispatch::handler(&matches)?.execute().await
}
