//! Integration tests for the `users` subcommands.

mod fixtures;

use assert_cmd::cargo::cargo_bin_cmd;
use fixtures::{can_bind_localhost, page_json, temp_home, user_json, write_session};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "QpwL5tke4Pnpja7X4";

#[test]
fn test_protected_command_requires_login() {
    let home = temp_home();

    cargo_bin_cmd!("ewise")
        .env("EWISE_HOME", home.path())
        .env("EWISE_BASE_URL", "http://127.0.0.1:9")
        .args(["users", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in. Run `ewise login` first."));
}

#[tokio::test]
async fn test_users_list_prints_page() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    write_session(home.path(), TOKEN);
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("page", "2"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            2,
            2,
            vec![user_json(7, "Michael", "Lawson"), user_json(8, "Lindsay", "Ferguson")],
        )))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("ewise")
        .env("EWISE_HOME", home.path())
        .env("EWISE_BASE_URL", server.uri())
        .args(["users", "list", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2 of 2"))
        .stdout(predicate::str::contains("Michael Lawson"))
        .stdout(predicate::str::contains("lindsay.ferguson@reqres.in"));
}

#[tokio::test]
async fn test_users_list_search_filters_json_output() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    write_session(home.path(), TOKEN);
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            1,
            2,
            vec![user_json(1, "George", "Bluth"), user_json(2, "Janet", "Weaver")],
        )))
        .mount(&server)
        .await;

    let output = cargo_bin_cmd!("ewise")
        .env("EWISE_HOME", home.path())
        .env("EWISE_BASE_URL", server.uri())
        .args(["users", "list", "--search", "JAN", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let users: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["first_name"], "Janet");
}

#[tokio::test]
async fn test_users_show_not_found() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    write_session(home.path(), TOKEN);
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/23"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&server)
        .await;

    cargo_bin_cmd!("ewise")
        .env("EWISE_HOME", home.path())
        .env("EWISE_BASE_URL", server.uri())
        .args(["users", "show", "23"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fetch user 23"));
}

#[tokio::test]
async fn test_users_update_fills_missing_fields() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    write_session(home.path(), TOKEN);
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": user_json(2, "Janet", "Weaver")})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/2"))
        .and(body_json(json!({
            "first_name": "Janet",
            "last_name": "Doe",
            "email": "janet.weaver@reqres.in"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "first_name": "Janet",
            "last_name": "Doe",
            "email": "janet.weaver@reqres.in",
            "updatedAt": "2026-01-01T00:00:00.000Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("ewise")
        .env("EWISE_HOME", home.path())
        .env("EWISE_BASE_URL", server.uri())
        .args(["users", "update", "2", "--last-name", "Doe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User updated successfully"));
}

#[tokio::test]
async fn test_users_update_rejects_blank_field() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    write_session(home.path(), TOKEN);
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    cargo_bin_cmd!("ewise")
        .env("EWISE_HOME", home.path())
        .env("EWISE_BASE_URL", server.uri())
        .args([
            "users",
            "update",
            "2",
            "--first-name",
            " ",
            "--last-name",
            "Doe",
            "--email",
            "j@d.io",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("All fields are required"));
}

#[tokio::test]
async fn test_users_delete_with_yes() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    write_session(home.path(), TOKEN);
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("ewise")
        .env("EWISE_HOME", home.path())
        .env("EWISE_BASE_URL", server.uri())
        .args(["users", "delete", "3", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User deleted successfully"));
}

#[tokio::test]
async fn test_users_delete_declined_sends_nothing() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    write_session(home.path(), TOKEN);
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    cargo_bin_cmd!("ewise")
        .env("EWISE_HOME", home.path())
        .env("EWISE_BASE_URL", server.uri())
        .args(["users", "delete", "3"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));
}
