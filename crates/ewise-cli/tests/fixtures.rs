//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use tempfile::TempDir;

/// Creates a temp EWISE_HOME directory for test isolation.
pub fn temp_home() -> TempDir {
    TempDir::new().expect("create temp ewise home")
}

/// Writes a session file holding `token` into `home`.
pub fn write_session(home: &Path, token: &str) {
    fs::write(
        home.join("session.json"),
        serde_json::to_string(&json!({ "token": token })).unwrap(),
    )
    .unwrap();
}

pub fn read_session(home: &Path) -> Option<Value> {
    let contents = fs::read_to_string(home.join("session.json")).ok()?;
    serde_json::from_str(&contents).ok()
}

pub fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

pub fn user_json(id: u64, first: &str, last: &str) -> Value {
    json!({
        "id": id,
        "email": format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
        "first_name": first,
        "last_name": last,
        "avatar": format!("https://reqres.in/img/faces/{id}-image.jpg"),
    })
}

pub fn page_json(page: u32, total_pages: u32, users: Vec<Value>) -> Value {
    json!({
        "page": page,
        "per_page": 6,
        "total": total_pages * 6,
        "total_pages": total_pages,
        "data": users,
    })
}
