//! Login and logout handlers.

use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use ewise_core::config::Config;
use ewise_core::session::mask_token;

pub async fn login(config: &Config, email: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => read_password()?,
    };
    if email.trim().is_empty() || password.is_empty() {
        anyhow::bail!("Please enter both email and password");
    }

    let session = super::session();
    let api = super::client(config, Arc::clone(&session))?;
    let token = api
        .authenticate(email, &password)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Login failed. Please check your credentials.")))?;
    session.set_token(&token).context("store session token")?;

    tracing::info!(token = %mask_token(&token), "logged in");
    println!("Logged in as {email}");
    Ok(())
}

pub fn logout() -> Result<()> {
    if super::session().clear().context("clear session")? {
        println!("Logged out.");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

fn read_password() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("Password: ");
        io::stderr().flush()?;
    }
    let mut line = String::new();
    stdin.lock().read_line(&mut line).context("read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
