//! User directory handlers.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use ewise_core::api::{User, UserUpdate};
use ewise_core::config::Config;
use ewise_core::users::{Pagination, filter_users};

/// Field overrides for `users update`. Unset fields keep the remote value.
#[derive(Debug, Default)]
pub struct UpdateFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl UpdateFields {
    fn is_complete(&self) -> bool {
        self.first_name.is_some() && self.last_name.is_some() && self.email.is_some()
    }

    fn apply(self, base: UserUpdate) -> UserUpdate {
        UserUpdate {
            first_name: self.first_name.unwrap_or(base.first_name),
            last_name: self.last_name.unwrap_or(base.last_name),
            email: self.email.unwrap_or(base.email),
        }
    }
}

pub async fn list(config: &Config, page: u32, search: Option<&str>, json: bool) -> Result<()> {
    let api = super::authed_client(config)?;
    let page = page.max(1);
    let result = api
        .list_users(page)
        .await
        .with_context(|| format!("list users (page {page})"))?;

    let pagination = Pagination::new(result.page, result.total_pages);
    let users = filter_users(&result.users, search.unwrap_or_default());

    if json {
        println!("{}", serde_json::to_string_pretty(&users)?);
        return Ok(());
    }

    println!("Page {} of {}", pagination.page, pagination.total_pages);
    if users.is_empty() {
        println!("No users found");
        return Ok(());
    }
    for user in &users {
        println!("{}", format_row(user));
    }
    Ok(())
}

pub async fn show(config: &Config, id: u64, json: bool) -> Result<()> {
    let api = super::authed_client(config)?;
    let user = api
        .get_user(id)
        .await
        .with_context(|| format!("fetch user {id}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    println!("ID:     {}", user.id);
    println!("Name:   {}", user.full_name());
    println!("Email:  {}", user.email);
    if !user.avatar.is_empty() {
        println!("Avatar: {}", user.avatar);
    }
    Ok(())
}

pub async fn update(config: &Config, id: u64, fields: UpdateFields) -> Result<()> {
    let api = super::authed_client(config)?;

    let update = if fields.is_complete() {
        fields.apply(UserUpdate {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
        })
    } else {
        let current = api
            .get_user(id)
            .await
            .with_context(|| format!("fetch user {id}"))?;
        fields.apply(UserUpdate::from(&current))
    };

    if let Err(err) = update.validate() {
        anyhow::bail!(
            "{err} ({})",
            err.details.as_deref().unwrap_or("missing fields")
        );
    }

    let updated = api
        .update_user(id, &update)
        .await
        .with_context(|| format!("update user {id}"))?;
    tracing::debug!(id, updated_at = ?updated.updated_at, "user updated");

    println!("User updated successfully");
    Ok(())
}

pub async fn delete(config: &Config, id: u64, yes: bool) -> Result<()> {
    let api = super::authed_client(config)?;

    if !yes && !confirm(&format!("Are you sure you want to delete user {id}? (y/n) "))? {
        println!("Aborted.");
        return Ok(());
    }

    api.delete_user(id)
        .await
        .with_context(|| format!("delete user {id}"))?;
    println!("User deleted successfully");
    Ok(())
}

fn format_row(user: &User) -> String {
    format!("{:>4}  {:<24}  {}", user.id, user.full_name(), user.email)
}

fn confirm(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("{prompt}");
        io::stderr().flush()?;
    }
    let mut line = String::new();
    stdin.lock().read_line(&mut line).context("read confirmation")?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_fields_keep_remote_values() {
        let base = UserUpdate {
            first_name: "Janet".into(),
            last_name: "Weaver".into(),
            email: "janet.weaver@reqres.in".into(),
        };
        let fields = UpdateFields {
            last_name: Some("Doe".into()),
            ..UpdateFields::default()
        };

        let merged = fields.apply(base);
        assert_eq!(merged.first_name, "Janet");
        assert_eq!(merged.last_name, "Doe");
        assert_eq!(merged.email, "janet.weaver@reqres.in");
    }

    #[test]
    fn test_complete_fields_skip_fetch() {
        let fields = UpdateFields {
            first_name: Some("a".into()),
            last_name: Some("b".into()),
            email: Some("c".into()),
        };
        assert!(fields.is_complete());
        assert!(!UpdateFields::default().is_complete());
    }
}
