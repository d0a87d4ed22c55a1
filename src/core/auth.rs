//! Shared-password gate for workflow commands.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Portal,
    Admin,
}

impl Role {
    fn name(&self) -> &'static str {
        match self {
            Role::Portal => "portal",
            Role::Admin => "admin",
        }
    }

    fn expected(&self, cfg: &Config) -> String {
        match self {
            Role::Portal => cfg.effective_portal_password(),
            Role::Admin => cfg.effective_admin_password(),
        }
    }
}

/// Check `supplied` against the secret of `role`.
pub fn verify(cfg: &Config, role: Role, supplied: &str) -> AppResult<()> {
    if supplied == role.expected(cfg) {
        Ok(())
    } else {
        Err(AppError::Unauthorized(role.name()))
    }
}

/// Use the `--password` value, or ask on stdin.
pub fn require(cfg: &Config, role: Role, given: Option<&str>) -> AppResult<()> {
    let supplied = match given {
        Some(p) => p.to_string(),
        None => prompt(role)?,
    };
    verify(cfg, role, &supplied)
}

fn prompt(role: Role) -> AppResult<String> {
    print!("🔑 {} password: ", role.name());
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
