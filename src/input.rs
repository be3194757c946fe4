/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::config::*;
use anyhow::{Context, Result, bail};
use connector::{DEFAULT_SERVER_URL, RequestConfig};
use std::io;
use std::io::Write;

fn read_line(prompt: &str) -> Result<String> {
    print!("{}: ", prompt);
    io::stdout().flush()?;
    let mut inp = String::new();
    io::stdin()
        .read_line(&mut inp)
        .with_context(|| format!("Failed to read {}.", prompt))?;
    Ok(inp.trim().to_string())
}

pub fn ask_for_input(prompt: &str) -> Result<String> {
    let inp = read_line(prompt)?;

    if inp.is_empty() {
        bail!("{} cannot be empty.", prompt);
    }

    Ok(inp)
}

pub fn value_or_ask(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => ask_for_input(prompt),
    }
}

pub fn ask_for_confirmation(question: &str) -> Result<bool> {
    let answer = read_line(&format!("{} [y/n]", question))?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub fn get_request_config(config: &Config, server: Option<String>) -> RequestConfig {
    let server_url = server
        .or_else(|| config.server.clone())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

    RequestConfig {
        server_url,
        directory_url: config.directory.clone(),
    }
}
