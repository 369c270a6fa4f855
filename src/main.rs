//! Pingdom Users - request preview tool
//!
//! Reads a user or contact target as JSON, validates it, and prints the
//! request that would be sent to the users API without sending it.
//!
//! ```text
//! pingdom-users create-user <file|->
//! pingdom-users update-user <user-id> <file|->
//! pingdom-users delete-user <user-id>
//! pingdom-users create-contact <user-id> <file|->
//! pingdom-users update-contact <user-id> <contact-id> <file|->
//! pingdom-users delete-contact <user-id> <contact-id>
//! pingdom-users list-users
//! ```

use anyhow::{bail, Context, Result};
use pingdom_users::error::ApiResult;
use pingdom_users::{ApiError, ApiRequest, Config, Contact, Transport, User, UsersClient};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: pingdom-users <create-user|update-user|delete-user|create-contact|update-contact|delete-contact|list-users> [ids..] [file|-]";

/// Transport that writes each request to a writer instead of sending it.
struct PreviewTransport<W> {
    api_url: String,
    out: RefCell<W>,
}

impl<W: Write> PreviewTransport<W> {
    fn new(api_url: impl Into<String>, out: W) -> Self {
        Self {
            api_url: api_url.into(),
            out: RefCell::new(out),
        }
    }
}

impl<W: Write> Transport for PreviewTransport<W> {
    fn send(&self, request: &ApiRequest) -> ApiResult<String> {
        let mut out = self.out.borrow_mut();
        let to_transport_error = |e: io::Error| ApiError::Transport(e.to_string());

        writeln!(out, "{} {}", request.method, request.url(&self.api_url))
            .map_err(to_transport_error)?;
        if !request.params.is_empty() {
            writeln!(out, "{}", request.params.to_query_string()).map_err(to_transport_error)?;
        }

        Ok(String::new())
    }
}

/// Read a JSON document from a file, or from stdin when the path is "-".
fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    if path == "-" {
        serde_json::from_reader(io::stdin().lock()).context("Failed to parse JSON from stdin")
    } else {
        let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse JSON from {}", path))
    }
}

fn parse_id(value: &str, what: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .with_context(|| format!("Invalid {}: {}", what, value))
}

fn run<W: Write>(client: &UsersClient<PreviewTransport<W>>, args: &[String]) -> Result<()> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["list-users"] => client.list_users()?,
        ["create-user", file] => client.create_user(&read_json::<User>(file)?)?,
        ["update-user", user_id, file] => {
            client.update_user(parse_id(user_id, "user id")?, &read_json::<User>(file)?)?
        }
        ["delete-user", user_id] => client.delete_user(parse_id(user_id, "user id")?)?,
        ["create-contact", user_id, file] => client.create_contact(
            parse_id(user_id, "user id")?,
            &read_json::<Contact>(file)?,
        )?,
        ["update-contact", user_id, contact_id, file] => client.update_contact(
            parse_id(user_id, "user id")?,
            parse_id(contact_id, "contact id")?,
            &read_json::<Contact>(file)?,
        )?,
        ["delete-contact", user_id, contact_id] => client.delete_contact(
            parse_id(user_id, "user id")?,
            parse_id(contact_id, "contact id")?,
        )?,
        _ => bail!(USAGE),
    };

    Ok(())
}

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only so stdout carries just the preview)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Previewing requests against {}", config.api_url);

    let client = UsersClient::new(PreviewTransport::new(config.api_url.as_str(), io::stdout()));

    let args: Vec<String> = std::env::args().skip(1).collect();
    run(&client, &args)
}
