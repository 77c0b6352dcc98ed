//! A minimal command-line Notekeep client.
//!
//! Demonstrates the full core: file-backed credentials, session
//! hydration, login only when the persisted token is gone or expired,
//! then a notes listing.
//!
//! ```text
//! NOTEKEEP_API=https://notekeep.example.com/api \
//!     notes-cli <username> <password> [search]
//! ```

use std::process::ExitCode;

use tracing::info;

use notekeep::prelude::*;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let base_url = std::env::var("NOTEKEEP_API")
        .unwrap_or_else(|_| "https://notekeep.example.com/api".into());

    let mut args = std::env::args().skip(1);
    let (Some(username), Some(password)) = (args.next(), args.next()) else {
        eprintln!("usage: notes-cli <username> <password> [search]");
        return ExitCode::FAILURE;
    };
    let search = args.next();

    let store = match FileStore::open("notekeep-credentials.json") {
        Ok(store) => store,
        Err(err) => {
            eprintln!("cannot open credential store: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut app = Notekeep::new(base_url, store, SessionConfig::default());

    if app.initialize() {
        info!(user = %app.user().username, "resumed persisted session");
    } else {
        let credentials = Credentials { username, password };
        if let Err(err) = app.login(&credentials).await {
            eprintln!("login failed: {err}");
            return ExitCode::FAILURE;
        }
        info!(user = %app.user().username, "logged in");
    }

    if let Some(info) = app.token_info() {
        info!(
            expires_at = info.expires_at,
            seconds_left = info.seconds_until_expiry,
            "token status"
        );
    }

    let query = NotesQuery {
        search,
        ..NotesQuery::default()
    };
    let notes = app.get_notes(&query).await;
    if notes.is_empty() {
        println!("no notes");
    } else {
        for note in notes {
            let visibility = if note.is_public { "public" } else { "private" };
            println!("{}  [{visibility}]  {}", note.id, note.title);
        }
    }

    ExitCode::SUCCESS
}
