use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::info;

use crate::api::ApiClient;
use crate::data_paths::DataPaths;
use crate::session::{self, Session};

#[derive(Args)]
pub struct LoginArgs {
    /// Backend username
    #[arg(long, short)]
    pub username: String,
}

pub async fn execute(host: &str, data_paths: DataPaths, args: LoginArgs) -> Result<()> {
    let password = rpassword::prompt_password("Password: ")?;

    let client = ApiClient::new(host)?;
    let token = client
        .login(&args.username, &password)
        .await
        .context("Login failed")?;

    let session = Session::new(token.access_token, &args.username);
    session::save_session(&data_paths, &session)?;
    info!(username = %args.username, "Logged in");

    println!(
        "{} Logged in as {}",
        "✅".bright_green(),
        args.username.bright_cyan()
    );
    Ok(())
}

pub async fn whoami(host: &str, data_paths: DataPaths) -> Result<()> {
    let client = super::authed_client(host, &data_paths)?;
    let user = client.me().await.context("Failed to fetch current user")?;

    println!("User:  {}", user.username.bright_cyan());
    if let Some(email) = user.email {
        println!("Email: {}", email);
    }
    println!("Id:    {}", user.id);
    Ok(())
}

pub fn logout(data_paths: DataPaths) -> Result<()> {
    session::clear_session(&data_paths)?;
    println!("Session cleared");
    Ok(())
}
