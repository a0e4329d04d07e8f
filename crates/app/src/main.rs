//! `imagefeed` - command-line photo feed client
//!
//! This is a CLI, so `println!` and `eprintln!` are used for user-facing
//! output; diagnostics go through `tracing` on stderr.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use imagefeed_app::commands::{self, LoginOutcome};
use imagefeed_app::utils::logging::{error_label, init_tracing};
use imagefeed_app::utils::messages::user_message;
use imagefeed_app::AppContext;
use imagefeed_domain::{ImageFeedError, Photo};

/// Parsed command line.
enum Command {
    AuthUrl,
    Login { redirect: String },
    Feed { pages: u32 },
    Like { id: String, liked: bool },
    Profile,
    Logout,
}

#[tokio::main]
async fn main() -> ExitCode {
    match dotenvy::dotenv() {
        Ok(path) => eprintln!("Loaded .env from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => eprintln!("Could not load .env file: {e}"),
    }
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();

    let result = match parse_command(&args) {
        Ok(Some(command)) => run(command).await,
        Ok(None) => {
            print_help();
            Ok(())
        }
        Err(e) => {
            eprintln!("{e}");
            eprintln!();
            print_help();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<ImageFeedError>() {
                Some(err) => {
                    tracing::error!(error = %err, label = error_label(err), "command failed");
                    eprintln!("{}", user_message(err));
                }
                None => eprintln!("{e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

/// `None` means help was requested.
fn parse_command(args: &[String]) -> anyhow::Result<Option<Command>> {
    let name = args.first().map(String::as_str);
    let arg = args.get(1);

    let command = match name {
        Some("help") | None => return Ok(None),
        Some("auth-url") => Command::AuthUrl,
        Some("login") => Command::Login {
            redirect: arg.context("usage: imagefeed login <redirect-url>")?.clone(),
        },
        Some("feed") => Command::Feed {
            pages: match arg {
                Some(raw) => raw.parse().with_context(|| format!("invalid page count: {raw}"))?,
                None => 1,
            },
        },
        Some(verb @ ("like" | "unlike")) => Command::Like {
            id: arg.with_context(|| format!("usage: imagefeed {verb} <id>"))?.clone(),
            liked: verb == "like",
        },
        Some("profile") => Command::Profile,
        Some("logout") => Command::Logout,
        Some(unknown) => return Err(anyhow!("Unknown command: {unknown}")),
    };

    Ok(Some(command))
}

async fn run(command: Command) -> anyhow::Result<()> {
    let ctx = AppContext::new()?;

    match command {
        Command::AuthUrl => println!("{}", commands::authorization_url(&ctx)?),
        Command::Login { redirect } => match commands::login(&ctx, &redirect).await? {
            LoginOutcome::SignedIn => println!("Signed in."),
            LoginOutcome::Denied(reason) => println!("Authorization was denied: {reason}"),
            LoginOutcome::Superseded => println!("A newer sign-in replaced this one."),
        },
        Command::Feed { pages } => {
            let photos = commands::load_feed(&ctx, pages).await?;
            print_photos(&photos);
        }
        Command::Like { id, liked } => {
            commands::set_like(&ctx, &id, liked).await?;
            println!("{} {id}.", if liked { "Liked" } else { "Unliked" });
        }
        Command::Profile => {
            let view = commands::show_profile(&ctx).await?;
            println!("{}", view.profile.name);
            println!("{}", view.profile.login_name);
            if let Some(bio) = &view.profile.bio {
                println!("{bio}");
            }
            if let Some(url) = &view.avatar_url {
                println!("avatar: {url}");
            }
        }
        Command::Logout => {
            commands::logout(&ctx)?;
            println!("Signed out.");
        }
    }

    Ok(())
}

fn print_photos(photos: &[Photo]) {
    for photo in photos {
        let heart = if photo.is_liked { "♥" } else { " " };
        let date = photo.created_at.map(|ts| ts.format("%Y-%m-%d").to_string()).unwrap_or_default();
        println!(
            "{heart} {id:<12} {w}x{h} {date:<10} {url}",
            id = photo.id,
            w = photo.size.width,
            h = photo.size.height,
            url = photo.large_url
        );
    }
    println!("{} photos", photos.len());
}

fn print_help() {
    println!("ImageFeed");
    println!();
    println!("USAGE:");
    println!("    imagefeed <COMMAND> [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("    auth-url              Print the consent page URL to open in a browser");
    println!("    login <redirect-url>  Finish sign-in with the URL the browser landed on");
    println!("    feed [pages]          Load the latest photos (default: 1 page)");
    println!("    like <id>             Like a photo");
    println!("    unlike <id>           Remove a like");
    println!("    profile               Show the signed-in user's profile and avatar");
    println!("    logout                Forget the stored token");
    println!("    help                  Show this help message");
    println!();
    println!("Configuration comes from IMAGEFEED_* environment variables (a .env file is");
    println!("honoured) or from imagefeed.toml / imagefeed.json.");
}
