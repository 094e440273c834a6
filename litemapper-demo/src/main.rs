//! LiteMapper demo
//!
//! Maps a `User` to a `UserDto` and back, printing both results.
//!
//! Usage:
//!   litemapper-demo --first-name Ada --last-name Lovelace
//!   litemapper-demo --config mapper.toml --verbose
//!   litemapper-demo --suffix 'D[a-z]o' --mode regex

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use litemapper_demo::{ModeArg, build_mapper, with_overrides};
use litemapper_demo::models::domain::User;
use litemapper_demo::models::dto::UserDto;
use litemapper_engine::MapperConfig;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "litemapper-demo")]
#[command(about = "Maps a domain user to its DTO and back")]
struct Args {
    /// First name of the sample user
    #[arg(long, default_value = "FirstName")]
    first_name: String,

    /// Last name of the sample user
    #[arg(long, default_value = "LastName")]
    last_name: String,

    /// Path to a mapper config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the naming suffix used to pair types
    #[arg(long)]
    suffix: Option<String>,

    /// How the naming suffix is matched against type names
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let loaded = match &args.config {
        Some(path) => MapperConfig::load_from(path),
        None => MapperConfig::default(),
    };
    let config = with_overrides(loaded, args.suffix, args.mode);
    info!(suffix = %config.naming.suffix, mode = ?config.naming.mode, "Configuring mapper");

    let mapper = build_mapper(config).context("failed to configure mapper")?;

    let user = User {
        first_name: args.first_name,
        last_name: args.last_name,
    };
    let dto: UserDto = mapper.map(&user).context("failed to map user to DTO")?;
    let new_user: User = mapper.map(&dto).context("failed to map DTO to user")?;

    println!("domain: {}, {}", new_user.first_name, new_user.last_name);
    println!("dto: {}, {}", dto.first_name, dto.last_name);
    Ok(())
}
