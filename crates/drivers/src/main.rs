mod config;
mod logging;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use config::{parse_width, AppConfig};
use mesmur_adapters::{present_discovery, render_page, WalkdirImageProvider};
use mesmur_application::{ComposePageCommand, DiscoverGalleriesCommand, SiteService};
use tracing::error;

fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("invalid configuration: {message}");
            return ExitCode::from(2);
        }
    };
    logging::init_logging(&config.log_level);
    let args: Vec<String> = std::env::args().collect();

    let result = build_service(&config)
        .and_then(|service| run_command(parse_command(&args), &service, &config));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            error!(%msg, "command failed");
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_service(config: &AppConfig) -> Result<SiteService, CommandError> {
    SiteService::configured(Box::new(WalkdirImageProvider), &config.site)
        .map_err(|error| CommandError::Usage(format!("invalid configuration: {error}")))
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Ui { root: Option<PathBuf> },
    Discover { root: Option<PathBuf> },
    List { root: Option<PathBuf> },
    Render { root: Option<PathBuf>, width: Option<f32> },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Ok(Command::Ui { root: None });
    }

    let rest = &args[2..];
    match args[1].as_str() {
        "ui" => Ok(Command::Ui {
            root: parse_root(rest)?,
        }),
        "discover" => Ok(Command::Discover {
            root: parse_root(rest)?,
        }),
        "list" => Ok(Command::List {
            root: parse_root(rest)?,
        }),
        "render" => {
            let mut root = None;
            let mut width = None;
            let mut index = 0;
            while index < rest.len() {
                match rest[index].as_str() {
                    "--width" => {
                        let value = rest
                            .get(index + 1)
                            .ok_or_else(|| CommandError::Usage("missing value for --width".to_string()))?;
                        width = Some(parse_width(value).map_err(CommandError::Usage)?);
                        index += 2;
                    }
                    flag if flag.starts_with("--") => {
                        return Err(CommandError::Usage(format!("unknown option: {flag}")));
                    }
                    dir if root.is_none() => {
                        root = Some(PathBuf::from(dir));
                        index += 1;
                    }
                    extra => {
                        return Err(CommandError::Usage(format!("unexpected argument: {extra}")));
                    }
                }
            }
            Ok(Command::Render { root, width })
        }
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn parse_root(rest: &[String]) -> Result<Option<PathBuf>, CommandError> {
    match rest {
        [] => Ok(None),
        [dir] => Ok(Some(PathBuf::from(dir))),
        [_, extra, ..] => Err(CommandError::Usage(format!("unexpected argument: {extra}"))),
    }
}

fn run_command(
    command: Result<Command, CommandError>,
    service: &SiteService,
    config: &AppConfig,
) -> Result<(), CommandError> {
    let resolve = |root: Option<PathBuf>| root.unwrap_or_else(|| config.public_dir.clone());

    match command? {
        Command::Ui { root } => {
            let root = resolve(root);
            ui::launch_window(service, &root, config.viewport_width).map_err(CommandError::Runtime)
        }
        Command::Discover { root } => {
            let result = service
                .discover_galleries(DiscoverGalleriesCommand { root: resolve(root) })
                .map_err(|error| CommandError::Runtime(format!("discovery failed: {error}")))?;
            let json = serde_json::to_string_pretty(&result)
                .map_err(|error| CommandError::Runtime(format!("failed to encode result: {error}")))?;
            println!("{json}");
            Ok(())
        }
        Command::List { root } => {
            let result = service
                .discover_galleries(DiscoverGalleriesCommand { root: resolve(root) })
                .map_err(|error| CommandError::Runtime(format!("discovery failed: {error}")))?;
            for row in present_discovery(&result) {
                println!("{row}");
            }
            Ok(())
        }
        Command::Render { root, width } => {
            let page = service
                .compose_page(ComposePageCommand {
                    root: resolve(root),
                    viewport_width: width.unwrap_or(config.viewport_width),
                })
                .map_err(|error| CommandError::Runtime(format!("render failed: {error}")))?;
            println!("{}", render_page(&page));
            Ok(())
        }
    }
}

fn print_usage() {
    println!("usage:");
    println!("  mesmur-site ui [public_dir]");
    println!("  mesmur-site discover [public_dir]");
    println!("  mesmur-site list [public_dir]");
    println!("  mesmur-site render [public_dir] [--width <px>]");
}
