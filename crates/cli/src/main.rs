//! shortcut — create QuickTime shortcut movie files from the command line.
//!
//! ```text
//! shortcut link.mov --url http://example.com/movie.mov
//! shortcut link.mov --kind alis --data-file alias.bin --temp-rename
//! shortcut --init-config
//! ```
//!
//! Settings come from `--config FILE`, else `./shortcut.toml` if present,
//! else built-in defaults; `--temp-rename` and `--no-sync` override them.

mod commands;
mod parse;

use std::path::Path;
use std::process;

use shortcut_movie::{select_strategy, OutputFile, ShortcutConfig};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use parse::{matches_to_action, CliAction, CreateRequest};

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_count("verbose"));

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let result = match action {
        CliAction::Create(request) => run_create(&request),
        CliAction::InitConfig(path) => run_init_config(&path),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}

/// `RUST_LOG` wins when set; otherwise `-v` raises the level.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(request: &CreateRequest) -> Result<ShortcutConfig, String> {
    match &request.config_path {
        Some(path) => ShortcutConfig::from_file(path).map_err(|e| e.to_string()),
        None => {
            let default_path = Path::new(shortcut_movie::CONFIG_FILE_NAME);
            if default_path.exists() {
                ShortcutConfig::from_file(default_path).map_err(|e| e.to_string())
            } else {
                Ok(ShortcutConfig::default())
            }
        }
    }
}

fn run_init_config(path: &Path) -> Result<(), String> {
    let existed = path.exists();
    ShortcutConfig::write_default_if_missing(path).map_err(|e| e.to_string())?;
    if existed {
        println!("Config {} already exists, left unchanged", path.display());
    } else {
        println!("Wrote default config to {}", path.display());
    }
    Ok(())
}

fn run_create(request: &CreateRequest) -> Result<(), String> {
    let config = load_config(request)?;
    let writer_config = request.writer_config(&config)?;

    // No native shortcut API is available to this binary
    let strategy = select_strategy(None, writer_config);

    let target = OutputFile::new(&request.output).with_hints(config.creation_hints());
    strategy
        .create_shortcut(&request.reference, &target)
        .map_err(|e| format!("Failed to create '{}': {}", request.output.display(), e))?;

    println!(
        "Created shortcut {} ({} bytes)",
        request.output.display(),
        shortcut_movie::SHORTCUT_PREFIX_SIZE + request.reference.len()
    );
    Ok(())
}
