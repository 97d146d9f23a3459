//! ArgMatches → CliAction conversion.
//!
//! Turns clap's parsed arguments into a fully resolved request: the data
//! reference to store, where to store it, and any overrides of the
//! configuration file.

use std::path::PathBuf;

use clap::ArgMatches;
use shortcut_movie::{
    DurabilityMode, FourCC, ReplaceStrategy, ShortcutConfig, TypedReference, WriterConfig,
    CONFIG_FILE_NAME,
};

/// The result of parsing the command line.
#[derive(Debug)]
pub enum CliAction {
    /// Create one shortcut file.
    Create(CreateRequest),
    /// Write the default config file if none exists.
    InitConfig(PathBuf),
}

/// Everything needed to create one shortcut.
#[derive(Debug)]
pub struct CreateRequest {
    /// Shortcut file path
    pub output: PathBuf,
    /// Reference stored in the shortcut
    pub reference: TypedReference,
    /// Explicit config file, if given
    pub config_path: Option<PathBuf>,
    /// `--temp-rename` was given
    pub temp_rename: bool,
    /// `--no-sync` was given
    pub no_sync: bool,
}

impl CreateRequest {
    /// Apply command-line overrides on top of the file configuration.
    pub fn writer_config(&self, config: &ShortcutConfig) -> Result<WriterConfig, String> {
        let mut writer = config.writer_config().map_err(|e| e.to_string())?;
        if self.temp_rename {
            writer = writer.with_strategy(ReplaceStrategy::TempRename);
        }
        if self.no_sync {
            writer = writer.with_durability(DurabilityMode::Cache);
        }
        Ok(writer)
    }
}

/// Convert parsed arguments into an action.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    if matches.get_flag("init-config") {
        let path = matches
            .get_one::<String>("config")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        return Ok(CliAction::InitConfig(path));
    }

    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .ok_or("missing output path")?;

    let reference = if let Some(url) = matches.get_one::<String>("url") {
        TypedReference::url(url)
    } else {
        let kind: FourCC = matches
            .get_one::<String>("kind")
            .ok_or("either --url or --kind is required")?
            .parse()
            .map_err(|e: shortcut_movie::ShortcutError| e.to_string())?;
        let data_file = matches
            .get_one::<String>("data-file")
            .ok_or("--kind requires --data-file")?;
        let bytes = std::fs::read(data_file)
            .map_err(|e| format!("Failed to read data file '{}': {}", data_file, e))?;
        TypedReference::new(kind, bytes)
    };

    Ok(CliAction::Create(CreateRequest {
        output,
        reference,
        config_path: matches.get_one::<String>("config").map(PathBuf::from),
        temp_rename: matches.get_flag("temp-rename"),
        no_sync: matches.get_flag("no-sync"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::build_cli;

    fn parse(args: &[&str]) -> Result<CreateRequest, String> {
        let matches = build_cli()
            .try_get_matches_from(args)
            .map_err(|e| e.to_string())?;
        match matches_to_action(&matches)? {
            CliAction::Create(request) => Ok(request),
            CliAction::InitConfig(path) => Err(format!("unexpected init-config {:?}", path)),
        }
    }

    #[test]
    fn test_parse_url() {
        let request = parse(&["shortcut", "out.mov", "--url", "http://example.com/movie.mov"])
            .unwrap();
        assert_eq!(request.output, PathBuf::from("out.mov"));
        assert_eq!(request.reference.kind, FourCC::URL_DATA_REF);
        assert_eq!(request.reference.len(), 29);
        assert!(!request.temp_rename);
        assert!(!request.no_sync);
    }

    #[test]
    fn test_parse_kind_and_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("alias.bin");
        std::fs::write(&data, [1u8, 2, 3]).unwrap();

        let request = parse(&[
            "shortcut",
            "out.mov",
            "--kind",
            "alis",
            "--data-file",
            data.to_str().unwrap(),
        ])
        .unwrap();

        assert_eq!(request.reference.kind, FourCC::ALIAS_DATA_REF);
        assert_eq!(request.reference.bytes, vec![1u8, 2, 3]);
    }

    #[test]
    fn test_parse_hex_kind() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("ref.bin");
        std::fs::write(&data, [7u8]).unwrap();

        let request = parse(&[
            "shortcut",
            "out.mov",
            "--kind",
            "0xa9414243",
            "--data-file",
            data.to_str().unwrap(),
        ])
        .unwrap();

        assert_eq!(request.reference.kind, FourCC::new(0xA941_4243));
    }

    #[test]
    fn test_init_config_uses_default_path() {
        let matches = build_cli()
            .try_get_matches_from(["shortcut", "--init-config"])
            .unwrap();
        match matches_to_action(&matches).unwrap() {
            CliAction::InitConfig(path) => assert_eq!(path, PathBuf::from(CONFIG_FILE_NAME)),
            other => panic!("expected InitConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_init_config_honors_config_path() {
        let matches = build_cli()
            .try_get_matches_from(["shortcut", "--init-config", "--config", "/tmp/custom.toml"])
            .unwrap();
        match matches_to_action(&matches).unwrap() {
            CliAction::InitConfig(path) => assert_eq!(path, PathBuf::from("/tmp/custom.toml")),
            other => panic!("expected InitConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_init_config_conflicts_with_output() {
        let result = build_cli().try_get_matches_from(["shortcut", "out.mov", "--init-config"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_reference_is_required() {
        assert!(parse(&["shortcut", "out.mov"]).is_err());
    }

    #[test]
    fn test_url_conflicts_with_kind() {
        let result = parse(&[
            "shortcut", "out.mov", "--url", "http://x", "--kind", "alis", "--data-file", "f",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_kind_is_rejected() {
        let err = parse(&["shortcut", "out.mov", "--kind", "al", "--data-file", "f"]).unwrap_err();
        assert!(err.contains("4 bytes"));
    }

    #[test]
    fn test_missing_data_file_is_reported() {
        let err = parse(&[
            "shortcut",
            "out.mov",
            "--kind",
            "alis",
            "--data-file",
            "/definitely/not/here.bin",
        ])
        .unwrap_err();
        assert!(err.contains("Failed to read data file"));
    }

    #[test]
    fn test_overrides_apply_on_top_of_config() {
        let request = parse(&[
            "shortcut",
            "out.mov",
            "--url",
            "http://x",
            "--temp-rename",
            "--no-sync",
        ])
        .unwrap();

        let writer = request.writer_config(&ShortcutConfig::default()).unwrap();
        assert_eq!(writer.strategy, ReplaceStrategy::TempRename);
        assert_eq!(writer.durability, DurabilityMode::Cache);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let request = parse(&["shortcut", "out.mov", "--url", "http://x"]).unwrap();
        let writer = request.writer_config(&ShortcutConfig::default()).unwrap();
        assert_eq!(writer, WriterConfig::default());
    }
}
