use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use celpak_core::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};
use glob::glob;
use log::{LevelFilter, debug};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CELPAK_BUILD_COMMIT"),
    " ",
    env!("CELPAK_BUILD_DATE"),
    ")"
);

const SUPPORTED_EXTENSIONS: [&str; 2] = ["cel", "pak"];

#[derive(Parser, Debug)]
#[command(name = "celpak")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Inspect and extract CEL / PAK raster images from legacy game data.",
    long_about = None,
    after_help = "Examples:\n  celpak info GFX/DOOR.CEL --pretty\n  celpak extract ANIM/FIRE.PAK -o out/\n  celpak extract-all /games/iotd -o export/"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print format, dimensions and frame count of a .cel or .pak file as JSON.
    Info {
        /// Path to a .cel or .pak file (a glob matching exactly one file is accepted)
        input: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Decode a .cel or .pak file into PNG or GIF image(s).
    #[command(
        after_help = "With --format png, PAK files produce one PNG per frame: NAME-00.png, NAME-01.png, ...\nWith --format gif, PAK files produce one looping NAME.gif.\nThe palette is read from PALETTE.PAL next to the file or one directory up."
    )]
    Extract {
        /// Path to a .cel or .pak file (a glob matching exactly one file is accepted)
        input: PathBuf,

        /// Output directory
        #[arg(short = 'o', long)]
        out_dir: PathBuf,

        /// Output image format
        #[arg(long, value_enum, default_value_t = FormatArg::Png)]
        format: FormatArg,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// Export every .cel and .pak file below a game folder, mirroring its layout.
    ///
    /// Animated PAK files become looping GIFs; everything else becomes PNG.
    ExtractAll {
        /// Game folder to scan
        game_dir: PathBuf,

        /// Output directory
        #[arg(short = 'o', long)]
        out_dir: PathBuf,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    /// Indexed PNG, one file per frame
    Png,
    /// Looping GIF, one file per input
    Gif,
    /// GIF for animated PAK files, PNG otherwise
    Auto,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Png => ExportFormat::Png,
            FormatArg::Gif => ExportFormat::Gif,
            FormatArg::Auto => ExportFormat::Auto,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Info { input, pretty } => cmd_info(input, pretty),
        Commands::Extract {
            input,
            out_dir,
            format,
            quiet,
        } => cmd_extract(input, out_dir, format.into(), quiet),
        Commands::ExtractAll {
            game_dir,
            out_dir,
            quiet,
        } => cmd_extract_all(game_dir, out_dir, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

impl From<celpak_core::export::ExportError> for CliError {
    fn from(err: celpak_core::export::ExportError) -> Self {
        use celpak_core::DecodeError;
        use celpak_core::export::ExportError;

        let hint = match &err {
            ExportError::Decode(DecodeError::PaletteNotFound { .. }) => {
                Some("place PALETTE.PAL next to the file or one directory up".to_string())
            }
            ExportError::Decode(DecodeError::UnrecognizedCelSize { .. })
            | ExportError::Decode(DecodeError::UnrecognizedPakSize { .. }) => {
                Some("the file is corrupt or not a CEL/PAK image".to_string())
            }
            _ => None,
        };
        CliError::new(err.to_string(), hint)
    }
}

fn cmd_info(input: PathBuf, pretty: bool) -> Result<(), CliError> {
    let input = resolve_input_path(&input)?;
    validate_input_file(&input)?;

    let info = celpak_core::describe(&input).map_err(|err| {
        let hint = matches!(err, celpak_core::DecodeError::PaletteNotFound { .. })
            .then(|| "place PALETTE.PAL next to the file or one directory up".to_string());
        CliError::new(err.to_string(), hint)
    })?;
    let json = if pretty {
        serde_json::to_string_pretty(&info)
    } else {
        serde_json::to_string(&info)
    }
    .context("JSON serialization failed")?;
    println!("{}", json);
    Ok(())
}

fn cmd_extract(
    input: PathBuf,
    out_dir: PathBuf,
    format: ExportFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let input = resolve_input_path(&input)?;
    validate_input_file(&input)?;
    ensure_not_input(&input, &out_dir)?;

    let written = celpak_core::export::export_file(&input, &out_dir, format)?;
    if !quiet {
        eprintln!(
            "OK: {} file(s) written -> {}",
            written.len(),
            out_dir.display()
        );
    }
    Ok(())
}

fn cmd_extract_all(game_dir: PathBuf, out_dir: PathBuf, quiet: bool) -> Result<(), CliError> {
    if !game_dir.is_dir() {
        return Err(CliError::new(
            format!("game folder not found: {}", game_dir.display()),
            Some("pass the folder that holds the game's data files".to_string()),
        ));
    }
    let game_abs = fs::canonicalize(&game_dir)
        .with_context(|| format!("Failed to resolve game folder: {}", game_dir.display()))?;
    if out_dir.exists() {
        let out_abs = fs::canonicalize(&out_dir)
            .with_context(|| format!("Failed to resolve output path: {}", out_dir.display()))?;
        if out_abs.starts_with(&game_abs) {
            return Err(CliError::new(
                format!(
                    "output folder must be outside the game folder: {}",
                    out_dir.display()
                ),
                Some("choose a different output path".to_string()),
            ));
        }
    }

    let inputs = collect_supported_files(&game_dir)?;
    if inputs.is_empty() {
        return Err(CliError::new(
            format!("no .cel or .pak files found in {}", game_dir.display()),
            None,
        ));
    }

    let mut failed = 0usize;
    let mut written = 0usize;
    for input in &inputs {
        let relative_dir = input
            .parent()
            .and_then(|parent| parent.strip_prefix(&game_dir).ok())
            .unwrap_or_else(|| Path::new(""));
        let target_dir = out_dir.join(relative_dir);
        match celpak_core::export::export_file(input, &target_dir, ExportFormat::Auto) {
            Ok(paths) => {
                debug!("{} -> {} file(s)", input.display(), paths.len());
                written += paths.len();
            }
            Err(err) => {
                failed += 1;
                eprintln!("failed: {}: {}", input.display(), err);
            }
        }
    }

    if !quiet {
        eprintln!(
            "OK: {} of {} input(s) exported, {} file(s) written -> {}",
            inputs.len() - failed,
            inputs.len(),
            written,
            out_dir.display()
        );
    }
    if failed > 0 {
        return Err(CliError::new(
            format!("{} of {} input(s) failed to export", failed, inputs.len()),
            Some("use --verbose to see how each file was classified".to_string()),
        ));
    }
    Ok(())
}

fn collect_supported_files(game_dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    // Folder names such as `iotd [v1.29]` must match literally.
    let root = glob::Pattern::escape(&game_dir.to_string_lossy());
    let pattern = Path::new(&root).join("**").join("*");
    let paths = glob(&pattern.to_string_lossy()).map_err(|err| {
        CliError::new(
            format!("invalid game folder '{}'", game_dir.display()),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;

    let mut inputs = Vec::new();
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("failed to scan '{}'", game_dir.display()),
                Some(format!("scan error: {}", err)),
            )
        })?;
        if path.is_file() && has_supported_extension(&path) {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

fn ensure_not_input(input: &Path, out_dir: &Path) -> Result<(), CliError> {
    if !out_dir.exists() {
        return Ok(());
    }
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let out_abs = fs::canonicalize(out_dir)
        .with_context(|| format!("Failed to resolve output path: {}", out_dir.display()))?;
    if input_abs == out_abs {
        return Err(CliError::new(
            format!("output path must differ from input: {}", out_dir.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    if !out_abs.is_dir() {
        return Err(CliError::new(
            format!("output path is not a directory: {}", out_dir.display()),
            Some("pass a directory to -o/--out-dir".to_string()),
        ));
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .cel or .pak file".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a .cel or .pak file".to_string()),
        ));
    }
    if !has_supported_extension(input) {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .cel or .pak file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if input.exists() || !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern; expected .cel or .pak".to_string()),
        ));
    }
    if matches.len() > 1 {
        let hint = "pass a single image file, or use extract-all for a folder".to_string();
        let mut message = format!(
            "multiple files match pattern '{}' ({} matches)",
            pattern,
            matches.len()
        );
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        message.push_str("; matches: ");
        message.push_str(&listed);
        if matches.len() > 3 {
            message.push_str(", ...");
        }
        return Err(CliError::new(message, Some(hint)));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
