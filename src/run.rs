use crate::err::error::ToolError;

#[cfg(feature = "cli")]
use {
    crate::cli::command::{icon::icon, rewrite::rewrite},
    crate::cli::init_tracing::init_tracing,
    crate::icon::icon_spec::{ACCENT_HEX, ICON_OUTPUT, IconSpec},
    crate::rewrite::options::{DEFAULT_ROOT, DEFAULT_SUFFIX, NEW_IMPORT, OLD_IMPORT, RewriteOptions},
    clap::{Parser, Subcommand, error::ErrorKind},
    std::io,
    std::path::PathBuf,
};

// ======================= CLI subcommands =======================

#[cfg(feature = "cli")]
#[derive(Debug, Subcommand)]
enum Command {
    /// Draw the 1024×1024 wallet icon and save it as PNG
    Icon {
        /// Output PNG path. The directory must already exist.
        #[arg(short, long, default_value = ICON_OUTPUT)]
        output: PathBuf,

        /// Accent colour as #RRGGBB.
        #[arg(long, default_value = ACCENT_HEX)]
        color: String,
    },
    /// Replace a literal string in every matching file under a directory
    Rewrite {
        /// Directory to walk recursively.
        #[arg(long, default_value = DEFAULT_ROOT)]
        root: PathBuf,

        /// Only files whose name ends with this suffix are visited.
        #[arg(long, default_value = DEFAULT_SUFFIX)]
        suffix: String,

        /// Exact text to search for (case-sensitive, no patterns).
        #[arg(long, default_value = OLD_IMPORT)]
        from: String,

        /// Replacement text.
        #[arg(long, default_value = NEW_IMPORT)]
        to: String,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Parser)]
#[command(name = "bexly-tools", version, about = "Bexly developer utilities", long_about = "Draws the Bexly wallet icon and rewrites import paths across a source tree.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

// ======================= Helpers =======================

#[cfg(feature = "cli")]
fn run_command(cmd: Command) -> Result<(), ToolError> {
    match cmd {
        Command::Icon { output, color } => icon(&IconSpec { output, accent: color, ..IconSpec::default() }, &mut io::stdout().lock()),
        Command::Rewrite { root, suffix, from, to } => rewrite(&RewriteOptions { root, suffix, from, to }, &mut io::stdout().lock()),
    }
}

/// `wallet-icon`: no arguments, original constants.
#[cfg(feature = "cli")]
pub fn run_icon() -> Result<(), ToolError> {
    init_tracing();
    icon(&IconSpec::default(), &mut io::stdout().lock())
}

/// `rename-import`: no arguments, original constants.
#[cfg(feature = "cli")]
pub fn run_rewrite() -> Result<(), ToolError> {
    init_tracing();
    rewrite(&RewriteOptions::default(), &mut io::stdout().lock())
}

// ======================= Entry point ========================

#[cfg(feature = "cli")]
pub fn run() -> Result<(), ToolError> {
    // Help/Version → print and return Ok(())
    // Other errors → print and exit with clap's code
    let Some(cli) = (match Cli::try_parse() {
        Ok(cli) => Some(cli),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                None
            }
            _ => {
                let _ = e.print();
                std::process::exit(e.exit_code());
            }
        },
    }) else {
        return Ok(());
    };

    init_tracing();

    match cli.command {
        Some(cmd) => run_command(cmd),
        None => {
            eprintln!("error: a subcommand is required\n\nUse --help for more information.");
            std::process::exit(2);
        }
    }
}

#[cfg(not(feature = "cli"))]
pub fn run() -> Result<(), ToolError> {
    Err(ToolError::new("runtime-features-disabled").with_arg("features", "cli"))
}
