use clap::{Parser, Subcommand};

use translit_cli::commands::{config_ops, convert_ops};

#[derive(Parser)]
#[command(name = "translit", about = "Cyrillic-to-Latin transliteration tool")]
struct Cli {
    /// Extra standards TOML file to register next to the built-ins
    #[arg(long, global = true)]
    standards: Option<String>,
    /// Settings TOML file replacing the built-in defaults
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Directory for JSON trace logs (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate a file (or stdin) to stdout
    Convert {
        /// Input file; reads stdin when omitted
        file: Option<String>,
        /// Standard id (default: `--settings` default, else "GOST 7.79.B")
        #[arg(short, long)]
        standard: Option<String>,
    },
    /// List registered standards
    List {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the mapping table of a standard
    Show {
        /// Standard id
        id: String,
    },
    /// Export built-in standards as TOML
    StandardsExport,
    /// Validate a custom standards TOML file
    StandardsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = cli.trace_dir.as_deref() {
        translit_engine::api::trace_init(dir);
    }
    convert_ops::load_standards(cli.standards.as_deref());
    convert_ops::load_settings(cli.settings.as_deref());

    match cli.command {
        Command::Convert { file, standard } => {
            convert_ops::convert_cmd(file.as_deref(), standard.as_deref())
        }
        Command::List { json } => convert_ops::list_cmd(json),
        Command::Show { id } => convert_ops::show_cmd(&id),
        Command::StandardsExport => config_ops::standards_export(),
        Command::StandardsValidate { file } => config_ops::standards_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
