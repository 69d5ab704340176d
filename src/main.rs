use clap::{ArgAction, Args, Parser, Subcommand};
use cnfmt::commands::{bytes::BytesOptions, cn::CnOptions, config_cmd::ConfigOptions};
use cnfmt::commands::{execute_bytes, execute_cn, execute_config};
use cnfmt::error::AppError;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    cnfmt::logging::init(cli.verbose);

    match cli.command {
        Commands::Bytes(args) => {
            let options =
                BytesOptions { sizes: args.sizes, decimals: args.decimals, strict: args.strict };
            execute_bytes(options)?;
        }
        Commands::Cn(args) => {
            let options = CnOptions { classes: args.classes, json: args.json };
            execute_cn(options)?;
        }
        Commands::Config(args) => {
            let options = ConfigOptions {
                show_path: args.path,
                edit: args.edit,
                set_decimals: args.set_decimals,
            };
            execute_config(options)?;
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(
    name = "cnfmt",
    version,
    about = "Format byte sizes and merge utility class names from the terminal."
)]
struct Cli {
    /// Log resolved inputs and configuration to stderr.
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format byte counts as human-readable sizes.
    #[command(visible_alias = "b")]
    Bytes(BytesArgs),
    /// Join class names and drop utilities overridden by later ones.
    #[command(visible_alias = "merge")]
    Cn(CnArgs),
    /// Manage cnfmt configuration (default precision, merge prefix).
    #[command(visible_alias = "cfg")]
    Config(ConfigArgs),
}

#[derive(Args)]
struct BytesArgs {
    /// Number of decimal places (defaults to the configured value, 2).
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    decimals: Option<i32>,

    /// Fail instead of clamping sizes beyond the YB unit.
    #[arg(long = "strict", action = ArgAction::SetTrue)]
    strict: bool,

    /// Sizes in bytes (e.g. 1536, -2048, 0.5) or with a unit (e.g. "1.5 MiB", 10GB).
    #[arg(value_name = "SIZE", required = true, num_args = 1.., allow_negative_numbers = true)]
    sizes: Vec<String>,
}

#[derive(Args)]
struct CnArgs {
    /// Parse each argument as a JSON class value (string, array, object, null, bool, number).
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    /// Class names, in order of increasing precedence.
    #[arg(value_name = "CLASS", num_args = 0.., allow_hyphen_values = true)]
    classes: Vec<String>,
}

#[derive(Args)]
struct ConfigArgs {
    /// Show the configuration file path.
    #[arg(long = "path", action = ArgAction::SetTrue)]
    path: bool,

    /// Open the configuration file in $VISUAL or $EDITOR (falls back to vi).
    #[arg(long = "edit", action = ArgAction::SetTrue)]
    edit: bool,

    /// Persist the default number of decimal places for `cnfmt bytes`.
    #[arg(long = "set-decimals", value_name = "N", allow_negative_numbers = true)]
    set_decimals: Option<i32>,
}
