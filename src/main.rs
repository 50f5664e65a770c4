//! Wordle server - CLI
//!
//! Serves the kid-friendly word game, or curates its word lists.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wordle_server::{
    commands::{CurateConfig, ServeConfig, run_curate, run_serve},
    game::DEFAULT_MAX_GUESSES,
    output::print_curation_result,
    server::ServerConfig,
    wordlists::curate::{CURATED_LENGTHS, CurationInputs},
};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_WORDLIST_DIR: &str = "wordlist";

#[derive(Parser)]
#[command(
    name = "wordle_server",
    about = "Kid-friendly Wordle-style word game server",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the game (default)
    Serve(ServeArgs),

    /// Build curated word lists from local source files
    Curate(CurateArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Directory holding the front end
    #[arg(long, default_value = DEFAULT_STATIC_DIR)]
    static_dir: PathBuf,

    /// Directory holding curated word lists
    #[arg(short = 'w', long, default_value = DEFAULT_WORDLIST_DIR)]
    wordlist_dir: PathBuf,

    /// Guesses allowed per game
    #[arg(short, long, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            wordlist_dir: PathBuf::from(DEFAULT_WORDLIST_DIR),
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

impl From<ServeArgs> for ServeConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            server: ServerConfig {
                host: args.host,
                port: args.port,
                static_dir: args.static_dir,
            },
            wordlist_dir: args.wordlist_dir,
            max_guesses: args.max_guesses,
        }
    }
}

#[derive(Args)]
struct CurateArgs {
    /// Dictionary files, one word per line or a JSON array
    #[arg(short, long = "dict", required = true, num_args = 1..)]
    dictionaries: Vec<PathBuf>,

    /// Frequency list, `word count` per line, most common first
    #[arg(short, long)]
    freq: Option<PathBuf>,

    /// Profanity lists to exclude
    #[arg(long, num_args = 1..)]
    profanity: Vec<PathBuf>,

    /// Name lists to exclude
    #[arg(long, num_args = 1..)]
    names: Vec<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_WORDLIST_DIR)]
    out: PathBuf,

    /// Word lengths to curate
    #[arg(short, long, value_delimiter = ',', default_values_t = CURATED_LENGTHS)]
    lengths: Vec<usize>,
}

impl From<CurateArgs> for CurateConfig {
    fn from(args: CurateArgs) -> Self {
        Self {
            inputs: CurationInputs {
                dictionaries: args.dictionaries,
                frequency: args.freq,
                profanity: args.profanity,
                names: args.names,
            },
            out_dir: args.out,
            lengths: args.lengths,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Default to serving if no command given
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Serve(ServeArgs::default()));

    match command {
        Commands::Serve(args) => run_serve(&args.into()),
        Commands::Curate(args) => {
            let outcomes = run_curate(&args.into())?;
            print_curation_result(&outcomes);
            Ok(())
        }
    }
}
