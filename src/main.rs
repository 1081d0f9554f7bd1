//! Spelling Tiles - CLI
//!
//! Spelling practice with TUI and CLI modes, plus word list management.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, builder::RangedU64ValueParser};
use colored::Colorize;
use spelling_tiles::{
    commands::{
        add_starter_words, add_words, clear_words, export_words, import_words, list_words,
        print_edit_report, remove_words, run_simple,
    },
    output::print_word_list,
    practice::{
        DEFAULT_POOL_MULTIPLIER, DEFAULT_VOWEL_PROBABILITY, MAX_POOL_MULTIPLIER, PoolConfig,
        PracticeConfig, PracticeError, Session,
    },
    speech::{Announcer, CommandAnnouncer, SilentAnnouncer},
    wordlists::loader::{DEFAULT_FILE_NAME, load_store},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "spelling_tiles",
    about = "Spelling practice with spoken prompts and letter tiles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_FILE_NAME)]
    store: PathBuf,

    /// Seed for reproducible shuffles and tiles
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Tile pool size as a multiple of word length
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_POOL_MULTIPLIER,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_POOL_MULTIPLIER as u64)
    )]
    pool_multiplier: usize,

    /// Chance (0-1) that a distractor tile is a vowel
    #[arg(long, global = true, default_value_t = DEFAULT_VOWEL_PROBABILITY)]
    vowel_chance: f64,

    /// Text-to-speech program used to say words (e.g. espeak, say)
    #[arg(long, global = true)]
    speech_command: Option<String>,

    /// Extra argument for the speech program; `{rate}` becomes the speaking rate
    #[arg(long = "speech-arg", global = true, allow_hyphen_values = true)]
    speech_args: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI practice (default)
    Play,

    /// Simple line-based practice without TUI
    Simple,

    /// Manage the word list
    Words {
        #[command(subcommand)]
        action: WordsAction,
    },
}

#[derive(Subcommand)]
enum WordsAction {
    /// Show the word list
    List,

    /// Add one or more words
    Add {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Remove words by text or list number
    Remove {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Remove every word
    Clear,

    /// Replace the list with an exported file
    Import {
        /// File written by `words export`
        file: PathBuf,
    },

    /// Write the list to a shareable file
    Export {
        #[arg(default_value = DEFAULT_FILE_NAME)]
        file: PathBuf,
    },

    /// Add the built-in starter words
    Starter,
}

impl Cli {
    fn practice_config(&self) -> PracticeConfig {
        PracticeConfig {
            pool: PoolConfig::new(self.pool_multiplier, self.vowel_chance),
            seed: self.seed,
        }
    }

    fn announcer(&self) -> Box<dyn Announcer> {
        match &self.speech_command {
            Some(program) => Box::new(CommandAnnouncer::new(program, self.speech_args.clone())),
            None => Box::new(SilentAnnouncer),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match &cli.command {
        None | Some(Commands::Play) => run_play_command(&cli),
        Some(Commands::Simple) => run_simple_command(&cli),
        Some(Commands::Words { action }) => run_words_command(&cli.store, action),
    }
}

/// Start a session from the saved list, or explain why not
fn begin_session(cli: &Cli) -> Result<Option<Session>> {
    let list = load_store(&cli.store)
        .with_context(|| format!("reading word list {}", cli.store.display()))?;

    match Session::begin(list.words(), cli.practice_config()) {
        Ok(session) => Ok(Some(session)),
        Err(PracticeError::NoWords) => {
            println!("{}", PracticeError::NoWords.to_string().yellow().bold());
            println!("Try: spelling_tiles words add <word>...  or  spelling_tiles words starter");
            Ok(None)
        }
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use spelling_tiles::interactive::{App, run_tui};

    let Some(session) = begin_session(cli)? else {
        return Ok(());
    };
    run_tui(App::new(session, cli.announcer()))
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let Some(session) = begin_session(cli)? else {
        return Ok(());
    };
    let mut announcer = cli.announcer();
    run_simple(session, announcer.as_mut())?;
    Ok(())
}

fn run_words_command(store: &Path, action: &WordsAction) -> Result<()> {
    match action {
        WordsAction::List => print_word_list(list_words(store)?.words()),
        WordsAction::Add { words } => print_edit_report("added", &add_words(store, words)?),
        WordsAction::Remove { words } => {
            print_edit_report("removed", &remove_words(store, words)?);
        }
        WordsAction::Clear => {
            let removed = clear_words(store)?;
            println!("Removed {removed} words");
        }
        WordsAction::Import { file } => {
            let report = import_words(store, file)
                .with_context(|| format!("importing {}", file.display()))?;
            println!(
                "Imported {} words ({} skipped)",
                report.imported.to_string().green().bold(),
                report.skipped
            );
        }
        WordsAction::Export { file } => {
            let count = export_words(store, file)?;
            println!("Exported {count} words to {}", file.display());
        }
        WordsAction::Starter => print_edit_report("added", &add_starter_words(store)?),
    }
    Ok(())
}
