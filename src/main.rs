use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use minigit::areas::locator::{GIT_DIR_ENV, RepositoryLocator};
use minigit::areas::repository::Repository;
use minigit::artifacts::core::{PagerWriter, colorize_output, should_page};
use minigit::commands::plumbing::cat_file::CatFileMode;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "minigit",
    version = "0.1.0",
    about = "A mini git client",
    long_about = "A minimal reader for git's loose object store. \
    It can initialize an empty repository and inspect the objects stored in it.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        short = 'g',
        long = "git-dir",
        global = true,
        help = "Set the path to the repository (defaults to $GIT_DIR, then .git)"
    )]
    git_dir: Option<String>,
    #[arg(short, long, global = true, help = "Verbose logging")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        visible_alias = "i",
        about = "Initialize a git repository",
        long_about = "This command creates the objects and refs directories and points HEAD \
        at the master branch. Running it on an existing repository is safe."
    )]
    Init,
    #[command(
        name = "cat-file",
        visible_alias = "c",
        about = "Display the contents of objects",
        long_about = "This command prints the body of each object, in the order given. \
        It stops at the first object that cannot be read."
    )]
    CatFile {
        #[arg(
            short = 't',
            long = "type",
            conflicts_with = "pretty_print",
            help = "Show the object type"
        )]
        show_type: bool,
        #[arg(
            short = 'p',
            long = "pretty-print",
            help = "Pretty-print the contents of the object"
        )]
        pretty_print: bool,
        #[arg(index = 1, required = true, help = "The object hashes to print")]
        hashes: Vec<String>,
    },
    #[command(
        name = "ls-tree",
        visible_alias = "ls",
        about = "List every loose object",
        long_about = "This command walks the object store and prints the hash, type and body \
        of every loose object, sorted by hash."
    )]
    LsTree,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    colored::control::set_override(colorize_output());

    let mut locator = RepositoryLocator::new(std::env::var(GIT_DIR_ENV).ok().as_deref());
    if let Some(git_dir) = &cli.git_dir {
        locator.set_root(git_dir).context("Error setting git-dir")?;
    }

    let pager = should_page().then(minus::Pager::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };
    let repository = Repository::new(locator, writer);

    let result = run(&cli.command, &repository);

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    result
}

fn run(command: &Commands, repository: &Repository) -> Result<()> {
    match command {
        Commands::Init => {
            let report = repository.init()?;
            if !report.is_success() {
                anyhow::bail!(
                    "Failed to initialize git directory [ {} ]: {} step(s) failed",
                    repository.path().display(),
                    report.failures.len()
                );
            }
            tracing::info!(
                "Initialized git directory GIT_DIR=[ {} ]",
                repository.path().display()
            );
            Ok(())
        }
        Commands::CatFile {
            show_type,
            pretty_print,
            hashes,
        } => {
            let mode = if *show_type && !*pretty_print {
                CatFileMode::Type
            } else {
                CatFileMode::Body
            };
            repository.cat_file(hashes, mode)
        }
        Commands::LsTree => repository.ls_tree(),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("minigit={level}")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_level(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
