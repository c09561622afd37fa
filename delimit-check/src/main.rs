use std::fs::read_to_string;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use delimit::{
    CheckOptions, Document, Mode, SymbolPairs, VoidTags,
    editing::{LineBuffer, RangeTransform},
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(version, about="delimit-check\n\n\
    Checks that brackets or markup tags in source files are balanced,\n\
    and patches files by line range.\n\n\
    Exit status: 0 when balanced, 1 when issues were found, 2 on errors.")]
struct Args {
    /// Log more to stderr: -v for debug, -vv for trace.
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report unbalanced delimiters
    Check(CheckArgs),
    /// Insert lines so the first of them lands on a given line
    Insert(InsertArgs),
    /// Cut a block of lines and paste it after another line
    Move(MoveArgs),
    /// Replace a block of lines
    Replace(ReplaceArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, clap::Args)]
struct CheckArgs {
    /// Check markup tags line by line instead of bracket characters.
    #[arg(long)]
    tags: bool,

    /// Bracket pairs to track, written as consecutive opener/closer characters.
    #[arg(long, value_name = "PAIRS", default_value = "()[]{}", conflicts_with = "tags")]
    pairs: String,

    /// Comma separated tag names that never need a closing tag.
    /// Replaces the default list (br, hr, img, input, link, meta, ...).
    #[arg(long = "void", value_name = "TAGS", value_delimiter = ',', requires = "tags")]
    void_tags: Option<Vec<String>>,

    /// List at most N of the most recent unclosed delimiters. N must be at least 1.
    #[arg(long, value_name = "N")]
    max_pending: Option<NonZeroUsize>,

    /// Keep scanning after a closer with nothing open.
    /// Default in symbol mode.
    #[arg(long, conflicts_with = "halt_on_unexpected")]
    keep_going: bool,

    /// Stop scanning at the first closer with nothing open.
    /// Default in tag mode.
    #[arg(long)]
    halt_on_unexpected: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Files to check. `-` reads stdin.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(Debug, clap::Args)]
struct EditTarget {
    /// File to edit in place.
    file: PathBuf,

    /// Refuse to touch files with fewer lines than this.
    #[arg(long, value_name = "LINES")]
    min_lines: Option<usize>,

    /// Print the edited file to stdout instead of writing it back.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, clap::Args)]
#[group(required = true, multiple = false)]
struct Content {
    /// The new lines, separated by newlines. An empty string means no lines.
    #[arg(long)]
    text: Option<String>,

    /// Read the new lines from a file.
    #[arg(long, value_name = "FILE")]
    from: Option<PathBuf>,
}

#[derive(Debug, clap::Args)]
struct InsertArgs {
    /// One-based line number the first new line will have.
    #[arg(long, value_name = "LINE")]
    at: usize,

    #[command(flatten)]
    content: Content,

    #[command(flatten)]
    target: EditTarget,
}

#[derive(Debug, clap::Args)]
struct MoveArgs {
    /// First line of the block, one-based.
    #[arg(long, value_name = "LINE")]
    start: usize,

    /// Last line of the block, inclusive.
    #[arg(long, value_name = "LINE")]
    end: usize,

    /// Paste the block after this line, numbered as before the cut. 0 for the top.
    #[arg(long, value_name = "LINE")]
    after: usize,

    #[command(flatten)]
    target: EditTarget,
}

#[derive(Debug, clap::Args)]
struct ReplaceArgs {
    /// First line to replace, one-based.
    #[arg(long, value_name = "LINE")]
    start: usize,

    /// Last line to replace, inclusive.
    #[arg(long, value_name = "LINE")]
    end: usize,

    #[command(flatten)]
    content: Content,

    #[command(flatten)]
    target: EditTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Clean,
    Unbalanced,
    Failed,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args.command) {
        Ok(Outcome::Clean) => ExitCode::SUCCESS,
        Ok(Outcome::Unbalanced) => ExitCode::from(1),
        Ok(Outcome::Failed) => ExitCode::from(2),
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(2)
        },
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: Command) -> Result<Outcome> {
    match command {
        Command::Check(args) => check(&args),
        Command::Insert(args) => edit(&args.target, RangeTransform::Insert {
            at: args.at,
            lines: args.content.lines()?,
        }),
        Command::Move(args) => edit(&args.target, RangeTransform::Move {
            start: args.start,
            end: args.end,
            after: args.after,
        }),
        Command::Replace(args) => edit(&args.target, RangeTransform::Replace {
            start: args.start,
            end: args.end,
            lines: args.content.lines()?,
        }),
    }
}

impl CheckArgs {
    fn options(&self) -> Result<CheckOptions> {
        let mode = if self.tags {
            Mode::Tags(match &self.void_tags {
                Some(names) => names.iter().map(|name| name.trim()).collect(),
                None => VoidTags::default(),
            })
        } else {
            Mode::Symbols(
                SymbolPairs::parse(&self.pairs)
                    .context(format!("Invalid delimiter pairs: {:?}", self.pairs))?,
            )
        };

        let mut options = CheckOptions::new(mode)
            .with_pending_limit(self.max_pending.map(NonZeroUsize::get));
        if self.keep_going {
            options = options.with_halt_on_unexpected_close(false);
        }
        if self.halt_on_unexpected {
            options = options.with_halt_on_unexpected_close(true);
        }
        Ok(options)
    }
}

fn check(args: &CheckArgs) -> Result<Outcome> {
    let options = args.options()?;
    debug!(?options, files = args.files.len(), "checking");

    let with_headers = args.files.len() > 1;
    let mut outcome = Outcome::Clean;
    for path in &args.files {
        let document = match load(path) {
            Ok(document) => document,
            Err(err) => {
                eprintln!("Error: {err:?}");
                outcome = Outcome::Failed;
                continue;
            },
        };
        let report = document.check(&options);
        if !report.balanced() && outcome == Outcome::Clean {
            outcome = Outcome::Unbalanced;
        }

        match args.format {
            Format::Text => {
                if with_headers {
                    println!("==> {} <==", document.path().display());
                }
                println!("{report}");
            },
            Format::Json => {
                let mut value = serde_json::to_value(&report)
                    .context("Could not serialize report")?;
                value["path"] = document.path().display().to_string().into();
                println!("{value}");
            },
        }
    }

    Ok(outcome)
}

fn load(path: &Path) -> Result<Document> {
    if path == Path::new("-") {
        Document::from_reader("<stdin>", std::io::stdin().lock())
            .context("Could not read document from stdin")
    } else {
        Document::load(path).context(format!("Could not read file from path: {:?}", path))
    }
}

impl Content {
    fn lines(&self) -> Result<Vec<String>> {
        match (&self.text, &self.from) {
            (Some(text), _) => Ok(LineBuffer::fragment(text)),
            (None, Some(path)) => {
                let text = read_to_string(path)
                    .context(format!("Could not read file from path: {:?}", path))?;
                Ok(LineBuffer::fragment(&text))
            },
            (None, None) => anyhow::bail!("Either --text or --from is required"),
        }
    }
}

fn edit(target: &EditTarget, transform: RangeTransform) -> Result<Outcome> {
    let mut document = Document::load(&target.file)
        .context(format!("Could not read file from path: {:?}", target.file))?;
    let summary = document
        .apply(&transform, target.min_lines)
        .context(format!("Refusing to edit {:?}", target.file))?;

    if target.dry_run {
        eprintln!("{summary}");
        print!("{}", document.text());
    } else {
        document
            .save()
            .context(format!("Could not write file to path: {:?}", target.file))?;
        println!("{summary}");
    }

    Ok(Outcome::Clean)
}
