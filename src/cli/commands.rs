use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use super::render;
use crate::analytics::{
    StopWords, activity_heatmap, build_report, busiest_users, daily_timeline, emoji_frequency,
    month_activity, monthly_timeline, overview, participants, top_words, weekday_activity,
    word_cloud,
};
use crate::filters::{ParticipantFilter, apply_filters, parse_filter};
use crate::models::MessageRecord;
use crate::output::{write_csv, write_csv_file};
use crate::parsers::parse_chat_file;
use crate::utils::{format_path_with_tilde, resolve_stopwords_path};

#[derive(Parser)]
#[command(name = "chatlog-analyzer")]
#[command(version = "0.1.0")]
#[command(about = "Statistics for exported group chat logs", long_about = None)]
pub struct Cli {
    /// Log parser and analytics decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Chat export plus an optional record filter
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Exported chat file (.txt)
    pub file: PathBuf,

    /// Keep only matching records, e.g. `user:Alice since:2024-01-01 until:2024-06-30`
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Restrict statistics to one sender ("Overall" for everyone)
    #[arg(short, long)]
    pub user: Option<String>,
}

impl SelectionArgs {
    fn participant(&self) -> ParticipantFilter {
        ParticipantFilter::from_selection(self.user.as_deref())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Message, word, media and link counts
    Stats {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        selection: SelectionArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Busiest senders and each sender's share of messages
    Users {
        #[command(flatten)]
        input: InputArgs,
        /// Leave system notices out of the ranking
        #[arg(long)]
        exclude_notifications: bool,
        #[arg(long)]
        json: bool,
    },
    /// List senders, as offered by a participant picker
    Participants {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        json: bool,
    },
    /// Most common words
    Words {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        selection: SelectionArgs,
        /// Whitespace-separated stop-word list (default: $CHATLOG_STOPWORDS)
        #[arg(long)]
        stopwords: Option<PathBuf>,
        /// Show word-cloud weights instead of the top-words table
        #[arg(long)]
        cloud: bool,
        #[arg(long)]
        json: bool,
    },
    /// Emoji usage
    Emoji {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        selection: SelectionArgs,
        #[arg(long)]
        json: bool,
    },
    /// Messages per month, or per day with --daily
    Timeline {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        selection: SelectionArgs,
        /// One row per calendar day
        #[arg(long)]
        daily: bool,
        #[arg(long)]
        json: bool,
    },
    /// Busiest weekdays and months
    Activity {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        selection: SelectionArgs,
        #[arg(long)]
        json: bool,
    },
    /// Weekday by hour message grid
    Heatmap {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        selection: SelectionArgs,
        #[arg(long)]
        json: bool,
    },
    /// Every statistic as one JSON document
    Report {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        selection: SelectionArgs,
        #[arg(long)]
        stopwords: Option<PathBuf>,
    },
    /// Write the processed message table as CSV
    Export {
        #[command(flatten)]
        input: InputArgs,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    execute(cli)
}

/// Install the stderr subscriber: `RUST_LOG` if set, `warn` otherwise, crate at `debug` with
/// `--verbose`
fn init_tracing(verbose: bool) -> Result<()> {
    let mut filter =
        EnvFilter::builder().with_default_directive(LevelFilter::WARN.into()).from_env_lossy();
    if verbose {
        filter = filter.add_directive(
            "chatlog_analyzer=debug".parse().context("Invalid log directive")?,
        );
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

pub fn execute(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(command) => execute_command(command, &mut out),
        None => {
            writeln!(out, "Use --help for usage information")?;
            Ok(())
        }
    }
}

fn execute_command(command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Stats { input, selection, json } => {
            let records = load_records(&input)?;
            let filter = selection.participant();
            warn_if_unknown(&records, &filter);
            let summary = overview(&records, &filter);

            if json {
                return write_json(out, &summary);
            }
            let selected: Vec<&MessageRecord> = filter.select(&records).collect();
            render::overview(out, &filter, &summary, &selected)?;
            writeln!(out)?;
            writeln!(out, "Chat file: {}", format_path_with_tilde(&input.file))?;
        }
        Commands::Users { input, exclude_notifications, json } => {
            let records = load_records(&input)?;
            let busy = busiest_users(&records, !exclude_notifications);

            if json {
                return write_json(out, &busy);
            }
            render::busy_users(out, &busy)?;
        }
        Commands::Participants { input, json } => {
            let records = load_records(&input)?;
            let names = participants(&records);

            if json {
                return write_json(out, &names);
            }
            render::participants(out, &names)?;
        }
        Commands::Words { input, selection, stopwords, cloud, json } => {
            let records = load_records(&input)?;
            let stop_words = load_stop_words(stopwords.as_deref())?;
            let filter = selection.participant();
            warn_if_unknown(&records, &filter);

            if cloud {
                let cloud = word_cloud(&records, &filter, &stop_words);
                if json {
                    return write_json(out, &cloud);
                }
                render::word_weights(out, &cloud.weights)?;
            } else {
                let words = top_words(&records, &filter, &stop_words);
                if json {
                    return write_json(out, &words);
                }
                render::top_words(out, &words)?;
            }
        }
        Commands::Emoji { input, selection, json } => {
            let records = load_records(&input)?;
            let filter = selection.participant();
            warn_if_unknown(&records, &filter);
            let emojis = emoji_frequency(&records, &filter);

            if json {
                return write_json(out, &emojis);
            }
            render::emojis(out, &emojis)?;
        }
        Commands::Timeline { input, selection, daily, json } => {
            let records = load_records(&input)?;
            let filter = selection.participant();
            warn_if_unknown(&records, &filter);

            if daily {
                let points = daily_timeline(&records, &filter);
                if json {
                    return write_json(out, &points);
                }
                render::daily_timeline(out, &points)?;
            } else {
                let points = monthly_timeline(&records, &filter);
                if json {
                    return write_json(out, &points);
                }
                render::monthly_timeline(out, &points)?;
            }
        }
        Commands::Activity { input, selection, json } => {
            let records = load_records(&input)?;
            let filter = selection.participant();
            warn_if_unknown(&records, &filter);
            let weekdays = weekday_activity(&records, &filter);
            let months = month_activity(&records, &filter);

            if json {
                let both = serde_json::json!({ "weekdays": weekdays, "months": months });
                return write_json(out, &both);
            }
            render::activity(out, "Most busy day", &weekdays)?;
            writeln!(out)?;
            render::activity(out, "Most busy month", &months)?;
        }
        Commands::Heatmap { input, selection, json } => {
            let records = load_records(&input)?;
            let filter = selection.participant();
            warn_if_unknown(&records, &filter);
            let heatmap = activity_heatmap(&records, &filter);

            if json {
                return write_json(out, &heatmap);
            }
            render::heatmap(out, &heatmap)?;
        }
        Commands::Report { input, selection, stopwords } => {
            let records = load_records(&input)?;
            let stop_words = load_stop_words(stopwords.as_deref())?;
            let filter = selection.participant();
            warn_if_unknown(&records, &filter);

            return write_json(out, &build_report(&records, &filter, &stop_words));
        }
        Commands::Export { input, output } => {
            let records = load_records(&input)?;
            match output {
                Some(path) => {
                    write_csv_file(&records, &path)?;
                    writeln!(
                        out,
                        "Exported {} messages to {}",
                        records.len(),
                        format_path_with_tilde(&path)
                    )?;
                }
                None => write_csv(&records, &mut *out)?,
            }
        }
    }

    Ok(())
}

/// Parse the export and apply `--filter`
fn load_records(input: &InputArgs) -> Result<Vec<MessageRecord>> {
    let records = parse_chat_file(&input.file)?;

    let Some(expr) = input.filter.as_deref() else {
        return Ok(records);
    };
    let filter = parse_filter(expr).with_context(|| format!("Invalid --filter '{}'", expr))?;
    let before = records.len();
    let records = apply_filters(records, &filter);
    debug!(kept = records.len(), dropped = before - records.len(), "Applied record filter");
    Ok(records)
}

fn load_stop_words(explicit: Option<&Path>) -> Result<StopWords> {
    let Some(path) = resolve_stopwords_path(explicit) else {
        debug!("No stop-word list configured");
        return Ok(StopWords::new());
    };

    let stop_words = StopWords::from_file(&path).with_context(|| {
        format!("Failed to load stop words from {}", format_path_with_tilde(&path))
    })?;
    debug!(path = %path.display(), words = stop_words.len(), "Loaded stop words");
    Ok(stop_words)
}

fn warn_if_unknown(records: &[MessageRecord], filter: &ParticipantFilter) {
    if let Some(name) = filter.name()
        && !records.iter().any(|record| filter.matches(record))
    {
        warn!("No messages from '{}' in this chat", name);
    }
}

fn write_json<T: serde::Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to serialize JSON output")?;
    writeln!(out)?;
    Ok(())
}
