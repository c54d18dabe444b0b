mod display;

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use url::Url;
use wordglobe_core::config::{DEFAULT_API_BASE, DEFAULT_OWNER, DEFAULT_REPO, DEFAULT_WEB_BASE};
use wordglobe_core::issue_form::{all_feedback_url, manual_issue_url};
use wordglobe_core::render::feedback_html;
use wordglobe_core::sanitize::sanitize_all;
use wordglobe_core::{
    DashboardData, FeedbackForm, Submission, SubmissionState, TrackerConfig, ViewState,
};
use wordglobe_store::{DirStore, FeedbackCache};
use wordglobe_sync::{
    BrowserDispatcher, DispatchError, FeedbackService, IssueDispatcher, SubmitOutcome,
    TrackerClient,
};

const PRINTED_FORM_MESSAGE: &str =
    "Issue form ready. Open the link above to submit it on GitHub. Also saved locally.";

#[derive(Parser, Debug)]
#[command(name = "wordglobe", version, about = "Word globe dashboards and team feedback")]
struct Cli {
    #[command(flatten)]
    tracker: TrackerArgs,

    /// Directory holding the local feedback cache
    #[arg(long, env = "WORDGLOBE_CACHE_DIR", global = true)]
    cache_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct TrackerArgs {
    /// Tracker repository owner
    #[arg(long, env = "WORDGLOBE_OWNER", default_value = DEFAULT_OWNER, global = true)]
    owner: String,

    /// Tracker repository name
    #[arg(long, env = "WORDGLOBE_REPO", default_value = DEFAULT_REPO, global = true)]
    repo: String,

    #[arg(long, env = "WORDGLOBE_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    api_base: String,

    #[arg(long, env = "WORDGLOBE_WEB_BASE", default_value = DEFAULT_WEB_BASE, global = true)]
    web_base: String,
}

impl TrackerArgs {
    fn config(&self) -> TrackerConfig {
        TrackerConfig::new(&self.owner, &self.repo, &self.api_base, &self.web_base)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the catalogue grouped by theme
    Words,
    /// Find words containing a term
    Search { term: String },
    /// Show a word's dashboard and its team feedback
    Show {
        word: String,
        /// Print the feedback section as HTML
        #[arg(long)]
        html: bool,
        /// Seed for the generated dashboard values
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Submit feedback for a word
    Submit {
        word: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Star rating, 1 to 5
        #[arg(long)]
        rating: u8,
        #[arg(long, default_value = "")]
        comments: String,
        /// Print the issue form URL instead of opening a browser
        #[arg(long)]
        no_browser: bool,
    },
    /// Delete a locally cached record by its cache index
    Delete { word: String, index: usize },
    /// Print the tracker links for a word
    Links { word: String },
}

/// Prints the issue form URL for the author to open by hand.
struct PrintDispatcher;

impl IssueDispatcher for PrintDispatcher {
    fn dispatch(&self, url: &Url) -> Result<(), DispatchError> {
        println!("Open this link to file the issue:\n  {url}");
        Ok(())
    }
}

/// Outcome text; a printed link was not opened, so it gets its own wording.
fn submit_message(outcome: &SubmitOutcome, no_browser: bool) -> &'static str {
    if no_browser && outcome.state == SubmissionState::Success {
        PRINTED_FORM_MESSAGE
    } else {
        outcome.message()
    }
}

fn default_cache_dir() -> anyhow::Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("dev", "tislov", "wordglobe")
        .context("no home directory; pass --cache-dir")?;
    Ok(dirs.data_dir().join("feedback"))
}

fn open_cache(cache_dir: Option<PathBuf>) -> anyhow::Result<FeedbackCache<DirStore>> {
    let root = match cache_dir {
        Some(dir) => dir,
        None => default_cache_dir()?,
    };
    let store = DirStore::open(&root)
        .with_context(|| format!("opening feedback cache at {}", root.display()))?;
    Ok(FeedbackCache::new(store))
}

fn resolve_word(view: &mut ViewState, word: &str) -> anyhow::Result<&'static str> {
    match view.select(word) {
        Some(word) => Ok(word),
        None => bail!("unknown word: {word} (try `wordglobe search`)"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = cli.tracker.config();
    tracing::debug!(owner = %config.owner, repo = %config.repo, "tracker configured");
    let mut view = ViewState::new();

    match cli.command {
        Command::Words => display::print_catalogue(),
        Command::Search { term } => display::print_search(&term, view.search(&term)),
        Command::Show { word, html, seed } => {
            let word = resolve_word(&mut view, &word)?;
            let cache = open_cache(cli.cache_dir)?;
            let client = TrackerClient::new(&config).context("building tracker client")?;
            let service = FeedbackService::new(config, client, PrintDispatcher, cache);
            let merged = service.load(word).await.context("loading feedback")?;

            if html {
                let link = all_feedback_url(service.config())?;
                let entries = sanitize_all(&merged, service.config());
                println!("{}", feedback_html(word, &entries, link.as_str()));
            } else {
                let data = match seed {
                    Some(seed) => DashboardData::generate(word, &mut StdRng::seed_from_u64(seed)),
                    None => DashboardData::generate(word, &mut rand::rng()),
                };
                display::print_dashboard(&data);
                display::print_feedback(&merged, service.config());
            }
            view.close_dashboard();
        }
        Command::Submit {
            word,
            name,
            email,
            rating,
            comments,
            no_browser,
        } => {
            let word = resolve_word(&mut view, &word)?;
            let cache = open_cache(cli.cache_dir)?;
            let client = TrackerClient::new(&config).context("building tracker client")?;
            let dispatcher: &dyn IssueDispatcher = if no_browser {
                &PrintDispatcher
            } else {
                &BrowserDispatcher
            };
            let service = FeedbackService::new(config, client, dispatcher, cache);

            let form = FeedbackForm {
                name,
                email,
                rating,
                comments,
            };
            let mut submission = Submission::new(word);
            let outcome = service
                .submit(&mut submission, &form)
                .with_context(|| format!("submitting feedback for {word}"))?;
            println!("{}", submit_message(&outcome, no_browser));
        }
        Command::Delete { word, index } => {
            let word = resolve_word(&mut view, &word)?;
            let cache = open_cache(cli.cache_dir)?;
            match cache.delete_at(word, index)? {
                Some(removed) => println!("Deleted feedback from {} on {word}", removed.name),
                None => println!("No local feedback at index {index} for {word}"),
            }
        }
        Command::Links { word } => {
            let word = resolve_word(&mut view, &word)?;
            println!("  {:<26} {}", "New feedback issue", manual_issue_url(&config, word)?);
            println!("  {:<26} {}", "All feedback", all_feedback_url(&config)?);
        }
    }
    Ok(())
}
