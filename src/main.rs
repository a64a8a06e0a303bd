//! book-index: turn a watermarked study-guide transcription into a back-of-book index.

mod error;
mod filter;
mod index;
mod morphology;
mod noise;
mod pages;
mod tokenize;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::IndexError;
use crate::filter::{WordFilter, DEFAULT_MIN_LEN};
use crate::index::{SortOrder, WordIndex, DEFAULT_THRESHOLD};
use crate::morphology::Morphology;
use crate::noise::{NoiseSource, NoiseWords, DEFAULT_WORDLIST_URL};
use crate::pages::PageSelection;
use crate::tokenize::Normalizer;

#[derive(Parser, Debug)]
#[command(name = "book-index")]
#[command(about = "Build a back-of-book word index from a text transcription (e.g. pdftotext output)")]
struct Cli {
    /// Text file of the book.
    #[arg(long, short)]
    input_file: PathBuf,

    /// Where to write the index [default: input path without ".pdf", plus ".txt"].
    #[arg(long, short)]
    output_file: Option<PathBuf>,

    /// Full name on the "Licensed To:" watermark that separates pages.
    #[arg(long, short = 'n')]
    student_name: Option<String>,

    /// Which words count as noise.
    #[arg(long, short, value_enum, default_value_t = Mode::Common)]
    mode: Mode,

    /// Common-word list to fetch in common mode.
    #[arg(long, default_value = DEFAULT_WORDLIST_URL)]
    wordlist_url: String,

    /// Read the common-word list from a local file instead of fetching it.
    #[arg(long)]
    wordlist_file: Option<PathBuf>,

    /// Skip the first page and the last two pages (contents and appendix).
    #[arg(long)]
    strict: bool,

    /// Output ordering.
    #[arg(long, value_enum, default_value_t = SortOrder::Word)]
    sort: SortOrder,

    /// Leave out words found on this many pages or more.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: usize,

    /// Shortest word to index.
    #[arg(long, default_value_t = DEFAULT_MIN_LEN)]
    min_length: usize,

    /// Merge words by Porter2 stem instead of singular form.
    #[arg(long)]
    stem: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Drop every word in a large common-English wordlist.
    Common,
    /// Drop only stopwords.
    #[value(alias = "f")]
    Stopwords,
}

impl Cli {
    fn noise_source(&self) -> NoiseSource {
        match (self.mode, &self.wordlist_file) {
            (Mode::Stopwords, _) => NoiseSource::Stopwords,
            (Mode::Common, Some(path)) => NoiseSource::CommonFile { path: path.clone() },
            (Mode::Common, None) => NoiseSource::Common {
                url: self.wordlist_url.clone(),
            },
        }
    }

    fn output_path(&self) -> PathBuf {
        self.output_file
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input_file))
    }
}

/// `book.pdf` -> `book.txt`, `book` -> `book.txt`
fn default_output_path(input: &Path) -> PathBuf {
    let input = input.to_string_lossy();
    let stem = input.strip_suffix(".pdf").unwrap_or(&input);
    PathBuf::from(format!("{stem}.txt"))
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    run(&cli)?;
    Ok(())
}

/// Resolve noise words, index the input and write the output. Returns the number of lines written.
fn run(cli: &Cli) -> Result<usize, IndexError> {
    match cli.mode {
        Mode::Common => info!("common word removal mode"),
        Mode::Stopwords => info!("stop word removal mode"),
    }
    let source = cli.noise_source();
    let noise = NoiseWords::load(&source)?;
    info!(words = noise.len(), source = %source.describe(), "noise words loaded");

    let document = fs::read_to_string(&cli.input_file).map_err(|e| IndexError::io(&cli.input_file, e))?;
    let delimiter = pages::delimiter_for(cli.student_name.as_deref());
    let selection = if cli.strict {
        PageSelection::Strict
    } else {
        PageSelection::All
    };
    let pages = pages::segment(&document, &delimiter, selection)?;
    if pages.is_empty() {
        warn!(%delimiter, "no pages found, the index will be empty");
    } else {
        info!(pages = pages.len(), "document segmented");
    }

    let morphology = if cli.stem {
        Morphology::Stem
    } else {
        Morphology::Lemma
    };
    let normalizer = Normalizer::new(morphology);
    let filter = WordFilter::new(&noise).with_min_len(cli.min_length);
    let idx = WordIndex::build(&pages, &normalizer, &filter);
    if idx.is_empty() {
        warn!("no eligible words found, the index will be empty");
    }

    let lines = idx.render(cli.sort, cli.threshold);
    let output = cli.output_path();
    index::save_index(&lines, &output)?;
    info!(
        entries = lines.len(),
        words = idx.len(),
        path = %output.display(),
        "index written"
    );
    Ok(lines.len())
}
