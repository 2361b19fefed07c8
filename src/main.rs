//! seedlex CLI - Expression Extraction & Scoring Engine
//!
//! Command-line interface for extracting ranked tokens from a corpus and
//! generating word lists and mangling rules from them.

use clap::{Args, Parser, Subcommand};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use log::{error, info, warn};
use seedlex::{
    read_corpus, Config, ExpressionExtractor, ExtractionResult, LemmaTable, Lemmatization, LineOutput, Result,
    RuleGenerator, SnapshotStore, WhatlangClassifier, WordFreqLexicon, WordListGenerator,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "seedlex")]
#[command(version)]
#[command(about = "Extracts ranked password seed tokens from a text corpus", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract and score tokens, then save a snapshot
    Extract(ExtractArgs),

    /// Write the word list and rules from the newest snapshot
    Generate {
        /// Case identifier
        #[arg(short, long)]
        case_id: String,

        /// Output root directory (default: data)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract (unless a snapshot exists) and generate in one go
    Run {
        #[command(flatten)]
        extract: ExtractArgs,

        /// Extract again even if a snapshot exists
        #[arg(long)]
        fresh: bool,
    },
}

#[derive(Args)]
struct ExtractArgs {
    /// Input corpus: a JSON array of strings (.json) or one fragment per line
    #[arg(short, long)]
    input: PathBuf,

    /// Case identifier
    #[arg(short, long)]
    case_id: String,

    /// Expected language, used when detection fails (default: de)
    #[arg(short, long)]
    language: Option<String>,

    /// Weight of exceptionalism in the score, 0.0 to 1.0 (default: 0.5)
    #[arg(short, long)]
    weight: Option<f64>,

    /// Output root directory (default: data)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory of <lang>.tsv frequency tables, added to the bundled en/de models
    #[arg(short, long)]
    frequencies: Option<PathBuf>,

    /// Lemma table (surface, tag, lemma; tab separated)
    #[arg(long)]
    lemmata: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write a human-readable snapshot
    #[arg(long)]
    txt: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = match cli.command {
        Commands::Extract(args) => extract(&args).map(|_| ()),
        Commands::Generate { case_id, output } => {
            let store = SnapshotStore::new(output.unwrap_or_else(|| Config::default().storage.output_dir));
            store
                .load_latest(&case_id)
                .and_then(|result| generate(&store, &case_id, &result))
        }
        Commands::Run { extract: args, fresh } => run(&args, fresh),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn build_config(args: &ExtractArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(language) = &args.language {
        config.language.expected_language = language.clone();
    }
    if let Some(weight) = args.weight {
        config.scoring.exceptionalism_weight = weight;
    }
    if let Some(output) = &args.output {
        config.storage.output_dir = output.clone();
    }
    if args.txt {
        config.storage.text_snapshots = true;
    }

    config.validate()?;
    Ok(config)
}

fn build_extractor(args: &ExtractArgs, config: Config) -> Result<ExpressionExtractor> {
    let mut frequencies = WordFreqLexicon::bundled()?;
    if let Some(dir) = &args.frequencies {
        frequencies.extend_from_dir(dir)?;
    }

    let lemmatized = config.language.lemmatized_language.clone();
    let mut extractor = ExpressionExtractor::new(config, Box::new(WhatlangClassifier::new()), Box::new(frequencies))?;

    if let Some(path) = &args.lemmata {
        match lemmatized {
            Some(language) => {
                let table = LemmaTable::load(path)?;
                extractor = extractor.with_lemmatization(Lemmatization::from_table(language.as_str(), table));
            }
            None => warn!("Lemma table given but no lemmatized language configured; ignoring it"),
        }
    }

    Ok(extractor)
}

fn extract(args: &ExtractArgs) -> Result<ExtractionResult> {
    let start_time = Instant::now();
    let config = build_config(args)?;
    let store = SnapshotStore::new(config.storage.output_dir.clone());
    let text_snapshots = config.storage.text_snapshots;

    let fragments = read_corpus(&args.input)?;
    println!("✓ Loaded {} fragments from {}", fragments.len(), args.input.display());

    let extractor = build_extractor(args, config)?;

    let pb = spinner("Extracting expressions...");
    let result = extractor.extract(&fragments);
    pb.finish_and_clear();
    let result = result?;

    println!(
        "✓ Extracted {} words and {} numbers in {}",
        result.words.len(),
        result.numbers.len(),
        HumanDuration(start_time.elapsed())
    );

    let path = store.save(&args.case_id, &result)?;
    println!("✓ Snapshot written to {}", path.display());
    if text_snapshots {
        let path = store.save_text(&args.case_id, &result)?;
        println!("✓ Text snapshot written to {}", path.display());
    }

    for word in result.words.iter().take(10) {
        info!("{}", word);
    }

    Ok(result)
}

fn generate(store: &SnapshotStore, case_id: &str, result: &ExtractionResult) -> Result<()> {
    let dir = store.ensure_case_dir(case_id)?;

    let word_list = WordListGenerator::from_result(result);
    let path = word_list.write_to_dir(&dir)?;
    println!("✓ Word list with {} terms written to {}", word_list.len(), path.display());

    let rules = RuleGenerator::from_result(result);
    let path = rules.write_to_dir(&dir)?;
    println!("✓ {} rules written to {}", rules.len(), path.display());

    Ok(())
}

fn run(args: &ExtractArgs, fresh: bool) -> Result<()> {
    let root = match &args.output {
        Some(output) => output.clone(),
        None => match &args.config {
            Some(path) => Config::load(path)?.storage.output_dir,
            None => Config::default().storage.output_dir,
        },
    };
    let store = SnapshotStore::new(root);

    let existing = if fresh { None } else { store.latest(&args.case_id)? };
    let result = match existing {
        Some(path) => {
            println!("✓ Reusing snapshot {}", path.display());
            SnapshotStore::load(path)?
        }
        None => extract(args)?,
    };

    generate(&store, &args.case_id, &result)
}
