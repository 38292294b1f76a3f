use log::{info, warn};
use serde::{Deserialize, Serialize};

use rs_markov_core::io::{normalize_folder, read_documents};
use rs_markov_core::{Context, Generator, ModelConfig};

/// Used when the corpus folder holds no documents.
const EMBEDDED_CORPUS: [&str; 2] = [
    "To be, or not to be, that is the question: \
    Whether 'tis nobler in the mind to suffer \
    The slings and arrows of outrageous fortune, \
    Or to take arms against a sea of troubles \
    And by opposing end them. To die: to sleep; \
    No more; and by a sleep to say we end \
    The heart-ache and the thousand natural shocks \
    That flesh is heir to: 'tis a consummation \
    Devoutly to be wish'd. To die, to sleep; \
    To sleep: perchance to dream: ay, there's the rub.",
    "Tomorrow, and tomorrow, and tomorrow, \
    Creeps in this petty pace from day to day \
    To the last syllable of recorded time, \
    And all our yesterdays have lighted fools \
    The way to dusty death. Out, out, brief candle! \
    Life's but a walking shadow, a poor player \
    That struts and frets his hour upon the stage \
    And then is heard no more: it is a tale \
    Told by an idiot, full of sound and fury, \
    Signifying nothing.",
];

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct ExempleConfig {
    corpus_folder: String,
    corpus_extension: String,
    words: usize,
    model: ModelConfig,
}

impl Default for ExempleConfig {
    fn default() -> Self {
        Self {
            corpus_folder: "./data".to_owned(),
            corpus_extension: "txt".to_owned(),
            words: 50,
            model: ModelConfig::default(),
        }
    }
}

impl ExempleConfig {
    fn load() -> Self {
        match confy::load("rs-markov", Some("config")) {
            Ok(config) => config,
            Err(err) => {
                warn!("Failed to load config, using defaults: {err}");
                Self::default()
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // The corpus folder can be given as the first argument
    let mut config = ExempleConfig::load();
    if let Some(folder) = std::env::args().nth(1) {
        config.corpus_folder = folder;
    }

    let folder = normalize_folder(&config.corpus_folder);
    let mut documents = match read_documents(&folder, &config.corpus_extension) {
        Ok(documents) => documents,
        Err(err) => {
            warn!("Cannot read corpus from {}: {err}", folder.display());
            Vec::new()
        }
    };
    if documents.is_empty() {
        info!("No documents found, using the embedded corpus");
        documents = EMBEDDED_CORPUS.iter().map(|d| (*d).to_owned()).collect();
    }

    let mut generator = Generator::from_config(&config.model)?;

    println!("Training the model...");
    let report = generator.train(&documents)?;
    println!("Documents: {}", report.documents);
    println!("Total words before preprocessing: {}", report.words);
    println!("Total tokens after preprocessing: {}", report.tokens);
    for (n, contexts) in &report.unique_contexts {
        println!("Number of unique {n}-gram contexts: {contexts}");
    }

    // Top continuations of a sample context
    let sample = Context::from(["to", "be"]);
    if let Ok(top) = generator.model().top_k(sample.arity() + 1, &sample, config.model.report_top_k) {
        println!("\nTop {} words following {sample}:", config.model.report_top_k);
        for (token, probability) in top {
            println!("  {token}: {probability:.4}");
        }
    }

    println!("\nGenerating sample texts...");
    let seeds = [Context::from(["to"]), Context::from(["to", "be"]), Context::from(["to", "be", "or"])];
    for seed in seeds {
        let n = seed.arity() + 1;
        if generator.model().get(n).is_err() {
            continue;
        }
        println!("\n{n}-gram generation:");
        println!("{}", generator.generate(&seed, config.words, n)?);
    }

    Ok(())
}
