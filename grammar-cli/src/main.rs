use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use grammar_engine::{
    Aspect, Catalog, Flags, GrammarState, Lemma, PartOfSpeech, Polarity, Subject, Tense, Voice,
};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about = "Generate English practice sentences from grammar flags", long_about = None)]
struct Cli {
    /// Directory with groups.json and units.json, replacing the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one sentence
    Generate {
        #[command(flatten)]
        sentence: SentenceArgs,

        /// Read the whole grammar state from a JSON file instead of the options above
        #[arg(long, conflicts_with = "unit")]
        state: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every tense/aspect/voice/polarity combination for one subject and word
    Table {
        #[arg(short, long, default_value_t = Subject::I)]
        subject: Subject,

        #[command(flatten)]
        lemma: LemmaArgs,
    },
    /// List groups, or the units of one group
    Units {
        #[arg(short, long)]
        group: Option<u32>,
    },
    /// Show the flags a unit selects, starting from the given flags
    ApplyUnit {
        unit: String,

        #[command(flatten)]
        flags: FlagArgs,
    },
    /// Print the JSON schema of the grammar state
    Schema,
}

#[derive(Args, Debug)]
struct SentenceArgs {
    #[arg(short, long, default_value_t = Subject::I)]
    subject: Subject,

    #[command(flatten)]
    lemma: LemmaArgs,

    #[command(flatten)]
    flags: FlagArgs,

    /// Grammar unit id; a unit that does not apply yields N/A
    #[arg(short, long)]
    unit: Option<String>,
}

#[derive(Args, Debug)]
struct LemmaArgs {
    /// Citation form of the word
    #[arg(short, long, default_value = "work")]
    word: String,

    /// Part of speech (verb, adj, adv, noun, prep)
    #[arg(long = "pos", default_value_t = PartOfSpeech::Verb)]
    part_of_speech: PartOfSpeech,

    #[arg(long)]
    base: Option<String>,

    /// Irregular past tense
    #[arg(long)]
    past: Option<String>,

    /// Irregular past participle
    #[arg(long)]
    pp: Option<String>,

    /// Irregular present participle
    #[arg(long)]
    ing: Option<String>,
}

impl From<&LemmaArgs> for Lemma {
    fn from(args: &LemmaArgs) -> Self {
        Lemma {
            part_of_speech: args.part_of_speech,
            text: args.word.clone(),
            base: args.base.clone(),
            past: args.past.clone(),
            past_participle: args.pp.clone(),
            present_participle: args.ing.clone(),
        }
    }
}

#[derive(Args, Debug)]
struct FlagArgs {
    #[arg(short, long, default_value_t = Tense::Present)]
    tense: Tense,

    #[arg(short, long, default_value_t = Aspect::Simple)]
    aspect: Aspect,

    #[arg(long, default_value_t = Voice::Active)]
    voice: Voice,

    #[arg(short, long, default_value_t = Polarity::Affirmative)]
    polarity: Polarity,

    /// Use "be going to"
    #[arg(long)]
    near_future: bool,

    #[arg(long)]
    short_answer: bool,

    #[arg(long)]
    no_contractions: bool,
}

impl From<&FlagArgs> for Flags {
    fn from(args: &FlagArgs) -> Self {
        Flags {
            tense: args.tense,
            aspect: args.aspect,
            voice: args.voice,
            polarity: args.polarity,
            near_future: args.near_future,
            short_answer: args.short_answer,
            use_contractions: !args.no_contractions,
        }
    }
}

fn load_catalog(dir: Option<&Path>) -> Result<Catalog> {
    let Some(dir) = dir else {
        return Ok(Catalog::builtin().clone());
    };

    let groups = std::fs::read_to_string(dir.join("groups.json"))
        .with_context(|| format!("Failed to read {}", dir.join("groups.json").display()))?;
    let units = std::fs::read_to_string(dir.join("units.json"))
        .with_context(|| format!("Failed to read {}", dir.join("units.json").display()))?;
    let catalog = Catalog::from_json(&groups, &units)
        .with_context(|| format!("Failed to load catalog from {}", dir.display()))?;
    log::info!(
        "Loaded catalog from {}: {} groups, {} units",
        dir.display(),
        catalog.groups().len(),
        catalog.units().len()
    );
    Ok(catalog)
}

fn read_state(path: &Path) -> Result<GrammarState> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse grammar state in {}", path.display()))
}

fn print_table(subject: Subject, lemma: &Lemma) {
    let tense_aspects: Vec<(Tense, Aspect)> = Tense::ALL
        .into_iter()
        .flat_map(|tense| Aspect::ALL.map(|aspect| (tense, aspect)))
        .collect();

    for voice in Voice::ALL {
        for near_future in [false, true] {
            // near_future ignores tense and aspect, so one row per polarity is enough
            let rows = if near_future {
                &tense_aspects[..1]
            } else {
                &tense_aspects[..]
            };
            for &(tense, aspect) in rows {
                for polarity in Polarity::ALL {
                    let flags = Flags {
                        tense,
                        aspect,
                        voice,
                        polarity,
                        near_future,
                        ..Flags::default()
                    };
                    let state = GrammarState {
                        subject,
                        lemma: lemma.clone(),
                        flags,
                        unit_id: None,
                    };
                    let result = grammar_engine::generate(&state, &Catalog::default());
                    println!("{flags}\t{}", result.english);
                }
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Command::Generate {
            sentence,
            state,
            json,
        } => {
            let state = match state {
                Some(path) => read_state(&path)?,
                None => GrammarState {
                    subject: sentence.subject,
                    lemma: Lemma::from(&sentence.lemma),
                    flags: Flags::from(&sentence.flags),
                    unit_id: sentence.unit,
                },
            };
            log::debug!("Generating for {}", state.flags);

            let result = grammar_engine::generate(&state, &catalog);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if let Some(error) = &result.error {
                println!("{}", result.english);
                eprintln!("{error}");
            } else {
                println!("{}", result.english);
                println!("{}", result.gloss);
            }
        }
        Command::Table { subject, lemma } => {
            print_table(subject, &Lemma::from(&lemma));
        }
        Command::Units { group } => match group {
            None => {
                for group in catalog.groups() {
                    let count = catalog.find_units_by_group(group.id).count();
                    println!("{:>3}  {:<6} {} ({count} units)", group.id, group.code, group.en);
                }
            }
            Some(group_id) => {
                let Some(group) = catalog.find_group(group_id) else {
                    bail!("No group with id {group_id}");
                };
                println!("{} - {} / {}", group.code, group.en, group.vi);
                for unit in catalog.find_units_by_group(group_id) {
                    let marker = if unit.applicable { "" } else { "  [N/A]" };
                    println!("  {:<6} {} / {}{marker}", unit.id, unit.en, unit.vi);
                }
            }
        },
        Command::ApplyUnit { unit, flags } => {
            let unit = catalog
                .find_unit_by_id(&unit)
                .with_context(|| format!("No unit with id {unit}"))?;
            let state = grammar_engine::select_unit(
                &GrammarState {
                    flags: Flags::from(&flags),
                    ..GrammarState::default()
                },
                unit,
            );
            println!("{}", state.flags);
            println!("{}", serde_json::to_string_pretty(&state.flags)?);
        }
        Command::Schema => {
            let schema = schemars::schema_for!(GrammarState);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}
