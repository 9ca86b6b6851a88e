use std::fs;
use std::io::{self, BufRead};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::debug;

use titlenorm_core::{Lexicon, Normaliser, NormaliserOptions};

use crate::cli::NormaliseArgs;
use crate::tables::apply_table_style;

pub fn run_normalise(args: &NormaliseArgs) -> Result<()> {
    let options = build_options(args)?;
    debug!(?options, "resolved options");
    let normaliser = Normaliser::new(options).context("build normaliser")?;

    if args.text.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("read stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            println!("{}", normaliser.normalise(&line)?);
        }
    } else {
        let joined = args.text.join(" ");
        println!("{}", normaliser.normalise(&joined)?);
    }
    Ok(())
}

/// Resolve options: JSON file first (when given), then flag overrides.
fn build_options(args: &NormaliseArgs) -> Result<NormaliserOptions> {
    let mut options = match &args.options {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read options file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parse options file {}", path.display()))?
        }
        None => NormaliserOptions::default(),
    };
    if args.keep_stopwords {
        options.remove_stopwords = false;
    }
    if args.keep_punctuation {
        options.remove_punctuation = false;
    }
    if args.no_lowercase {
        options.lowercase = false;
    }
    if args.keep_non_alphanumeric {
        options.remove_non_alphanumeric = false;
    }
    if args.keep_state_names {
        options.shorten_state_names = false;
    }
    if args.no_city_aliases {
        options.expand_city_aliases = false;
    }
    if args.keep_country_names {
        options.disambiguate_country_names = false;
    }
    if args.digits_to_words {
        options.digits_to_words = true;
    }
    if args.no_year_label {
        options.year_to_label = false;
    }
    if args.no_collapse_phrases {
        options.collapse_repeated_substrings = false;
    }
    if args.collapse_words {
        options.collapse_duplicate_words = true;
    }
    if let Some(window) = args.max_window {
        options.max_duplicate_window = window;
    }
    Ok(options)
}

pub fn run_lexicons() -> Result<()> {
    let lexicon = Lexicon::new();

    let mut states = Table::new();
    states.set_header(vec!["Abbreviation", "Full name"]);
    apply_table_style(&mut states);
    for (abbreviation, full_name) in lexicon.states() {
        states.add_row(vec![*abbreviation, *full_name]);
    }
    println!("States:");
    println!("{states}");

    println!();
    println!("Cities:");
    println!("{}", alias_table(lexicon.cities(), "City"));

    println!();
    println!("Countries:");
    println!("{}", alias_table(lexicon.countries(), "Country"));

    let mut sports = Table::new();
    sports.set_header(vec!["Term", "Abbreviation"]);
    apply_table_style(&mut sports);
    for (canonical, alias) in lexicon.sport_terms() {
        sports.add_row(vec![*canonical, *alias]);
    }
    println!();
    println!("Sport terms:");
    println!("{sports}");

    println!();
    println!("Venues:");
    println!("{}", alias_table(lexicon.venues(), "Venue"));

    println!();
    println!("Stopwords: {} words", lexicon.stopwords().len());
    Ok(())
}

fn alias_table(entries: &[(&str, &[&str])], label: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![label, "Aliases"]);
    apply_table_style(&mut table);
    for (canonical, aliases) in entries {
        table.add_row(vec![(*canonical).to_string(), aliases.join(", ")]);
    }
    table
}
