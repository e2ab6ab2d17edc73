// SPDX-License-Identifier: MIT
//
// mingzi: command-line front end for the naming engine.
//
//   mingzi generate 杨 --favorable 土,金 --gender male --pages 2
//   mingzi assess 杨 杨嘉铭 --favorable 土,金 --json
//
// `generate` emulates a client pressing "load more": each page is a fresh
// call with the offset advanced by the page size, stopping early on a short
// page. `assess` scores one user-typed name and reports why it was rejected
// if it fails a rule.
//
// Logging goes to stderr through tracing; set RUST_LOG=mingzi_engine=debug
// to see pool sizes and rejection counts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

use mingzi_dict::{Dictionary, Element, Gender, StyleFilter};
use mingzi_engine::{
    AssessRequest, DayMaster, ElementalProfile, EngineConfig, GenerationRequest, NameCandidate,
    NameLength, NamingEngine, Page, SourcePreference, Strength,
};

#[derive(Parser, Debug)]
#[command(name = "mingzi")]
#[command(about = "Generate and assess Chinese given names")]
struct Cli {
    /// TOML file overriding engine defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate ranked pages of candidates.
    Generate(GenerateArgs),
    /// Score a name you already have in mind.
    Assess(AssessArgs),
}

#[derive(Args, Debug)]
struct ProfileArgs {
    /// Favorable elements, most important first (木/火/土/金/水 or English).
    #[arg(long, value_delimiter = ',')]
    favorable: Vec<Element>,

    /// Day-master element.
    #[arg(long, default_value = "wood")]
    day_master: Element,

    /// Day-master heavenly stem, e.g. 甲.
    #[arg(long, default_value = "")]
    stem: String,

    /// strong / weak (身旺 / 身弱).
    #[arg(long, default_value = "weak")]
    strength: Strength,
}

impl ProfileArgs {
    fn profile(&self) -> ElementalProfile {
        ElementalProfile {
            day_master: DayMaster::new(self.day_master, self.stem.clone()),
            strength: self.strength,
            favorable: self.favorable.clone(),
        }
    }
}

#[derive(Args, Debug)]
struct GenerateArgs {
    surname: char,

    #[command(flatten)]
    profile: ProfileArgs,

    #[arg(long, default_value = "male")]
    gender: Gender,

    /// Given-name length.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=2))]
    length: u8,

    /// all, or one of classical / poetic / grand / fresh / gentle.
    #[arg(long, default_value = "all")]
    style: StyleFilter,

    /// classical / modern / balanced.
    #[arg(long, default_value = "balanced")]
    source: SourcePreference,

    #[arg(long, default_value_t = 0)]
    offset: usize,

    #[arg(long, default_value_t = 10)]
    page_size: usize,

    /// Number of sequential pages to fetch.
    #[arg(long, default_value_t = 1)]
    pages: usize,
}

#[derive(Args, Debug)]
struct AssessArgs {
    surname: char,

    /// Full name or given name only.
    name: String,

    #[command(flatten)]
    profile: ProfileArgs,

    /// Apply gender restrictions.
    #[arg(long)]
    gender: Option<Gender>,
}

/// Display column the score starts at.
const NAME_COLUMN: usize = 8;

/// A candidate with its full name spelled out, for JSON output.
#[derive(Serialize)]
struct Entry<'a> {
    full_name: String,
    #[serde(flatten)]
    candidate: &'a NameCandidate,
}

impl<'a> From<&'a NameCandidate> for Entry<'a> {
    fn from(candidate: &'a NameCandidate) -> Self {
        Self {
            full_name: candidate.full_name(),
            candidate,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading engine config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let dict = Dictionary::builtin();
    let engine = NamingEngine::new(&dict, config);

    match &cli.command {
        Command::Generate(args) => generate(&engine, args, cli.json),
        Command::Assess(args) => assess(&engine, args, cli.json),
    }
}

fn generate(engine: &NamingEngine<'_>, args: &GenerateArgs, json: bool) -> Result<()> {
    let mut req = GenerationRequest {
        page_size: args.page_size,
        offset: args.offset,
        gender: args.gender,
        style: args.style,
        length: if args.length == 1 {
            NameLength::One
        } else {
            NameLength::Two
        },
        preference: args.source,
        ..GenerationRequest::new(args.surname, args.profile.profile())
    };

    let mut pages: Vec<Page> = Vec::new();
    for _ in 0..args.pages {
        let page = engine.generate_page(&req);
        let more = page.has_more();
        info!(offset = page.offset, count = page.len(), more, "page");
        pages.push(page);
        if !more {
            break;
        }
        req = req.next_page();
    }

    if json {
        let entries: Vec<Entry<'_>> = pages
            .iter()
            .flat_map(|p| p.candidates.iter().map(Entry::from))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for page in &pages {
        for (i, c) in page.candidates.iter().enumerate() {
            print_candidate(page.offset + i + 1, c);
        }
    }
    if pages.last().is_some_and(|p| !p.has_more()) {
        println!("(no more candidates)");
    }
    Ok(())
}

fn assess(engine: &NamingEngine<'_>, args: &AssessArgs, json: bool) -> Result<()> {
    let req = AssessRequest {
        surname: args.surname,
        name: args.name.clone(),
        profile: args.profile.profile(),
        gender: args.gender,
    };
    let candidate = engine
        .assess(&req)
        .with_context(|| format!("「{}」 was rejected", args.name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&Entry::from(&candidate))?);
    } else {
        print_candidate(1, &candidate);
    }
    Ok(())
}

fn print_candidate(rank: usize, c: &NameCandidate) {
    let b = &c.breakdown;
    let name = c.full_name();
    // CJK glyphs are two columns wide; `{:<n}` pads by char count.
    let pad = NAME_COLUMN.saturating_sub(name.width());
    println!("{rank:>3}. {name}{:pad$}{}分  {}", "", c.score, c.tier);
    println!(
        "     五行 {} · 数理 {} · 文化 {} · 字义 {}",
        b.elemental, b.stroke, b.cultural, b.meaning
    );
    for (heading, text) in c.explanation.sections() {
        println!("     【{heading}】");
        for line in text.lines() {
            println!("       {line}");
        }
    }
    println!("     {}", c.tier.summary());
    println!();
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
