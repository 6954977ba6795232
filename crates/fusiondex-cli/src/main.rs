//! `fusiondex` — fusion, totem and sprite lookups from the command line,
//! plus the offline asset tooling.
//!
//! # Usage
//!
//! ```
//! fusiondex fusion bulbizarre "mr. mime" --lang en
//! fusiondex totem --seed 42
//! fusiondex diff --old assets-6.0 --new assets-6.1 --out data
//! ```
//!
//! Settings come from `fusiondex.toml` (or `--config`), overridden by
//! `FUSIONDEX_*` environment variables.

mod render;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgGroup, Parser, Subcommand};
use fusiondex_assets::{AssetLayout, DiffReport, import_custom};
use fusiondex_core::Language;
use fusiondex_engine::{Engine, FusionQuery, Settings, Side};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "fusiondex", version, about = "Pokémon fusion lookups")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "fusiondex.toml")]
  config: PathBuf,

  /// Print results as JSON.
  #[arg(long, global = true)]
  json: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  #[command(flatten)]
  Lookup(Lookup),

  /// Diff two releases of the asset tree and write the combination maps.
  Diff {
    #[arg(long)]
    old: PathBuf,
    #[arg(long)]
    new: PathBuf,
    #[arg(long)]
    out: PathBuf,
  },

  /// Copy a flat directory of hand-made sprites into an asset tree.
  ImportCustom {
    #[arg(long)]
    input:  PathBuf,
    #[arg(long)]
    output: PathBuf,
    /// Skip sprites involving identifiers above this (default: fusion max).
    #[arg(long)]
    max_id: Option<u32>,
  },
}

/// Commands answered from the loaded catalogs.
#[derive(Subcommand, Debug)]
enum Lookup {
  /// Look up the fusion of two species, by name, number or wildcard.
  Fusion {
    head:        String,
    body:        String,
    #[arg(short, long, default_value_t = Language::DEFAULT)]
    lang:        Language,
    /// Ignore BODY and pick one of the head's hand-made partners.
    #[arg(long)]
    custom_only: bool,
  },

  /// Draw a random hand-made fusion.
  Totem {
    /// Same seed, same totem.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(short, long, default_value_t = Language::DEFAULT)]
    lang: Language,
  },

  /// Look up a single-species sprite.
  Sprite {
    query: String,
    #[arg(short, long, default_value_t = Language::DEFAULT)]
    lang:  Language,
  },

  /// List hand-made partners of a head or a body.
  #[command(group(ArgGroup::new("side").required(true).args(["head", "body"])))]
  Custom {
    #[arg(long)]
    head: Option<u32>,
    #[arg(long)]
    body: Option<u32>,
  },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  run(Cli::parse())
}

fn run(cli: Cli) -> anyhow::Result<()> {
  match cli.command {
    Command::Lookup(command) => {
      let settings = load_settings(&cli.config)?;
      lookup(&settings, command, cli.json)?;
    }

    Command::Diff { old, new, out } => {
      let report = DiffReport::compute(&AssetLayout::new(old), &AssetLayout::new(new))
        .context("failed to diff asset trees")?;
      let written = report
        .write(&out)
        .with_context(|| format!("failed to write report to {}", out.display()))?;
      for path in written {
        println!("{}", path.display());
      }
    }

    Command::ImportCustom {
      input,
      output,
      max_id,
    } => {
      let max_id = match max_id {
        Some(max_id) => max_id,
        None => load_settings(&cli.config)?.fusion_max_id,
      };
      let copied = import_custom(&input, &AssetLayout::new(output), max_id)
        .with_context(|| format!("failed to import from {}", input.display()))?;
      println!("{copied} sprites imported");
    }
  }

  Ok(())
}

/// Layer the optional config file under `FUSIONDEX_*` environment variables.
fn load_settings(path: &Path) -> anyhow::Result<Settings> {
  config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("FUSIONDEX"))
    .build()
    .context("failed to read config file")?
    .try_deserialize()
    .context("failed to deserialise settings")
}

fn lookup(settings: &Settings, command: Lookup, json: bool) -> anyhow::Result<()> {
  let engine = Engine::load(settings).context("failed to load catalogs")?;
  let mut rng = rand::thread_rng();

  let output = match command {
    Lookup::Fusion {
      head,
      body,
      lang,
      custom_only,
    } => {
      let query = FusionQuery::new(head, body)
        .lang(lang)
        .custom_only(custom_only);
      let outcome = engine.fusions.fusion(&query, &mut rng);
      if json {
        render::fusion_json(&engine.fusions, &outcome).to_string()
      } else {
        render::fusion_text(&engine.fusions, &outcome)
      }
    }

    Lookup::Totem { seed, lang } => {
      let outcome = engine.fusions.totem(seed, lang);
      if json {
        render::fusion_json(&engine.fusions, &outcome).to_string()
      } else {
        render::fusion_text(&engine.fusions, &outcome)
      }
    }

    Lookup::Sprite { query, lang } => {
      let sprite = engine.sprites.sprite(&query, lang, &mut rng);
      if json {
        serde_json::to_string(&sprite).context("failed to serialise sprite")?
      } else {
        render::sprite_text(&sprite)
      }
    }

    Lookup::Custom { head, body } => {
      let side = match (head, body) {
        (Some(head), _) => Side::Head(head),
        (None, Some(body)) => Side::Body(body),
        (None, None) => anyhow::bail!("one of --head or --body is required"),
      };
      let ids = engine.fusions.custom_combinations(side);
      if json {
        serde_json::to_string(&ids).context("failed to serialise ids")?
      } else {
        render::ids_text(&ids)
      }
    }
  };

  println!("{output}");
  Ok(())
}
