use card_press::{config, deck, generate, output};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup; called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "card-press")]
#[command(about = "Static site generator for printable adventure card decks")]
#[command(long_about = "\
Static site generator for printable adventure card decks

A single JSON file is the data source: each record is one adventure card
with display text, categorical badges, and action content. One run produces
the complete site plus print assets.

Data layout:

  data/
  ├── cards.json                   # The deck: an array of card records
  └── card-press.toml              # Site config (optional, next to the deck)

Generated output:

  dist/
  ├── index.html                   # Landing page, one tile per card
  ├── assets/style.css             # Stylesheet
  ├── cards/<id>/index.html        # One reveal page per card
  ├── qr/<id>.svg + <id>.png       # Scannable codes (when [qr] enabled)
  ├── print/cards.html             # 2x2-per-page print sheet, inline QR
  └── .gitignore

Running with no arguments is equivalent to `card-press build` with the
defaults above.

Run 'card-press gen-config' to print a documented card-press.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Deck data file
    #[arg(long, default_value = "data/cards.json", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Load the deck and generate the full site (the default)
    Build,
    /// Validate deck data and config without writing anything
    Check,
    /// Print a stock card-press.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let config = config::load_config(config_dir(&cli.source))?;

            println!("==> Loading {}", cli.source.display());
            let cards = deck::load_deck(&cli.source)?;
            output::print_deck_output(&cards);

            println!("==> Generating site \u{2192} {}", cli.output.display());
            if !config.qr.enabled {
                output::print_qr_warning();
            }
            let report = generate::generate(&cards, &config, &cli.output)?;
            output::print_build_output(&report, &cards);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let config = config::load_config(config_dir(&cli.source))?;
            let cards = deck::load_deck(&cli.source)?;
            output::print_deck_output(&cards);
            if !config.qr.enabled {
                output::print_qr_warning();
            }
            println!("==> Deck is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Config lives next to the deck file.
fn config_dir(source: &Path) -> &Path {
    source.parent().unwrap_or(Path::new("."))
}
