use clap::{Parser, Subcommand};
use fixture_override::render::{self, Format};
use fixture_override::fixtures::parse_fixture_file;
use fixture_override::{FixtureApplier, OverrideConfig, Result, Tier};

use anyhow::Context;

#[derive(Parser)]
#[command(name = "fixture-override")]
#[command(about = "Apply class/method/data-set fixture overrides to a fixture list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply an override document to a base fixture list.
    Apply {
        /// Base fixture list, one identifier per line.
        #[arg(long)]
        fixtures: String,

        /// Override document (JSON with class/method/dataSet tiers).
        #[arg(long)]
        overrides: String,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Reject ambiguous directives instead of applying them best-effort.
        #[arg(long)]
        strict: bool,

        /// Print what each directive did to stderr.
        #[arg(long)]
        explain: bool,

        /// Write the result here instead of stdout.
        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Validate an override document without applying it.
    Check {
        #[arg(long)]
        overrides: String,
    },
}

fn read_overrides(path: &str) -> Result<OverrideConfig> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read override document {}", path))?;
    OverrideConfig::from_json(&text).with_context(|| format!("in {}", path))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Apply {
            fixtures,
            overrides,
            format,
            strict,
            explain,
            out,
        } => {
            // 1) Load inputs.
            let base = parse_fixture_file(&fixtures)?;
            let config = read_overrides(&overrides)?;
            if strict {
                config.validate().with_context(|| format!("in {}", overrides))?;
            }
            log::info!(
                "applying {} class, {} method, {} data set directive(s) to {} fixture(s)",
                config.class.len(),
                config.method.len(),
                config.data_set.len(),
                base.len()
            );

            // 2) Apply.
            let applier = FixtureApplier::from(config);
            let (result, steps) = applier.apply_traced(&base);
            if explain {
                eprint!("{}", render::render_trace(&steps));
            }

            // 3) Render.
            let rendered = render::render_fixtures(&result, format)?;
            match out {
                Some(out) => {
                    std::fs::write(&out, rendered).with_context(|| format!("write {}", out))?;
                    eprintln!("Wrote {}", out);
                }
                None => print!("{}", rendered),
            }
        }
        Commands::Check { overrides } => {
            let config = read_overrides(&overrides)?;
            config.validate().with_context(|| format!("in {}", overrides))?;
            for tier in Tier::PRIORITY {
                println!("{}: {} directive(s)", tier, config.tier(tier).len());
            }
        }
    }

    Ok(())
}
