use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use linkseq::{
    fibonacci, parse_element, powers, range, IdGenerator, LinkedSequence, RenderConfig,
    RenderStyle, Step,
};

#[derive(Parser, Debug)]
#[command(name = "linkseq", about = "Build and inspect immutable linked sequences")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a sequence from the given items and render it.
    Show {
        /// Integer elements, head first.
        #[arg(allow_negative_numbers = true)]
        items: Vec<String>,
        /// Output layout.
        #[arg(long, value_enum, default_value_t = Style::Nested)]
        style: Style,
        /// Render at most this many elements.
        #[arg(long)]
        max: Option<usize>,
    },
    /// Look up the element at a zero-based position.
    Nth {
        /// Position to look up.
        index: usize,
        /// Integer elements, head first.
        #[arg(allow_negative_numbers = true)]
        items: Vec<String>,
    },
    /// Put a value in front of a sequence.
    Prepend {
        /// Value for the new head.
        #[arg(allow_negative_numbers = true)]
        value: String,
        /// Integer elements of the existing sequence.
        #[arg(allow_negative_numbers = true)]
        items: Vec<String>,
    },
    /// Walk a cursor over the sequence, printing every step.
    Iterate {
        /// Integer elements, head first.
        #[arg(allow_negative_numbers = true)]
        items: Vec<String>,
    },
    /// Materialise a lazy generator into a sequence.
    Generate {
        #[command(subcommand)]
        generator: Generator,
        /// Render at most this many elements.
        #[arg(long)]
        max: Option<usize>,
    },
}

#[derive(Subcommand, Debug)]
enum Generator {
    /// Powers of a base.
    Powers {
        base: u64,
        /// Stop before the first power above this limit.
        #[arg(long, default_value_t = 1_000)]
        limit: u64,
    },
    /// Fibonacci numbers up to a limit.
    Fibonacci {
        #[arg(default_value_t = 50)]
        limit: u64,
    },
    /// Sequential identifiers.
    Ids {
        /// Number of identifiers to produce.
        #[arg(long, default_value_t = 3)]
        take: usize,
        /// First identifier.
        #[arg(long, default_value_t = 1)]
        start: u64,
    },
    /// Inclusive stepped range.
    Range {
        #[arg(allow_negative_numbers = true)]
        start: i64,
        #[arg(allow_negative_numbers = true)]
        end: i64,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        step: i64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Style {
    Nested,
    Flat,
}

impl From<Style> for RenderStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Nested => RenderStyle::Nested,
            Style::Flat => RenderStyle::Flat,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Show { items, style, max } => run_show(&items, style, max)?,
        Commands::Nth { index, items } => run_nth(index, &items)?,
        Commands::Prepend { value, items } => run_prepend(&value, &items)?,
        Commands::Iterate { items } => run_iterate(&items)?,
        Commands::Generate { generator, max } => run_generate(generator, max)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_sequence(items: &[String]) -> Result<LinkedSequence<i64>> {
    let values = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            parse_element(item).with_context(|| format!("failed to parse item {}", idx + 1))
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(len = values.len(), "parsed sequence items");
    Ok(LinkedSequence::from_vec(values))
}

fn render_config(style: Style, max: Option<usize>) -> RenderConfig {
    let config = match RenderStyle::from(style) {
        RenderStyle::Nested => RenderConfig::nested(),
        RenderStyle::Flat => RenderConfig::flat(),
    };
    match max {
        Some(max) => config.with_max_elements(max),
        None => config,
    }
}

fn run_show(items: &[String], style: Style, max: Option<usize>) -> Result<()> {
    let seq = parse_sequence(items)?;
    println!("{}", seq.render(&render_config(style, max)));
    println!("length={}", seq.len());
    Ok(())
}

fn run_nth(index: usize, items: &[String]) -> Result<()> {
    let seq = parse_sequence(items)?;
    match seq.nth(index) {
        Some(value) => println!("{}", value),
        None => {
            info!(index, len = seq.len(), "index past end of sequence");
            println!("absent");
        }
    }
    Ok(())
}

fn run_prepend(value: &str, items: &[String]) -> Result<()> {
    let value = parse_element(value).context("failed to parse value to prepend")?;
    let seq = parse_sequence(items)?;
    let extended = seq.prepend(value);
    println!("{}", extended.render(&RenderConfig::flat()));
    Ok(())
}

fn run_iterate(items: &[String]) -> Result<()> {
    let seq = parse_sequence(items)?;
    let mut cursor = seq.iterate();

    // One extra step past the end shows the terminal marker is stable.
    for call in 1..=seq.len() + 2 {
        match cursor.step() {
            Step::Yielded(value) => {
                println!("next #{}\tfinished=false\tvalue={}", call, value)
            }
            Step::Finished => println!("next #{}\tfinished=true", call),
        }
    }
    Ok(())
}

fn run_generate(generator: Generator, max: Option<usize>) -> Result<()> {
    let seq: LinkedSequence<i64> = match generator {
        Generator::Powers { base, .. } if base < 2 => {
            anyhow::bail!("powers of {} never exceed any limit; use a base of at least 2", base)
        }
        Generator::Powers { base, limit } => powers(base)
            .take_while(|&p| p <= limit)
            .map(to_element)
            .collect::<Result<_>>()?,
        Generator::Fibonacci { limit } => {
            fibonacci(limit).map(to_element).collect::<Result<_>>()?
        }
        Generator::Ids { take, start } => IdGenerator::starting_at(start)
            .take(take)
            .map(to_element)
            .collect::<Result<_>>()?,
        Generator::Range { start, end, step } => range(start, end, step)
            .context("invalid range")?
            .collect(),
    };

    info!(len = seq.len(), "generated sequence");
    println!("{}", seq.render(&render_config(Style::Flat, max)));
    Ok(())
}

fn to_element(value: u64) -> Result<i64> {
    i64::try_from(value).with_context(|| format!("generated value {} exceeds i64", value))
}
