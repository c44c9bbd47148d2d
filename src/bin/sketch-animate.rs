use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "sketch-animate",
    version,
    about = "Animate a sketch into a looping GIF"
)]
struct Cli {
    /// Input image path (any format the `image` crate can decode).
    #[arg(long)]
    input: PathBuf,

    /// Output directory; created if missing.
    #[arg(long)]
    output: PathBuf,

    /// Animation type.
    #[arg(long = "type", value_enum)]
    kind: TypeChoice,

    /// Optional JSON file overriding animation settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TypeChoice {
    Wave,
    Blink,
    Bounce,
}

impl From<TypeChoice> for sketch_animate::AnimationType {
    fn from(choice: TypeChoice) -> Self {
        match choice {
            TypeChoice::Wave => Self::Wave,
            TypeChoice::Blink => Self::Blink,
            TypeChoice::Bounce => Self::Bounce,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = match &cli.config {
        Some(path) => sketch_animate::load_settings(path)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None => sketch_animate::AnimateSettings::default(),
    };

    let job = sketch_animate::AnimateJob::new(&cli.input, &cli.output, cli.kind.into())
        .with_settings(settings);

    let written = sketch_animate::run(&job).with_context(|| {
        format!(
            "animate '{}' into '{}'",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    for path in written {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
