use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use punbot::{logger, Count, PunSelector, PunSource, PunbotConfig};
use std::io::{self, Write};
use std::path::PathBuf;

/// puns for the scipy conference: curated, llm-generated, or a party
#[derive(Parser, Debug)]
#[clap(
    version,
    about,
    long_about = "Draws community-curated puns at random, asks a language model for fresh ones when PUNBOT_* settings are present, or throws an emoji party when asked for infinitely many."
)]
pub struct Cli {
    /// log debug output to stderr
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// create puns for the conference
    #[clap(alias = "create-puns")]
    Create(CreateArgs),
    /// describe the project
    Describe,
}

#[derive(Args, Debug)]
struct CreateArgs {
    /// number of puns to create, or `inf` for a party
    count: Count,

    /// theme for llm-generated puns
    #[clap(short, long)]
    topic: Option<String>,

    /// print the puns as a json array instead of lines
    #[clap(long)]
    json: bool,

    /// read curated puns from this jsonl file instead of the bundled list
    #[clap(long, value_name = "PATH")]
    puns_file: Option<PathBuf>,

    /// seed the random source for repeatable output
    #[clap(long)]
    seed: Option<u64>,

    /// api key for the pun bot
    #[clap(long, env = "PUNBOT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// model the pun bot asks
    #[clap(long, env = "PUNBOT_MODEL_NAME")]
    model_name: Option<String>,

    /// base url of an openai-compatible api
    #[clap(long, env = "PUNBOT_API_BASE")]
    api_base: Option<String>,
}

impl CreateArgs {
    fn to_config(&self) -> PunbotConfig {
        PunbotConfig::new(
            self.api_key.clone(),
            self.model_name.clone(),
            self.api_base.clone(),
        )
    }

    fn to_source(&self) -> PunSource {
        match &self.puns_file {
            Some(path) => PunSource::File(path.clone()),
            None => PunSource::Bundled,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match cli.command {
        Command::Describe => {
            println!("Making the T-shirt puns work!");
            Ok(())
        }
        Command::Create(args) => match create(&args) {
            Err(e) if is_broken_pipe(&e) => Ok(()),
            other => other,
        },
    }
}

fn create(args: &CreateArgs) -> Result<()> {
    let config = args.to_config();
    let mut selector = PunSelector::new(&config, args.to_source());
    if let Some(seed) = args.seed {
        selector = selector.with_seed(seed);
    }
    tracing::info!("creating {:?} puns in {} mode", args.count, selector.mode());

    let topic = args.topic.as_deref();
    if args.json {
        let generation = selector.generate(args.count, topic);
        for notice in &generation.notices {
            eprintln!("{notice}");
        }
        let json = serde_json::to_string_pretty(&generation.puns)?;
        writeln!(io::stdout().lock(), "{json}")?;
    } else {
        selector.create_puns(args.count, topic, &mut io::stdout().lock())?;
    }
    Ok(())
}

// A reader that hung up early (`punbot create inf | head`) is not a failure
fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| {
        let kind = match cause.downcast_ref::<io::Error>() {
            Some(err) => Some(err.kind()),
            None => cause
                .downcast_ref::<serde_json::Error>()
                .and_then(|err| err.io_error_kind()),
        };
        kind == Some(io::ErrorKind::BrokenPipe)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_pipe_from_io_error() {
        let e = anyhow::Error::from(io::Error::from(io::ErrorKind::BrokenPipe));

        assert!(is_broken_pipe(&e));
    }

    #[test]
    fn test_broken_pipe_wrapped_in_serde_json_error() {
        let json_err = serde_json::Error::io(io::Error::from(io::ErrorKind::BrokenPipe));
        let e = anyhow::Error::from(json_err);

        assert!(is_broken_pipe(&e));
    }

    #[test]
    fn test_broken_pipe_behind_context() {
        let e = anyhow::Error::from(io::Error::from(io::ErrorKind::BrokenPipe))
            .context("writing puns");

        assert!(is_broken_pipe(&e));
    }

    #[test]
    fn test_other_errors_are_not_broken_pipes() {
        let denied = anyhow::Error::from(io::Error::from(io::ErrorKind::PermissionDenied));
        let syntax = anyhow::Error::from(serde_json::from_str::<u32>("nope").unwrap_err());

        assert!(!is_broken_pipe(&denied));
        assert!(!is_broken_pipe(&syntax));
    }
}
