//! wikeddiff-render - render diff fragments to HTML

use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use wikeddiff::{HtmlFormatter, Messages, RenderOptions, debug_fragments, read_fragments};

#[derive(Parser)]
#[command(name = "wikeddiff-render")]
#[command(version, about = "Render diff fragments to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    wikeddiff-render fragments.json               Render to stdout
    wikeddiff-render fragments.json -o diff.html  Render to a file
    cat fragments.json | wikeddiff-render --colored-blocks")]
struct Cli {
    /// JSON fragment list (reads stdin when omitted or "-")
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Show moved text as deletions instead of highlighted blocks
    #[arg(long)]
    no_block_moves: bool,

    /// Display moved blocks in differing colors
    #[arg(long)]
    colored_blocks: bool,

    /// Use ASCII instead of Unicode block move arrows
    #[arg(long)]
    no_unicode: bool,

    /// Mark the diff as inconsistent with its versions
    #[arg(long)]
    error: bool,

    /// JSON message table for localized output
    #[arg(long, value_name = "FILE")]
    messages: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> wikeddiff::Result<()> {
    let fragments = match cli.input.as_deref() {
        None | Some("-") => read_fragments(io::stdin().lock())?,
        Some(path) => read_fragments(File::open(path)?)?,
    };
    debug!("fragments:\n{}", debug_fragments(&fragments));

    let formatter = match &cli.messages {
        Some(path) => {
            let file = io::BufReader::new(File::open(path)?);
            let messages: Messages = serde_json::from_reader(file)?;
            HtmlFormatter::with_messages(messages)
        }
        None => HtmlFormatter::new(),
    };

    let options = RenderOptions::new()
        .with_block_moves(!cli.no_block_moves)
        .with_colored_blocks(cli.colored_blocks)
        .with_no_unicode_symbols(cli.no_unicode)
        .with_error(cli.error);

    let html = formatter.format(&fragments, &options);

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &html)?;
            info!("wrote {} bytes to {path}", html.len());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
