// Fri Jan 16 2026 - Alex

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use struct_file::{
    config::StructConfig,
    layout::Layout,
    store::{ByteStore, FileStore},
    structs::FieldEvent,
    utils::{format_bytes, hex_dump, logging::scoped_timer, LoggingUtils},
    TextDecoding,
};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Read and write typed binary structs at file offsets", long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON struct config (default offset, text decoding, max int width)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a struct described by a JSON layout and print it as JSON
    Read {
        #[arg(short, long)]
        file: PathBuf,
        #[arg(short, long)]
        layout: PathBuf,
        #[arg(short, long)]
        offset: Option<u64>,
        /// Replace invalid UTF-8 instead of failing
        #[arg(long)]
        lossy: bool,
        #[arg(long)]
        progress: bool,
    },
    /// Encode the values of a JSON layout into the file
    Write {
        #[arg(short, long)]
        file: PathBuf,
        #[arg(short, long)]
        layout: PathBuf,
        #[arg(short, long)]
        offset: Option<u64>,
        #[arg(long)]
        progress: bool,
    },
    /// Hex dump a region of the file
    Dump {
        #[arg(short, long)]
        file: PathBuf,
        #[arg(short, long, default_value_t = 0)]
        offset: u64,
        #[arg(short, long, default_value_t = 256)]
        len: usize,
    },
}

fn main() {
    let args = Args::parse();
    LoggingUtils::init_for_cli(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => StructConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => StructConfig::default(),
    };

    match args.command {
        Command::Read { file, layout, offset, lossy, progress } => {
            if lossy {
                config = config.with_text_decoding(TextDecoding::Lossy);
            }
            let store = FileStore::open_read_only(&file)
                .with_context(|| format!("opening {}", file.display()))?;
            let layout = Layout::load(&layout)
                .with_context(|| format!("loading layout {}", layout.display()))?;
            let bar = field_bar(progress, layout.fields.len());

            let _timer = scoped_timer("read struct");
            let output = layout
                .read_struct(&store, offset, &config)?
                .execute_with(|event| tick(&bar, event))?;
            finish(&bar);

            println!("{}", serde_json::to_string_pretty(&output)?);
            eprintln!(
                "{} Read {} fields, ended at offset {}",
                "[+]".green(),
                output.len(),
                output.offset
            );
        }
        Command::Write { file, layout, offset, progress } => {
            let store = FileStore::create(&file)
                .with_context(|| format!("opening {}", file.display()))?;
            let layout = Layout::load(&layout)
                .with_context(|| format!("loading layout {}", layout.display()))?;
            let bar = field_bar(progress, layout.fields.len());

            let _timer = scoped_timer("write struct");
            let builder = layout.write_struct(&store, offset, &config)?;
            let start = builder.offset();
            let end = builder.execute_with(|event| tick(&bar, event))?;
            finish(&bar);

            println!(
                "{} Wrote {} at offset {}, now at {}",
                "[+]".green(),
                format_bytes(end - start),
                start,
                end
            );
        }
        Command::Dump { file, offset, len } => {
            let store = FileStore::open_read_only(&file)
                .with_context(|| format!("opening {}", file.display()))?;
            let bytes = store.read_at(offset, len)?;
            if bytes.len() < len {
                log::info!("dump truncated at end of file ({} of {} bytes)", bytes.len(), len);
            }
            print!("{}", hex_dump(&bytes, offset));
        }
    }

    Ok(())
}

fn field_bar(enabled: bool, fields: usize) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }
    let pb = ProgressBar::new(fields as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} fields {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    Some(pb)
}

fn tick(bar: &Option<ProgressBar>, event: &FieldEvent<'_>) {
    if let Some(pb) = bar {
        pb.set_message(format!("{} @ {}", event.kind, event.offset));
        pb.inc(1);
    }
}

fn finish(bar: &Option<ProgressBar>) {
    if let Some(pb) = bar {
        pb.finish_and_clear();
    }
}
