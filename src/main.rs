use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use detective::suspect::DEFAULT_TABLE_SIZE;
use detective::{report, seed, ClueIndex, Explorer, SuspectTable};

#[derive(Parser, Debug)]
#[command(author, version, about = "Explore the mansion, collect clues and name a suspect")]
struct Cli {
    /// Number of buckets in the suspect table
    #[arg(long, default_value_t = DEFAULT_TABLE_SIZE)]
    table_size: usize,

    /// Read directions from this file instead of standard input
    #[arg(long)]
    input: Option<PathBuf>,
}

fn init_logging() {
    env_logger::init();
}

fn play(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let (mut rooms, hall) = seed::mansion();
    let mut clues = ClueIndex::new();

    writeln!(
        out,
        "Iniciando exploração (pistas serão coletadas automaticamente ao entrar nas salas)."
    )?;
    let input: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let ending = Explorer::new(&mut rooms, &mut clues, hall)
        .run(input, &mut out)
        .context("exploration failed")?;
    info!("Exploration ended ({:?}) with {} clues", ending, clues.len());

    writeln!(out, "\nRevisando pistas coletadas:")?;
    report::write_clues(&mut out, &clues)?;

    let mut table = SuspectTable::new(cli.table_size).context("failed to create suspect table")?;
    seed::associate_suspects(&mut table);

    writeln!(out, "\nListando suspeitos e pistas:")?;
    report::write_associations(&mut out, &table)?;

    writeln!(out, "\nDeterminando o suspeito mais provável:")?;
    report::write_most_likely(&mut out, &table)?;

    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match play(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
