use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use gcmkit_core::{GCM_REDUCE_BYTE, GCM_TARGET_IV_BITS, GCM_TARGET_KEY_BITS};
use gcmkit_math::{ReductionTable, TableLayout};
use gcmkit_vectors::{BitLengthFilter, GcmVectorIngest, KatIngest};
use log::{debug, info};

#[derive(Parser)]
#[command(about = "GCM reduction table and test vector fixture generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the 256-entry GF(2^128) reduction table as a C initializer body.
    ReduceTable {
        #[arg(long, value_enum, default_value_t = Layout::Generic)] layout: Layout,
    },
    /// Convert GCM vector files into gcm_test_vector_t initializers.
    GcmVectors {
        #[arg(long, default_value_t = GCM_TARGET_KEY_BITS)] key_bits: i64,
        #[arg(long, default_value_t = GCM_TARGET_IV_BITS)] iv_bits: i64,
        #[arg(required = true)] files: Vec<PathBuf>,
    },
    /// Convert an AES known-answer-test file into vector_data_t descriptors.
    AesKat {
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Layout {
    Generic,
    LittleEndian,
}

impl From<Layout> for TableLayout {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Generic => TableLayout::Generic,
            Layout::LittleEndian => TableLayout::LittleEndian,
        }
    }
}

fn open(path: &Path) -> anyhow::Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::ReduceTable { layout } => {
            let table = ReductionTable::generate(GCM_REDUCE_BYTE).layout(layout.into());
            write!(out, "{}", table.c_initializer())?;
            out.flush()?;
        }
        Command::GcmVectors { key_bits, iv_bits, files } => {
            let filter = BitLengthFilter::new(key_bits, iv_bits);
            let mut ingest = GcmVectorIngest::new(&mut out, filter);
            for path in &files {
                debug!("reading {}", path.display());
                ingest.ingest(open(path)?).with_context(|| format!("in {}", path.display()))?;
            }
            let count = ingest.finish()?;
            info!("{} GCM vectors emitted (Keylen={}, IVlen={})", count, key_bits, iv_bits);
        }
        Command::AesKat { file } => {
            let mut ingest = KatIngest::new(&mut out);
            ingest.ingest(open(&file)?).with_context(|| format!("in {}", file.display()))?;
            let count = ingest.finish()?;
            info!("{} AES KAT vectors emitted", count);
        }
    }
    Ok(())
}
