use std::fs::{File, OpenOptions};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use seqlike::adapter::{FileOptions, FileSeq, ReadPolicy};
use seqlike::algo::{list, search, seq, sort, visit, InsertPoint, SearchStrategy};
use seqlike::{utf8, SeqError, Sequence};

mod cli;
use cli::display;
use cli::{Cli, Commands, StoreArgs};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("SEQLIKE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    match cli.command {
        Commands::Inspect { file, preview } => {
            let report = inspect(&file, preview)?;
            emit(json, &report, || print_inspect(&report))
        }
        Commands::Insert { file, at, text, store } => {
            let report = edit(&file, store, "insert", |s| {
                let at = at.unwrap_or_else(|| s.len());
                if at > s.len() {
                    bail!(SeqError::InvalidIndex { idx: at, len: s.len() });
                }
                if !list::try_insert_values(s, at, text.as_bytes()) {
                    bail!(SeqError::CapacityExceeded {
                        requested: s.len() + text.len(),
                        max: s.options().max_len,
                    });
                }
                Ok(())
            })?;
            emit(json, &report, || print_edit(&report))
        }
        Commands::Delete { file, first, last } => {
            let report = edit(&file, StoreArgs::default(), "delete", |s| {
                check_range(s, first, last)?;
                list::delete_range(s, first, last);
                Ok(())
            })?;
            emit(json, &report, || print_edit(&report))
        }
        Commands::MoveRange { file, first, last, to } => {
            let report = edit(&file, StoreArgs::default(), "move-range", |s| {
                check_range(s, first, last)?;
                if !seq::try_move_range(s, first, last, to) {
                    bail!(SeqError::InvalidIndex { idx: to, len: s.len() });
                }
                Ok(())
            })?;
            emit(json, &report, || print_edit(&report))
        }
        Commands::Sort { file } => {
            let report = edit(&file, StoreArgs::default(), "sort", |s| {
                sort::insertion_sort_implicit(s);
                Ok(())
            })?;
            emit(json, &report, || print_edit(&report))
        }
        Commands::Reverse { file, first, last } => {
            let report = edit(&file, StoreArgs::default(), "reverse", |s| {
                match (first, last) {
                    (Some(first), Some(last)) => {
                        check_range(s, first, last)?;
                        seq::reverse_range(s, first, last);
                    }
                    _ => seq::reverse(s),
                }
                Ok(())
            })?;
            emit(json, &report, || print_edit(&report))
        }
        Commands::Search { file, value } => {
            let report = lookup(&file, value)?;
            emit(json, &report, || print_search(&report))
        }
        Commands::SortedInsert { file, value, store } => {
            let mut landed = None;
            let report = edit(&file, store, "sorted-insert", |s| {
                require_sorted(s)?;
                landed = search::try_sorted_insert_implicit(s, value);
                if landed.is_none() {
                    bail!(SeqError::CapacityExceeded {
                        requested: s.len() + 1,
                        max: s.options().max_len,
                    });
                }
                Ok(())
            })?;
            tracing::debug!(?landed, "sorted insert");
            emit(json, &report, || print_edit(&report))
        }
    }
}

fn emit<T: Serialize>(json: bool, report: &T, table: impl FnOnce()) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        table();
    }
    Ok(())
}

// ============================================================================
// STORE ACCESS
// ============================================================================

fn options(store: StoreArgs) -> FileOptions {
    FileOptions {
        read_policy: if store.clamp {
            ReadPolicy::Clamp
        } else {
            ReadPolicy::ZeroFill
        },
        max_len: store.max_len.unwrap_or(usize::MAX),
    }
}

fn open(path: &str, writable: bool) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(writable)
        .open(path)
        .with_context(|| format!("cannot open {}", path))
}

fn check_range(s: &FileSeq<'_, File>, first: usize, last: usize) -> Result<()> {
    if !s.range_valid(first, last) {
        bail!(SeqError::InvalidRange {
            first,
            last,
            len: s.len(),
        });
    }
    Ok(())
}

fn require_sorted(s: &FileSeq<'_, File>) -> Result<()> {
    if let Some(position) = sort::first_unsorted(s, |a: &u8, b: &u8| a > b) {
        bail!(SeqError::NotSorted { position });
    }
    Ok(())
}

/// Surface the first I/O failure the adapter absorbed.
fn check_io(s: &FileSeq<'_, File>) -> Result<()> {
    match s.take_last_error() {
        Some(err) => Err(anyhow::Error::new(err).context(format!("{} I/O failure(s)", s.io_failures()))),
        None => Ok(()),
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

#[derive(Serialize)]
struct InspectReport {
    path: String,
    len: usize,
    size: String,
    sorted: bool,
    crc32: String,
    runes: usize,
    valid_utf8: bool,
    preview: String,
}

fn inspect(path: &str, preview: usize) -> Result<InspectReport> {
    let mut file = open(path, false)?;
    let s = FileSeq::new(&mut file)?;

    let mut hasher = crc32fast::Hasher::new();
    let mut chunk = Vec::with_capacity(4096);
    visit::for_each(&s, |_, b| {
        chunk.push(b);
        if chunk.len() == chunk.capacity() {
            hasher.update(&chunk);
            chunk.clear();
        }
    });
    hasher.update(&chunk);

    let mut valid_utf8 = true;
    let mut runes = 0;
    let mut idx = s.first_idx();
    while s.idx_valid(idx) {
        let rune = utf8::read_rune(&s, idx);
        valid_utf8 &= rune.valid;
        runes += 1;
        idx = s.nth_next_idx(idx, rune.width);
    }

    let shown: Vec<u8> = (0..preview.min(s.len())).map(|i| s.get(i)).collect();
    let report = InspectReport {
        path: path.to_string(),
        len: s.len(),
        size: display::format_size(s.len()),
        sorted: sort::is_sorted_implicit(&s),
        crc32: format!("{:08x}", hasher.finalize()),
        runes,
        valid_utf8,
        preview: display::hex_preview(&shown, s.len()),
    };
    check_io(&s)?;
    Ok(report)
}

fn print_inspect(r: &InspectReport) {
    display::section_top(&r.path);
    display::field("length", &format!("{} ({})", r.len, r.size));
    display::field("sorted", &display::yes_no(r.sorted));
    display::field("utf-8", &display::yes_no(r.valid_utf8));
    display::field("runes", &r.runes.to_string());
    display::field("crc32", &r.crc32);
    display::field("preview", &r.preview);
    display::section_bot();
}

#[derive(Serialize)]
struct EditReport {
    op: &'static str,
    path: String,
    len_before: usize,
    len_after: usize,
}

fn edit<F>(path: &str, store: StoreArgs, op: &'static str, apply: F) -> Result<EditReport>
where
    F: FnOnce(&mut FileSeq<'_, File>) -> Result<()>,
{
    let mut file = open(path, true)?;
    let mut s = FileSeq::with_options(&mut file, options(store))?;
    let len_before = s.len();
    tracing::debug!(op, path, len_before, "applying edit");
    apply(&mut s)?;
    check_io(&s)?;
    Ok(EditReport {
        op,
        path: path.to_string(),
        len_before,
        len_after: s.len(),
    })
}

fn print_edit(r: &EditReport) {
    display::section_top(r.op);
    display::field("file", &r.path);
    display::field("length", &format!("{} -> {}", r.len_before, r.len_after));
    display::section_bot();
}

#[derive(Serialize)]
struct SearchReport {
    value: u8,
    strategy: SearchStrategy,
    found: Option<usize>,
    insert_at: InsertPoint<usize>,
}

fn lookup(path: &str, value: u8) -> Result<SearchReport> {
    let mut file = open(path, false)?;
    let s = FileSeq::new(&mut file)?;
    require_sorted(&s)?;
    let report = SearchReport {
        value,
        strategy: SearchStrategy::for_sequence::<FileSeq<'_, File>>(),
        found: search::sorted_search_implicit(&s, &value),
        insert_at: search::sorted_insert_index_implicit(&s, &value),
    };
    check_io(&s)?;
    Ok(report)
}

fn print_search(r: &SearchReport) {
    display::section_top("search");
    display::field("value", &format!("{} (0x{:02x})", r.value, r.value));
    display::field("strategy", &format!("{:?}", r.strategy));
    display::field(
        "found",
        &r.found.map_or_else(|| "no".to_string(), |i| format!("at {}", i)),
    );
    let point = match r.insert_at {
        InsertPoint::At(i) => format!("before {}", i),
        InsertPoint::Append => "append".to_string(),
    };
    display::field("insert", &point);
    display::section_bot();
}
