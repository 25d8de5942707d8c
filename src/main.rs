use anyhow::{bail, ensure, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use tracing_subscriber::EnvFilter;

use edict2_json::{
    edict2::{
        entry::Entry,
        parser::{parse_edict2_lines, ParseOptions},
    },
    utility::{
        encoding::{decode, Encoding},
        parse_number,
    },
};

// 公開されている edict2 で本文中に区切りの '/' を含む行
// 区切りと見分けられないので飛ばす
const DEFAULT_KNOWN_BAD_LINES: &[usize] = &[31179, 104168, 104171];

struct Args {
    edict2_path: String,
    output_path: Option<String>,
    encoding: Encoding,
    known_bad_lines: Vec<usize>,
    pretty: bool,
}

fn get_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt(
        "e",
        "encoding",
        "input encoding: auto (default), utf-8 or euc-jp",
        "ENCODING",
    );
    opts.optmulti(
        "s",
        "skip-line",
        "skip this line number if it fails to parse (repeatable)",
        "LINE",
    );
    opts.optflag(
        "",
        "no-default-skips",
        "do not skip the known-bad lines of the public edict2 file",
    );
    opts.optflag("p", "pretty", "pretty-print the JSON output");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        let brief = "Usage: edict2-json [options] <edict2-path> [output-path]";
        print!("{}", opts.usage(brief));
        return Ok(None);
    }

    let edict2_path = matches
        .free
        .first()
        .context("path to edict2 file is required")?
        .clone();
    let output_path = matches.free.get(1).cloned();

    let encoding = match matches.opt_str("e") {
        Some(name) => Encoding::of(&name)?,
        None => Encoding::Auto,
    };

    let mut known_bad_lines = Vec::new();
    if !matches.opt_present("no-default-skips") {
        known_bad_lines.extend_from_slice(DEFAULT_KNOWN_BAD_LINES);
    }
    for line in matches.opt_strs("s") {
        let line = parse_number(&line).with_context(|| format!("Invalid line number: {}", line))?;
        ensure!(0 < line, "Line numbers start at 1");
        known_bad_lines.push(line);
    }

    Ok(Some(Args {
        edict2_path,
        output_path,
        encoding,
        known_bad_lines,
        pretty: matches.opt_present("p"),
    }))
}

enum BuildOut {
    Null,
    File { path: PathBuf },
}

impl BuildOut {
    fn init_file(path: &str) -> Result<Self> {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create output directory")?;
        }

        Ok(Self::File { path })
    }

    fn save_entries(&self, entries: &[Entry], pretty: bool) -> Result<()> {
        if let BuildOut::File { path } = &self {
            let json = if pretty {
                serde_json::to_string_pretty(entries)?
            } else {
                serde_json::to_string(entries)?
            };

            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

            println!("Saved to {}", path.display());
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    init_tracing();

    let args = match get_args()? {
        Some(args) => args,
        None => return Ok(()),
    };

    let edict2_path = PathBuf::from(&args.edict2_path);
    ensure!(
        edict2_path.exists(),
        "File not found: {}",
        edict2_path.display()
    );

    let out = if let Some(output_path) = &args.output_path {
        BuildOut::init_file(output_path)
            .with_context(|| format!("Failed to prepare output: {}", output_path))?
    } else {
        BuildOut::Null
    };

    println!("Reading {}...", edict2_path.display());

    let txt = read_edict2(&edict2_path, args.encoding)?;

    println!("Parsing...");

    let options = ParseOptions::with_known_bad_lines(args.known_bad_lines);
    let pb = create_progress_bar(txt.lines().count() as u64);
    let parsed = parse_edict2_lines(
        txt.lines().map(Ok::<_, io::Error>).progress_with(pb),
        &options,
    );

    println!(
        "Finished. {} entries, {} skipped line(s).",
        parsed.entries.len(),
        parsed.skipped_lines.len()
    );

    let entries = parsed
        .into_result()
        .with_context(|| format!("Failed to parse {}", edict2_path.display()))?;

    out.save_entries(&entries, args.pretty)?;

    Ok(())
}

fn read_edict2(path: &Path, encoding: Encoding) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    decode(&bytes, encoding).with_context(|| format!("Failed to decode {}", path.display()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
