//! An interactive, line-oriented front end for a registry of
//! [`phone_forward::BaseRegistry`] bases.
//!
//! Grammar (one command per line, modeled on the original interpreter's
//! operators):
//!
//! ```text
//! NEW <id>          select (creating if absent) the base named <id>
//! DELETE <id>       drop the base named <id>
//! ADD <src> <dst>   install a rule on the current base
//! REMOVE <prefix>   drop every rule whose source starts with <prefix>
//! ?<number>         print the forward of <number> under the current base
//! ><number>         print every number that reverses to <number>
//! @<set> <len>      print the count of non-trivial length-<len> numbers
//! #...              comment, ignored to end of line
//! ```
//!
//! Blank lines and comment-only lines are ignored. A line naming an
//! operator before any `NEW` has selected a base is an error.

use std::fs::File;
use std::path::PathBuf;

use ansi_term::Colour;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use phone_forward::{BaseRegistry, Snapshot};

#[derive(Parser, Debug)]
#[command(name = "phone-forward-cli", about = "Phone-number forwarding REPL")]
struct Args {
    /// Load a base's rules from a two-column `src,dst` CSV file before
    /// starting the REPL.
    #[arg(long, value_name = "FILE")]
    bulk: Option<PathBuf>,

    /// Identifier of the base populated by `--bulk` (created if absent,
    /// and selected as current on startup).
    #[arg(long, default_value = "default")]
    base: String,

    /// How `?`/`>` results are printed.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn load_bulk(registry: &mut BaseRegistry, base: &str, path: &PathBuf) -> Result<usize, String> {
    let file = File::open(path).map_err(|e| format!("can't open '{}': {e}", path.display()))?;
    let mut reader = csv::Reader::from_reader(file);
    registry.create(base);
    let target = registry.get_mut(base).expect("just created");

    let mut loaded = 0;
    for result in reader.records() {
        let record = result.map_err(|e| format!("bad CSV record: {e}"))?;
        let src = record.get(0).unwrap_or_default();
        let dst = record.get(1).unwrap_or_default();
        if target.add(src, dst) {
            loaded += 1;
        } else {
            eprintln!(
                "{}",
                Colour::Yellow.paint(format!("skipping invalid rule '{src}' -> '{dst}'"))
            );
        }
    }
    Ok(loaded)
}

fn print_numbers(list: &phone_forward::NumberList, format: OutputFormat) {
    if list.is_sentinel() {
        eprintln!("{}", Colour::Red.paint("ERROR: not a phone number"));
        return;
    }
    match format {
        OutputFormat::Text => {
            for i in 0..list.len() {
                println!("{}", list.get_at(i).unwrap());
            }
        }
        OutputFormat::Json => {
            let values: Vec<&str> = (0..list.len()).map(|i| list.get_at(i).unwrap()).collect();
            match serde_json::to_string(&values) {
                Ok(text) => println!("{text}"),
                Err(e) => eprintln!("{}", Colour::Red.paint(format!("JSON error: {e}"))),
            }
        }
    }
}

/// Runs one line of input against `registry`, tracking which base is
/// currently selected. Returns an error message (without the leading
/// `ERROR`/line-number decoration the caller adds) on failure.
fn run_line(registry: &mut BaseRegistry, current: &mut Option<String>, line: &str, format: OutputFormat) -> Result<(), String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(());
    }

    if let Some(id) = line.strip_prefix("NEW ") {
        let id = id.trim();
        if !registry.contains(id) {
            registry.create(id);
        }
        *current = Some(id.to_owned());
        return Ok(());
    }
    if let Some(id) = line.strip_prefix("DELETE ") {
        let id = id.trim();
        registry.remove(id);
        if current.as_deref() == Some(id) {
            *current = None;
        }
        return Ok(());
    }
    if let Some(rest) = line.strip_prefix("ADD ") {
        let mut parts = rest.split_whitespace();
        let src = parts.next().ok_or("ADD requires <src> <dst>")?;
        let dst = parts.next().ok_or("ADD requires <src> <dst>")?;
        let base = current_base_mut(registry, current)?;
        if !base.add(src, dst) {
            return Err(format!("rule '{src}' -> '{dst}' rejected"));
        }
        return Ok(());
    }
    if let Some(prefix) = line.strip_prefix("REMOVE ") {
        let base = current_base_mut(registry, current)?;
        base.remove(prefix.trim());
        return Ok(());
    }
    if let Some(number) = line.strip_prefix('?') {
        let base = current_base(registry, current)?;
        print_numbers(&base.get(number.trim()), format);
        return Ok(());
    }
    if let Some(number) = line.strip_prefix('>') {
        let base = current_base(registry, current)?;
        print_numbers(&base.reverse(number.trim()), format);
        return Ok(());
    }
    if let Some(rest) = line.strip_prefix('@') {
        let mut parts = rest.split_whitespace();
        let set = parts.next().ok_or("@ requires <set> <len>")?;
        let len: usize = parts
            .next()
            .ok_or("@ requires <set> <len>")?
            .parse()
            .map_err(|_| "len must be a non-negative integer".to_string())?;
        let base = current_base(registry, current)?;
        println!("{}", base.count(set, len));
        return Ok(());
    }

    Err(format!("unrecognized command '{line}'"))
}

fn current_base<'a>(registry: &'a BaseRegistry, current: &Option<String>) -> Result<&'a phone_forward::ForwardingBase, String> {
    let id = current.as_deref().ok_or("no base selected; issue NEW <id> first")?;
    registry.get(id).ok_or_else(|| format!("base '{id}' no longer exists"))
}

fn current_base_mut<'a>(registry: &'a mut BaseRegistry, current: &Option<String>) -> Result<&'a mut phone_forward::ForwardingBase, String> {
    let id = current.as_deref().ok_or("no base selected; issue NEW <id> first")?;
    registry.get_mut(id).ok_or_else(|| format!("base '{id}' no longer exists"))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut registry = BaseRegistry::new();
    let mut current: Option<String> = None;

    if let Some(path) = &args.bulk {
        match load_bulk(&mut registry, &args.base, path) {
            Ok(n) => {
                println!("loaded {n} rules into '{}'", args.base);
                current = Some(args.base.clone());
            }
            Err(e) => {
                eprintln!("{}", Colour::Red.paint(format!("ERROR bulk load: {e}")));
                std::process::exit(1);
            }
        }
    }

    let mut editor = DefaultEditor::new().expect("terminal line editor");
    let mut line_number = 0usize;

    loop {
        line_number += 1;
        let readline = editor.readline("phone-forward> ");
        match readline {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                if let Err(e) = run_line(&mut registry, &mut current, &line, args.format) {
                    eprintln!(
                        "{}",
                        Colour::Red.paint(format!("ERROR {e} {line_number}"))
                    );
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}", Colour::Red.paint(format!("readline error: {e}")));
                break;
            }
        }
    }

    if let Some(id) = &current {
        if let Some(base) = registry.get(id) {
            let snapshot = Snapshot::capture(base);
            log::debug!("final rule count in '{id}': {}", snapshot.rules.len());
        }
    }
}
