//! `rbt`: build a red-black tree from integer keys and dump it.
//!
//! Usage:
//!   rbt [KEY...]
//!
//! Keys are inserted in argument order. With no arguments they are read
//! whitespace-separated from stdin. Duplicates are reported and skipped.
//! Set `RBT_LOG` (`off`, `error`, `warn`, `info`, `debug`, `trace`) to see
//! rebalancing steps on stderr.

use std::io::{self, Read};

use log::LevelFilter;
use rb_tree::{Key, RbTree, TreeError};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn log_level() -> LevelFilter {
    std::env::var("RBT_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

fn read_input() -> Result<Vec<String>, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args);
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| e.to_string())?;
    Ok(buf.split_whitespace().map(str::to_string).collect())
}

fn parse_keys(raw: &[String]) -> Result<Vec<Key>, String> {
    raw.iter()
        .map(|s| {
            s.parse::<Key>()
                .map_err(|_| format!("Not an integer key: {s}"))
        })
        .collect()
}

fn show(result: Result<Key, TreeError>) -> String {
    match result {
        Ok(k) => k.to_string(),
        Err(e) => e.to_string(),
    }
}

fn main() {
    let _ = TermLogger::init(
        log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let keys = match read_input().and_then(|raw| parse_keys(&raw)) {
        Ok(keys) => keys,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut tree = RbTree::new();
    for key in keys {
        if let Err(e) = tree.insert(key) {
            eprintln!("skipping: {e}");
        }
    }

    println!("size: {}", tree.size());
    println!("min: {}", show(tree.min()));
    println!("max: {}", show(tree.max()));
    println!("infix: {}", tree.to_infix_string());
    println!("prefix: {}", tree.to_prefix_string());
    println!("postfix: {}", tree.to_postfix_string());
    if !tree.is_empty() {
        println!("{}", tree.print());
    }
}
