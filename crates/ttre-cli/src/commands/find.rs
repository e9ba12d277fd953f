//! Search text and display the matches.

use std::time::Instant;

use serde::Serialize;
use ttre_lib::{Captures, Colors, Limits, MatchOptions, Regex, RuntimeError};

use super::compile_or_exit;

/// How many matches to look for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FindMode {
    /// The whole text must match.
    Full,
    /// First match only.
    First,
    /// Every non-overlapping match.
    All,
}

/// `--json` output.
#[derive(Debug, Serialize)]
pub struct FindReport<'a> {
    pub pattern: &'a str,
    pub matches: &'a [Captures],
}

pub struct FindArgs {
    pub pattern: String,
    pub text: String,
    pub mode: FindMode,
    pub options: MatchOptions,
    pub limits: Limits,
    pub group: bool,
    pub hide: bool,
    pub time: bool,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: FindArgs) {
    let regex = compile_or_exit(&args.pattern, args.limits, args.color);

    let started = Instant::now();
    let result = collect_matches(&regex, &args.text, args.mode, args.options);
    let elapsed = started.elapsed();

    let matches = match result {
        Ok(matches) => matches,
        Err(e) => {
            if !args.hide {
                eprintln!("error: {e}");
            }
            if args.time {
                println!("n/a");
            }
            std::process::exit(1);
        }
    };
    log::debug!("{} matches in {elapsed:?}", matches.len());

    if !args.hide {
        if args.json {
            let report = FindReport {
                pattern: &args.pattern,
                matches: &matches,
            };
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        } else {
            let colors = Colors::new(args.color);
            print!("{}", render_matches(&args.text, &matches, args.group, colors));
        }
    }

    if args.time {
        if !args.hide {
            println!();
        }
        println!("{:.3}", elapsed.as_secs_f64() * 1000.0);
    }
}

/// Run the search `mode` asks for. Only successful matches are returned.
pub fn collect_matches(
    regex: &Regex,
    text: &str,
    mode: FindMode,
    options: MatchOptions,
) -> Result<Vec<Captures>, RuntimeError> {
    let first = |options: MatchOptions| -> Result<Vec<Captures>, RuntimeError> {
        let caps = regex.captures(text, options)?;
        Ok(if caps.is_match() { vec![caps] } else { Vec::new() })
    };

    match mode {
        FindMode::Full => first(options.difference(MatchOptions::SEARCH)),
        FindMode::First => first(options | MatchOptions::SEARCH),
        FindMode::All => regex.find_iter(text, options).collect(),
    }
}

/// The text with every match highlighted, followed by the captured groups
/// when `group` is set.
///
/// Neighbouring matches alternate between two highlights; an empty match is
/// shown as a highlighted space.
pub fn render_matches(text: &str, matches: &[Captures], group: bool, colors: Colors) -> String {
    if matches.is_empty() {
        return format!("no match\n{text}\n");
    }

    let mut out = String::new();
    let mut seek = 0;
    for (i, caps) in matches.iter().enumerate() {
        let Some(span) = caps.span() else {
            continue;
        };
        out.push_str(text.get(seek..span.start).unwrap_or_default());

        let shown = if span.is_empty() {
            " "
        } else {
            text.get(span.range()).unwrap_or_default()
        };
        out.push_str(colors.highlight(i));
        out.push_str(shown);
        out.push_str(colors.reset);
        seek = span.end();
    }
    out.push_str(text.get(seek..).unwrap_or_default());
    out.push('\n');

    if group {
        for (i, caps) in matches.iter().enumerate() {
            if caps.len() <= 1 {
                continue;
            }
            out.push_str(&format!("match {}\n", i + 1));
            for j in 1..caps.len() {
                let captured = caps.text(text, j).unwrap_or_default();
                out.push_str(&format!("{j}. {captured}\n"));
            }
        }
    }
    out
}
