//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! This allows the same arg definition to be reused across commands with
//! different visibility settings (via `.hide(true)`).

use clap::{Arg, ArgAction, value_parser};

/// Pattern text (positional).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .required(true)
        .help("Regular expression")
}

/// Text to match against (positional).
pub fn text_arg() -> Arg {
    Arg::new("text")
        .value_name("TEXT")
        .required(true)
        .help("Text to search")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Require the whole text to match (--match).
pub fn full_match_arg() -> Arg {
    Arg::new("full_match")
        .long("match")
        .action(ArgAction::SetTrue)
        .help("Match the whole text instead of searching")
}

/// Search once instead of listing every match (--exec).
pub fn exec_arg() -> Arg {
    Arg::new("exec")
        .long("exec")
        .action(ArgAction::SetTrue)
        .help("Report only the first match")
}

/// ASCII case-insensitive matching (-i/--icase).
pub fn icase_arg() -> Arg {
    Arg::new("icase")
        .short('i')
        .long("icase")
        .action(ArgAction::SetTrue)
        .help("Ignore ASCII case")
}

/// `^` only at the start of the text (--single).
pub fn single_arg() -> Arg {
    Arg::new("single")
        .long("single")
        .action(ArgAction::SetTrue)
        .help("Treat the text as a single line for `^`")
}

/// Disable memoization (--normal).
pub fn normal_arg() -> Arg {
    Arg::new("normal")
        .long("normal")
        .action(ArgAction::SetTrue)
        .help("Plain backtracking without the memo table")
}

/// Print capture groups (--group).
pub fn group_arg() -> Arg {
    Arg::new("group")
        .long("group")
        .action(ArgAction::SetTrue)
        .help("Print the captured groups of every match")
}

/// Suppress the match display (--hide).
pub fn hide_arg() -> Arg {
    Arg::new("hide")
        .long("hide")
        .action(ArgAction::SetTrue)
        .help("Do not print matches")
}

/// Print elapsed time (--time).
pub fn time_arg() -> Arg {
    Arg::new("time")
        .long("time")
        .action(ArgAction::SetTrue)
        .help("Print matching time in milliseconds")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print matches as JSON capture lists")
}

/// Step budget (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .value_parser(value_parser!(u64).range(1..))
        .help("Backtracking step limit per start position")
}

/// Depth budget (--depth).
pub fn depth_arg() -> Arg {
    Arg::new("depth")
        .long("depth")
        .value_name("N")
        .value_parser(value_parser!(u32).range(1..))
        .help("Recursion depth limit")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}
