//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! Matching flags are accepted by every command; the ones a command does
//! not use are hidden from `--help`.

use clap::Command;

use super::args::*;

/// Add hidden matching args (for commands that never run a match).
fn with_hidden_match_args(cmd: Command) -> Command {
    cmd.arg(text_arg().required(false).hide(true))
        .arg(full_match_arg().hide(true))
        .arg(icase_arg().hide(true))
        .arg(single_arg().hide(true))
        .arg(normal_arg().hide(true))
        .arg(fuel_arg().hide(true))
        .arg(depth_arg().hide(true))
}

/// Add hidden output args (for commands with their own output format).
fn with_hidden_output_args(cmd: Command) -> Command {
    cmd.arg(exec_arg().hide(true))
        .arg(group_arg().hide(true))
        .arg(hide_arg().hide(true))
        .arg(time_arg().hide(true))
        .arg(json_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("ttre")
        .about("Regular expressions matched by memoized backtracking")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(find_command())
        .subcommand(dump_command())
        .subcommand(trace_command())
}

/// Search text and highlight the matches.
pub fn find_command() -> Command {
    Command::new("find")
        .about("Search text and highlight every match")
        .override_usage("  ttre find <PATTERN> <TEXT> [OPTIONS]")
        .after_help(
            r#"EXAMPLES:
  ttre find 'a+' 'caaab'              # highlight every match
  ttre find --exec 'a+' 'caaab'       # first match only
  ttre find --match '(a|b)*' 'abba'   # whole text must match
  ttre find --group '(\w)(\d)' 'a1 b2' # list captures
  ttre find --json 'b' 'abcb'         # spans as JSON"#,
        )
        .arg(pattern_arg())
        .arg(text_arg())
        .arg(full_match_arg())
        .arg(exec_arg())
        .arg(icase_arg())
        .arg(single_arg())
        .arg(normal_arg())
        .arg(group_arg())
        .arg(hide_arg())
        .arg(time_arg())
        .arg(json_arg())
        .arg(fuel_arg())
        .arg(depth_arg())
        .arg(color_arg())
        .arg(verbose_arg().hide(true))
}

/// Show the compiled node graph.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the compiled node graph")
        .override_usage("  ttre dump <PATTERN>")
        .after_help(
            r#"EXAMPLES:
  ttre dump 'a|b'
  ttre dump '(a?)*'"#,
        )
        .arg(pattern_arg())
        .arg(color_arg());

    with_hidden_output_args(with_hidden_match_args(cmd)).arg(verbose_arg().hide(true))
}

/// Trace one match, node by node.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace one match step by step")
        .override_usage("  ttre trace <PATTERN> <TEXT> [-v|-vv]")
        .after_help(
            r#"EXAMPLES:
  ttre trace 'a|ab' 'ab'              # node visits
  ttre trace -v '(a*)*b' 'aaa'        # plus failures and memo hits
  ttre trace -vv '(a)\1' 'aa'         # plus capture updates"#,
        )
        .arg(pattern_arg())
        .arg(text_arg())
        .arg(full_match_arg())
        .arg(icase_arg())
        .arg(single_arg())
        .arg(normal_arg())
        .arg(fuel_arg())
        .arg(depth_arg())
        .arg(verbose_arg())
        .arg(color_arg());

    with_hidden_output_args(cmd)
}
