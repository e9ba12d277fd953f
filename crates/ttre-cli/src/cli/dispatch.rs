//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use clap::ArgMatches;
use ttre_lib::{Limits, MatchOptions, Verbosity};

use super::ColorChoice;
use crate::commands::dump::DumpArgs;
use crate::commands::find::{FindArgs, FindMode};
use crate::commands::trace::TraceArgs;

/// Flags that shape a single match call, shared by `find` and `trace`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchFlags {
    pub full_match: bool,
    pub icase: bool,
    pub single: bool,
    pub normal: bool,
    pub fuel: Option<u64>,
    pub depth: Option<u32>,
}

impl MatchFlags {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            full_match: m.get_flag("full_match"),
            icase: m.get_flag("icase"),
            single: m.get_flag("single"),
            normal: m.get_flag("normal"),
            fuel: m.get_one::<u64>("fuel").copied(),
            depth: m.get_one::<u32>("depth").copied(),
        }
    }

    pub fn options(&self) -> MatchOptions {
        let mut options = MatchOptions::empty();
        options.set(MatchOptions::SEARCH, !self.full_match);
        options.set(MatchOptions::NOCASE, self.icase);
        options.set(MatchOptions::SINGLE, self.single);
        options.set(MatchOptions::NORMAL, self.normal);
        options
    }

    pub fn limits(&self) -> Limits {
        let mut limits = Limits::default();
        if let Some(fuel) = self.fuel {
            limits = limits.backtrack_limit(fuel);
        }
        if let Some(depth) = self.depth {
            limits = limits.depth_limit(depth);
        }
        limits
    }
}

pub struct FindParams {
    pub pattern: String,
    pub text: String,
    pub flags: MatchFlags,
    pub exec: bool,
    pub group: bool,
    pub hide: bool,
    pub time: bool,
    pub json: bool,
    pub color: ColorChoice,
}

impl FindParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned().unwrap_or_default(),
            text: m.get_one::<String>("text").cloned().unwrap_or_default(),
            flags: MatchFlags::from_matches(m),
            exec: m.get_flag("exec"),
            group: m.get_flag("group"),
            hide: m.get_flag("hide"),
            time: m.get_flag("time"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<FindParams> for FindArgs {
    fn from(p: FindParams) -> Self {
        // --match wins over --exec: a full match never iterates anyway.
        let mode = if p.flags.full_match {
            FindMode::Full
        } else if p.exec {
            FindMode::First
        } else {
            FindMode::All
        };

        Self {
            pattern: p.pattern,
            text: p.text,
            mode,
            options: p.flags.options(),
            limits: p.flags.limits(),
            group: p.group,
            hide: p.hide,
            time: p.time,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub pattern: String,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned().unwrap_or_default(),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            pattern: p.pattern,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub pattern: String,
    pub text: String,
    pub flags: MatchFlags,
    pub verbose: u8,
    pub color: ColorChoice,
    // Note: exec, group, hide, time, json are parsed but not extracted (unified flags)
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned().unwrap_or_default(),
            text: m.get_one::<String>("text").cloned().unwrap_or_default(),
            flags: MatchFlags::from_matches(m),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            pattern: p.pattern,
            text: p.text,
            options: p.flags.options(),
            limits: p.flags.limits(),
            verbosity,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
