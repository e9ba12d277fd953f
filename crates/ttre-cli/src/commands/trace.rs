//! Trace one match for debugging.

use ttre_lib::{Captures, Colors, Limits, MatchOptions, PrintTracer, Verbosity};

use super::compile_or_exit;

pub struct TraceArgs {
    pub pattern: String,
    pub text: String,
    pub options: MatchOptions,
    pub limits: Limits,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let regex = compile_or_exit(&args.pattern, args.limits, args.color);
    let colors = Colors::new(args.color);
    let mut tracer = PrintTracer::new(regex.compiled(), &args.text, args.verbosity, colors)
        .streaming(true);

    let result = regex.match_traced(&args.text, args.options, 0, &mut tracer);

    match result {
        Ok(caps) => {
            println!("{}---{}", colors.dim, colors.reset);
            print!("{}", format_slots(&caps, &args.text));
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            std::process::exit(1);
        }
    }
}

/// One line per capture slot: `0: 2..5 "abc"`, or `1: unset`.
pub fn format_slots(caps: &Captures, text: &str) -> String {
    if !caps.is_match() {
        return "no match\n".to_string();
    }

    let mut out = String::new();
    for (i, slot) in caps.iter().enumerate() {
        let line = match slot {
            Some(span) => format!(
                "{i}: {}..{} {:?}\n",
                span.start,
                span.end(),
                text.get(span.range()).unwrap_or_default()
            ),
            None => format!("{i}: unset\n"),
        };
        out.push_str(&line);
    }
    out
}
