pub mod dump;
pub mod find;
pub mod trace;


use ttre_lib::{CompileError, Limits, Regex};

/// Compile `pattern`, or print the diagnostic and exit with status 1.
fn compile_or_exit(pattern: &str, limits: Limits, color: bool) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex.with_limits(limits),
        Err(err) => report_compile_error(&err, color),
    }
}

fn report_compile_error(err: &CompileError, color: bool) -> ! {
    eprintln!("{}", err.printer().colored(color).render().trim_end());
    std::process::exit(1);
}
