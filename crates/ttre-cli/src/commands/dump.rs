//! Print the compiled node graph of a pattern.

use ttre_lib::{Colors, Limits};

use super::compile_or_exit;

pub struct DumpArgs {
    pub pattern: String,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let regex = compile_or_exit(&args.pattern, Limits::default(), args.color);
    let compiled = regex.compiled();
    let colors = Colors::new(args.color);

    println!(
        "{}pattern {:?}: {} nodes, {} groups{}",
        colors.dim,
        compiled.pattern(),
        compiled.graph().len(),
        compiled.group_count(),
        colors.reset
    );
    print!("{}", compiled.printer().colored(args.color).dump());
}
