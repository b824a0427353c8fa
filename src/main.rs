use std::{fs, process::ExitCode};

use clap::Parser;
use tally::{
    ast::Render,
    interpreter::{evaluator::Evaluator, parser::parse},
    self_test,
};
use tracing_subscriber::{EnvFilter, fmt};

/// tally evaluates integer arithmetic expressions with `+`, `-`, `*` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tally to read expressions from a file, one per line, instead of
    /// taking the argument as the expression.
    #[arg(short, long)]
    file: bool,

    /// Fail with a non-zero exit status if any diagnostic is reported.
    #[arg(short, long)]
    strict: bool,

    /// Print the parsed tree in prefix form before each result.
    #[arg(short, long)]
    tree: bool,

    /// Run the built-in self-test table and exit.
    #[arg(long, conflicts_with_all = ["file", "contents"])]
    self_test: bool,

    #[arg(required_unless_present = "self_test")]
    contents: Option<String>,
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .compact()
         .init();
}

fn run_self_test() -> ExitCode {
    let reports = self_test::run();
    for report in &reports {
        println!("{report}");
    }

    if reports.iter().all(self_test::SelfTestReport::passed) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Evaluates one expression and prints its result.
///
/// Returns `false` if strict mode is on and something was reported; the
/// diagnostics are then printed to stderr whatever the log level.
fn run_expression(source: &str, args: &Args) -> bool {
    let mut outcome = parse(source);
    if args.tree {
        println!("{}", Render(outcome.tree.as_deref()));
    }

    let value = Evaluator::new(&mut outcome.diagnostics).eval(outcome.tree.as_deref());
    println!("{}", value.cast_signed());

    if args.strict && !outcome.diagnostics.is_empty() {
        eprintln!("'{source}' was rejected in strict mode:\n{}", outcome.diagnostics);
        return false;
    }

    true
}

fn main() -> ExitCode {
    init_logger();

    let args = Args::parse();

    if args.self_test {
        return run_self_test();
    }

    let contents = args.contents.clone().unwrap_or_default();

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let mut ok = true;
    if args.file {
        for line in script.lines().filter(|line| !line.trim().is_empty()) {
            ok &= run_expression(line, &args);
        }
    } else {
        ok = run_expression(&script, &args);
    }

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
