use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::Arc;

use custype::TypeRegistry;
use custype::shell::Shell;
use tracing_subscriber::EnvFilter;

#[allow(clippy::print_stdout)]
fn print_banner() {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VER: &str = env!("CARGO_PKG_VERSION");
    println!("{} version {}", NAME, VER);
    println!("Enter \".help\" for usage hints.");
}

#[allow(clippy::print_stdout)]
fn print_help() {
    println!(".help                        Show this message");
    println!(".exit/.quit                  Exit the REPL");
    println!(".type NAME_OR_ID             Describe a registered or built-in type");
    println!(".cast VALUE AS TYPE [AS ..]  Convert a text value through each type in turn");
    println!(".range V1 V2 ...             RANGE over integers or text values");
    println!("Any other line is checked as a password");
    println!();
    println!("Command-line options:");
    println!("  --help                Show this usage information");
    println!();
    println!("Logging is controlled through RUST_LOG (default: warn).");
}

#[allow(clippy::print_stdout, clippy::print_stderr)]
fn run_line(shell: &Shell, input: &str) {
    match shell.execute(input) {
        Ok(output) => println!("{}", output),
        Err(e) => eprintln!("Execution failed: {}", e),
    }
}

#[allow(clippy::print_stdout)]
fn repl(shell: &Shell) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        line.clear();
        print!("custype> ");
        stdout.flush()?;
        if stdin.read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        match input.split_whitespace().next() {
            Some(".help") => print_help(),
            Some(".exit" | ".quit") => break,
            _ => run_line(shell, input),
        }
    }

    Ok(())
}

fn process_stream<R: io::Read>(shell: &Shell, reader: R) -> io::Result<()> {
    for line in io::BufReader::new(reader).lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input, ".exit" | ".quit") {
            break;
        }
        run_line(shell, input);
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[allow(clippy::print_stderr)]
fn main() {
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_banner();
                print_help();
                return;
            }
            other => {
                eprintln!("Unrecognized argument: {}", other);
                print_help();
                std::process::exit(1);
            }
        }
    }

    init_tracing();

    let registry = match TypeRegistry::new() {
        Ok(registry) => Arc::new(registry),
        Err(e) => {
            eprintln!("Failed to register password type: {}", e);
            std::process::exit(1);
        }
    };
    let shell = Shell::new(registry);

    if !io::stdin().is_terminal() {
        if let Err(e) = process_stream(&shell, io::stdin()) {
            eprintln!("Error processing stdin: {}", e);
            std::process::exit(1);
        }
        return;
    }

    print_banner();
    if let Err(e) = repl(&shell) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
