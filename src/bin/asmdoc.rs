//! Command line front end for the asmdoc generators.
//!
//! Reads assembly from a file (or stdin) and prints the requested comment
//! block on stdout.

use asmdoc::source::read_source;
use asmdoc::stack::DEFAULT_EXTRA_SPACE;
use asmdoc::{DocResult, ProcedureDoc, StackDiagram};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const DEMO_CODE: &str = "
    push offset array
    push arraySize
    push offset sum
    push x
    call SumArrayPositive
";

#[derive(Parser, Debug)]
#[command(name = "asmdoc", version, about = "Generate stack and procedure comment blocks for 8086 assembly")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the stack state diagram of a push/call sequence
    Stack {
        /// Assembly source; stdin when omitted
        path: Option<PathBuf>,

        /// Spaces on each side of every column (1-4 recommended)
        #[arg(long, default_value_t = DEFAULT_EXTRA_SPACE)]
        extra_space: usize,
    },

    /// Print a procedure header, listing the pushed arguments as its input
    Proc {
        /// Assembly source; stdin when omitted
        path: Option<PathBuf>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        input: Option<String>,

        #[arg(short, long)]
        output: Option<String>,

        /// Do not read any source; the Input line only shows --input
        #[arg(long, conflicts_with = "path")]
        no_code: bool,
    },

    /// Print both blocks for a built-in SumArrayPositive call
    Demo,
}

fn run(cli: Cli) -> DocResult<String> {
    match cli.command {
        Command::Stack { path, extra_space } => {
            let code = read_source(path.as_deref())?;
            Ok(StackDiagram::new().extra_space(extra_space).render(&code))
        }
        Command::Proc {
            path,
            description,
            input,
            output,
            no_code,
        } => {
            let code = if no_code {
                None
            } else {
                Some(read_source(path.as_deref())?)
            };

            let mut doc = ProcedureDoc::new();
            if let Some(description) = description.as_deref() {
                doc = doc.description(description);
            }
            if let Some(input) = input.as_deref() {
                doc = doc.input(input);
            }
            if let Some(output) = output.as_deref() {
                doc = doc.output(output);
            }
            if let Some(code) = code.as_deref() {
                doc = doc.code(code);
            }
            Ok(doc.render())
        }
        Command::Demo => {
            let diagram = StackDiagram::new().render(DEMO_CODE);
            let header = ProcedureDoc::new()
                .description("sums positive values in pushed array into a variable")
                .output("sum in [Sum] at DSEG")
                .code(DEMO_CODE)
                .render();
            Ok(format!("{header}\n\n{diagram}"))
        }
    }
}

fn main() {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
