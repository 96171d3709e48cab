use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Look up Lisp primitives by name and invoke them on literal values.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(name = "lisp-primitives", bin_name = "lisp-primitives")]
#[clap(subcommand_required = true, arg_required_else_help = true)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Invokes a primitive with literal arguments, e.g. `call cons 1 "(2 3)"`.
    Call(CallArgs),
    /// Lists every primitive with its aliases and arity.
    List,
    /// Starts an interactive shell reading `<alias> <value>...` lines.
    Repl(ReplArgs),
}

#[derive(Args, Debug)]
pub struct CallArgs {
    /// Primitive alias to resolve (`+`, `add`, `car`, `cons`, ...).
    #[clap(value_name = "NAME")]
    pub name: String,

    /// Argument values: numbers, true/false, "strings" or (lists).
    #[clap(value_name = "ARG", allow_negative_numbers = true)]
    pub args: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ReplArgs {
    /// History file for the shell; defaults to the user data directory.
    #[clap(long, value_name = "PATH", env = "LISP_PRIMITIVES_HISTORY")]
    pub history: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn call_collects_negative_numbers_as_arguments() {
        let cli = Cli::try_parse_from(["lisp-primitives", "call", "-", "-3", "2"]).unwrap();
        match cli.command {
            Commands::Call(call) => {
                assert_eq!(call.name, "-");
                assert_eq!(call.args, ["-3", "2"]);
            }
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn repl_history_flag() {
        let cli =
            Cli::try_parse_from(["lisp-primitives", "repl", "--history", "/tmp/h.txt"]).unwrap();
        match cli.command {
            Commands::Repl(repl) => assert_eq!(repl.history, Some(PathBuf::from("/tmp/h.txt"))),
            other => panic!("expected repl, got {:?}", other),
        }
    }
}
