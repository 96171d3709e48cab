use anyhow::{Context, Result};
use clap::Parser;
use lisp_primitives::cli::{CallArgs, Cli, Commands};
use lisp_primitives::engine::reader::read_value;
use lisp_primitives::{Value, builtins, logging, repl, resolve};
use tracing::info;

fn run_call(call: &CallArgs) -> Result<Value> {
    let primitive = resolve(&call.name)?;
    let args = call
        .args
        .iter()
        .map(|raw| read_value(raw).with_context(|| format!("invalid argument '{}'", raw)))
        .collect::<Result<Vec<_>>>()?;
    info!(primitive = primitive.name(), argc = args.len(), "Invoking primitive");
    primitive
        .call(args)
        .with_context(|| format!("calling '{}' failed", call.name))
}

fn print_listing() {
    for primitive in builtins().iter() {
        println!(
            "{:<20} {:<22} {}",
            primitive.aliases.join(", "),
            primitive.arity.to_string(),
            primitive.summary
        );
    }
}

fn main() -> Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    info!(?cli, "Parsed CLI arguments");

    match cli.command {
        Commands::Call(call) => {
            let value = run_call(&call)?;
            println!("{}", value);
        }
        Commands::List => print_listing(),
        Commands::Repl(args) => repl::start_repl(args.history)?,
    }

    Ok(())
}
