use clap::Parser;
use miette::Result;
use gplconv::cli::{Cli, Commands};
use gplconv::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Convert(args) => {
            let printer = printer.with_verbose(args.verbose);
            gplconv::cli::convert::run(args, &printer)?
        }
        Commands::Check(args) => gplconv::cli::check::run(args, &printer)?,
        Commands::Init(args) => gplconv::cli::init::run(args, &printer)?,
        Commands::Completions(args) => gplconv::cli::completions::run(args)?,
    }

    Ok(())
}
