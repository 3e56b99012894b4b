use clap::Parser;

use folio_cli::{CliArgs, FolioCli};

fn main() {
    let args = CliArgs::parse();

    let cli = match FolioCli::from_args("folio", &args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = cli.run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
