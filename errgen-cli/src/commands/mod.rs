pub mod generate;

use crate::{Cli, Result};

pub fn execute(cli: Cli) -> Result<()> {
    generate::execute(cli.file, cli.output, cli.kind, cli.package)
}
