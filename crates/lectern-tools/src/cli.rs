pub(crate) mod opt;
pub(crate) mod schema;
pub(crate) mod validate;

use crate::opt::Commands;
use anyhow::Error;

pub(crate) async fn exec(command: Commands) -> Result<(), Error> {
    match command {
        Commands::Schema(schema) => schema::exec(schema),
        Commands::Validate(validate) => validate::exec(validate).await,
    }
}
