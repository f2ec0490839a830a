use async_trait::async_trait;
use clouddns::ApiConnection;
use eyre::Result;
use structopt::StructOpt;

mod update;

pub use update::Update;

/// The interface for a CLI subcommand
#[async_trait]
pub trait Subcommand {
    /// Handle the subcommand call
    async fn execute(&self, project: String, connection: ApiConnection) -> Result<()>;
}
