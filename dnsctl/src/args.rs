use super::commands::{self, Subcommand};
use structopt::StructOpt;
use url::Url;

#[derive(Debug, StructOpt)]
#[structopt(name = "dnsctl", about = "Manages record sets in a cloud DNS service")]
pub struct Args {
    /// The root of the DNS service API
    #[structopt(
        short,
        long,
        default_value = "https://dns.googleapis.com/dns/v1",
        env = "DNSCTL_ENDPOINT"
    )]
    pub endpoint: Url,
    /// The token to authenticate with
    #[structopt(short, long, env = "DNSCTL_TOKEN", hide_env_values = true)]
    pub token: String,
    /// The project that owns the managed zones
    #[structopt(short, long, env = "DNSCTL_PROJECT")]
    pub project: String,

    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Update an existing record set
    Update(commands::Update),
}

impl Command {
    pub fn subcommand(self) -> Box<dyn Subcommand> {
        match self {
            Self::Update(s) => Box::new(s),
        }
    }
}
