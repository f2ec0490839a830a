use super::*;
use clouddns::{RecordSet, Zone};
use std::sync::Arc;

// dnsctl update <zone> <name> <type> --ttl 300 --rrdata 1.2.3.4
#[derive(Debug, StructOpt)]
pub struct Update {
    /// The managed zone containing the record set
    pub zone: String,
    /// The DNS name of the record set
    pub name: String,
    /// The record type of the record set
    #[structopt(name = "type")]
    pub record_type: String,
    /// The new TTL in seconds
    #[structopt(short, long)]
    pub ttl: u32,
    /// A resource data line, repeat for multiple lines
    #[structopt(short, long = "rrdata", required = true, number_of_values = 1)]
    pub rrdatas: Vec<String>,
}

#[async_trait]
impl Subcommand for Update {
    /// Handle the subcommand call
    async fn execute(&self, project: String, connection: ApiConnection) -> Result<()> {
        let zone = Arc::new(Zone::new(project, self.zone.clone()));
        let record = RecordSet::new(
            self.name.clone(),
            self.record_type.clone(),
            self.ttl,
            self.rrdatas.clone(),
            zone.clone(),
        );

        record.update(&zone, &connection).await?;
        println!(
            "updated {} record {} in zone {}",
            record.record_type, record.name, self.zone
        );

        Ok(())
    }
}
