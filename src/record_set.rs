use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::{
    connection::Connection,
    error::{Error, Result},
    zone::Zone,
};

/// The field paths replaced by [`RecordSet::update`]
const UPDATE_MASK_PATHS: [&str; 2] = ["rrset.ttl", "rrset.rrdatas"];

/// A single DNS resource record set owned by a [`Zone`]
///
/// The `ttl` and `rrdatas` fields may be freely mutated; whatever values
/// they hold when [`RecordSet::update`] is called are what gets sent.
#[derive(Clone, Debug)]
pub struct RecordSet {
    pub name: String,
    pub record_type: String,
    pub ttl: u32,
    pub rrdatas: Vec<String>,
    pub zone: Arc<Zone>,
}

impl RecordSet {
    /// Create a record set from its parts
    pub fn new<S: Into<String>>(
        name: S,
        record_type: S,
        ttl: u32,
        rrdatas: Vec<String>,
        zone: Arc<Zone>,
    ) -> RecordSet {
        RecordSet {
            name: name.into(),
            record_type: record_type.into(),
            ttl,
            rrdatas,
            zone,
        }
    }

    /// Factory: construct a record set from its API representation
    ///
    /// Validates that `name`, `type`, `ttl`, and `rrdatas` are all present
    /// before any of them is stored. No network call occurs.
    pub fn from_api_repr(resource: Value, zone: Arc<Zone>) -> Result<RecordSet> {
        let repr: ApiRecordSet = serde_json::from_value(resource)?;

        Ok(RecordSet {
            name: repr.name,
            record_type: repr.record_type,
            ttl: repr.ttl.into_seconds()?,
            rrdatas: repr.rrdatas,
            zone,
        })
    }

    /// API call: replace the record set's TTL and data via a PATCH request
    ///
    /// The zone determines the request path and may differ from the zone
    /// the record set was constructed with.
    #[instrument(skip(self, connection), fields(name = %self.name, record_type = %self.record_type))]
    pub async fn update<C>(&self, zone: &Zone, connection: &C) -> Result<()>
    where
        C: Connection + ?Sized,
    {
        let path = format!("{}/rrsets/{}/{}", zone.path(), self.name, self.record_type);
        let record_data = RecordSetPatch {
            ttl: self.ttl,
            rrdatas: &self.rrdatas,
            update_mask: UpdateMask {
                paths: &UPDATE_MASK_PATHS,
            },
        };

        connection
            .request(
                Method::PATCH,
                &path,
                Some(serde_json::to_value(&record_data)?),
            )
            .await?;
        debug!("record set updated");

        Ok(())
    }
}

/// The API's representation of a record set
#[derive(Debug, Deserialize)]
struct ApiRecordSet {
    name: String,
    #[serde(rename = "type")]
    record_type: String,
    ttl: Ttl,
    rrdatas: Vec<String>,
}

/// TTLs arrive on the wire as either a number or a numeric string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Ttl {
    Seconds(u32),
    Text(String),
}

impl Ttl {
    fn into_seconds(self) -> Result<u32> {
        match self {
            Self::Seconds(seconds) => Ok(seconds),
            Self::Text(raw) => raw.parse().map_err(|_| Error::InvalidTtl(raw)),
        }
    }
}

/// The partial-update request body for a record set
#[derive(Debug, Serialize)]
struct RecordSetPatch<'r> {
    ttl: u32,
    rrdatas: &'r [String],
    update_mask: UpdateMask<'r>,
}

#[derive(Debug, Serialize)]
struct UpdateMask<'r> {
    paths: &'r [&'r str],
}
