use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// A managed DNS zone which holds one or more record sets
#[derive(Clone, Debug)]
pub struct Zone {
    pub project: String,
    pub name: String,
    pub dns_name: Option<String>,
}

impl Zone {
    /// Create a zone from the project that owns it and its name
    pub fn new<S: Into<String>>(project: S, name: S) -> Zone {
        Zone {
            project: project.into(),
            name: name.into(),
            dns_name: None,
        }
    }

    /// Factory: construct a zone from its API representation
    pub fn from_api_repr(resource: Value, project: &str) -> Result<Zone> {
        let repr: ApiZone = serde_json::from_value(resource)?;

        Ok(Zone {
            project: project.to_owned(),
            name: repr.name,
            dns_name: repr.dns_name,
        })
    }

    /// The resource path of the zone, relative to the API root
    pub fn path(&self) -> String {
        format!("projects/{}/managedZones/{}", self.project, self.name)
    }
}

/// The API's representation of a managed zone
#[derive(Debug, Deserialize)]
struct ApiZone {
    name: String,
    #[serde(rename = "dnsName")]
    dns_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::Zone;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn path_contains_project_and_name() {
        let zone = Zone::new("p", "z");
        assert_eq!("projects/p/managedZones/z", zone.path());
    }

    #[test]
    fn from_api_repr_reads_names() {
        let zone = Zone::from_api_repr(json!({"name": "z", "dnsName": "example.com."}), "p")
            .expect("failed to parse zone");

        assert_eq!("p", &zone.project);
        assert_eq!("z", &zone.name);
        assert_eq!(Some("example.com.".to_owned()), zone.dns_name);
        assert_eq!("projects/p/managedZones/z", zone.path());
    }

    #[test]
    fn from_api_repr_requires_name() {
        let result = Zone::from_api_repr(json!({"dnsName": "example.com."}), "p");
        assert!(matches!(result, Err(Error::Decode(_))));
    }
}
