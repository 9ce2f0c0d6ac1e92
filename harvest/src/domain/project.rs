use serde::{Deserialize, Serialize};

/// A Harvest project. The `client` object is present in `/projects`
/// responses but omitted from the nested project of a time entry, hence the
/// default.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub client: ClientRef,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRef {
    pub id: i64,
    pub name: String,
}
