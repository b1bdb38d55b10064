use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named cluster-connection descriptor. Serde names follow the kubeconfig
/// v1 document keys so the same struct serves as the wire representation;
/// keys this tool does not model are carried through `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Cluster {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub server: String,
    #[serde(rename = "certificate-authority-data", default, skip_serializing_if = "Option::is_none")]
    pub certificate_authority_data: Option<String>,
    #[serde(rename = "insecure-skip-tls-verify", default, skip_serializing_if = "Option::is_none")]
    pub insecure_skip_tls_verify: Option<bool>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

/// Authentication material for one user entry (the credential side of a
/// context). Exec plugins, auth providers and anything else unmodeled ride
/// along in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AuthInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(rename = "client-certificate-data", default, skip_serializing_if = "Option::is_none")]
    pub client_certificate_data: Option<String>,
    #[serde(rename = "client-key-data", default, skip_serializing_if = "Option::is_none")]
    pub client_key_data: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

/// Binds one cluster and one user by identifier, plus a namespace (may be
/// empty).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Context {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cluster: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

/// In-memory aggregate of one kubeconfig: identifier-keyed entry maps plus
/// the current-context pointer. Mutated in place by a merge. `preferences`
/// and unmodeled top-level document keys are carried so a load/merge/save
/// cycle never strips them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub clusters: IndexMap<String, Cluster>,
    pub users: IndexMap<String, AuthInfo>,
    pub contexts: IndexMap<String, Context>,
    pub current_context: Option<String>,
    pub preferences: Option<serde_yaml::Value>,
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Config {
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty() && self.users.is_empty() && self.contexts.is_empty()
    }

    pub fn has_context(&self, name: &str) -> bool {
        self.contexts.contains_key(name)
    }
}
