use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::config::{AuthInfo, Cluster, Config, Context};

/// The kubeconfig v1 document as stored on disk: named entry lists plus the
/// current-context pointer. Converted to the map-based [`Config`] before any
/// merge work and back again for persistence.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Kubeconfig {
    #[serde(rename = "apiVersion", default = "api_version")]
    pub api_version: String,
    #[serde(default = "kind")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<serde_yaml::Value>,
    #[serde(default)]
    pub clusters: Vec<NamedCluster>,
    #[serde(default)]
    pub users: Vec<NamedAuthInfo>,
    #[serde(default)]
    pub contexts: Vec<NamedContext>,
    #[serde(rename = "current-context", default, skip_serializing_if = "Option::is_none")]
    pub current_context: Option<String>,
    #[serde(flatten)]
    pub extra: indexmap::IndexMap<String, serde_yaml::Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NamedCluster {
    pub name: String,
    #[serde(default)]
    pub cluster: Cluster,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NamedAuthInfo {
    pub name: String,
    #[serde(default)]
    pub user: AuthInfo,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NamedContext {
    pub name: String,
    #[serde(default)]
    pub context: Context,
}

fn api_version() -> String {
    "v1".to_string()
}

fn kind() -> String {
    "Config".to_string()
}

impl Default for Kubeconfig {
    fn default() -> Self {
        Self {
            api_version: api_version(),
            kind: kind(),
            preferences: None,
            clusters: Vec::new(),
            users: Vec::new(),
            contexts: Vec::new(),
            current_context: None,
            extra: indexmap::IndexMap::new(),
        }
    }
}

impl Kubeconfig {
    pub fn read_from(path: &Path) -> anyhow::Result<Self> {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("reading kubeconfig {}", path.display()))?;
        serde_yaml::from_str(&contents).with_context(|| format!("parsing kubeconfig {}", path.display()))
    }

    pub fn write_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_yaml::to_string(self)?;
        std::fs::write(path, contents).with_context(|| format!("writing kubeconfig {}", path.display()))
    }
}

/// The local kubeconfig path: first entry of `$KUBECONFIG` when set, else
/// `~/.kube/config`.
pub fn default_path() -> PathBuf {
    if let Some(paths) = std::env::var_os("KUBECONFIG") {
        if let Some(first) = std::env::split_paths(&paths).find(|p| !p.as_os_str().is_empty()) {
            return first;
        }
    }
    dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".kube").join("config")
}

impl From<Kubeconfig> for Config {
    fn from(kc: Kubeconfig) -> Self {
        let mut config = Config {
            current_context: kc.current_context,
            preferences: kc.preferences,
            extra: kc.extra,
            ..Config::default()
        };
        // first occurrence wins on duplicate names, matching kubectl
        for nc in kc.clusters {
            config.clusters.entry(nc.name).or_insert(nc.cluster);
        }
        for nu in kc.users {
            config.users.entry(nu.name).or_insert(nu.user);
        }
        for nx in kc.contexts {
            config.contexts.entry(nx.name).or_insert(nx.context);
        }
        config
    }
}

impl From<Config> for Kubeconfig {
    fn from(config: Config) -> Self {
        Self {
            clusters: config
                .clusters
                .into_iter()
                .map(|(name, cluster)| NamedCluster { name, cluster })
                .collect(),
            users: config.users.into_iter().map(|(name, user)| NamedAuthInfo { name, user }).collect(),
            contexts: config
                .contexts
                .into_iter()
                .map(|(name, context)| NamedContext { name, context })
                .collect(),
            current_context: config.current_context,
            preferences: config.preferences,
            extra: config.extra,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests;
