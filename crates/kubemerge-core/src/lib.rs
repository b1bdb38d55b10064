pub mod config;
pub mod error;
pub mod kubeconfig;
pub mod merge;
pub mod naming;
pub mod suffix;

pub use config::{AuthInfo, Cluster, Config, Context};
pub use error::MergeError;
pub use kubeconfig::Kubeconfig;
pub use merge::{merge, select_contexts, MergeOptions};
pub use naming::{context_name, parse_template, ContextField};
