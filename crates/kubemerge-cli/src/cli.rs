use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "kubemerge", version, about = "Merge kubeconfig files without clobbering existing entries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge a kubeconfig file into the local one
    Add(AddArgs),
    /// List the contexts of the local kubeconfig
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Kubeconfig file to merge in
    #[arg(short, long)]
    pub file: PathBuf,

    /// Context names to import; repeatable, defaults to all
    #[arg(long = "select-context", value_name = "NAME")]
    pub select_context: Vec<String>,

    /// Token prepended to generated context names
    #[arg(long, value_name = "PREFIX")]
    pub context_prefix: Option<String>,

    /// Exact name for the merged context, overriding prefix and template
    #[arg(long, value_name = "NAME")]
    pub context_name: Option<String>,

    /// Comma-separated naming fields: filename, context, user, cluster, namespace
    #[arg(long, value_name = "FIELDS", value_delimiter = ',', default_value = "context")]
    pub context_template: Vec<String>,

    /// Switch the current context to the incoming one after the merge
    #[arg(long)]
    pub set_current: bool,

    /// Local kubeconfig to merge into; defaults to $KUBECONFIG or ~/.kube/config
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the resulting contexts without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Local kubeconfig to read; defaults to $KUBECONFIG or ~/.kube/config
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
