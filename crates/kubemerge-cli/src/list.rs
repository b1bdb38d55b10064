use kubemerge_core::kubeconfig::default_path;
use kubemerge_core::{Config, Kubeconfig};

use crate::cli::ListArgs;

pub fn run(args: &ListArgs) -> anyhow::Result<()> {
    let path = args.config.clone().unwrap_or_else(default_path);
    let config = Config::from(Kubeconfig::read_from(&path)?);
    print_contexts(&config);
    Ok(())
}

pub fn print_contexts(config: &Config) {
    for (name, ctx) in &config.contexts {
        let marker = if config.current_context.as_deref() == Some(name.as_str()) { "*" } else { " " };
        let namespace = if ctx.namespace.is_empty() { "-" } else { &ctx.namespace };
        println!("{marker} {name}\tcluster={}\tuser={}\tnamespace={namespace}", ctx.cluster, ctx.user);
    }
}
