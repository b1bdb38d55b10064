use std::path::Path;

use kubemerge_core::kubeconfig::default_path;
use kubemerge_core::{merge, parse_template, Config, Kubeconfig, MergeOptions};

use crate::cli::AddArgs;

pub fn run(args: &AddArgs) -> anyhow::Result<()> {
    let local_path = args.config.clone().unwrap_or_else(default_path);
    let merged = merge_file(&local_path, &args.file, &options(args))?;

    if args.dry_run {
        crate::list::print_contexts(&merged);
        return Ok(());
    }

    let count = merged.contexts.len();
    Kubeconfig::from(merged).write_to(&local_path)?;
    tracing::info!(kubeconfig = %local_path.display(), "merged {}", args.file.display());
    println!("Merged {} into {} ({count} contexts total)", args.file.display(), local_path.display());
    Ok(())
}

fn options(args: &AddArgs) -> MergeOptions {
    MergeOptions {
        contexts: args.select_context.clone(),
        prefix: args.context_prefix.clone().unwrap_or_default(),
        name_override: args.context_name.clone().unwrap_or_default(),
        template: parse_template(&args.context_template),
        set_current: args.set_current,
    }
}

/// Loads both sides, merges, and hands back the combined configuration. An
/// absent local file starts from an empty configuration; nothing is written
/// here, so a failed merge never reaches disk.
fn merge_file(local_path: &Path, incoming_path: &Path, opts: &MergeOptions) -> anyhow::Result<Config> {
    let mut local = if local_path.exists() {
        Config::from(Kubeconfig::read_from(local_path)?)
    } else {
        Config::default()
    };
    let incoming = Config::from(Kubeconfig::read_from(incoming_path)?);
    let file_name = incoming_path.file_stem().and_then(|s| s.to_str()).unwrap_or("kubeconfig");
    merge(&mut local, &incoming, file_name, opts)?;
    Ok(local)
}
