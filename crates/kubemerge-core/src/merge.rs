use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{Config, Context};
use crate::error::{MergeError, ReferenceKind};
use crate::naming::{context_name, ContextField};
use crate::suffix::{allocate, content_digest};

#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Incoming context identifiers to merge; empty selects all of them.
    pub contexts: Vec<String>,
    /// Optional token prepended to every generated context name.
    pub prefix: String,
    /// Explicit final context name; wins over prefix and template.
    pub name_override: String,
    /// Field template driving generated context names.
    pub template: Vec<ContextField>,
    /// Repoint the current-context at the merged incoming one. Off by
    /// default: the existing pointer stays untouched.
    pub set_current: bool,
}

/// Working set of a merge: all incoming contexts, or exactly the named ones.
/// A requested name missing from `incoming` fails the whole selection.
pub fn select_contexts(incoming: &Config, names: &[String]) -> Result<IndexMap<String, Context>, MergeError> {
    if names.is_empty() {
        return Ok(incoming.contexts.clone());
    }

    let mut selected = IndexMap::new();
    for name in names {
        match incoming.contexts.get(name) {
            Some(ctx) => {
                selected.insert(name.clone(), ctx.clone());
            }
            None => return Err(MergeError::ContextNotFound(name.clone())),
        }
    }
    Ok(selected)
}

/// A name held by a byte-identical entry counts as free, so re-merging the
/// same source reuses entries instead of stacking suffixed duplicates.
fn allocate_entry<T>(proposed: &str, entry: &T, held: &IndexMap<String, T>) -> Result<String, MergeError>
where
    T: Serialize + PartialEq,
{
    let digest = content_digest(entry)?;
    allocate(proposed, &digest, |name| held.get(name).is_some_and(|e| e != entry))
}

/// Merges the selected contexts of `incoming` into `existing`, pulling in the
/// cluster and user entries they reference and renaming on collision. On
/// error `existing` may be partially extended; callers must not persist it.
pub fn merge(existing: &mut Config, incoming: &Config, file_name: &str, opts: &MergeOptions) -> Result<(), MergeError> {
    let selected = select_contexts(incoming, &opts.contexts)?;

    let mut merged_names: IndexMap<String, String> = IndexMap::new();
    for (key, ctx) in &selected {
        let cluster = incoming.clusters.get(&ctx.cluster).ok_or_else(|| MergeError::BrokenReference {
            context: key.clone(),
            reference: ctx.cluster.clone(),
            kind: ReferenceKind::Cluster,
        })?;
        let user = incoming.users.get(&ctx.user).ok_or_else(|| MergeError::BrokenReference {
            context: key.clone(),
            reference: ctx.user.clone(),
            kind: ReferenceKind::User,
        })?;

        let cluster_name = allocate_entry(&ctx.cluster, cluster, &existing.clusters)?;
        let user_name = allocate_entry(&ctx.user, user, &existing.users)?;

        // The template sees the pre-allocation identifiers: the name reflects
        // the logical merge source, not the disambiguated storage keys.
        let proposed = context_name(key, ctx, file_name, &opts.template, &opts.prefix, &opts.name_override);

        let merged = Context {
            cluster: cluster_name.clone(),
            user: user_name.clone(),
            namespace: ctx.namespace.clone(),
            extra: ctx.extra.clone(),
        };
        let final_name = allocate_entry(&proposed, &merged, &existing.contexts)?;

        existing.clusters.insert(cluster_name, cluster.clone());
        existing.users.insert(user_name, user.clone());
        existing.contexts.insert(final_name.clone(), merged);
        merged_names.insert(key.clone(), final_name);
    }

    if opts.set_current {
        if let Some(final_name) = incoming.current_context.as_ref().and_then(|cur| merged_names.get(cur)) {
            existing.current_context = Some(final_name.clone());
        }
    }

    // Policy: never hand back a dangling current-context pointer. Only runs
    // when something was merged, so an empty incoming config stays a no-op.
    if !merged_names.is_empty() {
        if let Some(cur) = existing.current_context.clone() {
            if !existing.has_context(&cur) {
                tracing::warn!(context = %cur, "current-context points at a missing context, clearing it");
                existing.current_context = None;
            }
        }
    }

    Ok(())
}
