use crate::config::Context;

const SEPARATOR: &str = "-";

/// Field selectors a context-naming template may draw from. Template strings
/// are resolved to this enum once, at argument-parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextField {
    Filename,
    Context,
    User,
    Cluster,
    Namespace,
}

impl ContextField {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "filename" => Some(Self::Filename),
            "context" => Some(Self::Context),
            "user" => Some(Self::User),
            "cluster" => Some(Self::Cluster),
            "namespace" => Some(Self::Namespace),
            _ => None,
        }
    }

    fn value<'a>(&self, base: &'a str, ctx: &'a Context, file_name: &'a str) -> &'a str {
        match self {
            Self::Filename => file_name,
            Self::Context => base,
            Self::User => &ctx.user,
            Self::Cluster => &ctx.cluster,
            Self::Namespace => &ctx.namespace,
        }
    }
}

/// Resolves template selector strings, skipping anything unrecognized.
pub fn parse_template(specs: &[String]) -> Vec<ContextField> {
    specs
        .iter()
        .filter_map(|s| {
            let field = ContextField::parse(s);
            if field.is_none() {
                tracing::warn!(selector = %s, "ignoring unknown context-template field");
            }
            field
        })
        .collect()
}

/// Raw template rendering: the selected non-empty field values joined with a
/// hyphen, in template order. An empty template contributes nothing.
pub fn render_template(base: &str, ctx: &Context, file_name: &str, template: &[ContextField]) -> String {
    template
        .iter()
        .map(|field| field.value(base, ctx, file_name))
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Final name for a merged context. An explicit override wins verbatim;
/// otherwise the prefix (if any) and the rendered template fields are joined,
/// falling back to `base` when both are empty.
pub fn context_name(
    base: &str,
    ctx: &Context,
    file_name: &str,
    template: &[ContextField],
    prefix: &str,
    override_name: &str,
) -> String {
    if !override_name.is_empty() {
        return override_name.to_string();
    }

    let rendered = render_template(base, ctx, file_name, template);
    match (prefix.is_empty(), rendered.is_empty()) {
        (true, true) => base.to_string(),
        (true, false) => rendered,
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}{SEPARATOR}{rendered}"),
    }
}
