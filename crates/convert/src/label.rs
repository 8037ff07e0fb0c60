use itertools::Itertools;

/// Name used for frames which have no name.
pub const ANONYMOUS: &str = "...";

/// Map the source text of a frame argument to the name of its binding.
/// Only plain identifiers are bindings: method calls, field accesses,
/// and other expressions have no name.
pub fn binding_name(source: &str) -> Option<&str> {
    let source = source.trim();
    let ident = source.strip_prefix("r#").unwrap_or(source);

    let mut chars = ident.chars();
    let leading = match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => c,
        _ => return None,
    };
    if !chars.all(|c| c == '_' || c.is_alphanumeric()) {
        return None;
    }
    // `_` is a pattern, not a binding.
    if leading == '_' && ident.len() == 1 {
        return None;
    }
    Some(ident)
}

/// Label of a transform materializing frames having the given names.
pub(crate) fn to_dataframe<'n>(names: impl IntoIterator<Item = Option<&'n str>>) -> String {
    format!(
        "ToDataframe({})",
        names
            .into_iter()
            .map(|name| name.unwrap_or(ANONYMOUS))
            .join(", ")
    )
}
