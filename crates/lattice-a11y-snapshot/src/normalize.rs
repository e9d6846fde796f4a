//! Removal of unstable tokens from rendered snapshots.
//!
//! Some toolkits render type names of locally-scoped types with an embedded
//! address, e.g. `App.(unknown context at $10d69dd68).ProceedButton`. The
//! address changes between builds, so it is replaced by `(unknown context)`.

use std::sync::LazyLock;

use regex::Regex;

static UNKNOWN_CONTEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(unknown context at \$[0-9a-f]+\)").expect("unknown-context pattern is valid")
});

const UNKNOWN_CONTEXT: &str = "(unknown context)";

/// Replace every `(unknown context at $<hex>)` token with `(unknown context)`.
///
/// Applied once to the fully joined snapshot text.
pub fn normalize(text: &str) -> String {
    UNKNOWN_CONTEXT_RE
        .replace_all(text, UNKNOWN_CONTEXT)
        .into_owned()
}
