use std::sync::{Arc, LazyLock};

use crate::{Lang, LangInner};

#[cfg(feature = "lang-go")]
pub fn go() -> Lang {
    static LANG: LazyLock<Lang> =
        LazyLock::new(|| Arc::new(LangInner::new_static(arborium_go::language().into())));
    Arc::clone(&LANG)
}

/// Language for a file extension, case-insensitive.
pub fn from_ext(ext: &str) -> Option<Lang> {
    match ext.to_ascii_lowercase().as_str() {
        #[cfg(feature = "lang-go")]
        "go" => Some(go()),
        _ => None,
    }
}
