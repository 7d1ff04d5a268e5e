//! Default files shipped inside the binary

use std::borrow::Cow;
use std::collections::BTreeMap;

/// Lookup path of the bundled Checkstyle configuration.
pub const CHECKSTYLE_CONFIG: &str = "checkstyle/checkstyle.xml";
/// Lookup path of the bundled (empty) Checkstyle suppressions.
pub const CHECKSTYLE_SUPPRESSIONS: &str = "checkstyle/empty-suppressions.xml";
/// Lookup path of the bundled pre-commit hook.
pub const PRE_COMMIT_HOOK: &str = "git-hooks/pre-commit";

/// Bundled resources addressed by lookup path.
#[derive(Debug, Clone, Default)]
pub struct BundledResources {
    entries: BTreeMap<String, Cow<'static, [u8]>>,
}

impl BundledResources {
    /// The resources compiled into this crate.
    pub fn embedded() -> Self {
        let mut resources = Self::empty();
        resources.insert_static(
            CHECKSTYLE_CONFIG,
            include_bytes!("../resources/checkstyle/checkstyle.xml"),
        );
        resources.insert_static(
            CHECKSTYLE_SUPPRESSIONS,
            include_bytes!("../resources/checkstyle/empty-suppressions.xml"),
        );
        resources.insert_static(
            PRE_COMMIT_HOOK,
            include_bytes!("../resources/git-hooks/pre-commit"),
        );
        resources
    }

    /// No resources at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resources built from owned `(path, content)` pairs.
    pub fn from_entries<I, P, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<Vec<u8>>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(path, content)| (path.into(), Cow::Owned(content.into())))
                .collect(),
        }
    }

    fn insert_static(&mut self, path: &str, content: &'static [u8]) {
        self.entries.insert(path.to_string(), Cow::Borrowed(content));
    }

    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.entries.get(path).map(|content| content.as_ref())
    }
}
