use serde::{Deserialize, Serialize};

/// Suffix every template file in the remote repository carries.
pub const TEMPLATE_SUFFIX: &str = ".gitignore";

/// Kind of an item in the remote directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    /// Symlinks, submodules and anything else the listing API may report.
    #[serde(other)]
    Other,
}

/// One item of the remote repository listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// A listing entry known to be a template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateName(String);

impl TemplateName {
    /// Keeps plain files whose name ends with the template suffix.
    pub fn from_entry(entry: RemoteEntry) -> Option<Self> {
        if entry.kind != EntryKind::File || !entry.name.ends_with(TEMPLATE_SUFFIX) {
            return None;
        }
        Some(Self(entry.name))
    }

    /// Full remote file name, suffix included.
    pub fn file_name(&self) -> &str {
        &self.0
    }

    /// Name shown to the user, suffix stripped.
    pub fn display_name(&self) -> &str {
        self.0.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(&self.0)
    }
}

/// Filters a decoded listing down to template files, in listing order.
pub fn templates(entries: Vec<RemoteEntry>) -> Vec<TemplateName> {
    entries
        .into_iter()
        .filter_map(TemplateName::from_entry)
        .collect()
}
