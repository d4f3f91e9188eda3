//! Menu entries built from the subfolders of a base directory.

use std::path::PathBuf;

/// One selectable folder, numbered in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceEntry {
    /// 1-based position in the printed list.
    pub ordinal: usize,
    pub path: PathBuf,
}

impl ChoiceEntry {
    pub fn new(ordinal: usize, path: PathBuf) -> Self {
        Self { ordinal, path }
    }

    /// Folder name as shown in the menu.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Location of the launch script inside this folder.
    pub fn script_path(&self, script_name: &str) -> PathBuf {
        self.path.join(script_name)
    }
}
