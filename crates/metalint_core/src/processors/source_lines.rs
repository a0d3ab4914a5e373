use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::ProcessorError;

/// Lazily read source files, split into lines and cached per path.
#[derive(Debug, Default)]
pub(crate) struct SourceLines {
    files: HashMap<PathBuf, Arc<[String]>>,
}

impl SourceLines {
    pub(crate) fn get(&mut self, path: &Path) -> Result<Arc<[String]>, ProcessorError> {
        if let Some(lines) = self.files.get(path) {
            return Ok(Arc::clone(lines));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ProcessorError::io(path.display().to_string(), e))?;
        let lines: Arc<[String]> = content.lines().map(str::to_string).collect();
        self.files.insert(path.to_path_buf(), Arc::clone(&lines));
        Ok(lines)
    }

    pub(crate) fn clear(&mut self) {
        self.files.clear();
    }
}
