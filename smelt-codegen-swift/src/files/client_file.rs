//! Wrapper turning a (delegate, file-kind) pair into a [`GeneratedFile`].

use std::path::{Path, PathBuf};

use eyre::Result;
use smelt_codegen::{ClientDelegate, ClientFileKind, DelegateContext, DelegateDispatch};
use smelt_core::GeneratedFile;

/// A client-package file produced through delegate dispatch.
pub struct DelegateClientFile<'a> {
    pub ctx: DelegateContext<'a>,
    pub delegate: Box<dyn ClientDelegate>,
    pub file_kind: ClientFileKind,
    pub file_name: String,
    pub target_dir: String,
}

impl GeneratedFile for DelegateClientFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.target_dir).join(&self.file_name)
    }

    fn render(&self) -> Result<String> {
        DelegateDispatch::new(self.ctx).build_file(self.delegate.as_ref(), self.file_kind)
    }
}
