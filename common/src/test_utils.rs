use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Workspace root: the parent of this crate's manifest directory.
fn workspace_root() -> &'static Path {
    static ROOT: OnceLock<PathBuf> = OnceLock::new();
    ROOT.get_or_init(|| {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .expect("common crate must live inside the workspace")
            .to_path_buf()
    })
}

/// Returns `<workspace>/test_output/<name>`, creating the directory on first use.
pub fn test_output_path(name: &str) -> PathBuf {
    let dir = workspace_root().join("test_output");
    std::fs::create_dir_all(&dir).expect("Failed to create test_output directory");
    dir.join(name)
}

/// Writes `contents` to a fresh file in the test output directory and returns its path.
pub fn write_test_file(name: &str, contents: &str) -> PathBuf {
    let path = test_output_path(name);
    std::fs::write(&path, contents)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
    path
}
