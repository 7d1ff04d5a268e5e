//! Base package detection
//!
//! Scans a Java source tree for `package` declarations and reduces them to
//! the root packages, which drive the NullAway annotated-packages option
//! when `basePackage` is not configured.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use conv_fs::{ConventionPath, io};
use regex::Regex;
use serde::Serialize;

static PACKAGE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*package\s+([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*)\s*;")
        .expect("Invalid package declaration regex")
});

/// A package declaration and the directory it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceDeclaration {
    pub name: String,
    pub directory: PathBuf,
}

/// Detect the root packages declared under `source_root`.
///
/// Directories are walked depth first in file-name order. The first `.java`
/// file directly inside a directory that declares a package records that
/// package, and the walk does not descend further below that directory.
/// Nested declarations are then dropped when a recorded package already
/// covers them, so the result holds root packages only, sorted by name.
///
/// Missing roots and unreadable entries yield nothing rather than failing.
pub fn detect(source_root: &Path) -> Vec<NamespaceDeclaration> {
    if !source_root.is_dir() {
        tracing::debug!(root = %source_root.display(), "Source root is not a directory");
        return Vec::new();
    }

    let mut found = Vec::new();
    walk(source_root, &mut HashSet::new(), &mut found);
    reduce_to_roots(found)
}

/// Root package names under `<project_dir>/src/main/java`.
pub fn detect_base_packages(project_dir: &Path) -> Vec<String> {
    detect(&ConventionPath::JavaSourceRoot.under(project_dir))
        .into_iter()
        .map(|declaration| declaration.name)
        .collect()
}

fn walk(dir: &Path, visited: &mut HashSet<PathBuf>, found: &mut Vec<NamespaceDeclaration>) {
    // Symlinked directories are followed; a directory reached twice is skipped
    let identity = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
    if !visited.insert(identity) {
        tracing::debug!(dir = %dir.display(), "Skipping directory already scanned");
        return;
    }

    let entries = match sorted_entries(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "Skipping unreadable directory");
            return;
        }
    };

    let mut subdirs = Vec::new();
    for (path, is_dir) in entries {
        if is_dir {
            subdirs.push(path);
            continue;
        }
        if path.extension().is_some_and(|ext| ext == "java")
            && let Some(name) = declared_package(&path)
        {
            tracing::debug!(package = %name, file = %path.display(), "Found package declaration");
            found.push(NamespaceDeclaration {
                name,
                directory: dir.to_path_buf(),
            });
            return;
        }
    }

    for subdir in subdirs {
        walk(&subdir, visited, found);
    }
}

/// Entries of `dir` sorted by file name, with whether each is a directory.
///
/// Symlinks count as whatever they point to.
fn sorted_entries(dir: &Path) -> std::io::Result<Vec<(PathBuf, bool)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_dir = path.is_dir();
        entries.push((path, is_dir));
    }
    entries.sort_by(|a, b| a.0.file_name().cmp(&b.0.file_name()));
    Ok(entries)
}

/// The first line of `file` that is a complete package declaration.
///
/// Bytes that are not UTF-8 (Latin-1 comments, for instance) are replaced
/// rather than rejecting the whole file.
fn declared_package(file: &Path) -> Option<String> {
    let bytes = match io::read_bytes(file) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(file = %file.display(), error = %e, "Skipping unreadable source file");
            return None;
        }
    };
    String::from_utf8_lossy(&bytes).lines().find_map(|line| {
        PACKAGE_DECLARATION
            .captures(line)
            .and_then(|captures| captures.get(1))
            .map(|name| name.as_str().to_string())
    })
}

fn reduce_to_roots(mut declarations: Vec<NamespaceDeclaration>) -> Vec<NamespaceDeclaration> {
    declarations.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.directory.cmp(&b.directory)));

    let mut roots: Vec<NamespaceDeclaration> = Vec::new();
    for declaration in declarations {
        if !roots.iter().any(|root| covers(&root.name, &declaration.name)) {
            roots.push(declaration);
        }
    }
    roots
}

/// Whether `name` is `root` or nested below it.
fn covers(root: &str, name: &str) -> bool {
    name.strip_prefix(root)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
}
