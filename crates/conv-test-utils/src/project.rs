//! [`TestProject`] builder for Java project trees.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory with helpers for laying out sources,
/// settings and override files.
///
/// # Example
///
/// ```rust,no_run
/// use conv_test_utils::project::TestProject;
///
/// let project = TestProject::new();
/// project.java_source("com/example/app/Sample.java", "com.example.app");
/// project.settings("[project]\ngroup = \"io.github.acme\"\n");
/// project.assert_file_exists("src/main/java/com/example/app/Sample.java");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
    root: PathBuf,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty project in a fresh temporary directory.
    pub fn new() -> Self {
        Self::named("app")
    }

    /// Create an empty project whose root directory is called `name`.
    pub fn named(name: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join(name);
        fs::create_dir_all(&root).unwrap();
        Self { temp_dir, root }
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scratch directory next to the project root (outside it).
    pub fn scratch(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `path` relative to the root, creating parents.
    pub fn write(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Write a Java source under `src/main/java` declaring `package`.
    pub fn java_source(&self, path: &str, package: &str) -> PathBuf {
        let class_name = Path::new(path)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Sample".to_string());
        self.write(
            &format!("src/main/java/{path}"),
            &format!("package {package};\n\npublic class {class_name} {{}}\n"),
        )
    }

    /// Write a Java source under `src/main/java` with no package declaration.
    pub fn java_source_without_package(&self, path: &str) -> PathBuf {
        self.write(
            &format!("src/main/java/{path}"),
            "public class NoPackage {}\n",
        )
    }

    /// Write the project settings file (`conventions.toml`).
    pub fn settings(&self, toml: &str) -> PathBuf {
        self.write("conventions.toml", toml)
    }

    /// Read a file relative to the root.
    pub fn read(&self, path: &str) -> String {
        let full_path = self.root.join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root.join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root.join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
