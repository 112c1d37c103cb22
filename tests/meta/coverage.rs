//! Checks that `tests/unit` mirrors `src` and that every unit test file is compiled

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    /// Entry points and module organisation files carry no tests of their own
    fn is_organisational(path: &Path) -> bool {
        matches!(
            path.file_name().and_then(|name| name.to_str()),
            Some("main.rs" | "lib.rs" | "mod.rs")
        )
    }

    /// Every `.rs` file and directory under `dir`, relative to `dir`
    fn tree(dir: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        walk(dir, dir, &mut found)?;
        Ok(found)
    }

    fn walk(dir: &Path, base: &Path, found: &mut BTreeSet<PathBuf>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_| io::Error::other("entry outside scanned directory"))?
                .to_path_buf();
            if path.is_dir() {
                found.insert(relative);
                walk(&path, base, found)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                found.insert(relative);
            }
        }
        Ok(())
    }

    fn listing(paths: &[&PathBuf], prefix: &str) -> String {
        paths
            .iter()
            .map(|path| format!("  - {prefix}/{}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests every source file has a unit test counterpart
    // Verified by adding a source file without tests
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let (Ok(src), Ok(unit)) = (tree(Path::new(SRC_DIR)), tree(Path::new(UNIT_DIR))) else {
            unreachable!("src and tests/unit must be readable");
        };

        let missing: Vec<_> = src
            .iter()
            .filter(|path| !is_organisational(path) && !unit.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            listing(&missing, SRC_DIR)
        );
    }

    // Tests every unit test file has a source counterpart
    // Verified by adding an orphaned test file
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let (Ok(src), Ok(unit)) = (tree(Path::new(SRC_DIR)), tree(Path::new(UNIT_DIR))) else {
            unreachable!("src and tests/unit must be readable");
        };

        let orphaned: Vec<_> = unit
            .iter()
            .filter(|path| !is_organisational(path) && !src.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source file:\n{}",
            listing(&orphaned, UNIT_DIR)
        );
    }

    // Tests every unit test file is declared by its parent module
    // Verified by removing a declaration from a mod.rs
    #[test]
    fn test_all_unit_tests_are_declared() {
        let Ok(unit) = tree(Path::new(UNIT_DIR)) else {
            unreachable!("tests/unit must be readable");
        };

        let undeclared: Vec<_> = unit
            .iter()
            .filter(|path| !is_organisational(path))
            .filter(|path| {
                let parent = Path::new(UNIT_DIR).join(path.parent().unwrap_or(Path::new("")));
                let declaring = if parent == Path::new(UNIT_DIR) {
                    parent.join("main.rs")
                } else {
                    parent.join("mod.rs")
                };
                let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or("");
                let declarations = fs::read_to_string(declaring).unwrap_or_default();
                !declarations.lines().any(|line| line.trim() == format!("mod {stem};"))
            })
            .collect();

        assert!(
            undeclared.is_empty(),
            "Unit test files never compiled:\n{}",
            listing(&undeclared, UNIT_DIR)
        );
    }

    // Tests every non-organisational test file contains a test
    // Verified by adding a test file with only helpers
    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let Ok(files) = tree(tests_dir) else {
            unreachable!("tests must be readable");
        };

        let empty: Vec<_> = files
            .iter()
            .filter(|path| path.extension().is_some() && !is_organisational(path))
            .filter(|path| {
                fs::read_to_string(tests_dir.join(path))
                    .is_ok_and(|content| !content.contains("#[test]"))
            })
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            listing(&empty, "tests")
        );
    }
}
