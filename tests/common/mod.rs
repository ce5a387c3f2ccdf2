#![allow(dead_code, clippy::unwrap_used)]

pub mod temp_files {
    use std::path::{Path, PathBuf};

    /// Write `content` as `schema.prisma` inside `dir`.
    pub fn write_schema(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("schema.prisma");
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Every file under `root`, relative to it, sorted.
    pub fn list_files(root: &Path) -> Vec<PathBuf> {
        fn walk(dir: &Path, root: &Path, out: &mut Vec<PathBuf>) {
            for entry in std::fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    walk(&path, root, out);
                } else {
                    out.push(path.strip_prefix(root).unwrap().to_path_buf());
                }
            }
        }
        let mut out = Vec::new();
        if root.exists() {
            walk(root, root, &mut out);
        }
        out.sort();
        out
    }
}

pub mod generator {
    use nestgen::config::GeneratorConfig;
    use nestgen::generator::Generator;
    use std::path::Path;
    use std::time::Duration;

    /// Generator for `schema_path` with a short debounce for tests.
    pub fn for_schema(schema_path: &Path) -> Generator {
        let mut config = GeneratorConfig::for_schema(schema_path);
        config.debounce = Duration::from_millis(20);
        Generator::new(config)
    }
}
