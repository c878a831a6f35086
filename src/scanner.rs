//! Class name discovery in markup and source files

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{CssfError, Result};

/// Extensions scanned when a directory is given and none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "html", "htm", "js", "jsx", "ts", "tsx", "vue", "svelte", "php", "md",
];

static CLASS_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:^|[\s"'`])(cssf--[^\s"'`<>]+)"#).unwrap());

/// Every scheme-prefixed token in `text`, deduplicated, in first-seen order.
pub fn extract_class_names(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    CLASS_TOKEN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

pub fn scan_file(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(extract_class_names(&text))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext))
        })
}

/// Expand input paths into the files to scan. Files are taken as given;
/// directories contribute files with a matching extension, descending into
/// subdirectories only when `recursive` is set.
pub fn collect_inputs<P: AsRef<Path>>(
    paths: &[P],
    recursive: bool,
    extensions: &[String],
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        let path = path.as_ref();
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if !path.is_dir() {
            return Err(CssfError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let walker = WalkDir::new(path)
            .max_depth(if recursive { usize::MAX } else { 1 })
            .sort_by_file_name();
        for entry in walker {
            let entry = entry.map_err(|e| {
                CssfError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Directory traversal error: {}", e),
                ))
            })?;
            if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                files.push(entry.into_path());
            }
        }
    }

    log::debug!("Collected {} input files", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn extensions() -> Vec<String> {
        DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_extract_from_markup() {
        let html = r#"<div class="card cssf--p10 cssf--c_red--tar-pc-hover">
            <span class='cssf--fs_14px'>hi</span></div>"#;
        assert_eq!(
            extract_class_names(html),
            vec!["cssf--p10", "cssf--c_red--tar-pc-hover", "cssf--fs_14px"]
        );
    }

    #[test]
    fn test_extract_deduplicates_and_ignores_embedded() {
        let text = "cssf--m0 x-cssf--m4 `cssf--m0` notcssf--m2";
        assert_eq!(extract_class_names(text), vec!["cssf--m0"]);
    }

    #[test]
    fn test_collect_inputs_respects_recursion_and_extensions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/app.JSX"), "").unwrap();

        let flat = collect_inputs(&[dir.path()], false, &extensions()).unwrap();
        assert_eq!(flat, vec![dir.path().join("index.html")]);

        let deep = collect_inputs(&[dir.path()], true, &extensions()).unwrap();
        assert_eq!(deep.len(), 2);
    }

    #[test]
    fn test_collect_inputs_missing_path() {
        let result = collect_inputs(&["/definitely/not/here"], false, &extensions());
        assert!(matches!(result, Err(CssfError::FileNotFound { .. })));
    }

    #[test]
    fn test_scan_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, r#"<p class="cssf--d_flex cssf--gap_8px"></p>"#).unwrap();
        assert_eq!(scan_file(&path).unwrap(), vec!["cssf--d_flex", "cssf--gap_8px"]);
    }
}
