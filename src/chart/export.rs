use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;

/// Characters that are unsafe in file names on at least one platform.
const HOSTILE: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Title → file-name stem: lowercased, spaces to `_`, unsafe characters removed.
pub fn sanitize_title(title: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .filter(|c| !HOSTILE.contains(c) && !c.is_control())
        .map(|c| if c == ' ' { '_' } else { c })
        .flat_map(char::to_lowercase)
        .collect();

    if stem.is_empty() { "chart".to_string() } else { stem }
}

/// `{sanitized title}_{YYYYmmdd_HHMMSS}.svg`
pub fn export_file_name(title: &str, at: NaiveDateTime) -> String {
    format!("{}_{}.svg", sanitize_title(title), at.format("%Y%m%d_%H%M%S"))
}

/// Where the headless exporter writes: an explicit file, a file inside a
/// directory, or the generated name in the working directory.
pub fn resolve_output(output: Option<&Path>, title: &str, at: NaiveDateTime) -> PathBuf {
    let name = export_file_name(title, at);
    match output {
        Some(path) if path.is_dir() => path.join(name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(name),
    }
}

/// Write a rendered SVG document in one go.
pub fn write_svg(path: &Path, svg: &str) -> Result<()> {
    std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Exported chart to {} ({} bytes)", path.display(), svg.len());
    Ok(())
}
