//! Directory listing icons and sizes.

/// CSS icon class for a listing entry.
pub fn icon_class(file_name: &str, is_dir: bool) -> &'static str {
    if is_dir {
        return "folder";
    }

    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "md" | "markdown" => "file-md",
        "js" | "ts" | "jsx" | "tsx" | "py" | "rb" | "java" | "c" | "cpp" | "h" | "go" | "rs" => {
            "file-code"
        }
        "html" | "htm" | "css" | "scss" | "less" => "file-web",
        "json" | "xml" | "yaml" | "yml" | "toml" => "file-data",
        "png" | "jpg" | "jpeg" | "gif" | "svg" | "webp" => "file-image",
        "pdf" | "doc" | "docx" => "file-doc",
        "txt" => "file-text",
        _ => "file",
    }
}

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human-readable size with one decimal place (`0 B`, `1.5 KB`).
pub fn format_file_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 10.0).round() / 10.0;
    format!("{} {}", rounded, UNITS[unit])
}
