//! highlight.js language detection.

/// Language for a supported extension (lowercased, without the dot).
///
/// `None` means the raw code view does not handle the extension.
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    let language = match ext.to_ascii_lowercase().as_str() {
        "js" | "mjs" | "cjs" | "jsx" => "javascript",
        "ts" | "tsx" => "typescript",
        "html" | "htm" => "html",
        "css" => "css",
        "scss" => "scss",
        "less" => "less",
        "json" => "json",
        "xml" => "xml",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "py" | "pyw" => "python",
        "rb" => "ruby",
        "erb" => "erb",
        "go" => "go",
        "rs" => "rust",
        "java" => "java",
        "c" | "h" => "c",
        "cpp" | "hpp" | "cc" | "cxx" => "cpp",
        "sh" | "bash" => "bash",
        "zsh" => "zsh",
        "fish" => "shell",
        "sql" => "sql",
        "php" => "php",
        "txt" | "text" | "log" => "plaintext",
        _ => return None,
    };
    Some(language)
}

/// Language for well-known extensionless file names.
pub fn language_for_filename(file_name: &str) -> Option<&'static str> {
    let language = match file_name {
        "Dockerfile" | "Containerfile" => "dockerfile",
        "Makefile" | "GNUmakefile" | "makefile" => "makefile",
        "Gemfile" | "Rakefile" | "Vagrantfile" => "ruby",
        "Jenkinsfile" => "groovy",
        ".bashrc" | ".bash_profile" | ".profile" => "bash",
        ".zshrc" => "zsh",
        ".gitignore" | ".dockerignore" | ".editorconfig" | "LICENSE" | "CODEOWNERS" => "plaintext",
        _ => return None,
    };
    Some(language)
}

/// Extension first, then file name.
pub fn detect_language(file_name: &str) -> Option<&'static str> {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(language_for_extension)
        .or_else(|| language_for_filename(file_name))
}
