//! Language definitions and extension lookup

use std::path::Path;

use strum::{Display, EnumIter, EnumProperty, IntoEnumIterator};

/// Languages recognized for syntax highlighting.
///
/// `Display` yields the tag written after the opening code fence. Files whose
/// extension maps to no variant are left out of the output entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, EnumProperty)]
pub enum Language {
    // Header files are highlighted as C++
    #[strum(serialize = "cpp", props(extensions = ".cpp .h .hpp"))]
    Cpp,
    #[strum(serialize = "c", props(extensions = ".c"))]
    C,
    #[strum(serialize = "python", props(extensions = ".py"))]
    Python,
    #[strum(serialize = "javascript", props(extensions = ".js"))]
    JavaScript,
    #[strum(serialize = "html", props(extensions = ".html"))]
    Html,
    #[strum(serialize = "css", props(extensions = ".css"))]
    Css,
    #[strum(serialize = "java", props(extensions = ".java"))]
    Java,
    #[strum(serialize = "markdown", props(extensions = ".md"))]
    Markdown,
    #[strum(serialize = "json", props(extensions = ".json"))]
    Json,
    #[strum(serialize = "xml", props(extensions = ".xml"))]
    Xml,
    #[strum(serialize = "sql", props(extensions = ".sql"))]
    Sql,
    #[strum(serialize = "bash", props(extensions = ".sh"))]
    Bash,
    #[strum(serialize = "batch", props(extensions = ".bat"))]
    Batch,
    #[strum(serialize = "powershell", props(extensions = ".ps1"))]
    PowerShell,
    #[strum(serialize = "csharp", props(extensions = ".cs"))]
    CSharp,
    #[strum(serialize = "ruby", props(extensions = ".rb"))]
    Ruby,
    #[strum(serialize = "php", props(extensions = ".php"))]
    Php,
    #[strum(serialize = "perl", props(extensions = ".pl"))]
    Perl,
    #[strum(serialize = "go", props(extensions = ".go"))]
    Go,
    #[strum(serialize = "rust", props(extensions = ".rs"))]
    Rust,
    #[strum(serialize = "idl", props(extensions = ".idl"))]
    Idl,
    #[strum(serialize = "yaml", props(extensions = ".yaml"))]
    Yaml,
}

impl Language {
    /// Extensions (lowercase, leading dot) that map to this language
    pub fn extensions(&self) -> Vec<&'static str> {
        self.get_str("extensions")
            .map(|exts| exts.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Look up a language by extension, e.g. `".py"` or `".PY"`
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_lowercase();
        Self::iter().find(|lang| lang.extensions().contains(&extension.as_str()))
    }

    /// Resolve the language of a file path from its extension
    pub fn from_path(path: &Path) -> Option<Self> {
        // `Path::extension` already treats `.bashrc` as having no extension
        let ext = path.extension()?.to_string_lossy();
        Self::from_extension(&format!(".{}", ext))
    }
}

/// Every supported `(extension, tag)` pair, in table order
pub fn language_table() -> Vec<(&'static str, Language)> {
    Language::iter()
        .flat_map(|lang| lang.extensions().into_iter().map(move |ext| (ext, lang)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_extensions_case_insensitively() {
        assert_eq!(Language::from_extension(".py"), Some(Language::Python));
        assert_eq!(Language::from_extension(".RS"), Some(Language::Rust));
        assert_eq!(Language::from_extension(".Hpp"), Some(Language::Cpp));
        assert_eq!(Language::from_extension(".h"), Some(Language::Cpp));
    }

    #[test]
    fn unknown_extensions_are_unsupported() {
        assert_eq!(Language::from_extension(".pyc"), None);
        assert_eq!(Language::from_extension(".txt"), None);
        assert_eq!(Language::from_extension(""), None);
        assert_eq!(Language::from_extension("py"), None);
    }

    #[test]
    fn display_yields_fence_tag() {
        assert_eq!(Language::Bash.to_string(), "bash");
        assert_eq!(Language::CSharp.to_string(), "csharp");
        assert_eq!(Language::Markdown.to_string(), "markdown");
    }

    #[test]
    fn resolves_paths_by_last_extension() {
        assert_eq!(
            Language::from_path(Path::new("src/Main.JAVA")),
            Some(Language::Java)
        );
        assert_eq!(
            Language::from_path(Path::new("config.local.yaml")),
            Some(Language::Yaml)
        );
        assert_eq!(Language::from_path(Path::new("archive.tar.gz")), None);
        assert_eq!(Language::from_path(Path::new("Makefile")), None);
        assert_eq!(Language::from_path(Path::new(".bashrc")), None);
    }

    #[test]
    fn table_lists_every_extension_once() {
        let table = language_table();
        assert_eq!(table.len(), 24);

        let mut exts: Vec<_> = table.iter().map(|(ext, _)| *ext).collect();
        exts.sort();
        exts.dedup();
        assert_eq!(exts.len(), 24);
        assert!(table.contains(&(".ps1", Language::PowerShell)));
    }
}
