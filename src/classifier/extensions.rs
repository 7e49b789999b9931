use std::collections::HashMap;
use std::path::Path;
use tracing::trace;

use super::Classifier;

/// Bytes inspected when deciding whether content is binary.
const BINARY_SNIFF_LEN: usize = 8000;

const FILENAMES: &[(&str, &str)] = &[
    ("BUILD", "Starlark"),
    ("BUILD.bazel", "Starlark"),
    ("CMakeLists.txt", "CMake"),
    ("Cargo.lock", "TOML"),
    ("Containerfile", "Dockerfile"),
    ("Dockerfile", "Dockerfile"),
    ("GNUmakefile", "Makefile"),
    ("Gemfile", "Ruby"),
    ("Jenkinsfile", "Groovy"),
    ("Makefile", "Makefile"),
    ("Pipfile", "TOML"),
    ("Rakefile", "Ruby"),
    ("Vagrantfile", "Ruby"),
    ("WORKSPACE", "Starlark"),
    ("go.mod", "Go Module"),
    ("go.sum", "Go Checksums"),
    ("makefile", "Makefile"),
];

const EXTENSIONS: &[(&str, &str)] = &[
    ("asm", "Assembly"),
    ("bash", "Shell"),
    ("bat", "Batchfile"),
    ("c", "C"),
    ("cc", "C++"),
    ("cjs", "JavaScript"),
    ("clj", "Clojure"),
    ("cljs", "Clojure"),
    ("cmake", "CMake"),
    ("cmd", "Batchfile"),
    ("coffee", "CoffeeScript"),
    ("cpp", "C++"),
    ("cs", "C#"),
    ("css", "CSS"),
    ("csv", "CSV"),
    ("cxx", "C++"),
    ("dart", "Dart"),
    ("el", "Emacs Lisp"),
    ("elm", "Elm"),
    ("erl", "Erlang"),
    ("ex", "Elixir"),
    ("exs", "Elixir"),
    ("f90", "Fortran"),
    ("fs", "F#"),
    ("go", "Go"),
    ("gradle", "Gradle"),
    ("graphql", "GraphQL"),
    ("groovy", "Groovy"),
    ("h", "C"),
    ("hcl", "HCL"),
    ("hh", "C++"),
    ("hpp", "C++"),
    ("hrl", "Erlang"),
    ("hs", "Haskell"),
    ("htm", "HTML"),
    ("html", "HTML"),
    ("ini", "INI"),
    ("ipynb", "Jupyter Notebook"),
    ("java", "Java"),
    ("jl", "Julia"),
    ("js", "JavaScript"),
    ("json", "JSON"),
    ("jsx", "JavaScript"),
    ("kt", "Kotlin"),
    ("kts", "Kotlin"),
    ("less", "Less"),
    ("lua", "Lua"),
    ("m", "Objective-C"),
    ("markdown", "Markdown"),
    ("md", "Markdown"),
    ("mjs", "JavaScript"),
    ("ml", "OCaml"),
    ("mli", "OCaml"),
    ("mm", "Objective-C++"),
    ("nim", "Nim"),
    ("nix", "Nix"),
    ("php", "PHP"),
    ("pl", "Perl"),
    ("pm", "Perl"),
    ("proto", "Protocol Buffer"),
    ("ps1", "PowerShell"),
    ("py", "Python"),
    ("pyi", "Python"),
    ("r", "R"),
    ("rb", "Ruby"),
    ("rs", "Rust"),
    ("rst", "reStructuredText"),
    ("sass", "Sass"),
    ("scala", "Scala"),
    ("scss", "SCSS"),
    ("sh", "Shell"),
    ("sol", "Solidity"),
    ("sql", "SQL"),
    ("svelte", "Svelte"),
    ("svg", "SVG"),
    ("swift", "Swift"),
    ("tf", "HCL"),
    ("toml", "TOML"),
    ("ts", "TypeScript"),
    ("tsx", "TSX"),
    ("txt", "Text"),
    ("vb", "Visual Basic .NET"),
    ("vim", "Vim Script"),
    ("vue", "Vue"),
    ("xml", "XML"),
    ("yaml", "YAML"),
    ("yml", "YAML"),
    ("zig", "Zig"),
    ("zsh", "Shell"),
];

const INTERPRETERS: &[(&str, &str)] = &[
    ("ash", "Shell"),
    ("bash", "Shell"),
    ("dash", "Shell"),
    ("deno", "TypeScript"),
    ("lua", "Lua"),
    ("node", "JavaScript"),
    ("perl", "Perl"),
    ("php", "PHP"),
    ("pwsh", "PowerShell"),
    ("python", "Python"),
    ("rscript", "R"),
    ("ruby", "Ruby"),
    ("sh", "Shell"),
    ("zsh", "Shell"),
];

/// Default classifier: file name, then shebang, then extension.
///
/// User overrides (extension without the leading dot, mapped to a label)
/// take precedence over the built-in extension table.
#[derive(Debug, Clone, Default)]
pub struct ExtensionClassifier {
    overrides: HashMap<String, String>,
}

impl ExtensionClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        let overrides = overrides
            .into_iter()
            .map(|(ext, label)| (ext.trim_start_matches('.').to_lowercase(), label))
            .collect();
        Self { overrides }
    }

    fn by_filename(path: &Path) -> Option<&'static str> {
        let name = path.file_name()?.to_str()?;
        lookup(FILENAMES, name)
    }

    fn by_shebang(content: &[u8]) -> Option<&'static str> {
        let interpreter = shebang_interpreter(content)?;
        lookup(INTERPRETERS, &interpreter)
    }

    fn by_extension(&self, path: &Path) -> Option<String> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        if let Some(label) = self.overrides.get(&ext) {
            return Some(label.clone());
        }
        lookup(EXTENSIONS, &ext).map(str::to_string)
    }
}

impl Classifier for ExtensionClassifier {
    fn classify(&self, path: &Path, content: &[u8]) -> Option<String> {
        if is_binary(content) {
            trace!(path = %path.display(), "binary content");
            return None;
        }

        Self::by_filename(path)
            .or_else(|| Self::by_shebang(content))
            .map(str::to_string)
            .or_else(|| self.by_extension(path))
    }
}

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .binary_search_by(|(k, _)| (*k).cmp(key))
        .ok()
        .map(|idx| table[idx].1)
}

fn is_binary(content: &[u8]) -> bool {
    let head = &content[..content.len().min(BINARY_SNIFF_LEN)];
    head.contains(&0)
}

/// Interpreter named on a `#!` line, lower-cased with any version suffix
/// removed (`python3.11` becomes `python`).
fn shebang_interpreter(content: &[u8]) -> Option<String> {
    let rest = content.strip_prefix(b"#!")?;
    let line_end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
    let line = std::str::from_utf8(&rest[..line_end]).ok()?;

    let mut tokens = line.split_whitespace();
    let mut program = tokens.next()?.rsplit('/').next()?;
    if program == "env" {
        program = tokens.find(|t| !t.starts_with('-') && !t.contains('='))?;
    }

    let name = program
        .trim_end_matches(|c: char| c.is_ascii_digit() || c == '.')
        .to_lowercase();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
