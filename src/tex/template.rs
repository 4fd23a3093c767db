use serde::{Deserialize, Serialize};

/// LaTeX compilation settings handed to the renderer with every TeX text.
///
/// Packages are kept in insertion order without duplicates, each entry
/// being the argument of the package command, options included:
/// `[french]{babel}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TexTemplate {
    pub compiler: String,
    pub package_command: String,
    packages: Vec<String>,
}

impl TexTemplate {
    /// Returns a copy with `extra` packages appended after the current ones.
    #[must_use]
    pub fn extended<S: AsRef<str>>(&self, extra: &[S]) -> Self {
        let mut out = self.clone();
        for package in extra {
            out.add_package(package.as_ref());
        }
        out
    }

    /// Appends a package unless it is already loaded.
    pub fn add_package(&mut self, package: &str) {
        if !self.packages.iter().any(|p| p == package) {
            self.packages.push(package.to_owned());
        }
    }

    #[must_use]
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// The preamble, one package command per package.
    #[must_use]
    pub fn preamble(&self) -> String {
        self.packages
            .iter()
            .map(|p| format!("\\{}{p}", self.package_command))
            .collect()
    }
}

impl Default for TexTemplate {
    fn default() -> Self {
        Self {
            compiler: "lualatex".to_owned(),
            package_command: "usepackage".to_owned(),
            packages: vec![
                "[french]{babel}".to_owned(),
                "{amsmath}".to_owned(),
                "{amssymb}".to_owned(),
            ],
        }
    }
}
