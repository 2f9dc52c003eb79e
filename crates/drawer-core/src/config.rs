/// Configuration for the listing engine.
///
/// Every operation takes a `&Config`; there is no module-level state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Include names starting with `.` in scan results.
    pub show_hidden: bool,
    /// Separator glyph appended to directory names by the formatter and
    /// recognized as the trailing directory marker by `create`. Path
    /// joining itself always goes through `std::path`.
    pub path_separator: char,
    /// Mode bits for regular files made by `create`.
    pub file_mode: u32,
    /// Mode bits for directories made by `create`.
    pub dir_mode: u32,
}

impl Config {
    /// Create a config builder with the stock defaults: hidden entries
    /// off, `/` separator, files 0644, directories 0775.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder {
            show_hidden: false,
            path_separator: '/',
            file_mode: 0o644,
            dir_mode: 0o775,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    show_hidden: bool,
    path_separator: char,
    file_mode: u32,
    dir_mode: u32,
}

impl ConfigBuilder {
    pub fn show_hidden(mut self, yes: bool) -> Self {
        self.show_hidden = yes;
        self
    }

    pub fn path_separator(mut self, sep: char) -> Self {
        self.path_separator = sep;
        self
    }

    pub fn file_mode(mut self, mode: u32) -> Self {
        self.file_mode = mode & 0o7777;
        self
    }

    pub fn dir_mode(mut self, mode: u32) -> Self {
        self.dir_mode = mode & 0o7777;
        self
    }

    pub fn build(self) -> Config {
        Config {
            show_hidden: self.show_hidden,
            path_separator: self.path_separator,
            file_mode: self.file_mode,
            dir_mode: self.dir_mode,
        }
    }
}
