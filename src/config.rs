use std::path::PathBuf;

/// Server settings. The binary always runs with [`Config::default`].
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// JSON file holding the todo collection.
    pub data_file: PathBuf,
    /// Directory served at `/` (page, stylesheet, client script).
    pub public_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            data_file: PathBuf::from("todos.json"),
            public_dir: PathBuf::from("public"),
        }
    }
}
