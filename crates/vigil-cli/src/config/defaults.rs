use std::path::PathBuf;

pub fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub fn default_watch_dir() -> PathBuf {
    PathBuf::from("src")
}

pub fn default_ignore() -> Vec<String> {
    vec!["node_modules".to_string(), "*.log".to_string()]
}

pub fn default_debounce_ms() -> u64 {
    100
}
