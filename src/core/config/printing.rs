use crate::core::config::data::{Config, ConfigKey};

impl Config {
    /// One `key: value` line per setting, `(unset)` for missing ones.
    pub fn summary_lines(&self) -> Vec<String> {
        ConfigKey::ALL
            .iter()
            .map(|&key| match self.get(key) {
                Some(value) => format!("  {key}: {value}"),
                None => format!("  {key}: (unset)"),
            })
            .collect()
    }

    pub fn print_all(&self) {
        println!("Current configuration:");
        for line in self.summary_lines() {
            println!("{line}");
        }
    }
}
