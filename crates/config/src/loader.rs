use std::path::Path;

use anyhow::Context;

use crate::Config;

pub(crate) fn load(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration from {}", path.display()))?;

    toml::from_str(&contents).with_context(|| format!("failed to parse configuration in {}", path.display()))
}
