use derive_getters::Getters;
use std::fmt;

use crate::models::ServableDir;
use crate::utils::text_format::escape_string;

/// One `config` entry of a `model_config_list`
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ModelConfig {
    name: String,
    base_path: String,
    model_platform: String,
}

impl ModelConfig {
    pub fn new(
        name: impl Into<String>,
        base_path: impl Into<String>,
        model_platform: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_path: base_path.into(),
            model_platform: model_platform.into(),
        }
    }

    /// Build the entry for a discovered servable
    pub fn from_servable(servable: &ServableDir, model_platform: &str) -> Self {
        Self::new(
            servable.name().clone(),
            servable.path().to_string_lossy(),
            model_platform,
        )
    }
}

impl fmt::Display for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "config: {{\n\t\tname: \"{}\",\n\t\tbase_path: \"{}\",\n\t\tmodel_platform: \"{}\"\n\t}}",
            escape_string(&self.name),
            escape_string(&self.base_path),
            escape_string(&self.model_platform),
        )
    }
}

/// The whole config document: an ordered list of entries in a
/// `model_config_list` envelope
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelConfigList {
    configs: Vec<ModelConfig>,
}

impl ModelConfigList {
    pub fn new(configs: Vec<ModelConfig>) -> Self {
        Self { configs }
    }

    pub fn configs(&self) -> &[ModelConfig] {
        &self.configs
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Order entries by name, then base path
    pub fn sort(&mut self) {
        self.configs
            .sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.base_path.cmp(&b.base_path)));
    }
}

impl FromIterator<ModelConfig> for ModelConfigList {
    fn from_iter<I: IntoIterator<Item = ModelConfig>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for ModelConfigList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("model_config_list: {\n\t")?;
        for (i, config) in self.configs.iter().enumerate() {
            if i > 0 {
                f.write_str(",\n\t")?;
            }
            write!(f, "{}", config)?;
        }
        f.write_str("\n}")
    }
}
