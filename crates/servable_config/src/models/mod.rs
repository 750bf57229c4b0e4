pub mod model_config;
pub mod servable;

pub use model_config::{ModelConfig, ModelConfigList};
pub use servable::ServableDir;
