use std::io::Write;
use std::path::PathBuf;

use crate::application::{ConfigFileWriter, DirectoryScanner};
use crate::config::Config;
use crate::domain::{ConfigWriter, ServableScanner};
use crate::errors::{ServableConfigError, ServableConfigResult};
use crate::models::{ModelConfig, ModelConfigList};

/// Discover servables and build the config document
pub async fn build_config_list(
    config: &Config,
    scanner: &dyn ServableScanner,
) -> ServableConfigResult<ModelConfigList> {
    let servables = scanner.scan(&config.base_dir, &config.filter).await?;

    let mut list: ModelConfigList = servables
        .iter()
        .map(|servable| ModelConfig::from_servable(servable, &config.platform))
        .collect();

    if config.sort {
        list.sort();
    }
    Ok(list)
}

/// Build the document, print it to `out`, then persist it
///
/// Nothing is printed or written unless discovery succeeds.
pub async fn generate(
    config: &Config,
    scanner: &dyn ServableScanner,
    writer: &dyn ConfigWriter,
    out: &mut dyn Write,
) -> ServableConfigResult<ModelConfigList> {
    let list = build_config_list(config, scanner).await?;
    let rendered = list.to_string();

    writeln!(out, "{}", rendered)
        .and_then(|_| out.flush())
        .map_err(|source| ServableConfigError::IoError {
            path: PathBuf::from("<stdout>"),
            source,
        })?;

    if config.no_write {
        tracing::info!(servables = list.len(), "Skipping write of config file");
    } else {
        writer.write_config(&config.output, &rendered).await?;
        tracing::info!(
            servables = list.len(),
            output = %config.output.display(),
            "Model config written"
        );
    }

    Ok(list)
}

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::debug!(
        base_dir = %config.base_dir.display(),
        filter = %config.filter,
        "Scanning for servables"
    );

    let scanner = DirectoryScanner::new();
    let writer = ConfigFileWriter::new();
    let mut stdout = std::io::stdout().lock();

    generate(&config, &scanner, &writer, &mut stdout).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::Mutex;

    use crate::models::ServableDir;

    struct StaticScanner(Vec<&'static str>);

    #[async_trait]
    impl ServableScanner for StaticScanner {
        async fn scan(
            &self,
            base_dir: &Path,
            filter: &str,
        ) -> ServableConfigResult<Vec<ServableDir>> {
            Ok(self
                .0
                .iter()
                .map(|name| ServableDir::new(base_dir.join(name)))
                .filter(|servable| servable.matches(filter))
                .collect())
        }
    }

    struct MissingScanner;

    #[async_trait]
    impl ServableScanner for MissingScanner {
        async fn scan(
            &self,
            base_dir: &Path,
            _filter: &str,
        ) -> ServableConfigResult<Vec<ServableDir>> {
            Err(ServableConfigError::DirectoryNotFound {
                path: base_dir.display().to_string(),
            })
        }
    }

    #[derive(Default)]
    struct MemoryWriter {
        writes: Mutex<Vec<(PathBuf, String)>>,
    }

    #[async_trait]
    impl ConfigWriter for MemoryWriter {
        async fn write_config(&self, path: &Path, content: &str) -> ServableConfigResult<u64> {
            self.writes
                .lock()
                .unwrap()
                .push((path.to_path_buf(), content.to_string()));
            Ok(content.len() as u64)
        }
    }

    fn test_config() -> Config {
        Config::new(PathBuf::from("/srv/classify/models/servables"))
    }

    #[tokio::test]
    async fn test_generate_prints_and_writes_same_document() {
        let scanner = StaticScanner(vec!["nuclear_test_b", "mnist", "nuclear_test_a"]);
        let writer = MemoryWriter::default();
        let mut out = Vec::new();

        let list = generate(&test_config(), &scanner, &writer, &mut out)
            .await
            .unwrap();

        assert_eq!(list.len(), 2);
        let writes = writer.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, PathBuf::from("brandon_config.pbtxt"));
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", writes[0].1));
    }

    #[tokio::test]
    async fn test_records_keep_listing_order() {
        let scanner = StaticScanner(vec!["nuclear_test_b", "nuclear_test_a"]);
        let list = build_config_list(&test_config(), &scanner).await.unwrap();

        let names: Vec<&str> = list.configs().iter().map(|c| c.name().as_str()).collect();
        assert_eq!(names, ["nuclear_test_b", "nuclear_test_a"]);
        assert_eq!(
            list.configs()[0].base_path(),
            "/srv/classify/models/servables/nuclear_test_b"
        );
        assert!(list.configs().iter().all(|c| c.model_platform() == "tensorflow"));
    }

    #[tokio::test]
    async fn test_sort_option() {
        let scanner = StaticScanner(vec!["nuclear_test_b", "nuclear_test_a"]);
        let mut config = test_config();
        config.sort = true;

        let list = build_config_list(&config, &scanner).await.unwrap();
        let names: Vec<&str> = list.configs().iter().map(|c| c.name().as_str()).collect();
        assert_eq!(names, ["nuclear_test_a", "nuclear_test_b"]);
    }

    #[tokio::test]
    async fn test_no_matches_renders_empty_envelope() {
        let scanner = StaticScanner(vec!["mnist"]);
        let writer = MemoryWriter::default();
        let mut out = Vec::new();

        let list = generate(&test_config(), &scanner, &writer, &mut out)
            .await
            .unwrap();

        assert!(list.is_empty());
        assert_eq!(String::from_utf8(out).unwrap(), "model_config_list: {\n\t\n}\n");
        assert_eq!(writer.writes.lock().unwrap()[0].1, "model_config_list: {\n\t\n}");
    }

    #[tokio::test]
    async fn test_no_write_only_prints() {
        let scanner = StaticScanner(vec!["nuclear_test_a"]);
        let writer = MemoryWriter::default();
        let mut out = Vec::new();
        let mut config = test_config();
        config.no_write = true;

        generate(&config, &scanner, &writer, &mut out).await.unwrap();

        assert!(!out.is_empty());
        assert!(writer.writes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scan_failure_produces_no_output() {
        let writer = MemoryWriter::default();
        let mut out = Vec::new();

        let result = generate(&test_config(), &MissingScanner, &writer, &mut out).await;

        assert!(matches!(
            result.unwrap_err(),
            ServableConfigError::DirectoryNotFound { .. }
        ));
        assert!(out.is_empty());
        assert!(writer.writes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_custom_platform() {
        let scanner = StaticScanner(vec!["nuclear_test_a"]);
        let mut config = test_config();
        config.platform = "tensorflow_lite".to_string();

        let list = build_config_list(&config, &scanner).await.unwrap();
        assert!(list.to_string().contains("model_platform: \"tensorflow_lite\""));
    }
}
