#[cfg(test)]
mod tests {
    use std::fs;
    use taskmate::libs::config::{normalize_api_url, Config, ServerConfig, StorageConfig, CONFIG_FILE_NAME, DEFAULT_API_URL};
    use taskmate::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ConfigTestContext {
        fn storage(&self) -> DataStorage {
            DataStorage::with_base(self.temp_dir.path())
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_reads_default(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.storage(), StorageConfig::default());
        assert_eq!(config.storage().primary_file, "tasks.json");
        assert_eq!(config.storage().mirror_file, "tasks.mirror.json");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_then_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                api_url: "http://tasks.local:8080/api".to_string(),
            }),
            storage: Some(StorageConfig {
                primary_file: "main.json".to_string(),
                mirror_file: "backup.json".to_string(),
            }),
        };
        config.save_to(&ctx.storage()).unwrap();

        assert!(ctx.temp_dir.path().join(CONFIG_FILE_NAME).exists());
        assert_eq!(Config::read_from(&ctx.storage()).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_empty_sections_are_omitted(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.storage()).unwrap();
        let raw = fs::read_to_string(ctx.temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(ctx.temp_dir.path().join(CONFIG_FILE_NAME), "{ server: ").unwrap();
        assert!(Config::read_from(&ctx.storage()).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_reads_as_default(ctx: &mut ConfigTestContext) {
        fs::write(ctx.temp_dir.path().join(CONFIG_FILE_NAME), "{ server: ").unwrap();
        assert_eq!(Config::read_or_default(&ctx.storage()), Config::default());
    }

    #[test]
    fn test_server_default_url() {
        assert_eq!(ServerConfig::default().api_url, DEFAULT_API_URL);
        assert_eq!(Config::default().api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_normalize_api_url() {
        assert_eq!(normalize_api_url(" http://tasks.local/api/ "), "http://tasks.local/api");
        assert_eq!(normalize_api_url("http://tasks.local/api//"), "http://tasks.local/api");
        assert_eq!(normalize_api_url("http://tasks.local/api"), "http://tasks.local/api");
    }

    #[test]
    fn test_api_url_uses_server_section() {
        let config = Config {
            server: Some(ServerConfig {
                api_url: "http://tasks.local/api/".to_string(),
            }),
            storage: None,
        };
        assert_eq!(config.api_url(), "http://tasks.local/api");
    }
}
