#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::config::LLMProvider;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_args_default_values() {
        let args = Args::try_parse_from(["learnpath-rs"]).unwrap();

        assert!(args.config.is_none());
        assert!(args.host.is_none());
        assert!(args.port.is_none());
        assert!(!args.verbose);
        assert!(!args.check_connection);
        assert!(args.llm_provider.is_none());
        assert!(args.timeout_seconds.is_none());
    }

    #[test]
    fn test_args_short_options() {
        let args = Args::try_parse_from([
            "learnpath-rs",
            "-c",
            "/etc/learnpath.toml",
            "-p",
            "9000",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("/etc/learnpath.toml")));
        assert_eq!(args.port, Some(9000));
        assert!(args.verbose);
    }

    #[test]
    fn test_args_llm_options() {
        let args = Args::try_parse_from([
            "learnpath-rs",
            "--llm-provider",
            "openai",
            "--llm-api-key",
            "test-key",
            "--llm-api-base-url",
            "https://api.openai.com",
            "--model-efficient",
            "gpt-4o-mini",
            "--model-powerful",
            "gpt-4o",
            "--max-tokens",
            "2048",
            "--temperature",
            "0.7",
            "--timeout-seconds",
            "12",
        ])
        .unwrap();

        assert_eq!(args.llm_provider, Some("openai".to_string()));
        assert_eq!(args.llm_api_key, Some("test-key".to_string()));
        assert_eq!(
            args.llm_api_base_url,
            Some("https://api.openai.com".to_string())
        );
        assert_eq!(args.model_efficient, Some("gpt-4o-mini".to_string()));
        assert_eq!(args.model_powerful, Some("gpt-4o".to_string()));
        assert_eq!(args.max_tokens, Some(2048));
        assert_eq!(args.temperature, Some(0.7));
        assert_eq!(args.timeout_seconds, Some(12));
    }

    #[test]
    fn test_args_invalid_port() {
        let result = Args::try_parse_from(["learnpath-rs", "--port", "not-a-port"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_into_config_overrides() {
        let args = Args::try_parse_from([
            "learnpath-rs",
            "--host",
            "0.0.0.0",
            "--port",
            "8088",
            "--llm-provider",
            "ollama",
            "--model-efficient",
            "llama3",
            "--timeout-seconds",
            "5",
            "--domains-path",
            "/data/domains.json",
            "--knowledge-graph-path",
            "/data/kg.json",
            "--verbose",
        ])
        .unwrap();

        let config = args.into_config().unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8088");
        assert_eq!(config.llm.provider, LLMProvider::Ollama);
        assert_eq!(config.llm.model_efficient, "llama3");
        assert_eq!(config.llm.timeout_seconds, 5);
        assert_eq!(config.data.domains_path, PathBuf::from("/data/domains.json"));
        assert_eq!(
            config.data.knowledge_graph_path,
            PathBuf::from("/data/kg.json")
        );
        assert!(config.verbose);
    }

    #[test]
    fn test_into_config_unknown_provider_keeps_configured() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("learnpath.toml");
        std::fs::write(&config_path, "[llm]\nprovider = \"deepseek\"\n").unwrap();

        let args = Args::try_parse_from([
            "learnpath-rs",
            "--config",
            config_path.to_str().unwrap(),
            "--llm-provider",
            "mistral",
        ])
        .unwrap();

        let config = args.into_config().unwrap();
        assert_eq!(config.llm.provider, LLMProvider::DeepSeek);
    }

    #[test]
    fn test_verbose_from_config_file_raises_log_level() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("learnpath.toml");
        std::fs::write(&config_path, "verbose = true\n").unwrap();

        let args =
            Args::try_parse_from(["learnpath-rs", "--config", config_path.to_str().unwrap()])
                .unwrap();
        assert!(!args.verbose);

        let config = args.into_config().unwrap();
        assert!(config.verbose);
        assert_eq!(config.default_log_level(), "debug");
    }

    #[test]
    fn test_into_config_missing_explicit_file() {
        let args =
            Args::try_parse_from(["learnpath-rs", "--config", "/nonexistent/learnpath.toml"])
                .unwrap();

        assert!(args.into_config().is_err());
    }
}
