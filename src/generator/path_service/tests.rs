#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::config::LLMConfig;
    use crate::error::{ErrorKind, LearnPathError};
    use crate::generator::path_service::{GenerativePathService, parse_path_tree, parse_suggestions};
    use crate::generator::testing::{ScriptedBackend, VALID_TREE_JSON};
    use crate::llm::{GenerativeBackend, ResponseFormat};
    use crate::types::Level;

    fn llm_config() -> LLMConfig {
        LLMConfig {
            api_key: "test".to_string(),
            model_efficient: "fast-model".to_string(),
            model_powerful: "smart-model".to_string(),
            ..LLMConfig::default()
        }
    }

    fn service(backend: &Arc<ScriptedBackend>) -> GenerativePathService {
        let backend: Arc<dyn GenerativeBackend> = backend.clone();
        GenerativePathService::new(Some(backend), llm_config())
    }

    #[test]
    fn test_parse_wrapped_and_bare_trees() {
        let path = parse_path_tree(VALID_TREE_JSON).unwrap();
        assert_eq!(path.tree.title, "Rust");
        assert_eq!(path.chatbot.unwrap().message, "Welcome to Rust!");

        let value: serde_json::Value = serde_json::from_str(VALID_TREE_JSON).unwrap();
        let bare = serde_json::to_string(&value["tree"]).unwrap();
        let path = parse_path_tree(&bare).unwrap();
        assert_eq!(path.tree.children.len(), 3);
        assert!(path.chatbot.is_none());
    }

    #[test]
    fn test_parse_fenced_tree() {
        let fenced = format!("```json\n{}\n```", VALID_TREE_JSON);
        assert!(parse_path_tree(&fenced).is_ok());
    }

    #[test]
    fn test_parse_error_body() {
        let err = parse_path_tree(r#"{"error": "model refused"}"#).unwrap_err();
        assert_eq!(err, LearnPathError::Upstream("model refused".to_string()));
    }

    #[test]
    fn test_parse_malformed() {
        let err = parse_path_tree("here is your path: ...").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);

        let err = parse_path_tree(r#"{"modules": []}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_parse_suggestions_shapes() {
        assert_eq!(
            parse_suggestions(r#"["tokio", "serde"]"#).unwrap(),
            vec!["tokio", "serde"]
        );
        assert_eq!(
            parse_suggestions("null").unwrap(),
            vec!["No suggestions available (Null response)"]
        );
        assert_eq!(parse_suggestions(r#""just one""#).unwrap(), vec!["just one"]);
        assert_eq!(
            parse_suggestions(r#"{"topic": "x"}"#).unwrap(),
            vec![r#"{"topic":"x"}"#]
        );
        assert_eq!(
            parse_suggestions(r#"["a", 2, true]"#).unwrap(),
            vec!["a", "2", "true"]
        );
        assert!(parse_suggestions("not json").is_err());
    }

    #[tokio::test]
    async fn test_generate_full_path_success() {
        let backend = Arc::new(ScriptedBackend::replying(VALID_TREE_JSON));
        let path = service(&backend)
            .generate_full_path("rust", Level::Beginner)
            .await
            .unwrap();

        assert_eq!(path.tree.title, "Rust");
        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "smart-model");
        assert_eq!(calls[0].2, ResponseFormat::Json);
        assert!(calls[0].1.contains("\"rust\""));
    }

    #[tokio::test]
    async fn test_generate_full_path_without_backend() {
        let service = GenerativePathService::new(None, llm_config());
        let err = service
            .generate_full_path("rust", Level::Beginner)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigurationError);
    }

    #[tokio::test]
    async fn test_quota_and_timeout_fall_back() {
        for err in [
            LearnPathError::QuotaExhausted("429 RESOURCE_EXHAUSTED".to_string()),
            LearnPathError::UpstreamTransient("timed out".to_string()),
        ] {
            let backend = Arc::new(ScriptedBackend::failing(err));
            let path = service(&backend)
                .generate_full_path("go", Level::Advanced)
                .await
                .unwrap();
            assert_eq!(path.tree.title, "Go");
            assert!(path.chatbot.unwrap().message.starts_with("[Mock Mode]"));
        }
    }

    #[tokio::test]
    async fn test_invalid_tree_is_malformed() {
        // valid JSON shape, but only 2 levels deep
        let shallow = r#"{"title": "X", "role": "root", "children": [
            {"title": "a", "role": "leaf", "task": "t", "quiz": "q"}
        ]}"#;
        let backend = Arc::new(ScriptedBackend::replying(shallow));
        let err = service(&backend)
            .generate_full_path("x", Level::Beginner)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[tokio::test]
    async fn test_opaque_errors_propagate() {
        let backend = Arc::new(ScriptedBackend::failing(LearnPathError::Upstream(
            "model not found".to_string(),
        )));
        let err = service(&backend)
            .generate_full_path("x", Level::Beginner)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UpstreamError);
    }

    #[tokio::test]
    async fn test_process_request() {
        let service_without = GenerativePathService::new(None, llm_config());
        let path = service_without
            .process_request("python", Level::Beginner, "root")
            .await
            .unwrap();
        assert_eq!(path.tree.title, "Python");

        let backend = Arc::new(ScriptedBackend::replying(VALID_TREE_JSON));
        service(&backend)
            .process_request("rust", Level::Intermediate, "Ownership")
            .await
            .unwrap();
        assert!(backend.calls()[0].1.contains("drilling down into the node \"Ownership\""));
    }

    #[tokio::test]
    async fn test_enrich_path() {
        let backend = Arc::new(ScriptedBackend::replying(
            "```json\n[\"webassembly\", \"svelte\", \"deno\"]\n```",
        ));
        let ids = vec!["html_basics".to_string()];
        let suggestions = service(&backend)
            .enrich_path("web_development", "learn react", &ids)
            .await;
        assert_eq!(suggestions, vec!["webassembly", "svelte", "deno"]);
        assert_eq!(backend.calls()[0].0, "fast-model");

        let backend = Arc::new(ScriptedBackend::failing(LearnPathError::QuotaExhausted(
            "quota".to_string(),
        )));
        let suggestions = service(&backend).enrich_path("d", "g", &ids).await;
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("Error: "));

        let backend = Arc::new(ScriptedBackend::replying("{oops"));
        let suggestions = service(&backend).enrich_path("d", "g", &ids).await;
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("Error: "));

        let without = GenerativePathService::new(None, llm_config());
        assert_eq!(without.enrich_path("d", "g", &ids).await.len(), 1);
    }

    #[tokio::test]
    async fn test_tutor_response() {
        let backend = Arc::new(ScriptedBackend::replying(
            "  A closure captures its environment.\n",
        ));
        let reply = service(&backend)
            .tutor_response("what is a closure?", "js", Level::Beginner, "Functions")
            .await
            .unwrap();
        assert_eq!(reply, "A closure captures its environment.");
        assert_eq!(backend.calls()[0].2, ResponseFormat::Text);

        let backend = Arc::new(ScriptedBackend::failing(LearnPathError::QuotaExhausted(
            "429".to_string(),
        )));
        let reply = service(&backend)
            .tutor_response("what is a closure?", "js", Level::Beginner, "Functions")
            .await
            .unwrap();
        assert!(reply.contains("'what is a closure?'"));
        assert!(reply.contains("'Functions'"));

        let backend = Arc::new(ScriptedBackend::failing(LearnPathError::Upstream(
            "bad request".to_string(),
        )));
        assert!(service(&backend)
            .tutor_response("q", "t", Level::Beginner, "root")
            .await
            .is_err());
    }
}
