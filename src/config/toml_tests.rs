//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [webhook]
            webhook_token = "T000/B000/XXX"

            [message]
            text = "hello"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(config.webhook.webhook_token.as_deref(), Some("T000/B000/XXX"));
        assert_eq!(config.message.text.as_deref(), Some("hello"));
    }

    #[test]
    fn parse_full_webhook_section() {
        let toml = r#"
            [webhook]
            http_conn_id = "slack-default"
            webhook_token = "B000/XXX"
            proxy = "https://proxy.example.com:8080"
            connections_file = "~/.config/slackhook/connections.toml"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        let webhook = &config.webhook;

        assert_eq!(webhook.http_conn_id.as_deref(), Some("slack-default"));
        assert_eq!(webhook.webhook_token.as_deref(), Some("B000/XXX"));
        assert_eq!(webhook.proxy.as_deref(), Some("https://proxy.example.com:8080"));
        assert_eq!(
            webhook.connections_file.as_deref(),
            Some("~/.config/slackhook/connections.toml")
        );
    }

    #[test]
    fn parse_full_message_section() {
        let toml = r##"
            [message]
            text = "Deployment finished"
            channel = "#general"
            username = "deploy-bot"
            icon_emoji = ":rocket:"
            icon_url = "https://example.com/icon.png"
            link_names = true

            [[message.attachments]]
            fallback = "Required plain-text summary"

            [[message.blocks]]
            type = "divider"
        "##;

        let config = TomlConfig::parse(toml).unwrap();
        let message = &config.message;

        assert_eq!(message.text.as_deref(), Some("Deployment finished"));
        assert_eq!(message.channel.as_deref(), Some("#general"));
        assert_eq!(message.username.as_deref(), Some("deploy-bot"));
        assert_eq!(message.icon_emoji.as_deref(), Some(":rocket:"));
        assert_eq!(message.icon_url.as_deref(), Some("https://example.com/icon.png"));
        assert!(message.link_names);
        assert_eq!(message.attachments.len(), 1);
        assert_eq!(message.blocks[0]["type"], "divider");
    }

    #[test]
    fn parse_connections_section() {
        let toml = r#"
            [connections.slack-default]
            extra = '{"webhook_token": "T000/B000/XXX"}'

            [connections.slack-team-host]
            host = "https://hooks.slack.com/services/T000/"
            password = "B000/XXX"

            [connections.slack-table-extra]
            extra = { webhook_token = "T111/B111/YYY" }
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.connections.len(), 3);
        assert_eq!(
            config.connections["slack-team-host"].host.as_deref(),
            Some("https://hooks.slack.com/services/T000/")
        );
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.webhook.webhook_token.is_none());
        assert!(config.webhook.http_conn_id.is_none());
        assert!(config.message.text.is_none());
        assert!(!config.message.link_names);
        assert!(config.message.attachments.is_empty());
        assert!(config.connections.is_empty());
    }

    #[test]
    fn reject_unknown_fields() {
        let toml = r#"
            [webhook]
            webhook_token = "T000/B000/XXX"
            unknown_field = "value"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn reject_unknown_connection_fields() {
        let toml = r#"
            [connections.slack-default]
            login = "someone"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn reject_unknown_sections() {
        let toml = r#"
            [unknown_section]
            key = "value"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }
}

mod default_template {
    use super::*;

    #[test]
    fn template_is_valid_toml() {
        let template = default_config_template();
        let result = TomlConfig::parse(&template);
        assert!(
            result.is_ok(),
            "Template should be valid TOML: {:?}",
            result.err()
        );
    }

    #[test]
    fn template_contains_all_sections() {
        let template = default_config_template();

        assert!(template.contains("[webhook]"));
        assert!(template.contains("[message]"));
        assert!(template.contains("[connections."));
    }

    #[test]
    fn template_documents_credentials() {
        let template = default_config_template();

        assert!(template.contains("webhook_token"));
        assert!(template.contains("http_conn_id"));
        assert!(template.contains("https://hooks.slack.com/services/"));
    }
}

mod file_loading {
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [webhook]
            webhook_token = "https://hooks.slack.com/services/T000/B000/XXX"
        "#
        )
        .unwrap();

        let config = TomlConfig::load(file.path()).unwrap();
        assert_eq!(
            config.webhook.webhook_token.as_deref(),
            Some("https://hooks.slack.com/services/T000/B000/XXX")
        );
    }

    #[test]
    fn load_nonexistent_file_returns_error() {
        let path = Path::new("nonexistent_config_file_12345.toml");
        let result = TomlConfig::load(path);

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn load_invalid_toml_file_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        let result = TomlConfig::load(file.path());

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}
