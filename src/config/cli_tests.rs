//! Tests for CLI argument parsing.

use super::cli::{Cli, Command};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_args() {
        let cli = Cli::parse_from_iter([
            "slackhook",
            "--webhook-token",
            "T000/B000/XXX",
            "--message",
            "hello",
        ]);

        assert_eq!(cli.webhook_token.as_deref(), Some("T000/B000/XXX"));
        assert_eq!(cli.message.as_deref(), Some("hello"));
    }

    #[test]
    fn parse_short_flags() {
        let cli = Cli::parse_from_iter([
            "slackhook",
            "-m",
            "hello",
            "-c",
            "slackhook.toml",
            "-v",
        ]);

        assert_eq!(cli.message.as_deref(), Some("hello"));
        assert_eq!(
            cli.config.as_deref(),
            Some(std::path::Path::new("slackhook.toml"))
        );
        assert!(cli.verbose);
    }

    #[test]
    fn parse_message_options() {
        let cli = Cli::parse_from_iter([
            "slackhook",
            "--http-conn-id",
            "slack-default",
            "--channel",
            "#general",
            "--username",
            "deploy-bot",
            "--icon-emoji",
            ":ghost:",
            "--icon-url",
            "https://example.com/icon.png",
            "--link-names",
            "--attachments",
            r#"[{"fallback": "summary"}]"#,
            "--blocks",
            r#"[{"type": "divider"}]"#,
        ]);

        assert_eq!(cli.http_conn_id.as_deref(), Some("slack-default"));
        assert_eq!(cli.channel.as_deref(), Some("#general"));
        assert_eq!(cli.username.as_deref(), Some("deploy-bot"));
        assert_eq!(cli.icon_emoji.as_deref(), Some(":ghost:"));
        assert_eq!(cli.icon_url.as_deref(), Some("https://example.com/icon.png"));
        assert!(cli.link_names);
        assert_eq!(cli.attachments.as_deref(), Some(r#"[{"fallback": "summary"}]"#));
        assert_eq!(cli.blocks.as_deref(), Some(r#"[{"type": "divider"}]"#));
    }

    #[test]
    fn parse_transport_options() {
        let cli = Cli::parse_from_iter([
            "slackhook",
            "--proxy",
            "https://proxy.example.com:8080",
            "--connections",
            "connections.toml",
            "--dry-run",
        ]);

        assert_eq!(cli.proxy.as_deref(), Some("https://proxy.example.com:8080"));
        assert_eq!(
            cli.connections_file.as_deref(),
            Some(std::path::Path::new("connections.toml"))
        );
        assert!(cli.dry_run);
    }

    #[test]
    fn default_values() {
        let cli = Cli::parse_from_iter(["slackhook"]);

        assert!(cli.webhook_token.is_none());
        assert!(cli.http_conn_id.is_none());
        assert!(cli.message.is_none());
        assert!(cli.proxy.is_none());
        assert!(!cli.link_names);
        assert!(!cli.dry_run);
        assert!(!cli.verbose);
    }
}

mod init_command {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parse_init_with_default_output() {
        let cli = Cli::parse_from_iter(["slackhook", "init"]);

        assert!(cli.is_init());
        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, PathBuf::from("slackhook.toml"));
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn parse_init_with_custom_output() {
        let cli =
            Cli::parse_from_iter(["slackhook", "init", "--output", "/custom/path/config.toml"]);

        assert!(cli.is_init());
        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, PathBuf::from("/custom/path/config.toml"));
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn is_init_false_for_send_mode() {
        let cli = Cli::parse_from_iter(["slackhook", "--webhook-token", "T000/B000/XXX"]);

        assert!(!cli.is_init());
    }
}
