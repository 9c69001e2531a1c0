//! Tests for configuration

#[cfg(test)]
mod tests {
    use super::super::config::*;

    #[test]
    fn test_data_config_defaults() {
        let config: DataConfig = toml::from_str("").unwrap();
        assert_eq!(config.matches_path, "Matches.csv");
        assert_eq!(config.model_path, "football_predictor.json");
    }

    #[test]
    fn test_resolver_config_defaults() {
        let config: ResolverConfig = toml::from_str("").unwrap();
        assert_eq!(config.min_score, 80.0);
    }

    #[test]
    fn test_full_config_from_toml() {
        let toml_str = r#"
[data]
matches_path = "/var/lib/footy/Matches.csv"
model_path = "/var/lib/footy/model.json"

[resolver]
min_score = 70.0
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data.matches_path, "/var/lib/footy/Matches.csv");
        assert_eq!(config.data.model_path, "/var/lib/footy/model.json");
        assert_eq!(config.resolver.min_score, 70.0);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let toml_str = r#"
[data]
matches_path = "history.csv"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data.matches_path, "history.csv");
        assert_eq!(config.data.model_path, "football_predictor.json");
        assert_eq!(config.resolver.min_score, 80.0);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/footy-config").unwrap();
        assert_eq!(config.resolver.min_score, 80.0);
    }
}
