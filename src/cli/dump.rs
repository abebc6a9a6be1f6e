//! Dump subcommand for deployable-config
//!
//! Renders the merged configuration tree.

use clap::Args;
use serde_json::Value;

/// Arguments for the dump subcommand
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Output format: json (default) or yaml
    #[arg(long, default_value = "json", value_name = "FORMAT")]
    pub format: DumpFormat,

    /// Only dump the subtree at this dotted key
    #[arg(long, value_name = "KEY")]
    pub key: Option<String>,
}

/// Output format for dumped configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DumpFormat {
    #[default]
    Json,
    Yaml,
}

impl std::str::FromStr for DumpFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(DumpFormat::Json),
            "yaml" | "yml" => Ok(DumpFormat::Yaml),
            _ => Err(format!("Invalid format '{}'. Valid options: json, yaml", s)),
        }
    }
}

/// Render a value in the requested format.
pub fn render(value: &Value, format: DumpFormat) -> anyhow::Result<String> {
    let rendered = match format {
        DumpFormat::Json => serde_json::to_string_pretty(value)?,
        DumpFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<DumpFormat>().unwrap(), DumpFormat::Json);
        assert_eq!("yml".parse::<DumpFormat>().unwrap(), DumpFormat::Yaml);
        assert!("toml".parse::<DumpFormat>().is_err());
    }

    #[test]
    fn test_render_yaml() {
        let value = json!({"server": {"port": 8080}});
        let out = render(&value, DumpFormat::Yaml).unwrap();
        assert!(out.contains("server:"));
        assert!(out.contains("port: 8080"));
    }

    #[test]
    fn test_render_json() {
        let value = json!({"a": [1, 2]});
        let out = render(&value, DumpFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, value);
    }
}
