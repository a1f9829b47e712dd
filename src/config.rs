//! JSON runtime configuration for the demo binary.
use crate::pipeline::BinarizeParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub png_out: Option<PathBuf>,
    pub json_out: Option<PathBuf>,
}

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub params: BinarizeParams,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatsStrategy;

    #[test]
    fn minimal_config_uses_defaults() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{ "input_path": "page.png" }"#).unwrap();
        assert_eq!(config.input_path, PathBuf::from("page.png"));
        assert!(config.output.png_out.is_none());
        assert_eq!(config.params.window_size, 15);
        assert_eq!(config.params.strategy, StatsStrategy::Integral);
    }

    #[test]
    fn full_config_round_trips() {
        let config: RuntimeConfig = serde_json::from_str(
            r#"{
                "input_path": "scan.jpg",
                "output": { "png_out": "out/bw.png", "json_out": "out/report.json" },
                "params": { "window_size": 31, "sauvola_factor": 0.3, "strategy": "direct" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.params.window_size, 31);
        assert_eq!(config.params.sauvola_factor, 0.3);
        assert_eq!(config.params.strategy, StatsStrategy::Direct);
        assert_eq!(config.output.png_out, Some(PathBuf::from("out/bw.png")));
    }
}
