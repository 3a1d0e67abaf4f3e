use std::fs;
use std::path::Path;

use anyhow::Context;
use reel_core::Settings;
use reel_logging::reel_info;

/// Loads and validates settings. Without a path the built-in defaults apply;
/// a path that cannot be read, parsed or validated is an error.
pub(crate) fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    let settings: Settings = ron::from_str(&content)
        .with_context(|| format!("failed to parse settings in {}", path.display()))?;
    settings
        .validate()
        .with_context(|| format!("invalid settings in {}", path.display()))?;

    reel_info!("Loaded settings from {:?}", path);
    Ok(settings)
}

pub(crate) fn settings_to_ron(settings: &Settings) -> anyhow::Result<String> {
    let pretty = ron::ser::PrettyConfig::new();
    ron::ser::to_string_pretty(settings, pretty).context("failed to serialize settings")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::DetectionMode;
    use tempfile::TempDir;

    #[test]
    fn missing_path_uses_defaults() {
        assert_eq!(load_settings(None).unwrap(), Settings::default());
    }

    #[test]
    fn loads_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("reel.ron");
        fs::write(
            &path,
            "(extraction: (detection_mode: Conservative), simulation: (upload_tick_ms: 250))",
        )
        .unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.extraction.detection_mode, DetectionMode::Conservative);
        assert_eq!(settings.simulation.upload_tick_ms, 250);
        assert_eq!(settings.simulation.processing_tick_ms, 2000);
    }

    #[test]
    fn invalid_or_unreadable_files_fail_fast() {
        let temp = TempDir::new().unwrap();
        assert!(load_settings(Some(&temp.path().join("absent.ron"))).is_err());

        let path = temp.path().join("bad.ron");
        fs::write(&path, "(simulation: (processing_step_max: -5.0))").unwrap();
        let err = load_settings(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("step max"));
    }

    #[test]
    fn serialized_settings_load_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("roundtrip.ron");
        let mut settings = Settings::default();
        settings.simulation.seed = Some(99);
        fs::write(&path, settings_to_ron(&settings).unwrap()).unwrap();
        assert_eq!(load_settings(Some(&path)).unwrap(), settings);
    }
}
