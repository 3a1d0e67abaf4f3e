use serde::{Deserialize, Serialize};

use crate::{CoreError, SimulationProfile, StageTable, PROCESSING_STEP_MAX, UPLOAD_STEP_MAX};

const MIN_CLIP_RANGE: std::ops::RangeInclusive<u32> = 15..=45;
const MAX_CLIP_RANGE: std::ops::RangeInclusive<u32> = 45..=120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DetectionMode {
    Conservative,
    #[default]
    Balanced,
    Aggressive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputQuality {
    P720,
    #[default]
    P1080,
    P1440,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Mp4,
    Webm,
    Mov,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 16:9
    Landscape,
    /// 9:16, the shorts/reels format.
    #[default]
    Vertical,
    /// 1:1
    Square,
}

/// Detection and output preferences from the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub kill_sensitivity: u8,
    pub audio_sensitivity: u8,
    pub target_enemy: String,
    pub detection_mode: DetectionMode,
    pub min_clip_secs: u32,
    pub max_clip_secs: u32,
    pub output_quality: OutputQuality,
    pub output_format: OutputFormat,
    pub aspect_ratio: AspectRatio,
    pub watermark: bool,
    pub auto_captions: bool,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            kill_sensitivity: 75,
            audio_sensitivity: 80,
            target_enemy: "Sean".to_string(),
            detection_mode: DetectionMode::default(),
            min_clip_secs: 30,
            max_clip_secs: 60,
            output_quality: OutputQuality::default(),
            output_format: OutputFormat::default(),
            aspect_ratio: AspectRatio::default(),
            watermark: true,
            auto_captions: false,
        }
    }
}

impl ExtractionSettings {
    pub fn validate(&self) -> Result<(), CoreError> {
        check_percent("kill_sensitivity", self.kill_sensitivity)?;
        check_percent("audio_sensitivity", self.audio_sensitivity)?;
        if self.target_enemy.trim().is_empty() {
            return Err(invalid("target_enemy", "must not be blank"));
        }
        if !MIN_CLIP_RANGE.contains(&self.min_clip_secs) {
            return Err(invalid(
                "min_clip_secs",
                format!("{} is outside {:?}", self.min_clip_secs, MIN_CLIP_RANGE),
            ));
        }
        if !MAX_CLIP_RANGE.contains(&self.max_clip_secs) {
            return Err(invalid(
                "max_clip_secs",
                format!("{} is outside {:?}", self.max_clip_secs, MAX_CLIP_RANGE),
            ));
        }
        if self.min_clip_secs > self.max_clip_secs {
            return Err(invalid(
                "min_clip_secs",
                format!(
                    "{} exceeds max_clip_secs {}",
                    self.min_clip_secs, self.max_clip_secs
                ),
            ));
        }
        Ok(())
    }
}

/// Timer periods and increments of the simulated queues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub processing_tick_ms: u64,
    pub processing_step_max: f64,
    pub upload_tick_ms: u64,
    pub upload_step_max: f64,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            processing_tick_ms: 2000,
            processing_step_max: PROCESSING_STEP_MAX,
            upload_tick_ms: 500,
            upload_step_max: UPLOAD_STEP_MAX,
            seed: None,
        }
    }
}

impl SimulationSettings {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.processing_tick_ms == 0 {
            return Err(invalid("processing_tick_ms", "must be greater than zero"));
        }
        if self.upload_tick_ms == 0 {
            return Err(invalid("upload_tick_ms", "must be greater than zero"));
        }
        self.processing_profile()?;
        self.upload_profile()?;
        Ok(())
    }

    pub fn processing_profile(&self) -> Result<SimulationProfile, CoreError> {
        SimulationProfile::new(self.processing_step_max, StageTable::PROCESSING)
    }

    pub fn upload_profile(&self) -> Result<SimulationProfile, CoreError> {
        SimulationProfile::new(self.upload_step_max, StageTable::UPLOAD)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub extraction: ExtractionSettings,
    pub simulation: SimulationSettings,
}

impl Settings {
    pub fn validate(&self) -> Result<(), CoreError> {
        self.extraction.validate()?;
        self.simulation.validate()
    }
}

fn check_percent(field: &'static str, value: u8) -> Result<(), CoreError> {
    if value > 100 {
        return Err(invalid(field, format!("{value} is above 100")));
    }
    Ok(())
}

fn invalid(field: &'static str, reason: impl Into<String>) -> CoreError {
    CoreError::InvalidSetting {
        field,
        reason: reason.into(),
    }
}
