//! Zentrale Konfiguration für den XForm Maker.
//!
//! `XformOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use xform_path_engine::params::{
    DEFAULT_APPROX_SAMPLES, DEFAULT_SAMPLES_PER_SEGMENT, DEFAULT_TENSION,
};
use xform_path_engine::{InterpolationMode, PathParams};

// ── Ausgabe ─────────────────────────────────────────────────────────

/// Nachkommastellen in der CSS-Keyframe-Ausgabe.
pub const KEYFRAME_PRECISION: usize = 2;
/// Präfix für generierte `@keyframes`-Namen (`<präfix>-<id>`).
pub const ANIMATION_NAME_PREFIX: &str = "xform";

/// Dateiname der Optionen-Datei neben der Binary.
const CONFIG_FILE_NAME: &str = "xform_maker.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `xform_maker.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XformOptions {
    // ── Pfad ────────────────────────────────────────────────────
    /// Abtastpunkte pro Segment (Gravity / PassThrough)
    #[serde(default = "default_samples_per_segment")]
    pub samples_per_segment: usize,
    /// Spannung der Gravity-Kontrollpunkte
    #[serde(default = "default_tension")]
    pub tension: f64,
    /// Gesamt-Punktzahl im N-Punkt-Modus
    #[serde(default = "default_approx_samples")]
    pub approx_samples: usize,
    /// Modus, wenn weder Dokument noch Aufrufer einen vorgeben
    #[serde(default)]
    pub default_mode: InterpolationMode,

    // ── Ausgabe ─────────────────────────────────────────────────
    /// Nachkommastellen in CSS-Keyframes
    #[serde(default = "default_keyframe_precision")]
    pub keyframe_precision: usize,
    /// Präfix der Animationsnamen
    #[serde(default = "default_animation_name_prefix")]
    pub animation_name_prefix: String,
}

impl Default for XformOptions {
    fn default() -> Self {
        Self {
            samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,
            tension: DEFAULT_TENSION,
            approx_samples: DEFAULT_APPROX_SAMPLES,
            default_mode: InterpolationMode::default(),
            keyframe_precision: KEYFRAME_PRECISION,
            animation_name_prefix: ANIMATION_NAME_PREFIX.to_string(),
        }
    }
}

/// Serde-Defaults (Abwärtskompatibilität unvollständiger TOML-Dateien).
fn default_samples_per_segment() -> usize {
    DEFAULT_SAMPLES_PER_SEGMENT
}

fn default_tension() -> f64 {
    DEFAULT_TENSION
}

fn default_approx_samples() -> usize {
    DEFAULT_APPROX_SAMPLES
}

fn default_keyframe_precision() -> usize {
    KEYFRAME_PRECISION
}

fn default_animation_name_prefix() -> String {
    ANIMATION_NAME_PREFIX.to_string()
}

impl XformOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("xform-maker"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Abtast-Parameter für den Interpolations-Kern.
    pub fn path_params(&self) -> PathParams {
        PathParams {
            samples_per_segment: self.samples_per_segment,
            tension: self.tension,
            approx_samples: self.approx_samples,
        }
    }

    /// Name der CSS-Animation für eine Transformation.
    pub fn animation_name(&self, xform_id: u64) -> String {
        format!("{}-{}", self.animation_name_prefix, xform_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let opts: XformOptions = toml::from_str("samples_per_segment = 30\n").unwrap();
        assert_eq!(opts.samples_per_segment, 30);
        assert_eq!(opts.tension, 0.5);
        assert_eq!(opts.approx_samples, 100);
        assert_eq!(opts.default_mode, InterpolationMode::PassThrough);
        assert_eq!(opts.animation_name_prefix, "xform");
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut opts = XformOptions::default();
        opts.default_mode = InterpolationMode::Gravity;
        opts.keyframe_precision = 4;
        let text = toml::to_string_pretty(&opts).unwrap();
        assert!(text.contains("default_mode = \"gravity\""));
        let back: XformOptions = toml::from_str(&text).unwrap();
        assert_eq!(back, opts);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let opts = XformOptions::load_from_file(std::path::Path::new(
            "/nonexistent/xform_maker_missing.toml",
        ));
        assert_eq!(opts, XformOptions::default());
    }

    /// Eindeutiger Pfad im Temp-Verzeichnis je Test.
    fn temp_config(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("xform_maker_{}_{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let path = temp_config("roundtrip");
        let mut opts = XformOptions::default();
        opts.samples_per_segment = 12;
        opts.default_mode = InterpolationMode::NPointApprox;
        opts.animation_name_prefix = "bahn".to_string();

        opts.save_to_file(&path).unwrap();
        let loaded = XformOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let path = temp_config("malformed");
        std::fs::write(&path, "samples_per_segment = \"viele\"\n[[kaputt").unwrap();
        let loaded = XformOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, XformOptions::default());
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let path = std::path::Path::new("/nonexistent/xform_maker_dir/xform_maker.toml");
        assert!(XformOptions::default().save_to_file(path).is_err());
    }

    #[test]
    fn test_path_params_and_animation_name() {
        let opts = XformOptions::default();
        assert_eq!(opts.path_params(), PathParams::default());
        assert_eq!(opts.animation_name(42), "xform-42");
    }
}
