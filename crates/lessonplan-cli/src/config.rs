use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use lessonplan_export::styles::{LayoutStyles, PageBreakPolicy};
use lessonplan_gemini::client::{
    Credential, GeminiClient, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL,
};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// User settings. The API key itself is never stored here; only the name of
/// the environment variable it is read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonPlanConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub model: String,
    pub api_key_env: String,
    pub base_url: String,
    /// Directory exported PDFs are written to.
    pub output_dir: PathBuf,
    #[serde(default)]
    pub page_break_policy: PageBreakPolicy,
}

impl Default for LessonPlanConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
            page_break_policy: PageBreakPolicy::default(),
        }
    }
}

impl LessonPlanConfig {
    pub fn client(&self) -> GeminiClient {
        GeminiClient::new(Credential::Env(self.api_key_env.clone()))
            .with_model(&self.model)
            .with_base_url(&self.base_url)
    }

    pub fn styles(&self) -> LayoutStyles {
        LayoutStyles::default().with_page_break_policy(self.page_break_policy)
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("lessonplan"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, falling back to defaults when no file exists.
pub fn load_config(path: &Path) -> eyre::Result<LessonPlanConfig> {
    if !path.exists() {
        return Ok(LessonPlanConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: LessonPlanConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update lessonplan."
        ));
    }

    // v0 → v1: settings were flat optional keys; fill in every default that
    // is absent so the struct always deserializes.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        let defaults = serde_json::to_value(LessonPlanConfig::default())?;
        if let serde_json::Value::Object(defaults) = defaults {
            for (key, value) in defaults {
                obj.entry(key).or_insert(value);
            }
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (filled defaults)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &LessonPlanConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
