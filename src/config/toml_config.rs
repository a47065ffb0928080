use crate::core::catalog::Catalog;
use crate::core::datetime::{DEFAULT_DATETIME_FORMAT, DEFAULT_DATE_FORMAT};
use crate::core::gravatar::{DEFAULT_BASE_URL, DEFAULT_IMAGE};
use crate::core::pagination::{DEFAULT_PAGE_PARAM, EVENTS_PER_PAGE};
use crate::core::timesince::DEFAULT_THRESHOLD_DAYS;
use crate::domain::ports::SettingsProvider;
use crate::utils::error::{HelperError, Result};
use crate::utils::validation::{self, Validate};
use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub paging: PagingConfig,
    #[serde(default)]
    pub timesince: TimeSinceConfig,
    #[serde(default)]
    pub gravatar: GravatarConfig,
    #[serde(default)]
    pub translations: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub timezone: Option<String>,
    pub date_format: Option<String>,
    pub datetime_format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PagingConfig {
    pub per_page: Option<usize>,
    pub page_param: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeSinceConfig {
    pub threshold_days: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GravatarConfig {
    pub base_url: Option<String>,
    pub default: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HelperError::IoError)?;
        tracing::debug!("Loaded configuration from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let config: Self =
            toml::from_str(&processed_content).map_err(|e| HelperError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        if let Some(tz) = config.general.timezone.as_deref() {
            validation::parse_utc_offset("general.timezone", tz)?;
        }
        Ok(config)
    }

    /// 替換環境變數 (例如 ${HELPERS_TZ})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HelperError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(base_url) = &self.gravatar.base_url {
            validation::validate_url("gravatar.base_url", base_url)?;
        }
        if let Some(default) = &self.gravatar.default {
            validation::validate_non_empty_string("gravatar.default", default)?;
        }

        if let Some(per_page) = self.paging.per_page {
            validation::validate_positive_number("paging.per_page", per_page, 1)?;
        }
        if let Some(param) = &self.paging.page_param {
            validation::validate_non_empty_string("paging.page_param", param)?;
        }

        if let Some(days) = self.timesince.threshold_days {
            validation::validate_range("timesince.threshold_days", days, 1, 3650)?;
        }

        if let Some(tz) = &self.general.timezone {
            validation::parse_utc_offset("general.timezone", tz)?;
        }
        if let Some(format) = &self.general.date_format {
            validation::validate_non_empty_string("general.date_format", format)?;
        }
        if let Some(format) = &self.general.datetime_format {
            validation::validate_non_empty_string("general.datetime_format", format)?;
        }

        Ok(())
    }

    /// 取得翻譯表
    pub fn catalog(&self) -> Catalog {
        Catalog::from_entries(self.translations.clone())
    }
}

impl SettingsProvider for TomlConfig {
    fn per_page(&self) -> usize {
        self.paging.per_page.unwrap_or(EVENTS_PER_PAGE)
    }

    fn page_param(&self) -> &str {
        self.paging.page_param.as_deref().unwrap_or(DEFAULT_PAGE_PARAM)
    }

    fn threshold_days(&self) -> i64 {
        self.timesince.threshold_days.unwrap_or(DEFAULT_THRESHOLD_DAYS)
    }

    fn gravatar_base_url(&self) -> &str {
        self.gravatar.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn gravatar_default(&self) -> &str {
        self.gravatar.default.as_deref().unwrap_or(DEFAULT_IMAGE)
    }

    /// 無效的偏移在載入與 `validate()` 時已回報，這裡退回 UTC
    fn timezone(&self) -> FixedOffset {
        self.general
            .timezone
            .as_deref()
            .and_then(|tz| validation::parse_utc_offset("general.timezone", tz).ok())
            .unwrap_or_else(|| Utc.fix())
    }

    fn date_format(&self) -> &str {
        self.general.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }

    fn datetime_format(&self) -> &str {
        self.general
            .datetime_format
            .as_deref()
            .unwrap_or(DEFAULT_DATETIME_FORMAT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
