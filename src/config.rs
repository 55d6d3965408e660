//! Настройки приложения: каталог данных и параметры отображения.

use crate::error::TrackerError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Переменная окружения с каталогом данных.
pub const HOME_ENV: &str = "SALARY_TRACKER_HOME";
const APP_DIR: &str = "salary-tracker";
const CONFIG_FILE: &str = "config.json";
const PROFILE_FILE: &str = "profile.json";

/// Пользовательские настройки; отсутствующие в файле поля берутся по умолчанию.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Каталог с профилем и файлом настроек.
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Символ валюты при выводе сумм.
    pub currency_symbol: String,
    /// Полуширина окна графика в днях.
    pub chart_radius_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            currency_symbol: "¥".into(),
            chart_radius_days: 3,
        }
    }
}

impl Config {
    /// Читает настройки из каталога `SALARY_TRACKER_HOME` либо из системного
    /// каталога данных.
    ///
    /// # Errors
    ///
    /// Ошибка чтения или разбора `config.json`.
    pub fn from_env() -> Result<Self, TrackerError> {
        let home = env::var_os(HOME_ENV).map_or_else(default_data_dir, PathBuf::from);
        Self::with_home(home)
    }

    /// Читает `config.json` из указанного каталога данных.
    ///
    /// # Errors
    ///
    /// Ошибка чтения или разбора `config.json`.
    pub fn with_home(home: PathBuf) -> Result<Self, TrackerError> {
        let mut config = Self::load(&home.join(CONFIG_FILE))?;
        config.data_dir = home;
        Ok(config)
    }

    /// Читает настройки из файла; отсутствующий файл даёт значения по умолчанию.
    ///
    /// # Errors
    ///
    /// Ошибка чтения или разбора файла.
    pub fn load(path: &Path) -> Result<Self, TrackerError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Путь к файлу профиля.
    #[must_use]
    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join(PROFILE_FILE)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".salary-tracker"), |dir| dir.join(APP_DIR))
}
