//! Хранение единственного рабочего профиля.

use crate::error::TrackerError;
use crate::types::WorkProfile;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

const STAGING_SUFFIX: &str = ".tmp";

/// Хранилище профиля с одним слотом.
pub trait ProfileStore {
    /// Сохраняет профиль, заменяя предыдущий.
    ///
    /// # Errors
    ///
    /// Ошибка записи в хранилище.
    fn save(&mut self, profile: &WorkProfile) -> Result<(), TrackerError>;

    /// Загружает профиль; `None`, если слот пуст или запись некорректна.
    ///
    /// # Errors
    ///
    /// Ошибка чтения или разбора хранилища.
    fn load(&self) -> Result<Option<WorkProfile>, TrackerError>;

    /// Очищает слот.
    ///
    /// # Errors
    ///
    /// Ошибка удаления данных.
    fn clear(&mut self) -> Result<(), TrackerError>;
}

/// Сериализованная форма профиля с фиксированными ключами.
///
/// Оклад хранится строкой, дата как число дней от 1970-01-01.
/// Отсутствующий ключ читается как `None`, такая запись не даёт профиля.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct ProfileRecord {
    monthly_salary: Option<String>,
    work_days_per_month: Option<i64>,
    work_hours_per_day: Option<i64>,
    start_date_epoch: Option<i64>,
}

fn unix_epoch() -> NaiveDate {
    DateTime::<Utc>::UNIX_EPOCH.date_naive()
}

fn to_epoch_days(date: NaiveDate) -> i64 {
    date.signed_duration_since(unix_epoch()).num_days()
}

fn from_epoch_days(days: i64) -> Option<NaiveDate> {
    TimeDelta::try_days(days).and_then(|delta| unix_epoch().checked_add_signed(delta))
}

impl From<&WorkProfile> for ProfileRecord {
    fn from(profile: &WorkProfile) -> Self {
        Self {
            monthly_salary: Some(profile.monthly_salary().to_string()),
            work_days_per_month: Some(i64::from(profile.work_days_per_month())),
            work_hours_per_day: Some(i64::from(profile.work_hours_per_day())),
            start_date_epoch: Some(to_epoch_days(profile.start_date())),
        }
    }
}

impl ProfileRecord {
    /// Восстанавливает профиль; отсутствующее или некорректное поле даёт `None`.
    fn into_profile(self) -> Option<WorkProfile> {
        let salary = Decimal::from_str(self.monthly_salary?.trim()).ok()?;
        let days = u32::try_from(self.work_days_per_month?).ok()?;
        let hours = u32::try_from(self.work_hours_per_day?).ok()?;
        let start = from_epoch_days(self.start_date_epoch?)?;
        WorkProfile::new(salary, days, hours, start).ok()
    }
}

/// Профиль в JSON-файле на диске.
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    /// Хранилище в указанном файле; файл создаётся при первом сохранении.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Путь к файлу профиля.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for JsonProfileStore {
    fn save(&mut self, profile: &WorkProfile) -> Result<(), TrackerError> {
        let json = serde_json::to_string_pretty(&ProfileRecord::from(profile))?;
        let staging = staging_path(&self.path);
        write_synced(&staging, &json)?;
        if let Err(err) = fs::rename(&staging, &self.path) {
            // Прежний профиль не тронут.
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }
        info!(path = %self.path.display(), "work profile saved");
        Ok(())
    }

    fn load(&self) -> Result<Option<WorkProfile>, TrackerError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        let record: ProfileRecord = serde_json::from_str(&data)?;
        let profile = record.into_profile();
        if profile.is_none() {
            warn!(path = %self.path.display(), "stored work profile is invalid, ignoring");
        }
        Ok(profile)
    }

    fn clear(&mut self) -> Result<(), TrackerError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            info!(path = %self.path.display(), "work profile cleared");
        }
        Ok(())
    }
}

/// Профиль в памяти процесса.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    slot: Option<WorkProfile>,
}

impl MemoryProfileStore {
    /// Пустое хранилище.
    #[must_use]
    pub const fn new() -> Self {
        Self { slot: None }
    }
}

impl ProfileStore for MemoryProfileStore {
    fn save(&mut self, profile: &WorkProfile) -> Result<(), TrackerError> {
        self.slot = Some(profile.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<WorkProfile>, TrackerError> {
        Ok(self.slot.clone())
    }

    fn clear(&mut self) -> Result<(), TrackerError> {
        self.slot = None;
        Ok(())
    }
}

/// Соседний файл `<имя>.tmp`, куда профиль пишется перед заменой.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(STAGING_SUFFIX);
    path.with_file_name(name)
}

/// Пишет данные и сбрасывает их на диск до возврата.
fn write_synced(path: &Path, data: &str) -> Result<(), TrackerError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
