//! Ошибки проверки ввода, хранения профиля и календарных расчётов.

/// Ошибка разбора ввода, хранения профиля или календарного расчёта.
#[derive(thiserror::Error, Debug)]
pub enum TrackerError {
    /// Ошибка ввода-вывода при работе с файлом профиля или конфигурации.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Ошибка сериализации или разбора JSON.
    #[error("Serialization error: {0}")]
    Serde(String),
    /// Ошибка разбора числового значения.
    #[error("Invalid number '{value}' in field '{field}'")]
    Number {
        /// Некорректное исходное значение.
        value: String,
        /// Название поля.
        field: &'static str,
    },
    /// Ошибка разбора или построения даты.
    #[error("Invalid date '{value}'")]
    Date {
        /// Некорректная дата.
        value: String,
    },
    /// Параметры рабочего профиля нарушают инварианты.
    #[error("Invalid work profile field '{field}': {reason}")]
    InvalidProfile {
        /// Имя поля профиля.
        field: &'static str,
        /// Причина отказа.
        reason: &'static str,
    },
    /// Сумма разовой операции должна быть положительной.
    #[error("Invalid transaction amount '{value}'")]
    InvalidAmount {
        /// Отклонённая сумма.
        value: String,
    },
    /// Отсутствует обязательное поле.
    #[error("Required field '{field}' missing")]
    MissingField {
        /// Имя пропавшего поля.
        field: &'static str,
    },
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}
