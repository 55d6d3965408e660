use salary_tracker::{Config, HOME_ENV};
use tempfile::tempdir;

// Единственный тест в этом бинаре: переменная окружения процесса не делится
// с другими тестами.
#[test]
fn home_env_overrides_data_dir() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(dir.path().join("config.json"), r#"{"chart_radius_days":5}"#).unwrap();

    // SAFETY: других потоков, читающих окружение, в этом бинаре нет.
    unsafe { std::env::set_var(HOME_ENV, dir.path()) };
    let config = Config::from_env().expect("config from env");
    unsafe { std::env::remove_var(HOME_ENV) };

    assert_eq!(HOME_ENV, "SALARY_TRACKER_HOME");
    assert_eq!(config.data_dir, dir.path());
    assert_eq!(config.profile_path(), dir.path().join("profile.json"));
    assert_eq!(config.chart_radius_days, 5);
    assert_eq!(config.currency_symbol, "¥");
}
