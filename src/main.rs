//! CLI: настройка профиля и вывод сводки дохода.

use std::env;

use chrono::{Local, NaiveDate};
use salary_tracker::{
    Config, JsonProfileStore, ProfileState, ProfileStore, Session, TrackerError, format_money,
    monthly_incomes, parse_date, parse_positive, parse_positive_amount, parse_profile,
    working_days_in_month,
};

const USAGE: &str = "Usage:
  salary-tracker setup <salary> <work-days> <work-hours> <start yyyy-mm-dd>
  salary-tracker show [yyyy-mm-dd] [--windfall DATE=AMOUNT]... [--loss DATE=AMOUNT]...
  salary-tracker month <year> <month>
  salary-tracker clear";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    salary_tracker::init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        println!("{USAGE}");
        return Ok(());
    };

    let config = Config::from_env()?;
    if command == "clear" && args.len() == 1 {
        // Файл профиля не читается: удалить можно и повреждённый.
        JsonProfileStore::new(config.profile_path()).clear()?;
        println!("Профиль удалён.");
        return Ok(());
    }
    let mut session = Session::open(JsonProfileStore::new(config.profile_path()))?;
    let symbol = config.currency_symbol.as_str();

    match (command.as_str(), &args[1..]) {
        ("setup", [salary, days, hours, start]) => {
            let profile = parse_profile(salary, days, hours, start)?;
            println!("Оклад: {}", format_money(profile.monthly_salary(), symbol));
            println!("Доход в день: {}", format_money(profile.daily_income(), symbol));
            println!("Доход в час: {}", format_money(profile.hourly_income(), symbol));
            println!("Начало: {}", profile.start_date());
            session.configure(profile)?;
        }
        ("show", rest) => {
            let target = show_transactions(&mut session, rest)?;
            let Some(stats) = session.stats(target) else {
                println!("Профиль не настроен, выполните `salary-tracker setup`.");
                return Ok(());
            };
            println!("На {target}:");
            println!("  Всего: {}", format_money(stats.total_income, symbol));
            println!("  За неделю: {}", format_money(stats.weekly_total, symbol));
            println!("  За месяц: {}", format_money(stats.monthly_total, symbol));
            println!(
                "  Неожиданные доходы: {}",
                format_money(stats.total_extra_income, symbol)
            );
            println!(
                "  Неожиданные расходы: {}",
                format_money(stats.total_expense, symbol)
            );
            if let Some(series) = session.daily_series(target) {
                println!("График:");
                for day in series.window(target, config.chart_radius_days) {
                    println!("  {} {}", day.date, format_money(day.actual_income(), symbol));
                }
            }
        }
        ("month", [year, month]) => {
            let ProfileState::Configured(profile) = session.state() else {
                println!("Профиль не настроен, выполните `salary-tracker setup`.");
                return Ok(());
            };
            let year = year.trim().parse::<i32>().map_err(|_| TrackerError::Number {
                value: year.clone(),
                field: "year",
            })?;
            let month = parse_positive(month, "month")?;
            let days = monthly_incomes(profile, session.transactions(), year, month)?;
            println!(
                "{year:04}-{month:02}: рабочих дней {}",
                working_days_in_month(profile, year, month)?
            );
            for day in &days {
                println!(
                    "  {} {:>12} {:>14}",
                    day.date,
                    format_money(day.actual_income(), symbol),
                    format_money(day.cumulative_income, symbol)
                );
            }
        }
        _ => println!("{USAGE}"),
    }
    Ok(())
}

/// Разбирает аргументы `show`: целевую дату и операции сессии.
fn show_transactions(
    session: &mut Session<JsonProfileStore>,
    args: &[String],
) -> Result<NaiveDate, TrackerError> {
    let mut target = Local::now().date_naive();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            flag @ ("--windfall" | "--loss") => {
                let value = iter
                    .next()
                    .ok_or(TrackerError::MissingField { field: "transaction" })?;
                let (date, amount) = value
                    .split_once('=')
                    .ok_or(TrackerError::MissingField { field: "amount" })?;
                let date = parse_date(date)?;
                let amount = parse_positive_amount(amount)?;
                if flag == "--windfall" {
                    session.record_windfall(date, amount, None)?;
                } else {
                    session.record_loss(date, amount, None)?;
                }
            }
            other => target = parse_date(other)?,
        }
    }
    Ok(target)
}
