use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use salary_tracker::{
    DailyIncome, IncomeSeries, MAX_MONEY, Money, Transaction, TrackerError, WorkProfile,
    compute_daily_series, compute_stats, elapsed_days, is_working_day, monthly_incomes,
    parse_profile, working_days_in_month,
};
use std::str::FromStr;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn money(s: &str) -> Money {
    Decimal::from_str(s).expect("valid decimal")
}

fn profile(days: u32, start: NaiveDate) -> WorkProfile {
    WorkProfile::new(money("3000"), days, 8, start).expect("valid profile")
}

/// Сумма фактического дохода в окне, посчитанная без кода библиотеки для окон.
fn window_sum(series: &[DailyIncome], start: NaiveDate, end: NaiveDate) -> Money {
    let mut total = Decimal::ZERO;
    for entry in series {
        if entry.date >= start && entry.date <= end {
            total += entry.base_income + entry.extra_income - entry.expense;
        }
    }
    total
}

#[test]
fn single_working_day() {
    let p = profile(22, date(2024, 1, 1));
    let series = compute_daily_series(&p, &[], date(2024, 1, 1));

    assert_eq!(series.len(), 1);
    let day = &series[0];
    assert_eq!(day.base_income.round_dp(2), money("136.36"));
    assert_eq!(day.extra_income, Decimal::ZERO);
    assert_eq!(day.expense, Decimal::ZERO);
    assert_eq!(day.cumulative_income, day.base_income);
    assert_eq!(day.base_income, p.daily_income());
}

#[test]
fn saturday_is_rest_day_on_five_day_week() {
    let p = profile(22, date(2024, 1, 1));
    let stats = compute_stats(&p, &[], date(2024, 1, 6));

    assert_eq!(stats.daily_series.len(), 6);
    let saturday = stats.daily_series.last().unwrap();
    assert_eq!(saturday.date.weekday(), Weekday::Sat);
    assert_eq!(saturday.base_income, Decimal::ZERO);

    let expected = window_sum(&stats.daily_series, date(2024, 1, 1), date(2024, 1, 6));
    assert_eq!(stats.weekly_total, expected);
    assert_eq!(stats.weekly_total.round_dp(2), money("681.82"));
    assert_eq!(stats.total_income, stats.weekly_total);
}

#[test]
fn windfall_adds_to_its_day() {
    let p = profile(22, date(2024, 1, 1));
    let txs = vec![Transaction::windfall(date(2024, 1, 3), money("500"))];
    let stats = compute_stats(&p, &txs, date(2024, 1, 6));

    let day = &stats.daily_series[2];
    assert_eq!(day.date, date(2024, 1, 3));
    assert_eq!(day.extra_income, money("500"));
    assert_eq!(day.actual_income(), day.base_income + money("500"));
    assert_eq!(stats.total_extra_income, money("500"));
    assert_eq!(stats.total_expense, Decimal::ZERO);
}

#[test]
fn loss_is_taken_by_absolute_value() {
    let p = profile(22, date(2024, 1, 1));
    for loss_amount in ["200", "-200"] {
        let txs = vec![
            Transaction::windfall(date(2024, 1, 3), money("500")),
            Transaction::loss(date(2024, 1, 3), money(loss_amount)).with_description("кошелёк"),
        ];
        let series = compute_daily_series(&p, &txs, date(2024, 1, 3));
        let day = series.last().unwrap();
        assert_eq!(day.expense, money("200"));
        assert_eq!(
            day.actual_income(),
            day.base_income + money("500") - money("200")
        );
    }
}

#[test]
fn same_day_transactions_accumulate() {
    let p = profile(22, date(2024, 1, 1));
    let txs = vec![
        Transaction::windfall(date(2024, 1, 2), money("100")),
        Transaction::loss(date(2024, 1, 2), money("30")),
        Transaction::windfall(date(2024, 1, 2), money("-50")),
        Transaction::loss(date(2024, 1, 2), money("20")),
        // Вне диапазона ряда и не должна учитываться.
        Transaction::windfall(date(2023, 12, 31), money("999")),
    ];
    let stats = compute_stats(&p, &txs, date(2024, 1, 2));
    let day = &stats.daily_series[1];
    assert_eq!(day.extra_income, money("150"));
    assert_eq!(day.expense, money("50"));
    assert_eq!(stats.total_extra_income, money("150"));
    assert_eq!(stats.total_expense, money("50"));
}

#[test]
fn six_day_week_works_saturdays() {
    let p = profile(25, date(2024, 1, 1));
    let series = compute_daily_series(&p, &[], date(2024, 1, 31));

    assert_eq!(series.len(), 31);
    for day in &series {
        match day.date.weekday() {
            Weekday::Sun => assert_eq!(day.base_income, Decimal::ZERO, "{}", day.date),
            _ => assert_eq!(day.base_income, p.daily_income(), "{}", day.date),
        }
    }
    assert_eq!(working_days_in_month(&p, 2024, 1).unwrap(), 27);
    assert_eq!(working_days_in_month(&profile(22, date(2024, 1, 1)), 2024, 1).unwrap(), 23);
}

#[test]
fn out_of_tier_counts_fall_back_to_five_day_week() {
    let saturday = date(2024, 1, 6);
    for days in [1, 19, 27, 30, 31] {
        assert!(!is_working_day(saturday, &profile(days, saturday)));
        assert!(is_working_day(date(2024, 1, 5), &profile(days, saturday)));
    }
    assert!(is_working_day(saturday, &profile(24, saturday)));
    assert!(!is_working_day(date(2024, 1, 7), &profile(26, saturday)));
}

#[test]
fn series_length_and_cumulative_invariant() {
    let start = date(2023, 11, 20);
    let p = profile(24, start);
    let txs = vec![
        Transaction::windfall(date(2023, 12, 24), money("1234.56")),
        Transaction::loss(date(2024, 2, 29), money("78.9")),
    ];
    let end = date(2024, 3, 15);
    let series = compute_daily_series(&p, &txs, end);

    assert_eq!(series.len() as i64, elapsed_days(start, end));
    let mut running = Decimal::ZERO;
    let mut expected_date = start;
    for entry in &series {
        assert_eq!(entry.date, expected_date);
        running += entry.actual_income();
        assert_eq!(entry.cumulative_income, running);
        expected_date = expected_date.succ_opt().unwrap();
    }
}

#[test]
fn end_before_start_is_empty_not_an_error() {
    let p = profile(22, date(2024, 1, 10));
    let txs = vec![Transaction::windfall(date(2024, 1, 5), money("10"))];

    assert!(compute_daily_series(&p, &txs, date(2024, 1, 9)).is_empty());
    assert!(elapsed_days(date(2024, 1, 10), date(2024, 1, 9)) <= 0);

    let stats = compute_stats(&p, &txs, date(2024, 1, 9));
    assert!(stats.daily_series.is_empty());
    assert_eq!(stats.weekly_total, Decimal::ZERO);
    assert_eq!(stats.monthly_total, Decimal::ZERO);
    assert_eq!(stats.total_income, Decimal::ZERO);
    assert_eq!(stats.total_extra_income, Decimal::ZERO);
    assert_eq!(stats.total_expense, Decimal::ZERO);
}

#[test]
fn week_and_month_windows_match_independent_sums() {
    let p = profile(22, date(2024, 1, 15));
    let txs = vec![
        Transaction::windfall(date(2024, 1, 30), money("300")),
        Transaction::loss(date(2024, 2, 1), money("45.5")),
        Transaction::windfall(date(2024, 2, 3), money("12.25")),
    ];

    // 2024-02-01, четверг: неделя начинается в январе.
    let stats = compute_stats(&p, &txs, date(2024, 2, 1));
    assert_eq!(
        stats.weekly_total,
        window_sum(&stats.daily_series, date(2024, 1, 29), date(2024, 2, 4))
    );
    assert_eq!(
        stats.monthly_total,
        window_sum(&stats.daily_series, date(2024, 2, 1), date(2024, 2, 29))
    );

    let stats = compute_stats(&p, &txs, date(2024, 2, 10));
    assert_eq!(
        stats.weekly_total,
        window_sum(&stats.daily_series, date(2024, 2, 5), date(2024, 2, 11))
    );
    assert_eq!(
        stats.monthly_total,
        window_sum(&stats.daily_series, date(2024, 2, 1), date(2024, 2, 29))
    );
    assert_eq!(
        stats.total_income,
        window_sum(&stats.daily_series, date(2024, 1, 1), date(2024, 12, 31))
    );
}

#[test]
fn week_is_clipped_at_start_date() {
    // Старт в среду: понедельник и вторник не входят в ряд.
    let p = profile(22, date(2024, 1, 3));
    let stats = compute_stats(&p, &[], date(2024, 1, 4));
    assert_eq!(stats.daily_series.len(), 2);
    assert_eq!(
        stats.weekly_total,
        window_sum(&stats.daily_series, date(2024, 1, 3), date(2024, 1, 4))
    );
    assert_eq!(stats.weekly_total, stats.monthly_total);
}

#[test]
fn repeated_calls_are_identical() {
    let p = profile(23, date(2024, 1, 1));
    let txs = vec![Transaction::windfall(date(2024, 1, 9), money("42"))];
    let first = compute_stats(&p, &txs, date(2024, 3, 1));
    let second = compute_stats(&p, &txs, date(2024, 3, 1));
    assert_eq!(first, second);
}

#[test]
fn monthly_incomes_keep_cumulative_from_start() {
    let p = profile(22, date(2024, 1, 1));
    let feb = monthly_incomes(&p, &[], 2024, 2).unwrap();

    assert_eq!(feb.len(), 29);
    assert_eq!(feb[0].date, date(2024, 2, 1));
    assert_eq!(feb[28].date, date(2024, 2, 29));
    // В январе 2024 года 23 будних дня.
    let january: Money = compute_daily_series(&p, &[], date(2024, 1, 31))
        .last()
        .unwrap()
        .cumulative_income;
    assert_eq!(feb[0].cumulative_income, january + p.daily_income());

    assert!(monthly_incomes(&p, &[], 2023, 12).unwrap().is_empty());
    assert!(monthly_incomes(&p, &[], 2024, 13).is_err());
}

#[test]
fn zero_salary_yields_zero_base() {
    let p = WorkProfile::new(Decimal::ZERO, 22, 8, date(2024, 1, 1)).unwrap();
    let stats = compute_stats(&p, &[], date(2024, 1, 31));
    assert_eq!(stats.total_income, Decimal::ZERO);
    assert_eq!(p.hourly_income(), Decimal::ZERO);
}

#[test]
fn invalid_profiles_are_rejected() {
    let start = date(2024, 1, 1);
    assert!(WorkProfile::new(money("3000"), 0, 8, start).is_err());
    assert!(WorkProfile::new(money("3000"), 32, 8, start).is_err());
    assert!(WorkProfile::new(money("3000"), 22, 0, start).is_err());
    assert!(WorkProfile::new(money("-1"), 22, 8, start).is_err());

    let p = profile(22, start);
    assert_eq!(p.hourly_income(), p.daily_income() / Decimal::from(8));
}

#[test]
fn salary_above_bound_is_rejected() {
    let start = date(2024, 1, 1);
    assert_eq!(MAX_MONEY, Decimal::from(1_000_000_000_000_000_u64));
    assert!(matches!(
        WorkProfile::new(MAX_MONEY + Decimal::ONE, 22, 8, start),
        Err(TrackerError::InvalidProfile {
            field: "monthly_salary",
            ..
        })
    ));
    assert!(matches!(
        parse_profile("79228162514264337593543950335", "22", "8", "2024-01-01"),
        Err(TrackerError::InvalidProfile {
            field: "monthly_salary",
            ..
        })
    ));
    assert!(WorkProfile::new(MAX_MONEY, 22, 8, start).is_ok());
}

#[test]
fn largest_salary_accumulates_over_a_century() {
    // Один рабочий день в месяце: весь оклад начисляется за один день.
    let p = WorkProfile::new(MAX_MONEY, 1, 1, date(2000, 1, 1)).unwrap();
    let txs = [
        Transaction::windfall(date(2050, 6, 1), MAX_MONEY),
        Transaction::windfall(date(2099, 12, 31), MAX_MONEY),
    ];
    let stats = compute_stats(&p, &txs, date(2099, 12, 31));

    let working_days = stats
        .daily_series
        .iter()
        .filter(|day| is_working_day(day.date, &p))
        .count();
    let expected = MAX_MONEY * Decimal::from(working_days) + MAX_MONEY * Decimal::from(2);
    assert_eq!(stats.total_income, expected);
    assert_eq!(stats.total_extra_income, MAX_MONEY * Decimal::from(2));
}

#[test]
fn series_lookups_and_buckets() {
    let p = profile(22, date(2024, 12, 25));
    let txs = vec![Transaction::windfall(date(2025, 1, 2), money("100"))];
    let series = IncomeSeries::new(compute_daily_series(&p, &txs, date(2025, 1, 15)));

    assert_eq!(series.len(), 22);
    assert!(series.get(date(2024, 12, 24)).is_none());
    assert_eq!(
        series.get(date(2025, 1, 2)).unwrap().extra_income,
        money("100")
    );

    // Окно графика обрезается началом ряда.
    assert_eq!(series.window(date(2024, 12, 26), 3).len(), 5);
    assert_eq!(series.window(date(2025, 1, 5), 3).len(), 7);

    // 2024-12-30 и 2024-12-31 относятся к ISO-неделе 2025-W01,
    // но берутся только дни 2025 года.
    let weeks = series.weekly_totals(2025);
    assert_eq!(weeks.len(), 3);
    assert_eq!(weeks[0].start, date(2025, 1, 13));
    assert_eq!(weeks[0].end, date(2025, 1, 15));
    let first_week = weeks.last().unwrap();
    assert_eq!(first_week.start, date(2025, 1, 1));
    assert_eq!(first_week.end, date(2025, 1, 5));
    assert_eq!(first_week.days, 5);
    assert_eq!(
        first_week.total,
        window_sum(series.entries(), date(2025, 1, 1), date(2025, 1, 5))
    );

    let months = series.monthly_totals(2024);
    assert_eq!(months.len(), 1);
    assert_eq!(months[0].days, 7);
    assert_eq!(
        months[0].total,
        window_sum(series.entries(), date(2024, 12, 1), date(2024, 12, 31))
    );
    assert!(series.monthly_totals(2023).is_empty());
}
