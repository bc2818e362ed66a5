use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::{build, count_days, CalendarDate, Error, YearMonth, GRID_SIZE};

fn ymd(year: i32, month: u32, day: u32) -> CalendarDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("invalid date literal")
        .into()
}

fn all_months(years: std::ops::RangeInclusive<i32>) -> impl Iterator<Item = (i32, i32)> {
    years.flat_map(|year| (0..12).map(move |month| (year, month)))
}

/// Count days of a month by diffing with the first day of the next month.
fn count_days_chrono(year: i32, month0: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap();
    let next = first.checked_add_months(Months::new(1)).unwrap();
    (next - first).num_days().try_into().unwrap()
}

#[test]
fn always_42_cells() {
    for (year, month) in all_months(1890..=2110) {
        let grid = build(year, month).unwrap();
        assert_eq!(grid.cells().len(), GRID_SIZE);
        assert_eq!(grid.weeks().count(), 6);
    }
}

#[test]
fn consecutive_days() {
    for (year, month) in all_months(1990..=2030) {
        let grid = build(year, month).unwrap();

        for pair in grid.cells().windows(2) {
            assert_eq!(
                pair[0].date().as_naive().succ_opt(),
                Some(pair[1].date().as_naive()),
                "gap in grid of {year}-{month}",
            );
        }
    }
}

#[test]
fn rows_start_on_sunday() {
    for (year, month) in all_months(2020..=2026) {
        let grid = build(year, month).unwrap();

        for week in grid.weeks() {
            assert_eq!(week[0].date().weekday(), Weekday::Sun);
        }
    }
}

#[test]
fn in_month_cells_match_month() {
    for (year, month) in all_months(1890..=2110) {
        let grid = build(year, month).unwrap();
        let month0 = month as u32;

        for cell in &grid {
            let same_month = cell.date().year() == year && cell.date().month0() == month0;
            assert_eq!(cell.is_in_month(), same_month);
        }

        let in_month = grid.iter().filter(|cell| cell.is_in_month()).count();
        assert_eq!(in_month as u32, count_days(year, month0));
        assert_eq!(in_month as u32, count_days_chrono(year, month0));
    }
}

#[test]
fn leap_february() {
    let count_february = |year| build(year, 1).unwrap().iter().filter(|c| c.is_in_month()).count();
    assert_eq!(count_february(2024), 29);
    assert_eq!(count_february(2028), 29);
    assert_eq!(count_february(2000), 29);
    assert_eq!(count_february(2023), 28);
    assert_eq!(count_february(2100), 28);
}

#[test]
fn february_2024() {
    let grid = build(2024, 1).unwrap();
    let cells = grid.cells();

    assert_eq!(ymd(2024, 2, 1).weekday().num_days_from_sunday(), 4);

    let leading: Vec<_> = cells[..4].iter().map(|c| c.date()).collect();
    assert_eq!(
        leading,
        [ymd(2024, 1, 28), ymd(2024, 1, 29), ymd(2024, 1, 30), ymd(2024, 1, 31)],
    );
    assert!(cells[..4].iter().all(|c| c.is_other_month()));

    assert_eq!(cells[4].date(), ymd(2024, 2, 1));
    assert_eq!(cells[32].date(), ymd(2024, 2, 29));
    assert!(cells[4..33].iter().all(|c| c.is_in_month()));

    let trailing: Vec<_> = cells[33..].iter().map(|c| c.date().day()).collect();
    assert_eq!(trailing, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert!(cells[33..].iter().all(|c| c.is_other_month() && c.date().month0() == 2));
}

#[test]
fn month_starting_on_sunday() {
    // Feb 2015 fits in 4 rows but the grid is never compacted.
    let grid = build(2015, 1).unwrap();
    assert_eq!(grid.cells()[0].date(), ymd(2015, 2, 1));
    assert_eq!(grid.cells()[27].date(), ymd(2015, 2, 28));
    assert_eq!(grid.cells()[41].date(), ymd(2015, 3, 14));
    assert_eq!(grid.iter().filter(|c| c.is_other_month()).count(), 14);
}

#[test]
fn year_boundaries() {
    let january = build(2024, 0).unwrap();
    assert_eq!(january.cells()[0].date(), ymd(2023, 12, 31));
    assert!(january.cells()[0].is_other_month());

    let december = build(2024, 11).unwrap();
    assert_eq!(december.cells()[41].date(), ymd(2025, 1, 11));
    assert!(december.cells()[41].is_other_month());
}

#[test]
fn normalize_month() {
    assert_eq!(build(2024, -1).unwrap(), build(2023, 11).unwrap());
    assert_eq!(build(2024, 12).unwrap(), build(2025, 0).unwrap());
    assert_eq!(build(2024, -2), Err(Error::InvalidMonth(-2)));
    assert_eq!(build(2024, 13), Err(Error::InvalidMonth(13)));
    assert_eq!(build(2024, i32::MIN), Err(Error::InvalidMonth(i32::MIN)));
}

#[test]
fn out_of_range() {
    let max_year = NaiveDate::MAX.year();
    assert!(matches!(build(max_year, 11), Err(Error::OutOfRange { .. })));
    assert!(matches!(build(i32::MAX, 0), Err(Error::OutOfRange { .. })));
    assert!(matches!(build(i32::MAX, 12), Err(Error::OutOfRange { .. })));
    assert!(matches!(build(i32::MIN, -1), Err(Error::OutOfRange { .. })));
    assert!(build(max_year, 0).is_ok());
}

#[test]
fn navigate_months() {
    let mut month = YearMonth::new(2020, 0).unwrap();

    for _ in 0..120 {
        let next = month.succ().unwrap();
        assert!(next > month);
        assert_eq!(next.pred(), Some(month));
        month = next;
    }

    assert_eq!(month, YearMonth::new(2030, 0).unwrap());
    assert_eq!(YearMonth::new(NaiveDate::MAX.year(), 11).unwrap().succ(), None);
    assert_eq!(YearMonth::new(NaiveDate::MIN.year(), 0).unwrap().pred(), None);
}

#[test]
fn find_cell() {
    let grid = build(2024, 1).unwrap();

    for cell in &grid {
        assert_eq!(grid.find(cell.date()), Some(cell));
    }

    assert_eq!(grid.find(ymd(2024, 1, 27)), None);
    assert_eq!(grid.find(ymd(2024, 3, 10)), None);
}

#[test]
fn display() {
    assert_eq!(ymd(2024, 2, 9).to_string(), "2024-02-09");
    assert_eq!(YearMonth::new(2023, -1).unwrap().to_string(), "December 2022");
    assert_eq!(Error::InvalidMonth(14).to_string(), "invalid month 14: expected a value in -1..=12");
}
