mod dismiss;


#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;

        month_grid::CalendarDate::from(
            NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal"),
        )
    }};
}

/// Get the cell displaying a given day in the grid of its own month.
#[macro_export]
macro_rules! cell {
    ( $date: expr ) => {{
        let date = $crate::date!($date);

        *month_grid::build_month(date.year_month())
            .expect("date out of range")
            .find(date)
            .expect("day missing from the grid of its month")
    }};
    ( $date: expr, in = $year: expr, $month: expr ) => {{
        *month_grid::build($year, $month)
            .expect("date out of range")
            .find($crate::date!($date))
            .expect("day missing from the grid")
    }};
}
