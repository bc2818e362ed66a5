use std::env;

use date_picker::{Clock, DatePicker, SystemClock, YearMonth, WEEKDAY_LABELS};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut picker = DatePicker::new();

    if let [year, month] = args.as_slice() {
        let year: i32 = year.parse().expect("Usage: ./month [<YEAR> <MONTH>]");
        let month: i32 = month.parse().expect("Usage: ./month [<YEAR> <MONTH>]");
        let target = YearMonth::new(year, month.saturating_sub(1))
            .unwrap_or_else(|err| panic!("{err}"));

        while picker.state().visible() < target {
            picker.go_to_next_month();
        }

        while picker.state().visible() > target {
            picker.go_to_prev_month();
        }
    }

    println!(" - today: {}", SystemClock.today());
    println!(" - month: {}", picker.title());
    println!("---");
    println!(" {}", WEEKDAY_LABELS.map(|label| format!("{label:>3}")).join(" "));

    let cells: Vec<_> = picker.cells().unwrap_or_else(|err| panic!("{err}")).collect();

    for week in cells.chunks(7) {
        let line: Vec<_> = week
            .iter()
            .map(|view| {
                if view.today {
                    format!("[{:>2}]", view.day())
                } else if !view.is_selectable() {
                    format!(" {:>2}.", view.day())
                } else {
                    format!(" {:>2} ", view.day())
                }
            })
            .collect();

        println!("{}", line.join(""));
    }
}
