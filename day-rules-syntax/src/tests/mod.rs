macro_rules! date {
    ( $date: expr ) => {{
        chrono::NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

pub(crate) use date;

mod dates;
mod display;
