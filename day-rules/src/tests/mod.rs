
fn sample() -> &'static str {
    include_str!("data/sample.txt")
}

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

/// Build a database from raw rules, applied in order.
#[macro_export]
macro_rules! db_with {
    ( $rules: expr $( , ctx = $ctx: expr )? $( , )? ) => {{
        use $crate::{DateDb, RuleBook};

        let book: RuleBook = $rules.parse().expect("invalid rules");
        #[allow(unused_mut)]
        let mut db = DateDb::new();
        $( db = db.with_context($ctx); )?

        for rule in book.rules() {
            db.apply_rule(rule);
        }

        db
    }};
}
