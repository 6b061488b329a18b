use std::{env, fs, process};

use chrono::Datelike;

use day_rules::calendar::{months_between, Month};
use day_rules::{Context, DateDb, RuleBook, EVERYONE};

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let path = args.next().expect("Usage: ./calendar <RULES_FILE> [PERSON]");
    let person = args.next().unwrap_or_else(|| EVERYONE.to_string());

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("could not read {path}: {err}");
            process::exit(1);
        }
    };

    let book = match text.parse::<RuleBook>() {
        Ok(book) => book,
        Err(errors) => {
            eprintln!("{errors}");
            process::exit(1);
        }
    };

    let ctx = Context::default();
    let mut db = DateDb::new().with_context(ctx);
    let count = book.select(&mut db, &person);
    let (min, max) = db.date_range();

    log::info!(
        person = person.as_str(), days = count;
        "Selection spans from {min:?} to {max:?}"
    );

    println!(" - people: {}", book.people().join(", "));
    println!(" - selected: {person} ({count} days)");

    for month in months_between(min, max) {
        println!("---");
        print_month(&db, &ctx, month);
    }
}

fn print_month(db: &DateDb, ctx: &Context, month: Month) {
    println!("{} {}", month.name(ctx.locale), month.year());

    let header: Vec<_> = ctx
        .weekdays()
        .map(|wday| format!(" {:>2} ", &wday.to_string()[..2]))
        .collect();

    println!("{}", header.join(""));

    for week in month.weeks(ctx.week_start) {
        let line: String = week
            .iter()
            .map(|cell| match cell {
                None => "    ".to_string(),
                Some(day) => {
                    let date = month
                        .first_day()
                        .with_day(*day)
                        .expect("day out of month");

                    if db.is_enabled(date) {
                        format!(" {day:>2} ")
                    } else {
                        format!("[{day:>2}]")
                    }
                }
            })
            .collect();

        println!("{}", line.trim_end());
    }
}
