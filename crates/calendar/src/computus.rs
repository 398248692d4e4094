use chrono::NaiveDate;

/// Calculate the date of Easter Sunday for a Gregorian-calendar year using
/// the Meeus/Jones/Butcher algorithm.
///
/// The algorithm always lands in March or April, so the date construction
/// cannot fail for any year [`NaiveDate`] can represent.  Callers are
/// expected to have validated the year against the Gregorian range first
/// (the calendar did not exist before 1583).
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("computus yields a valid March/April date")
}
