use chrono::{Datelike, Days, NaiveDate};
use liturgy_core::{Celebration, ColorKey, LiturgyError, Result};

use crate::options::CalendarOptions;
use crate::seasons::{weekday_name, KeyDates};

/// Years the Gregorian computus is defined for.
pub const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 1583..=9999;

/// A source of liturgical calendar data.
///
/// The built-in implementation is [`GeneralRomanCalendar`]; tests and
/// downstream users can plug in their own.
pub trait CalendarProvider {
    /// Return every celebration of the given civil year, in calendar order.
    /// Days carrying multiple celebrations list the higher-ranking one
    /// first — consumers take the first match for a day.
    fn calendar_for(&self, year: i32) -> Result<Vec<Celebration>>;
}

/// The General Roman Calendar: seasons plus the principal solemnities and
/// feasts.  The full sanctoral cycle (memorials of individual saints) is out
/// of scope; those days surface as seasonal weekdays.
#[derive(Debug, Clone, Default)]
pub struct GeneralRomanCalendar {
    options: CalendarOptions,
}

impl GeneralRomanCalendar {
    pub fn new(options: CalendarOptions) -> Self {
        Self { options }
    }
}

impl CalendarProvider for GeneralRomanCalendar {
    fn calendar_for(&self, year: i32) -> Result<Vec<Celebration>> {
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(LiturgyError::Calendar(format!(
                "year {year} outside the Gregorian range {}..={}",
                SUPPORTED_YEARS.start(),
                SUPPORTED_YEARS.end()
            )));
        }

        let key = KeyDates::for_year(year, &self.options);
        let mut celebrations = Vec::with_capacity(500);

        let jan_1 = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| LiturgyError::Calendar(format!("invalid year {year}")))?;

        let mut date = jan_1;
        while date.year() == year {
            if let Some((name, color)) = feast_on(date, &key) {
                celebrations.push(Celebration::with_color(
                    date.and_hms_opt(0, 0, 0).unwrap_or_default(),
                    name,
                    color.as_str(),
                ));
            }
            celebrations.push(seasonal_day(date, &key));
            date = date + Days::new(1);
        }

        Ok(celebrations)
    }
}

/// The solemnity or feast celebrated on `date`, if any.
fn feast_on(date: NaiveDate, key: &KeyDates) -> Option<(&'static str, ColorKey)> {
    use ColorKey::{Purple, Red, Rose, White};

    // Movable feasts first: an anchor date always outranks a fixed one.
    let movable: [(NaiveDate, &'static str, ColorKey); 15] = [
        (key.epiphany, "Epiphany of the Lord", White),
        (key.baptism, "Baptism of the Lord", White),
        (key.ash_wednesday, "Ash Wednesday", Purple),
        (key.laetare, "Laetare Sunday", Rose),
        (key.palm_sunday, "Palm Sunday", Red),
        (key.holy_thursday, "Holy Thursday", White),
        (key.good_friday, "Good Friday", Red),
        (key.easter, "Easter Sunday", White),
        (key.ascension, "Ascension of the Lord", White),
        (key.pentecost, "Pentecost Sunday", Red),
        (key.trinity, "Trinity Sunday", White),
        (key.corpus_christi, "Corpus Christi", White),
        (key.sacred_heart, "Sacred Heart of Jesus", White),
        (key.christ_the_king, "Christ the King", White),
        (key.gaudete, "Gaudete Sunday", Rose),
    ];
    if let Some(&(_, name, color)) = movable.iter().find(|(d, _, _)| *d == date) {
        return Some((name, color));
    }

    // Fixed-date feasts falling inside Holy Week or the Easter octave are
    // transferred in the real calendar; suppressing them keeps the paschal
    // colors intact without modelling the transfer target.
    if date >= key.palm_sunday && date <= key.easter + Days::new(7) {
        return None;
    }

    let fixed: [((u32, u32), &'static str, ColorKey); 14] = [
        ((1, 1), "Mary, Mother of God", White),
        ((3, 19), "Saint Joseph", White),
        ((3, 25), "Annunciation of the Lord", White),
        ((6, 24), "Nativity of John the Baptist", White),
        ((6, 29), "Saints Peter and Paul", Red),
        ((8, 6), "Transfiguration of the Lord", White),
        ((8, 15), "Assumption of Mary", White),
        ((9, 14), "Exaltation of the Holy Cross", Red),
        ((11, 1), "All Saints", White),
        ((11, 2), "All Souls", Purple),
        ((12, 8), "Immaculate Conception", White),
        ((12, 25), "Nativity of the Lord", White),
        ((12, 26), "Saint Stephen", Red),
        ((12, 28), "Holy Innocents", Red),
    ];
    fixed
        .iter()
        .find(|((m, d), _, _)| (*m, *d) == (date.month(), date.day()))
        .map(|&(_, name, color)| (name, color))
}

/// The plain seasonal record every day carries, e.g. `"Friday of Lent"`.
fn seasonal_day(date: NaiveDate, key: &KeyDates) -> Celebration {
    let season = key.season_on(date);
    Celebration::with_color(
        date.and_hms_opt(0, 0, 0).unwrap_or_default(),
        format!("{} of {}", weekday_name(date.weekday()), season.name()),
        season.color().as_str(),
    )
}
