use chrono::{Datelike, Days, NaiveDate, Weekday};
use liturgy_core::ColorKey;

use crate::computus::easter_sunday;
use crate::options::CalendarOptions;

/// The liturgical season a given day falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Advent,
    Christmastide,
    OrdinaryTime,
    Lent,
    Eastertide,
}

impl Season {
    /// The season's default color, before any feast-level override.
    pub fn color(self) -> ColorKey {
        match self {
            Self::Advent | Self::Lent => ColorKey::Purple,
            Self::Christmastide | Self::Eastertide => ColorKey::White,
            Self::OrdinaryTime => ColorKey::Green,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Advent => "Advent",
            Self::Christmastide => "Christmastide",
            Self::OrdinaryTime => "Ordinary Time",
            Self::Lent => "Lent",
            Self::Eastertide => "Eastertide",
        }
    }
}

/// The movable and fixed anchor dates of one civil year.
///
/// A civil year straddles two liturgical years: January belongs to the
/// Christmastide that started the previous December, and late December
/// belongs to the next Advent.  All anchors here are expressed in the
/// requested civil year, which is exactly what per-day generation needs.
#[derive(Debug, Clone)]
pub struct KeyDates {
    pub epiphany:        NaiveDate,
    pub baptism:         NaiveDate,
    pub ash_wednesday:   NaiveDate,
    pub laetare:         NaiveDate,
    pub palm_sunday:     NaiveDate,
    pub holy_thursday:   NaiveDate,
    pub good_friday:     NaiveDate,
    pub easter:          NaiveDate,
    pub ascension:       NaiveDate,
    pub pentecost:       NaiveDate,
    pub trinity:         NaiveDate,
    pub corpus_christi:  NaiveDate,
    pub sacred_heart:    NaiveDate,
    pub christ_the_king: NaiveDate,
    pub advent_start:    NaiveDate,
    pub gaudete:         NaiveDate,
    pub christmas:       NaiveDate,
}

impl KeyDates {
    /// Compute every anchor date for `year`.  The caller has already
    /// validated the year against the Gregorian range.
    pub fn for_year(year: i32, options: &CalendarOptions) -> Self {
        let easter = easter_sunday(year);
        let christmas = ymd(year, 12, 25);

        let epiphany = if options.epiphany_on_sunday {
            // The Sunday between Jan 2 and Jan 8.
            sunday_on_or_after(ymd(year, 1, 2))
        } else {
            ymd(year, 1, 6)
        };

        let ascension = if options.ascension_on_sunday {
            easter + Days::new(42)
        } else {
            easter + Days::new(39)
        };

        let trinity = easter + Days::new(56);
        let corpus_christi = if options.corpus_christi_on_sunday {
            trinity + Days::new(7)
        } else {
            trinity + Days::new(4)
        };

        let advent_start = sunday_strictly_before(christmas) - Days::new(21);

        Self {
            epiphany,
            baptism: sunday_on_or_after(epiphany + Days::new(1)),
            ash_wednesday: easter - Days::new(46),
            laetare: easter - Days::new(21),
            palm_sunday: easter - Days::new(7),
            holy_thursday: easter - Days::new(3),
            good_friday: easter - Days::new(2),
            easter,
            ascension,
            pentecost: easter + Days::new(49),
            trinity,
            corpus_christi,
            sacred_heart: easter + Days::new(68),
            christ_the_king: advent_start - Days::new(7),
            advent_start,
            gaudete: advent_start + Days::new(14),
            christmas,
        }
    }

    /// The season `date` falls in, for a date within this object's year.
    pub fn season_on(&self, date: NaiveDate) -> Season {
        if date <= self.baptism {
            Season::Christmastide
        } else if date < self.ash_wednesday {
            Season::OrdinaryTime
        } else if date < self.easter {
            Season::Lent
        } else if date <= self.pentecost {
            Season::Eastertide
        } else if date < self.advent_start {
            Season::OrdinaryTime
        } else if date < self.christmas {
            Season::Advent
        } else {
            Season::Christmastide
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    // Anchor dates are fixed month/day pairs that exist in every year.
    NaiveDate::from_ymd_opt(year, month, day).expect("fixed calendar date")
}

/// The Sunday on `date` or the next one after it.
fn sunday_on_or_after(date: NaiveDate) -> NaiveDate {
    let offset = (7 - date.weekday().num_days_from_sunday()) % 7;
    date + Days::new(u64::from(offset))
}

/// The last Sunday strictly before `date`.
fn sunday_strictly_before(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_sunday();
    let back = if back == 0 { 7 } else { back };
    date - Days::new(u64::from(back))
}

/// Full English weekday name, used for seasonal weekday records.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CalendarOptions;

    fn dates(year: i32) -> KeyDates {
        KeyDates::for_year(year, &CalendarOptions::default())
    }

    #[test]
    fn anchors_for_2024() {
        let k = dates(2024);
        assert_eq!(k.ash_wednesday, ymd(2024, 2, 14));
        assert_eq!(k.easter, ymd(2024, 3, 31));
        assert_eq!(k.pentecost, ymd(2024, 5, 19));
        assert_eq!(k.advent_start, ymd(2024, 12, 1));
        assert_eq!(k.baptism, ymd(2024, 1, 7));
        assert_eq!(k.christ_the_king, ymd(2024, 11, 24));
    }

    #[test]
    fn advent_start_when_christmas_is_a_sunday() {
        // Christmas 2022 fell on a Sunday; Advent started Nov 27.
        assert_eq!(dates(2022).advent_start, ymd(2022, 11, 27));
    }

    #[test]
    fn ascension_transfers_to_sunday() {
        let thursday = dates(2024).ascension;
        assert_eq!(thursday, ymd(2024, 5, 9));
        assert_eq!(thursday.weekday(), Weekday::Thu);

        let opts = CalendarOptions {
            ascension_on_sunday: true,
            ..Default::default()
        };
        let sunday = KeyDates::for_year(2024, &opts).ascension;
        assert_eq!(sunday, ymd(2024, 5, 12));
        assert_eq!(sunday.weekday(), Weekday::Sun);
    }

    #[test]
    fn epiphany_transfers_to_sunday() {
        let opts = CalendarOptions {
            epiphany_on_sunday: true,
            ..Default::default()
        };
        // 2024: the Sunday between Jan 2 and Jan 8 is Jan 7.
        assert_eq!(KeyDates::for_year(2024, &opts).epiphany, ymd(2024, 1, 7));
    }

    #[test]
    fn seasons_across_2024() {
        let k = dates(2024);
        assert_eq!(k.season_on(ymd(2024, 1, 3)), Season::Christmastide);
        assert_eq!(k.season_on(ymd(2024, 2, 1)), Season::OrdinaryTime);
        assert_eq!(k.season_on(ymd(2024, 3, 1)), Season::Lent);
        assert_eq!(k.season_on(ymd(2024, 4, 15)), Season::Eastertide);
        assert_eq!(k.season_on(ymd(2024, 6, 15)), Season::OrdinaryTime);
        assert_eq!(k.season_on(ymd(2024, 12, 1)), Season::Advent);
        assert_eq!(k.season_on(ymd(2024, 12, 26)), Season::Christmastide);
    }

    #[test]
    fn season_colors() {
        assert_eq!(Season::Advent.color(), ColorKey::Purple);
        assert_eq!(Season::Lent.color(), ColorKey::Purple);
        assert_eq!(Season::Christmastide.color(), ColorKey::White);
        assert_eq!(Season::Eastertide.color(), ColorKey::White);
        assert_eq!(Season::OrdinaryTime.color(), ColorKey::Green);
    }
}
