use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::RotationAnchor;
use crate::models::Zone;

pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Signed count of weekdays in [0001-01-01, date). That epoch is a Monday, so each full
/// week contributes five and the leftover days cap at five.
fn weekdays_before(date: NaiveDate) -> i64 {
    let days = i64::from(date.num_days_from_ce()) - 1;
    5 * days.div_euclid(7) + days.rem_euclid(7).min(5)
}

/// Business days stepped over walking from `anchor` to `target`, one day at a time,
/// counting the day landed on. Positive going forward, negative going backward.
pub fn business_day_offset(anchor: NaiveDate, target: NaiveDate) -> i64 {
    if target >= anchor {
        // weekdays in (anchor, target], without stepping past `target`
        weekdays_before(target) + i64::from(is_business_day(target))
            - weekdays_before(anchor)
            - i64::from(is_business_day(anchor))
    } else {
        // weekdays in [target, anchor)
        weekdays_before(target) - weekdays_before(anchor)
    }
}

/// The rotating zone serviced on `date`. Weekends get a nominal zone as well; rejecting
/// them is up to the caller.
pub fn zone_for_date(anchor: &RotationAnchor, date: NaiveDate) -> Zone {
    if business_day_offset(anchor.date, date).rem_euclid(2) == 0 {
        anchor.zone
    } else {
        anchor.zone.opposite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn anchor() -> RotationAnchor {
        RotationAnchor {
            date: d(2025, 12, 2),
            zone: Zone::Pueblo,
        }
    }

    /// Day-by-day walk the closed form must agree with.
    fn walk_offset(anchor: NaiveDate, target: NaiveDate) -> i64 {
        let step = if target >= anchor { 1 } else { -1 };
        let mut current = anchor;
        let mut offset = 0;
        while current != target {
            current += Duration::days(step);
            if is_business_day(current) {
                offset += step;
            }
        }
        offset
    }

    #[test]
    fn test_anchor_is_its_own_zone() {
        assert_eq!(zone_for_date(&anchor(), d(2025, 12, 2)), Zone::Pueblo);
        assert_eq!(business_day_offset(d(2025, 12, 2), d(2025, 12, 2)), 0);
    }

    #[test]
    fn test_days_around_anchor() {
        let a = anchor();
        assert_eq!(zone_for_date(&a, d(2025, 12, 3)), Zone::Valley);
        assert_eq!(zone_for_date(&a, d(2025, 12, 4)), Zone::Pueblo);
        assert_eq!(zone_for_date(&a, d(2025, 12, 1)), Zone::Valley);
    }

    #[test]
    fn test_alternation_skips_weekends() {
        let a = anchor();
        // Fri 2025-12-05 and Mon 2025-12-08 are consecutive business days.
        let friday = zone_for_date(&a, d(2025, 12, 5));
        let monday = zone_for_date(&a, d(2025, 12, 8));
        assert_eq!(friday, Zone::Valley);
        assert_eq!(monday, friday.opposite());

        // Fri 2025-11-28 and Mon 2025-12-01 on the backward side.
        assert_eq!(zone_for_date(&a, d(2025, 11, 28)), Zone::Pueblo);
        assert_eq!(zone_for_date(&a, d(2025, 12, 1)), Zone::Valley);
    }

    #[test]
    fn test_consecutive_business_days_alternate() {
        let a = anchor();
        let mut prev: Option<Zone> = None;
        let mut day = d(2025, 9, 1);
        while day < d(2026, 4, 1) {
            if is_business_day(day) {
                let zone = zone_for_date(&a, day);
                if let Some(p) = prev {
                    assert_eq!(zone, p.opposite(), "{day}");
                }
                prev = Some(zone);
            }
            day += Duration::days(1);
        }
    }

    #[test]
    fn test_weekend_gets_nominal_zone() {
        let a = anchor();
        // Walking forward from Tue to Sat lands on Wed, Thu, Fri: three business days.
        assert_eq!(business_day_offset(a.date, d(2025, 12, 6)), 3);
        assert_eq!(zone_for_date(&a, d(2025, 12, 6)), Zone::Valley);
        assert_eq!(zone_for_date(&a, d(2025, 12, 7)), Zone::Valley);
    }

    #[test]
    fn test_closed_form_matches_walk() {
        // Anchors on a weekday and on both weekend days.
        for anchor_date in [d(2025, 12, 2), d(2025, 12, 6), d(2025, 12, 7), d(2024, 2, 29)] {
            let mut target = anchor_date - Duration::days(90);
            let end = anchor_date + Duration::days(90);
            while target <= end {
                assert_eq!(
                    business_day_offset(anchor_date, target),
                    walk_offset(anchor_date, target),
                    "anchor {anchor_date}, target {target}"
                );
                target += Duration::days(1);
            }
        }
    }

    #[test]
    fn test_far_dates() {
        let a = anchor();
        for target in [d(1999, 3, 15), d(2030, 7, 1), d(2000, 12, 31)] {
            let expected = if walk_offset(a.date, target).rem_euclid(2) == 0 {
                Zone::Pueblo
            } else {
                Zone::Valley
            };
            assert_eq!(zone_for_date(&a, target), expected, "{target}");
        }
    }

    #[test]
    fn test_extreme_dates_do_not_overflow() {
        let a = anchor();
        // Any seven-day span holds five business days, so parity flips.
        let week = Duration::days(7);
        assert_eq!(
            business_day_offset(a.date, NaiveDate::MAX),
            business_day_offset(a.date, NaiveDate::MAX - week) + 5
        );
        assert_eq!(
            business_day_offset(a.date, NaiveDate::MIN),
            business_day_offset(a.date, NaiveDate::MIN + week) - 5
        );
        assert_eq!(
            zone_for_date(&a, NaiveDate::MAX),
            zone_for_date(&a, NaiveDate::MAX - week).opposite()
        );
        assert_eq!(
            zone_for_date(&a, NaiveDate::MIN),
            zone_for_date(&a, NaiveDate::MIN + week).opposite()
        );
        assert_eq!(business_day_offset(NaiveDate::MAX, NaiveDate::MAX), 0);
        assert_eq!(
            business_day_offset(NaiveDate::MIN, NaiveDate::MAX),
            -business_day_offset(NaiveDate::MAX, NaiveDate::MIN)
                + i64::from(is_business_day(NaiveDate::MAX))
                - i64::from(is_business_day(NaiveDate::MIN))
        );
    }
}
