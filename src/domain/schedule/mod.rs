use chrono::{DateTime, Datelike, NaiveTime, Utc};

use crate::domain::entities::Deal;
use crate::domain::value_objects::day_mask;

/// Whether a deal is active at `now`. Pure function of the deal and the
/// instant; nothing is stored, so no scheduler ever has to run.
///
/// All conditions AND together: the absolute validity window, the
/// day-of-week mask (0 and all-bits-set both mean unrestricted), and the
/// intraday window when both bounds are present.
pub fn is_active_at(deal: &Deal, now: DateTime<Utc>) -> bool {
    if let Some(from) = deal.valid_from {
        if now.timestamp() < from {
            return false;
        }
    }
    if let Some(until) = deal.valid_until {
        if now.timestamp() > until {
            return false;
        }
    }

    if !day_mask::contains(deal.valid_days, now.weekday()) {
        return false;
    }

    if let (Some(start), Some(end)) = (&deal.start_time, &deal.end_time) {
        // Lexicographic comparison of zero-padded 24-hour "HH:MM" strings is
        // correct for this representation; keep it that way.
        let current = now.format("%H:%M").to_string();
        if current < *start || current > *end {
            return false;
        }
    }

    true
}

/// Short human badge for when a deal runs out, or `None` when there is
/// nothing worth showing (no expiry at all, already past, or too far out).
pub fn time_remaining_text(deal: &Deal, now: DateTime<Utc>) -> Option<String> {
    if let (Some(end), true) = (&deal.end_time, is_active_at(deal, now)) {
        let end_today = NaiveTime::parse_from_str(end, "%H:%M").ok()?;
        let end_instant = now.date_naive().and_time(end_today).and_utc();
        let minutes = (end_instant - now).num_minutes();
        if minutes <= 0 {
            return None;
        }
        return Some(if minutes < 60 {
            format!("Ends in {}min", minutes)
        } else if minutes < 120 {
            format!("Ends in 1hr {}min", minutes - 60)
        } else {
            format!("Until {}", end)
        });
    }

    if let Some(until) = deal.valid_until {
        let hours = (until - now.timestamp()) / 3600;
        if hours <= 0 {
            return None;
        }
        if hours < 24 {
            return Some(format!("Ends in {}hr", hours));
        }
        if hours < 48 {
            return Some("Ends tomorrow".to_string());
        }
    }

    None
}

/// Human rendering of a day mask, Monday-first.
pub fn valid_days_text(mask: u8) -> String {
    if day_mask::is_unrestricted(mask) {
        return "Every day".to_string();
    }
    if mask == day_mask::WEEKDAYS {
        return "Weekdays".to_string();
    }
    if mask == day_mask::WEEKENDS {
        return "Weekends".to_string();
    }

    const NAMES: [(u8, &str); 7] = [
        (day_mask::MONDAY, "Mon"),
        (day_mask::TUESDAY, "Tue"),
        (day_mask::WEDNESDAY, "Wed"),
        (day_mask::THURSDAY, "Thu"),
        (day_mask::FRIDAY, "Fri"),
        (day_mask::SATURDAY, "Sat"),
        (day_mask::SUNDAY, "Sun"),
    ];

    NAMES
        .iter()
        .filter(|(bit, _)| mask & bit != 0)
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}
