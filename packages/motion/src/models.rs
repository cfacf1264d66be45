//! # User records shown under the menu
//!
//! [`UserRecord`] is a plain display payload. [`sample_users`] returns the
//! fixed list the screen renders; timestamps are expressed relative to the
//! `now` passed in so the list always reads "a few hours ago".

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    /// Image asset name, e.g. `"matt_damon.png"`.
    pub photo: String,
}

impl UserRecord {
    fn new(name: &str, description: &str, photo: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            description: description.trim().to_string(),
            timestamp,
            photo: photo.to_string(),
        }
    }

    /// Short age label such as `"2h 48m ago"`.
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        let age = now.signed_duration_since(self.timestamp);
        if age < Duration::minutes(1) {
            return "just now".to_string();
        }
        let hours = age.num_hours();
        let minutes = age.num_minutes() % 60;
        match (hours, minutes) {
            (0, m) => format!("{m}m ago"),
            (h, 0) => format!("{h}h ago"),
            (h, m) => format!("{h}h {m}m ago"),
        }
    }
}

fn hours_ago(now: DateTime<Utc>, hours: f64) -> DateTime<Utc> {
    now - Duration::seconds((hours * 3600.0).round() as i64)
}

/// The eight records listed on the screen, in display order.
pub fn sample_users(now: DateTime<Utc>) -> Vec<UserRecord> {
    [
        ("Mark Wahlberg", "Boogie Nights", "mark_wahlberg.png", 2.8),
        ("Daniel Craig", "Casino Royale", "daniel_craig.png", 2.4),
        ("Jennifer Aniston", "Horrible Bosses", "jennifer_aniston.png", 3.8),
        ("Nicolas Cage", "National Treasure", "nicolas_cage.png", 3.8),
        ("Halle Berry", " X-Men: Days of Future Past ", "halle_berry.png", 4.8),
        ("Samuel L. Jackson", "Avengers: Infinity War", "samuel_l_jackson.png", 3.8),
        ("Glenn Close", "The Girl With All The Gifts", "glenn_close.png", 3.8),
        ("Matt Damon", "Saving Private Ryan", "matt_damon.png", 2.0),
    ]
    .into_iter()
    .map(|(name, description, photo, hours)| {
        UserRecord::new(name, description, photo, hours_ago(now, hours))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_sample_users_fixed_order() {
        let users = sample_users(now());
        assert_eq!(users.len(), 8);
        let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Mark Wahlberg",
                "Daniel Craig",
                "Jennifer Aniston",
                "Nicolas Cage",
                "Halle Berry",
                "Samuel L. Jackson",
                "Glenn Close",
                "Matt Damon",
            ]
        );
        for user in &users {
            assert!(!user.name.is_empty());
            assert!(!user.photo.is_empty());
            assert!(user.timestamp < now());
        }
    }

    #[test]
    fn test_description_is_trimmed() {
        let users = sample_users(now());
        assert_eq!(users[4].description, "X-Men: Days of Future Past");
    }

    #[test]
    fn test_age_labels() {
        let now = now();
        let users = sample_users(now);
        assert_eq!(users[0].age_label(now), "2h 48m ago");
        assert_eq!(users[7].age_label(now), "2h ago");

        let fresh = UserRecord::new("A", "B", "a.png", now - Duration::seconds(30));
        assert_eq!(fresh.age_label(now), "just now");
        let recent = UserRecord::new("A", "B", "a.png", now - Duration::minutes(5));
        assert_eq!(recent.age_label(now), "5m ago");
    }
}
