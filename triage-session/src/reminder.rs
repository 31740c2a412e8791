use serde::{Deserialize, Serialize};

/// Follow-up wound check reminder. Outlives a session reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub active: bool,
    pub time: String,
}

impl Reminder {
    pub fn in_hours(hours: u32) -> Self {
        let unit = if hours == 1 { "hour" } else { "hours" };
        Self {
            active: true,
            time: format!("Check wound in {hours} {unit}"),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_pluralises_hours() {
        assert_eq!(Reminder::in_hours(1).time, "Check wound in 1 hour");
        assert_eq!(Reminder::in_hours(24).time, "Check wound in 24 hours");
    }

    #[test]
    fn clear_deactivates() {
        let mut reminder = Reminder::in_hours(6);
        assert!(reminder.active);
        reminder.clear();
        assert_eq!(reminder, Reminder::default());
    }
}
