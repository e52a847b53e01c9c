//! Savings goal model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::GoalCategory;
use crate::common::{Displayable, Identifiable, NamedEntity};

/// A savings target. `current` starts at zero and only moves through the
/// explicit progress-update operation; `target` is positive by construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: Uuid,
    pub name: String,
    pub target: f64,
    pub current: f64,
    pub category: GoalCategory,
    #[serde(with = "deadline_serde", default)]
    pub deadline: Option<NaiveDate>,
}

impl Goal {
    pub fn new(
        name: impl Into<String>,
        target: f64,
        category: GoalCategory,
        deadline: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target,
            current: 0.0,
            category,
            deadline,
        }
    }
}

impl Identifiable for Goal {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Goal {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Goal {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.category)
    }
}

/// Persists the deadline as `YYYY-MM-DD`, with the empty string standing in
/// for "no deadline".
mod deadline_serde {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(&raw, FORMAT)
            .map(Some)
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_goal_starts_at_zero() {
        let goal = Goal::new("Trip", 1000.0, GoalCategory::Travel, None);
        assert_eq!(goal.current, 0.0);
    }

    #[test]
    fn missing_deadline_serializes_as_empty_string() {
        let goal = Goal::new("Trip", 1000.0, GoalCategory::Travel, None);
        let value = serde_json::to_value(&goal).unwrap();
        assert_eq!(value["deadline"], "");
    }

    #[test]
    fn deadline_round_trips() {
        let deadline = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let goal = Goal::new("Car", 500.0, GoalCategory::Car, Some(deadline));
        let json = serde_json::to_string(&goal).unwrap();
        let back: Goal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, goal);
        assert_eq!(back.deadline, Some(deadline));
    }

    #[test]
    fn entity_traits_expose_name_and_label() {
        let goal = Goal::new("Trip", 1000.0, GoalCategory::Travel, None);
        assert_eq!(NamedEntity::name(&goal), "Trip");
        assert_eq!(goal.display_label(), "Trip (Travel)");
        assert_eq!(Identifiable::id(&goal), goal.id);
    }

    #[test]
    fn empty_deadline_parses_as_none() {
        let raw = r#"{
            "id": "6f7c3a90-0000-0000-0000-000000000000",
            "name": "Emergency fund",
            "target": 2000.0,
            "current": 150.0,
            "category": "emergency",
            "deadline": ""
        }"#;
        let goal: Goal = serde_json::from_str(raw).unwrap();
        assert_eq!(goal.deadline, None);
        assert_eq!(goal.current, 150.0);
    }
}
