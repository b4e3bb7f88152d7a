//! Serde models for the Doinsport planning response.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level planning payload (Hydra collection).
#[derive(Debug, Clone, Deserialize)]
pub struct PlanningResponse {
    /// One record per playground (court).
    #[serde(rename = "hydra:member", default)]
    pub courts: Vec<CourtRecord>,
}

/// One playground with its activities.
#[derive(Debug, Clone, Deserialize)]
pub struct CourtRecord {
    /// Court name shown to the user.
    #[serde(default)]
    pub name: Option<String>,
    /// Activities offered on this court.
    #[serde(default)]
    pub activities: ActivityList,
}

/// The API serializes activities either as an array or as an object keyed
/// by activity id; both shapes occur in the wild.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ActivityList {
    /// Array form.
    Seq(Vec<ActivityRecord>),
    /// Object form, keyed by activity id.
    Map(BTreeMap<String, ActivityRecord>),
}

impl Default for ActivityList {
    fn default() -> Self {
        Self::Seq(Vec::new())
    }
}

impl ActivityList {
    /// Iterates activities regardless of the wire shape.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &ActivityRecord> + '_> {
        match self {
            Self::Seq(activities) => Box::new(activities.iter()),
            Self::Map(activities) => Box::new(activities.values()),
        }
    }
}

/// One activity with its bookable slots.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityRecord {
    /// Time slots for this activity.
    #[serde(default)]
    pub slots: Vec<SlotRecord>,
}

/// One time slot with its price options.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRecord {
    /// Start time, "HH:MM" or "HH:MM:SS".
    #[serde(default)]
    pub start_at: Option<String>,
    /// Price options; each carries its own duration.
    #[serde(default)]
    pub prices: Vec<PriceRecord>,
}

/// One price option for a slot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    /// Whether this option can currently be booked.
    #[serde(default)]
    pub bookable: bool,
    /// Session duration in seconds.
    #[serde(default)]
    pub duration: Option<u64>,
    /// Per-participant price in cents.
    #[serde(default)]
    pub price_per_participant: Option<u32>,
    /// Number of participants the price applies to.
    #[serde(default)]
    pub participant_count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_activities_as_array() {
        let json = r#"{
            "hydra:member": [{
                "name": "Padel 1",
                "activities": [{"slots": [{"startAt": "18:00", "prices": []}]}]
            }]
        }"#;
        let planning: PlanningResponse = serde_json::from_str(json).unwrap();
        assert_eq!(planning.courts.len(), 1);
        assert_eq!(planning.courts[0].activities.iter().count(), 1);
    }

    #[test]
    fn decodes_activities_as_object() {
        let json = r#"{
            "hydra:member": [{
                "name": "Padel 2",
                "activities": {
                    "ce8c306e": {"slots": []},
                    "11aa22bb": {"slots": []}
                }
            }]
        }"#;
        let planning: PlanningResponse = serde_json::from_str(json).unwrap();
        assert_eq!(planning.courts[0].activities.iter().count(), 2);
    }

    #[test]
    fn tolerates_missing_fields() {
        let planning: PlanningResponse = serde_json::from_str(r#"{"hydra:member": [{}]}"#).unwrap();
        let court = &planning.courts[0];
        assert!(court.name.is_none());
        assert_eq!(court.activities.iter().count(), 0);

        let empty: PlanningResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.courts.is_empty());
    }
}
