//! Packer reference entities fetched from the backend.

use serde::{Deserialize, Serialize};

/// One packing worker. Only `active` packers are offered as assignment
/// targets. Serializes back out unchanged for the client-local cache.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PackerRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub active: bool,
}

impl PackerRecord {
    /// Label shown in the selection dialog.
    pub fn choice_label(&self) -> String {
        format!("{} - {}", self.name, self.email)
    }
}

pub fn active_packers(records: Vec<PackerRecord>) -> Vec<PackerRecord> {
    records.into_iter().filter(|p| p.active).collect()
}

pub fn packer_by_id(packers: &[PackerRecord], id: i64) -> Option<&PackerRecord> {
    packers.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packer(id: i64, name: &str, active: bool) -> PackerRecord {
        PackerRecord {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            active,
        }
    }

    #[test]
    fn only_active_packers_are_offered() {
        let all = vec![packer(1, "Ana", true), packer(2, "Luis", false)];
        let active = active_packers(all);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, 1);
    }

    #[test]
    fn lookup_by_id() {
        let packers = vec![packer(1, "Ana", true), packer(2, "Luis", true)];
        assert_eq!(packer_by_id(&packers, 2).map(|p| p.name.as_str()), Some("Luis"));
        assert!(packer_by_id(&packers, 9).is_none());
    }

    #[test]
    fn choice_label_pairs_name_and_email() {
        assert_eq!(packer(1, "Ana", true).choice_label(), "Ana - ana@example.com");
    }

    #[test]
    fn cache_round_trips_through_json() {
        let packers = vec![packer(1, "Ana", true)];
        let payload = serde_json::to_string(&packers).unwrap();
        let restored: Vec<PackerRecord> = serde_json::from_str(&payload).unwrap();
        assert_eq!(restored, packers);
    }
}
