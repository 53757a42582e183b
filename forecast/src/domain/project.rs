use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    /// Id of the Harvest project this one mirrors, when linked.
    #[serde(default)]
    pub harvest_id: Option<i64>,
    #[serde(default)]
    pub archived: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_unlinked_project() {
        let raw = r#"{"id": 11, "name": "Internal", "harvest_id": null}"#;
        let project: Project = serde_json::from_str(raw).unwrap();
        assert_eq!(project.name, "Internal");
        assert!(project.harvest_id.is_none());
        assert!(!project.archived);
    }
}
