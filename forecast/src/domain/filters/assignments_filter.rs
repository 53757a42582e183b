use super::ForecastFilter;

/// Filter for the `/assignments` listing by project and person.
#[derive(Debug, Default, Clone)]
pub struct AssignmentsFilter {
    pub project_id: Option<i64>,
    pub person_id: Option<i64>,
}

impl AssignmentsFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_id(mut self, project_id: i64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn person_id(mut self, person_id: i64) -> Self {
        self.person_id = Some(person_id);
        self
    }
}

impl ForecastFilter for AssignmentsFilter {
    fn as_query(&self) -> String {
        let mut parts = Vec::new();
        if let Some(project_id) = self.project_id {
            parts.push(format!("project_id={}", project_id));
        }
        if let Some(person_id) = self.person_id {
            parts.push(format!("person_id={}", person_id));
        }
        parts.join("&")
    }
}
