use super::HarvestQuery;

/// Active-state filter for `/projects`.
pub struct ProjectQuery {
    pub is_active: bool,
}

impl HarvestQuery for ProjectQuery {
    fn as_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("is_active", self.is_active.to_string())]
    }
}
