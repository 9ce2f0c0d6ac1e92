use chrono::NaiveDate;

use super::HarvestQuery;

/// Date-range filter for `/time_entries`, optionally narrowed to one user.
pub struct TimeEntryQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub user_id: Option<i64>,
}

impl TimeEntryQuery {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from,
            to,
            user_id: None,
        }
    }

    pub fn with_user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

impl HarvestQuery for TimeEntryQuery {
    fn as_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("from", self.from.to_string()),
            ("to", self.to.to_string()),
        ];
        if let Some(user_id) = self.user_id {
            pairs.push(("user_id", user_id.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_dates_as_iso() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();

        let pairs = TimeEntryQuery::new(from, to).as_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("from", "2024-01-02".to_string()),
                ("to", "2024-01-09".to_string())
            ]
        );
    }

    #[test]
    fn includes_user_when_set() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let pairs = TimeEntryQuery::new(from, from).with_user(42).as_query_pairs();
        assert_eq!(pairs[2], ("user_id", "42".to_string()));
    }
}
