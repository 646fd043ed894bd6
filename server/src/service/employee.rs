use types::{Entry, Result, employee::Employee};

use super::EmployeeService;
use crate::latency::Op;

impl EmployeeService {
    /// Case-insensitive substring match on first name, last name or email.
    /// A blank query matches everyone.
    pub async fn search(&self, query: &str) -> Result<Vec<Entry<Employee>>> {
        self.pause(Op::Query).await;
        Ok(self.table.filter(|employee| employee.matches(query)).await)
    }
}

#[cfg(test)]
mod tests {
    use crate::{latency::Latency, service::Services, storage::Store};

    async fn names(query: &str) -> Vec<String> {
        let services = Services::new(&Store::seeded().unwrap(), Latency::none());
        services
            .employees
            .search(query)
            .await
            .unwrap()
            .iter()
            .map(|employee| employee.full_name())
            .collect()
    }

    #[tokio::test]
    async fn search_ignores_case() {
        assert_eq!(names("SARAH").await, ["Sarah Johnson"]);
    }

    #[tokio::test]
    async fn search_matches_email() {
        assert_eq!(names("david.wilson@").await, ["David Wilson"]);
    }

    #[tokio::test]
    async fn blank_query_returns_everyone() {
        assert_eq!(names("").await.len(), 8);
    }

    #[tokio::test]
    async fn no_match_is_empty() {
        assert!(names("zzz").await.is_empty());
    }
}
