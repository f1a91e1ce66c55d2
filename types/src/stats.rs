use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

/// Body of `GET /api/dashboard/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(deserialize_with = "count")]
    pub active_tickets: u64,
    #[serde(deserialize_with = "count")]
    pub resolved_today: u64,
    /// Free text, shown as sent (e.g. `"2 min"`).
    pub avg_response_time: String,
    /// Percentage in `0..=100`, shown with a trailing `%`.
    pub customer_satisfaction: f64,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            active_tickets: 0,
            resolved_today: 0,
            avg_response_time: "0 min".to_string(),
            customer_satisfaction: 0.0,
        }
    }
}

/// A non-negative whole number, also when the server sends it as `5.0`.
fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(n) = number.as_u64() {
        return Ok(n);
    }
    match number.as_f64() {
        Some(n) if n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64 => Ok(n as u64),
        _ => Err(D::Error::custom(format!(
            "expected a non-negative whole number, got {number}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_body() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"activeTickets":5,"resolvedToday":3,"avgResponseTime":"2 min","customerSatisfaction":92}"#,
        )
        .unwrap();

        assert_eq!(
            stats,
            DashboardStats {
                active_tickets: 5,
                resolved_today: 3,
                avg_response_time: "2 min".to_string(),
                customer_satisfaction: 92.0,
            }
        );
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(serde_json::from_str::<DashboardStats>(r#"{"activeTickets":5}"#).is_err());
    }

    #[test]
    fn accepts_whole_float_counts() {
        let body = r#"{"activeTickets":5.0,"resolvedToday":3,"avgResponseTime":"2 min","customerSatisfaction":92}"#;
        let stats: DashboardStats = serde_json::from_str(body).unwrap();
        assert_eq!(stats.active_tickets, 5);
    }

    #[test]
    fn rejects_fractional_counts() {
        let body = r#"{"activeTickets":5.5,"resolvedToday":3,"avgResponseTime":"2 min","customerSatisfaction":92}"#;
        assert!(serde_json::from_str::<DashboardStats>(body).is_err());
    }

    #[test]
    fn rejects_negative_counts() {
        let body = r#"{"activeTickets":-1,"resolvedToday":3,"avgResponseTime":"2 min","customerSatisfaction":92}"#;
        assert!(serde_json::from_str::<DashboardStats>(body).is_err());
    }
}
