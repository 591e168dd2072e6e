use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LIMIT, DEFAULT_PAGE};

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    GET,
    POST,
    PATCH,
    DELETE,
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::DELETE => "DELETE",
        }
    }

    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::POST | HttpMethod::PATCH)
    }
}

/// A recorded expense. `id` is assigned by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    /// ISO date (`YYYY-MM-DD`)
    pub date: String,
    pub category: String,
}

/// Body of a create request. The server defaults `date` when omitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCreate {
    pub description: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub category: String,
}

impl ExpenseCreate {
    pub fn new(description: impl Into<String>, amount: f64, category: impl Into<String>) -> Self {
        ExpenseCreate {
            description: description.into(),
            amount,
            date: None,
            category: category.into(),
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Partial update. Only the fields that are set go over the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ExpenseUpdate {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.date.is_none()
            && self.category.is_none()
    }
}

/// One page of the server-side expense collection
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse {
    pub data: Vec<Expense>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

/// Pagination cursor kept by the store
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            total: 0,
            total_pages: 0,
        }
    }
}

impl From<&PaginatedResponse> for Pagination {
    fn from(response: &PaginatedResponse) -> Self {
        Pagination {
            page: response.page,
            limit: response.limit,
            total: response.total,
            total_pages: response.total_pages,
        }
    }
}

/// Optional filters for listing expenses
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub query: Option<String>,
    pub category: Option<String>,
}

impl QueryParams {
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Query string pairs in page, limit, query, category order.
    /// Zero and empty values are left out, same as missing ones.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page.filter(|p| *p != 0) {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit.filter(|l| *l != 0) {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            pairs.push(("query".to_string(), query.to_string()));
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("category".to_string(), category.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_only_present_fields() {
        let params = QueryParams::default().page(2).category("food");
        assert_eq!(
            params.to_query_pairs(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("category".to_string(), "food".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_skip_zero_and_empty() {
        let params = QueryParams {
            page: Some(0),
            limit: Some(0),
            query: Some(String::new()),
            category: None,
        };
        assert!(params.to_query_pairs().is_empty());
    }

    #[test]
    fn test_update_omits_unset_fields() {
        let update = ExpenseUpdate {
            amount: Some(50.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "amount": 50.0 }));
    }

    #[test]
    fn test_create_without_date() {
        let json = serde_json::to_value(ExpenseCreate::new("Café", 2.5, "comida")).unwrap();
        assert!(json.get("date").is_none());
        assert_eq!(json["category"], "comida");
    }

    #[test]
    fn test_paginated_response_camel_case() {
        let body = r#"{"data":[],"total":13,"page":2,"limit":5,"totalPages":3}"#;
        let response: PaginatedResponse = serde_json::from_str(body).unwrap();
        let pagination = Pagination::from(&response);
        assert_eq!(pagination.total_pages, 3);
        assert_eq!(pagination.total, 13);
    }

    #[test]
    fn test_pagination_default() {
        let p = Pagination::default();
        assert_eq!((p.page, p.limit, p.total, p.total_pages), (1, 10, 0, 0));
    }
}
