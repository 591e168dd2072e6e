//! Expense store - the six API operations and the state they keep

use serde::de::DeserializeOwned;
use tokio::sync::watch;

use crate::config::ClientConfig;
use crate::error::{ApiError, ExpenseError, Operation};
use crate::messages::{ApiRequest, NetworkResponse};
use crate::models::{
    Expense, ExpenseCreate, ExpenseUpdate, PaginatedResponse, Pagination, QueryParams,
};
use crate::network::{HttpTransport, Transport};
use crate::store::state::ExpenseState;

const EXPENSES_PATH: &str = "/expenses";
const SEARCH_PATH: &str = "/expenses/search";

/// Client for the expenses API that keeps the last completed response as
/// observable state.
///
/// Every operation sets `loading`, clears `error`, performs one request and
/// clears `loading` again whatever the outcome. Failures are stored in
/// `error` and returned to the caller, except for [`search_expenses`]
/// which reports "no matches" instead.
///
/// Operations take `&self` and may overlap. They then race on the shared
/// `loading` and `error` fields; the last one to settle wins.
///
/// [`search_expenses`]: ExpenseStore::search_expenses
pub struct ExpenseStore<T: Transport = HttpTransport> {
    transport: T,
    state: watch::Sender<ExpenseState>,
}

impl ExpenseStore<HttpTransport> {
    /// Store talking HTTP to `config.api_base`
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(HttpTransport::new(config.api_base.clone()))
    }
}

impl<T: Transport> ExpenseStore<T> {
    pub fn new(transport: T) -> Self {
        let (state, _) = watch::channel(ExpenseState::new());
        ExpenseStore { transport, state }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ============= Read-only projections =============

    /// Copy of the whole state
    pub fn snapshot(&self) -> ExpenseState {
        self.state.borrow().clone()
    }

    /// Live view; the receiver is notified after every state change
    pub fn subscribe(&self) -> watch::Receiver<ExpenseState> {
        self.state.subscribe()
    }

    pub fn expenses(&self) -> Vec<Expense> {
        self.state.borrow().expenses.clone()
    }

    pub fn current_expense(&self) -> Option<Expense> {
        self.state.borrow().current_expense.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn pagination(&self) -> Pagination {
        self.state.borrow().pagination
    }

    // ============= Operations =============

    /// List one page of expenses. Replaces `expenses` and `pagination`.
    pub async fn fetch_expenses(
        &self,
        params: &QueryParams,
    ) -> Result<PaginatedResponse, ExpenseError> {
        self.begin();
        let request = ApiRequest::get(EXPENSES_PATH).with_query(params.to_query_pairs());
        let result = self
            .fetch::<PaginatedResponse>(Operation::List, request)
            .await;
        self.settle(Operation::List, result, |state, page| {
            state.apply_page(page.clone())
        })
    }

    /// Fetch one expense and make it the current one
    pub async fn fetch_expense_by_id(&self, id: i64) -> Result<Expense, ExpenseError> {
        self.begin();
        let request = ApiRequest::get(expense_path(id));
        let result = self.fetch::<Expense>(Operation::GetById, request).await;
        self.settle(Operation::GetById, result, |state, expense| {
            state.select(expense.clone())
        })
    }

    /// Create an expense and put it at the front of `expenses`
    pub async fn create_expense(&self, data: &ExpenseCreate) -> Result<Expense, ExpenseError> {
        self.begin();
        let result = match encode(Operation::Create, ApiRequest::post(EXPENSES_PATH, data)) {
            Ok(request) => self.fetch::<Expense>(Operation::Create, request).await,
            Err(err) => Err(err),
        };
        self.settle(Operation::Create, result, |state, expense| {
            state.prepend(expense.clone())
        })
    }

    /// Patch an expense. Local copies with the same id are replaced; when
    /// there are none the local state is left alone and the server's
    /// version is still returned.
    pub async fn update_expense(
        &self,
        id: i64,
        data: &ExpenseUpdate,
    ) -> Result<Expense, ExpenseError> {
        self.begin();
        let result = match encode(Operation::Update, ApiRequest::patch(expense_path(id), data)) {
            Ok(request) => self.fetch::<Expense>(Operation::Update, request).await,
            Err(err) => Err(err),
        };
        self.settle(Operation::Update, result, |state, expense| {
            state.replace(id, expense)
        })
    }

    /// Delete an expense and drop every local copy of it
    pub async fn delete_expense(&self, id: i64) -> Result<(), ExpenseError> {
        self.begin();
        let request = ApiRequest::delete(expense_path(id));
        let result = self.send(Operation::Delete, request).await.map(|_| ());
        self.settle(Operation::Delete, result, |state, _| state.remove(id))
    }

    /// Free-text search. Blank queries return nothing without touching the
    /// network. Failures are recorded in `error` but come back as an empty
    /// result. Does not change the list, pagination or selection.
    pub async fn search_expenses(&self, query: &str) -> Vec<Expense> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        self.begin();
        let request = ApiRequest::get(SEARCH_PATH)
            .with_query(vec![("query".to_string(), query.to_string())]);
        let result = self.fetch::<Vec<Expense>>(Operation::Search, request).await;
        self.settle(Operation::Search, result, |_, _| {})
            .unwrap_or_default()
    }

    // ============= Request lifecycle =============

    fn begin(&self) {
        self.state.send_modify(ExpenseState::begin_request);
    }

    /// Record the outcome and clear `loading`
    fn settle<R>(
        &self,
        operation: Operation,
        result: Result<R, ExpenseError>,
        on_success: impl FnOnce(&mut ExpenseState, &R),
    ) -> Result<R, ExpenseError> {
        self.state.send_modify(|state| {
            match &result {
                Ok(value) => on_success(state, value),
                Err(err) => state.fail(err.message.clone()),
            }
            state.finish_request();
        });

        match &result {
            Ok(_) => tracing::debug!(operation = operation.as_str(), "Operation succeeded"),
            Err(err) => tracing::warn!(
                operation = operation.as_str(),
                status = ?err.status(),
                error = %err.message,
                "Operation failed"
            ),
        }
        result
    }

    /// Send a request and return the body of a 2xx response
    async fn send(&self, operation: Operation, request: ApiRequest) -> Result<String, ExpenseError> {
        let method = request.method.as_str().to_string();
        let path = request.path.clone();

        match self.transport.execute(request).await {
            NetworkResponse::Success { body, .. } => Ok(body),
            NetworkResponse::Error {
                status: Some(status),
                message,
                ..
            } => Err(ExpenseError::new(
                operation,
                ApiError::Status {
                    method,
                    path,
                    status,
                    message,
                },
            )),
            NetworkResponse::Error {
                status: None,
                message,
                ..
            } => Err(ExpenseError::new(operation, ApiError::Transport(message))),
        }
    }

    /// Send a request and decode the JSON body
    async fn fetch<D: DeserializeOwned>(
        &self,
        operation: Operation,
        request: ApiRequest,
    ) -> Result<D, ExpenseError> {
        let body = self.send(operation, request).await?;
        serde_json::from_str(&body)
            .map_err(|e| ExpenseError::new(operation, ApiError::Decode(e.to_string())))
    }
}

fn expense_path(id: i64) -> String {
    format!("{}/{}", EXPENSES_PATH, id)
}

fn encode(
    operation: Operation,
    request: serde_json::Result<ApiRequest>,
) -> Result<ApiRequest, ExpenseError> {
    request.map_err(|e| ExpenseError::new(operation, ApiError::Encode(e.to_string())))
}
