//! Expense state - pure data structure with no I/O logic

use crate::models::{Expense, PaginatedResponse, Pagination};

/// Everything the UI observes about expenses.
///
/// `loading` and `error` are single fields shared by every operation, so
/// overlapping requests overwrite each other's values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseState {
    /// Current page, replaced wholesale on each list
    pub expenses: Vec<Expense>,
    /// Selected expense
    pub current_expense: Option<Expense>,
    pub loading: bool,
    /// Last error message
    pub error: Option<String>,
    pub pagination: Pagination,
}

impl ExpenseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a request as started
    pub fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Mark the request as settled
    pub fn finish_request(&mut self) {
        self.loading = false;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Replace list and pagination with a fresh page
    pub fn apply_page(&mut self, page: PaginatedResponse) {
        self.pagination = Pagination::from(&page);
        self.expenses = page.data;
    }

    pub fn select(&mut self, expense: Expense) {
        self.current_expense = Some(expense);
    }

    /// Put a newly created expense at the front of the list
    pub fn prepend(&mut self, expense: Expense) {
        self.expenses.insert(0, expense);
    }

    /// Swap in an updated expense wherever `id` is held locally.
    /// Only the first list match is replaced; no match leaves the list as is.
    pub fn replace(&mut self, id: i64, expense: &Expense) {
        if let Some(slot) = self.expenses.iter_mut().find(|e| e.id == id) {
            *slot = expense.clone();
        }
        if self.current_expense.as_ref().is_some_and(|e| e.id == id) {
            self.current_expense = Some(expense.clone());
        }
    }

    /// Drop every local copy of `id`
    pub fn remove(&mut self, id: i64) {
        self.expenses.retain(|e| e.id != id);
        if self.current_expense.as_ref().is_some_and(|e| e.id == id) {
            self.current_expense = None;
        }
    }
}
