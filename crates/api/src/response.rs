//! Shared response envelope types for API handlers.
//!
//! Single entities are returned bare. Lists use [`Page`], review decisions
//! use [`TransactionResponse`].

use rust_decimal::Decimal;
use serde::Serialize;
use tutorhub_core::types::DbId;
use tutorhub_db::models::credit_transaction::{CreditTransaction, StatusTotal};

/// Paginated list envelope: `{ data, total, limit, offset }`.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub data: Vec<T>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// `{ "transaction": ... }` envelope for approve/reject.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub transaction: CreditTransaction,
}

/// Balance plus per-status aggregates for `GET /users/{id}/credit-summary`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditSummary {
    pub user_id: DbId,
    pub credit_balance: Decimal,
    pub totals: Vec<StatusTotal>,
}
