// ABOUTME: Structured error types for storage collaborator operations
// ABOUTME: Provides domain-specific errors with context and conversion into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use super::{AppError, ErrorCode};

/// Errors raised by repository implementations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DatabaseError {
    /// No document matched the requested identifier
    #[error("{entity_type} with id {entity_id} not found")]
    NotFound {
        /// Kind of entity that was looked up
        entity_type: &'static str,
        /// Identifier used for the lookup
        entity_id: String,
    },

    /// A unique index rejected the write
    #[error("constraint violation: {context}")]
    ConstraintViolation {
        /// Which constraint and value collided
        context: String,
    },
}

impl DatabaseError {
    /// Whether this error means "no such document"
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        let code = match &error {
            DatabaseError::NotFound { .. } => ErrorCode::ResourceNotFound,
            DatabaseError::ConstraintViolation { .. } => ErrorCode::ResourceAlreadyExists,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
