//! Structured error types shared across topo crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`TopoError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (vertex ids, counts, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the topo toolkit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", content = "detail")]
pub enum TopoError {
    /// A vertex identifier lies outside `0..vertex_count`.
    #[error("index out of range: {0}")]
    IndexOutOfRange(ErrorInfo),
    /// Rewiring was requested on a graph with fewer than two edges.
    #[error("empty graph: {0}")]
    EmptyGraph(ErrorInfo),
    /// The rewirer ran out of attempts before reaching the requested swap count.
    #[error("swap budget exhausted: {0}")]
    SwapBudgetExhausted(ErrorInfo),
    /// A vertex subset could not be mapped onto a dense index space.
    #[error("invalid subset: {0}")]
    InvalidSubset(ErrorInfo),
    /// Configuration parsing or validation errors.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Any other failure reported by a graph collaborator.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl TopoError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            TopoError::IndexOutOfRange(info)
            | TopoError::EmptyGraph(info)
            | TopoError::SwapBudgetExhausted(info)
            | TopoError::InvalidSubset(info)
            | TopoError::Config(info)
            | TopoError::Graph(info) => info,
        }
    }

    /// Builds the error returned when `vertex` does not fit a graph of `vertex_count` vertices.
    pub fn index_out_of_range(vertex: usize, vertex_count: usize) -> Self {
        TopoError::IndexOutOfRange(
            ErrorInfo::new("index-out-of-range", "vertex id is outside the graph")
                .with_context("vertex", vertex)
                .with_context("vertex_count", vertex_count),
        )
    }

    /// Adds a context entry to whichever payload this error carries.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        match self {
            TopoError::IndexOutOfRange(info) => {
                TopoError::IndexOutOfRange(info.with_context(key, value))
            }
            TopoError::EmptyGraph(info) => TopoError::EmptyGraph(info.with_context(key, value)),
            TopoError::SwapBudgetExhausted(info) => {
                TopoError::SwapBudgetExhausted(info.with_context(key, value))
            }
            TopoError::InvalidSubset(info) => {
                TopoError::InvalidSubset(info.with_context(key, value))
            }
            TopoError::Config(info) => TopoError::Config(info.with_context(key, value)),
            TopoError::Graph(info) => TopoError::Graph(info.with_context(key, value)),
        }
    }
}
