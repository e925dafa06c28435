//! Signature and forwarding-call rendering.

use crate::model::{Method, Params, results};

/// Identifier every capability parameter is bound to.
pub const CONTEXT_IDENT: &str = "ctx";

/// Positional name of the parameter at `index`.
fn positional(index: usize) -> String {
    format!("arg{index}")
}

impl Params {
    /// `ctx context.Context, arg1 string, arg2 ...int`
    pub fn signature(&self) -> String {
        self.0
            .iter()
            .enumerate()
            .map(|(i, param)| {
                if param.is_context() {
                    format!("{CONTEXT_IDENT} {param}")
                } else {
                    format!("{} {param}", positional(i))
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `ctx, arg1, arg2...`
    pub fn call(&self) -> String {
        self.0
            .iter()
            .enumerate()
            .map(|(i, param)| {
                if param.is_context() {
                    CONTEXT_IDENT.to_string()
                } else if param.is_variadic() {
                    format!("{}...", positional(i))
                } else {
                    positional(i)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Method {
    /// Declaration as it appears after `func (recv)`, with anonymous results:
    /// `Get(ctx context.Context, arg1 string) (*User, error)`.
    pub fn signature(&self) -> String {
        format!(
            "{}({}){}",
            self.name,
            self.params.signature(),
            results(&self.returns)
        )
    }

    /// Forwarding call expression: `Get(ctx, arg1)`.
    pub fn call(&self) -> String {
        format!("{}({})", self.name, self.params.call())
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
