//! nrdeco: New Relic decorators for Go interfaces.
//!
//! Reads a Go file, finds the interface methods that take a
//! `context.Context`, and emits wrapper types that run each call inside a
//! New Relic segment.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use nrdeco_core::{Config, GoModResolver, default_dest, generate};
//!
//! let source = Path::new("domain/repository/user.go");
//! let bytes = generate(source, &default_dest(source), &Config::new(), &GoModResolver)?;
//! std::fs::write(default_dest(source), bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod imports;
pub mod model;
pub mod module;
pub mod qualify;
pub mod render;
pub mod resolve;
pub mod scan;
pub mod syntax;

pub use config::{Config, UntracedMethods};
pub use error::{Error, ResolveError, Result};
pub use generate::{NEWRELIC_PACKAGE, default_dest, generate, generate_from_str};
pub use model::{File, Interface, Method, Package, Value};
pub use module::{GoModResolver, Module, ModuleResolver};
