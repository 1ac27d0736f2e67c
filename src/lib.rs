//! Lexical front end for MyLang: token model, lexer, AST shapes and the
//! token-printing REPL.

pub mod ast;
pub mod config;
pub mod error;
pub mod lexer;
pub mod repl;
pub mod token;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs the stderr tracing subscriber. Safe to call more than once.
pub fn init_tracing(filter: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
