//! # Example: observing_read
//!
//! Builds one subject, attaches both built-in reporters, and runs two passes:
//! one over a readable file and one over a file that does not exist.
//!
//! ## Flow
//! ```text
//! Subject::builder(cfg).with_observers([LifecycleReporter, ContentReporter])
//!     ├─► process(<readable>)     Start, Ready, Line*, Done
//!     ├─► println!("----")
//!     └─► process(<missing>)      Start, Failed
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example observing_read
//! cargo run --example observing_read -- Cargo.toml nope.txt
//! RUST_LOG=readwatch=debug cargo run --example observing_read
//! ```

use std::sync::Arc;

use readwatch::{Config, ContentReporter, LifecycleReporter, Observe, Subject};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let readable = args
        .next()
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/demos/observing_read.rs").into());
    let missing = args.next().unwrap_or_else(|| format!("{readable}.fail"));

    let observers: Vec<Arc<dyn Observe>> = vec![
        Arc::new(LifecycleReporter::new()),
        Arc::new(ContentReporter::new()),
    ];
    let subject = Subject::builder(Config::default())
        .with_observers(observers)
        .build();

    subject.process(&readable).await;
    println!("----------------------------------------");
    subject.process(&missing).await;

    Ok(())
}
