//! # timeline-users
//!
//! Runs the timeline extractor over a saved response body and prints every
//! user it finds as JSON, one record per line.
//!
//! ## Usage
//!
//! ```bash
//! # Classify by the request URL the body came from
//! timeline-users 'https://x.com/i/api/graphql/abc123/HomeTimeline?variables=...' body.json
//!
//! # Or name the response kind directly, reading the body from stdin
//! timeline-users SearchTimeline < body.json
//!
//! # With debug logging
//! RUST_LOG=debug timeline-users TweetDetail body.json
//! ```
//!
//! ## Environment Variables
//!
//! - `TIMELINE_USERS_PRETTY`: pretty-print records
//! - `TIMELINE_USERS_LOG_CONTEXT`: bytes of JSON context kept in log lines
//! - `TIMELINE_USERS_FAIL_ON_REPORT`: exit non-zero if anything was reported

use log::{error, info, warn};
use std::io::{self, Read, Write};

use timeline_users::{
    ExtractError, LogReporter, OutputConfig, ResponseKind, TimelineExtractor, UserRecord,
};

fn print_usage() {
    eprintln!("Usage: timeline-users <request-url|response-kind> [body.json]");
    eprintln!();
    eprintln!("Supported response kinds:");
    for kind in ResponseKind::ALL {
        eprintln!("  {}", kind);
    }
}

/// Resolves the first argument, either a full request URL or a kind name.
fn resolve_kind(arg: &str) -> Result<Option<ResponseKind>, ExtractError> {
    if arg.contains("://") {
        ResponseKind::from_request_url(arg)
    } else {
        arg.parse().map(Some)
    }
}

fn read_body(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut body = String::new();
            io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}

fn write_record(
    out: &mut impl Write,
    record: &UserRecord,
    config: &OutputConfig,
) -> io::Result<()> {
    let line = if config.pretty {
        serde_json::to_string_pretty(record)?
    } else {
        serde_json::to_string(record)?
    };
    writeln!(out, "{}", line)
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(target) = args.first() else {
        print_usage();
        std::process::exit(2);
    };

    let kind = match resolve_kind(target)? {
        Some(kind) => kind,
        None => {
            warn!("{} is not a request we extract users from", target);
            return Ok(());
        }
    };

    let config = OutputConfig::from_env();
    let body = read_body(args.get(1).map(String::as_str))?;
    let mut document: serde_json::Value =
        serde_json::from_str(&body).map_err(ExtractError::from)?;

    info!(
        "Extracting users from {} response ({} bytes)",
        kind,
        body.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut write_failed = false;
    let sink = |record: UserRecord, config: &OutputConfig| {
        if write_failed {
            return;
        }
        if let Err(e) = write_record(&mut out, &record, config) {
            error!("Failed to write user record: {}", e);
            write_failed = true;
        }
    };

    let (result, reported) = {
        let mut extractor =
            TimelineExtractor::new(&config, sink, LogReporter::new(config.max_log_context));
        let result = extractor.process_response(kind, &mut document);
        (result, extractor.reporter().reported())
    };

    if write_failed {
        return Err("failed to write user records to stdout".into());
    }

    match result {
        Ok(count) => info!(
            "Extracted {} users, {} problems reported",
            count, reported
        ),
        Err(e) => {
            error!("Aborted {} response: {}", kind, e);
            return Err(e.into());
        }
    }

    if config.fail_on_report && reported > 0 {
        error!("{} recoverable problems reported", reported);
        std::process::exit(1);
    }

    Ok(())
}
