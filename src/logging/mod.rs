// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Logging setup.
//!
//! Hook diagnostics go to stderr only, one line per event, tagged so they
//! are easy to pick out of the host's output:
//!
//! ```text
//! [git-auto-tag] Created tag: 0.0.4
//! [git-auto-tag ERROR] git commit failed: ...
//! ```

use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Prefix for every log line.
pub const LOG_TAG: &str = "[git-auto-tag]";

/// Prefix for error-level lines.
pub const LOG_TAG_ERROR: &str = "[git-auto-tag ERROR]";

/// Event formatter producing `[git-auto-tag] message` lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct HookFormat;

impl<S, N> FormatEvent<S, N> for HookFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let prefix = if *event.metadata().level() == Level::ERROR {
            LOG_TAG_ERROR
        } else {
            LOG_TAG
        };
        write!(writer, "{} ", prefix)?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Directives when debug mode is on.
const DEBUG_DIRECTIVES: &str = "git_auto_tag=debug,warn";

/// Directives otherwise.
const DEFAULT_DIRECTIVES: &str = "git_auto_tag=info,warn";

/// Build the level filter. Only the debug flag widens it; `RUST_LOG` is
/// ignored so it can neither expose debug lines nor hide error lines.
pub fn filter(debug: bool) -> EnvFilter {
    EnvFilter::new(if debug {
        DEBUG_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    })
}

/// Install the global subscriber.
pub fn init(debug: bool) {
    tracing_subscriber::registry()
        .with(filter(debug))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .event_format(HookFormat),
        )
        .init();

    tracing::debug!("Hook started");
}
