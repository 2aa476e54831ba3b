//! Logging for regform.
//!
//! The binary installs one [`tracing`] subscriber from
//! [`Settings`](crate::settings::Settings); form components log inside the
//! span returned by [`form_span`], so events carry the form's name.

use crate::settings::Settings;

/// Installs the global subscriber for the `regform` binary.
///
/// `settings.log_level` is an `EnvFilter` directive such as `"info"` or
/// `"regform_forms=debug"`; an unparsable directive falls back to `info`.
/// Debug settings print pretty multi-line events with file and line,
/// otherwise each event is one JSON object. Everything is written to stderr
/// since stdout carries the rendered HTML or submitted JSON.
///
/// Only the first call installs a subscriber.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = if settings.debug {
        builder
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
    } else {
        builder.json().try_init()
    };
    if installed.is_ok() {
        tracing::debug!(level = %settings.log_level, debug = settings.debug, "logging ready");
    }
}

/// Creates a tracing span for a form instance.
///
/// Enter this span while handling events so that every log entry emitted by
/// the form carries its name.
///
/// # Examples
///
/// ```
/// use regform_core::logging::form_span;
///
/// let span = form_span("registration");
/// let _guard = span.enter();
/// tracing::info!("handling event");
/// ```
pub fn form_span(form_name: &str) -> tracing::Span {
    tracing::info_span!("form", name = form_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_twice_is_harmless() {
        let settings = Settings::default();
        setup_logging(&settings);
        setup_logging(&settings);
    }

    #[test]
    fn test_setup_logging_bad_directive_falls_back() {
        let settings = Settings {
            debug: false,
            log_level: "not a [valid filter".to_string(),
            ..Settings::default()
        };
        setup_logging(&settings);
    }

    #[test]
    fn test_form_span_enter() {
        let span = form_span("registration");
        let _guard = span.enter();
        tracing::debug!("inside span");
    }
}
