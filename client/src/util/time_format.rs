//! Hour:minute rendering for message timestamps.
//!
//! In the browser the timestamp is shown in the viewer's local time via the JS
//! `Date` object. Without a browser (SSR, tests) it is rendered in UTC. Input
//! that cannot be parsed is shown as received.

#[cfg(test)]
#[path = "time_format_test.rs"]
mod time_format_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

/// Format an RFC 3339 timestamp as a two-digit `HH:MM` string.
pub fn format_time(timestamp: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(local) = local_hour_minute(timestamp) {
            return local;
        }
    }
    utc_hour_minute(timestamp).unwrap_or_else(|| timestamp.to_owned())
}

fn utc_hour_minute(timestamp: &str) -> Option<String> {
    let parsed = OffsetDateTime::parse(timestamp.trim(), &Rfc3339).ok()?;
    let utc = parsed.to_offset(time::UtcOffset::UTC);
    utc.format(format_description!("[hour]:[minute]")).ok()
}

#[cfg(feature = "hydrate")]
fn local_hour_minute(timestamp: &str) -> Option<String> {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(timestamp.trim()));
    if date.get_time().is_nan() {
        return None;
    }
    Some(format!("{:02}:{:02}", date.get_hours(), date.get_minutes()))
}
