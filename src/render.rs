//! Rendering of the grouped incident report.

use chrono::Local;
use colored::{Color, Colorize};

use crate::feed::Event;

/// The three display buckets, in render order: status token to match,
/// printed header, color.
const BUCKETS: [(&str, &str, Color); 3] = [
    ("ONSCENE", "ON-SCENE:", Color::Green),
    ("DISPATCHED", "DISPATCHED:", Color::Yellow),
    ("WAITING", "WAITING:", Color::Red),
];

/// Render the report for one cycle.
///
/// Events are partitioned by exact status match into the three buckets; an
/// event with any other status appears nowhere.
pub fn render_report(events: &[Event], verbose: bool) -> String {
    let mut out = String::new();
    out.push('\n');

    for (status, header, color) in BUCKETS {
        out.push_str(&format!("{}\n", header.bold()));
        for event in events.iter().filter(|event| event.status == status) {
            out.push_str(&format!("{}\n", event.title.color(color)));
            out.push_str(&format!("    {}\n", event.pub_date.dimmed()));
            if verbose {
                render_detail(&mut out, event);
            }
        }
        out.push('\n');
    }

    out
}

/// Per-event detail lines shown in verbose mode.
fn render_detail(out: &mut String, event: &Event) {
    out.push_str(&format!("    {} {}\n", "URL:".dimmed(), event.link));
    out.push_str(&format!("    {} {}\n", "Desc:".dimmed(), event.description));
    out.push_str(&format!("    {} {}\n", "GUID:".dimmed(), event.guid));
    if let (Some(lat), Some(long)) = (event.latitude, event.longitude) {
        // Re-apply the sign prefixes the decoder stripped.
        out.push_str(&format!("    {} +{}, -{}\n", "GPS:".dimmed(), lat, long));
    }
}

/// The wall-clock stamp printed after each report.
pub fn timestamp_line() -> String {
    format!("Last Updated: {}", Local::now().format("%a %b %e %H:%M:%S %Y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(title: &str, status: &str) -> Event {
        Event {
            title: title.to_string(),
            link: format!("https://example.test/{}", title),
            pub_date: "Fri, 07 Aug 2026 14:02:11 GMT".to_string(),
            description: format!("Engine {}: Elm St", status),
            guid: "24-117204".to_string(),
            status: status.to_string(),
            latitude: Some(43.1566),
            longitude: Some(77.6088),
        }
    }

    #[test]
    fn partitions_events_into_matching_buckets() {
        colored::control::set_override(false);
        let events = [
            event("House Fire", "ONSCENE"),
            event("MVA", "DISPATCHED"),
            event("Alarm Activation", "WAITING"),
        ];
        let report = render_report(&events, false);

        let onscene = report.find("ON-SCENE:").unwrap();
        let dispatched = report.find("DISPATCHED:").unwrap();
        let waiting = report.find("WAITING:").unwrap();

        // Each title exactly once, between its own header and the next.
        assert_eq!(report.matches("House Fire").count(), 1);
        assert_eq!(report.matches("MVA").count(), 1);
        assert_eq!(report.matches("Alarm Activation").count(), 1);

        let fire = report.find("House Fire").unwrap();
        let mva = report.find("MVA").unwrap();
        let alarm = report.find("Alarm Activation").unwrap();
        assert!(onscene < fire && fire < dispatched);
        assert!(dispatched < mva && mva < waiting);
        assert!(waiting < alarm);
    }

    #[test]
    fn all_headers_appear_even_when_empty() {
        colored::control::set_override(false);
        let report = render_report(&[], false);
        assert!(report.contains("ON-SCENE:"));
        assert!(report.contains("DISPATCHED:"));
        assert!(report.contains("WAITING:"));
    }

    #[test]
    fn unknown_statuses_are_omitted() {
        colored::control::set_override(false);
        let report = render_report(&[event("Odd One", "CLEARED")], false);
        assert!(!report.contains("Odd One"));
    }

    #[test]
    fn verbose_mode_shows_detail_with_signed_coordinates() {
        colored::control::set_override(false);
        let report = render_report(&[event("House Fire", "ONSCENE")], true);
        assert!(report.contains("URL: https://example.test/House Fire"));
        assert!(report.contains("GUID: 24-117204"));
        assert!(report.contains("GPS: +43.1566, -77.6088"));
    }

    #[test]
    fn verbose_detail_omits_gps_when_coordinates_are_unset() {
        colored::control::set_override(false);
        let mut incomplete = event("House Fire", "ONSCENE");
        incomplete.latitude = None;
        let report = render_report(&[incomplete], true);
        assert!(!report.contains("GPS:"));
    }
}
