//! Feed decoding: raw XML into event records.

use tracing::{debug, warn};

use super::types::{Event, ParseError};
use crate::TARGET_FEED_DECODE;

/// Decode a feed document into events, in document order.
///
/// The document must be shaped `rss > channel > item*`; anything else fails
/// the whole decode. Items that fail field-level decoding (an unparseable
/// coordinate, a description with no status token) are skipped with a
/// warning and the remaining items are kept.
pub fn decode(xml: &str) -> Result<Vec<Event>, ParseError> {
    let doc = roxmltree::Document::parse(xml)?;

    let root = doc.root_element();
    if !root.has_tag_name("rss") {
        return Err(ParseError::MissingElement("rss"));
    }
    let channel = root
        .children()
        .find(|node| node.has_tag_name("channel"))
        .ok_or(ParseError::MissingElement("channel"))?;

    let mut events = Vec::new();
    for item in channel.children().filter(|node| node.has_tag_name("item")) {
        match parse_item(item) {
            Ok(event) => events.push(event),
            Err(err) => {
                warn!(
                    target: TARGET_FEED_DECODE,
                    "Skipping item {:?}: {}",
                    child_text(item, "title"),
                    err
                );
            }
        }
    }

    debug!(target: TARGET_FEED_DECODE, "Decoded {} events from feed", events.len());
    Ok(events)
}

/// Build one event from an `<item>` node.
fn parse_item(item: roxmltree::Node) -> Result<Event, ParseError> {
    let description = child_text(item, "description");
    let status = status_from_description(&description)?;

    Ok(Event {
        title: child_text(item, "title"),
        link: child_text(item, "link"),
        pub_date: child_text(item, "pubDate"),
        guid: child_text(item, "guid"),
        latitude: coordinate(item, "lat")?,
        longitude: coordinate(item, "long")?,
        status,
        description,
    })
}

/// Extract the status token from an item description.
///
/// The county writes the status as the second space-delimited word of the
/// description, with one trailing punctuation character:
///
/// ```
/// use blotter::feed::status_from_description;
///
/// assert_eq!(
///     status_from_description("Engine ONSCENE: Elm St & Main St").unwrap(),
///     "ONSCENE"
/// );
/// assert_eq!(
///     status_from_description("Ambulance WAITING, Culver Rd").unwrap(),
///     "WAITING"
/// );
/// ```
///
/// A description with fewer than two words carries no status and fails with
/// [`ParseError::NoStatusToken`]. The trailing character is stripped
/// unconditionally; this is coupled to the provider's formatting and will
/// mangle descriptions that do not follow it.
pub fn status_from_description(description: &str) -> Result<String, ParseError> {
    let token = description
        .split(' ')
        .nth(1)
        .ok_or_else(|| ParseError::NoStatusToken(description.to_string()))?;

    let mut status = token.to_string();
    status.pop();
    Ok(status)
}

/// Text of the first child element named `name`, or empty when absent.
fn child_text(item: roxmltree::Node, name: &str) -> String {
    item.children()
        .find(|node| node.has_tag_name(name))
        .and_then(|node| node.text())
        .unwrap_or_default()
        .to_string()
}

/// Decimal degrees from the child element named `name` (matched by local
/// name, so `geo:lat` is found as `lat`), or `None` when absent.
///
/// The county prefixes every coordinate with a sign character (`+43.15`,
/// `-77.60`); exactly one leading character is dropped before parsing.
fn coordinate(item: roxmltree::Node, name: &'static str) -> Result<Option<f64>, ParseError> {
    let Some(node) = item.children().find(|node| node.has_tag_name(name)) else {
        return Ok(None);
    };
    let raw = node.text().unwrap_or_default();

    let mut chars = raw.chars();
    chars.next(); // the sign prefix
    let value = chars
        .as_str()
        .parse::<f64>()
        .map_err(|source| ParseError::BadCoordinate {
            field: name,
            value: raw.to_string(),
            source,
        })?;

    Ok(Some(value))
}
