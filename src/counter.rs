//! Visitor Counter Model
//!
//! Display-state machine for the visitor counter widget. All DOM
//! concerns live in the component layer; this module owns the state
//! transitions and is plain Rust, testable off-wasm.

use crate::api::FetchError;

/// Mutually exclusive display states. Class, text and tooltip of the
/// counter element all derive from this, so no two visual markers can
/// coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Uninitialized,
    /// No endpoint configured; no network activity
    Placeholder,
    Loading,
    Loaded(u64),
    Error,
}

impl DisplayState {
    /// CSS marker for the display element, if any
    pub fn css_class(&self) -> &'static str {
        match self {
            DisplayState::Uninitialized => "",
            DisplayState::Placeholder => "counter-placeholder",
            DisplayState::Loading => "counter-loading",
            DisplayState::Loaded(_) => "counter-loaded",
            DisplayState::Error => "counter-error",
        }
    }

    pub fn text(&self) -> String {
        match self {
            DisplayState::Uninitialized => String::new(),
            DisplayState::Placeholder => "---".to_string(),
            DisplayState::Loading => "Loading...".to_string(),
            DisplayState::Loaded(count) => format_count(*count),
            DisplayState::Error => "N/A".to_string(),
        }
    }

    pub fn tooltip(&self) -> Option<&'static str> {
        match self {
            DisplayState::Error => Some("Unable to load visitor count"),
            _ => None,
        }
    }
}

/// Format a count with thousands separators (1234 -> "1,234")
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Handle for one in-flight fetch. Results only commit while their
/// ticket is still the latest one issued, so overlapping fetches
/// cannot clobber each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    token: u64,
    pub url: String,
}

/// Owned widget state: current display state, configured endpoint and
/// the fetch sequence counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterModel {
    state: DisplayState,
    endpoint: Option<String>,
    seq: u64,
}

impl CounterModel {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            state: DisplayState::Uninitialized,
            endpoint: normalize(endpoint),
            seq: 0,
        }
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Start a fetch attempt. Without an endpoint this settles into
    /// the placeholder state and issues no ticket; with one it moves
    /// to loading and hands back the ticket the transport should
    /// complete with.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        match &self.endpoint {
            None => {
                self.state = DisplayState::Placeholder;
                None
            }
            Some(url) => {
                self.seq += 1;
                self.state = DisplayState::Loading;
                Some(FetchTicket {
                    token: self.seq,
                    url: url.clone(),
                })
            }
        }
    }

    /// Apply a fetch outcome. Returns false (and changes nothing) if
    /// a newer fetch has been issued since this ticket.
    pub fn complete(&mut self, ticket: &FetchTicket, result: Result<u64, FetchError>) -> bool {
        if ticket.token != self.seq {
            return false;
        }
        self.state = match result {
            Ok(count) => DisplayState::Loaded(count),
            Err(_) => DisplayState::Error,
        };
        true
    }

    /// Replace the endpoint. A non-empty endpoint immediately starts
    /// a new fetch; an empty one clears the endpoint and leaves the
    /// current display state alone.
    pub fn set_endpoint(&mut self, endpoint: Option<String>) -> Option<FetchTicket> {
        self.endpoint = normalize(endpoint);
        match self.endpoint {
            Some(_) => self.begin_fetch(),
            None => None,
        }
    }
}

fn normalize(endpoint: Option<String>) -> Option<String> {
    endpoint.filter(|url| !url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(42), "42");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(1000000), "1,000,000");
        assert_eq!(format_count(12345678), "12,345,678");
    }

    #[test]
    fn test_no_endpoint_goes_to_placeholder_without_ticket() {
        let mut model = CounterModel::new(None);
        assert_eq!(model.state(), DisplayState::Uninitialized);
        assert!(model.begin_fetch().is_none());
        assert_eq!(model.state(), DisplayState::Placeholder);
        assert_eq!(model.state().text(), "---");
    }

    #[test]
    fn test_empty_endpoint_treated_as_unconfigured() {
        let mut model = CounterModel::new(Some(String::new()));
        assert!(model.begin_fetch().is_none());
        assert_eq!(model.state(), DisplayState::Placeholder);
    }

    #[test]
    fn test_successful_fetch() {
        let mut model = CounterModel::new(Some("https://example.test/counter".into()));
        let ticket = model.begin_fetch().unwrap();
        assert_eq!(model.state(), DisplayState::Loading);
        assert_eq!(ticket.url, "https://example.test/counter");

        assert!(model.complete(&ticket, Ok(42)));
        assert_eq!(model.state(), DisplayState::Loaded(42));
        assert_eq!(model.state().text(), "42");
        assert_eq!(model.state().css_class(), "counter-loaded");
    }

    #[test]
    fn test_failed_fetch_renders_na() {
        let mut model = CounterModel::new(Some("https://example.test/counter".into()));
        let ticket = model.begin_fetch().unwrap();
        assert!(model.complete(&ticket, Err(FetchError::Status(500))));
        assert_eq!(model.state(), DisplayState::Error);
        assert_eq!(model.state().text(), "N/A");
        assert_eq!(model.state().css_class(), "counter-error");
        assert!(model.state().tooltip().is_some());
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut model = CounterModel::new(Some("https://a.test/".into()));
        let first = model.begin_fetch().unwrap();
        let second = model.set_endpoint(Some("https://b.test/".into())).unwrap();

        // First fetch resolves after the second was issued: ignored
        assert!(!model.complete(&first, Ok(1)));
        assert_eq!(model.state(), DisplayState::Loading);

        assert!(model.complete(&second, Ok(2)));
        assert_eq!(model.state(), DisplayState::Loaded(2));

        // And a late arrival after commit changes nothing either
        assert!(!model.complete(&first, Err(FetchError::Status(500))));
        assert_eq!(model.state(), DisplayState::Loaded(2));
    }

    #[test]
    fn test_set_endpoint_refetches() {
        let mut model = CounterModel::new(None);
        model.begin_fetch();
        assert_eq!(model.state(), DisplayState::Placeholder);

        let ticket = model.set_endpoint(Some("https://example.test/counter".into()));
        assert!(ticket.is_some());
        assert_eq!(model.state(), DisplayState::Loading);
    }

    #[test]
    fn test_set_empty_endpoint_keeps_state() {
        let mut model = CounterModel::new(Some("https://example.test/counter".into()));
        let ticket = model.begin_fetch().unwrap();
        model.complete(&ticket, Ok(9));

        assert!(model.set_endpoint(None).is_none());
        assert_eq!(model.state(), DisplayState::Loaded(9));
    }

    #[test]
    fn test_exactly_one_marker_per_state() {
        let states = [
            DisplayState::Placeholder,
            DisplayState::Loading,
            DisplayState::Loaded(1),
            DisplayState::Error,
        ];
        for (i, a) in states.iter().enumerate() {
            assert!(!a.css_class().is_empty());
            for b in states.iter().skip(i + 1) {
                assert_ne!(a.css_class(), b.css_class());
            }
        }
    }
}
