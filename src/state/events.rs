/// Events listing, detail modal and the "host an event" form link

use url::Url;

use super::data::EventItem;
use super::overlay::{Overlay, OverlayManager};

pub const HOST_FORM_UNSET: &str = "Host form not configured. Please set host_form_url.";
pub const OPENING_FORM: &str = "Opening form…";
pub const CALENDAR_HINT: &str = "Use your calendar app to add this event.";

/// Query parameter carrying the event title for "Host Similar Event"
pub const EVENT_PARAM: &str = "event";

/// The fixed events programme
pub const EVENTS: &[EventItem] = &[
    EventItem {
        id: "dj-residency-01",
        title: "Luminary DJ Residency",
        date_label: "Fri • 10:00 PM — 2:00 AM",
        excerpt: "Weekly rooftop residency — neon beats, immersive lights and signature cocktails.",
        full_description: Some(
            "Luminary DJs spin progressive house and electronic sets with immersive lighting and curated cocktails. Perfect for nightlife lovers seeking high-energy rooftop vibes.",
        ),
        venue: Some("Rooftop Deck"),
        tag: Some("Nightlife"),
        image: Some("https://media.timeout.com/images/105347841/image.jpg"),
    },
    EventItem {
        id: "neon-glow-party",
        title: "Neon Glow Party",
        date_label: "Sat • 10:00 PM — Late",
        excerpt: "Glow-in-the-dark paint, pop-up performances, and bottle service options.",
        full_description: Some(
            "A neon-themed celebration with face-paint stations, interactive moments, and party popups. Dress bright — we provide the glow.",
        ),
        venue: Some("Main Lounge"),
        tag: Some("Party"),
        image: Some("https://th.bing.com/th/id/R.99e2925719ca3517ef3c54639f9074e8?rik=T1sjFWu5GWrNGQ&riu=http%3a%2f%2f2.bp.blogspot.com%2f-KYwQbB5Ah0k%2fVYigqPh7C6I%2fAAAAAAAACOQ%2f2eJpY1JZgMQ%2fs1600%2fglow-in-the-dark-neon-party-ideas-frostedeventscom-kids-birthday-party-teen-party-00322.jpg&ehk=y%2fFzGbaYCwPBRf2VxpSf4T%2bjFI5HKvZv51rVoLq4woY%3d&risl=&pid=ImgRaw&r=0"),
    },
    EventItem {
        id: "city-beats-afterhours",
        title: "City Beats — After Hours",
        date_label: "Sun • 11:00 PM — 2:00 AM",
        excerpt: "Intimate late-night sessions with select DJs and chill city views.",
        full_description: Some(
            "An intimate after-hours crowd with deep-house sets, select cocktails, and a relaxed rooftop atmosphere.",
        ),
        venue: Some("Rooftop Bar"),
        tag: Some("After Hours"),
        image: Some("https://cdn.5280.com/2022/11/Ophelias_Electric_Soapbox_concert_Sam-Silkworth-1536x1024.jpg"),
    },
];

pub fn find_event(id: &str) -> Option<&'static EventItem> {
    EVENTS.iter().find(|event| event.id == id)
}

/// Where the host form link should go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostFormTarget {
    /// No base URL configured; nothing to open
    NotConfigured,
    Open(String),
}

/// Resolve the host form URL.
///
/// Prefill pairs are set as query parameters when the base parses as a
/// URL; an unparsable base is opened verbatim.
pub fn host_form_target(base: &str, prefill: &[(&str, &str)]) -> HostFormTarget {
    if base.trim().is_empty() {
        return HostFormTarget::NotConfigured;
    }

    match Url::parse(base) {
        Ok(mut url) => {
            for (key, value) in prefill {
                set_query_param(&mut url, key, value);
            }
            HostFormTarget::Open(url.to_string())
        }
        Err(err) => {
            tracing::debug!("host form URL does not parse ({err}); opening as-is");
            HostFormTarget::Open(base.to_string())
        }
    }
}

/// Set `key` to `value`, dropping any existing values for that key
fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(key, value);
}

/// Events screen state: which event's detail modal is open
#[derive(Debug, Default)]
pub struct EventBoard {
    selected: Option<&'static EventItem>,
}

impl EventBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &'static [EventItem] {
        EVENTS
    }

    pub fn selected(&self) -> Option<&'static EventItem> {
        self.selected
    }

    /// Open the detail modal for an event id
    pub fn open(&mut self, id: &str, overlays: &mut OverlayManager) -> bool {
        let Some(event) = find_event(id) else {
            tracing::warn!("unknown event id {id}");
            return false;
        };

        self.selected = Some(event);
        overlays.acquire(Overlay::EventDetails);
        true
    }

    pub fn close(&mut self, overlays: &mut OverlayManager) {
        self.selected = None;
        overlays.release(Overlay::EventDetails);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_are_unique() {
        let mut ids: Vec<_> = EVENTS.iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), EVENTS.len());
    }

    #[test]
    fn test_unset_base_is_not_configured() {
        assert_eq!(host_form_target("", &[]), HostFormTarget::NotConfigured);
        assert_eq!(host_form_target("   ", &[("event", "x")]), HostFormTarget::NotConfigured);
    }

    #[test]
    fn test_prefill_appends_event_title() {
        let target = host_form_target(
            "https://docs.google.com/forms/d/e/abc/viewform",
            &[(EVENT_PARAM, "Luminary DJ Residency")],
        );

        let HostFormTarget::Open(opened) = target else {
            panic!("expected a URL");
        };
        let url = Url::parse(&opened).unwrap();
        assert_eq!(url.path(), "/forms/d/e/abc/viewform");
        assert_eq!(
            url.query_pairs().find(|(k, _)| k == EVENT_PARAM).map(|(_, v)| v.into_owned()),
            Some("Luminary DJ Residency".to_string())
        );
    }

    #[test]
    fn test_prefill_replaces_existing_value_and_keeps_others() {
        let target = host_form_target(
            "https://forms.example.com/f?usp=pp_url&event=old",
            &[(EVENT_PARAM, "Neon Glow Party")],
        );

        let HostFormTarget::Open(opened) = target else {
            panic!("expected a URL");
        };
        let url = Url::parse(&opened).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("usp".to_string(), "pp_url".to_string()),
                ("event".to_string(), "Neon Glow Party".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_prefill_opens_base() {
        assert_eq!(
            host_form_target("https://forms.example.com/f", &[]),
            HostFormTarget::Open("https://forms.example.com/f".to_string())
        );
    }

    #[test]
    fn test_unparsable_base_opens_raw_string() {
        assert_eq!(
            host_form_target("forms.example.com/host", &[(EVENT_PARAM, "x")]),
            HostFormTarget::Open("forms.example.com/host".to_string())
        );
        assert_eq!(
            host_form_target("  forms.example.com/host ", &[]),
            HostFormTarget::Open("  forms.example.com/host ".to_string())
        );
    }

    #[test]
    fn test_modal_restores_scroll_on_close() {
        let mut overlays = OverlayManager::new();
        let mut board = EventBoard::new();

        assert!(board.open("dj-residency-01", &mut overlays));
        assert_eq!(board.selected().map(|e| e.title), Some("Luminary DJ Residency"));
        assert!(overlays.is_locked());

        board.close(&mut overlays);
        assert_eq!(board.selected(), None);
        assert!(!overlays.is_locked());
    }

    #[test]
    fn test_unknown_event_does_not_lock() {
        let mut overlays = OverlayManager::new();
        let mut board = EventBoard::new();

        assert!(!board.open("nope", &mut overlays));
        assert!(!overlays.is_locked());
    }
}
