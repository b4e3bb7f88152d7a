//! Field extraction from the calendar-widget markup.
//!
//! The widget answers with an HTML fragment of `btn-horaires` buttons. No
//! DOM is needed: the interesting fields sit in attributes and short text
//! nodes, so extraction is regex over the raw markup.

use std::sync::LazyLock;

use regex::Regex;

static BUTTON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<button\b[^>]*btn-horaires[^>]*>.*?</button>"#)
        .expect("valid button regex")
});

static DATA_HEURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data-heure\s*=\s*["']([^"']*)["']"#).expect("valid data-heure regex")
});

static ONCLICK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"onclick\s*=\s*"([^"]*)""#).expect("valid onclick regex"));

static ONCLICK_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"value='(\d+)'").expect("valid onclick value regex"));

static TEXT_MN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*mn").expect("valid minutes-marker regex"));

static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").expect("valid heading regex"));

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// One slot button's worth of raw fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSlotButton {
    /// Compact "HHMM" start token from the `data-heure` attribute.
    pub start_token: Option<String>,
    /// The `onclick` attribute, which embeds the duration as `value='90'`.
    pub onclick: Option<String>,
    /// Visible text with tags stripped and whitespace collapsed.
    pub text: String,
    /// Inner `<h1>` heading text, if present.
    pub heading: Option<String>,
}

/// Extracts every candidate button from the calendar markup.
pub fn extract_buttons(html: &str) -> Vec<RawSlotButton> {
    BUTTON_RE
        .find_iter(html)
        .map(|m| parse_button(m.as_str()))
        .collect()
}

fn parse_button(button_html: &str) -> RawSlotButton {
    let start_token = DATA_HEURE_RE
        .captures(button_html)
        .map(|c| c[1].to_string());
    let onclick = ONCLICK_RE.captures(button_html).map(|c| c[1].to_string());
    let heading = H1_RE.captures(button_html).map(|c| strip_tags(&c[1]));
    let text = strip_tags(button_html);

    RawSlotButton {
        start_token,
        onclick,
        text,
        heading,
    }
}

/// Recovers the slot duration in minutes for one button.
///
/// Preference order: the `value='<n>'` assignment in the onclick handler,
/// then a `<n> mn` marker in the visible text. Returns `None` when neither
/// yields a positive value — a slot with an unknown duration is unusable.
pub fn extract_duration_min(button: &RawSlotButton) -> Option<u32> {
    if let Some(onclick) = &button.onclick {
        if let Some(captures) = ONCLICK_VALUE_RE.captures(onclick) {
            if let Ok(minutes) = captures[1].parse::<u32>() {
                if minutes > 0 {
                    return Some(minutes);
                }
            }
        }
    }

    let captures = TEXT_MN_RE.captures(&button.text)?;
    captures[1].parse::<u32>().ok().filter(|&minutes| minutes > 0)
}

/// Removes markup and collapses whitespace, approximating rendered text.
fn strip_tags(fragment: &str) -> String {
    let without_tags = TAG_RE.replace_all(fragment, " ");
    without_tags.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <div class="calendrier">
          <button class="btn btn-horaires" data-heure="1400"
                  onclick="document.getElementById('duree').value='90';choosePop(this);">
            <h1>Terrain couvert</h1>
            <span>14:00</span>
          </button>
          <button class="btn btn-horaires" data-heure="1530">
            Cours libre 60 mn
          </button>
          <button class="btn autre" data-heure="1600">ignored</button>
        </div>
    "#;

    #[test]
    fn extracts_only_horaires_buttons() {
        let buttons = extract_buttons(SAMPLE);
        assert_eq!(buttons.len(), 2);
    }

    #[test]
    fn captures_start_token_and_heading() {
        let buttons = extract_buttons(SAMPLE);
        assert_eq!(buttons[0].start_token.as_deref(), Some("1400"));
        assert_eq!(buttons[0].heading.as_deref(), Some("Terrain couvert"));
        assert_eq!(buttons[1].start_token.as_deref(), Some("1530"));
        assert!(buttons[1].heading.is_none());
    }

    #[test]
    fn duration_from_onclick_wins() {
        let buttons = extract_buttons(SAMPLE);
        assert_eq!(extract_duration_min(&buttons[0]), Some(90));
    }

    #[test]
    fn duration_falls_back_to_minutes_marker() {
        let buttons = extract_buttons(SAMPLE);
        assert_eq!(extract_duration_min(&buttons[1]), Some(60));
    }

    #[test]
    fn zero_onclick_value_falls_through_to_text() {
        let button = RawSlotButton {
            start_token: Some("1400".to_string()),
            onclick: Some("value='0';".to_string()),
            text: "45 mn".to_string(),
            heading: None,
        };
        assert_eq!(extract_duration_min(&button), Some(45));
    }

    #[test]
    fn unknown_duration_is_none() {
        let button = RawSlotButton {
            start_token: Some("1400".to_string()),
            onclick: Some("choosePop(this);".to_string()),
            text: "Réserver".to_string(),
            heading: None,
        };
        assert_eq!(extract_duration_min(&button), None);
    }

    #[test]
    fn strip_tags_collapses_whitespace() {
        assert_eq!(
            strip_tags("<h1>Terrain\n   couvert</h1>  <b>n°2</b>"),
            "Terrain couvert n°2"
        );
    }
}
