//! Rendered countdown output.

use std::fmt;
use std::time::Duration;

use super::remaining::RemainingDuration;

/// Unit labels in display order.
pub const LABELS: [&str; 4] = ["Hari", "Jam", "Menit", "Detik"];

/// CSS class that triggers the entrance animation.
pub const POP_IN_CLASS: &str = "pop-in";

/// Delay added per item index for the entrance cascade.
pub const ANIMATION_STEP: Duration = Duration::from_millis(100);

/// One-time staggered entrance applied on first paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceAnimation {
    pub class: &'static str,
    pub delay: Duration,
}

impl EntranceAnimation {
    /// Animation for the item at `index`.
    pub fn for_index(index: usize) -> Self {
        Self {
            class: POP_IN_CLASS,
            delay: ANIMATION_STEP * index as u32,
        }
    }

    /// Value for a CSS `animation-delay` property, e.g. `0.2s`.
    pub fn delay_css(&self) -> String {
        format!("{}s", self.delay.as_millis() as f64 / 1000.0)
    }
}

/// A single labeled number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountItem {
    /// Zero-padded to at least two digits
    pub value: String,
    pub label: &'static str,
    pub animation: Option<EntranceAnimation>,
}

/// Four labeled items: days, hours, minutes, seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownFrame {
    pub items: [CountItem; 4],
}

impl CountdownFrame {
    /// Build a frame without animation.
    pub fn from_remaining(remaining: &RemainingDuration) -> Self {
        let units = remaining.units();
        Self {
            items: std::array::from_fn(|i| CountItem {
                value: format!("{:02}", units[i]),
                label: LABELS[i],
                animation: None,
            }),
        }
    }

    /// The terminal all-zero frame.
    pub fn zero() -> Self {
        Self::from_remaining(&RemainingDuration::default())
    }

    /// Attach the staggered entrance animation to every item.
    pub fn with_entrance(mut self) -> Self {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.animation = Some(EntranceAnimation::for_index(index));
        }
        self
    }

    pub fn values(&self) -> [&str; 4] {
        std::array::from_fn(|i| self.items[i].value.as_str())
    }

    pub fn is_zero(&self) -> bool {
        self.items.iter().all(|item| item.value == "00")
    }

    pub fn is_animated(&self) -> bool {
        self.items.iter().any(|item| item.animation.is_some())
    }

    /// Markup matching the page's `.count-item` structure.
    pub fn to_html(&self) -> String {
        self.items
            .iter()
            .map(|item| match item.animation {
                Some(anim) => format!(
                    r#"<div class="count-item {}" style="animation-delay: {}"><span>{}</span><p>{}</p></div>"#,
                    anim.class,
                    anim.delay_css(),
                    item.value,
                    item.label
                ),
                None => format!(
                    r#"<div class="count-item"><span>{}</span><p>{}</p></div>"#,
                    item.value, item.label
                ),
            })
            .collect()
    }
}

impl fmt::Display for CountdownFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                write!(f, " / ")?;
            }
            write!(f, "{} {}", item.value, item.label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_and_labels() {
        let frame = CountdownFrame::from_remaining(&RemainingDuration::from_millis(90_061_000));
        assert_eq!(frame.to_string(), "01 Hari / 01 Jam / 01 Menit / 01 Detik");
        assert!(!frame.is_animated());
    }

    #[test]
    fn test_wide_days_not_truncated() {
        let remaining = RemainingDuration {
            days: 365,
            hours: 0,
            minutes: 0,
            seconds: 9,
        };
        let frame = CountdownFrame::from_remaining(&remaining);
        assert_eq!(frame.values(), ["365", "00", "00", "09"]);
    }

    #[test]
    fn test_zero_frame() {
        let frame = CountdownFrame::zero();
        assert!(frame.is_zero());
        assert_eq!(frame.to_string(), "00 Hari / 00 Jam / 00 Menit / 00 Detik");
    }

    #[test]
    fn test_entrance_delays() {
        let frame = CountdownFrame::zero().with_entrance();
        let delays: Vec<String> = frame
            .items
            .iter()
            .map(|i| i.animation.unwrap().delay_css())
            .collect();
        assert_eq!(delays, ["0s", "0.1s", "0.2s", "0.3s"]);
        assert!(frame.items.iter().all(|i| i.animation.unwrap().class == POP_IN_CLASS));
    }

    #[test]
    fn test_html_markup() {
        let html = CountdownFrame::zero().to_html();
        assert_eq!(html.matches(r#"<div class="count-item">"#).count(), 4);
        assert!(html.starts_with(r#"<div class="count-item"><span>00</span><p>Hari</p></div>"#));

        let animated = CountdownFrame::zero().with_entrance().to_html();
        assert!(animated.contains(r#"class="count-item pop-in" style="animation-delay: 0.3s""#));
    }
}
