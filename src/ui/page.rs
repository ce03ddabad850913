// SPDX-License-Identifier: MPL-2.0
//! Static layout of the landing page.
//!
//! Every section has a fixed height, so the page position of each section
//! and of the elements watched for visibility (counters, feature cards, the
//! chart) is known without querying the renderer. Section views use the same
//! constants to size themselves.

use crate::config::ANCHOR_SCROLL_GAP;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::state::Span;

/// Id of the page scrollable, target of scroll operations.
pub const SCROLLABLE_ID: &str = "page-scrollable";

/// Page sections in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Hero,
    Features,
    Stats,
    Services,
    Faq,
    Contact,
    Footer,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::Features,
        Section::Stats,
        Section::Services,
        Section::Faq,
        Section::Contact,
        Section::Footer,
    ];

    /// Sections linked from the navbar menu.
    pub const NAVIGABLE: [Section; 6] = [
        Section::Hero,
        Section::Features,
        Section::Stats,
        Section::Services,
        Section::Faq,
        Section::Contact,
    ];

    #[must_use]
    pub fn height(self) -> f32 {
        match self {
            Section::Hero => sizing::HERO_HEIGHT,
            Section::Features => sizing::FEATURES_HEIGHT,
            Section::Stats => sizing::STATS_HEIGHT,
            Section::Services => sizing::SERVICES_HEIGHT,
            Section::Faq => sizing::FAQ_HEIGHT,
            Section::Contact => sizing::CONTACT_HEIGHT,
            Section::Footer => sizing::FOOTER_HEIGHT,
        }
    }

    /// Link target of the section, `None` for the footer.
    #[must_use]
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Section::Hero => Some("#hero"),
            Section::Features => Some("#features"),
            Section::Stats => Some("#stats"),
            Section::Services => Some("#services"),
            Section::Faq => Some("#faq"),
            Section::Contact => Some("#contact"),
            Section::Footer => None,
        }
    }

    /// i18n key of the navbar link.
    #[must_use]
    pub fn nav_label_key(self) -> &'static str {
        match self {
            Section::Hero => "nav-home",
            Section::Features => "nav-features",
            Section::Stats => "nav-stats",
            Section::Services => "nav-services",
            Section::Faq => "nav-faq",
            Section::Contact | Section::Footer => "nav-contact",
        }
    }

    #[must_use]
    pub fn from_anchor(href: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == Some(href))
    }

    /// Distance from the top of the page to the top of the section.
    #[must_use]
    pub fn top(self) -> f32 {
        Self::ALL
            .iter()
            .take_while(|section| **section != self)
            .map(|section| section.height())
            .sum()
    }

    #[must_use]
    pub fn span(self) -> Span {
        Span::new(self.top(), self.height())
    }
}

/// Total height of the page content.
#[must_use]
pub fn content_height() -> f32 {
    Section::ALL.iter().map(|section| section.height()).sum()
}

/// Largest scroll offset for a viewport `viewport_height` tall.
#[must_use]
pub fn max_offset(viewport_height: f32) -> f32 {
    (content_height() - viewport_height).max(0.0)
}

/// Scroll offset that brings the section linked by `href` just below the
/// navbar.
///
/// Returns `None` for the bare `#` link and for anchors that match no
/// section.
#[must_use]
pub fn anchor_target(href: &str, nav_height: f32) -> Option<f32> {
    if href == "#" {
        return None;
    }
    let section = Section::from_anchor(href)?;
    Some(section.top() - nav_height - ANCHOR_SCROLL_GAP)
}

/// Converts an absolute offset into the relative one scroll operations take,
/// clamping it to the scrollable range.
#[must_use]
pub fn relative_offset(offset: f32, viewport_height: f32) -> f32 {
    let max = max_offset(viewport_height);
    if max <= 0.0 {
        0.0
    } else {
        (offset / max).clamp(0.0, 1.0)
    }
}

// ============================================================================
// Element geometry inside sections
// ============================================================================

/// Height of a section heading block (title plus spacing).
pub const SECTION_HEADER_HEIGHT: f32 = 120.0;

/// Height of one feature card.
pub const FEATURE_CARD_HEIGHT: f32 = 300.0;

/// Feature cards per row.
pub const FEATURE_COLUMNS: usize = 3;

/// Height of the row of counters.
pub const COUNTER_ROW_HEIGHT: f32 = 140.0;

/// Height of the chart block (bars plus month labels).
pub const CHART_BLOCK_HEIGHT: f32 = sizing::CHART_HEIGHT + 2.0 * spacing::XL;

/// Span of the feature card at `index`.
#[must_use]
pub fn feature_card_span(index: usize) -> Span {
    let row = (index / FEATURE_COLUMNS) as f32;
    Span::new(
        Section::Features.top() + SECTION_HEADER_HEIGHT + row * (FEATURE_CARD_HEIGHT + spacing::LG),
        FEATURE_CARD_HEIGHT,
    )
}

/// Span shared by all counters (they sit on one row).
#[must_use]
pub fn counter_span() -> Span {
    Span::new(
        Section::Stats.top() + SECTION_HEADER_HEIGHT,
        COUNTER_ROW_HEIGHT,
    )
}

/// Span of the chart block below the counters.
#[must_use]
pub fn chart_span() -> Span {
    Span::new(
        counter_span().bottom() + spacing::XXL,
        CHART_BLOCK_HEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_laid_out_back_to_back() {
        assert_eq!(Section::Hero.top(), 0.0);
        for pair in Section::ALL.windows(2) {
            assert_eq!(pair[1].top(), pair[0].top() + pair[0].height());
        }
        assert_eq!(
            content_height(),
            Section::Footer.top() + Section::Footer.height()
        );
    }

    #[test]
    fn anchors_round_trip() {
        for section in Section::NAVIGABLE {
            let anchor = section.anchor().expect("navigable sections have anchors");
            assert_eq!(Section::from_anchor(anchor), Some(section));
        }
        assert_eq!(Section::from_anchor("#nowhere"), None);
    }

    #[test]
    fn anchor_target_leaves_room_for_navbar() {
        let target = anchor_target("#stats", 72.0).expect("known anchor");
        assert_eq!(target, Section::Stats.top() - 72.0 - 20.0);
    }

    #[test]
    fn bare_hash_and_unknown_anchor_do_nothing() {
        assert_eq!(anchor_target("#", 72.0), None);
        assert_eq!(anchor_target("#pricing", 72.0), None);
    }

    #[test]
    fn relative_offset_is_clamped() {
        let viewport = 800.0;
        assert_eq!(relative_offset(-92.0, viewport), 0.0);
        assert_eq!(relative_offset(max_offset(viewport), viewport), 1.0);
        assert_eq!(relative_offset(1e9, viewport), 1.0);
        assert_eq!(relative_offset(100.0, content_height() + 10.0), 0.0);
    }

    #[test]
    fn element_spans_fit_inside_their_sections() {
        let features = Section::Features.span();
        for index in 0..6 {
            let card = feature_card_span(index);
            assert!(card.top >= features.top && card.bottom() <= features.bottom());
        }

        let stats = Section::Stats.span();
        assert!(counter_span().top >= stats.top);
        assert!(chart_span().bottom() <= stats.bottom());
    }
}
