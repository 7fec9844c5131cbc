//! The bordered profile card.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                      Kartik Labhshetwar                       │
//! │                                                               │
//! │      Build ship grow.                                         │
//! │                                                               │
//! │      Twitter:   https://x.com/code_kartik                     │
//! │      ...                                                      │
//! │                                                               │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rows are styled first and padded second, so padding is computed on visible
//! width. Content is never wrapped: it must already fit in `width - 2` columns.

use crate::layout::{center, left_align};
use crate::profile::Profile;
use crate::styles::THEME;

/// Total card width, borders included.
pub const CARD_WIDTH: usize = 65;

/// Indent of left-aligned rows inside the border.
pub const LEFT_PADDING: usize = 6;

/// Column width the contact labels are padded to.
const LABEL_WIDTH: usize = 10;

const VERTICAL: &str = "│";
const HORIZONTAL: &str = "─";

/// Renders the card as a list of lines, top border first.
pub fn draw_frame(profile: &Profile, width: usize) -> Vec<String> {
    let inner = width.saturating_sub(2);
    let rule = HORIZONTAL.repeat(inner);
    let spacer = " ".repeat(inner);

    let mut rows = vec![
        center(&THEME.name.apply_to(&profile.name).to_string(), inner),
        spacer.clone(),
        left_align(
            &THEME.tagline.apply_to(&profile.tagline).to_string(),
            inner,
            LEFT_PADDING,
        ),
        spacer.clone(),
    ];

    for contact in &profile.contacts {
        let text = format!(
            "{} {}",
            THEME
                .label
                .apply_to(format!("{:<width$}", contact.label, width = LABEL_WIDTH)),
            THEME.accent(contact.accent).apply_to(&contact.url)
        );
        rows.push(left_align(&text, inner, LEFT_PADDING));
    }
    rows.push(spacer);

    let side = THEME.border.apply_to(VERTICAL).to_string();
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(THEME.border.apply_to(format!("┌{}┐", rule)).to_string());
    lines.extend(rows.into_iter().map(|row| format!("{side}{row}{side}")));
    lines.push(THEME.border.apply_to(format!("└{}┘", rule)).to_string());
    lines
}
