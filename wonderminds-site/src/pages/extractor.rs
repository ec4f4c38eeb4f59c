//! Partial content extraction from rendered pages

use std::borrow::Cow;

const START_MARKER: &str = "<!-- HTMX_PARTIAL_START -->";
const END_MARKER: &str = "<!-- HTMX_PARTIAL_END -->";

/// Extract the content between the partial markers
///
/// Returns the whole document when the markers are missing.
///
/// ```rust
/// use wonderminds_site::pages::extract_partial;
///
/// let html = "<html><nav>Menu</nav>
/// <!-- HTMX_PARTIAL_START -->
/// <h1>Programs</h1>
/// <!-- HTMX_PARTIAL_END -->
/// </html>";
///
/// assert_eq!(extract_partial(html), "<h1>Programs</h1>");
/// ```
#[must_use]
pub fn extract_partial(html: &str) -> Cow<'_, str> {
    if let Some(start_pos) = html.find(START_MARKER) {
        let content_start = start_pos + START_MARKER.len();
        if let Some(end_pos) = html[content_start..].find(END_MARKER) {
            return Cow::Borrowed(html[content_start..content_start + end_pos].trim());
        }
    }

    Cow::Borrowed(html)
}
