//! Feed Use Case
//!
//! Visibility filtering plus deterministic ordering.

use crate::domain::entity::content::Content;
use crate::domain::value_object::viewer::Viewer;

/// The feed a given viewer is allowed to see, newest first.
///
/// Hidden content stays in for elevated roles and for its author. Ordering
/// is reverse-chronological by id (time-ordered ids make this a total,
/// stable order); the source slice is never mutated.
pub fn visible_feed<'a>(content: &'a [Content], viewer: &Viewer) -> Vec<&'a Content> {
    let mut feed: Vec<&Content> = content
        .iter()
        .filter(|c| c.is_visible_to(viewer))
        .collect();
    feed.sort_by(|a, b| b.id.cmp(&a.id));
    feed
}
