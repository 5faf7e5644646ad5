//! Moderation Use Case
//!
//! Admin/moderator actions over existing content. These are the only paths
//! that change a verdict after creation; the classifier itself never
//! re-runs.

use kernel::id::UserId;

use crate::domain::entity::content::Content;
use crate::domain::value_object::viewer::Viewer;
use crate::error::{GateError, GateResult};

/// Dismiss a report: clear the verdict and unhide the content.
pub fn dismiss_flags(actor: &Viewer, content: &mut Content) -> GateResult<()> {
    if !actor.can_moderate() {
        return Err(GateError::Forbidden);
    }
    content.clear_flags();
    tracing::info!(
        content_id = %content.id,
        moderator = %actor.id,
        "Moderation flags dismissed"
    );
    Ok(())
}

/// Hide (ban) or unhide (reinstate) everything by one author.
///
/// Returns the number of entities touched.
pub fn set_author_hidden(
    actor: &Viewer,
    contents: &mut [Content],
    author: UserId,
    hidden: bool,
) -> GateResult<usize> {
    if !actor.can_moderate() {
        return Err(GateError::Forbidden);
    }
    let mut touched = 0;
    for content in contents.iter_mut().filter(|c| c.author_id == author) {
        content.set_hidden(hidden);
        touched += 1;
    }
    tracing::info!(
        author = %author,
        moderator = %actor.id,
        hidden,
        touched,
        "Author content visibility changed"
    );
    Ok(touched)
}
