//! Sandbox Entry Point
//!
//! Drives the policy gate against an in-memory content store, simulating
//! one busy session: posting, spamming into a lockout, re-authenticating,
//! and rendering feeds for different viewer roles.
//!
//! Uses `anyhow` for startup errors; gate-level denials surface as
//! `kernel::error::AppError`.

use std::collections::HashMap;

use gate::{
    ActionCategory, AppError, Content, Draft, GateConfig, GateSession, MutationGate, OptionExt,
    UserRole, Viewer, dismiss_flags, visible_feed,
};
use kernel::id::{Id, UserId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// In-memory content store; persistence is the caller's concern, so the
/// sandbox keeps everything in one Vec.
#[derive(Default)]
struct ContentStore {
    items: Vec<Content>,
}

impl ContentStore {
    fn insert(&mut self, content: Content) {
        self.items.push(content);
    }

    fn all(&self) -> &[Content] {
        &self.items
    }

    fn find_mut(&mut self, id: kernel::id::ContentId) -> Option<&mut Content> {
        self.items.iter_mut().find(|c| c.id == id)
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sandbox=info,gate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let gate = MutationGate::new(GateConfig::default());

    // One gate session per identity
    let author: UserId = Id::new();
    let stranger: UserId = Id::new();
    let moderator: UserId = Id::new();
    let mut sessions: HashMap<UserId, GateSession> = HashMap::new();
    sessions.insert(author, gate.new_session(author));
    sessions.insert(stranger, gate.new_session(stranger));

    let mut store = ContentStore::default();

    // Simulated clock, advanced manually between actions
    let mut now = chrono::Utc::now().timestamp_millis();

    // --- A normal day: two posts, one of them spammy -----------------------
    let session = sessions.get_mut(&author).expect("author session exists");

    let post = gate.submit(
        &mut *session,
        ActionCategory::Post,
        Draft::text("Shipping the new banner editor today!"),
        now,
    )?;
    let first_post_id = post.id;
    store.insert(post);

    now += 5_000;
    let spammy = gate.submit(
        &mut *session,
        ActionCategory::Post,
        Draft::media("https://cdn.example/rocket.png").with_text("CRYPTO GIVEAWAY, click fast"),
        now,
    )?;
    tracing::info!(
        flagged = spammy.is_flagged(),
        reason = spammy.flag_reason().unwrap_or("-"),
        "Second post went through moderation"
    );
    let spammy_id = spammy.id;
    store.insert(spammy);

    // --- The stranger likes the first post --------------------------------
    now += 2_000;
    let stranger_session = sessions.get_mut(&stranger).expect("stranger session exists");
    gate.authorize(stranger_session, ActionCategory::Like, now)?;
    store
        .find_mut(first_post_id)
        .ok_or_not_found("Post not found")?
        .record_like(true);

    // --- The author spams likes until the gate locks them out -------------
    let session = sessions.get_mut(&author).expect("author session exists");
    let mut denials = 0;
    for _ in 0..40 {
        now += 100;
        match gate.authorize(session, ActionCategory::Like, now) {
            Ok(()) => {}
            Err(err) => {
                denials += 1;
                let app_err: AppError = err.to_app_error();
                tracing::info!(denial = %app_err, "Gate denied the like");
                if app_err.is_terminal() {
                    break;
                }
            }
        }
    }
    tracing::info!(
        denials,
        status = ?session.violation_status(),
        "Like spam run finished"
    );

    // Locked sessions stay locked until re-authentication
    now += 1_000;
    assert!(
        gate.submit(
            &mut *session,
            ActionCategory::Comment,
            Draft::text("am I still locked?"),
            now
        )
        .is_err()
    );
    session.reset_violations();
    tracing::info!("Author signed out and back in, lock cleared");

    // --- Feeds for the three viewer kinds ---------------------------------
    now += 1_000;
    print_feed("stranger", &store, &Viewer::user(stranger));
    print_feed("author", &store, &Viewer::user(author));
    print_feed("moderator", &store, &Viewer::new(moderator, UserRole::Moderator));

    // --- A moderator dismisses the report on the spammy post --------------
    let mod_viewer = Viewer::new(moderator, UserRole::Moderator);
    if let Some(content) = store.find_mut(spammy_id) {
        dismiss_flags(&mod_viewer, content).map_err(|e| e.to_app_error())?;
    }
    print_feed("stranger after dismissal", &store, &Viewer::user(stranger));

    Ok(())
}

fn print_feed(label: &str, store: &ContentStore, viewer: &Viewer) {
    let feed = visible_feed(store.all(), viewer);
    let summary: Vec<serde_json::Value> = feed
        .iter()
        .map(|c| {
            serde_json::json!({
                "id": c.id.to_string(),
                "text": c.text,
                "likes": c.likes,
                "hidden": c.hidden,
                "flag_reason": c.flag_reason(),
            })
        })
        .collect();
    println!(
        "feed[{label}] = {}",
        serde_json::to_string_pretty(&summary).unwrap_or_default()
    );
}
