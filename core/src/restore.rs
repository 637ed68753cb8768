//! Restore orchestration: a snapshot plus live state becomes the
//! directive that resumes execution.
//!
//! RULE: Preparation is pure and wholly in-memory. The host observes no
//! effect until a fully prepared directive is applied, so a rejected or
//! failed restore can never leave the interpreter half-restored.

use crate::error::{SaveError, SaveResult};
use crate::live::LiveState;
use crate::merge::merge_stats;
use crate::snapshot::{Snapshot, CHECKPOINT_KEY, SCENE_NAME_KEY};
use crate::value::{clone_map, Value};

/// Resume flag forced into `temps`: the restored scene may re-offer
/// choices the player already used.
pub const CHOICE_REUSE_KEY: &str = "choice_reuse";
pub const CHOICE_REUSE_ALLOW: &str = "allow";

/// Resume flag forced into `temps`: marks the session as restored by
/// the user rather than reached by normal play.
pub const USER_RESTORED_KEY: &str = "choice_user_restored";

/// The two resume primitives a restoring host must expose. Both come
/// through one seam: a host that cannot clear and restore has nothing
/// to implement this with, and restore fails gracefully at the session
/// boundary instead.
pub trait RestoreHost {
    /// Blank the display before any restored content renders.
    fn clear_screen(&mut self);

    /// The interpreter's restore entry point. Re-renders as a side
    /// effect, which is why the screen is cleared first.
    fn restore_game(&mut self, state: Snapshot, secondary: Option<Value>, user_restored: bool);
}

/// A fully prepared resume.
#[derive(Debug, Clone, PartialEq)]
pub struct RestoreDirective {
    pub state: Snapshot,
    /// Always None; the restore entry point takes a secondary argument
    /// the save system never uses.
    pub secondary: Option<Value>,
    pub user_restored: bool,
}

impl RestoreDirective {
    /// Two-phase resume: clear first so no stale content flashes while
    /// the host re-renders inside `restore_game`.
    pub fn apply(self, host: &mut dyn RestoreHost) {
        host.clear_screen();
        host.restore_game(self.state, self.secondary, self.user_restored);
    }
}

/// Prepare `snapshot` for resume against the current live state.
///
/// Rejects an inadmissible snapshot and a snapshot whose scene cannot
/// be resolved against the live catalog. Otherwise: scene identity is
/// settled, the live bank is reconciled in, the resume flags are forced
/// into `temps`, and the position rewinds to the top of the scene. The
/// checkpoint label carried in stats is what the interpreter uses to
/// seek back to mid-scene.
pub fn prepare_restore(snapshot: &Snapshot, live: &LiveState) -> SaveResult<RestoreDirective> {
    if !snapshot.is_admissible() {
        return Err(SaveError::NotAdmissible {
            reason: "no scene name or catalog index",
        });
    }

    let mut state = snapshot.clone();

    let scene_name = match resolve_scene_name(&state, live) {
        Some(name) => name,
        None => return Err(SaveError::SceneUnresolved),
    };
    state
        .stats
        .insert(SCENE_NAME_KEY.to_string(), Value::Str(scene_name));

    // Reconcile against the live bank when one exists; a fresh install
    // with no bank restores the snapshot stats as-is.
    if let Some(bank) = &live.bank {
        state.stats = merge_stats(bank, &state.stats);
    }

    state.temps = clone_map(&state.temps);
    state.temps.insert(
        CHOICE_REUSE_KEY.to_string(),
        Value::Str(CHOICE_REUSE_ALLOW.to_string()),
    );
    state
        .temps
        .insert(USER_RESTORED_KEY.to_string(), Value::Bool(true));

    // Resume always enters at the top of the resolved scene.
    state.line_num = 0;
    state.indent = 0;
    if !state.stats.contains_key(CHECKPOINT_KEY) {
        state
            .stats
            .insert(CHECKPOINT_KEY.to_string(), Value::Str(String::new()));
    }

    Ok(RestoreDirective {
        state,
        secondary: None,
        user_restored: true,
    })
}

/// Scene identity at restore time. An explicit `sceneName` that
/// validates against the live catalog is authoritative; the catalog
/// ordinal is the fallback for snapshots that only carried an index;
/// a bare non-empty name is kept when no catalog is available to
/// validate either.
fn resolve_scene_name(snapshot: &Snapshot, live: &LiveState) -> Option<String> {
    let named = snapshot.scene_name();
    if let (Some(name), Some(catalog)) = (named, live.catalog.as_ref()) {
        if catalog.contains(name) {
            return Some(name.to_string());
        }
    }
    if let (Some(index), Some(catalog)) = (snapshot.current_scene_index, live.catalog.as_ref()) {
        if let Some(name) = catalog.name_at(index) {
            return Some(name.to_string());
        }
    }
    named.map(str::to_string)
}
