//! Version-stamped memoization of light class views.
//!
//! The cache is the only shared mutable resource in the crate. Its
//! contract:
//!
//! - `get` returns the cached view when `(key, current stamp)` matches,
//!   otherwise computes exactly once and installs the result
//! - concurrent requests for the *same* uncached entry collapse into a
//!   single computation; late arrivals wait and reuse the result
//! - readers of *unrelated* entries never block behind an in-flight
//!   computation (the map lock is held only for slot lookup)
//! - `invalidate` drops every entry owned by a unit, wholesale; views are
//!   never patched in place
//!
//! A caller may abandon a `get` at any point: the entry under
//! construction is not observable until installed, so no rollback exists.
//! Stale in-flight results lose to newer installs (last-writer-wins by
//! stamp).

use std::sync::Arc;

use parking_lot::{Condvar, Mutex};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::base::{DeclId, UnitId, VersionStamp};
use crate::light::LightClassView;
use crate::translate::{TranslationContext, ViewKey, translate_key, view_owner};

enum SlotState {
    Idle,
    Computing(VersionStamp),
    Ready(VersionStamp, Arc<LightClassView>),
}

struct Slot {
    unit: UnitId,
    state: Mutex<SlotState>,
    ready: Condvar,
}

/// Memoized `(declaration, version stamp) -> view` storage.
///
/// Owns every [`LightClassView`] it serves; consumers receive shared
/// read-only references.
#[derive(Default)]
pub struct LightClassCache {
    slots: Mutex<FxHashMap<ViewKey, Arc<Slot>>>,
}

impl LightClassCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached or freshly computed view owning `decl`.
    pub fn get(&self, ctx: &TranslationContext, decl: DeclId) -> Arc<LightClassView> {
        self.get_key(ctx, view_owner(ctx.graph, decl))
    }

    /// The cached or freshly computed view for one key.
    pub fn get_key(&self, ctx: &TranslationContext, key: ViewKey) -> Arc<LightClassView> {
        let unit = key.unit(ctx.graph);
        let current = ctx.graph.unit_stamp(unit);

        let slot = {
            let mut slots = self.slots.lock();
            slots
                .entry(key)
                .or_insert_with(|| {
                    Arc::new(Slot {
                        unit,
                        state: Mutex::new(SlotState::Idle),
                        ready: Condvar::new(),
                    })
                })
                .clone()
        };

        let mut state = slot.state.lock();
        loop {
            match &*state {
                SlotState::Ready(stamp, view) if *stamp == current => {
                    trace!(?key, stamp = stamp.value(), "cache hit");
                    return view.clone();
                }
                SlotState::Computing(stamp) if *stamp == current => {
                    // Collapse: wait for the in-flight computation of the
                    // same (key, stamp) pair and reuse its result.
                    slot.ready.wait(&mut state);
                }
                _ => {
                    *state = SlotState::Computing(current);
                    drop(state);

                    let view = Arc::new(translate_key(ctx, key));

                    state = slot.state.lock();
                    let superseded = match &*state {
                        SlotState::Ready(stamp, _) | SlotState::Computing(stamp) => *stamp > current,
                        SlotState::Idle => false,
                    };
                    if superseded {
                        // A newer stamp was installed while we computed;
                        // our result still answers the caller's read.
                        debug!(?key, stamp = current.value(), "discarding superseded computation");
                        return view;
                    }
                    *state = SlotState::Ready(current, view.clone());
                    slot.ready.notify_all();
                    debug!(?key, stamp = current.value(), "view installed");
                    return view;
                }
            }
        }
    }

    /// Drop every entry owned by `unit`. The next `get` for any symbol in
    /// that scope recomputes; unrelated entries are untouched.
    pub fn invalidate(&self, unit: UnitId) {
        let mut slots = self.slots.lock();
        let before = slots.len();
        slots.retain(|_, slot| slot.unit != unit);
        debug!(
            unit = unit.index(),
            dropped = before - slots.len(),
            "invalidated unit scope"
        );
    }

    /// Drop everything.
    pub fn clear(&self) {
        self.slots.lock().clear();
    }

    /// Number of entries currently cached (ready or in flight).
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }
}
