//! Host-supplied decoration views

use serde::{Deserialize, Serialize};

/// Opaque handle to a host view
pub type DecorationId = u64;

/// Host view placed around or on top of the grid
///
/// The controller only needs the height to reserve room for header and
/// footer views; the host owns the view itself.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    /// Host view handle
    pub id: DecorationId,
    /// Height reserved in the layout (px)
    pub height: f32,
}

impl Decoration {
    /// Create a decoration
    #[inline]
    pub const fn new(id: DecorationId, height: f32) -> Self {
        Self { id, height }
    }
}

/// Lazily queried decoration slot
///
/// `Unqueried` until first access; afterwards holds whatever the data
/// source answered (including "nothing") until invalidated.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) enum Cached<T> {
    #[default]
    Unqueried,
    Loaded(Option<T>),
}

impl<T: Copy> Cached<T> {
    /// Return the cached value, querying `load` on first access
    pub(crate) fn get_or_load(&mut self, load: impl FnOnce() -> Option<T>) -> Option<T> {
        match *self {
            Cached::Loaded(value) => value,
            Cached::Unqueried => {
                let value = load();
                *self = Cached::Loaded(value);
                value
            }
        }
    }

    pub(crate) fn invalidate(&mut self) {
        *self = Cached::Unqueried;
    }
}
