//! Ordered collection of content surfaces

use tracing::debug;
use crate::error::{ExposeError, Result};
use super::{ContentSurface, SurfaceId};

/// Ordered surface list
///
/// Order is insertion order and doubles as visual order. Removal compacts
/// indices, so every mutation invalidates previously computed geometry.
#[derive(Debug, Default)]
pub struct ContentRegistry {
    surfaces: Vec<ContentSurface>,
}

impl ContentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { surfaces: Vec::new() }
    }

    /// Insert a surface at the end (or at the front), returning its index
    pub fn insert(&mut self, surface: ContentSurface, at_end: bool) -> Result<usize> {
        if self.index_of(surface.id).is_some() {
            return Err(ExposeError::DuplicateSurface(surface.id));
        }

        let index = if at_end { self.surfaces.len() } else { 0 };
        debug!(id = surface.id, index, count = self.surfaces.len() + 1, "surface inserted");
        self.surfaces.insert(index, surface);
        self.reindex();
        Ok(index)
    }

    /// Remove the surface at `index`, compacting the indices after it
    pub fn remove(&mut self, index: usize) -> Result<ContentSurface> {
        if index >= self.surfaces.len() {
            return Err(ExposeError::out_of_range(index, self.surfaces.len()));
        }

        let mut surface = self.surfaces.remove(index);
        surface.detach();
        self.reindex();
        debug!(id = surface.id, index, count = self.surfaces.len(), "surface removed");
        Ok(surface)
    }

    /// Replace every surface at once, returning the previous ones detached
    ///
    /// Nothing changes when `surfaces` repeats an identity.
    pub fn replace(&mut self, surfaces: Vec<ContentSurface>) -> Result<Vec<ContentSurface>> {
        for (index, surface) in surfaces.iter().enumerate() {
            if surfaces[..index].iter().any(|s| s.id == surface.id) {
                return Err(ExposeError::DuplicateSurface(surface.id));
            }
        }

        let mut previous = std::mem::replace(&mut self.surfaces, surfaces);
        for surface in &mut previous {
            surface.detach();
        }
        self.reindex();
        debug!(count = self.surfaces.len(), replaced = previous.len(), "surfaces replaced");
        Ok(previous)
    }

    /// Get a surface by index
    #[inline]
    pub fn get(&self, index: usize) -> Option<&ContentSurface> {
        self.surfaces.get(index)
    }

    /// Get a mutable surface by index
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut ContentSurface> {
        self.surfaces.get_mut(index)
    }

    /// Get a surface by identity
    pub fn get_by_id(&self, id: SurfaceId) -> Option<&ContentSurface> {
        self.surfaces.iter().find(|s| s.id == id)
    }

    /// Get a mutable surface by identity
    pub fn get_by_id_mut(&mut self, id: SurfaceId) -> Option<&mut ContentSurface> {
        self.surfaces.iter_mut().find(|s| s.id == id)
    }

    /// Number of surfaces
    #[inline]
    pub fn count(&self) -> usize {
        self.surfaces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Index of a surface by identity
    pub fn index_of(&self, id: SurfaceId) -> Option<usize> {
        self.surfaces.iter().position(|s| s.id == id)
    }

    /// Iterate surfaces in slot order
    pub fn iter(&self) -> impl Iterator<Item = &ContentSurface> {
        self.surfaces.iter()
    }

    /// Iterate surfaces mutably in slot order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ContentSurface> {
        self.surfaces.iter_mut()
    }

    /// Surface identities in slot order
    pub fn ids(&self) -> Vec<SurfaceId> {
        self.surfaces.iter().map(|s| s.id).collect()
    }

    fn reindex(&mut self) {
        for (index, surface) in self.surfaces.iter_mut().enumerate() {
            surface.slot = Some(index);
        }
    }
}
