//! Object model: stable identifiers and parent-child ownership.
//!
//! Widgets and their rendered subparts (the input field, the hint overlay,
//! the option list) are registered here so that containment questions like
//! "was this press inside the widget's subtree?" can be answered by ID
//! without holding references to the widgets themselves.

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for an object in the registry.
    ///
    /// `ObjectId`s are stable handles that remain valid even as the object
    /// tree changes. They become invalid when the object is destroyed.
    pub struct ObjectId;
}

impl ObjectId {
    /// Convert the ObjectId to a raw u64 value.
    ///
    /// This is useful for interop with external systems that need a numeric
    /// ID. The raw value can be converted back using [`ObjectId::from_raw`].
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Create an ObjectId from a raw u64 value.
    ///
    /// Note: This does not check if the ObjectId exists in the registry.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}

/// Trait for types that own a registered object identity.
pub trait Object {
    /// The registry ID of this object.
    fn object_id(&self) -> ObjectId;
}

/// Errors that can occur during object operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// The object ID is invalid or has been destroyed.
    InvalidObjectId,
    /// Attempted to set an object as its own parent/ancestor.
    CircularParentage,
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidObjectId => write!(f, "Invalid or destroyed object ID"),
            Self::CircularParentage => {
                write!(f, "Cannot set an object as its own parent or ancestor")
            }
        }
    }
}

impl std::error::Error for ObjectError {}

/// Result type for object operations.
pub type ObjectResult<T> = std::result::Result<T, ObjectError>;

/// Internal data stored in the registry for each object.
struct ObjectData {
    /// Human-readable name for debugging and lookup.
    name: String,
    /// The type ID of the concrete Object implementation.
    type_id: TypeId,
    /// The type name for debugging.
    type_name: &'static str,
    /// Parent object (if any).
    parent: Option<ObjectId>,
    /// Child objects (owned).
    children: Vec<ObjectId>,
}

impl ObjectData {
    fn new(type_id: TypeId, type_name: &'static str) -> Self {
        Self {
            name: String::new(),
            type_id,
            type_name,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// The central registry that manages objects and their relationships.
///
/// Uses arena-based storage via SlotMap for stable object IDs and efficient
/// parent-child relationship management.
///
/// # Related Types
///
/// - [`SharedObjectRegistry`] - Thread-safe wrapper for concurrent access
/// - [`ObjectId`] - Keys into this registry
pub struct ObjectRegistry {
    objects: SlotMap<ObjectId, ObjectData>,
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectRegistry {
    /// Create a new empty object registry.
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    /// Register a new object and return its ID.
    pub fn register<T: 'static>(&mut self) -> ObjectId {
        let data = ObjectData::new(TypeId::of::<T>(), std::any::type_name::<T>());
        let id = self.objects.insert(data);
        tracing::trace!(
            target: "typeahead_core::object",
            ?id,
            type_name = std::any::type_name::<T>(),
            "registered object"
        );
        id
    }

    /// Remove an object and all its children from the registry.
    ///
    /// Destroying a parent also destroys all of its descendants.
    pub fn destroy(&mut self, id: ObjectId) -> ObjectResult<()> {
        let descendants = self.collect_descendants(id)?;
        tracing::trace!(
            target: "typeahead_core::object",
            ?id,
            descendant_count = descendants.len(),
            "destroying object tree"
        );

        // Remove from parent's children list.
        if let Some(data) = self.objects.get(id) {
            if let Some(parent_id) = data.parent {
                if let Some(parent_data) = self.objects.get_mut(parent_id) {
                    parent_data.children.retain(|&child| child != id);
                }
            }
        }

        // Destroy all descendants (children first, then self).
        for child_id in descendants {
            self.objects.remove(child_id);
        }
        self.objects.remove(id);

        Ok(())
    }

    /// Collect all descendant IDs in depth-first order (children before parents).
    fn collect_descendants(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        let mut result = Vec::new();
        self.collect_descendants_recursive(id, &mut result)?;
        Ok(result)
    }

    fn collect_descendants_recursive(
        &self,
        id: ObjectId,
        result: &mut Vec<ObjectId>,
    ) -> ObjectResult<()> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;
        for &child_id in &data.children {
            self.collect_descendants_recursive(child_id, result)?;
            result.push(child_id);
        }
        Ok(())
    }

    /// Check if an object exists in the registry.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Set the parent of an object.
    ///
    /// This handles removing from the old parent and adding to the new parent.
    /// Passing `None` makes the object a root object.
    pub fn set_parent(&mut self, id: ObjectId, new_parent: Option<ObjectId>) -> ObjectResult<()> {
        if !self.objects.contains_key(id) {
            return Err(ObjectError::InvalidObjectId);
        }

        if let Some(parent_id) = new_parent {
            if !self.objects.contains_key(parent_id) {
                return Err(ObjectError::InvalidObjectId);
            }
            // Check for circular parentage.
            if self.is_descendant_of(parent_id, id)? {
                return Err(ObjectError::CircularParentage);
            }
        }

        // Remove from old parent.
        let old_parent = self.objects.get(id).and_then(|d| d.parent);
        if let Some(old_parent_id) = old_parent {
            if let Some(parent_data) = self.objects.get_mut(old_parent_id) {
                parent_data.children.retain(|&child| child != id);
            }
        }

        // Update the object's parent reference.
        if let Some(data) = self.objects.get_mut(id) {
            data.parent = new_parent;
        }

        // Add to new parent's children.
        if let Some(parent_id) = new_parent {
            if let Some(parent_data) = self.objects.get_mut(parent_id) {
                parent_data.children.push(id);
            }
        }

        Ok(())
    }

    /// Check if `id` is `ancestor` itself or one of its descendants.
    ///
    /// This is the containment query used for outside-press dismissal: a
    /// press target is "inside" a widget when this returns true for the
    /// widget's root.
    pub fn is_descendant_of(&self, id: ObjectId, ancestor: ObjectId) -> ObjectResult<bool> {
        if !self.objects.contains_key(ancestor) {
            return Err(ObjectError::InvalidObjectId);
        }
        let mut current = Some(id);
        while let Some(current_id) = current {
            if current_id == ancestor {
                return Ok(true);
            }
            current = self
                .objects
                .get(current_id)
                .ok_or(ObjectError::InvalidObjectId)?
                .parent;
        }
        Ok(false)
    }

    /// Get the parent of an object.
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.objects
            .get(id)
            .map(|d| d.parent)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the children of an object.
    pub fn children(&self, id: ObjectId) -> ObjectResult<&[ObjectId]> {
        self.objects
            .get(id)
            .map(|d| d.children.as_slice())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the object's name.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<&str> {
        self.objects
            .get(id)
            .map(|d| d.name.as_str())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Set the object's name.
    pub fn set_object_name(&mut self, id: ObjectId, name: String) -> ObjectResult<()> {
        self.objects
            .get_mut(id)
            .map(|d| d.name = name)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the type ID of an object.
    pub fn type_id(&self, id: ObjectId) -> ObjectResult<TypeId> {
        self.objects
            .get(id)
            .map(|d| d.type_id)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the type name of an object.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.objects
            .get(id)
            .map(|d| d.type_name)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(&self, id: ObjectId, name: &str) -> ObjectResult<Option<ObjectId>> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;
        for &child_id in &data.children {
            if let Some(child_data) = self.objects.get(child_id) {
                if child_data.name == name {
                    return Ok(Some(child_id));
                }
            }
        }
        Ok(None)
    }

    /// Get the number of registered objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Iterate over all objects that have no parent.
    pub fn root_objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects
            .iter()
            .filter(|(_, data)| data.parent.is_none())
            .map(|(id, _)| id)
    }
}

/// A thread-safe wrapper around [`ObjectRegistry`].
///
/// Cloning is cheap; clones share the same underlying registry. Accessor
/// methods return owned values so no lock is held across calls.
#[derive(Clone)]
pub struct SharedObjectRegistry {
    inner: Arc<RwLock<ObjectRegistry>>,
}

impl Default for SharedObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedObjectRegistry {
    /// Create a new empty shared registry.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ObjectRegistry::new())),
        }
    }

    /// Register a new object and return its ID.
    pub fn register<T: 'static>(&self) -> ObjectId {
        self.inner.write().register::<T>()
    }

    /// Remove an object and all its children from the registry.
    pub fn destroy(&self, id: ObjectId) -> ObjectResult<()> {
        self.inner.write().destroy(id)
    }

    /// Check if an object exists in the registry.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.inner.read().contains(id)
    }

    /// Set the parent of an object.
    pub fn set_parent(&self, id: ObjectId, parent: Option<ObjectId>) -> ObjectResult<()> {
        self.inner.write().set_parent(id, parent)
    }

    /// Get the parent of an object.
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.inner.read().parent(id)
    }

    /// Get the children of an object.
    pub fn children(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        self.inner.read().children(id).map(|c| c.to_vec())
    }

    /// Check if `id` is `ancestor` itself or one of its descendants.
    pub fn is_descendant_of(&self, id: ObjectId, ancestor: ObjectId) -> ObjectResult<bool> {
        self.inner.read().is_descendant_of(id, ancestor)
    }

    /// Get the object's name.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<String> {
        self.inner.read().object_name(id).map(str::to_string)
    }

    /// Set the object's name.
    pub fn set_object_name(&self, id: ObjectId, name: String) -> ObjectResult<()> {
        self.inner.write().set_object_name(id, name)
    }

    /// Get the type name of an object.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.inner.read().type_name(id)
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(&self, id: ObjectId, name: &str) -> ObjectResult<Option<ObjectId>> {
        self.inner.read().find_child_by_name(id, name)
    }

    /// Get the number of registered objects.
    pub fn object_count(&self) -> usize {
        self.inner.read().object_count()
    }
}

static_assertions::assert_impl_all!(SharedObjectRegistry: Send, Sync);
