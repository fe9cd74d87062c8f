// Object registry: owns all live game objects

use super::object::GameObject;
use super::EngineError;

/// Insertion-ordered collection of game objects with unique, non-empty names
///
/// Insertion order doubles as the deterministic scan order for collisions and
/// as the draw order. Lookups are linear scans, which is fine at the scale
/// this engine targets; the contract would not change with an indexed map.
#[derive(Debug, Default)]
pub struct Registry {
    objects: Vec<GameObject>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Register an object
    ///
    /// Rejected without mutation when the name is empty or already taken.
    pub fn add(&mut self, object: GameObject) -> Result<(), EngineError> {
        if object.name().is_empty() {
            return Err(EngineError::EmptyName);
        }
        if self.contains(object.name()) {
            return Err(EngineError::DuplicateName(object.name().to_string()));
        }
        self.objects.push(object);
        Ok(())
    }

    /// Remove an object by name, returning it if present
    pub fn remove(&mut self, name: &str) -> Option<GameObject> {
        let index = self.objects.iter().position(|obj| obj.name() == name)?;
        Some(self.objects.remove(index))
    }

    /// Look an object up by name
    pub fn get_by_name(&self, name: &str) -> Result<&GameObject, EngineError> {
        self.objects
            .iter()
            .find(|obj| obj.name() == name)
            .ok_or_else(|| EngineError::NotFound(name.to_string()))
    }

    /// Look an object up by name, mutably
    pub fn get_by_name_mut(&mut self, name: &str) -> Result<&mut GameObject, EngineError> {
        self.objects
            .iter_mut()
            .find(|obj| obj.name() == name)
            .ok_or_else(|| EngineError::NotFound(name.to_string()))
    }

    /// Whether an object with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.objects.iter().any(|obj| obj.name() == name)
    }

    /// All objects, in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, GameObject> {
        self.objects.iter()
    }

    /// All objects, mutably, in insertion order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, GameObject> {
        self.objects.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
