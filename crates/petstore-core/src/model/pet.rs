use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Pet - the sole entity of the system
///
/// A Pet is a flat record with no relationships to other rows. Its `id` is
/// assigned by the store at commit time and is immutable afterwards; a Pet
/// built in memory carries `None` until it has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Store-assigned primary key (None until the row is committed)
    pub id: Option<i64>,

    /// Free-form pet name
    pub name: String,

    /// Free-form species label (the seeder draws from a fixed vocabulary)
    pub species: String,
}

impl Pet {
    /// Create a new in-memory Pet with no assigned id
    ///
    /// # Arguments
    /// * `name` - Free-form pet name
    /// * `species` - Free-form species label
    ///
    /// # Returns
    /// A new Pet that has not been persisted yet
    pub fn new(name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            species: species.into(),
        }
    }

    /// Check whether the store has assigned an id to this Pet
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Dictionary view with exactly three keys: `id`, `name`, `species`
    ///
    /// `id` is JSON null for a Pet that has not been committed yet.
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "id": self.id,
            "name": self.name,
            "species": self.species,
        })
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Diagnostic form only; no consumer parses this.
        match self.id {
            Some(id) => write!(f, "<Pet {}, {}, {}>", id, self.name, self.species),
            None => write!(f, "<Pet ?, {}, {}>", self.name, self.species),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pet_has_no_id() {
        let pet = Pet::new("Fido", "Dog");

        assert_eq!(pet.id, None);
        assert_eq!(pet.name, "Fido");
        assert_eq!(pet.species, "Dog");
        assert!(!pet.is_persisted());
    }

    #[test]
    fn test_to_json_unpersisted() {
        let pet = Pet::new("Fido", "Dog");
        let value = pet.to_json();

        assert!(value["id"].is_null());
        assert_eq!(value["name"], "Fido");
        assert_eq!(value["species"], "Dog");
    }

    #[test]
    fn test_to_json_has_exactly_three_keys() {
        let pet = Pet::new("Whiskers", "Cat");
        let value = pet.to_json();

        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("name"));
        assert!(obj.contains_key("species"));
    }

    #[test]
    fn test_display_forms() {
        let mut pet = Pet::new("Fido", "Dog");
        assert_eq!(pet.to_string(), "<Pet ?, Fido, Dog>");

        pet.id = Some(7);
        assert_eq!(pet.to_string(), "<Pet 7, Fido, Dog>");
    }
}
