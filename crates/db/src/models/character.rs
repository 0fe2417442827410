//! Character entity model and DTOs.

use lore_core::character::{
    NAME_MAX_LEN, OCCUPATION_MAX_LEN, RACE_MAX_LEN, STATUS_MAX_LEN, TITLE_MAX_LEN,
};
use lore_core::types::DbId;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A character row from the `characters` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub race: Option<String>,
    pub occupation: Option<String>,
    /// NOT NULL in the database; defaults to `Alive`.
    pub status: String,
    pub notable_traits: Option<String>,
}

/// DTO for creating a new character.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateCharacter {
    #[validate(length(min = 1, max = NAME_MAX_LEN, message = "must be 1 to 100 characters"))]
    pub name: String,
    #[validate(length(max = TITLE_MAX_LEN, message = "must be at most 100 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = RACE_MAX_LEN, message = "must be at most 50 characters"))]
    pub race: Option<String>,
    #[validate(length(max = OCCUPATION_MAX_LEN, message = "must be at most 100 characters"))]
    pub occupation: Option<String>,
    /// Defaults to `Alive` if omitted or null.
    #[validate(length(max = STATUS_MAX_LEN, message = "must be at most 50 characters"))]
    pub status: Option<String>,
    pub notable_traits: Option<String>,
}

/// DTO for updating an existing character. All fields are optional.
///
/// `name` and `status` are never null, so `null` there means "unchanged".
/// The nullable columns use `Option<Option<_>>`: an absent key leaves the
/// stored value alone, an explicit `null` clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCharacter {
    #[validate(length(min = 1, max = NAME_MAX_LEN, message = "must be 1 to 100 characters"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = TITLE_MAX_LEN, message = "must be at most 100 characters"))]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = RACE_MAX_LEN, message = "must be at most 50 characters"))]
    pub race: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = OCCUPATION_MAX_LEN, message = "must be at most 100 characters"))]
    pub occupation: Option<Option<String>>,
    #[validate(length(max = STATUS_MAX_LEN, message = "must be at most 50 characters"))]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub notable_traits: Option<Option<String>>,
}

impl UpdateCharacter {
    /// True when the patch would not change any column.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.race.is_none()
            && self.occupation.is_none()
            && self.status.is_none()
            && self.notable_traits.is_none()
    }

    /// Overwrite every field present in the patch. `id` is never touched.
    pub fn apply_to(&self, character: &mut Character) {
        if let Some(name) = &self.name {
            character.name.clone_from(name);
        }
        if let Some(title) = &self.title {
            character.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            character.description.clone_from(description);
        }
        if let Some(race) = &self.race {
            character.race.clone_from(race);
        }
        if let Some(occupation) = &self.occupation {
            character.occupation.clone_from(occupation);
        }
        if let Some(status) = &self.status {
            character.status.clone_from(status);
        }
        if let Some(notable_traits) = &self.notable_traits {
            character.notable_traits.clone_from(notable_traits);
        }
    }
}

/// Maps a present key to `Some(_)` so `null` and "absent" stay distinct.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
