use serde::{Deserialize, Serialize};

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::TypeConstraintError;

/// Wire representation of a [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryDto {
    #[serde(default)]
    pub id: i32,
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
        }
    }
}

impl TryFrom<CategoryDto> for Category {
    type Error = TypeConstraintError;

    fn try_from(value: CategoryDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.try_into()?,
            name: value.name,
        })
    }
}

impl CategoryDto {
    /// Project into the insertable form, dropping any client-supplied id.
    pub fn into_new(self) -> NewCategory {
        NewCategory { name: self.name }
    }
}
