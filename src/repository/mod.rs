use crate::db::{DbConnection, DbPool};

pub mod category;
pub mod errors;
pub mod news;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// Types that can be persisted through a [`Repository`].
pub trait Entity {
    /// Primary-key type of the entity.
    type Id: Copy;
    /// Insertable form of the entity, without the generated key.
    type New;
}

/// CRUD contract shared by every persisted entity.
///
/// Implementations are free of HTTP concerns. Each mutating call acquires its
/// own connection and flushes immediately, so every create/update/delete is a
/// single atomic unit against the storage engine.
pub trait Repository<E: Entity> {
    /// Return every row, fully materialized. Ordering follows the storage
    /// engine's default.
    fn list_all(&self) -> RepositoryResult<Vec<E>>;
    /// Return the matching row, or `None` when the id resolves to nothing.
    fn get_by_id(&self, id: E::Id) -> RepositoryResult<Option<E>>;
    /// Insert a row and return it with the generated key populated.
    fn create(&self, new: &E::New) -> RepositoryResult<E>;
    /// Overwrite all columns of the row matching the entity's key. Fails with
    /// [`RepositoryError::NotUpdated`] when no such row exists.
    fn update(&self, entity: &E) -> RepositoryResult<()>;
    /// Remove the row matching `id`, returning the number of rows affected.
    /// A missing id is a no-op, not an error.
    fn delete(&self, id: E::Id) -> RepositoryResult<usize>;
}

/// Repository for category entities, backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct CategoryRepository {
    pool: DbPool,
}

impl CategoryRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Repository for news entities, backed by Diesel and SQLite.
///
/// Read paths eager-load the related category so callers never observe a
/// half-resolved relation.
#[derive(Clone)]
pub struct NewsRepository {
    pool: DbPool,
}

impl NewsRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}
