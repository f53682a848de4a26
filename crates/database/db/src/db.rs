use super::DatabaseConnectionProvider;
use crate::error::DatabaseError;

use sea_orm::{Database as SeaOrmDatabase, DatabaseConnection};

/// The [`Database`] struct is responsible for interacting with the database.
///
/// The [`Database`] type wraps a [`sea_orm::DatabaseConnection`]. We implement
/// [`DatabaseConnectionProvider`] for [`Database`] such that it can be used to perform the
/// operations defined in [`crate::DatabaseOperations`].
#[derive(Debug)]
pub struct Database {
    /// The underlying database connection.
    connection: DatabaseConnection,
}

impl Database {
    /// Creates a new [`Database`] instance associated with the provided database URL.
    pub async fn new(database_url: &str) -> Result<Self, DatabaseError> {
        let connection = SeaOrmDatabase::connect(database_url).await?;
        Ok(Self { connection })
    }
}

impl DatabaseConnectionProvider for Database {
    type Connection = DatabaseConnection;

    fn get_connection(&self) -> &Self::Connection {
        &self.connection
    }
}

impl From<DatabaseConnection> for Database {
    fn from(connection: DatabaseConnection) -> Self {
        Self { connection }
    }
}

#[cfg(test)]
mod test {
    use crate::{operations::DatabaseOperations, test_utils::setup_test_db};
    use arbitrary::{Arbitrary, Unstructured};
    use bridge_history_primitives::BatchRecord;
    use rand::Rng;

    #[tokio::test]
    async fn test_database_round_trip_batch() {
        // Set up the test database.
        let db = setup_test_db().await;

        // Generate unstructured bytes.
        let mut bytes = [0u8; 1024];
        rand::rng().fill(bytes.as_mut_slice());
        let mut u = Unstructured::new(&bytes);

        // Generate a random BatchRecord.
        let batch = BatchRecord::arbitrary(&mut u).unwrap();

        // Round trip the BatchRecord through the database.
        db.insert_batch(batch.clone()).await.unwrap();
        let batch_from_db = db.get_batch_by_index(batch.index).await.unwrap().unwrap();
        assert_eq!(batch, batch_from_db);
    }

    #[tokio::test]
    async fn test_database_withdraw_root_projection() {
        // Set up the test database.
        let db = setup_test_db().await;

        // Generate unstructured bytes.
        let mut bytes = [0u8; 1024];
        rand::rng().fill(bytes.as_mut_slice());
        let mut u = Unstructured::new(&bytes);

        // Generate a random BatchRecord.
        let batch = BatchRecord::arbitrary(&mut u).unwrap();

        // The projection should return the withdraw root of the stored record.
        db.insert_batch(batch.clone()).await.unwrap();
        let withdraw_root =
            db.get_withdraw_root_by_batch_index(batch.index).await.unwrap().unwrap();
        assert_eq!(batch.withdraw_root, withdraw_root);
    }

    #[tokio::test]
    async fn test_database_rejects_duplicate_batch_index() {
        // Set up the test database.
        let db = setup_test_db().await;

        // Generate unstructured bytes.
        let mut bytes = [0u8; 1024];
        rand::rng().fill(bytes.as_mut_slice());
        let mut u = Unstructured::new(&bytes);

        // Generate two random BatchRecords sharing the same index.
        let batch = BatchRecord::arbitrary(&mut u).unwrap();
        let mut duplicate = BatchRecord::arbitrary(&mut u).unwrap();
        duplicate.index = batch.index;

        // The second insert should violate the primary key constraint.
        db.insert_batch(batch).await.unwrap();
        assert!(db.insert_batch(duplicate).await.is_err());
    }

    #[tokio::test]
    async fn test_database_missing_batch_returns_none() {
        // Set up the test database.
        let db = setup_test_db().await;

        // No record was inserted, so the lookups should return None, not an error.
        assert!(db.get_batch_by_index(101).await.unwrap().is_none());
        assert!(db.get_withdraw_root_by_batch_index(101).await.unwrap().is_none());
    }
}
