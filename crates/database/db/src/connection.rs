/// The [`DatabaseConnectionProvider`] trait provides a way to get a connection to the database.
/// This is implemented by the [`crate::Database`] type.
#[auto_impl::auto_impl(&, Arc)]
pub trait DatabaseConnectionProvider {
    /// The underlying connection type.
    type Connection: sea_orm::ConnectionTrait + Send + Sync;

    /// Returns a reference to the database connection.
    fn get_connection(&self) -> &Self::Connection;
}
