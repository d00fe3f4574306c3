use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Holds the database connection and session backing one test.
///
/// Every test gets its own in-memory SQLite instance, so tests are fully
/// isolated and need no cleanup. Both fields start out empty and are
/// connected on first use; the session store shares the database so a
/// single context covers guard tests end to end.
pub struct TestContext {
    /// Lazily connected in-memory SQLite database.
    pub db: Option<DatabaseConnection>,

    /// Lazily created session, stored in the same SQLite instance.
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Connects the in-memory database on first call, then hands out the
    /// existing connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The live connection
    /// - `Err(TestError::Database)` - SQLite could not be opened
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        // Checked or set just above.
        Ok(self.db.as_ref().unwrap())
    }

    /// Runs the given CREATE TABLE statements against the test database.
    ///
    /// Called by `TestBuilder::build()` with the schema derived from the
    /// requested entities; tests rarely need it directly.
    ///
    /// # Returns
    /// - `Ok(())` - Schema is in place
    /// - `Err(TestError::Database)` - A statement failed to execute
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Creates the session on first call, migrating the session store table
    /// into the test database, then hands out the existing session.
    ///
    /// # Returns
    /// - `Ok(&Session)` - The live session
    /// - `Err(TestError::Database)` - Connecting or migrating the store failed
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let db = self.database().await?;

            let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        Ok(self.session.as_ref().unwrap())
    }

    /// Initializes both halves and returns them together.
    ///
    /// Guard tests need the database and the session at the same time;
    /// fetching them through one call sidesteps the overlapping mutable
    /// borrows the two getters would otherwise take.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &Session))` - Both live handles
    /// - `Err(TestError::Database)` - Either half failed to initialize
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        Ok((self.db.as_ref().unwrap(), self.session.as_ref().unwrap()))
    }
}
