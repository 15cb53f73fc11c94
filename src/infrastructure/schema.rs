use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::infrastructure::entity::users;

/// Create the `users` table from the entity definition when it is missing.
pub async fn sync_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(users::Entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    tracing::debug!("users table ready");
    Ok(())
}
