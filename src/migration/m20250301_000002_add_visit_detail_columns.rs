use sea_orm_migration::prelude::*;

/// Columns introduced after the first deployment. Tables created by the
/// current create-table migration already carry them, so every add is guarded
/// by a column check; a previously-deployed table is upgraded in place.
/// Additive only, never destructive.
const VISIT_DETAIL_COLUMNS: [&str; 10] = [
    "governorate",
    "educational_admin",
    "school_id",
    "school_name",
    "principal_phone",
    "visit_date",
    "accomplishments",
    "negatives",
    "violations",
    "file_url",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for column in VISIT_DETAIL_COLUMNS {
            if !manager.has_column("reports", column).await? {
                db.execute_unprepared(&format!("ALTER TABLE reports ADD COLUMN {} TEXT", column))
                    .await?;
            }
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for column in VISIT_DETAIL_COLUMNS {
            if manager.has_column("reports", column).await? {
                db.execute_unprepared(&format!("ALTER TABLE reports DROP COLUMN {}", column))
                    .await?;
            }
        }

        Ok(())
    }
}
