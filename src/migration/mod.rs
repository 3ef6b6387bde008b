use sea_orm_migration::prelude::*;

mod m20250101_000001_create_reports_table;
mod m20250301_000002_add_visit_detail_columns;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_reports_table::Migration),
            Box::new(m20250301_000002_add_visit_detail_columns::Migration),
        ]
    }
}
