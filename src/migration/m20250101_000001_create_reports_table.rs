use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Reports {
    Table,
    Id,
    TeacherName,
    Department,
    Details,
    Governorate,
    EducationalAdmin,
    SchoolId,
    SchoolName,
    PrincipalPhone,
    VisitDate,
    Accomplishments,
    Negatives,
    Violations,
    FileUrl,
    ImageUrl,
    LocationLat,
    LocationLng,
    Status,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reports::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reports::TeacherName).string().not_null())
                    .col(ColumnDef::new(Reports::Department).string().not_null())
                    .col(ColumnDef::new(Reports::Details).text().not_null())
                    .col(ColumnDef::new(Reports::Governorate).string().null())
                    .col(ColumnDef::new(Reports::EducationalAdmin).string().null())
                    .col(ColumnDef::new(Reports::SchoolId).string().null())
                    .col(ColumnDef::new(Reports::SchoolName).string().null())
                    .col(ColumnDef::new(Reports::PrincipalPhone).string().null())
                    .col(ColumnDef::new(Reports::VisitDate).string().null())
                    .col(ColumnDef::new(Reports::Accomplishments).text().null())
                    .col(ColumnDef::new(Reports::Negatives).text().null())
                    .col(ColumnDef::new(Reports::Violations).text().null())
                    .col(ColumnDef::new(Reports::FileUrl).text().null())
                    .col(ColumnDef::new(Reports::ImageUrl).text().null())
                    .col(ColumnDef::new(Reports::LocationLat).double().null())
                    .col(ColumnDef::new(Reports::LocationLng).double().null())
                    .col(
                        ColumnDef::new(Reports::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Reports::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // The archive always reads newest-first.
        manager
            .create_index(
                Index::create()
                    .name("idx_reports_created_at")
                    .table(Reports::Table)
                    .col(Reports::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reports::Table).to_owned())
            .await
    }
}
