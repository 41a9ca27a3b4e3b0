use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clubs::Table)
                    .if_not_exists()
                    .col(id(Clubs::Id))
                    .col(ColumnDef::new(Clubs::Name).text().not_null())
                    .col(ColumnDef::new(Clubs::Role).text().not_null())
                    .col(ColumnDef::new(Clubs::Description).text().not_null())
                    .col(ColumnDef::new(Clubs::Link).text())
                    .col(ColumnDef::new(Clubs::Category).text().not_null())
                    .col(text_list(Clubs::Images))
                    .check(Expr::col(Clubs::Category).is_in(["main", "other"]))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MarketingWork::Table)
                    .if_not_exists()
                    .col(id(MarketingWork::Id))
                    .col(ColumnDef::new(MarketingWork::Title).text().not_null())
                    .col(ColumnDef::new(MarketingWork::Description).text().not_null())
                    .col(ColumnDef::new(MarketingWork::ImageUrl).text().not_null())
                    .col(text_list(MarketingWork::CarouselImages))
                    .col(ColumnDef::new(MarketingWork::Category).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(id(Projects::Id))
                    .col(ColumnDef::new(Projects::Title).text().not_null())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(text_list(Projects::TechStack))
                    .col(ColumnDef::new(Projects::RepoLink).text())
                    .col(ColumnDef::new(Projects::DemoLink).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Messages::Table)
                    .if_not_exists()
                    .col(id(Messages::Id))
                    .col(ColumnDef::new(Messages::Name).text().not_null())
                    .col(ColumnDef::new(Messages::Email).text().not_null())
                    .col(ColumnDef::new(Messages::Message).text().not_null())
                    .col(
                        ColumnDef::new(Messages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(id(Testimonials::Id))
                    .col(ColumnDef::new(Testimonials::Name).text().not_null())
                    .col(ColumnDef::new(Testimonials::Role).text().not_null())
                    .col(ColumnDef::new(Testimonials::Content).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(id(BlogPosts::Id))
                    .col(ColumnDef::new(BlogPosts::Title).text().not_null())
                    .col(ColumnDef::new(BlogPosts::Content).text().not_null())
                    .col(ColumnDef::new(BlogPosts::ImageUrl).text())
                    .col(
                        ColumnDef::new(BlogPosts::PublishedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blog_posts_published_at")
                    .table(BlogPosts::Table)
                    .col(BlogPosts::PublishedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogPosts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Messages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MarketingWork::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Clubs::Table).to_owned())
            .await
    }
}

/// Serial primary key.
fn id<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

/// `text[]` column defaulting to an empty list.
fn text_list<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .array(ColumnType::Text)
        .not_null()
        .default(Expr::cust("'{}'"))
        .to_owned()
}

#[derive(DeriveIden)]
enum Clubs {
    Table,
    Id,
    Name,
    Role,
    Description,
    Link,
    Category,
    Images,
}

#[derive(DeriveIden)]
enum MarketingWork {
    Table,
    Id,
    Title,
    Description,
    ImageUrl,
    CarouselImages,
    Category,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    TechStack,
    RepoLink,
    DemoLink,
}

#[derive(DeriveIden)]
enum Messages {
    Table,
    Id,
    Name,
    Email,
    Message,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    Name,
    Role,
    Content,
}

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Id,
    Title,
    Content,
    ImageUrl,
    PublishedAt,
}
