use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum ContactSubmission {
    Table,
    Id,
    Name,
    Email,
    Company,
    Phone,
    Subject,
    Message,
    Status,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum BlogPost {
    Table,
    Id,
    Title,
    Slug,
    Excerpt,
    Content,
    Author,
    Tags,
    ImageUrl,
    IsPublished,
    PublishedAt,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum CaseStudy {
    Table,
    Id,
    Title,
    Client,
    Industry,
    Challenge,
    Solution,
    Results,
    ImageUrl,
    IsPublished,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Email,
    PasswordHash,
    Role,
    CreatedAt,
}
