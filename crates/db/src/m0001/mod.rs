mod blog_post;
mod case_study;
mod contact_submission;
mod user;

use sqlx_migrator::vec_box;

pub struct M0001;

sqlx_migrator::sqlite_migration!(
    M0001,
    "main",
    "m0001",
    vec_box![],
    vec_box![
        contact_submission::CreateTable,
        contact_submission::CreateIdx1,
        blog_post::CreateTable,
        blog_post::CreateSlugIdx,
        blog_post::CreatePublishedIdx,
        case_study::CreateTable,
        case_study::CreateIndustryIdx,
        user::CreateTable,
        user::CreateEmailIdx
    ]
);
