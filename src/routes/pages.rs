use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use triove_insight::{BlogPost, CaseStudy};

use crate::{
    catalog::{self, Industry, ProcessStep, Service},
    routes::AppState,
    template::{Template, Viewer, filters},
};

#[derive(askama::Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub viewer: Viewer,
    pub services: &'static [Service],
}

pub async fn home(template: Template) -> impl IntoResponse {
    template.render(HomeTemplate {
        viewer: template.viewer.clone(),
        services: &catalog::SERVICES[..4],
    })
}

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub viewer: Viewer,
}

pub async fn about(template: Template) -> impl IntoResponse {
    template.render(AboutTemplate {
        viewer: template.viewer.clone(),
    })
}

#[derive(askama::Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub viewer: Viewer,
    pub services: &'static [Service],
    pub process: &'static [ProcessStep],
}

pub async fn services(template: Template) -> impl IntoResponse {
    template.render(ServicesTemplate {
        viewer: template.viewer.clone(),
        services: catalog::SERVICES,
        process: catalog::PROCESS,
    })
}

#[derive(askama::Template)]
#[template(path = "service.html")]
pub struct ServiceTemplate {
    pub viewer: Viewer,
    pub service: &'static Service,
}

pub async fn service(template: Template, Path(slug): Path<String>) -> impl IntoResponse {
    let Some(service) = catalog::find_service(&slug) else {
        return template.not_found();
    };

    template.render(ServiceTemplate {
        viewer: template.viewer.clone(),
        service,
    })
}

#[derive(askama::Template)]
#[template(path = "industries.html")]
pub struct IndustriesTemplate {
    pub viewer: Viewer,
    pub industries: &'static [Industry],
}

pub async fn industries(template: Template) -> impl IntoResponse {
    template.render(IndustriesTemplate {
        viewer: template.viewer.clone(),
        industries: catalog::INDUSTRIES,
    })
}

#[derive(askama::Template)]
#[template(path = "industry.html")]
pub struct IndustryTemplate {
    pub viewer: Viewer,
    pub industry: &'static Industry,
    pub case_studies: Vec<CaseStudy>,
}

pub async fn industry(
    template: Template,
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let Some(industry) = catalog::find_industry(&slug) else {
        return template.not_found();
    };

    let case_studies = crate::try_page_response!(
        app_state
            .insight_query
            .case_studies_by_industry(industry.name),
        template
    );

    template.render(IndustryTemplate {
        viewer: template.viewer.clone(),
        industry,
        case_studies,
    })
}

#[derive(askama::Template)]
#[template(path = "insights.html")]
pub struct InsightsTemplate {
    pub viewer: Viewer,
    pub posts: Vec<BlogPost>,
    pub case_studies: Vec<CaseStudy>,
}

pub async fn insights(template: Template, State(app_state): State<AppState>) -> impl IntoResponse {
    let posts = crate::try_page_response!(app_state.insight_query.published_posts(), template);
    let case_studies = crate::try_page_response!(
        app_state.insight_query.published_case_studies(),
        template
    );

    template.render(InsightsTemplate {
        viewer: template.viewer.clone(),
        posts,
        case_studies,
    })
}

#[derive(askama::Template)]
#[template(path = "insight.html")]
pub struct InsightTemplate {
    pub viewer: Viewer,
    pub post: BlogPost,
}

pub async fn insight(
    template: Template,
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let post = crate::try_page_response!(opt: app_state.insight_query.post_by_slug(slug), template);

    // drafts stay hidden from visitors
    if !post.is_published {
        return template.not_found();
    }

    template.render(InsightTemplate {
        viewer: template.viewer.clone(),
        post,
    })
}
