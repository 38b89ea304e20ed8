use axum::response::IntoResponse;

use crate::template::{Site, Template};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub site: Site,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate {
        site: template.site(),
    })
}
