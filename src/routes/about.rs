use axum::response::IntoResponse;

use crate::template::{Site, Template};

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub site: Site,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(AboutTemplate {
        site: template.site(),
    })
}
