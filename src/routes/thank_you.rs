use axum::response::IntoResponse;

use crate::template::{Site, Template};

#[derive(askama::Template)]
#[template(path = "thank-you.html")]
pub struct ThankYouTemplate {
    pub site: Site,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ThankYouTemplate {
        site: template.site(),
    })
}
