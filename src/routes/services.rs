use axum::response::IntoResponse;

use crate::{
    catalogue::{SERVICES, Service},
    template::{Site, Template},
};

#[derive(askama::Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub site: Site,
    pub services: &'static [Service],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ServicesTemplate {
        site: template.site(),
        services: &SERVICES,
    })
}
