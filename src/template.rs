use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;
use time::OffsetDateTime;

use crate::config::ContactConfig;

/// Data every page layout needs: navigation state and footer contacts.
#[derive(Clone, Debug)]
pub struct Site {
    pub contact: ContactConfig,
    pub current_path: String,
    pub year: i32,
    pub is_dev: bool,
}

impl Site {
    pub fn is_active(&self, path: &str) -> bool {
        self.current_path == path
    }
}

pub struct Template {
    site: Site,
}

impl Template {
    pub fn site(&self) -> Site {
        self.site.clone()
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");

                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template {
            site: Site {
                contact: state.config.contact.clone(),
                current_path: parts.uri.path().to_owned(),
                year: OffsetDateTime::now_utc().year(),
                is_dev: cfg!(debug_assertions),
            },
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub site: Site,
}
