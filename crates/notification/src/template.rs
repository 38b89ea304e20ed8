pub struct Template;

impl Template {
    pub fn to_string<T: askama::Template>(template: T) -> String {
        match template.render() {
            Ok(body) => body,
            Err(err) => format!("Failed to render template. Error: {err}"),
        }
    }
}
