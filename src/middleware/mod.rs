mod cache;
mod minify;

pub use cache::cache_control_middleware;
pub use minify::minify_html_middleware;
