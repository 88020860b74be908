//! HTTP span helpers.

/// Path segments that are followed by a caller-supplied product id.
const PRODUCT_ID_PARENTS: &[&str] = &["remove", "products"];

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) route: String,
    pub(super) span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = route_template(path);
    let span_name = format!("{method} {route}");

    RequestSpanName { route, span_name }
}

/// Replace product ids with `{productId}` so span names and metric labels stay bounded.
fn route_template(path: &str) -> String {
    let trimmed = path.trim_matches('/');

    if trimmed.is_empty() {
        return "/".to_owned();
    }

    let mut template = String::new();
    let mut previous: Option<&str> = None;

    for segment in trimmed.split('/') {
        template.push('/');

        if previous.is_some_and(|parent| PRODUCT_ID_PARENTS.contains(&parent)) {
            template.push_str("{productId}");
        } else {
            template.push_str(segment);
        }

        previous = Some(segment);
    }

    template
}
