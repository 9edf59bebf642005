//! HTTP span naming.

use uuid::Uuid;

/// `METHOD /path` with UUID segments collapsed, so span names stay low-cardinality.
pub(super) fn request_span_name(method: &str, path: &str) -> String {
    format!("{method} {}", normalise_path(path))
}

fn normalise_path(path: &str) -> String {
    let segments = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{id}"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_segments_are_collapsed() {
        assert_eq!(
            request_span_name("GET", "/api/cart-tax/0190f7a4-2b1c-7d3e-8f40-123456789abc"),
            "GET /api/cart-tax/{id}"
        );
    }

    #[test]
    fn other_segments_are_kept() {
        assert_eq!(
            request_span_name("GET", "/cartsdeliverygroup/searchBycartId/cart-1"),
            "GET /cartsdeliverygroup/searchBycartId/cart-1"
        );
        assert_eq!(request_span_name("GET", "/"), "GET /");
    }
}
