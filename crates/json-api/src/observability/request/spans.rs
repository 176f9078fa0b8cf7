//! Route templates for spans and metric labels.
//!
//! Numeric path segments are ids, so they are folded into placeholders to keep
//! label cardinality bounded.

/// `/tenants/7/employees/12` becomes `/tenants/{tenant}/employees/{id}`.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut template = String::new();
    let mut previous = "";

    for segment in path.trim_start_matches('/').split('/') {
        template.push('/');

        if segment.parse::<i64>().is_ok() {
            template.push_str(if previous == "tenants" {
                "{tenant}"
            } else {
                "{id}"
            });
        } else {
            template.push_str(segment);
        }

        previous = segment;
    }

    template
}
