//! App Router

use salvo::Router;

use crate::{employee_availabilities, employees, tenants, time_slots};

/// Every tenant-scoped route, under `/tenants/{tenant}`.
pub(crate) fn app_router() -> Router {
    Router::with_path("tenants/{tenant}")
        .hoop(tenants::middleware::handler)
        .push(
            Router::with_path("employees")
                .get(employees::index::handler)
                .post(employees::create::handler)
                .push(
                    Router::with_path("{employee}")
                        .get(employees::get::handler)
                        .delete(employees::delete::handler),
                ),
        )
        .push(
            Router::with_path("employee-availabilities")
                .post(employee_availabilities::create::handler)
                .put(employee_availabilities::update::handler)
                .push(
                    Router::with_path("{availability}")
                        .delete(employee_availabilities::delete::handler),
                ),
        )
        .push(
            Router::with_path("time-slots")
                .get(time_slots::index::handler)
                .post(time_slots::create::handler),
        )
}
