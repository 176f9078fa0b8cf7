//! Tenant scope middleware.

use salvo::prelude::*;

use rostering_app::domain::tenants::TenantId;

use crate::extensions::*;

const TENANT_PARAM: &str = "tenant";

/// Parse the `{tenant}` path segment and scope the rest of the request to it.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(tenant) = req.param::<String>(TENANT_PARAM) else {
        res.render(StatusError::bad_request().brief("Missing tenant id"));
        ctrl.skip_rest();

        return;
    };

    let tenant = match tenant.parse::<TenantId>() {
        Ok(tenant) => tenant,
        Err(_error) => {
            res.render(StatusError::bad_request().brief("Tenant id must be an integer"));
            ctrl.skip_rest();

            return;
        }
    };

    depot.insert_tenant_id(tenant);

    ctrl.call_next(req, depot, res).await;
}
