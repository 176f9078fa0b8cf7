//! Tenant consistency checks.
//!
//! Every entity carries the id of the tenant it belongs to. Before a record is
//! returned to, merged from, or linked into a request, the whole graph it owns
//! is walked and each node's tenant id compared with the one the request is
//! scoped to. Validation never touches storage.

use std::fmt::Debug;

use smallvec::SmallVec;
use thiserror::Error;

use super::TenantId;

/// Nested entities owned by a composite entity.
pub type OwnedEntities<'a> = SmallVec<[&'a dyn TenantScoped; 4]>;

/// An entity that belongs to exactly one tenant.
pub trait TenantScoped: Debug + Send + Sync {
    /// The tenant this entity claims to belong to.
    fn tenant_id(&self) -> TenantId;

    /// Human readable entity kind, used in diagnostics.
    fn entity_kind(&self) -> &'static str;

    /// Stored id of this entity, if it has been assigned one.
    fn entity_id(&self) -> Option<i64> {
        None
    }

    /// Entities owned by this one. Each must carry the same tenant id.
    fn owned(&self) -> OwnedEntities<'_> {
        SmallVec::new()
    }
}

/// A record (or one of its nested records) belongs to another tenant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "the tenant id ({expected}) does not match the {kind} ({entity})'s tenant id ({found})"
)]
pub struct TenantMismatch {
    /// Tenant the request is scoped to.
    pub expected: TenantId,

    /// Tenant recorded on the offending entity.
    pub found: TenantId,

    /// Kind of the offending entity.
    pub kind: &'static str,

    /// Stored id of the offending entity; `None` for unsaved data.
    pub entity_id: Option<i64>,

    /// Debug rendering of the offending entity.
    pub entity: String,
}

/// Check that `entity` and everything it owns belongs to `expected`.
///
/// The entity itself is checked before its nested entities, so the reported
/// item is the outermost one that disagrees.
///
/// # Errors
///
/// Returns [`TenantMismatch`] describing the first offending entity.
pub fn validate_tenant<E>(expected: TenantId, entity: &E) -> Result<(), TenantMismatch>
where
    E: TenantScoped + ?Sized,
{
    let found = entity.tenant_id();

    if found != expected {
        return Err(TenantMismatch {
            expected,
            found,
            kind: entity.entity_kind(),
            entity_id: entity.entity_id(),
            entity: format!("{entity:?}"),
        });
    }

    entity
        .owned()
        .into_iter()
        .try_for_each(|nested| validate_tenant(expected, nested))
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;

    #[derive(Debug)]
    struct Leaf {
        tenant_id: TenantId,
    }

    impl TenantScoped for Leaf {
        fn tenant_id(&self) -> TenantId {
            self.tenant_id
        }

        fn entity_kind(&self) -> &'static str {
            "leaf"
        }
    }

    #[derive(Debug)]
    struct Branch {
        tenant_id: TenantId,
        leaves: Vec<Leaf>,
        children: Vec<Branch>,
    }

    impl TenantScoped for Branch {
        fn tenant_id(&self) -> TenantId {
            self.tenant_id
        }

        fn entity_kind(&self) -> &'static str {
            "branch"
        }

        fn owned(&self) -> OwnedEntities<'_> {
            let mut owned: OwnedEntities<'_> = smallvec![];

            owned.extend(self.leaves.iter().map(|leaf| leaf as &dyn TenantScoped));
            owned.extend(self.children.iter().map(|child| child as &dyn TenantScoped));

            owned
        }
    }

    #[derive(Debug)]
    struct Stored {
        id: i64,
        tenant_id: TenantId,
    }

    impl TenantScoped for Stored {
        fn tenant_id(&self) -> TenantId {
            self.tenant_id
        }

        fn entity_kind(&self) -> &'static str {
            "stored"
        }

        fn entity_id(&self) -> Option<i64> {
            Some(self.id)
        }
    }

    fn tenant(id: i64) -> TenantId {
        TenantId::from_i64(id)
    }

    fn leaf(id: i64) -> Leaf {
        Leaf {
            tenant_id: tenant(id),
        }
    }

    #[test]
    fn matching_graph_is_accepted() {
        let branch = Branch {
            tenant_id: tenant(1),
            leaves: vec![leaf(1), leaf(1)],
            children: vec![Branch {
                tenant_id: tenant(1),
                leaves: vec![leaf(1)],
                children: vec![],
            }],
        };

        assert_eq!(validate_tenant(tenant(1), &branch), Ok(()));
    }

    #[test]
    fn root_mismatch_reports_root() {
        let branch = Branch {
            tenant_id: tenant(2),
            leaves: vec![leaf(1)],
            children: vec![],
        };

        let error = validate_tenant(tenant(1), &branch).err();

        assert!(
            matches!(
                error,
                Some(TenantMismatch { expected, found, kind: "branch", .. })
                    if expected == tenant(1) && found == tenant(2)
            ),
            "expected root mismatch, got {error:?}"
        );
    }

    #[test]
    fn nested_mismatch_reports_offending_item() {
        let branch = Branch {
            tenant_id: tenant(5),
            leaves: vec![leaf(5), leaf(7)],
            children: vec![],
        };

        let error = validate_tenant(tenant(5), &branch).err();

        assert!(
            matches!(
                error,
                Some(TenantMismatch { kind: "leaf", ref entity, .. }) if entity.contains('7')
            ),
            "expected leaf mismatch, got {error:?}"
        );
    }

    #[test]
    fn mismatch_deep_in_the_graph_is_found() {
        let branch = Branch {
            tenant_id: tenant(3),
            leaves: vec![],
            children: vec![Branch {
                tenant_id: tenant(3),
                leaves: vec![leaf(3), leaf(4)],
                children: vec![],
            }],
        };

        let error = validate_tenant(tenant(3), &branch).err();

        assert!(
            matches!(error, Some(TenantMismatch { found, .. }) if found == tenant(4)),
            "expected nested leaf mismatch, got {error:?}"
        );
    }

    #[test]
    fn message_names_both_tenant_ids() {
        let error = validate_tenant(tenant(5), &leaf(7)).err().map(|e| e.to_string());

        assert_eq!(
            error.as_deref(),
            Some("the tenant id (5) does not match the leaf (Leaf { tenant_id: 7 })'s tenant id (7)")
        );
    }

    #[test]
    fn mismatch_carries_the_offending_entity_id() {
        let stored = Stored {
            id: 31,
            tenant_id: tenant(2),
        };

        let error = validate_tenant(tenant(1), &stored).err();

        assert!(
            matches!(error, Some(TenantMismatch { entity_id: Some(31), .. })),
            "expected entity id 31, got {error:?}"
        );

        let error = validate_tenant(tenant(1), &leaf(2)).err();

        assert!(
            matches!(error, Some(TenantMismatch { entity_id: None, .. })),
            "unsaved entities carry no id, got {error:?}"
        );
    }
}
