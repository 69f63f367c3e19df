//! Role-based permission resolution.
//!
//! A [`RoleCatalog`] maps role names to permission sets. Resolving a list of
//! roles takes the union of their permissions; authorizing a request checks
//! that the required permissions are a subset of the granted ones and
//! reports the difference when they are not.

use std::collections::BTreeMap;

use thiserror::Error;
use uniset::{Set, set};

/// A permission name such as `"read"` or `"publish"`.
pub type Permission = &'static str;

/// Errors raised while resolving roles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The requested role is not defined in the catalog.
    #[error("unknown role `{0}`")]
    UnknownRole(String),
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// Union of the permissions of every resolved role.
    pub granted: Set<Permission>,
    /// Required permissions that no resolved role grants.
    pub missing: Set<Permission>,
}

impl Decision {
    /// Whether every required permission was granted.
    pub fn is_allowed(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Role definitions.
#[derive(Debug, Clone, Default)]
pub struct RoleCatalog {
    roles: BTreeMap<String, Set<Permission>>,
}

impl RoleCatalog {
    /// The built-in catalog: `viewer`, `editor`, `publisher` and `admin`.
    pub fn builtin() -> Self {
        let viewer = set!["read"];
        let mut editor = viewer.clone();
        editor.add(["write", "comment"]);
        let mut publisher = editor.clone();
        publisher.add(["publish"]).remove(["comment"]);
        let admin = editor.union(&publisher).union(&set!["delete", "manage_users"]);

        let mut catalog = Self::default();
        catalog
            .define("viewer", viewer)
            .define("editor", editor)
            .define("publisher", publisher)
            .define("admin", admin);
        catalog
    }

    /// Adds or replaces a role.
    pub fn define(&mut self, name: &str, permissions: Set<Permission>) -> &mut Self {
        self.roles.insert(name.to_string(), permissions);
        self
    }

    /// Names of the defined roles, sorted.
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    /// Returns the union of the permissions of `roles`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownRole`] for the first role not in the
    /// catalog.
    pub fn resolve<'a, I>(&self, roles: I) -> Result<Set<Permission>, CatalogError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut granted = Set::new();
        for role in roles {
            let permissions = self
                .roles
                .get(role)
                .ok_or_else(|| CatalogError::UnknownRole(role.to_string()))?;
            tracing::debug!(role, permissions = permissions.len(), "resolved role");
            granted |= permissions;
        }
        Ok(granted)
    }

    /// Checks `required` against the permissions granted by `roles`.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogError`] from [`resolve`](Self::resolve).
    pub fn authorize<'a, I>(
        &self,
        roles: I,
        required: &Set<Permission>,
    ) -> Result<Decision, CatalogError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let granted = self.resolve(roles)?;
        let missing = required.difference(&granted);
        Ok(Decision { granted, missing })
    }

    /// Permissions granted to `role` and to none of the `others`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownRole`] if any role is undefined.
    pub fn exclusive_to<'a, I>(
        &self,
        role: &str,
        others: I,
    ) -> Result<Set<Permission>, CatalogError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let own = self.resolve([role])?;
        let shared = self.resolve(others)?;
        Ok(own.difference(&shared))
    }
}

/// Sorts a permission set for display.
pub fn sorted(permissions: &Set<Permission>) -> Vec<Permission> {
    let mut names = permissions.to_vec();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_builtin_roles_nest() {
        let catalog = RoleCatalog::builtin();
        let viewer = catalog.resolve(["viewer"]).unwrap();
        let editor = catalog.resolve(["editor"]).unwrap();
        let admin = catalog.resolve(["admin"]).unwrap();

        assert!(viewer.is_subset(&editor));
        assert!(editor.is_subset(&admin));
        assert!(!admin.is_subset(&editor));
    }

    #[rstest]
    fn test_publisher_drops_comment() {
        let catalog = RoleCatalog::builtin();
        let publisher = catalog.resolve(["publisher"]).unwrap();
        assert_eq!(sorted(&publisher), vec!["publish", "read", "write"]);
    }

    #[rstest]
    fn test_resolve_unions_roles() {
        let catalog = RoleCatalog::builtin();
        let granted = catalog.resolve(["viewer", "publisher"]).unwrap();
        assert_eq!(granted, catalog.resolve(["publisher"]).unwrap());
    }

    #[rstest]
    fn test_resolve_no_roles_grants_nothing() {
        let catalog = RoleCatalog::builtin();
        assert!(catalog.resolve(std::iter::empty()).unwrap().is_empty());
    }

    #[rstest]
    fn test_unknown_role() {
        let catalog = RoleCatalog::builtin();
        let error = catalog.resolve(["viewer", "root"]).unwrap_err();
        assert_eq!(error, CatalogError::UnknownRole("root".to_string()));
        assert_eq!(error.to_string(), "unknown role `root`");
    }

    #[rstest]
    #[case(&["editor"], &["read", "write"], &[])]
    #[case(&["viewer"], &["read", "write"], &["write"])]
    #[case(&[], &["read"], &["read"])]
    #[case(&["viewer"], &[], &[])]
    fn test_authorize(
        #[case] roles: &[&str],
        #[case] required: &[Permission],
        #[case] missing: &[Permission],
    ) {
        let catalog = RoleCatalog::builtin();
        let decision = catalog
            .authorize(roles.iter().copied(), &Set::of(required.iter().copied()))
            .unwrap();

        assert_eq!(sorted(&decision.missing), missing);
        assert_eq!(decision.is_allowed(), missing.is_empty());
    }

    #[rstest]
    fn test_exclusive_to() {
        let catalog = RoleCatalog::builtin();
        let exclusive = catalog.exclusive_to("admin", ["editor", "publisher"]).unwrap();
        assert_eq!(sorted(&exclusive), vec!["delete", "manage_users"]);
    }

    #[rstest]
    fn test_define_replaces_role() {
        let mut catalog = RoleCatalog::builtin();
        catalog.define("viewer", set!["read", "export"]);
        let viewer = catalog.resolve(["viewer"]).unwrap();
        assert!(viewer.contains("export"));
        assert_eq!(catalog.role_names().count(), 4);
    }
}
