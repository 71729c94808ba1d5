//! Role compilation
//!
//! Resolves each role's effective permission set by flattening inherited
//! permissions into it. Inheritance forms a directed graph (role →
//! extended role) which must be acyclic; a cycle or a dangling reference
//! aborts compilation.

use std::collections::{HashMap, HashSet};

use authz_policy::RoleDefinition;

use crate::error::{CompileError, ReferencePath};
use crate::set::PermissionSet;

/// Fully resolved permission sets, keyed by role name.
pub type CompiledRoles = HashMap<String, PermissionSet>;

/// Resolve every role in `definitions` to its effective permission set.
///
/// A role's effective set is the union of its own declared permissions
/// and the effective sets of every role it (transitively) extends. The
/// result is independent of traversal order; set union is commutative.
/// When several cycles exist, which one is reported first depends on map
/// iteration order.
///
/// # Errors
///
/// [`CompileError::UnknownRole`] if an `extends` entry names an
/// undefined role, [`CompileError::InheritanceCycle`] if the inheritance
/// graph revisits a role on the current traversal path.
pub fn compile_roles(
    definitions: &HashMap<String, RoleDefinition>,
) -> Result<CompiledRoles, CompileError> {
    let mut compiled = CompiledRoles::with_capacity(definitions.len());
    for role in definitions.keys() {
        resolve(
            definitions,
            role,
            &HashSet::new(),
            &ReferencePath::new(role),
            &mut compiled,
        )?;
    }
    Ok(compiled)
}

/// Depth-first resolution of a single role.
///
/// `on_path` holds the roles on the current traversal path only, copied
/// per recursive call. Roles already present in `compiled` are finished
/// and cannot be part of a cycle, so they are reused without re-walking
/// them; that is what lets diamond-shaped inheritance (two paths to a
/// shared ancestor) resolve without a false cycle report.
fn resolve(
    definitions: &HashMap<String, RoleDefinition>,
    role: &str,
    on_path: &HashSet<String>,
    path: &ReferencePath,
    compiled: &mut CompiledRoles,
) -> Result<PermissionSet, CompileError> {
    if let Some(finished) = compiled.get(role) {
        return Ok(finished.clone());
    }

    let definition = definitions
        .get(role)
        .ok_or_else(|| CompileError::UnknownRole {
            role: role.to_string(),
            path: path.clone(),
        })?;

    if on_path.contains(role) {
        return Err(CompileError::InheritanceCycle { path: path.clone() });
    }
    let mut on_path = on_path.clone();
    on_path.insert(role.to_string());

    let mut permissions = PermissionSet::from_names(&definition.permissions);
    for parent in &definition.extends {
        let inherited = resolve(definitions, parent, &on_path, &path.with(parent), compiled)?;
        permissions.merge(&inherited);
    }

    compiled.insert(role.to_string(), permissions.clone());
    Ok(permissions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(permissions: &[&str], extends: &[&str]) -> RoleDefinition {
        RoleDefinition {
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            extends: extends.iter().map(|e| e.to_string()).collect(),
        }
    }

    fn definitions(entries: &[(&str, RoleDefinition)]) -> HashMap<String, RoleDefinition> {
        entries
            .iter()
            .map(|(name, def)| (name.to_string(), def.clone()))
            .collect()
    }

    #[test]
    fn test_role_without_inheritance() {
        let defs = definitions(&[("viewer", role(&["read"], &[]))]);
        let compiled = compile_roles(&defs).unwrap();

        assert_eq!(compiled["viewer"], PermissionSet::from_names(["read"]));
    }

    #[test]
    fn test_direct_inheritance_flattens() {
        let defs = definitions(&[
            ("viewer", role(&["read"], &[])),
            ("editor", role(&["write"], &["viewer"])),
        ]);
        let compiled = compile_roles(&defs).unwrap();

        assert_eq!(
            compiled["editor"],
            PermissionSet::from_names(["read", "write"])
        );
        assert_eq!(compiled["viewer"], PermissionSet::from_names(["read"]));
    }

    #[test]
    fn test_transitive_inheritance_flattens() {
        let defs = definitions(&[
            ("viewer", role(&["read"], &[])),
            ("editor", role(&["write"], &["viewer"])),
            ("admin", role(&["delete"], &["editor"])),
        ]);
        let compiled = compile_roles(&defs).unwrap();

        assert_eq!(
            compiled["admin"],
            PermissionSet::from_names(["read", "write", "delete"])
        );
    }

    #[test]
    fn test_diamond_inheritance_is_not_a_cycle() {
        // d extends b and c, both of which extend a
        let defs = definitions(&[
            ("a", role(&["base"], &[])),
            ("b", role(&["left"], &["a"])),
            ("c", role(&["right"], &["a"])),
            ("d", role(&["top"], &["b", "c"])),
        ]);
        let compiled = compile_roles(&defs).unwrap();

        assert_eq!(
            compiled["d"],
            PermissionSet::from_names(["base", "left", "right", "top"])
        );
    }

    #[test]
    fn test_multiple_extends_union() {
        let defs = definitions(&[
            ("reader", role(&["read"], &[])),
            ("writer", role(&["write"], &[])),
            ("both", role(&[], &["reader", "writer"])),
        ]);
        let compiled = compile_roles(&defs).unwrap();

        assert_eq!(
            compiled["both"],
            PermissionSet::from_names(["read", "write"])
        );
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let defs = definitions(&[("a", role(&["x"], &["a"]))]);

        match compile_roles(&defs) {
            Err(CompileError::InheritanceCycle { path }) => {
                assert_eq!(path.segments(), ["a", "a"]);
            }
            other => panic!("expected InheritanceCycle, got {other:?}"),
        }
    }

    #[test]
    fn test_two_role_cycle() {
        let defs = definitions(&[
            ("a", role(&[], &["b"])),
            ("b", role(&[], &["a"])),
        ]);

        match compile_roles(&defs) {
            Err(CompileError::InheritanceCycle { path }) => {
                // either role may be the traversal root
                let segments = path.segments();
                assert_eq!(segments.len(), 3);
                assert_eq!(segments[0], segments[2]);
            }
            other => panic!("expected InheritanceCycle, got {other:?}"),
        }
    }

    #[test]
    fn test_cycle_behind_non_cyclic_branch() {
        // "entry" reaches the cycle only through its second parent; the
        // clean sibling branch must not mask it.
        let defs = definitions(&[
            ("clean", role(&["read"], &[])),
            ("entry", role(&[], &["clean", "loop-a"])),
            ("loop-a", role(&[], &["loop-b"])),
            ("loop-b", role(&[], &["loop-a"])),
        ]);

        assert!(matches!(
            compile_roles(&defs),
            Err(CompileError::InheritanceCycle { .. })
        ));
    }

    #[test]
    fn test_unknown_extended_role() {
        let defs = definitions(&[("admin", role(&["all"], &["ghost"]))]);

        match compile_roles(&defs) {
            Err(CompileError::UnknownRole { role, path }) => {
                assert_eq!(role, "ghost");
                assert_eq!(path.segments(), ["admin", "ghost"]);
            }
            other => panic!("expected UnknownRole, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_role_cites_full_chain() {
        let defs = definitions(&[
            ("admin", role(&[], &["editor"])),
            ("editor", role(&[], &["ghost"])),
        ]);

        match compile_roles(&defs) {
            Err(CompileError::UnknownRole { role, path }) => {
                assert_eq!(role, "ghost");
                // the chain is rooted wherever traversal started
                let segments = path.segments();
                assert_eq!(segments.last().map(String::as_str), Some("ghost"));
                assert!(segments.contains(&"editor".to_string()));
            }
            other => panic!("expected UnknownRole, got {other:?}"),
        }
    }

    #[test]
    fn test_compilation_is_deterministic() {
        let defs = definitions(&[
            ("a", role(&["base"], &[])),
            ("b", role(&["left"], &["a"])),
            ("c", role(&["right"], &["a"])),
            ("d", role(&["top"], &["b", "c"])),
        ]);

        let first = compile_roles(&defs).unwrap();
        let second = compile_roles(&defs).unwrap();
        assert_eq!(first, second);
    }
}
