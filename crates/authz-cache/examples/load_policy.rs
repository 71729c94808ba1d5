//! Loads a policy file and runs a few permission checks.
//!
//! Run from a directory containing a `policy.yaml`:
//!
//! ```sh
//! cargo run --example load_policy
//! ```

use authz_cache::Loader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let index = Loader::new("policy.yaml")
        .with_cache(".authz.json")
        .load()?;

    for (user, groups, resource, permission) in [
        ("alice", &["engineering"][..], "doc1", "read"),
        ("alice", &[][..], "doc1", "write"),
        ("bob", &["engineering"][..], "doc1", "read"),
    ] {
        println!(
            "authorize(user={user}, groups={groups:?}, resource={resource}, permission={permission}) = {}",
            index.authorize(user, groups, resource, permission)
        );
    }

    Ok(())
}
