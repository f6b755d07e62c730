/*! Integration tests for colltools.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - value: Tests for Value, List and Map, and JSON interop
 * - predicates: Tests for the type predicates
 * - iter: Tests for uniform iteration over Sequences and Mappings
 * - ops: Tests for structural equality, merging, emptiness and membership
 * - class: Tests for the inheritance helper and method binding
 * - defer: Tests for deferred callbacks on the tokio runtime
 * - snapshot: Tests for JoinedSnapshot over a fake reference
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("colltools=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod defer;
mod helpers;
mod iter;
mod predicates;
mod snapshot;
mod value;
