fn main() {
    // Emits `built.rs` into OUT_DIR; GIT_COMMIT_HASH is `None` outside a git checkout.
    if let Err(err) = built::write_built_file() {
        panic!("failed to acquire build-time information: {err}");
    }
}
