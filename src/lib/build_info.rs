#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// Commit the bundle was built from, or `unknown` outside a git checkout.
pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const PKG_VERSION: &str = built_info::PKG_VERSION;
