use crate::{Opts, Utf8Policy};

#[test]
fn default_opts() {
    let opts = Opts::default();
    assert_eq!(opts.utf8_policy, Utf8Policy::Lossy);
    assert!(opts.accept_signed_counts);
}

#[test]
fn override_with_struct_update() {
    let opts = Opts {
        utf8_policy: Utf8Policy::Strict,
        ..Default::default()
    };
    assert_eq!(opts.utf8_policy, Utf8Policy::Strict);
    assert!(opts.accept_signed_counts);
}
