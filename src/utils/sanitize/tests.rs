use super::*;

#[test]
fn accepts_common_pip_names() {
    for name in [
        "requests",
        "Flask",
        "zope.interface",
        "typing_extensions",
        "ruamel-yaml",
        "requests[security,socks]",
    ] {
        assert!(validate_package_name(name).is_ok(), "{} should be valid", name);
    }
}

#[test]
fn rejects_empty_name() {
    let err = validate_package_name("").unwrap_err();
    assert!(err.to_string().contains("cannot be empty"));
}

#[test]
fn rejects_shell_fragments() {
    assert!(validate_package_name("foo; rm -rf /").is_err());
    assert!(validate_package_name("$(whoami)").is_err());
    assert!(validate_package_name("a b").is_err());
}

#[test]
fn rejects_option_like_names() {
    assert!(validate_package_name("--index-url").is_err());
    assert!(validate_package_name("-r").is_err());
}

#[test]
fn rejects_overlong_names() {
    let name = "a".repeat(300);
    assert!(validate_package_name(&name).is_err());
}

#[test]
fn versions_allow_local_and_epoch_segments() {
    assert!(validate_version("2.31.0").is_ok());
    assert!(validate_version("1.0+cpu").is_ok());
    assert!(validate_version("1!2.0").is_ok());
    assert!(validate_version("3.0.0rc1").is_ok());
}

#[test]
fn versions_reject_injection() {
    assert!(validate_version("").is_err());
    assert!(validate_version("1.0; echo").is_err());
    assert!(validate_version("--pre").is_err());
    assert!(validate_version("1.0==2.0").is_err());
}
