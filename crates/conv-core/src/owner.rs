//! GitHub owner inference from a group coordinate

const GITHUB_GROUP_PREFIX: &str = "io.github.";

/// Group value build tools report when none was set.
const UNSPECIFIED_GROUP: &str = "unspecified";

/// Infer the GitHub owner from a group such as `io.github.acme.tooling`.
///
/// The owner is the segment right after `io.github.`. Groups that are
/// absent, blank, `unspecified`, outside `io.github.` or have an empty
/// owner segment infer nothing.
pub fn infer_owner(group: Option<&str>) -> Option<String> {
    let group = group.map(str::trim)?;
    if group.is_empty() || group == UNSPECIFIED_GROUP {
        return None;
    }

    let rest = group.strip_prefix(GITHUB_GROUP_PREFIX)?;
    let owner = rest.split('.').next().unwrap_or_default();
    if owner.is_empty() {
        return None;
    }
    Some(owner.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("io.github.acme.tooling"), Some("acme"))]
    #[case(Some("io.github.acme"), Some("acme"))]
    #[case(Some("  io.github.octo-org.lib  "), Some("octo-org"))]
    #[case(Some("io.github."), None)]
    #[case(Some("io.github..x"), None)]
    #[case(Some("com.example"), None)]
    #[case(Some("IO.GITHUB.acme"), None)]
    #[case(Some("unspecified"), None)]
    #[case(Some("   "), None)]
    #[case(None, None)]
    fn infers_owner(#[case] group: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(infer_owner(group).as_deref(), expected);
    }

    proptest! {
        #[test]
        fn owner_is_first_segment(owner in "[a-z][a-z0-9-]{0,20}", rest in "(\\.[a-z]{1,8}){0,3}") {
            let group = format!("io.github.{owner}{rest}");
            prop_assert_eq!(infer_owner(Some(&group)), Some(owner));
        }

        #[test]
        fn foreign_groups_infer_nothing(group in "[a-h][a-z]{0,6}(\\.[a-z]{1,6}){0,3}") {
            prop_assert_eq!(infer_owner(Some(&group)), None);
        }

        #[test]
        fn never_panics(group in ".*") {
            let _ = infer_owner(Some(&group));
        }
    }
}
