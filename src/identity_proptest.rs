//! Property-based tests for remote URL extraction and template rendering.

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::git::GithubIdentity;
    use crate::template::{format, TemplateContext};
    use proptest::prelude::*;

    proptest! {
        /// Property: `<prefix><sep><account>/<project>.git` always yields
        /// exactly `(account, project)`
        #[test]
        fn extraction_recovers_account_and_project(
            prefix in "(https://|git@|ssh://git@)[a-z0-9.]{1,20}",
            sep in prop::sample::select(vec![":", "/"]),
            account in "[A-Za-z0-9_.-]{1,20}",
            project in "[A-Za-z0-9_.-]{1,20}",
        ) {
            let url = format!("{}{}{}/{}.git", prefix, sep, account, project);
            let identity = GithubIdentity::from_url(&url);
            prop_assert!(identity.is_ok(), "failed to parse {}: {:?}", url, identity);
            let identity = identity.unwrap();
            prop_assert_eq!(identity.account(), account.as_str());
            prop_assert_eq!(identity.project(), project.as_str());
        }

        /// Property: URLs without a trailing `.git` never parse
        #[test]
        fn missing_git_suffix_is_unparseable(
            url in "[a-z]{1,8}://[a-z]{1,10}/[a-z]{1,10}/[a-z]{1,10}",
        ) {
            let result = GithubIdentity::from_url(&url);
            prop_assert!(
                matches!(result, Err(Error::UnparseableUrl { .. })),
                "expected UnparseableUrl for {}, got {:?}",
                url,
                result
            );
        }

        /// Property: URLs with a single path segment never parse
        #[test]
        fn single_segment_is_unparseable(project in "[a-z0-9-]{1,20}") {
            let url = format!("{}.git", project);
            let result = GithubIdentity::from_url(&url);
            prop_assert!(
                matches!(result, Err(Error::UnparseableUrl { .. })),
                "expected UnparseableUrl for {}, got {:?}",
                url,
                result
            );
        }

        /// Property: templates without a recognized code render unchanged,
        /// including percent-encoded sequences and doubled '%'
        #[test]
        fn templates_without_codes_are_unchanged(
            template in "([^%]|%[0-9A-F]{2}|%%[0-9])*",
        ) {
            let ctx = TemplateContext::new("account", "project", "Dist-Name");
            prop_assert_eq!(format(&template, &ctx).unwrap(), template);
        }

        /// Property: rendering is deterministic
        #[test]
        fn format_is_deterministic(
            template in "[a-z/%{}aNr]{0,30}",
            name in "[A-Za-z-]{1,15}",
        ) {
            let ctx = TemplateContext::new("acct", "proj", &name);
            let first = format(&template, &ctx).map_err(|e| e.to_string());
            let second = format(&template, &ctx).map_err(|e| e.to_string());
            prop_assert_eq!(first, second);
        }
    }
}
