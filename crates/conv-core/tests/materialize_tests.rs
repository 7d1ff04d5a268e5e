//! Tests for materializing bundled resources into real projects

use conv_core::{
    BundledResources, Error, HookInstallOutcome, Origin, ResourceId, ResourceMaterializer,
    ResourceRequest, install_pre_commit_hook, write_checkstyle_config,
};
use conv_fs::compute_file_checksum;
use conv_test_utils::git::{add_linked_worktree, real_git_repo, real_git_repo_with_commit};
use conv_test_utils::project::TestProject;
use pretty_assertions::assert_eq;

mod checkstyle_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_embedded_defaults_are_written() {
        let project = TestProject::new();

        let reports =
            write_checkstyle_config(project.root(), &ResourceMaterializer::default()).unwrap();

        project.assert_file_contains(
            "build/generated/checkstyle/checkstyle.xml",
            r#"<module name="Checker">"#,
        );
        project.assert_file_contains("build/generated/checkstyle/suppressions.xml", "<suppressions>");
        for report in &reports {
            assert_eq!(compute_file_checksum(&report.output).unwrap(), report.checksum);
        }
    }

    #[test]
    fn test_overrides_are_preferred() {
        let project = TestProject::new();
        project.write("config/checkstyle/checkstyle.xml", "<module name=\"Checker\"/>\n");

        let reports =
            write_checkstyle_config(project.root(), &ResourceMaterializer::default()).unwrap();

        assert_eq!(
            reports[0].origin,
            Origin::Override(project.root().join("config/checkstyle/checkstyle.xml"))
        );
        assert_eq!(
            project.read("build/generated/checkstyle/checkstyle.xml"),
            "<module name=\"Checker\"/>\n"
        );
    }

    #[test]
    fn test_request_without_override_ignores_project_file() {
        let project = TestProject::new();
        project.write("config/checkstyle/checkstyle.xml", "<custom/>");

        let report = ResourceMaterializer::default()
            .materialize(
                &ResourceRequest::bundled_only(ResourceId::CheckstyleConfig),
                &project.root().join("out.xml"),
            )
            .unwrap();

        assert!(matches!(report.origin, Origin::Bundled(_)));
    }

    #[test]
    fn test_missing_bundle_fails_without_writing() {
        let project = TestProject::new();
        let materializer = ResourceMaterializer::new(BundledResources::empty());

        let err = write_checkstyle_config(project.root(), &materializer).unwrap_err();

        assert!(matches!(err, Error::MissingBundledResource { .. }));
        project.assert_file_not_exists("build/generated/checkstyle/checkstyle.xml");
    }
}

mod hook_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn installed_path(outcome: HookInstallOutcome) -> std::path::PathBuf {
        match outcome {
            HookInstallOutcome::Installed(report) => report.output,
            HookInstallOutcome::SkippedNoGit => panic!("expected the hook to be installed"),
        }
    }

    #[test]
    fn test_installs_into_real_repository() {
        let project = TestProject::new();
        real_git_repo(project.root());

        let outcome =
            install_pre_commit_hook(project.root(), &ResourceMaterializer::default()).unwrap();

        assert_eq!(installed_path(outcome), project.root().join(".git/hooks/pre-commit"));
        project.assert_file_contains(".git/hooks/pre-commit", "#!/bin/sh");
    }

    #[test]
    fn test_linked_worktree_installs_into_common_hooks() {
        let project = TestProject::new();
        real_git_repo_with_commit(project.root());
        let worktree = project.scratch().join("feature");
        add_linked_worktree(project.root(), &worktree, "feature");

        let outcome = install_pre_commit_hook(&worktree, &ResourceMaterializer::default()).unwrap();

        let installed = installed_path(outcome);
        assert!(installed.is_file());
        assert_eq!(installed.file_name().unwrap(), "pre-commit");
        assert_eq!(
            dunce::canonicalize(installed.parent().unwrap()).unwrap(),
            dunce::canonicalize(project.root().join(".git/hooks")).unwrap()
        );
        assert!(!worktree.join(".git").is_dir());
    }

    #[test]
    fn test_project_without_git_is_skipped() {
        let project = TestProject::new();
        project.write("scripts/git-hooks/pre-commit", "#!/bin/sh\n");

        let outcome =
            install_pre_commit_hook(project.root(), &ResourceMaterializer::default()).unwrap();

        assert_eq!(outcome, HookInstallOutcome::SkippedNoGit);
    }
}
