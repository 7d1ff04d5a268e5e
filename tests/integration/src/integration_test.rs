//! End-to-end scenarios across the workspace crates
//!
//! Each test lays out a realistic consumer project, resolves its
//! conventions and materializes the files the conventions provide.

use conv_core::config::{Environment, Layer};
use conv_core::{
    ConventionsResolver, HookInstallOutcome, Origin, ResourceMaterializer,
    install_pre_commit_hook, write_checkstyle_config,
};
use conv_fs::{ConventionPath, compute_file_checksum};
use conv_git::resolve_hooks_dir;
use conv_test_utils::git::{add_linked_worktree, real_git_repo_with_commit};
use conv_test_utils::project::TestProject;
use pretty_assertions::assert_eq;

/// A multi-module layout typical of a library published to GitHub Packages.
fn library_project() -> TestProject {
    let project = TestProject::named("toolkit");
    project.java_source("io/github/acme/toolkit/Toolkit.java", "io.github.acme.toolkit");
    project.java_source(
        "io/github/acme/toolkit/internal/Cache.java",
        "io.github.acme.toolkit.internal",
    );
    project.java_source("io/github/acme/testing/Fixtures.java", "io.github.acme.testing");
    project.settings(
        r#"
[project]
group = "io.github.acme.toolkit"
description = "Shared building blocks"
"#,
    );
    project
}

#[test]
fn test_ci_environment_scenario() {
    let project = library_project();
    let env = Environment::from_pairs([
        ("GITHUB_REPOSITORY_OWNER", "acme-ci"),
        ("GITHUB_ACTOR", "release-bot"),
        ("GITHUB_TOKEN", "ghs_ci_token"),
    ]);

    let resolver = ConventionsResolver::load(project.root(), env, &[] as &[&str]).unwrap();
    let resolved = resolver.resolve().unwrap();

    // The environment owner beats inference from the group
    assert_eq!(resolved.github_owner.as_deref(), Some("acme-ci"));
    assert_eq!(
        resolved.base_packages,
        vec!["io.github.acme.testing", "io.github.acme.toolkit"]
    );

    let publication = resolved.publication.as_ref().unwrap();
    assert_eq!(publication.pom_description, "Shared building blocks");
    let packages = publication.github_packages.as_ref().unwrap();
    assert_eq!(packages.url, "https://maven.pkg.github.com/acme-ci/toolkit");
    assert_eq!(packages.credentials.username.as_deref(), Some("release-bot"));
    assert!(packages.credentials.password.is_some());

    let json = serde_json::to_string(&resolved).unwrap();
    assert!(!json.contains("ghs_ci_token"));
}

#[test]
fn test_local_developer_scenario() {
    let project = library_project();

    let resolver = ConventionsResolver::load(
        project.root(),
        Environment::empty(),
        &["repositories.mavenCentral.enabled=FALSE"],
    )
    .unwrap();
    let resolved = resolver.resolve().unwrap();

    assert_eq!(resolved.github_owner.as_deref(), Some("acme"));
    assert!(!resolved.maven_central_enabled);
    assert_eq!(
        resolver.maven_central_enabled().unwrap().layer,
        Layer::ProjectSetting
    );
    assert!(
        resolved
            .publication
            .as_ref()
            .unwrap()
            .github_packages
            .as_ref()
            .unwrap()
            .credentials
            .password
            .is_none()
    );
}

#[test]
fn test_generated_files_scenario() {
    let project = library_project();
    project.write(
        "config/checkstyle/suppressions.xml",
        "<suppressions>\n  <suppress checks=\"LineLength\" files=\".*Generated.*\"/>\n</suppressions>\n",
    );
    real_git_repo_with_commit(project.root());

    let materializer = ResourceMaterializer::default();
    let reports = write_checkstyle_config(project.root(), &materializer).unwrap();
    let outcome = install_pre_commit_hook(project.root(), &materializer).unwrap();

    let resolved = ConventionsResolver::load(project.root(), Environment::empty(), &[] as &[&str])
        .unwrap()
        .resolve()
        .unwrap();
    assert_eq!(reports[0].output, resolved.checkstyle.config_file);
    assert_eq!(reports[1].output, resolved.checkstyle.suppressions_file);
    assert!(matches!(reports[0].origin, Origin::Bundled(_)));
    assert!(matches!(reports[1].origin, Origin::Override(_)));
    for report in &reports {
        assert_eq!(compute_file_checksum(&report.output).unwrap(), report.checksum);
    }

    let HookInstallOutcome::Installed(hook) = outcome else {
        panic!("expected the hook to be installed");
    };
    assert_eq!(
        hook.output,
        ConventionPath::GitMarker.under(project.root()).join("hooks/pre-commit")
    );
}

#[test]
fn test_linked_worktree_scenario() {
    let project = library_project();
    real_git_repo_with_commit(project.root());
    let worktree = project.scratch().join("toolkit-feature");
    add_linked_worktree(project.root(), &worktree, "feature");
    std::fs::create_dir_all(worktree.join("scripts/git-hooks")).unwrap();
    std::fs::write(
        worktree.join("scripts/git-hooks/pre-commit"),
        "#!/bin/sh\necho worktree hook\n",
    )
    .unwrap();

    let hooks_dir = resolve_hooks_dir(&worktree).unwrap().unwrap();
    let outcome = install_pre_commit_hook(&worktree, &ResourceMaterializer::default()).unwrap();

    let HookInstallOutcome::Installed(hook) = outcome else {
        panic!("expected the hook to be installed");
    };
    assert_eq!(hook.output, hooks_dir.join("pre-commit"));
    assert_eq!(
        dunce::canonicalize(&hooks_dir).unwrap(),
        dunce::canonicalize(project.root().join(".git/hooks")).unwrap()
    );
    let installed = std::fs::read_to_string(&hook.output).unwrap();
    assert!(installed.contains("echo worktree hook"));
}
