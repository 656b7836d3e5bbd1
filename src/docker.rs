//! Container image invocation builders.
//!
//! Pure constructors for the `docker` command lines the release actions
//! run: registry login, image build, tag, and push. Execution happens
//! through [`crate::tool::ToolRunner`].

use std::path::Path;

use crate::cloud::RegistryToken;
use crate::tool::ToolInvocation;

/// Registry URL for an account in a region:
/// `<account>.dkr.ecr.<region>.amazonaws.com`.
pub fn registry_url(account_id: &str, region: &str) -> String {
    format!("{account_id}.dkr.ecr.{region}.amazonaws.com")
}

/// `docker login` with the password delivered over stdin.
pub fn login(registry: &str, token: &RegistryToken) -> ToolInvocation {
    ToolInvocation::new("docker")
        .args(["login", "--username"])
        .arg(&token.username)
        .arg("--password-stdin")
        .arg(registry)
        .stdin(token.password.clone())
}

/// `docker build` for `image` from `dockerfile`, with the working
/// directory as build context.
pub fn build(image: &str, dockerfile: &Path) -> ToolInvocation {
    ToolInvocation::new("docker")
        .args(["build", "-t"])
        .arg(image)
        .arg("-f")
        .arg(dockerfile.display().to_string())
        .arg(".")
}

/// `docker tag` of the local `latest` onto the registry.
pub fn tag(image: &str, registry: &str) -> ToolInvocation {
    ToolInvocation::new("docker")
        .arg("tag")
        .arg(format!("{image}:latest"))
        .arg(format!("{registry}/{image}:latest"))
}

/// `docker push` of the registry tag.
pub fn push(image: &str, registry: &str) -> ToolInvocation {
    ToolInvocation::new("docker")
        .arg("push")
        .arg(format!("{registry}/{image}:latest"))
}
