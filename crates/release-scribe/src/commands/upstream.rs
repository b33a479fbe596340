use clap::Args;
use scribe_upstream::{ReqwestHttp, UpstreamResolver};

use crate::error::Result;

#[derive(Args)]
pub(crate) struct UpstreamArgs {
    /// Fedora package name to look up
    pub(crate) package: String,
}

pub(crate) fn run(args: &UpstreamArgs) -> Result<()> {
    let resolver = UpstreamResolver::new(ReqwestHttp::new());

    match resolver.resolve(&args.package)? {
        Some(version) => println!("{version}"),
        None => println!("no upstream version found for '{}'", args.package),
    }

    Ok(())
}
