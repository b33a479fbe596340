use std::cmp::Ordering;

use clap::Args;

use crate::error::Result;

#[derive(Args)]
pub(crate) struct CompareArgs {
    pub(crate) first: String,
    pub(crate) second: String,
}

pub(crate) fn run(args: &CompareArgs) -> Result<()> {
    let symbol = match scribe_version::compare(&args.first, &args.second) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };

    println!("{} {symbol} {}", args.first, args.second);
    Ok(())
}
