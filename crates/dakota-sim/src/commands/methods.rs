use std::error::Error;

use clap::Args;
use dakota_exp::to_canonical_json_bytes;
use dakota_methods::methods;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct MethodsArgs {
    /// Emit the listing as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct MethodListing {
    name: &'static str,
    summary: &'static str,
}

pub fn run(args: &MethodsArgs) -> Result<(), Box<dyn Error>> {
    let listing: Vec<MethodListing> = methods()
        .iter()
        .map(|entry| MethodListing {
            name: entry.name,
            summary: entry.summary,
        })
        .collect();
    if args.json {
        let json = to_canonical_json_bytes(&listing)?;
        println!("{}", String::from_utf8(json)?);
        return Ok(());
    }
    let width = listing.iter().map(|item| item.name.len()).max().unwrap_or(0);
    for item in &listing {
        println!("{:width$}  {}", item.name, item.summary);
    }
    Ok(())
}
