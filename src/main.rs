extern crate quotefix;

use quotefix::normalizer::normalize_file;
use structopt::StructOpt;

/// The one file this tool exists to clean up.
const TARGET: &str = "app/content/blog/how-to-create-monthly-budget-2026.mdx";

#[derive(StructOpt, Debug)]
#[structopt(name = "quotefix")]
/// Replaces Unicode quotation marks in the budget post with ASCII quotes.
struct Opt {}

fn main() {
    let Opt {} = Opt::from_args();
    normalize_file(TARGET).unwrap();
    println!("Completed comprehensive quote replacement");
}
