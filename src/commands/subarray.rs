//! Common subarray command

use super::dispatch::CommandContext;
use treedist_core::error::Result;
use treedist_core::format::OutputFormat;
use treedist_core::sequences::find_length;

/// Execute the common-subarray command
pub fn execute(ctx: &CommandContext, left: &[i64], right: &[i64]) -> Result<()> {
    let length = find_length(left, right);

    match ctx.format() {
        OutputFormat::Human => println!("{}", length),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "left": left,
                "right": right,
                "length": length,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => println!(
            "H treedist=1 records=1 mode=common-subarray left={} right={} length={}",
            left.len(),
            right.len(),
            length
        ),
    }

    Ok(())
}
