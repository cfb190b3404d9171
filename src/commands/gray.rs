//! Gray code command

use serde::Serialize;

use super::dispatch::CommandContext;
use treedist_core::error::Result;
use treedist_core::format::OutputFormat;
use treedist_core::sequences::{gray_code, one_bit_neighbors};

#[derive(Debug, Serialize)]
struct GrayOutput {
    bits: u32,
    codes: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    neighbors: Option<Vec<u64>>,
}

/// Execute the gray-code command
pub fn execute(ctx: &CommandContext, bits: u32, neighbors_of: Option<u64>) -> Result<()> {
    let codes = gray_code(bits)?;
    let max = codes.len() as u64 - 1;
    let neighbors = neighbors_of.map(|value| one_bit_neighbors(value, max));

    let output = GrayOutput {
        bits,
        codes,
        neighbors,
    };

    match ctx.format() {
        OutputFormat::Human => {
            let width = bits.max(1) as usize;
            for code in &output.codes {
                println!("{:0width$b}  {}", code, code, width = width);
            }
            if let (Some(value), Some(neighbors)) = (neighbors_of, &output.neighbors) {
                let list = neighbors
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("one-bit neighbors of {}: [{}]", value, list);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H treedist=1 records=1 mode=gray-code bits={} count={}",
                bits,
                output.codes.len()
            );
            for (index, code) in output.codes.iter().enumerate() {
                println!("G {} {}", index, code);
            }
            for neighbor in output.neighbors.iter().flatten() {
                println!("B {}", neighbor);
            }
        }
    }

    Ok(())
}
