//! The wheel command: preview hue distribution for a group count.

use crate::cli::common::{CliError, CliResult};
use crate::engine::{hue_slots, ColorSource, Distribution, HsvWheel};
use clap::Args;
use serde::Serialize;

/// Preview the hue wheel for a given number of groups
#[derive(Debug, Clone, Args)]
pub struct WheelArgs {
    /// Number of top-level groups
    #[arg(short, long, value_name = "N")]
    pub count: usize,

    /// Wheel distribution policy
    #[arg(long, value_enum, default_value = "adjacent")]
    pub distribution: Distribution,

    /// Wheel saturation, 0.0-1.0
    #[arg(long, value_name = "VALUE", default_value_t = 1.0)]
    pub saturation: f64,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct WheelSlot {
    position: usize,
    hue: f64,
    color: String,
}

#[derive(Debug, Serialize)]
struct WheelResponse {
    count: usize,
    slots: Vec<WheelSlot>,
}

impl WheelArgs {
    /// Execute the wheel command
    pub fn execute(&self) -> CliResult<()> {
        if !(0.0..=1.0).contains(&self.saturation) {
            return Err(CliError::validation(format!(
                "--saturation must be between 0.0 and 1.0 (got {})",
                self.saturation
            )));
        }

        let source = HsvWheel::new(self.saturation);
        let slots: Vec<WheelSlot> = hue_slots(self.count, self.distribution)
            .into_iter()
            .enumerate()
            .map(|(position, hue)| WheelSlot {
                position: position + 1,
                hue,
                color: source.sample(hue).to_hex(),
            })
            .collect();

        let response = WheelResponse {
            count: slots.len(),
            slots,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.count == 0 {
            println!("No groups, no wheel.");
        } else {
            println!("Wheel slots ({}):", response.count);
            println!();
            for slot in response.slots {
                println!("  {:>3}  hue {:>5.3}  {}", slot.position, slot.hue, slot.color);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_rejects_bad_saturation() {
        let args = WheelArgs {
            count: 4,
            distribution: Distribution::Adjacent,
            saturation: 2.0,
            json: false,
        };
        assert!(args.execute().is_err());
    }
}
