use anyhow::{ anyhow, Result };

use buildreg::{ OutputFormat, RegistryName, OPERATIONS };

use crate::cli::ui;

/// List operations and their positional parameters
pub fn execute(registry: Option<&str>, output_format: OutputFormat) -> Result<()> {
    let filter = registry.map(parse_registry).transpose()?;
    let selected = OPERATIONS
        .iter()
        .filter(|(name, _)| filter.map_or(true, |wanted| wanted == *name));

    match output_format {
        OutputFormat::Json => {
            let listing: serde_json::Map<String, serde_json::Value> = selected
                .map(|(name, operations)| {
                    let ops = operations
                        .iter()
                        .map(|(op, params)| (op.to_string(), serde_json::json!(params)))
                        .collect::<serde_json::Map<_, _>>();
                    (name.to_string(), serde_json::Value::Object(ops))
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Text => {
            for (name, operations) in selected {
                ui::print_header(&format!("{} registry", name));
                for (op, params) in operations.iter() {
                    ui::print_result(op, &format!("({})", params.join(", ")));
                }
            }
            ui::print_text(
                "Every invocation also carries a sender. Only the building registry checks it; \
                 the water-usage registry records it as the reader of a meter reading."
            );
        }
    }
    Ok(())
}

fn parse_registry(name: &str) -> Result<RegistryName> {
    match name.to_lowercase().as_str() {
        "building" | "buildings" => Ok(RegistryName::Building),
        "inventory" => Ok(RegistryName::Inventory),
        "maintenance" => Ok(RegistryName::Maintenance),
        "waterusage" | "water" => Ok(RegistryName::WaterUsage),
        _ => Err(anyhow!("Unknown registry: {}", name)),
    }
}
