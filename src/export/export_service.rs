use crate::core::{AggregationResult, ProductEntry, Tier, UserEntry};
use crate::error::{ErrorContext, TierResult};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Report formats understood by [`ExportService`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The aggregation result as a pretty-printed JSON object
    #[default]
    Json,
    /// A Markdown report with one section per tier and side collection
    Markdown,
    /// A few lines of counts and totals
    Summary,
}

/// Renders aggregation results for humans and machines.
///
/// JSON output is exactly the serialized [`AggregationResult`]; the other
/// formats are derived views and carry no information the JSON lacks.
#[derive(Debug, Default)]
pub struct ExportService {
    title: Option<String>,
}

impl ExportService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Heading used by the Markdown report.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    pub fn export(&self, result: &AggregationResult, format: OutputFormat) -> TierResult<String> {
        match format {
            OutputFormat::Json => self.export_to_json(result),
            OutputFormat::Markdown => self.export_to_markdown(result),
            OutputFormat::Summary => Ok(self.export_summary(result)),
        }
    }

    pub fn export_to_json(&self, result: &AggregationResult) -> TierResult<String> {
        serde_json::to_string_pretty(result).with_operation("render aggregation result", None)
    }

    pub fn export_to_markdown(&self, result: &AggregationResult) -> TierResult<String> {
        let mut lines = Vec::new();

        lines.push(format!(
            "# {}",
            self.title.as_deref().unwrap_or("Record Classification Report")
        ));
        lines.push(String::new());
        lines.push(format!("Generated: {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC")));
        lines.push(String::new());

        if result.is_empty() {
            lines.push("No records to classify.".to_string());
            return Ok(lines.join("\n"));
        }

        lines.push("## Summary".to_string());
        for tier in Tier::ALL {
            let count = result.count(tier).unwrap_or(0);
            lines.push(format!("- **{}**: {}", capitalize(tier.as_str()), count));
        }
        lines.push(String::new());

        for (tier, records) in result.tiers() {
            lines.push(format!("## {} tier", capitalize(tier.as_str())));
            if records.is_empty() {
                lines.push("_none_".to_string());
            }
            for record in records {
                let json = serde_json::to_string(record).with_operation("render record", None)?;
                lines.push(format!("- `{json}`"));
            }
            lines.push(String::new());
        }

        if let Some(users) = result.users() {
            self.export_users(&mut lines, users);
        }
        if let Some(products) = result.products() {
            self.export_products(&mut lines, products);
        }

        Ok(lines.join("\n"))
    }

    fn export_users(&self, lines: &mut Vec<String>, users: &[UserEntry]) {
        lines.push("## Users".to_string());
        lines.push("| Username | Email | Valid |".to_string());
        lines.push("|---|---|---|".to_string());
        for user in users {
            let icon = if user.is_valid { "✅" } else { "❌" };
            lines.push(format!("| {} | {} | {} |", user.username, user.email, icon));
        }
        lines.push(String::new());
    }

    fn export_products(&self, lines: &mut Vec<String>, products: &[ProductEntry]) {
        lines.push("## Products".to_string());
        lines.push("| Name | Total | Discounted |".to_string());
        lines.push("|---|---|---|".to_string());
        for product in products {
            lines.push(format!(
                "| {} | {:.2} | {:.2} |",
                product.name,
                product.total_amount(),
                product.discounted_amount()
            ));
        }
        lines.push(String::new());
    }

    pub fn export_summary(&self, result: &AggregationResult) -> String {
        if result.is_empty() {
            return "no records".to_string();
        }

        let mut lines: Vec<String> = Tier::ALL
            .into_iter()
            .map(|tier| format!("{}: {}", tier, result.count(tier).unwrap_or(0)))
            .collect();

        if let Some(users) = result.users() {
            let valid = users.iter().filter(|u| u.is_valid).count();
            lines.push(format!("users: {} ({} valid)", users.len(), valid));
        }
        if let Some(products) = result.products() {
            let total: f64 = products.iter().map(ProductEntry::total_amount).sum();
            let discounted: f64 = products.iter().map(ProductEntry::discounted_amount).sum();
            lines.push(format!(
                "products: {} (total {:.2}, discounted {:.2})",
                products.len(),
                total,
                discounted
            ));
        }

        lines.join("\n")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
