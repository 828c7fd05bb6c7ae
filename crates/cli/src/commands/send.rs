//! Ingredient orders from headquarters.

use serde::Serialize;
use thiserror::Error;

use bakehouse_core::{IngredientId, LocationId, Quantity};
use bakehouse_planner::models::IngredientOrder;
use bakehouse_planner::{
    IngredientOrderDraft, InventoryLedger, OrderError, PlannerConfig, SeedData, SeedError,
};

use super::print_json;

#[derive(Debug, Serialize)]
pub struct SendReport {
    pub order: IngredientOrder,
    pub remaining_at_source: Vec<SourceStock>,
}

#[derive(Debug, Serialize)]
pub struct SourceStock {
    pub ingredient_id: IngredientId,
    pub quantity: Quantity,
}

/// Parse an `ID=QTY` order line argument.
///
/// # Errors
///
/// Returns a message if there is no `=` or the ID is empty.
pub fn parse_item(s: &str) -> Result<(String, String), String> {
    let (id, quantity) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=QTY, got `{s}`"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing ingredient ID in `{s}`"));
    }
    Ok((id.to_string(), quantity.trim().to_string()))
}

/// Errors from submitting an ingredient order.
#[derive(Debug, Error)]
pub enum SendError {
    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Submit an order from `source_id` to `to`, returning the stored order and
/// the shipped ingredients' stock left at the source.
///
/// # Errors
///
/// Returns [`SendError::Seed`] if the source has no inventory, otherwise
/// [`SendError::Order`] for a bad line, an incomplete form, or stock the
/// source cannot cover.
pub fn send_order(
    seed: &SeedData,
    source_id: &LocationId,
    to: &str,
    items: &[(String, String)],
    notes: Option<&str>,
) -> Result<SendReport, SendError> {
    let mut source = seed.ledger_for(source_id)?;
    let directory = seed.directory();

    let mut draft = IngredientOrderDraft::new();
    draft.set_destination(LocationId::new(to));
    for (id, quantity) in items {
        draft.add_item_input(&source, &IngredientId::new(id.as_str()), quantity)?;
    }
    if let Some(notes) = notes {
        draft.set_notes(notes);
    }

    let order = draft.submit(source_id, &mut source, &directory)?;
    let remaining_at_source = order
        .lines
        .iter()
        .filter_map(|line| {
            source
                .get_ingredient(&line.ingredient_id)
                .map(|ingredient| SourceStock {
                    ingredient_id: ingredient.id.clone(),
                    quantity: ingredient.quantity,
                })
        })
        .collect();

    Ok(SendReport {
        order,
        remaining_at_source,
    })
}

/// Submit an ingredient order from the configured headquarters to `to`.
///
/// # Errors
///
/// Returns an error if the seed data cannot be loaded or the order is refused.
pub fn ingredient_order(
    config: &PlannerConfig,
    to: &str,
    items: &[(String, String)],
    notes: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let seed = config.load_seed()?;
    print_json(&send_order(&seed, &config.hq_id, to, items, notes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakehouse_planner::OrderProblem;

    #[test]
    fn test_parse_item() {
        assert_eq!(
            parse_item("ing-001=20"),
            Ok(("ing-001".to_string(), "20".to_string()))
        );
        assert_eq!(
            parse_item(" ing-002 = 2.5 "),
            Ok(("ing-002".to_string(), "2.5".to_string()))
        );
    }

    #[test]
    fn test_parse_item_rejects_malformed() {
        assert!(parse_item("ing-001").is_err());
        assert!(parse_item("=20").is_err());
    }

    fn items(lines: &[(&str, &str)]) -> Vec<(String, String)> {
        lines
            .iter()
            .map(|(id, qty)| ((*id).to_string(), (*qty).to_string()))
            .collect()
    }

    #[test]
    fn test_send_order_deducts_source() {
        let seed = SeedData::sample().unwrap();
        let report = send_order(
            &seed,
            &LocationId::new("hq-001"),
            "st-002",
            &items(&[("ing-001", "20"), ("ing-002", "5")]),
            Some("Weekly top-up"),
        )
        .unwrap();

        assert_eq!(report.order.destination_name, "Store #2 - Westside");
        assert_eq!(report.order.lines.len(), 2);
        assert_eq!(report.order.notes.as_deref(), Some("Weekly top-up"));

        let flour = report.remaining_at_source.first().unwrap();
        assert_eq!(flour.ingredient_id, IngredientId::new("ing-001"));
        assert_eq!(flour.quantity, "480".parse::<Quantity>().unwrap());
    }

    #[test]
    fn test_send_order_to_source_is_refused() {
        let seed = SeedData::sample().unwrap();
        let kitchen = LocationId::new("ck-001");
        let err = send_order(&seed, &kitchen, "ck-001", &items(&[("ing-001", "2")]), None)
            .unwrap_err();
        assert!(matches!(
            err,
            SendError::Order(OrderError::Invalid(problems))
                if problems == vec![OrderProblem::SameAsSource(kitchen.clone())]
        ));
    }

    #[test]
    fn test_send_order_to_headquarters_is_refused() {
        let seed = SeedData::sample().unwrap();
        let hq = LocationId::new("hq-001");
        let err = send_order(&seed, &hq, "hq-001", &items(&[("ing-001", "20")]), None)
            .unwrap_err();
        assert!(matches!(
            err,
            SendError::Order(OrderError::Invalid(problems))
                if problems == vec![OrderProblem::DestinationNotServed(hq.clone())]
        ));
    }

    #[test]
    fn test_send_order_bad_quantity() {
        let seed = SeedData::sample().unwrap();
        let err = send_order(
            &seed,
            &LocationId::new("hq-001"),
            "st-002",
            &items(&[("ing-001", "-4")]),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, SendError::Order(OrderError::InvalidQuantity(_))));
    }
}
