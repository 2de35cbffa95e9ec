//! Statement generation and plain-text rendering.

use core::fmt::Write as _;

use serde::Serialize;

use theater_core::{DomainError, DomainResult, Money, PlayId};

use crate::invoice::Invoice;
use crate::play::Catalog;
use crate::pricing::PricingRules;

/// Line terminator used for every line of a rendered statement.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// One billed performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementLine {
    pub play_id: PlayId,
    pub play_name: String,
    pub audience: u32,
    pub amount: Money,
    pub volume_credits: u64,
}

/// Priced invoice, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    pub customer: String,
    /// In invoice order.
    pub lines: Vec<StatementLine>,
    pub total_amount: Money,
    pub volume_credits: u64,
}

impl Statement {
    /// Render the customer-facing text statement.
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut impl core::fmt::Write) -> core::fmt::Result {
        write!(out, "Statement for {}{LINE_ENDING}", self.customer)?;
        for line in &self.lines {
            write!(
                out,
                "  {}: {} ({} seats){LINE_ENDING}",
                line.play_name, line.amount, line.audience
            )?;
        }
        write!(out, "Amount owed is {}{LINE_ENDING}", self.total_amount)?;
        write!(out, "You earned {} credits{LINE_ENDING}", self.volume_credits)
    }
}

impl core::fmt::Display for Statement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.write_plain(f)
    }
}

/// Prices invoices against a play catalog.
///
/// Holds only the (immutable) pricing rules, so one generator can be shared
/// freely across threads; inputs are only ever borrowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatementGenerator {
    rules: PricingRules,
}

impl StatementGenerator {
    pub fn new(rules: PricingRules) -> DomainResult<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    /// Price every performance and aggregate the totals.
    ///
    /// Fails on the first performance whose play is missing from the catalog
    /// or whose category has no fee formula; no partial statement is returned.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(customer = invoice.customer(), performances = invoice.performances().len())
    )]
    pub fn statement(&self, invoice: &Invoice, catalog: &Catalog) -> DomainResult<Statement> {
        let mut lines = Vec::with_capacity(invoice.performances().len());
        let mut total_amount = Money::ZERO;
        let mut volume_credits: u64 = 0;

        for performance in invoice.performances() {
            let play = catalog.resolve(performance.play_id())?;
            let amount = self
                .rules
                .amount_for(play.category(), performance.audience())?;
            let credits = self
                .rules
                .volume_credits_for(play.category(), performance.audience());

            tracing::debug!(
                play_id = %performance.play_id(),
                category = %play.category(),
                audience = performance.audience(),
                amount_cents = amount.cents(),
                credits,
                "priced performance"
            );

            total_amount = total_amount.checked_add(amount)?;
            volume_credits = volume_credits
                .checked_add(credits)
                .ok_or_else(|| DomainError::invariant("volume credit overflow"))?;

            lines.push(StatementLine {
                play_id: performance.play_id().clone(),
                play_name: play.name().to_owned(),
                audience: performance.audience(),
                amount,
                volume_credits: credits,
            });
        }

        tracing::info!(
            customer = invoice.customer(),
            lines = lines.len(),
            total_cents = total_amount.cents(),
            volume_credits,
            "statement generated"
        );

        Ok(Statement {
            customer: invoice.customer().to_owned(),
            lines,
            total_amount,
            volume_credits,
        })
    }

    /// Price the invoice and render it as text.
    pub fn generate(&self, invoice: &Invoice, catalog: &Catalog) -> DomainResult<String> {
        self.statement(invoice, catalog)
            .map(|statement| statement.render_plain())
    }
}

/// Render the statement for `invoice` under the standard pricing rules.
pub fn generate(invoice: &Invoice, catalog: &Catalog) -> DomainResult<String> {
    StatementGenerator::default().generate(invoice, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::Performance;
    use crate::play::Play;

    fn catalog() -> Catalog {
        Catalog::from_plays([
            Play::new("hamlet", "Hamlet", "tragedy"),
            Play::new("as-like", "As You Like It", "comedy"),
            Play::new("othello", "Othello", "tragedy"),
        ])
        .unwrap()
    }

    fn lines(parts: &[&str]) -> String {
        parts.iter().map(|p| format!("{p}{LINE_ENDING}")).collect()
    }

    #[test]
    fn empty_invoice_owes_nothing() {
        let invoice = Invoice::new("Nobody", Vec::new());
        let text = generate(&invoice, &catalog()).unwrap();
        assert_eq!(
            text,
            lines(&[
                "Statement for Nobody",
                "Amount owed is $0.00",
                "You earned 0 credits",
            ])
        );
    }

    #[test]
    fn single_tragedy_over_threshold() {
        let invoice = Invoice::new("Solo", vec![Performance::new("othello", 40)]);
        let statement = StatementGenerator::default()
            .statement(&invoice, &catalog())
            .unwrap();

        assert_eq!(statement.total_amount, Money::from_cents(50_000));
        assert_eq!(statement.volume_credits, 10);
        assert_eq!(
            statement.render_plain(),
            lines(&[
                "Statement for Solo",
                "  Othello: $500.00 (40 seats)",
                "Amount owed is $500.00",
                "You earned 10 credits",
            ])
        );
    }

    #[test]
    fn display_matches_plain_rendering() {
        let invoice = Invoice::new("BigCo", vec![Performance::new("as-like", 35)]);
        let statement = StatementGenerator::default()
            .statement(&invoice, &catalog())
            .unwrap();
        assert_eq!(statement.to_string(), statement.render_plain());
    }

    #[test]
    fn unrecognized_category_aborts_generation() {
        let catalog = Catalog::from_plays([
            Play::new("hamlet", "Hamlet", "tragedy"),
            Play::new("noises-off", "Noises Off", "farce"),
        ])
        .unwrap();
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("noises-off", 20),
            ],
        );

        let err = generate(&invoice, &catalog).unwrap_err();
        assert_eq!(err, DomainError::unrecognized_category("farce"));
    }

    #[test]
    fn unknown_play_aborts_generation() {
        let invoice = Invoice::new("BigCo", vec![Performance::new("macbeth", 10)]);
        let err = generate(&invoice, &catalog()).unwrap_err();
        assert_eq!(err, DomainError::unknown_play(PlayId::new("macbeth")));
    }

    #[test]
    fn custom_rules_change_prices() {
        let rules = PricingRules {
            tragedy_base_amount: 10_000,
            ..PricingRules::STANDARD
        };
        let generator = StatementGenerator::new(rules).unwrap();
        let invoice = Invoice::new("Cheap", vec![Performance::new("hamlet", 10)]);
        let statement = generator.statement(&invoice, &catalog()).unwrap();
        assert_eq!(statement.total_amount, Money::from_cents(10_000));
    }

    #[test]
    fn generator_rejects_invalid_rules() {
        let rules = PricingRules {
            comedy_extra_volume_factor: 0,
            ..PricingRules::STANDARD
        };
        assert!(matches!(
            StatementGenerator::new(rules),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn statement_serializes_amounts_as_cents() {
        let invoice = Invoice::new("Solo", vec![Performance::new("othello", 40)]);
        let statement = StatementGenerator::default()
            .statement(&invoice, &catalog())
            .unwrap();
        let value = serde_json::to_value(&statement).unwrap();
        assert_eq!(value["total_amount"], 50_000);
        assert_eq!(value["lines"][0]["play_id"], "othello");
        assert_eq!(value["lines"][0]["volume_credits"], 10);
    }
}
