//! Fee and volume-credit rules per play category.
//!
//! Amounts are in cents. Every tunable number lives in [`PricingRules`]; the
//! standard values are also exported as constants for callers that only need
//! one of them (e.g. boundary tests).

use serde::{Deserialize, Serialize};

use theater_core::{DomainError, DomainResult, Money};

use crate::invoice::Performance;
use crate::play::{Play, PlayCategory};

pub const TRAGEDY_BASE_AMOUNT: u64 = 40_000;
pub const TRAGEDY_AUDIENCE_THRESHOLD: u32 = 30;
pub const TRAGEDY_EXTRA_PER_SEAT: u64 = 1_000;

pub const COMEDY_BASE_AMOUNT: u64 = 30_000;
pub const COMEDY_AUDIENCE_THRESHOLD: u32 = 20;
pub const COMEDY_OVER_CAPACITY_AMOUNT: u64 = 10_000;
pub const COMEDY_OVER_CAPACITY_PER_PERSON: u64 = 500;
pub const COMEDY_AMOUNT_PER_AUDIENCE: u64 = 300;

pub const BASE_VOLUME_CREDIT_THRESHOLD: u32 = 30;
pub const COMEDY_EXTRA_VOLUME_FACTOR: u32 = 5;

/// Pricing and loyalty parameters.
///
/// Deserializing fills absent fields from [`PricingRules::STANDARD`], so a
/// rules file only needs the values it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRules {
    pub tragedy_base_amount: u64,
    pub tragedy_audience_threshold: u32,
    pub tragedy_extra_per_seat: u64,
    pub comedy_base_amount: u64,
    pub comedy_audience_threshold: u32,
    pub comedy_over_capacity_amount: u64,
    pub comedy_over_capacity_per_person: u64,
    pub comedy_amount_per_audience: u64,
    pub base_volume_credit_threshold: u32,
    /// Comedy earns one bonus credit per this many attendees. Must be > 0.
    pub comedy_extra_volume_factor: u32,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl PricingRules {
    pub const STANDARD: PricingRules = PricingRules {
        tragedy_base_amount: TRAGEDY_BASE_AMOUNT,
        tragedy_audience_threshold: TRAGEDY_AUDIENCE_THRESHOLD,
        tragedy_extra_per_seat: TRAGEDY_EXTRA_PER_SEAT,
        comedy_base_amount: COMEDY_BASE_AMOUNT,
        comedy_audience_threshold: COMEDY_AUDIENCE_THRESHOLD,
        comedy_over_capacity_amount: COMEDY_OVER_CAPACITY_AMOUNT,
        comedy_over_capacity_per_person: COMEDY_OVER_CAPACITY_PER_PERSON,
        comedy_amount_per_audience: COMEDY_AMOUNT_PER_AUDIENCE,
        base_volume_credit_threshold: BASE_VOLUME_CREDIT_THRESHOLD,
        comedy_extra_volume_factor: COMEDY_EXTRA_VOLUME_FACTOR,
    };

    pub fn validate(&self) -> DomainResult<()> {
        if self.comedy_extra_volume_factor == 0 {
            return Err(DomainError::validation(
                "comedy_extra_volume_factor must be positive",
            ));
        }
        Ok(())
    }

    /// Fee for one performance of a play in `category`.
    pub fn amount_for(&self, category: &PlayCategory, audience: u32) -> DomainResult<Money> {
        match category {
            PlayCategory::Tragedy => {
                let mut amount = Money::from_cents(self.tragedy_base_amount);
                if audience > self.tragedy_audience_threshold {
                    let extra_seats = u64::from(audience - self.tragedy_audience_threshold);
                    amount = amount.checked_add(
                        Money::from_cents(self.tragedy_extra_per_seat).checked_mul(extra_seats)?,
                    )?;
                }
                Ok(amount)
            }
            PlayCategory::Comedy => {
                let mut amount = Money::from_cents(self.comedy_base_amount);
                if audience > self.comedy_audience_threshold {
                    let extra_people = u64::from(audience - self.comedy_audience_threshold);
                    amount = amount
                        .checked_add(Money::from_cents(self.comedy_over_capacity_amount))?
                        .checked_add(
                            Money::from_cents(self.comedy_over_capacity_per_person)
                                .checked_mul(extra_people)?,
                        )?;
                }
                amount.checked_add(
                    Money::from_cents(self.comedy_amount_per_audience)
                        .checked_mul(u64::from(audience))?,
                )
            }
            PlayCategory::Unrecognized(other) => {
                Err(DomainError::unrecognized_category(other.as_str()))
            }
        }
    }

    /// Loyalty credits for one performance. Never fails; unrecognized
    /// categories earn the base credits only.
    pub fn volume_credits_for(&self, category: &PlayCategory, audience: u32) -> u64 {
        let mut credits = u64::from(audience.saturating_sub(self.base_volume_credit_threshold));
        if *category == PlayCategory::Comedy {
            credits += u64::from(
                audience
                    .checked_div(self.comedy_extra_volume_factor)
                    .unwrap_or(0),
            );
        }
        credits
    }
}

/// Fee for `performance` of `play` under the standard rules.
pub fn amount_for(play: &Play, performance: &Performance) -> DomainResult<Money> {
    PricingRules::STANDARD.amount_for(play.category(), performance.audience())
}

/// Volume credits for `performance` of `play` under the standard rules.
pub fn volume_credits_for(play: &Play, performance: &Performance) -> u64 {
    PricingRules::STANDARD.volume_credits_for(play.category(), performance.audience())
}
