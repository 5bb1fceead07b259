//! Loan amortization
//!
//! Projects how long a loan takes to pay off at its current payment, how
//! much interest that costs, and when the last payment lands.
//!
//! With a monthly rate `r`, balance `B` and payment `P`:
//!
//! ```text
//! r == 0:  months = ceil(B / P)
//! r >  0:  months = ceil(-ln(1 - B*r/P) / ln(1 + r))     requires P > B*r
//! ```

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{add_months, non_negative, LoanId};

use crate::error::FinanceError;

/// Annual percentage rate to monthly decimal rate divisor (12 months x 100%)
const MONTHLY_RATE_DIVISOR: Decimal = dec!(1200);

/// The facts needed to project a loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanFacts {
    pub id: LoanId,
    /// Original amount borrowed
    pub principal: Decimal,
    pub remaining_balance: Decimal,
    pub monthly_payment: Decimal,
    /// Annual interest rate as a percentage (5 for 5%)
    pub annual_interest_rate_percent: Decimal,
}

impl LoanFacts {
    /// Creates loan facts with a fresh identifier
    pub fn new(
        principal: Decimal,
        remaining_balance: Decimal,
        monthly_payment: Decimal,
        annual_interest_rate_percent: Decimal,
    ) -> Self {
        Self {
            id: LoanId::new_v7(),
            principal,
            remaining_balance,
            monthly_payment,
            annual_interest_rate_percent,
        }
    }

    /// Checks the loan facts
    ///
    /// # Errors
    ///
    /// Returns `FinanceError::InvalidInput` if principal or payment is not
    /// positive, the balance is outside [0, principal], or the rate is
    /// outside [0, 100].
    pub fn validate(&self) -> Result<(), FinanceError> {
        if self.principal <= Decimal::ZERO {
            return Err(FinanceError::invalid_input(format!(
                "principal must be positive, got {}",
                self.principal
            )));
        }
        if self.monthly_payment <= Decimal::ZERO {
            return Err(FinanceError::invalid_input(format!(
                "monthly payment must be positive, got {}",
                self.monthly_payment
            )));
        }
        if self.remaining_balance < Decimal::ZERO || self.remaining_balance > self.principal {
            return Err(FinanceError::invalid_input(format!(
                "remaining balance {} must be within [0, {}]",
                self.remaining_balance, self.principal
            )));
        }
        if self.annual_interest_rate_percent < Decimal::ZERO
            || self.annual_interest_rate_percent > dec!(100)
        {
            return Err(FinanceError::invalid_input(format!(
                "annual interest rate {}% must be within [0, 100]",
                self.annual_interest_rate_percent
            )));
        }
        Ok(())
    }
}

/// Projected payoff of a loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanProjection {
    pub loan_id: LoanId,
    pub months_remaining: u32,
    /// Interest still to be paid at the current payment, never negative
    pub total_interest: Decimal,
    /// Sum of the remaining payments
    pub total_paid: Decimal,
    pub payoff_date: NaiveDate,
    /// Share of the principal already repaid, as a percentage
    pub percent_repaid: Decimal,
    /// Interest accruing on the balance this month
    pub monthly_interest: Decimal,
}

/// Months needed to pay off `balance` at `payment` per month
///
/// # Errors
///
/// * `FinanceError::InvalidInput` if `payment` is not positive, or `balance`
///   or the rate is negative
/// * `FinanceError::InsufficientPayment` if the payment does not exceed the
///   interest accruing each month
pub fn months_to_payoff(
    balance: Decimal,
    payment: Decimal,
    annual_interest_rate_percent: Decimal,
) -> Result<u32, FinanceError> {
    if payment <= Decimal::ZERO {
        return Err(FinanceError::invalid_input(format!(
            "monthly payment must be positive, got {}",
            payment
        )));
    }
    if balance < Decimal::ZERO {
        return Err(FinanceError::invalid_input(format!(
            "balance must not be negative, got {}",
            balance
        )));
    }
    if annual_interest_rate_percent < Decimal::ZERO {
        return Err(FinanceError::invalid_input(format!(
            "annual interest rate must not be negative, got {}%",
            annual_interest_rate_percent
        )));
    }
    if balance.is_zero() {
        return Ok(0);
    }

    let monthly_rate = annual_interest_rate_percent / MONTHLY_RATE_DIVISOR;
    let months = if monthly_rate.is_zero() {
        (balance / payment).ceil()
    } else {
        let interest = minimum_amortizing_payment(balance, annual_interest_rate_percent);
        if payment <= interest {
            return Err(FinanceError::InsufficientPayment { payment, interest });
        }

        let remaining_fraction = Decimal::ONE - interest / payment;
        let numerator = remaining_fraction
            .checked_ln()
            .ok_or_else(|| FinanceError::Calculation(format!("ln({}) undefined", remaining_fraction)))?;
        let denominator = (Decimal::ONE + monthly_rate)
            .checked_ln()
            .ok_or_else(|| FinanceError::Calculation(format!("ln(1 + {}) undefined", monthly_rate)))?;

        (-numerator / denominator).ceil()
    };

    months
        .to_u32()
        .ok_or_else(|| FinanceError::Calculation(format!("{} months does not fit a payoff term", months)))
}

/// Interest accruing on `balance` in one month
///
/// A payment at or below this never reduces the balance.
pub fn minimum_amortizing_payment(balance: Decimal, annual_interest_rate_percent: Decimal) -> Decimal {
    balance * annual_interest_rate_percent / MONTHLY_RATE_DIVISOR
}

/// Projects the payoff of a loan from `as_of`
///
/// # Errors
///
/// Returns `FinanceError::InvalidInput` for invalid loan facts,
/// `FinanceError::InsufficientPayment` when the payment never amortizes the
/// balance, and `FinanceError::Core` if the payoff date overflows the
/// calendar.
pub fn amortize(loan: &LoanFacts, as_of: NaiveDate) -> Result<LoanProjection, FinanceError> {
    loan.validate()?;

    let months_remaining = months_to_payoff(
        loan.remaining_balance,
        loan.monthly_payment,
        loan.annual_interest_rate_percent,
    )?;

    let total_paid = Decimal::from(months_remaining) * loan.monthly_payment;
    let total_interest = non_negative(total_paid - loan.remaining_balance);
    let payoff_date = add_months(as_of, months_remaining)?;
    let percent_repaid = (loan.principal - loan.remaining_balance) / loan.principal * dec!(100);
    let monthly_interest = minimum_amortizing_payment(loan.remaining_balance, loan.annual_interest_rate_percent);

    tracing::debug!(
        loan_id = %loan.id,
        months_remaining,
        %total_interest,
        %payoff_date,
        "Projected loan payoff"
    );

    Ok(LoanProjection {
        loan_id: loan.id,
        months_remaining,
        total_interest,
        total_paid,
        payoff_date,
        percent_repaid,
        monthly_interest,
    })
}
