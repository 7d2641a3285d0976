//! Self-employment, federal and state tax on creator income
//!
//! Figures use the 2024 federal brackets. Federal taxable income is net
//! income less half the self-employment tax; no standard deduction or credits
//! are applied, so the result leans conservative.

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorInfo, Category, Summary};
use crate::choices::{Choice, FilingStatus, StateTaxLevel};
use crate::constants::{SE_INCOME_FACTOR, SE_TAX_RATE, SE_WAGE_BASE, TAX_YEAR, TaxBracket, federal_brackets, state_tax_rate};
use crate::fields::{ChoiceField, Field, NumberField, Unit};
use crate::format::{format_currency, format_percent};
use crate::math::{percent_of, round_cents, round_to};
use crate::validation::{Checker, FieldErrors, Form};

const INCOME: NumberField = NumberField::currency("annualIncome", "Annual income", 1.0, 100_000_000.0);
const EXPENSES: NumberField = NumberField::currency("businessExpenses", "Business expenses", 0.0, 100_000_000.0);
const FILING_STATUS: ChoiceField = ChoiceField::of::<FilingStatus>("filingStatus", "Filing status");
const STATE: ChoiceField = ChoiceField::of::<StateTaxLevel>("state", "State tax level");

static INFO: CalculatorInfo = CalculatorInfo {
    slug: "creator-tax",
    name: "Creator Tax Calculator",
    category: Category::Tax,
    description: "Estimate self-employment, federal and state tax on creator income.",
    fields: &[
        Field::Number(INCOME),
        Field::Number(EXPENSES),
        Field::Choice(FILING_STATUS),
        Field::Choice(STATE),
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxInput {
    pub annual_income: f64,
    pub business_expenses: f64,
    pub filing_status: FilingStatus,
    pub state: StateTaxLevel,
}

/// Income taxed within one bracket
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketSlice {
    /// Percent
    pub rate: f64,
    pub taxable: f64,
    pub tax: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    pub tax_year: i32,
    pub net_income: f64,
    pub self_employment_tax: f64,
    pub federal_taxable: f64,
    pub federal_tax: f64,
    pub state_tax: f64,
    pub total_tax: f64,
    pub effective_tax_rate: f64,
    pub marginal_rate: f64,
    pub quarterly_payment: f64,
    pub take_home: f64,
    pub brackets: Vec<BracketSlice>,
}

/// Walk the marginal brackets, taxing each slice of income at its own rate
pub fn bracket_slices(taxable: f64, brackets: &[TaxBracket]) -> Vec<BracketSlice> {
    let mut slices = Vec::new();
    let mut lower = 0.0;
    for bracket in brackets {
        if taxable <= lower {
            break;
        }
        let portion = taxable.min(bracket.max) - lower;
        slices.push(BracketSlice {
            rate: round_to(bracket.rate * 100.0, 2),
            taxable: round_cents(portion),
            tax: portion * bracket.rate,
        });
        lower = bracket.max;
    }
    slices
}

pub struct CreatorTax;

impl Calculator for CreatorTax {
    type Input = TaxInput;
    type Output = TaxResult;

    fn info() -> &'static CalculatorInfo {
        &INFO
    }

    fn validate(form: &Form) -> Result<TaxInput, FieldErrors> {
        let mut check = Checker::new(form);
        let annual_income = check.number(&INCOME);
        let business_expenses = check.number(&EXPENSES);
        let filing_status = check.choice::<FilingStatus>(&FILING_STATUS);
        let state = check.choice::<StateTaxLevel>(&STATE);
        check.not_exceeding(&EXPENSES, business_expenses, annual_income, "annual income");
        check.finish(|| {
            Some(TaxInput {
                annual_income: annual_income?,
                business_expenses: business_expenses?,
                filing_status: filing_status?,
                state: state?,
            })
        })
    }

    fn calculate(input: &TaxInput) -> TaxResult {
        let net_income = (input.annual_income - input.business_expenses).max(0.0);
        let self_employment_tax = round_cents((net_income * SE_INCOME_FACTOR).min(SE_WAGE_BASE) * SE_TAX_RATE);
        let federal_taxable = round_cents((net_income - self_employment_tax / 2.0).max(0.0));

        let mut brackets = bracket_slices(federal_taxable, federal_brackets(input.filing_status));
        let federal_tax = round_cents(brackets.iter().map(|slice| slice.tax).sum());
        for slice in &mut brackets {
            slice.tax = round_cents(slice.tax);
        }
        let marginal_rate = brackets.last().map_or(0.0, |slice| slice.rate);

        let state_tax = round_cents(net_income * state_tax_rate(input.state));
        let total_tax = round_cents(self_employment_tax + federal_tax + state_tax);

        TaxResult {
            tax_year: TAX_YEAR,
            net_income: round_cents(net_income),
            self_employment_tax,
            federal_taxable,
            federal_tax,
            state_tax,
            total_tax,
            effective_tax_rate: round_to(percent_of(total_tax, input.annual_income), 2),
            marginal_rate,
            quarterly_payment: round_cents(total_tax / 4.0),
            take_home: round_cents(net_income - total_tax),
            brackets,
        }
    }

    fn interpret(input: &TaxInput, result: &TaxResult) -> String {
        let opening = format!(
            "On {} of net income you would owe about {} in {} tax: {} self-employment, {} federal and {} state.",
            format_currency(result.net_income),
            format_currency(result.total_tax),
            result.tax_year,
            format_currency(result.self_employment_tax),
            format_currency(result.federal_tax),
            format_currency(result.state_tax),
        );
        let rates = format!(
            "That is an effective rate of {} of gross income, with a top federal bracket of {} as {}.",
            format_percent(result.effective_tax_rate, 1),
            format_percent(result.marginal_rate, 0),
            input.filing_status.label().to_lowercase(),
        );
        let advice = if result.total_tax > 0.0 {
            format!(
                "Set aside {} each quarter for estimated payments, leaving {} to take home.",
                format_currency(result.quarterly_payment),
                format_currency(result.take_home),
            )
        } else {
            "No tax is due on this income.".to_string()
        };
        format!("{opening} {rates} {advice} This is an estimate; confirm with a tax professional.")
    }

    fn summarize(result: &TaxResult) -> Summary {
        Summary::new(result.total_tax, Unit::Currency)
            .metric("netIncome", "Net income", result.net_income, Unit::Currency)
            .metric("selfEmploymentTax", "Self-employment tax", result.self_employment_tax, Unit::Currency)
            .metric("federalTax", "Federal income tax", result.federal_tax, Unit::Currency)
            .metric("stateTax", "State income tax", result.state_tax, Unit::Currency)
            .metric("effectiveTaxRate", "Effective tax rate", result.effective_tax_rate, Unit::Percent)
            .metric("marginalRate", "Marginal federal rate", result.marginal_rate, Unit::Percent)
            .metric("quarterlyPayment", "Quarterly payment", result.quarterly_payment, Unit::Currency)
            .metric("takeHome", "Take-home pay", result.take_home, Unit::Currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> TaxInput {
        TaxInput {
            annual_income: 100_000.0,
            business_expenses: 20_000.0,
            filing_status: FilingStatus::Single,
            state: StateTaxLevel::Medium,
        }
    }

    #[test]
    fn test_single_filer_medium_state() {
        let result = CreatorTax::calculate(&input());
        assert_eq!(result.net_income, 80_000.0);
        assert_eq!(result.self_employment_tax, 11_303.64);
        assert_eq!(result.federal_taxable, 74_348.18);
        assert_eq!(result.federal_tax, 11_409.6);
        assert_eq!(result.state_tax, 4_000.0);
        assert_eq!(result.total_tax, 26_713.24);
        assert_eq!(result.effective_tax_rate, 26.71);
        assert_eq!(result.marginal_rate, 22.0);
        assert_eq!(result.quarterly_payment, 6_678.31);
        assert_eq!(result.take_home, 53_286.76);
    }

    #[test]
    fn test_bracket_walk() {
        let slices = bracket_slices(74_348.18, federal_brackets(FilingStatus::Single));
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].taxable, 11_600.0);
        assert_eq!(slices[1].taxable, 35_550.0);
        assert_eq!(slices[2].taxable, 27_198.18);
        assert!(bracket_slices(0.0, FLAT).is_empty());
    }

    const FLAT: &[TaxBracket] = &[TaxBracket { max: f64::INFINITY, rate: 0.1 }];

    #[test]
    fn test_wage_base_caps_self_employment_tax() {
        let result = CreatorTax::calculate(&TaxInput {
            annual_income: 1_000_000.0,
            business_expenses: 0.0,
            filing_status: FilingStatus::MarriedJoint,
            state: StateTaxLevel::None,
        });
        assert_eq!(result.self_employment_tax, 25_795.8);
        assert_eq!(result.state_tax, 0.0);
        assert_eq!(result.marginal_rate, 37.0);
    }

    #[test]
    fn test_expenses_cannot_exceed_income() {
        let form = Form::new()
            .with("annualIncome", 50_000)
            .with("businessExpenses", 60_000)
            .with("filingStatus", "single")
            .with("state", "none");
        let errors = CreatorTax::validate(&form).unwrap_err();
        assert_eq!(errors.get("businessExpenses"), Some("Business expenses cannot exceed annual income"));
    }

    #[test]
    fn test_lower_brackets_for_joint_filers() {
        let single = CreatorTax::calculate(&input());
        let joint = CreatorTax::calculate(&TaxInput {
            filing_status: FilingStatus::MarriedJoint,
            ..input()
        });
        assert!(joint.federal_tax < single.federal_tax);
        assert_eq!(joint.self_employment_tax, single.self_employment_tax);
    }
}
