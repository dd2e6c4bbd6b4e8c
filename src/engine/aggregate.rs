//! Range filtering, totals and grouping
//!
//! The primitive reductions every view is built from. None of these fail:
//! empty input gives zero, undated records are left out.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::{Expense, ExpenseCategory, Money, MonthRange, Record};

/// The calendar month containing `date`
pub fn month_range(date: NaiveDate) -> MonthRange {
    MonthRange::containing(date)
}

/// Records selected by a range filter
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFilter<'a, R> {
    /// Records whose date lies in the range, in input order
    pub records: Vec<&'a R>,
    /// Records left out because their date could not be read
    pub skipped: usize,
}

impl<'a, R: Record> RangeFilter<'a, R> {
    pub fn total(&self) -> Money {
        sum(self.records.iter())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Select the records dated within `range`, inclusive at both ends
///
/// Records without a readable date are never selected; they are counted in
/// `skipped` instead.
pub fn filter_by_range<'a, R: Record>(records: &'a [R], range: &MonthRange) -> RangeFilter<'a, R> {
    let mut selected = Vec::new();
    let mut skipped = 0;

    for record in records {
        match record.date() {
            Some(ts) if range.contains(ts) => selected.push(record),
            Some(_) => {}
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        log::debug!("{} record(s) without a readable date skipped for {}", skipped, range);
    }

    RangeFilter {
        records: selected,
        skipped,
    }
}

/// Sum the amounts of a collection of records
pub fn sum<I>(records: I) -> Money
where
    I: IntoIterator,
    I::Item: Record,
{
    records.into_iter().map(|r| r.amount()).sum()
}

/// Per-day totals, keyed by calendar day
///
/// Feeds calendar shading and day tooltips. Undated records are ignored.
pub fn group_expenses_by_date<I>(records: I) -> BTreeMap<NaiveDate, Money>
where
    I: IntoIterator,
    I::Item: Record,
{
    let mut by_day: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for record in records {
        if let Some(ts) = record.date() {
            *by_day.entry(ts.date()).or_default() += record.amount();
        }
    }
    by_day
}

/// Expenses dated on the given calendar day, in input order
pub fn expenses_on(expenses: &[Expense], day: NaiveDate) -> Vec<&Expense> {
    expenses
        .iter()
        .filter(|e| e.date.map(|ts| ts.date()) == Some(day))
        .collect()
}

/// The daily list: expenses on `day` and their total
pub fn day_expenses(expenses: &[Expense], day: NaiveDate) -> (Vec<&Expense>, Money) {
    let list = expenses_on(expenses, day);
    let total = sum(list.iter());
    (list, total)
}

/// Totals per category, largest first
///
/// Takes expenses rather than any [`Record`]: only expenses carry a category.
/// Equal totals are ordered alphabetically by category name so the result
/// never depends on hash iteration order.
pub fn category_totals<'a, I>(expenses: I) -> Vec<(ExpenseCategory, Money)>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals: HashMap<ExpenseCategory, Money> = HashMap::new();
    for expense in expenses {
        *totals.entry(expense.category).or_default() += expense.amount;
    }

    let mut ranked: Vec<_> = totals.into_iter().collect();
    ranked.sort_by(|(cat_a, total_a), (cat_b, total_b)| {
        total_b
            .cmp(total_a)
            .then_with(|| cat_a.name().cmp(cat_b.name()))
    });
    ranked
}

/// The category with the largest total, if there are any expenses
pub fn top_category<'a, I>(expenses: I) -> Option<(ExpenseCategory, Money)>
where
    I: IntoIterator<Item = &'a Expense>,
{
    category_totals(expenses).into_iter().next()
}
