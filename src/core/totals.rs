use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::{InvoiceTotals, LineBreakdown, LineItem};

/// Compute all derived figures for a list of line items.
///
/// Each line is taxed at its own rate, falling back to `document_tax_rate`
/// and then to zero. The discount is a percentage of the tax-inclusive
/// amount. Nothing is rounded here; see [`super::money`] for display.
/// Figures saturate at the `Decimal` range instead of overflowing, so the
/// function is total over any parsed input.
///
/// `taxable_amount == sub_total + tax_amount - discount_amount` holds exactly
/// while `sub_total + tax_amount` fits in a `Decimal`. Past that the
/// tax-inclusive amount is pinned at `Decimal::MAX`, and the discount and
/// taxable amount are taken from that pinned value.
///
/// ```
/// use invoicegen::core::*;
/// use rust_decimal_macros::dec;
///
/// let items = [LineItem::new("Widget", dec!(2), dec!(100)).with_tax_rate(dec!(18))];
/// let totals = compute_totals(&items, dec!(0), None);
///
/// assert_eq!(totals.sub_total, dec!(200));
/// assert_eq!(totals.sgst, dec!(18));
/// assert_eq!(totals.taxable_amount, dec!(236));
/// ```
pub fn compute_totals(
    items: &[LineItem],
    discount_percent: Decimal,
    document_tax_rate: Option<Decimal>,
) -> InvoiceTotals {
    let mut sub_total = Decimal::ZERO;
    let mut tax_amount = Decimal::ZERO;
    let mut lines = Vec::with_capacity(items.len());

    for item in items {
        let line = line_breakdown(item, document_tax_rate);
        sub_total = sub_total.saturating_add(line.base);
        tax_amount = tax_amount.saturating_add(line.tax);
        lines.push(line);
    }

    let half = tax_amount / dec!(2);
    let gross = sub_total.saturating_add(tax_amount);
    let discount_amount = (discount_percent / dec!(100)).saturating_mul(gross);
    let taxable_amount = gross.saturating_sub(discount_amount);

    InvoiceTotals {
        sub_total,
        tax_amount,
        sgst: half,
        cgst: half,
        discount_percent,
        discount_amount,
        taxable_amount,
        lines,
    }
}

/// Row-level figures for a single item.
pub fn line_breakdown(item: &LineItem, document_tax_rate: Option<Decimal>) -> LineBreakdown {
    let tax_rate = item
        .tax_rate
        .or(document_tax_rate)
        .unwrap_or(Decimal::ZERO);
    let base = item.quantity.saturating_mul(item.unit_price);
    let tax = (tax_rate / dec!(100)).saturating_mul(base);
    let half = tax / dec!(2);

    LineBreakdown {
        base,
        tax_rate,
        tax,
        sgst: half,
        cgst: half,
        amount: base.saturating_add(tax),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_all_zero() {
        let t = compute_totals(&[], dec!(10), Some(dec!(18)));
        assert_eq!(t.sub_total, Decimal::ZERO);
        assert_eq!(t.tax_amount, Decimal::ZERO);
        assert_eq!(t.discount_amount, Decimal::ZERO);
        assert_eq!(t.taxable_amount, Decimal::ZERO);
        assert!(t.lines.is_empty());
    }

    #[test]
    fn line_rate_overrides_document_rate() {
        let item = LineItem::new("A", dec!(1), dec!(100)).with_tax_rate(dec!(5));
        let line = line_breakdown(&item, Some(dec!(18)));
        assert_eq!(line.tax_rate, dec!(5));
        assert_eq!(line.tax, dec!(5));
    }

    #[test]
    fn document_rate_is_fallback() {
        let item = LineItem::new("A", dec!(1), dec!(100));
        assert_eq!(line_breakdown(&item, Some(dec!(7))).tax, dec!(7));
        assert_eq!(line_breakdown(&item, None).tax, Decimal::ZERO);
    }

    #[test]
    fn huge_inputs_saturate_instead_of_panicking() {
        let item = LineItem::new("Big", Decimal::MAX, Decimal::MAX).with_tax_rate(dec!(18));
        let t = compute_totals(&[item.clone(), item], dec!(10), None);
        assert_eq!(t.sub_total, Decimal::MAX);
        assert_eq!(t.lines[0].base, Decimal::MAX);
        assert_eq!(t.lines[0].amount, Decimal::MAX);
        assert_eq!(t.sgst, t.cgst);
        assert_eq!(t.sgst + t.cgst, t.tax_amount);

        // 10% of the pinned tax-inclusive amount, exactly
        let discount = Decimal::from_i128_with_scale(Decimal::MAX.mantissa(), 1);
        assert_eq!(t.discount_amount, discount);
        assert_eq!(t.taxable_amount, Decimal::MAX - discount);
    }

    #[test]
    fn row_amount_includes_tax() {
        let item = LineItem::new("A", dec!(3), dec!(20)).with_tax_rate(dec!(5));
        let line = line_breakdown(&item, None);
        assert_eq!(line.base, dec!(60));
        assert_eq!(line.sgst, dec!(1.5));
        assert_eq!(line.cgst, dec!(1.5));
        assert_eq!(line.amount, dec!(63));
    }
}
