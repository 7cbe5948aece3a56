use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::numbering::InvoiceId;
use super::types::{InvoiceTotals, LineItem};

/// The "Bill To" party of an invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub address: String,
    /// GST identification number (GSTIN).
    pub gst_number: String,
}

/// Immutable record of a submitted invoice.
///
/// Carries every figure the preview shows, so the preview never has to
/// recompute anything. Field names follow the stored record shape
/// (`clientName`, `subTotal`, `gstAmount`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSnapshot {
    pub invoice_id: InvoiceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<NaiveDate>,
    pub client_name: String,
    pub client_address: String,
    pub gst_number: String,
    /// Discount percentage.
    pub discount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_tax_rate: Option<Decimal>,
    pub items: Vec<SnapshotLine>,
    pub sub_total: Decimal,
    #[serde(rename = "gstAmount")]
    pub tax_amount: Decimal,
    pub sgst: Decimal,
    pub cgst: Decimal,
    pub discount_amount: Decimal,
    pub taxable_amount: Decimal,
    pub total_due: Decimal,
}

/// A line item together with the row figures computed at submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotLine {
    pub description: String,
    #[serde(rename = "qty")]
    pub quantity: Decimal,
    #[serde(rename = "price")]
    pub unit_price: Decimal,
    /// Effective rate used for this row.
    pub tax_rate: Decimal,
    pub base: Decimal,
    pub tax: Decimal,
    pub sgst: Decimal,
    pub cgst: Decimal,
    pub amount: Decimal,
}

impl InvoiceSnapshot {
    /// Freeze a client, its line items and their computed totals into a record.
    ///
    /// `items` and `totals.lines` are paired by position; `totals` must have
    /// been computed from `items`.
    pub fn new(
        invoice_id: InvoiceId,
        invoice_date: Option<NaiveDate>,
        client: Client,
        items: &[LineItem],
        totals: &InvoiceTotals,
        document_tax_rate: Option<Decimal>,
    ) -> Self {
        let lines = items
            .iter()
            .zip(&totals.lines)
            .map(|(item, row)| SnapshotLine {
                description: item.description.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                tax_rate: row.tax_rate,
                base: row.base,
                tax: row.tax,
                sgst: row.sgst,
                cgst: row.cgst,
                amount: row.amount,
            })
            .collect();

        Self {
            invoice_id,
            invoice_date,
            client_name: client.name,
            client_address: client.address,
            gst_number: client.gst_number,
            discount: totals.discount_percent,
            document_tax_rate,
            items: lines,
            sub_total: totals.sub_total,
            tax_amount: totals.tax_amount,
            sgst: totals.sgst,
            cgst: totals.cgst,
            discount_amount: totals.discount_amount,
            taxable_amount: totals.taxable_amount,
            total_due: totals.total_due(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compute_totals;
    use rust_decimal_macros::dec;

    #[test]
    fn snapshot_carries_row_and_invoice_figures() {
        let items = vec![
            LineItem::new("Pens", dec!(1), dec!(50)).with_tax_rate(dec!(10)),
            LineItem::new("Paper", dec!(3), dec!(20)),
        ];
        let totals = compute_totals(&items, dec!(10), Some(dec!(5)));
        let snap = InvoiceSnapshot::new(
            InvoiceId::new(42).unwrap(),
            None,
            Client {
                name: "Acme".into(),
                address: "Pune".into(),
                gst_number: "27AAAAA0000A1Z5".into(),
            },
            &items,
            &totals,
            Some(dec!(5)),
        );

        assert_eq!(snap.items.len(), 2);
        assert_eq!(snap.items[1].tax_rate, dec!(5));
        assert_eq!(snap.items[1].tax, dec!(3));
        assert_eq!(snap.sub_total, dec!(110));
        assert_eq!(snap.tax_amount, dec!(8));
        assert_eq!(snap.discount, dec!(10));
        assert_eq!(snap.discount_amount, dec!(11.8));
        assert_eq!(snap.total_due, dec!(106.2));
        assert_eq!(snap.total_due, snap.taxable_amount);
    }
}
