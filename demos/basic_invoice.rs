use invoicegen::core::*;
use invoicegen::preview::{PreviewOptions, PreviewState, RenderTarget, render};
use invoicegen::storage::{FileBackend, SnapshotStore};

fn main() -> Result<(), InvoiceError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Fill in the form the way a user would, one field at a time
    let mut draft = InvoiceDraft::new();
    draft
        .client_name("Acme Traders")
        .client_address("12 MG Road, Pune 411001")
        .gst_number("27ABCDE1234F1Z5")
        .discount("10");
    *draft.line_mut(0).expect("a new draft has one line") =
        DraftLine::new("Steel bolts (box)", "4", "250").tax_rate("18");
    draft.add_line_with(DraftLine::new("Delivery", "1", "150").tax_rate("5"));

    let live = draft.totals();
    println!("Invoice {} (live totals)", draft.invoice_id());
    println!("  Sub Total:      {}", money::format_amount(live.sub_total));
    println!("  SGST:           {}", money::format_amount(live.sgst));
    println!("  CGST:           {}", money::format_amount(live.cgst));
    println!("  Discount:     - {}", money::format_amount(live.discount_amount));
    println!("  Total Due:      {}", money::format_amount(live.total_due()));
    println!();

    let snapshot = draft.submit()?;

    let dir = std::env::temp_dir().join("invoicegen-demo");
    let mut store = SnapshotStore::new(FileBackend::new(&dir));
    store.save(&snapshot)?;

    // The preview reads the stored record back, never the draft
    let state = PreviewState::from(store.load()?);
    print!(
        "{}",
        render(&state, RenderTarget::Print, &PreviewOptions::default())
    );

    Ok(())
}
