//! Demo product fixtures.

use karo_store::ProductRecord;
use karo_types::{Platform, ProductId, RebateAmount};

/// The demo catalog: five offers across four platforms, rebates ranging
/// from partial to full cashback.
pub fn demo_products() -> Vec<ProductRecord> {
    vec![
        ProductRecord {
            id: ProductId::new("1"),
            name: "Ergonomic Wireless Mouse".into(),
            description: "Reduce wrist strain with this vertical ergonomic mouse. \
                          Features adjustable DPI and silent clicking mechanism."
                .into(),
            price: RebateAmount::from_rupees(2499),
            rebate: RebateAmount::from_rupees(2499),
            image_url: "https://picsum.photos/400/400?random=1".into(),
            platform: Platform::Amazon,
            purchase_url: "https://www.amazon.in/s?k=ergonomic+mouse".into(),
            category: "Electronics".into(),
            remaining: 12,
        },
        ProductRecord {
            id: ProductId::new("2"),
            name: "Organic Vitamin C Serum".into(),
            description: "Brighten your skin with our 100% organic, vegan Vitamin C serum. \
                          Includes Hyaluronic Acid and Vitamin E."
                .into(),
            price: RebateAmount::from_rupees(1499),
            rebate: RebateAmount::from_rupees(1499),
            image_url: "https://picsum.photos/400/400?random=2".into(),
            platform: Platform::Shopify,
            purchase_url: "https://shopify.in".into(),
            category: "Beauty".into(),
            remaining: 5,
        },
        ProductRecord {
            id: ProductId::new("3"),
            name: "Stainless Steel Water Bottle".into(),
            description: "Double-walled vacuum insulated water bottle. Keeps drinks cold \
                          for 24 hours or hot for 12 hours."
                .into(),
            price: RebateAmount::from_rupees(999),
            rebate: RebateAmount::from_rupees(699),
            image_url: "https://picsum.photos/400/400?random=3".into(),
            platform: Platform::Amazon,
            purchase_url: "https://www.amazon.in/s?k=water+bottle".into(),
            category: "Home & Kitchen".into(),
            remaining: 45,
        },
        ProductRecord {
            id: ProductId::new("4"),
            name: "Bamboo Drawer Organizer".into(),
            description: "Expandable bamboo cutlery tray / drawer organizer. Perfect for \
                          kitchen, office, or bathroom storage."
                .into(),
            price: RebateAmount::from_rupees(2999),
            rebate: RebateAmount::from_rupees(2999),
            image_url: "https://picsum.photos/400/400?random=4".into(),
            platform: Platform::Walmart,
            purchase_url: "https://www.walmart.com/search?q=bamboo+drawer".into(),
            category: "Home & Kitchen".into(),
            remaining: 2,
        },
        ProductRecord {
            id: ProductId::new("5"),
            name: "Noise Cancelling Headphones".into(),
            description: "Over-ear bluetooth headphones with active noise cancellation. \
                          30-hour battery life."
                .into(),
            price: RebateAmount::from_rupees(4999),
            rebate: RebateAmount::from_rupees(3500),
            image_url: "https://picsum.photos/400/400?random=5".into(),
            platform: Platform::Amazon,
            purchase_url: "https://www.amazon.in/s?k=headphones".into(),
            category: "Electronics".into(),
            remaining: 8,
        },
    ]
}
