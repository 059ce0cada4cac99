//! The shopping cart aggregate.

use cart_pricing::PricingClient;
use cart_types::{CartError, CartSettings, PriceSource, round_half_up};
use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Accumulated state for one product.
///
/// Total and count live in one value so a single per-key update covers
/// both: no reader can ever see a count bumped without its total, or the
/// other way round.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ProductLine {
    /// Accumulated unrounded monetary total for this product. Rounding is
    /// applied only when tax/total are derived.
    total: Decimal,
    /// Accumulated quantity. Never decreases.
    count: u32,
}

/// An in-memory shopping cart for one session.
///
/// One can add products, check how many of each product the cart holds, and
/// derive the subtotal, the tax payable, and the total payable. All
/// operations take `&self` and are safe to call from concurrent tasks.
///
/// Failures are reported as [`CartError`] values: an invalid quantity or a
/// failed price lookup surfaces to the caller and leaves the cart exactly
/// as it was.
#[derive(Debug)]
pub struct Cart<P: PriceSource> {
    settings: CartSettings,
    prices: P,
    lines: DashMap<String, ProductLine>,
}

impl Cart<PricingClient> {
    /// Creates a cart whose prices come from the HTTP pricing service at
    /// `settings.base_url()`.
    pub fn from_settings(settings: CartSettings) -> Self {
        let prices = PricingClient::new(settings.base_url());
        Self::new(settings, prices)
    }
}

impl<P: PriceSource> Cart<P> {
    /// Creates an empty cart with the given settings and price source.
    pub fn new(settings: CartSettings, prices: P) -> Self {
        Self {
            settings,
            prices,
            lines: DashMap::new(),
        }
    }

    /// The settings this cart was constructed with.
    pub fn settings(&self) -> &CartSettings {
        &self.settings
    }

    /// Adds `quantity` units of a product, resolving its unit price from
    /// the price source.
    ///
    /// The price lookup happens before any map guard is taken, so a slow
    /// lookup never blocks updates to other products. The compound update
    /// (total and count) is applied atomically for the product's key:
    /// concurrent adds of the same product cannot lose an update, and adds
    /// of different products do not contend.
    #[instrument(skip(self))]
    pub async fn add_product(
        &self,
        product_name: &str,
        quantity: i32,
    ) -> Result<&Self, CartError> {
        if quantity <= 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        let price = self.prices.fetch_price(product_name).await?;
        let added_total = Decimal::from(quantity) * price;
        let added_count = quantity as u32;

        self.lines
            .entry(product_name.to_string())
            .and_modify(|line| {
                line.total += added_total;
                line.count += added_count;
            })
            .or_insert(ProductLine {
                total: added_total,
                count: added_count,
            });

        debug!(product = product_name, quantity, %price, "product added to cart");
        Ok(self)
    }

    /// Accumulated unrounded total for a product, or 0 if never added.
    pub fn get_product_total(&self, product_name: &str) -> Decimal {
        self.lines
            .get(product_name)
            .map(|line| line.total)
            .unwrap_or(Decimal::ZERO)
    }

    /// Accumulated quantity for a product, or 0 if never added.
    pub fn get_product_count(&self, product_name: &str) -> u32 {
        self.lines
            .get(product_name)
            .map(|line| line.count)
            .unwrap_or(0)
    }

    /// Point-in-time snapshot of all product totals, sorted by name.
    pub fn get_product_totals(&self) -> Vec<(String, Decimal)> {
        let mut totals: Vec<_> = self
            .lines
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().total))
            .collect();
        totals.sort_by(|a, b| a.0.cmp(&b.0));
        totals
    }

    /// Point-in-time snapshot of all product counts, sorted by name.
    pub fn get_product_counts(&self) -> Vec<(String, u32)> {
        let mut counts: Vec<_> = self
            .lines
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().count))
            .collect();
        counts.sort_by(|a, b| a.0.cmp(&b.0));
        counts
    }

    /// Unrounded sum of all product totals.
    ///
    /// Under concurrent writes this may mix different generations of
    /// different products; each individual product's value is always a
    /// completed update.
    pub fn get_subtotal(&self) -> Decimal {
        self.lines.iter().map(|entry| entry.value().total).sum()
    }

    /// Tax on the subtotal, rounded half-up to 2 decimal places.
    pub fn get_tax_payable(&self) -> Decimal {
        round_half_up(self.get_subtotal() * self.settings.tax_rate())
    }

    /// Subtotal plus tax, rounded half-up to 2 decimal places.
    pub fn get_total_payable(&self) -> Decimal {
        round_half_up(self.get_subtotal() * (Decimal::ONE + self.settings.tax_rate()))
    }
}
