// Fixed customer and product identifier pools

use rand::Rng;

use crate::value_objects::{CustomerId, ProductId};

#[derive(Debug, Clone)]
pub struct Catalog {
    customers: Vec<CustomerId>,
    products: Vec<ProductId>,
}

impl Catalog {
    pub fn new(customer_count: u16, product_count: u16) -> Self {
        Self {
            customers: (1..=customer_count).map(CustomerId::numbered).collect(),
            products: (1..=product_count).map(ProductId::numbered).collect(),
        }
    }

    pub fn customers(&self) -> &[CustomerId] {
        &self.customers
    }

    pub fn products(&self) -> &[ProductId] {
        &self.products
    }

    /// Panics on an empty pool; settings validation keeps both pools non-empty.
    pub fn pick_customer<R: Rng + ?Sized>(&self, rng: &mut R) -> CustomerId {
        self.customers[rng.random_range(0..self.customers.len())].clone()
    }

    pub fn pick_product<R: Rng + ?Sized>(&self, rng: &mut R) -> ProductId {
        self.products[rng.random_range(0..self.products.len())].clone()
    }
}
