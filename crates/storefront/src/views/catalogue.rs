//! Catalogue listing renderer.

use lectio_core::{Catalogue, Product};

use super::{Containers, asset_href, detail_href, price_label};

/// Card data shared by the catalogue grid and the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price_label: String,
    pub detail_href: String,
    /// Download link for free items; priced items get an add-to-cart action instead.
    pub download_href: Option<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            image: asset_href(&product.image),
            price_label: price_label(&product.price),
            detail_href: detail_href(product),
            download_href: product.is_free().then(|| asset_href(&product.file)),
        }
    }
}

/// One category heading and its cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub name: String,
    pub cards: Vec<ProductCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueView {
    pub sections: Vec<CategorySection>,
}

/// Render the catalogue grouped by category.
///
/// Independent of cart state. Returns `None` if the page has no
/// `products-container`.
#[must_use]
pub fn render_catalogue(containers: &Containers, catalogue: &Catalogue) -> Option<CatalogueView> {
    if !containers.products {
        return None;
    }

    let sections = catalogue
        .by_category()
        .into_iter()
        .map(|(category, products)| CategorySection {
            name: category.to_string(),
            cards: products.into_iter().map(ProductCard::from).collect(),
        })
        .collect();

    Some(CatalogueView { sections })
}
