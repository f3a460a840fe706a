pub mod error;
pub mod flatten;
pub mod jsonld;
pub mod meta;
pub mod page;
pub mod product;
pub mod serp;

pub use error::ScraperError;
pub use flatten::{flatten, FlatRecord};
pub use jsonld::find_typed_node;
pub use meta::extract_meta_tags;
pub use page::PageClient;
pub use product::{extract_product, filter_record, scrape_product_page};
pub use serp::{extract_result_urls, SerpClient};
